//! `docs` subcommand: static quick-start documentation.

use anyhow::Result;

use smartchunk_demo::tui::Theme;
use smartchunk_demo::Config;

/// Documentation sections as (heading, body lines) pairs.
const SECTIONS: &[(&str, &[&str])] = &[
    (
        "Install",
        &["pip install -i https://test.pypi.org/simple/ smartchunk"],
    ),
    (
        "CLI",
        &[
            "smartchunk chunk docs/README.md --mode markdown --max-tokens 700 \\",
            "  --overlap 80 --min-sim 0.35 --dedupe --out out/chunks.jsonl",
        ],
    ),
    (
        "Python API",
        &[
            "from smartchunk import chunker",
            "chunks = chunker.chunk(path=\"docs/README.md\", mode=\"markdown\",",
            "                       max_tokens=700, overlap=80, min_sim=0.35, dedupe=True)",
        ],
    ),
    (
        "FAQ",
        &[
            "- Supports Markdown/HTML.",
            "- Preserves headings/lists/tables/code fences.",
            "- Outputs JSONL ready for vector DBs.",
        ],
    ),
];

pub fn handle_docs() -> Result<()> {
    let config = Config::load()?;
    let theme = Theme::from_name(&config.theme);

    println!("{}", theme.accent_text("SmartChunk Quick Start"));
    for (heading, body) in SECTIONS {
        println!();
        println!("{}", theme.accent_text(heading));
        for line in *body {
            println!("  {}", theme.primary_text(line));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_has_a_body() {
        for (heading, body) in SECTIONS {
            assert!(!heading.is_empty());
            assert!(!body.is_empty(), "{heading} has no body");
        }
    }

    #[test]
    fn docs_cover_install_and_cli() {
        let headings: Vec<&str> = SECTIONS.iter().map(|(h, _)| *h).collect();
        assert!(headings.contains(&"Install"));
        assert!(headings.contains(&"CLI"));
    }
}

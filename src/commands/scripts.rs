//! `scripts` subcommand: list the recognized demo commands.

use anyhow::Result;

use smartchunk_demo::term::ScriptKind;
use smartchunk_demo::tui::Theme;
use smartchunk_demo::Config;

pub fn handle_scripts() -> Result<()> {
    let config = Config::load()?;
    let theme = Theme::from_name(&config.theme);

    println!("{}", theme.primary_text("Scripted demo commands:"));
    println!();
    for kind in ScriptKind::ALL {
        // Pad before coloring so the escape codes don't skew the column
        println!(
            "  {} {}",
            theme.accent_text(&format!("{:<10}", kind.name())),
            kind.trigger()
        );
        println!("             {}", theme.secondary_text(kind.description()));
    }
    println!();
    println!(
        "{}",
        theme.secondary_text("Run one with: smartchunk-demo play <name>")
    );
    Ok(())
}

//! Canned demo scripts.
//!
//! Each recognized demo command plays back a fixed sequence of output
//! frames with an artificial per-frame delay, followed by a closing line.
//! Nothing here does real work: the frames are the product pitch, not
//! actual chunker output.

use std::time::Duration;

/// The prompt sentinel. A line consisting of exactly this string marks the
/// terminal as ready for input; the echoed form is `"$ <command>"`.
pub const PROMPT: &str = "$";

/// First line of a fresh transcript.
pub const BANNER: &str = "SmartChunk demo terminal. Type 'help' to see available commands.";

/// Static command list printed by `help` (immediate, no playback).
pub const HELP_LINES: &[&str] = &[
    "Available commands:",
    "  pip install smartchunk        install the package",
    "  smartchunk chunk <file>       chunk a document",
    "  smartchunk compare <file>     compare against naive chunking",
    "  clear                         reset the terminal",
    "  help                          show this list",
];

/// A scripted playback: ordered output frames, a closing line, and the
/// default delay between frames.
#[derive(Debug, Clone, Copy)]
pub struct Script {
    /// Output lines emitted one per delay tick, in order.
    pub frames: &'static [&'static str],
    /// Final line appended immediately after the last frame.
    pub closing: &'static str,
    /// Default per-frame delay (overridable via config).
    pub frame_delay: Duration,
}

/// The three scripted demo scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptKind {
    Install,
    Chunk,
    Compare,
}

const INSTALL: Script = Script {
    frames: &[
        "Collecting smartchunk",
        "  Downloading smartchunk-1.4.2-py3-none-any.whl (84 kB)",
        "Collecting tiktoken>=0.5 (from smartchunk)",
        "  Downloading tiktoken-0.6.0-cp311-manylinux_x86_64.whl (1.1 MB)",
        "Installing collected packages: tiktoken, smartchunk",
    ],
    closing: "Successfully installed smartchunk-1.4.2 tiktoken-0.6.0",
    frame_delay: Duration::from_millis(350),
};

const CHUNK: Script = Script {
    frames: &[
        "Reading document.md (38 KB)",
        "Parsing structure: 14 headings, 6 code blocks, 2 tables",
        "Scoring semantic boundaries (min similarity 0.3)",
        "Packing chunks (max 500 tokens, overlap 50)",
        "Wrote 23 chunks to chunks.jsonl",
    ],
    closing: "Done in 0.4s, avg 412 tokens/chunk, structure preserved",
    frame_delay: Duration::from_millis(450),
};

const COMPARE: Script = Script {
    frames: &[
        "Chunking with naive fixed-size splitter...",
        "Chunking with smartchunk...",
        "Indexing both corpora (3,412 passages)",
        "Running 50 retrieval queries",
        "NDCG@10     smartchunk 0.724   naive 0.527   (+37.4%)",
        "Index size  smartchunk 142 MB  naive 197 MB  (-28%)",
    ],
    closing: "smartchunk wins on 47/50 queries",
    frame_delay: Duration::from_millis(500),
};

impl ScriptKind {
    /// All scenarios in display order.
    pub const ALL: [ScriptKind; 3] = [ScriptKind::Install, ScriptKind::Chunk, ScriptKind::Compare];

    /// Short name used by the `play` subcommand.
    pub fn name(self) -> &'static str {
        match self {
            ScriptKind::Install => "install",
            ScriptKind::Chunk => "chunk",
            ScriptKind::Compare => "compare",
        }
    }

    /// Input prefix that triggers this scenario. Matching is case-sensitive
    /// and happens on the input exactly as typed.
    pub fn prefix(self) -> &'static str {
        match self {
            ScriptKind::Install => "pip install",
            ScriptKind::Chunk => "smartchunk chunk",
            ScriptKind::Compare => "smartchunk compare",
        }
    }

    /// Canonical full command, used by the injection buttons and `play`.
    pub fn trigger(self) -> &'static str {
        match self {
            ScriptKind::Install => "pip install smartchunk",
            ScriptKind::Chunk => "smartchunk chunk document.md --max-tokens 500 --format markdown",
            ScriptKind::Compare => "smartchunk compare document.md --queries 50",
        }
    }

    /// One-line description for `scripts` output.
    pub fn description(self) -> &'static str {
        match self {
            ScriptKind::Install => "simulated pip install of the smartchunk package",
            ScriptKind::Chunk => "simulated chunking run over a markdown document",
            ScriptKind::Compare => "simulated retrieval benchmark vs naive chunking",
        }
    }

    /// The scripted frames for this scenario.
    pub fn script(self) -> &'static Script {
        match self {
            ScriptKind::Install => &INSTALL,
            ScriptKind::Chunk => &CHUNK,
            ScriptKind::Compare => &COMPARE,
        }
    }

    /// Look up a scenario by its short name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.name() == name)
    }
}

//! Terminal simulator core.
//!
//! A text-console illusion: accepts line input, recognizes a fixed
//! vocabulary of demo commands, and plays back pre-scripted output with an
//! artificial per-line delay. No real work happens anywhere in here.
//!
//! The core is pure state plus an injected clock:
//! - `state`: the simulator itself (transcript, busy flag, staged input)
//! - `history`: submitted-command history with arrow-key recall
//! - `command`: input recognition (exact/prefix table)
//! - `script`: the canned scenarios and their frames
//! - `playback`: timed frame emission with generation-based cancellation
//! - `inject`: explicit handle for pushing commands in from outside

pub mod command;
pub mod history;
pub mod inject;
pub mod playback;
pub mod script;
pub mod state;

pub use command::{recognize, Command};
pub use history::History;
pub use inject::CommandInjector;
pub use playback::{Playback, Step};
pub use script::{Script, ScriptKind, BANNER, HELP_LINES, PROMPT};
pub use state::{SimOptions, TerminalSim};

//! SmartChunk demo terminal.
//!
//! A scripted terminal illusion for the SmartChunk landing demo: it accepts
//! line input, recognizes a small fixed command vocabulary, and plays back
//! canned output with an artificial per-line delay. No document is ever
//! actually chunked.
//!
//! # Layout
//!
//! - [`term`]: the simulator core (pure state, injected clock)
//! - [`tui`]: the interactive ratatui front-end
//! - [`config`]: toml settings (frame delay, theme, prompt)
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use smartchunk_demo::term::{SimOptions, TerminalSim};
//!
//! let (mut sim, injector) = TerminalSim::new(SimOptions::default());
//! let now = Instant::now();
//!
//! sim.submit("pip install smartchunk", now);
//! assert!(sim.is_busy());
//!
//! // Injected commands are dropped while busy, never queued.
//! injector.inject("help");
//! sim.poll_injected(now);
//!
//! // Time is injected; drive the playback to completion.
//! sim.tick(now + Duration::from_secs(60));
//! assert!(!sim.is_busy());
//! ```

pub mod config;
pub mod term;
pub mod tui;

pub use config::{Config, ConfigError};
pub use term::{CommandInjector, ScriptKind, SimOptions, TerminalSim};

/// Version string for `--version`: crate version, plus git SHA and build
/// date in dev builds (the `release` feature drops the SHA).
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    let date = option_env!("SMARTCHUNK_BUILD_DATE").unwrap_or("unknown");
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) => format!("{version} ({sha} {date})"),
        None => format!("{version} ({date})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_string_starts_with_crate_version() {
        assert!(version_string().starts_with(env!("CARGO_PKG_VERSION")));
    }
}

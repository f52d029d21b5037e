//! `play` subcommand: run one scripted scenario straight to stdout.
//!
//! Same frames and pacing as the interactive demo, without the TUI. Delays
//! are skipped when stdout is not a TTY (piped output should not dawdle) or
//! when `--instant` is passed. The closing line follows the last frame
//! immediately, matching the interactive playback.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use anyhow::{bail, Result};

use smartchunk_demo::term::ScriptKind;
use smartchunk_demo::tui::Theme;
use smartchunk_demo::Config;

/// Set by the Ctrl+C handler; checked between frames.
static INTERRUPTED: AtomicBool = AtomicBool::new(false);

pub fn handle_play(name: &str, instant: bool) -> Result<()> {
    let Some(kind) = ScriptKind::from_name(name) else {
        bail!(
            "unknown script '{name}' (expected one of: {})",
            ScriptKind::ALL
                .iter()
                .map(|k| k.name())
                .collect::<Vec<_>>()
                .join(", ")
        );
    };

    let config = Config::load()?;
    let theme = Theme::from_name(&config.theme);
    let delay = if instant || !atty::is(atty::Stream::Stdout) {
        Duration::ZERO
    } else {
        config.frame_delay().unwrap_or(kind.script().frame_delay)
    };

    if !delay.is_zero() {
        // May fail if a handler is already installed; playback then just
        // runs to completion on Ctrl+C like the interactive widget does.
        let _ = ctrlc::set_handler(|| INTERRUPTED.store(true, Ordering::SeqCst));
    }

    println!(
        "{} {}",
        theme.accent_text(&config.prompt),
        kind.trigger()
    );
    for frame in kind.script().frames {
        thread::sleep(delay);
        if INTERRUPTED.load(Ordering::SeqCst) {
            return Ok(());
        }
        println!("{}", theme.primary_text(frame));
    }
    println!("{}", theme.success_text(kind.script().closing));
    Ok(())
}

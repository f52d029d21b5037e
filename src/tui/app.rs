//! Interactive demo application.
//!
//! Owns the event loop: keyboard input feeds the simulator, the injection
//! channel is drained every tick, and the clock drives playback. Terminal
//! setup is a scoped `TerminalSession` guard so raw mode and the alternate
//! screen are torn down on every exit path, panics included.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

use crate::config::Config;
use crate::term::{CommandInjector, ScriptKind, SimOptions, TerminalSim};

use super::theme::Theme;
use super::ui;

/// How long the event loop waits for input before ticking playback.
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Result of processing a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep running
    Continue,
    /// Leave the demo
    Quit,
}

/// Scoped terminal takeover: raw mode + alternate screen on construction,
/// restored in `Drop`.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }

    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Run the interactive demo until the user quits (Esc or Ctrl+C).
pub fn run(config: &Config) -> Result<()> {
    let theme = Theme::from_name(&config.theme);
    let (mut sim, injector) = TerminalSim::new(SimOptions {
        prompt: config.prompt.clone(),
        frame_delay: config.frame_delay(),
    });
    let mut session = TerminalSession::new()?;

    loop {
        let now = Instant::now();
        sim.poll_injected(now);
        sim.tick(now);

        if sim.take_dirty() {
            session.draw(|frame| ui::draw(frame, &sim, &theme))?;
        }

        if event::poll(TICK_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key(key, &mut sim, &injector) == InputResult::Quit {
                        break;
                    }
                }
                Event::Resize(_, _) => sim.mark_dirty(),
                _ => {}
            }
        }
    }
    Ok(())
}

/// Route one key press to the simulator.
///
/// Plain characters (including `q`) are terminal input, not hotkeys; the
/// only ways out are Esc and Ctrl+C. F1/F2/F3 are the demo buttons: they go
/// through the injection channel, the same path an embedding caller uses.
pub fn handle_key(key: KeyEvent, sim: &mut TerminalSim, injector: &CommandInjector) -> InputResult {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,
        KeyCode::Esc => InputResult::Quit,

        KeyCode::Enter => {
            sim.submit_input(Instant::now());
            InputResult::Continue
        }
        KeyCode::Backspace => {
            sim.backspace();
            InputResult::Continue
        }
        KeyCode::Up => {
            sim.recall_previous();
            InputResult::Continue
        }
        KeyCode::Down => {
            sim.recall_next();
            InputResult::Continue
        }

        // Demo buttons
        KeyCode::F(1) => {
            injector.inject(ScriptKind::Install.trigger());
            InputResult::Continue
        }
        KeyCode::F(2) => {
            injector.inject(ScriptKind::Chunk.trigger());
            InputResult::Continue
        }
        KeyCode::F(3) => {
            injector.inject(ScriptKind::Compare.trigger());
            InputResult::Continue
        }

        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            sim.push_char(c);
            InputResult::Continue
        }

        _ => InputResult::Continue,
    }
}

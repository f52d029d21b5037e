//! The terminal simulator.
//!
//! `TerminalSim` owns all widget state: the transcript line buffer, the
//! command history, the staged input, and the in-flight playback. It is a
//! pure state machine with two states, idle and busy; every transition
//! happens on a discrete call (key, injected command, clock tick) and time
//! only ever enters through the `now` arguments, so the whole thing is
//! testable without sleeping.
//!
//! Transcript invariant: the line buffer ends with exactly one prompt line
//! whenever the simulator is idle; while a playback is appending frames the
//! prompt is absent until the closing line lands.

use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use tracing::debug;

use super::command::{recognize, Command};
use super::history::History;
use super::inject::CommandInjector;
use super::playback::{Playback, Step};
use super::script::{BANNER, HELP_LINES, PROMPT};

/// Construction options for the simulator.
#[derive(Debug, Clone)]
pub struct SimOptions {
    /// Prompt sentinel; the echoed command line is `"<prompt> <command>"`.
    pub prompt: String,
    /// Per-frame delay override; `None` uses each script's own delay.
    pub frame_delay: Option<Duration>,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            prompt: PROMPT.to_string(),
            frame_delay: None,
        }
    }
}

/// The fake terminal: transcript, history, staged input, busy playback.
#[derive(Debug)]
pub struct TerminalSim {
    lines: Vec<String>,
    history: History,
    input: String,
    playback: Option<Playback>,
    /// Transcript generation; bumped by `clear`. A playback stamped with an
    /// older generation is dead and its remaining frames never land.
    generation: u64,
    prompt: String,
    frame_delay: Option<Duration>,
    injected: Receiver<String>,
    dirty: bool,
}

impl TerminalSim {
    /// Create a simulator plus the injection handle connected to it.
    pub fn new(options: SimOptions) -> (Self, CommandInjector) {
        let (injector, injected) = CommandInjector::channel();
        let mut sim = Self {
            lines: Vec::new(),
            history: History::new(),
            input: String::new(),
            playback: None,
            generation: 0,
            prompt: options.prompt,
            frame_delay: options.frame_delay,
            injected,
            dirty: true,
        };
        sim.reset_transcript();
        (sim, injector)
    }

    // --- Accessors ---

    /// The visible transcript, oldest line first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The staged (not yet submitted) input.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// True while a scripted playback is in flight.
    pub fn is_busy(&self) -> bool {
        self.playback
            .as_ref()
            .is_some_and(|p| p.generation() == self.generation)
    }

    /// True once state changed since the last [`take_dirty`](Self::take_dirty).
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    // --- Input editing ---

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
        self.dirty = true;
    }

    pub fn backspace(&mut self) {
        if self.input.pop().is_some() {
            self.dirty = true;
        }
    }

    /// Stage the previous history entry (arrow-up).
    pub fn recall_previous(&mut self) {
        if let Some(entry) = self.history.recall_previous() {
            self.input = entry.to_string();
            self.dirty = true;
        }
    }

    /// Stage the next history entry, or empty input past the newest
    /// (arrow-down).
    pub fn recall_next(&mut self) {
        if let Some(entry) = self.history.recall_next() {
            self.input = entry.to_string();
            self.dirty = true;
        }
    }

    // --- Submission ---

    /// Submit the staged input.
    pub fn submit_input(&mut self, now: Instant) {
        let text = self.input.clone();
        self.submit(&text, now);
    }

    /// Submit a command line.
    ///
    /// Empty and whitespace-only input is ignored. While busy every command
    /// except `clear` is ignored; `clear` always goes through and cancels
    /// the in-flight playback.
    pub fn submit(&mut self, text: &str, now: Instant) {
        if text.trim().is_empty() {
            return;
        }
        let command = recognize(text);
        if command == Command::Clear {
            self.history.push(text.to_string());
            self.input.clear();
            self.reset_transcript();
            debug!("transcript cleared");
            return;
        }
        if self.is_busy() {
            debug!(input = text, "submit ignored while busy");
            return;
        }

        self.history.push(text.to_string());
        self.input.clear();
        self.echo(text);

        match command {
            // Clear returned above
            Command::Clear => {}
            Command::Help => {
                for line in HELP_LINES {
                    self.lines.push((*line).to_string());
                }
                self.push_prompt();
            }
            Command::Script(kind) => {
                let delay = self.frame_delay.unwrap_or(kind.script().frame_delay);
                self.playback = Some(Playback::new(kind, delay, now, self.generation));
                debug!(script = kind.name(), ?delay, "playback started");
            }
            Command::NotFound(token) => {
                self.lines.push(format!("{token}: command not found"));
                self.push_prompt();
            }
        }
        self.dirty = true;
    }

    /// Drain the injection channel.
    ///
    /// Idle: each payload is submitted exactly as if typed. Busy: payloads
    /// are dropped on receipt, not queued for later.
    pub fn poll_injected(&mut self, now: Instant) {
        while let Ok(command) = self.injected.try_recv() {
            if self.is_busy() {
                debug!(command = %command, "injected command dropped while busy");
            } else {
                self.submit(&command, now);
            }
        }
    }

    // --- Playback ---

    /// Advance the in-flight playback against the injected clock.
    pub fn tick(&mut self, now: Instant) {
        loop {
            let Some(playback) = self.playback.as_mut() else {
                return;
            };
            if playback.generation() != self.generation {
                // Cancelled by `clear`; drop the stale frames unseen.
                self.playback = None;
                return;
            }
            match playback.poll(now) {
                Step::Pending => return,
                Step::Frame(frame) => {
                    self.lines.push(frame.to_string());
                    self.dirty = true;
                }
                Step::Finished(closing) => {
                    self.lines.push(closing.to_string());
                    self.push_prompt();
                    debug!("playback finished");
                    self.playback = None;
                    self.dirty = true;
                    return;
                }
            }
        }
    }

    // --- Internals ---

    /// Reset the transcript to banner + prompt and invalidate any in-flight
    /// playback by bumping the generation.
    fn reset_transcript(&mut self) {
        self.generation += 1;
        self.lines.clear();
        self.lines.push(BANNER.to_string());
        self.push_prompt();
        self.dirty = true;
    }

    /// Replace the trailing prompt line with the echoed command, so the
    /// command becomes part of the transcript.
    fn echo(&mut self, text: &str) {
        let echoed = format!("{} {}", self.prompt, text);
        match self.lines.last_mut() {
            Some(last) if *last == self.prompt => *last = echoed,
            _ => self.lines.push(echoed),
        }
    }

    fn push_prompt(&mut self) {
        self.lines.push(self.prompt.clone());
    }
}

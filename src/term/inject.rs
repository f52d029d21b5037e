//! External command injection.
//!
//! Other parts of the program (the demo hotkeys, embedding code) can push a
//! command into the simulator without going through the keyboard. The handle
//! is created together with the simulator and passed around explicitly, so
//! the coupling is visible in the API instead of hiding behind a global
//! broadcast channel. There is no acknowledgement: payloads received while a
//! playback is running are dropped, never queued.

use std::sync::mpsc::{self, Receiver, Sender};

/// Cloneable handle for injecting commands into a [`TerminalSim`].
///
/// [`TerminalSim`]: super::TerminalSim
#[derive(Debug, Clone)]
pub struct CommandInjector {
    tx: Sender<String>,
}

impl CommandInjector {
    /// Create a connected injector/receiver pair.
    pub(crate) fn channel() -> (Self, Receiver<String>) {
        let (tx, rx) = mpsc::channel();
        (Self { tx }, rx)
    }

    /// Send a command to the simulator.
    ///
    /// Fire-and-forget: the send result is ignored, matching the original
    /// no-acknowledgement event semantics. If the simulator is gone the
    /// payload just vanishes.
    pub fn inject(&self, command: impl Into<String>) {
        let _ = self.tx.send(command.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn injected_commands_arrive_in_order() {
        let (injector, rx) = CommandInjector::channel();
        injector.inject("help");
        injector.inject("clear");
        assert_eq!(rx.try_recv().as_deref(), Ok("help"));
        assert_eq!(rx.try_recv().as_deref(), Ok("clear"));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn inject_after_receiver_dropped_is_silent() {
        let (injector, rx) = CommandInjector::channel();
        drop(rx);
        // Must not panic or surface an error
        injector.inject("smartchunk chunk file.md");
    }

    #[test]
    fn injector_clones_share_the_channel() {
        let (injector, rx) = CommandInjector::channel();
        let clone = injector.clone();
        clone.inject("a");
        injector.inject("b");
        assert_eq!(rx.iter().take(2).collect::<Vec<_>>(), vec!["a", "b"]);
    }
}

//! Timed playback of a scripted scenario.
//!
//! A [`Playback`] owns the progress through one script: which frame is due
//! next and when. Time is injected by the caller (the TUI tick loop or a
//! test), so nothing here sleeps. Each playback is stamped with the
//! transcript generation it was started under; `clear` bumps the generation,
//! which invalidates any in-flight playback before its next frame can land.

use std::time::{Duration, Instant};

use super::script::ScriptKind;

/// One step of playback progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The next frame's deadline has not passed yet.
    Pending,
    /// A frame became due and should be appended to the transcript.
    Frame(&'static str),
    /// All frames emitted; the closing line should be appended and the
    /// playback discarded.
    Finished(&'static str),
}

/// In-flight scripted playback.
#[derive(Debug, Clone)]
pub struct Playback {
    kind: ScriptKind,
    next_frame: usize,
    next_frame_at: Instant,
    delay: Duration,
    generation: u64,
}

impl Playback {
    /// Start a playback; the first frame becomes due `delay` after `now`.
    pub fn new(kind: ScriptKind, delay: Duration, now: Instant, generation: u64) -> Self {
        Self {
            kind,
            next_frame: 0,
            next_frame_at: now + delay,
            delay,
            generation,
        }
    }

    pub fn kind(&self) -> ScriptKind {
        self.kind
    }

    /// Transcript generation this playback belongs to.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance playback against the injected clock.
    ///
    /// Returns at most one frame per call; callers loop until `Pending` so a
    /// late tick can catch up on several due frames. The closing line is
    /// reported immediately after the last frame, with no extra delay.
    pub fn poll(&mut self, now: Instant) -> Step {
        let script = self.kind.script();
        if self.next_frame >= script.frames.len() {
            return Step::Finished(script.closing);
        }
        if now < self.next_frame_at {
            return Step::Pending;
        }
        let frame = script.frames[self.next_frame];
        self.next_frame += 1;
        // Anchor the next deadline to the previous one, not to `now`, so a
        // slow tick does not stretch the cadence.
        self.next_frame_at += self.delay;
        Step::Frame(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(100);

    #[test]
    fn nothing_due_before_first_delay() {
        let start = Instant::now();
        let mut pb = Playback::new(ScriptKind::Install, DELAY, start, 0);
        assert_eq!(pb.poll(start), Step::Pending);
        assert_eq!(pb.poll(start + DELAY / 2), Step::Pending);
    }

    #[test]
    fn frames_come_out_in_order() {
        let start = Instant::now();
        let mut pb = Playback::new(ScriptKind::Chunk, DELAY, start, 0);
        let script = ScriptKind::Chunk.script();

        for (i, expected) in script.frames.iter().enumerate() {
            let at = start + DELAY * (i as u32 + 1);
            assert_eq!(pb.poll(at), Step::Frame(expected));
        }
        assert_eq!(pb.poll(start + DELAY * 100), Step::Finished(script.closing));
    }

    #[test]
    fn late_tick_catches_up_on_multiple_frames() {
        let start = Instant::now();
        let mut pb = Playback::new(ScriptKind::Install, DELAY, start, 0);
        let script = ScriptKind::Install.script();

        // One tick far past every deadline drains the whole script.
        let late = start + DELAY * (script.frames.len() as u32 + 5);
        let mut seen = Vec::new();
        loop {
            match pb.poll(late) {
                Step::Frame(f) => seen.push(f),
                Step::Finished(closing) => {
                    assert_eq!(closing, script.closing);
                    break;
                }
                Step::Pending => panic!("late tick should never be pending"),
            }
        }
        assert_eq!(seen, script.frames);
    }

    #[test]
    fn finished_is_sticky() {
        let start = Instant::now();
        let mut pb = Playback::new(ScriptKind::Compare, DELAY, start, 3);
        let late = start + DELAY * 100;
        while !matches!(pb.poll(late), Step::Finished(_)) {}
        assert!(matches!(pb.poll(late), Step::Finished(_)));
        assert_eq!(pb.generation(), 3);
    }
}

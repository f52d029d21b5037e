//! Command history and recall cursor.
//!
//! Holds previously submitted commands, most-recent-last, and a cursor used
//! while recalling entries with the arrow keys. The cursor, when set, always
//! points at an existing entry; it resets whenever a command is submitted.

/// Submitted-command history with arrow-key recall.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
    /// Recall position; `None` means "not recalling" (at the live input).
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted command and leave recall mode.
    pub fn push(&mut self, command: String) {
        self.entries.push(command);
        self.cursor = None;
    }

    /// Move toward older entries and return the entry to stage.
    ///
    /// From the live input this recalls the most recent command; at the
    /// oldest entry it clamps (re-staging the same entry). Returns `None`
    /// when there is no history at all.
    pub fn recall_previous(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let idx = match self.cursor {
            None => self.entries.len() - 1,
            Some(idx) => idx.saturating_sub(1),
        };
        self.cursor = Some(idx);
        Some(self.entries[idx].as_str())
    }

    /// Move toward newer entries and return the text to stage.
    ///
    /// Past the newest entry the cursor leaves recall mode and the staged
    /// input becomes empty. Returns `None` when not recalling (nothing to
    /// stage).
    pub fn recall_next(&mut self) -> Option<&str> {
        let idx = self.cursor?;
        if idx + 1 < self.entries.len() {
            self.cursor = Some(idx + 1);
            Some(self.entries[idx + 1].as_str())
        } else {
            self.cursor = None;
            Some("")
        }
    }

    /// Number of stored commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current recall position, if recalling.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> History {
        let mut h = History::new();
        h.push("a".into());
        h.push("b".into());
        h.push("c".into());
        h
    }

    #[test]
    fn recall_previous_walks_back_and_clamps() {
        let mut h = seeded();
        assert_eq!(h.recall_previous(), Some("c"));
        assert_eq!(h.recall_previous(), Some("b"));
        assert_eq!(h.recall_previous(), Some("a"));
        // Clamped at the oldest entry
        assert_eq!(h.recall_previous(), Some("a"));
        assert_eq!(h.cursor(), Some(0));
    }

    #[test]
    fn recall_next_walks_forward_then_clears() {
        let mut h = seeded();
        h.recall_previous(); // c
        h.recall_previous(); // b
        h.recall_previous(); // a
        assert_eq!(h.recall_next(), Some("b"));
        assert_eq!(h.recall_next(), Some("c"));
        // Past the newest entry: recall mode ends, input clears
        assert_eq!(h.recall_next(), Some(""));
        assert_eq!(h.cursor(), None);
    }

    #[test]
    fn recall_next_without_recalling_is_noop() {
        let mut h = seeded();
        assert_eq!(h.recall_next(), None);
    }

    #[test]
    fn recall_previous_on_empty_history() {
        let mut h = History::new();
        assert_eq!(h.recall_previous(), None);
        assert_eq!(h.cursor(), None);
    }

    #[test]
    fn push_resets_cursor() {
        let mut h = seeded();
        h.recall_previous();
        assert!(h.cursor().is_some());
        h.push("d".into());
        assert_eq!(h.cursor(), None);
        assert_eq!(h.len(), 4);
    }

    #[test]
    fn cursor_always_indexes_valid_entry() {
        let mut h = seeded();
        for _ in 0..10 {
            h.recall_previous();
            if let Some(idx) = h.cursor() {
                assert!(idx < h.len());
            }
        }
        for _ in 0..10 {
            h.recall_next();
            if let Some(idx) = h.cursor() {
                assert!(idx < h.len());
            }
        }
    }
}

//! Command recognition.
//!
//! Maps submitted input to one of the fixed demo behaviors. Matching is
//! case-sensitive and runs against the input exactly as typed, in priority
//! order: exact `clear`, the scripted prefixes, the `help` aliases, then
//! "command not found".

use super::script::ScriptKind;

/// What a submitted command resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Exact `clear`: reset the transcript, never busy.
    Clear,
    /// `help`, `--help` or `smartchunk --help`: print the command list.
    Help,
    /// A scripted scenario, triggered by prefix match.
    Script(ScriptKind),
    /// Anything else; carries the first whitespace-delimited token.
    NotFound(String),
}

/// Aliases that print the static command list.
const HELP_ALIASES: &[&str] = &["help", "--help", "smartchunk --help"];

/// Resolve input to a [`Command`].
pub fn recognize(input: &str) -> Command {
    if input == "clear" {
        return Command::Clear;
    }
    for kind in ScriptKind::ALL {
        if input.starts_with(kind.prefix()) {
            return Command::Script(kind);
        }
    }
    if HELP_ALIASES.contains(&input) {
        return Command::Help;
    }
    let token = input.split_whitespace().next().unwrap_or_default();
    Command::NotFound(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_is_exact_match() {
        assert_eq!(recognize("clear"), Command::Clear);
        // Anything beyond the exact word falls through
        assert_eq!(
            recognize("clear screen"),
            Command::NotFound("clear".to_string())
        );
    }

    #[test]
    fn script_prefixes_match_with_arguments() {
        assert_eq!(
            recognize("pip install smartchunk"),
            Command::Script(ScriptKind::Install)
        );
        assert_eq!(
            recognize("smartchunk chunk notes.md --max-tokens 700"),
            Command::Script(ScriptKind::Chunk)
        );
        assert_eq!(
            recognize("smartchunk compare a.md b.md"),
            Command::Script(ScriptKind::Compare)
        );
    }

    #[test]
    fn help_aliases_recognized() {
        assert_eq!(recognize("help"), Command::Help);
        assert_eq!(recognize("--help"), Command::Help);
        assert_eq!(recognize("smartchunk --help"), Command::Help);
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(
            recognize("CLEAR"),
            Command::NotFound("CLEAR".to_string())
        );
        assert_eq!(
            recognize("Pip install smartchunk"),
            Command::NotFound("Pip".to_string())
        );
    }

    #[test]
    fn unknown_input_echoes_first_token() {
        assert_eq!(recognize("ls -la /tmp"), Command::NotFound("ls".to_string()));
        assert_eq!(recognize("foo"), Command::NotFound("foo".to_string()));
    }
}

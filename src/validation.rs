//! Input sanitation for player-supplied text.
//!
//! The game accepts one free-form line (the player name) and prints it back
//! inside a fixed-width card and in log lines, so the only rules are: no
//! control characters, bounded length, and a fallback when nothing usable is
//! left. Blank input is not an error; it is replaced by the configured
//! fallback name.

/// Maximum characters kept from a player name. Bounded by the card's inner
/// width minus breathing room so the centered line never overflows the frame.
pub const MAX_NAME_LENGTH: usize = 24;

/// Clean a raw player-name line for display.
///
/// - Strips control characters (including stray `\r` from CRLF input)
/// - Collapses runs of whitespace to single spaces and trims the ends
/// - Truncates to [`MAX_NAME_LENGTH`] characters on a char boundary
/// - Substitutes `fallback` when the cleaned result is empty
pub fn sanitize_player_name(raw: &str, fallback: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    let capped: String = cleaned.chars().take(MAX_NAME_LENGTH).collect();
    let trimmed = capped.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Parse a replay answer. `Some(true)` for yes, `Some(false)` for no,
/// `None` for anything that should trigger a re-prompt.
pub fn parse_replay_choice(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

//! ASCII scratch-card rendering.
//!
//! Pure string builders: the session decides pacing and where the lines go,
//! these functions only produce them. Card body lines are fixed-width so the
//! frame stays aligned; player names longer than the inner width are expected
//! to be capped upstream by [`crate::validation::sanitize_player_name`].

/// Printable width between the card's side borders.
pub const CARD_INNER_WIDTH: usize = 32;

fn framed(content: &str) -> String {
    format!("   ║{:^width$}║", content, width = CARD_INNER_WIDTH)
}

fn frame_top() -> String {
    format!("   ╔{}╗", "═".repeat(CARD_INNER_WIDTH))
}

fn frame_bottom() -> String {
    format!("   ╚{}╝", "═".repeat(CARD_INNER_WIDTH))
}

/// The covered ticket shown before scratching.
///
/// The title comes from config and is not pre-validated; it is cut to fit
/// between the foil markers so the frame stays aligned.
pub fn covered_card(title: &str) -> Vec<String> {
    let title: String = title.chars().take(CARD_INNER_WIDTH - 6).collect();
    let foil = "▓".repeat(CARD_INNER_WIDTH - 8);
    vec![
        frame_top(),
        framed(""),
        framed(&foil),
        framed(&format!("▓▓ {} ▓▓", title)),
        framed(&foil),
        framed(""),
        framed("Scratch here!"),
        framed(""),
        frame_bottom(),
    ]
}

/// The revealed ticket: player name plus the outcome.
pub fn revealed_card(player_name: &str, payout: u32) -> Vec<String> {
    let mut lines = vec![
        frame_top(),
        framed(""),
        framed(player_name),
        framed(""),
    ];
    if payout == 0 {
        lines.push(framed("NO PRIZE"));
        lines.push(framed("Better luck next time"));
    } else {
        lines.push(framed("CONGRATULATIONS!"));
        lines.push(framed(&format!("YOU WON {} COINS", payout)));
    }
    lines.push(framed(""));
    lines.push(frame_bottom());
    lines
}

/// One-line banner printed after the reveal.
pub fn result_banner(payout: u32) -> String {
    if payout == 0 {
        "Thanks for playing!".to_string()
    } else {
        format!("🎉 BIG WIN! {} coins! 🎉", payout)
    }
}

/// Round summary in the fixed reporting format.
pub fn summary_line(player_name: &str, payout: u32) -> String {
    format!(
        "player name: {}, total prize: {} coins",
        player_name, payout
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covered_card_is_framed_and_titled() {
        let lines = covered_card("SCRATCH CARD");
        assert_eq!(lines.len(), 9);
        assert!(lines[0].contains('╔'));
        assert!(lines.iter().any(|l| l.contains("SCRATCH CARD")));
        assert!(lines.iter().any(|l| l.contains("Scratch here!")));
        assert!(lines.last().unwrap().contains('╚'));
    }

    #[test]
    fn revealed_card_shows_payout() {
        let lines = revealed_card("Ada", 350);
        assert!(lines.iter().any(|l| l.contains("Ada")));
        assert!(lines.iter().any(|l| l.contains("YOU WON 350 COINS")));
        assert!(!lines.iter().any(|l| l.contains("NO PRIZE")));
    }

    #[test]
    fn revealed_card_shows_no_prize() {
        let lines = revealed_card("Ada", 0);
        assert!(lines.iter().any(|l| l.contains("NO PRIZE")));
        assert!(!lines.iter().any(|l| l.contains("YOU WON")));
    }

    #[test]
    fn card_lines_have_uniform_frame_width() {
        for line in covered_card("SCRATCH CARD")
            .into_iter()
            .chain(revealed_card("Somebody", 150))
        {
            assert_eq!(line.chars().count(), CARD_INNER_WIDTH + 5, "{}", line);
        }
    }

    #[test]
    fn overlong_title_is_cut_to_fit_the_frame() {
        let long_title = "THE GRAND SUPER DELUXE MEGA SCRATCH CARD EXTRAVAGANZA";
        for line in covered_card(long_title) {
            assert_eq!(line.chars().count(), CARD_INNER_WIDTH + 5, "{}", line);
        }
    }

    #[test]
    fn summary_line_format_is_fixed() {
        assert_eq!(
            summary_line("Mystery Player", 700),
            "player name: Mystery Player, total prize: 700 coins"
        );
        assert_eq!(
            summary_line("Ada", 0),
            "player name: Ada, total prize: 0 coins"
        );
    }
}

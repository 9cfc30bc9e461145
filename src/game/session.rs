//! Interactive game session: the console loop around the prize drawer.
//!
//! One session owns the drawer, the configured texts, and both ends of the
//! console. It is generic over `BufRead`/`Write` so tests can drive a full
//! game through in-memory buffers and assert on the rendered output.
//!
//! Flow per run:
//! 1. Welcome banner and name prompt (blank input falls back to the
//!    configured placeholder name)
//! 2. Rounds in an explicit loop: draw, covered card, ENTER pause, revealed
//!    card, result banner, summary line
//! 3. Replay prompt (`y`/`yes`/`n`/`no`, case-insensitive; anything else
//!    re-prompts)
//!
//! End-of-input on the reader is treated as "stop playing", never as an
//! error, so piped input terminates cleanly.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use log::{debug, info};
use rand::Rng;

use crate::game::card;
use crate::game::draw::PrizeDrawer;
use crate::logutil::escape_log;
use crate::validation::sanitize_player_name;

/// Presentation settings for a session, taken from config.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Title printed on the covered card.
    pub title: String,
    /// Placeholder used when the player gives no usable name.
    pub fallback_name: String,
    /// Delay between covered-card lines.
    pub cover_line_delay: Duration,
    /// Delay between revealed-card lines.
    pub reveal_line_delay: Duration,
}

impl Default for SessionOptions {
    fn default() -> Self {
        SessionOptions {
            title: "SCRATCH CARD".to_string(),
            fallback_name: "Mystery Player".to_string(),
            cover_line_delay: Duration::from_millis(200),
            reveal_line_delay: Duration::from_millis(150),
        }
    }
}

/// One interactive game session over a reader/writer pair.
pub struct Session<R, W, G: Rng> {
    input: R,
    output: W,
    drawer: PrizeDrawer<G>,
    options: SessionOptions,
}

impl<R: BufRead, W: Write, G: Rng> Session<R, W, G> {
    pub fn new(input: R, output: W, drawer: PrizeDrawer<G>, options: SessionOptions) -> Self {
        Session {
            input,
            output,
            drawer,
            options,
        }
    }

    /// Run the full game loop until the player declines a replay or input
    /// ends.
    pub fn run(&mut self) -> io::Result<()> {
        self.print_welcome()?;
        let name = self.prompt_name()?;
        info!("session started for player '{}'", escape_log(&name));
        loop {
            self.play_round(&name)?;
            if !self.prompt_replay()? {
                break;
            }
            writeln!(self.output)?;
        }
        writeln!(self.output, "\nGoodbye, {}!", name)?;
        Ok(())
    }

    fn print_welcome(&mut self) -> io::Result<()> {
        let rule = "=".repeat(60);
        writeln!(self.output, "\n{}", rule)?;
        writeln!(self.output, "  WELCOME TO {}", self.options.title)?;
        writeln!(self.output, "{}\n", rule)
    }

    /// Read the player name; blank or unusable input is replaced by the
    /// fallback placeholder rather than treated as an error.
    fn prompt_name(&mut self) -> io::Result<String> {
        write!(self.output, "Enter your name: ")?;
        self.output.flush()?;
        let raw = self.read_line()?.unwrap_or_default();
        let name = sanitize_player_name(&raw, &self.options.fallback_name);
        if name == self.options.fallback_name && raw.trim() != self.options.fallback_name {
            debug!("blank or invalid name input, using fallback");
            writeln!(self.output, "No name given! Playing as: {}", name)?;
        }
        Ok(name)
    }

    /// One round: draw a prize, reveal it in two stages, print the summary.
    fn play_round(&mut self, name: &str) -> io::Result<()> {
        let prize = self.drawer.draw();
        info!(
            "draw result for '{}': {} ({} coins)",
            escape_log(name),
            prize.id,
            prize.payout
        );

        writeln!(self.output, "\nHere's your ticket!\n")?;
        let covered = card::covered_card(&self.options.title);
        self.print_animated(&covered, self.options.cover_line_delay)?;

        write!(self.output, "\nPress ENTER to scratch your ticket...")?;
        self.output.flush()?;
        let _ = self.read_line()?;

        writeln!(self.output, "\nScratching in progress...\n")?;
        let revealed = card::revealed_card(name, prize.payout);
        self.print_animated(&revealed, self.options.reveal_line_delay)?;

        writeln!(self.output, "\n{}", card::result_banner(prize.payout))?;
        writeln!(self.output, "{}", card::summary_line(name, prize.payout))?;
        Ok(())
    }

    /// Ask until the player answers yes or no. End of input counts as no.
    fn prompt_replay(&mut self) -> io::Result<bool> {
        loop {
            write!(self.output, "\nPlay again? [y/n]: ")?;
            self.output.flush()?;
            let line = match self.read_line()? {
                Some(line) => line,
                None => return Ok(false),
            };
            match crate::validation::parse_replay_choice(&line) {
                Some(choice) => return Ok(choice),
                None => {
                    writeln!(self.output, "Invalid choice! Please type Y (yes) or N (no).")?;
                }
            }
        }
    }

    /// Write lines with a per-line delay. A zero delay (tests, piped runs)
    /// skips sleeping entirely.
    fn print_animated(&mut self, lines: &[String], delay: Duration) -> io::Result<()> {
        for line in lines {
            writeln!(self.output, "{}", line)?;
            self.output.flush()?;
            if !delay.is_zero() {
                thread::sleep(delay);
            }
        }
        Ok(())
    }

    /// Read one line; `None` signals end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        let n = self.input.read_line(&mut buf)?;
        if n == 0 {
            Ok(None)
        } else {
            Ok(Some(buf))
        }
    }
}

//! # Scratchcard - An Interactive Terminal Scratch-Card Game
//!
//! Scratchcard is a small console amusement: it asks for the player's name,
//! draws a weighted random prize, reveals it with a two-stage ASCII-art
//! animation, and loops until the player stops. The interesting core is the
//! weighted prize drawer; everything around it is presentation.
//!
//! ## Features
//!
//! - **Weighted Prize Draws**: Categorical selection proportional to declared
//!   weights, validated once at startup and reproducible under a seeded RNG.
//! - **Two-Stage Reveal**: Covered ticket, ENTER-to-scratch pause, then the
//!   animated reveal with the payout (or the bad news).
//! - **Configurable**: Prize table, payouts, texts, and animation pacing live
//!   in a TOML config file; `scratchcard init` writes a starter file.
//! - **Inspectable Odds**: `scratchcard odds` prints the table and expected
//!   payout; `scratchcard simulate` runs bulk draws and reports empirical vs
//!   declared frequencies (optionally as JSON).
//! - **Graceful Interrupts**: Ctrl-C during any input wait prints a goodbye
//!   and exits cleanly.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rand::SeedableRng;
//! use scratchcard::config::Config;
//! use scratchcard::game::PrizeDrawer;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::default();
//! let table = config.validate()?;
//! let mut drawer = PrizeDrawer::new(table, rand::rngs::StdRng::seed_from_u64(42));
//! let prize = drawer.draw();
//! println!("{} pays {} coins", prize.id, prize.payout);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`game`] - Prize table, weighted drawer, card renderer, session loop
//! - [`config`] - Configuration management and validation
//! - [`validation`] - Player-input sanitation
//! - [`logutil`] - Log-line escaping for user-supplied strings

pub mod config;
pub mod game;
pub mod logutil;
pub mod validation;

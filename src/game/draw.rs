//! Weighted prize drawing, the core of the scratch-card game.
//!
//! Overview
//! - A [`PrizeTable`] is an ordered list of prize entries, each carrying an
//!   identifier, a selection weight, and a coin payout
//! - Weights need not be pre-normalized; selection is proportional to
//!   `weight_i / sum(weights)` in table order
//! - Validation happens once at construction: a malformed table is a fatal
//!   configuration error, never a per-draw condition
//! - Randomness is injected (`rand::Rng`), so draws are deterministic under a
//!   seeded generator
//!
//! Default table (matching `scratchcard init`):
//! - `150_coins` = 10% — pays 150 coins
//! - `350_coins` = 5% — pays 350 coins
//! - `700_coins` = 2.5% — pays 700 coins
//! - `no_prize` = 82.5% — pays nothing

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Identifier reserved for the losing outcome. The only entry allowed (and
/// required) to carry a zero payout in a game table.
pub const NO_PRIZE_ID: &str = "no_prize";

/// Tolerance when checking whether declared weights sum to 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Errors raised while building a [`PrizeTable`] from configuration.
#[derive(Debug, thiserror::Error)]
pub enum DrawError {
    #[error("invalid prize configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

impl DrawError {
    fn invalid(reason: impl Into<String>) -> Self {
        DrawError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

/// One outcome category: identifier, selection weight, and coin payout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prize {
    pub id: String,
    pub weight: f64,
    pub payout: u32,
}

impl Prize {
    pub fn new(id: impl Into<String>, weight: f64, payout: u32) -> Self {
        Prize {
            id: id.into(),
            weight,
            payout,
        }
    }

    /// True for the reserved losing outcome.
    pub fn is_no_prize(&self) -> bool {
        self.id == NO_PRIZE_ID
    }
}

/// Validated, immutable, ordered prize table.
///
/// Construction rejects tables that admit no valid cumulative partition:
/// empty tables, negative or non-finite weights, duplicate identifiers, and
/// all-zero weights. Once built, every draw is infallible.
#[derive(Debug, Clone)]
pub struct PrizeTable {
    entries: Vec<Prize>,
    total_weight: f64,
}

impl PrizeTable {
    /// Build a table from ordered entries, validating the weight set.
    pub fn new(entries: Vec<Prize>) -> Result<Self, DrawError> {
        if entries.is_empty() {
            return Err(DrawError::invalid("prize table is empty"));
        }
        let mut total_weight = 0.0;
        for (idx, prize) in entries.iter().enumerate() {
            if prize.id.trim().is_empty() {
                return Err(DrawError::invalid(format!(
                    "prize entry {} has a blank identifier",
                    idx + 1
                )));
            }
            if !prize.weight.is_finite() {
                return Err(DrawError::invalid(format!(
                    "prize '{}' has a non-finite weight",
                    prize.id
                )));
            }
            if prize.weight < 0.0 {
                return Err(DrawError::invalid(format!(
                    "prize '{}' has a negative weight ({})",
                    prize.id, prize.weight
                )));
            }
            if entries[..idx].iter().any(|p| p.id == prize.id) {
                return Err(DrawError::invalid(format!(
                    "duplicate prize identifier '{}'",
                    prize.id
                )));
            }
            total_weight += prize.weight;
        }
        if total_weight <= 0.0 {
            return Err(DrawError::invalid(
                "all prize weights are zero; no outcome can be selected",
            ));
        }
        Ok(PrizeTable {
            entries,
            total_weight,
        })
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[Prize] {
        &self.entries
    }

    /// Sum of all weights (the cumulative partition length).
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Whether the declared weights already sum to 1.0 within
    /// [`WEIGHT_SUM_TOLERANCE`]. Unnormalized tables still draw correctly;
    /// callers may want to warn about them.
    pub fn is_normalized(&self) -> bool {
        (self.total_weight - 1.0).abs() <= WEIGHT_SUM_TOLERANCE
    }

    /// Look up an entry by identifier.
    pub fn get(&self, id: &str) -> Option<&Prize> {
        self.entries.iter().find(|p| p.id == id)
    }

    /// Payout for an identifier, if present.
    pub fn payout(&self, id: &str) -> Option<u32> {
        self.get(id).map(|p| p.payout)
    }

    /// Draw one prize by weighted random selection.
    ///
    /// Partitions the cumulative weight space in table order, samples one
    /// uniform value over the total weight, and returns the entry whose range
    /// contains the sample.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> &Prize {
        let roll = rng.gen_range(0.0..self.total_weight);
        let mut cumulative = 0.0;
        for prize in &self.entries {
            cumulative += prize.weight;
            if roll < cumulative {
                return prize;
            }
        }
        // Accumulation error can leave the roll at the final boundary; the
        // last entry absorbs it.
        &self.entries[self.entries.len() - 1]
    }

    /// Expected coin payout of a single play.
    pub fn expected_payout(&self) -> f64 {
        self.entries
            .iter()
            .map(|p| (p.weight / self.total_weight) * f64::from(p.payout))
            .sum()
    }
}

/// A validated table paired with an owned random source.
///
/// This is the injectable drawer the session uses: seed the generator in
/// tests and every draw sequence is reproducible.
#[derive(Debug)]
pub struct PrizeDrawer<R: Rng> {
    table: PrizeTable,
    rng: R,
}

impl<R: Rng> PrizeDrawer<R> {
    pub fn new(table: PrizeTable, rng: R) -> Self {
        PrizeDrawer { table, rng }
    }

    /// Draw one prize; the returned entry is the per-round draw result.
    pub fn draw(&mut self) -> Prize {
        self.table.draw(&mut self.rng).clone()
    }

    pub fn table(&self) -> &PrizeTable {
        &self.table
    }
}

//! # Configuration Management Module
//!
//! Centralized configuration for the scratchcard game: structured sections,
//! sensible defaults, TOML persistence, and validation of the prize table
//! before any draw happens.
//!
//! ## Configuration Structure
//!
//! - [`GameConfig`] - Game texts (card title, fallback player name)
//! - [`PrizeConfig`] - One prize entry (`[[prizes]]` array, order preserved)
//! - [`AnimationConfig`] - Per-line reveal delays
//! - [`LoggingConfig`] - Logging settings
//!
//! ## Configuration File Format
//!
//! ```toml
//! [game]
//! title = "SCRATCH CARD"
//! fallback_name = "Mystery Player"
//!
//! [[prizes]]
//! id = "150_coins"
//! weight = 0.10
//! payout = 150
//!
//! [[prizes]]
//! id = "no_prize"
//! weight = 0.825
//! payout = 0
//!
//! [animation]
//! cover_line_delay_ms = 200
//! reveal_line_delay_ms = 150
//! ```
//!
//! ## Validation
//!
//! The prize table is validated once at startup ([`Config::validate`]):
//! empty tables, negative/non-finite weights, duplicate identifiers, and
//! all-zero weights are fatal. Weights that do not sum to 1.0 are accepted
//! with a warning; the drawer normalizes by the total weight.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::game::draw::{DrawError, Prize, PrizeTable, NO_PRIZE_ID};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub game: GameConfig,
    /// Ordered prize table; declaration order defines the cumulative
    /// partition order used by the drawer.
    #[serde(default = "default_prizes")]
    pub prizes: Vec<PrizeConfig>,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Title printed on the covered card.
    pub title: String,
    /// Placeholder name used when the player enters nothing usable.
    pub fallback_name: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            title: "SCRATCH CARD".to_string(),
            fallback_name: "Mystery Player".to_string(),
        }
    }
}

/// One `[[prizes]]` entry: identifier, selection weight, coin payout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrizeConfig {
    pub id: String,
    pub weight: f64,
    pub payout: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Master switch; disabled forces both delays to zero.
    pub enabled: bool,
    /// Delay between covered-card lines (ms).
    pub cover_line_delay_ms: u64,
    /// Delay between revealed-card lines (ms).
    pub reveal_line_delay_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        AnimationConfig {
            enabled: true,
            cover_line_delay_ms: 200,
            reveal_line_delay_ms: 150,
        }
    }
}

impl AnimationConfig {
    /// Effective per-line delay for the covered card.
    pub fn cover_delay(&self) -> std::time::Duration {
        if self.enabled {
            std::time::Duration::from_millis(self.cover_line_delay_ms)
        } else {
            std::time::Duration::ZERO
        }
    }

    /// Effective per-line delay for the revealed card.
    pub fn reveal_delay(&self) -> std::time::Duration {
        if self.enabled {
            std::time::Duration::from_millis(self.reveal_line_delay_ms)
        } else {
            std::time::Duration::ZERO
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            file: None,
        }
    }
}

fn default_prizes() -> Vec<PrizeConfig> {
    vec![
        PrizeConfig {
            id: "150_coins".to_string(),
            weight: 0.10,
            payout: 150,
        },
        PrizeConfig {
            id: "350_coins".to_string(),
            weight: 0.05,
            payout: 350,
        },
        PrizeConfig {
            id: "700_coins".to_string(),
            weight: 0.025,
            payout: 700,
        },
        PrizeConfig {
            id: NO_PRIZE_ID.to_string(),
            weight: 0.825,
            payout: 0,
        },
    ]
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        Ok(config)
    }

    /// Create a default configuration file
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }

    /// Build the validated, immutable prize table from the configured
    /// entries. Fails with [`DrawError::InvalidConfiguration`] for tables
    /// that admit no valid draw.
    pub fn prize_table(&self) -> Result<PrizeTable, DrawError> {
        let entries = self
            .prizes
            .iter()
            .map(|p| Prize::new(p.id.clone(), p.weight, p.payout))
            .collect();
        PrizeTable::new(entries)
    }

    /// Full startup validation: table construction plus the game-level payout
    /// invariant (payout 0 exactly for `no_prize`). Logs a warning when the
    /// declared weights do not sum to 1.0; the drawer normalizes by total
    /// weight so near-miss sums are not an error.
    pub fn validate(&self) -> Result<PrizeTable> {
        let table = self.prize_table()?;
        for prize in table.entries() {
            if prize.is_no_prize() && prize.payout != 0 {
                return Err(anyhow!(
                    "invalid prize configuration: '{}' must have payout 0, got {}",
                    NO_PRIZE_ID,
                    prize.payout
                ));
            }
            if !prize.is_no_prize() && prize.payout == 0 {
                return Err(anyhow!(
                    "invalid prize configuration: '{}' has payout 0 but only '{}' may pay nothing",
                    prize.id,
                    NO_PRIZE_ID
                ));
            }
        }
        if !table.is_normalized() {
            log::warn!(
                "prize weights sum to {} (expected 1.0); drawing proportionally to the total",
                table.total_weight()
            );
        }
        Ok(table)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            game: GameConfig::default(),
            prizes: default_prizes(),
            animation: AnimationConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = Config::default();
        let table = config.validate().expect("default table is valid");
        assert_eq!(table.entries().len(), 4);
        assert!(table.is_normalized());
    }

    #[test]
    fn default_prizes_keep_declaration_order() {
        let config = Config::default();
        let ids: Vec<&str> = config.prizes.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["150_coins", "350_coins", "700_coins", "no_prize"]);
    }

    #[test]
    fn no_prize_must_pay_zero() {
        let mut config = Config::default();
        config.prizes.last_mut().unwrap().payout = 10;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("must have payout 0"));
    }

    #[test]
    fn zero_payout_reserved_for_no_prize() {
        let mut config = Config::default();
        config.prizes[0].payout = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("may pay nothing"));
    }

    #[test]
    fn negative_weight_fails_validation() {
        let mut config = Config::default();
        config.prizes[1].weight = -0.05;
        assert!(config.validate().is_err());
    }

    #[test]
    fn unnormalized_sum_is_accepted() {
        let mut config = Config::default();
        config.prizes[0].weight = 0.2; // sum now 1.1
        let table = config.validate().expect("near-miss sums are not fatal");
        assert!(!table.is_normalized());
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.prizes.len(), config.prizes.len());
        assert_eq!(parsed.game.fallback_name, config.game.fallback_name);
        assert_eq!(parsed.animation.cover_line_delay_ms, 200);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let parsed: Config = toml::from_str(
            r#"
            [game]
            title = "TEST CARD"
            fallback_name = "Nobody"
            "#,
        )
        .unwrap();
        assert_eq!(parsed.prizes.len(), 4);
        assert!(parsed.animation.enabled);
        assert_eq!(parsed.logging.level, "info");
    }
}

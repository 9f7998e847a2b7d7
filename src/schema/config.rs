//! Configuration types for the panel search.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::PanelKind;

/// Top-level search configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Wall-clock budget for the search loop, in milliseconds.
    pub time_budget_ms: u64,
    /// Mutation attempts between two deadline checks.
    pub batch_size: usize,
    /// Acceptance rule.
    pub algorithm: SearchAlgorithm,
    /// Occupancy reward tiers.
    pub rewards: RewardTable,
    /// Relative weights for proposed panel kinds.
    pub panel_weights: PanelWeights,
    /// Whether the board is surrounded by a fixed wall frame.
    pub border: Border,
    /// Random seed for reproducibility.
    pub random_seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            time_budget_ms: 2800,
            batch_size: 100,
            algorithm: SearchAlgorithm::default(),
            rewards: RewardTable::default(),
            panel_weights: PanelWeights::default(),
            border: Border::default(),
            random_seed: None,
        }
    }
}

impl SearchConfig {
    #[inline]
    pub fn time_budget(&self) -> Duration {
        Duration::from_millis(self.time_budget_ms)
    }

    /// Load and validate a JSON configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.batch_size == 0 {
            return Err(ConfigError::InvalidBatchSize);
        }
        if let SearchAlgorithm::SimulatedAnnealing {
            start_temperature,
            end_temperature,
        } = self.algorithm
            && !(start_temperature > 0.0 && end_temperature > 0.0)
        {
            return Err(ConfigError::InvalidTemperature {
                start: start_temperature,
                end: end_temperature,
            });
        }
        let positive = PanelKind::ALL
            .into_iter()
            .filter(|&p| self.panel_weights.weight(p) > 0)
            .count();
        if positive < 2 {
            return Err(ConfigError::InsufficientPanelWeights);
        }
        Ok(())
    }
}

/// Acceptance rule used by the search driver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SearchAlgorithm {
    /// Accept only strict improvements over the best score.
    HillClimbing,
    /// Metropolis acceptance with a linearly decaying temperature.
    SimulatedAnnealing {
        #[serde(default = "default_start_temperature")]
        start_temperature: f64,
        #[serde(default = "default_end_temperature")]
        end_temperature: f64,
    },
}

impl Default for SearchAlgorithm {
    fn default() -> Self {
        Self::HillClimbing
    }
}

fn default_start_temperature() -> f64 {
    20.0
}
fn default_end_temperature() -> f64 {
    0.5
}

impl SearchAlgorithm {
    /// Default annealing schedule.
    pub fn annealing() -> Self {
        Self::SimulatedAnnealing {
            start_temperature: default_start_temperature(),
            end_temperature: default_end_temperature(),
        }
    }
}

/// Reward per cell keyed by the number of robots ending on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardTable {
    /// Exactly one robot.
    pub single: i64,
    /// Exactly two robots.
    pub pair: i64,
    /// Exactly three robots.
    pub triple: i64,
}

impl Default for RewardTable {
    fn default() -> Self {
        Self {
            single: 10,
            pair: 3,
            triple: 1,
        }
    }
}

/// Relative proposal weight per panel kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelWeights {
    pub empty: u32,
    pub wall: u32,
    pub double_speed: u32,
    pub triple_speed: u32,
    pub force_right: u32,
    pub force_left: u32,
}

impl Default for PanelWeights {
    fn default() -> Self {
        Self {
            empty: 3,
            wall: 1,
            double_speed: 1,
            triple_speed: 1,
            force_right: 1,
            force_left: 1,
        }
    }
}

impl PanelWeights {
    pub fn weight(&self, panel: PanelKind) -> u32 {
        match panel {
            PanelKind::Empty => self.empty,
            PanelKind::Wall => self.wall,
            PanelKind::DoubleSpeed => self.double_speed,
            PanelKind::TripleSpeed => self.triple_speed,
            PanelKind::ForceRight => self.force_right,
            PanelKind::ForceLeft => self.force_left,
        }
    }
}

/// Board frame style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Border {
    /// The outer ring of the grid is fixed wall; only the interior is searched.
    #[default]
    Framed,
    /// Every cell of the grid is searched.
    Open,
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Batch size must be non-zero")]
    InvalidBatchSize,
    #[error("Annealing temperatures must be positive (start {start}, end {end})")]
    InvalidTemperature { start: f64, end: f64 },
    #[error("At least two panel kinds need a positive proposal weight")]
    InsufficientPanelWeights,
    #[error("Failed to read config {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SearchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.time_budget(), Duration::from_millis(2800));
    }

    #[test]
    fn test_invalid_configs() {
        let config = SearchConfig {
            batch_size: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBatchSize)
        ));

        let config = SearchConfig {
            algorithm: SearchAlgorithm::SimulatedAnnealing {
                start_temperature: 0.0,
                end_temperature: 1.0,
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTemperature { .. })
        ));

        let config = SearchConfig {
            panel_weights: PanelWeights {
                empty: 1,
                wall: 0,
                double_speed: 0,
                triple_speed: 0,
                force_right: 0,
                force_left: 0,
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InsufficientPanelWeights)
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        fs::write(&path, r#"{"batch_size": 50, "border": "Open", "random_seed": 7}"#).unwrap();
        let config = SearchConfig::load(&path).unwrap();
        assert_eq!(config.batch_size, 50);
        assert_eq!(config.border, Border::Open);
        assert_eq!(config.random_seed, Some(7));

        fs::write(&path, r#"{"batch_size": 0}"#).unwrap();
        assert!(matches!(
            SearchConfig::load(&path),
            Err(ConfigError::InvalidBatchSize)
        ));

        fs::write(&path, "{not json").unwrap();
        assert!(matches!(SearchConfig::load(&path), Err(ConfigError::Parse(_))));

        assert!(matches!(
            SearchConfig::load(dir.path().join("missing.json")),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SearchConfig = serde_json::from_str(
            r#"{"time_budget_ms": 500, "algorithm": {"type": "SimulatedAnnealing"}}"#,
        )
        .unwrap();
        assert_eq!(config.time_budget_ms, 500);
        assert_eq!(config.batch_size, 100);
        assert_eq!(config.algorithm, SearchAlgorithm::annealing());
        assert_eq!(config.border, Border::Framed);
    }
}

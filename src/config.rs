use crate::error::{SajuError, SajuResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[command(flatten)]
    pub batch: BatchParams,
    #[command(flatten)]
    pub weights: ScoringWeights,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchParams {
    /// Candidates beyond this count are dropped before scoring.
    #[arg(long, default_value_t = 10_000)]
    pub max_candidates: usize,
    /// Rows shown in the ranked report.
    #[arg(long, default_value_t = 20)]
    pub top: usize,
}

impl Default for BatchParams {
    fn default() -> Self {
        Self {
            max_candidates: 10_000,
            top: 20,
        }
    }
}

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    // === SUB-SCORE WEIGHTS (sum to 1.0) ===
    #[arg(long, default_value_t = 0.30)]
    pub weight_balance: f64,
    #[arg(long, default_value_t = 0.35)]
    pub weight_yongshin: f64,
    #[arg(long, default_value_t = 0.20)]
    pub weight_strength: f64,
    #[arg(long, default_value_t = 0.15)]
    pub weight_ten_god: f64,

    // === PENALTIES (points per name element) ===
    #[arg(long, default_value_t = 8.0)]
    pub penalty_gishin: f64,
    #[arg(long, default_value_t = 4.0)]
    pub penalty_gushin: f64,

    // === YONGSHIN CREDITS ===
    #[arg(long, default_value_t = 0.7)]
    pub credit_generates_yongshin: f64,
    #[arg(long, default_value_t = 0.5)]
    pub credit_heeshin: f64,

    // === STRENGTH CREDITS ===
    #[arg(long, default_value_t = 0.7)]
    pub credit_strong_wealth: f64,
    #[arg(long, default_value_t = 0.8)]
    pub credit_weak_companion: f64,

    // === TEN-GOD ===
    #[arg(long, default_value_t = 0.5)]
    pub credit_ten_god_neutral: f64,
    #[arg(long, default_value_t = 3)]
    pub threshold_dominant_group: u32,

    // === CONFIDENCE ===
    #[arg(long, default_value_t = 0.9)]
    pub confidence_strength: f64,
    #[arg(long, default_value_t = 0.6)]
    pub confidence_root_conflict: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            weight_balance: 0.30,
            weight_yongshin: 0.35,
            weight_strength: 0.20,
            weight_ten_god: 0.15,
            penalty_gishin: 8.0,
            penalty_gushin: 4.0,
            credit_generates_yongshin: 0.7,
            credit_heeshin: 0.5,
            credit_strong_wealth: 0.7,
            credit_weak_companion: 0.8,
            credit_ten_god_neutral: 0.5,
            threshold_dominant_group: 3,
            confidence_strength: 0.9,
            confidence_root_conflict: 0.6,
        }
    }
}

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

impl ScoringWeights {
    pub fn weight_sum(&self) -> f64 {
        self.weight_balance + self.weight_yongshin + self.weight_strength + self.weight_ten_god
    }

    pub fn validate(&self) -> SajuResult<()> {
        let named = [
            ("weight_balance", self.weight_balance),
            ("weight_yongshin", self.weight_yongshin),
            ("weight_strength", self.weight_strength),
            ("weight_ten_god", self.weight_ten_god),
            ("penalty_gishin", self.penalty_gishin),
            ("penalty_gushin", self.penalty_gushin),
            ("credit_generates_yongshin", self.credit_generates_yongshin),
            ("credit_heeshin", self.credit_heeshin),
            ("credit_strong_wealth", self.credit_strong_wealth),
            ("credit_weak_companion", self.credit_weak_companion),
            ("credit_ten_god_neutral", self.credit_ten_god_neutral),
            ("confidence_strength", self.confidence_strength),
            ("confidence_root_conflict", self.confidence_root_conflict),
        ];
        for (name, value) in named {
            if !value.is_finite() || value < 0.0 {
                return Err(SajuError::Config(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        let credits = [
            ("credit_generates_yongshin", self.credit_generates_yongshin),
            ("credit_heeshin", self.credit_heeshin),
            ("credit_strong_wealth", self.credit_strong_wealth),
            ("credit_weak_companion", self.credit_weak_companion),
            ("credit_ten_god_neutral", self.credit_ten_god_neutral),
            ("confidence_strength", self.confidence_strength),
            ("confidence_root_conflict", self.confidence_root_conflict),
        ];
        // A full match always earns 1.0, so partial credits must not exceed it.
        for (name, value) in credits {
            if value > 1.0 {
                return Err(SajuError::Config(format!(
                    "{} must not exceed 1.0, got {}",
                    name, value
                )));
            }
        }

        if self.threshold_dominant_group < 1 {
            return Err(SajuError::Config(
                "threshold_dominant_group must be at least 1".to_string(),
            ));
        }

        let sum = self.weight_sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(SajuError::Config(format!(
                "sub-score weights must sum to 1.0, got {:.6}",
                sum
            )));
        }
        Ok(())
    }

    /// Unvalidated: CLI overrides are merged first, `Scorer::new` validates the result.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SajuResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn merge_from_cli(&mut self, cli_weights: &ScoringWeights, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_weights.$field.clone();
                }
            };
        }

        update_if_present!(weight_balance, "weight_balance");
        update_if_present!(weight_yongshin, "weight_yongshin");
        update_if_present!(weight_strength, "weight_strength");
        update_if_present!(weight_ten_god, "weight_ten_god");

        update_if_present!(penalty_gishin, "penalty_gishin");
        update_if_present!(penalty_gushin, "penalty_gushin");

        update_if_present!(credit_generates_yongshin, "credit_generates_yongshin");
        update_if_present!(credit_heeshin, "credit_heeshin");
        update_if_present!(credit_strong_wealth, "credit_strong_wealth");
        update_if_present!(credit_weak_companion, "credit_weak_companion");

        update_if_present!(credit_ten_god_neutral, "credit_ten_god_neutral");
        update_if_present!(threshold_dominant_group, "threshold_dominant_group");

        update_if_present!(confidence_strength, "confidence_strength");
        update_if_present!(confidence_root_conflict, "confidence_root_conflict");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let w = ScoringWeights::default();
        assert!(w.validate().is_ok());
        assert!((w.weight_sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_unbalanced_weights() {
        let w = ScoringWeights {
            weight_balance: 0.5,
            ..Default::default()
        };
        assert!(matches!(w.validate(), Err(SajuError::Config(_))));
    }

    #[test]
    fn rejects_zero_dominant_threshold() {
        let w = ScoringWeights {
            threshold_dominant_group: 0,
            ..Default::default()
        };
        assert!(matches!(w.validate(), Err(SajuError::Config(_))));
    }

    #[test]
    fn rejects_negative_penalty() {
        let w = ScoringWeights {
            penalty_gushin: -1.0,
            ..Default::default()
        };
        assert!(w.validate().is_err());
    }
}

use serde::{Deserialize, Serialize};

use crate::error::{Context, Result};
use crate::guard::{self, fail_if_negative};

/// Judgement counts from a single Project SEKAI play.
///
/// Missing counts deserialize as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Judgements {
    pub perfect: i64,
    pub great: i64,
    pub good: i64,
    pub bad: i64,
    pub miss: i64,
}

impl Judgements {
    pub fn new(perfect: i64, great: i64, good: i64, bad: i64, miss: i64) -> Self {
        Self {
            perfect,
            great,
            good,
            bad,
            miss,
        }
    }

    /// Weighted score under the 39S ruleset: 3 / 2 / 1 / 0 / 0.
    pub fn raw_score(&self) -> i64 {
        self.perfect
            .saturating_mul(3)
            .saturating_add(self.great.saturating_mul(2))
            .saturating_add(self.good)
    }

    /// Weighted score under the plus ruleset: bads are worth half a point.
    pub fn raw_score_plus(&self) -> f64 {
        self.raw_score() as f64 + self.bad as f64 * 0.5
    }

    /// Checks shared by both rulesets, in field order.
    pub(crate) fn validate(&self, level: f64, max_combo: i64) -> Result<()> {
        fail_if_negative(self.perfect, "Perfect count cannot be negative.", || {
            Context::new().with("perfect", self.perfect)
        })?;
        fail_if_negative(self.great, "Great count cannot be negative.", || {
            Context::new().with("great", self.great)
        })?;
        fail_if_negative(self.good, "Good count cannot be negative.", || {
            Context::new().with("good", self.good)
        })?;
        fail_if_negative(self.bad, "Bad count cannot be negative.", || {
            Context::new().with("bad", self.bad)
        })?;
        fail_if_negative(self.miss, "Miss count cannot be negative.", || {
            Context::new().with("miss", self.miss)
        })?;
        fail_if_negative(max_combo, "Max combo cannot be negative.", || {
            Context::new().with("max_combo", max_combo)
        })?;
        guard::chart_level(level, "Chart level cannot be negative.")
    }
}

/// Highest weighted score a chart allows.
pub(crate) fn max_score(max_combo: i64) -> i64 {
    max_combo.saturating_mul(3)
}

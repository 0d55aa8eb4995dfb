//! Project SEKAI rating.
//!
//! Ratings come from the judgement-weighted accuracy percentage mapped onto a
//! piecewise-linear curve around the chart constant:
//!
//! | accuracy     | rating                      |
//! |--------------|-----------------------------|
//! | 100%         | constant + 4                |
//! | 99.5% – 100% | constant + 3 → + 4          |
//! | 99% – 99.5%  | constant + 2 → + 3          |
//! | 98% – 99%    | constant + 1 → + 2          |
//! | 97% – 98%    | constant → + 1              |
//! | 50% – 97%    | below the constant          |
//! | ≤ 50%        | 0                           |
//!
//! The 39S ruleset ([`calculate`]) weighs bads like misses and loses 2 rating
//! per 3% below 97%. The plus ruleset ([`calculate_plus`]) gives bads half a
//! point, pays the constant scaled by the accuracy itself below 97%, and floors
//! the result to 2 decimal places. The two drift apart below 97% and are kept separate.

mod judgements;

pub use judgements::*;

use tracing::trace;

use crate::error::{Context, Result};
use crate::guard::fail_if;
use crate::math::floor_to_ndp;

/// Accuracy at which the rating equals the chart constant.
pub const BASELINE_PERCENT: f64 = 97.0;

/// Accuracy at or below which the rating is always 0.
pub const ZERO_PERCENT: f64 = 50.0;

/// Rating under the 39S ruleset.
///
/// Weights: perfect 3, great 2, good 1, bad 0, miss 0.
///
/// # Examples
///
/// ```
/// let rating = rating_core::proseka::calculate(300, 0, 0, 0, 0, 30.0, 300).unwrap();
/// assert_eq!(rating, 34.0);
/// ```
pub fn calculate(
    perfect: i64,
    great: i64,
    good: i64,
    bad: i64,
    miss: i64,
    level: f64,
    max_combo: i64,
) -> Result<f64> {
    Judgements::new(perfect, great, good, bad, miss).rating(level, max_combo)
}

/// Rating under the plus ruleset.
///
/// Weights: perfect 3, great 2, good 1, bad 0.5, miss 0.
pub fn calculate_plus(
    perfect: i64,
    great: i64,
    good: i64,
    bad: i64,
    miss: i64,
    level: f64,
    max_combo: i64,
) -> Result<f64> {
    Judgements::new(perfect, great, good, bad, miss).rating_plus(level, max_combo)
}

impl Judgements {
    /// See [`calculate`].
    pub fn rating(&self, level: f64, max_combo: i64) -> Result<f64> {
        self.validate(level, max_combo)?;

        let raw_score = self.raw_score();
        let max_score = max_score(max_combo);
        fail_if(
            raw_score > max_score,
            "Score cannot be greater than maximum possible score.",
            || {
                Context::new()
                    .with("raw_score", raw_score)
                    .with("max_score", max_score)
            },
        )?;

        if max_score == 0 {
            return Ok(0.0);
        }

        let percent = raw_score as f64 / max_score as f64 * 100.0;
        Ok(curve(percent, level).max(0.0))
    }

    /// See [`calculate_plus`].
    pub fn rating_plus(&self, level: f64, max_combo: i64) -> Result<f64> {
        self.validate(level, max_combo)?;

        let raw_score = self.raw_score_plus();
        let max_score = max_score(max_combo);
        fail_if(
            raw_score > max_score as f64,
            "Score cannot be greater than maximum possible score.",
            || {
                Context::new()
                    .with("raw_score", raw_score)
                    .with("max_score", max_score)
            },
        )?;

        if max_score == 0 {
            return Ok(0.0);
        }

        let percent = raw_score / max_score as f64 * 100.0;
        Ok(floor_to_ndp(curve_plus(percent, level).max(0.0), 2))
    }
}

/// Segments from 97% upwards, shared by both rulesets.
fn upper_curve(percent: f64, level: f64) -> f64 {
    if percent >= 100.0 {
        level + 4.0
    } else if percent >= 99.5 {
        level + 3.0 + (percent - 99.5) / 0.5
    } else if percent >= 99.0 {
        level + 2.0 + (percent - 99.0) / 0.5
    } else if percent >= 98.0 {
        level + 1.0 + (percent - 98.0)
    } else {
        level + (percent - BASELINE_PERCENT)
    }
}

fn curve(percent: f64, level: f64) -> f64 {
    let rating = if percent >= BASELINE_PERCENT {
        upper_curve(percent, level)
    } else if percent > ZERO_PERCENT {
        // -2 rating per 3% lost
        (level - (BASELINE_PERCENT - percent) * (2.0 / 3.0)).max(0.0)
    } else {
        0.0
    };
    trace!(percent, level, rating, "39S rating");
    rating
}

fn curve_plus(percent: f64, level: f64) -> f64 {
    let rating = if percent >= BASELINE_PERCENT {
        upper_curve(percent, level)
    } else if percent > ZERO_PERCENT {
        level * percent / 100.0
    } else {
        0.0
    };
    trace!(percent, level, rating, "Plus rating");
    rating
}

//! maimai DX rate (Splash+ and newer).
//!
//! Scores are achievement percentages in `[0, 101]`. The rate is
//! `floor(score × coefficient × level)` computed in fixed point, plus one for
//! ALL PERFECT / ALL PERFECT+ (added in maimai DX CiRCLE).
//!
//! Everything from 100.5% up to 101% shares the top bracket, so 101% with
//! ALL PERFECT+ is worth exactly as much as 100.5% with ALL PERFECT.

mod lamp;

pub use lamp::*;

use crate::error::{Context, Result};
use crate::guard::{self, fail_if, fail_if_negative, fail_if_non_finite};
use crate::table::CoefficientTable;

pub const MAX_SCORE: f64 = 101.0;

/// Lowest score an ALL PERFECT may carry.
pub const ALL_PERFECT_MIN_SCORE: f64 = 100.5;

/// Score fixed-point scale: 100.5% is `1_005_000`.
const SCORE_SCALE: f64 = 10_000.0;
/// Chart level fixed-point scale: 13.7 is `137`.
const LEVEL_SCALE: f64 = 10.0;
/// Cancels both scales and the percentage.
const DIVISOR: i64 = 100_000_000;
/// Top of the table; higher scores are clamped here.
const SCORE_CAP: i64 = 1_005_000;

/// Rating coefficients keyed by fixed-point score.
pub const RATING_COEFFICIENTS: CoefficientTable<i64, i64> = CoefficientTable::new(
    "maimaidx",
    &[
        (1_005_000, 224),
        (1_004_999, 222),
        (1_000_000, 216),
        (999_999, 214),
        (995_000, 211),
        (990_000, 208),
        (989_999, 206),
        (980_000, 203),
        (970_000, 200),
        (969_999, 176),
        (940_000, 168),
        (900_000, 152),
        (800_000, 136),
        (799_999, 128),
        (750_000, 120),
        (700_000, 112),
        (600_000, 96),
        (500_000, 80),
        (400_000, 64),
        (300_000, 48),
        (200_000, 32),
        (100_000, 16),
        (0, 0),
    ],
);

/// Rate for a score.
///
/// When `lamp` is `None` it is inferred with
/// [`MaimaiDxLamp::default_for_score`] before validation runs.
///
/// # Examples
///
/// ```
/// use rating_core::maimaidx::{calculate, MaimaiDxLamp};
///
/// assert_eq!(calculate(100.5, 13.0, Some(MaimaiDxLamp::AllPerfect)).unwrap(), 293);
/// assert_eq!(calculate(100.5, 13.0, None).unwrap(), 292);
/// ```
pub fn calculate(score: f64, level: f64, lamp: Option<MaimaiDxLamp>) -> Result<i64> {
    let lamp = MaimaiDxLamp::resolve(lamp, score);
    validate(score, level, lamp)?;

    let score_fixed = ((score * SCORE_SCALE).round() as i64).min(SCORE_CAP);
    let level_fixed = level_fixed(level);
    let (_, coefficient) = RATING_COEFFICIENTS.lookup(score_fixed);
    let bonus = i64::from(lamp.is_all_perfect());

    Ok(score_fixed * coefficient * level_fixed / DIVISOR + bonus)
}

// Saturates for levels past i64, which validation then rejects.
fn level_fixed(level: f64) -> i64 {
    (level * LEVEL_SCALE).round() as i64
}

/// Largest fixed-point level whose product with the top bracket fits in `i64`.
fn max_level_fixed() -> i64 {
    let (cap, top_coefficient) = RATING_COEFFICIENTS.top();
    i64::MAX / (cap * top_coefficient)
}

fn validate(score: f64, level: f64, lamp: MaimaiDxLamp) -> Result<()> {
    let score_ctx = || Context::new().with("score", score);
    let lamp_ctx = || Context::new().with("score", score).with("lamp", lamp.name());

    fail_if_non_finite(score, "Score must be a finite number.", score_ctx)?;
    fail_if(score > MAX_SCORE, "Score cannot be greater than 101%.", score_ctx)?;
    fail_if_negative(score, "Score cannot be negative.", score_ctx)?;
    guard::chart_level(level, "Internal chart level cannot be negative.")?;
    fail_if(
        level_fixed(level) > max_level_fixed(),
        "Internal chart level is too large.",
        || Context::new().with("level", level),
    )?;

    fail_if(
        lamp == MaimaiDxLamp::AllPerfectPlus && score != MAX_SCORE,
        "Cannot have an ALL PERFECT+ without 101%.",
        lamp_ctx,
    )?;
    fail_if(
        lamp != MaimaiDxLamp::AllPerfectPlus && score == MAX_SCORE,
        "A score of 101% should be an ALL PERFECT+.",
        lamp_ctx,
    )?;
    fail_if(
        lamp == MaimaiDxLamp::AllPerfect && score < ALL_PERFECT_MIN_SCORE,
        "Cannot have an ALL PERFECT without at least 100.5%.",
        lamp_ctx,
    )
}

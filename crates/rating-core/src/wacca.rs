//! WACCA rate.
//!
//! Rate is a flat multiplier on the chart constant, picked by the score
//! bracket. Two rulesets exist: the Reverse table and the finer WACCA Plus
//! table (August 2025 update). Both accept integer scores in
//! `[0, 1_000_000]`.

use crate::error::{Context, Result};
use crate::guard::{self, fail_if, fail_if_negative, fail_if_non_finite};
use crate::math::round_to_ndp;
use crate::table::CoefficientTable;

pub const MAX_SCORE: i64 = 1_000_000;

/// Score brackets as of WACCA Reverse.
pub const REVERSE_COEFFICIENTS: CoefficientTable<i64, f64> = CoefficientTable::new(
    "wacca-reverse",
    &[
        (990_000, 4.0),
        (980_000, 3.75),
        (970_000, 3.5),
        (960_000, 3.25),
        (950_000, 3.0),
        (940_000, 2.75),
        (920_000, 2.5),
        (900_000, 2.0),
        (850_000, 1.5),
        (0, 1.0),
    ],
);

/// Score brackets for WACCA Plus.
pub const PLUS_COEFFICIENTS: CoefficientTable<i64, f64> = CoefficientTable::new(
    "wacca-plus",
    &[
        (995_000, 4.05),
        (994_000, 4.04),
        (993_000, 4.03),
        (992_000, 4.02),
        (991_000, 4.01),
        (990_000, 4.0),
        (985_000, 3.875),
        (980_000, 3.75),
        (975_000, 3.625),
        (970_000, 3.5),
        (965_000, 3.375),
        (960_000, 3.25),
        (955_000, 3.125),
        (950_000, 3.0),
        (940_000, 2.75),
        (920_000, 2.5),
        (900_000, 2.0),
        (850_000, 1.5),
        (0, 1.0),
    ],
);

/// Rate for a score under the Reverse ruleset, rounded to 3 decimal places.
///
/// # Examples
///
/// ```
/// assert_eq!(rating_core::wacca::calculate(990_084, 13.2).unwrap(), 52.8);
/// ```
pub fn calculate(score: i64, level: f64) -> Result<f64> {
    rate(&REVERSE_COEFFICIENTS, score, level)
}

/// Rate for a score under the WACCA Plus ruleset.
pub fn calculate_plus(score: i64, level: f64) -> Result<f64> {
    rate(&PLUS_COEFFICIENTS, score, level)
}

/// Minimum score needed for `rate` on a chart of `level` (Reverse ruleset).
///
/// The answer is always a bracket boundary, so feeding a rate back through
/// [`calculate`] lands on or above the original score's bracket floor.
pub fn inverse(rate: f64, level: f64) -> Result<i64> {
    min_score(&REVERSE_COEFFICIENTS, rate, level)
}

/// Minimum score needed for `rate` on a chart of `level` (WACCA Plus ruleset).
pub fn inverse_plus(rate: f64, level: f64) -> Result<i64> {
    min_score(&PLUS_COEFFICIENTS, rate, level)
}

fn rate(table: &CoefficientTable<i64, f64>, score: i64, level: f64) -> Result<f64> {
    let ctx = || Context::new().with("score", score);
    fail_if(score > MAX_SCORE, "Score cannot be greater than 1million.", ctx)?;
    fail_if_negative(score, "Score cannot be negative.", ctx)?;
    guard::chart_level(level, "Chart level cannot be negative.")?;

    let (_, coefficient) = table.lookup(score);
    Ok(round_to_ndp(coefficient * level, 3))
}

fn min_score(table: &CoefficientTable<i64, f64>, rate: f64, level: f64) -> Result<i64> {
    guard::chart_level(level, "Chart level cannot be negative.")?;
    fail_if_non_finite(rate, "Rate must be a finite number.", || {
        Context::new().with("rate", rate)
    })?;

    // Division artifacts (36.6 / 12.2 = 3.0000000000000004) would otherwise
    // push an exact boundary rate into the next bracket.
    let coefficient = round_to_ndp(rate / level, 4);
    let (_, top) = table.top();
    fail_if(
        coefficient > top,
        format!("A rate of {} is not possible on a chart of level {}.", rate, level),
        || Context::new().with("rate", rate).with("level", level),
    )?;

    Ok(table.min_bound_for(coefficient))
}

//! Precondition checks shared by every calculator.
//!
//! Each helper evaluates a predicate and, when it holds, returns
//! [`Error::InvalidInput`] carrying the message and the offending fields.
//! The context closure only runs on failure.

use tracing::debug;

use crate::error::{Context, Error, Result};

/// Fail with `message` when `condition` holds.
pub fn fail_if<F>(condition: bool, message: impl Into<String>, context: F) -> Result<()>
where
    F: FnOnce() -> Context,
{
    if !condition {
        return Ok(());
    }

    let err = Error::invalid_input(message, context());
    debug!("Rejected input: {}", err);
    Err(err)
}

/// Fail when `value` is below zero.
pub fn fail_if_negative<T, F>(value: T, message: impl Into<String>, context: F) -> Result<()>
where
    T: PartialOrd + Default,
    F: FnOnce() -> Context,
{
    fail_if(value < T::default(), message, context)
}

/// Fail when `value` is NaN or infinite.
pub fn fail_if_non_finite<F>(value: f64, message: impl Into<String>, context: F) -> Result<()>
where
    F: FnOnce() -> Context,
{
    fail_if(!value.is_finite(), message, context)
}

/// Standard check for a chart constant: finite and non-negative.
pub(crate) fn chart_level(level: f64, message: &str) -> Result<()> {
    let ctx = || Context::new().with("level", level);
    fail_if_non_finite(level, "Chart level must be a finite number.", ctx)?;
    fail_if_negative(level, message, ctx)
}

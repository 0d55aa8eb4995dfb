//! Rating calculators for rhythm-game scores.
//!
//! Each game module is independent and exposes plain functions taking a
//! score (or judgement counts) and a chart constant:
//!
//! - [`wacca`] - tiered multiplier, Reverse and Plus tables, plus inverses
//! - [`maimaidx`] - fixed-point boundary table with the ALL PERFECT bonus
//! - [`proseka`] - piecewise-linear accuracy curve, 39S and plus rulesets
//!
//! All invalid input is reported as [`Error::InvalidInput`].

pub mod error;
pub mod guard;
pub mod maimaidx;
pub mod math;
pub mod proseka;
pub mod request;
pub mod table;
pub mod wacca;

pub use error::{Context, ContextValue, Error, Result};
pub use maimaidx::MaimaiDxLamp;
pub use proseka::Judgements;
pub use request::{RatingOutcome, RatingRequest};
pub use table::CoefficientTable;

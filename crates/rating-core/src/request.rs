//! Serializable calculation requests.
//!
//! A [`RatingRequest`] names one calculator and carries its arguments, so a
//! batch of calculations can be read from JSON and evaluated in one go.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::maimaidx::{self, MaimaiDxLamp};
use crate::proseka::Judgements;
use crate::wacca;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "game", rename_all = "snake_case")]
pub enum RatingRequest {
    Wacca {
        score: i64,
        level: f64,
    },
    WaccaPlus {
        score: i64,
        level: f64,
    },
    WaccaInverse {
        rate: f64,
        level: f64,
    },
    WaccaPlusInverse {
        rate: f64,
        level: f64,
    },
    #[serde(rename = "maimaidx")]
    MaimaiDx {
        score: f64,
        level: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        lamp: Option<MaimaiDxLamp>,
    },
    Proseka {
        #[serde(flatten)]
        judgements: Judgements,
        level: f64,
        max_combo: i64,
    },
    ProsekaPlus {
        #[serde(flatten)]
        judgements: Judgements,
        level: f64,
        max_combo: i64,
    },
}

/// Result of evaluating a [`RatingRequest`]: a rating, or a minimum score for
/// inverse requests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RatingOutcome {
    Rating(f64),
    Score(i64),
}

impl RatingRequest {
    pub fn evaluate(&self) -> Result<RatingOutcome> {
        match *self {
            Self::Wacca { score, level } => wacca::calculate(score, level).map(RatingOutcome::Rating),
            Self::WaccaPlus { score, level } => {
                wacca::calculate_plus(score, level).map(RatingOutcome::Rating)
            }
            Self::WaccaInverse { rate, level } => wacca::inverse(rate, level).map(RatingOutcome::Score),
            Self::WaccaPlusInverse { rate, level } => {
                wacca::inverse_plus(rate, level).map(RatingOutcome::Score)
            }
            Self::MaimaiDx { score, level, lamp } => {
                maimaidx::calculate(score, level, lamp).map(|rate| RatingOutcome::Rating(rate as f64))
            }
            Self::Proseka {
                judgements,
                level,
                max_combo,
            } => judgements.rating(level, max_combo).map(RatingOutcome::Rating),
            Self::ProsekaPlus {
                judgements,
                level,
                max_combo,
            } => judgements
                .rating_plus(level, max_combo)
                .map(RatingOutcome::Rating),
        }
    }

    /// Short name of the calculator, used in log output.
    pub fn game(&self) -> &'static str {
        match self {
            Self::Wacca { .. } => "wacca",
            Self::WaccaPlus { .. } => "wacca_plus",
            Self::WaccaInverse { .. } => "wacca_inverse",
            Self::WaccaPlusInverse { .. } => "wacca_plus_inverse",
            Self::MaimaiDx { .. } => "maimaidx",
            Self::Proseka { .. } => "proseka",
            Self::ProsekaPlus { .. } => "proseka_plus",
        }
    }
}

impl std::fmt::Display for RatingOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rating(v) => write!(f, "{}", v),
            Self::Score(v) => write!(f, "{}", v),
        }
    }
}

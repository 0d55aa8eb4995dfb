use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Clear lamp for a maimai DX play.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum MaimaiDxLamp {
    #[strum(serialize = "FAILED")]
    #[serde(rename = "FAILED")]
    Failed,
    #[strum(serialize = "CLEAR")]
    #[serde(rename = "CLEAR")]
    Clear,
    #[strum(serialize = "FULL COMBO")]
    #[serde(rename = "FULL COMBO")]
    FullCombo,
    #[strum(serialize = "FULL COMBO+")]
    #[serde(rename = "FULL COMBO+")]
    FullComboPlus,
    #[strum(serialize = "ALL PERFECT")]
    #[serde(rename = "ALL PERFECT")]
    AllPerfect,
    #[strum(serialize = "ALL PERFECT+")]
    #[serde(rename = "ALL PERFECT+")]
    AllPerfectPlus,
}

impl MaimaiDxLamp {
    /// Score (percent) at which an unspecified lamp is assumed to be a clear.
    pub const CLEAR_THRESHOLD: f64 = 80.0;

    /// Lamp assumed when the caller does not supply one.
    pub fn default_for_score(score: f64) -> Self {
        if score >= Self::CLEAR_THRESHOLD {
            Self::Clear
        } else {
            Self::Failed
        }
    }

    /// Resolve an optional lamp against its score.
    pub fn resolve(lamp: Option<Self>, score: f64) -> Self {
        lamp.unwrap_or_else(|| Self::default_for_score(score))
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// ALL PERFECT and ALL PERFECT+ earn the flat rating bonus (maimai DX CiRCLE).
    pub fn is_all_perfect(&self) -> bool {
        matches!(self, Self::AllPerfect | Self::AllPerfectPlus)
    }
}

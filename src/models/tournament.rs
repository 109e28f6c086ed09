//! Engine configuration (sport, display mode, position synonyms) and ingestion errors.

use crate::models::lenient;
use crate::models::player::PositionSynonyms;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Errors raised while ingesting configuration or labels.
///
/// The ranking and scoring operations never fail; they normalize bad input to zero/empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EngineError {
    /// Position label matches no synonym.
    UnknownPosition(String),
    /// Sport flag is neither basketball nor volleyball.
    UnknownSport(String),
    /// Display mode is neither totals nor averages.
    UnknownDisplayMode(String),
    /// Configuration document could not be decoded.
    InvalidConfig(String),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::UnknownPosition(p) => write!(f, "Unknown position: {:?}", p),
            EngineError::UnknownSport(s) => write!(f, "Unknown sport type: {:?}", s),
            EngineError::UnknownDisplayMode(m) => write!(f, "Unknown display mode: {:?}", m),
            EngineError::InvalidConfig(reason) => write!(f, "Invalid engine config: {}", reason),
        }
    }
}

impl std::error::Error for EngineError {}

/// Which sport's formulas and rate keys apply.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SportType {
    Basketball,
    #[default]
    Volleyball,
}

impl FromStr for SportType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match lenient::normalize_label(s).as_str() {
            "basketball" => Ok(SportType::Basketball),
            "volleyball" => Ok(SportType::Volleyball),
            _ => Err(EngineError::UnknownSport(s.to_string())),
        }
    }
}

/// Season totals or per-game/per-set rates.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    #[default]
    Totals,
    Averages,
}

impl FromStr for DisplayMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match lenient::normalize_label(s).as_str() {
            "totals" => Ok(DisplayMode::Totals),
            "averages" => Ok(DisplayMode::Averages),
            _ => Err(EngineError::UnknownDisplayMode(s.to_string())),
        }
    }
}

/// The only external parameters that change engine behavior. Always passed explicitly.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub sport: SportType,
    #[serde(default)]
    pub display_mode: DisplayMode,
    #[serde(default)]
    pub synonyms: PositionSynonyms,
}

impl EngineConfig {
    pub fn new(sport: SportType, display_mode: DisplayMode) -> Self {
        Self {
            sport,
            display_mode,
            synonyms: PositionSynonyms::default(),
        }
    }

    /// Decode a JSON configuration document; missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self, EngineError> {
        serde_json::from_str(text).map_err(|e| EngineError::InvalidConfig(e.to_string()))
    }
}

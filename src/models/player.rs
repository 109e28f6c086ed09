//! Player stat lines (basketball and volleyball) and volleyball positions.

use crate::models::lenient;
use crate::models::tournament::EngineError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Raw basketball counters for one player over a match or a tournament.
///
/// Per-game rates are optional: when present they are authoritative, otherwise they are
/// derived from the totals over `games_played`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BasketballStatLine {
    #[serde(default)]
    pub player_name: String,
    #[serde(default)]
    pub team_name: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub points: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub rebounds: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub assists: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub steals: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub blocks: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub three_points_made: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub turnovers: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub fouls: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub games_played: f64,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub ppg: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub rpg: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub apg: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub spg: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub bpg: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub tpg: Option<f64>,
}

impl BasketballStatLine {
    pub fn new(player_name: impl Into<String>, team_name: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            team_name: team_name.into(),
            ..Self::default()
        }
    }
}

/// Raw volleyball counters for one player (or team) over a match or a tournament.
///
/// Per-set rates are optional: when present they are authoritative, otherwise they are
/// derived from the totals over `total_sets_played`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VolleyballStatLine {
    #[serde(default)]
    pub player_name: String,
    #[serde(default)]
    pub team_name: String,
    /// Free-text position as entered upstream; see [`PositionSynonyms`].
    #[serde(default)]
    pub position: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub kills: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub assists: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub digs: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub blocks: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub service_aces: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub receptions: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub serve_errors: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub attack_errors: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub reception_errors: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub assist_errors: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub blocking_errors: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub ball_handling_errors: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_sets_played: f64,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub kps: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub sas: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub aps: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub rps: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub dps: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub bps: Option<f64>,
}

impl VolleyballStatLine {
    pub fn new(player_name: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            position: position.into(),
            ..Self::default()
        }
    }
}

/// Volleyball playing positions that have an award leaderboard.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Setter,
    Libero,
    OutsideHitter,
    OppositeHitter,
    MiddleBlocker,
}

impl Position {
    pub const ALL: [Position; 5] = [
        Position::Setter,
        Position::Libero,
        Position::OutsideHitter,
        Position::OppositeHitter,
        Position::MiddleBlocker,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Position::Setter => "Setter",
            Position::Libero => "Libero",
            Position::OutsideHitter => "Outside Hitter",
            Position::OppositeHitter => "Opposite Hitter",
            Position::MiddleBlocker => "Middle Blocker",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse of the canonical name (`"Outside Hitter"`, `"outside_hitter"`); no synonyms.
impl FromStr for Position {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = lenient::normalize_label(s).replace('_', " ");
        Position::ALL
            .into_iter()
            .find(|p| p.as_str().to_lowercase() == wanted)
            .ok_or_else(|| EngineError::UnknownPosition(s.to_string()))
    }
}

/// Injectable mapping from free-text position labels to [`Position`].
///
/// Keys are stored trimmed and lowercased; lookups normalize the same way.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "HashMap<String, Position>", into = "HashMap<String, Position>")]
pub struct PositionSynonyms {
    table: HashMap<String, Position>,
}

impl PositionSynonyms {
    /// Empty table: every label is rejected until synonyms are added.
    pub fn empty() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    pub fn with_synonym(mut self, label: &str, position: Position) -> Self {
        self.insert(label, position);
        self
    }

    pub fn insert(&mut self, label: &str, position: Position) {
        self.table.insert(lenient::normalize_label(label), position);
    }

    /// Exact match after trimming and case-folding. Unknown labels map to nothing.
    pub fn resolve(&self, label: &str) -> Option<Position> {
        self.table.get(&lenient::normalize_label(label)).copied()
    }

    /// Ingestion-time check for a single label.
    pub fn validate(&self, label: &str) -> Result<Position, EngineError> {
        self.resolve(label).ok_or_else(|| {
            log::warn!("position {:?} matches no known synonym", label);
            EngineError::UnknownPosition(label.to_string())
        })
    }

    /// Check every line's position; returns one error per unrecognised label.
    pub fn validate_all<'a>(
        &self,
        lines: impl IntoIterator<Item = &'a VolleyballStatLine>,
    ) -> Vec<EngineError> {
        lines
            .into_iter()
            .filter_map(|line| self.validate(&line.position).err())
            .collect()
    }
}

impl Default for PositionSynonyms {
    fn default() -> Self {
        Self::empty()
            .with_synonym("setter", Position::Setter)
            .with_synonym("libero", Position::Libero)
            .with_synonym("outside hitter", Position::OutsideHitter)
            .with_synonym("outside", Position::OutsideHitter)
            .with_synonym("opposite hitter", Position::OppositeHitter)
            .with_synonym("opposite", Position::OppositeHitter)
            .with_synonym("middle blocker", Position::MiddleBlocker)
            .with_synonym("middle", Position::MiddleBlocker)
    }
}

impl From<HashMap<String, Position>> for PositionSynonyms {
    fn from(raw: HashMap<String, Position>) -> Self {
        let mut synonyms = Self::empty();
        for (label, position) in raw {
            synonyms.insert(&label, position);
        }
        synonyms
    }
}

impl From<PositionSynonyms> for HashMap<String, Position> {
    fn from(synonyms: PositionSynonyms) -> Self {
        synonyms.table
    }
}

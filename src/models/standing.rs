//! Standings rows: round-robin table (with draws) and general elimination standings.

use crate::models::game::TeamId;
use crate::models::lenient;
use serde::{Deserialize, Serialize};

/// Common view of a standings row, so ordering helpers work on both table shapes.
pub trait StandingRow {
    fn team_name(&self) -> &str;

    /// Position as supplied upstream. `None` means missing or invalid and sorts last.
    fn position(&self) -> Option<u32>;

    /// Overwrite the row's rank for presentation.
    fn assign_position(&mut self, position: u32);

    /// Sort key for the position tie-break.
    fn position_key(&self) -> u32 {
        self.position().unwrap_or(u32::MAX)
    }
}

/// One row of a round-robin table. Draws are possible; 3 points per win, 1 per draw.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRobinStanding {
    pub team_id: TeamId,
    pub team_name: String,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
    #[serde(default)]
    pub position: Option<u32>,
}

impl RoundRobinStanding {
    pub const POINTS_PER_WIN: u32 = 3;
    pub const POINTS_PER_DRAW: u32 = 1;

    /// Empty row for a team that has not played yet.
    pub fn new(team_id: TeamId, team_name: impl Into<String>) -> Self {
        Self {
            team_id,
            team_name: team_name.into(),
            ..Self::default()
        }
    }

    pub fn add_win(&mut self, scored: u32, conceded: u32) {
        self.wins = self.wins.saturating_add(1);
        self.add_goals(scored, conceded);
    }

    pub fn add_draw(&mut self, scored: u32, conceded: u32) {
        self.draws = self.draws.saturating_add(1);
        self.add_goals(scored, conceded);
    }

    pub fn add_loss(&mut self, scored: u32, conceded: u32) {
        self.losses = self.losses.saturating_add(1);
        self.add_goals(scored, conceded);
    }

    fn add_goals(&mut self, scored: u32, conceded: u32) {
        // Counters saturate; lenient decoding clamps bad scores to u32::MAX.
        self.played = self.played.saturating_add(1);
        self.goals_for = self.goals_for.saturating_add(scored);
        self.goals_against = self.goals_against.saturating_add(conceded);
        self.goal_difference = i64::from(self.goals_for) - i64::from(self.goals_against);
        self.points = Self::POINTS_PER_WIN
            .saturating_mul(self.wins)
            .saturating_add(Self::POINTS_PER_DRAW.saturating_mul(self.draws));
    }
}

impl StandingRow for RoundRobinStanding {
    fn team_name(&self) -> &str {
        &self.team_name
    }

    fn position(&self) -> Option<u32> {
        self.position
    }

    fn assign_position(&mut self, position: u32) {
        self.position = Some(position);
    }
}

/// General standings row for single/double elimination, any sport. No draws.
///
/// Upstream rows are loosely typed, so every numeric field is decoded leniently.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamStanding {
    #[serde(default)]
    pub team_id: Option<TeamId>,
    #[serde(default)]
    pub team: String,
    #[serde(default, deserialize_with = "lenient::count")]
    pub wins: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub losses: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub points_for: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub points_against: u32,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub point_diff: i64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub sets_for: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub sets_against: u32,
    #[serde(default, deserialize_with = "lenient::number")]
    pub set_ratio: f64,
    /// Display text such as `"66.7%"`.
    #[serde(default, deserialize_with = "lenient::percentage_text")]
    pub win_percentage: String,
    /// Upstream rank; only ever used as a tie-break.
    #[serde(default, deserialize_with = "lenient::position")]
    pub position: Option<u32>,
    /// Dense 1..N rank assigned by the ranker.
    #[serde(default)]
    pub display_position: u32,
}

impl TeamStanding {
    pub fn new(team: impl Into<String>) -> Self {
        Self {
            team: team.into(),
            ..Self::default()
        }
    }

    /// Numeric win percentage (0 when the text is unparsable).
    pub fn win_rate(&self) -> f64 {
        lenient::parse_percentage(&self.win_percentage)
    }
}

impl StandingRow for TeamStanding {
    fn team_name(&self) -> &str {
        &self.team
    }

    fn position(&self) -> Option<u32> {
        self.position
    }

    fn assign_position(&mut self, position: u32) {
        self.position = Some(position);
        self.display_position = position;
    }
}

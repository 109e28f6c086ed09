//! Match record, its lifecycle status, and the bracket it belongs to.

use crate::models::lenient;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Unique identifier for a team.
pub type TeamId = Uuid;

/// Lifecycle of a match as reported by match-result entry.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Ongoing,
    Completed,
    /// Excluded from every computation and from display.
    Hidden,
    /// Also the fallback for any status tag this engine does not know about.
    #[default]
    #[serde(other)]
    Scheduled,
}

/// Stage tag of a match. The meaning of `round_number` depends on it.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BracketType {
    RoundRobin,
    KnockoutSemifinal,
    KnockoutFinal,
    KnockoutThirdPlace,
    Winner,
    Loser,
    Championship,
    /// Any tag this engine does not know about.
    #[default]
    #[serde(other)]
    Other,
}

impl BracketType {
    /// Knockout stages that stay locked until the round-robin phase is over.
    pub fn is_knockout(self) -> bool {
        matches!(
            self,
            BracketType::KnockoutSemifinal
                | BracketType::KnockoutFinal
                | BracketType::KnockoutThirdPlace
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BracketType::RoundRobin => "round_robin",
            BracketType::KnockoutSemifinal => "knockout_semifinal",
            BracketType::KnockoutFinal => "knockout_final",
            BracketType::KnockoutThirdPlace => "knockout_third_place",
            BracketType::Winner => "winner",
            BracketType::Loser => "loser",
            BracketType::Championship => "championship",
            BracketType::Other => "other",
        }
    }
}

/// A single match between two teams, as fetched from the data source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub team1_id: TeamId,
    pub team2_id: TeamId,
    #[serde(default)]
    pub team1_name: String,
    #[serde(default)]
    pub team2_name: String,
    /// Goals, points or sets depending on the sport.
    #[serde(default, deserialize_with = "lenient::count")]
    pub score_team1: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub score_team2: u32,
    /// None until decided (or for a draw).
    #[serde(default)]
    pub winner_id: Option<TeamId>,
    #[serde(default)]
    pub status: MatchStatus,
    /// Overloaded: 200 and 201 are reserved for the grand final and bracket reset.
    #[serde(default, deserialize_with = "lenient::integer")]
    pub round_number: i64,
    #[serde(default)]
    pub bracket_type: BracketType,
    #[serde(default)]
    pub scheduled_at: Option<DateTime<Utc>>,
}

impl GameMatch {
    pub fn new(
        team1: (TeamId, &str),
        team2: (TeamId, &str),
        bracket_type: BracketType,
        round_number: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            team1_id: team1.0,
            team2_id: team2.0,
            team1_name: team1.1.to_string(),
            team2_name: team2.1.to_string(),
            score_team1: 0,
            score_team2: 0,
            winner_id: None,
            status: MatchStatus::Scheduled,
            round_number,
            bracket_type,
            scheduled_at: None,
        }
    }

    /// Record a final score. The higher score wins; equal scores leave no winner.
    pub fn record_result(&mut self, score_team1: u32, score_team2: u32) {
        self.score_team1 = score_team1;
        self.score_team2 = score_team2;
        self.winner_id = match score_team1.cmp(&score_team2) {
            std::cmp::Ordering::Greater => Some(self.team1_id),
            std::cmp::Ordering::Less => Some(self.team2_id),
            std::cmp::Ordering::Equal => None,
        };
        self.status = MatchStatus::Completed;
    }

    pub fn is_visible(&self) -> bool {
        self.status != MatchStatus::Hidden
    }

    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }

    /// Name of the declared winner, if the winner id is one of the two teams.
    pub fn winner_name(&self) -> Option<&str> {
        match self.winner_id {
            Some(id) if id == self.team1_id => Some(&self.team1_name),
            Some(id) if id == self.team2_id => Some(&self.team2_name),
            _ => None,
        }
    }
}

//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use tournament_engine::{BracketType, GameMatch, MatchStatus, TeamId};
use uuid::Uuid;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A team handle: id plus display name.
#[derive(Clone, Debug)]
pub struct TeamRef {
    pub id: TeamId,
    pub name: String,
}

impl TeamRef {
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
        }
    }

    fn pair(&self) -> (TeamId, &str) {
        (self.id, self.name.as_str())
    }
}

pub fn teams(names: &[&str]) -> Vec<TeamRef> {
    names.iter().map(|n| TeamRef::new(n)).collect()
}

/// Scheduled match between two teams.
pub fn scheduled(a: &TeamRef, b: &TeamRef, bracket: BracketType, round: i64) -> GameMatch {
    GameMatch::new(a.pair(), b.pair(), bracket, round)
}

/// Completed match with the given score (higher score wins, equal is a draw).
pub fn played(
    a: &TeamRef,
    b: &TeamRef,
    bracket: BracketType,
    round: i64,
    score_a: u32,
    score_b: u32,
) -> GameMatch {
    let mut game = scheduled(a, b, bracket, round);
    game.record_result(score_a, score_b);
    game
}

pub fn hidden(mut game: GameMatch) -> GameMatch {
    game.status = MatchStatus::Hidden;
    game
}

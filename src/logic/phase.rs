//! Phase gating: when the round-robin phase is over and the knockout phase opens.

use crate::models::{BracketType, GameMatch, MatchStatus, RoundRobinStanding, TeamId};
use serde::{Deserialize, Serialize};

/// Whether a match can be acted on in the current phase.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Active,
    /// Known but not yet playable (knockout before the round robin is finished).
    Locked,
    /// Never shown.
    Hidden,
}

/// Matches that take part in computation and display (everything not `hidden`).
pub fn visible_matches(matches: &[GameMatch]) -> impl Iterator<Item = &GameMatch> {
    matches.iter().filter(|m| m.is_visible())
}

/// True iff at least one visible round-robin match exists and all of them are completed.
pub fn is_round_robin_complete(matches: &[GameMatch]) -> bool {
    let mut round_robin = visible_matches(matches)
        .filter(|m| m.bracket_type == BracketType::RoundRobin)
        .peekable();
    if round_robin.peek().is_none() {
        log::trace!("no round-robin matches yet; phase not complete");
        return false;
    }
    round_robin.all(|m| m.status == MatchStatus::Completed)
}

/// Knockout stages are actionable only once the round robin is complete.
pub fn is_knockout_unlocked(matches: &[GameMatch]) -> bool {
    let unlocked = is_round_robin_complete(matches);
    log::debug!("knockout phase unlocked: {}", unlocked);
    unlocked
}

/// Availability of one match given the current knockout gate.
pub fn match_availability(game: &GameMatch, knockout_unlocked: bool) -> Availability {
    if !game.is_visible() {
        Availability::Hidden
    } else if game.bracket_type.is_knockout() && !knockout_unlocked {
        Availability::Locked
    } else {
        Availability::Active
    }
}

/// A team entering the knockout bracket with its round-robin rank.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Seed {
    pub rank: u32,
    pub team_id: TeamId,
    pub team_name: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeedPair {
    pub high: Seed,
    pub low: Seed,
}

/// Semifinal pairings: rank 1 vs rank 4, rank 2 vs rank 3.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct KnockoutSeeding {
    pub semifinals: [SeedPair; 2],
}

/// Seed the knockout bracket from ranked round-robin standings (best first).
///
/// Returns `None` when fewer than four teams are ranked. The pairing is fixed.
pub fn knockout_seeding(ranked: &[RoundRobinStanding]) -> Option<KnockoutSeeding> {
    if ranked.len() < 4 {
        return None;
    }
    let seed = |index: usize| Seed {
        rank: index as u32 + 1,
        team_id: ranked[index].team_id,
        team_name: ranked[index].team_name.clone(),
    };
    Some(KnockoutSeeding {
        semifinals: [
            SeedPair {
                high: seed(0),
                low: seed(3),
            },
            SeedPair {
                high: seed(1),
                low: seed(2),
            },
        ],
    })
}

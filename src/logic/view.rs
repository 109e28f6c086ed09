//! View models: one snapshot of matches in, labeled/ranked structures out.

use crate::logic::phase::{
    is_knockout_unlocked, is_round_robin_complete, knockout_seeding, match_availability,
    visible_matches, Availability, KnockoutSeeding,
};
use crate::logic::rounds::decode_round;
use crate::logic::scoring::{award_leaderboards, PositionLeaderboard};
use crate::logic::standings::{
    aggregate_general_standings, aggregate_round_robin, champion_name, rank_round_robin,
    rank_standings, reorder_champion_first,
};
use crate::models::{
    BracketType, EngineConfig, GameMatch, RoundRobinStanding, StandingRow, TeamStanding,
    VolleyballStatLine,
};
use serde::{Deserialize, Serialize};

/// A visible match with its round label and whether it can be played yet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabeledMatch {
    pub label: String,
    pub availability: Availability,
    pub game: GameMatch,
}

/// All matches sharing a bracket and round number.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundView {
    pub bracket_type: BracketType,
    pub round_number: i64,
    pub label: String,
    pub matches: Vec<LabeledMatch>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BracketView {
    pub rounds: Vec<RoundView>,
    pub round_robin_complete: bool,
    pub knockout_unlocked: bool,
    pub champion: Option<String>,
}

/// Display order of the stages.
fn bracket_order(bracket: BracketType) -> u8 {
    match bracket {
        BracketType::RoundRobin => 0,
        BracketType::Winner => 1,
        BracketType::Loser => 2,
        BracketType::KnockoutSemifinal => 3,
        BracketType::KnockoutThirdPlace => 4,
        BracketType::KnockoutFinal => 5,
        BracketType::Championship => 6,
        BracketType::Other => 7,
    }
}

/// Group visible matches into labeled rounds.
///
/// Rounds are ordered by stage then round number; matches within a round by scheduled
/// time (unscheduled last), otherwise in input order.
pub fn build_bracket_view(matches: &[GameMatch]) -> BracketView {
    let knockout_unlocked = is_knockout_unlocked(matches);
    let mut rounds: Vec<RoundView> = Vec::new();

    for game in visible_matches(matches) {
        let labeled = LabeledMatch {
            label: decode_round(game.round_number, game.bracket_type),
            availability: match_availability(game, knockout_unlocked),
            game: game.clone(),
        };
        match rounds.iter_mut().find(|r| {
            r.bracket_type == game.bracket_type && r.round_number == game.round_number
        }) {
            Some(round) => round.matches.push(labeled),
            None => rounds.push(RoundView {
                bracket_type: game.bracket_type,
                round_number: game.round_number,
                label: labeled.label.clone(),
                matches: vec![labeled],
            }),
        }
    }

    rounds.sort_by_key(|r| (bracket_order(r.bracket_type), r.round_number));
    for round in &mut rounds {
        round
            .matches
            .sort_by_key(|m| (m.game.scheduled_at.is_none(), m.game.scheduled_at));
    }

    BracketView {
        rounds,
        round_robin_complete: is_round_robin_complete(matches),
        knockout_unlocked,
        champion: champion_name(matches),
    }
}

/// Round-robin table plus knockout seeding once the phase is over.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundRobinView {
    pub table: Vec<RoundRobinStanding>,
    pub complete: bool,
    pub seeding: Option<KnockoutSeeding>,
}

pub fn build_round_robin_view(matches: &[GameMatch]) -> RoundRobinView {
    let table = rank_round_robin(aggregate_round_robin(matches));
    let complete = is_round_robin_complete(matches);
    let seeding = if complete {
        knockout_seeding(&table)
    } else {
        None
    };
    RoundRobinView {
        table,
        complete,
        seeding,
    }
}

/// General standings with the champion (if known) pinned first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StandingsView {
    pub standings: Vec<TeamStanding>,
    pub champion: Option<String>,
}

/// Aggregate, rank and champion-reorder the same snapshot in one pass.
///
/// `champion` overrides the winner detected from the deciding match.
pub fn build_standings_view(
    matches: &[GameMatch],
    config: &EngineConfig,
    champion: Option<&str>,
) -> StandingsView {
    let mut ranked = rank_standings(&aggregate_general_standings(matches, config.sport));
    for row in &mut ranked {
        let rank = row.display_position;
        row.assign_position(rank);
    }
    let champion = champion
        .map(str::to_string)
        .or_else(|| champion_name(matches));
    StandingsView {
        standings: reorder_champion_first(&ranked, champion.as_deref()),
        champion,
    }
}

/// Volleyball award leaderboards scored per set or on totals, following the display mode.
pub fn build_award_view(
    players: &[VolleyballStatLine],
    config: &EngineConfig,
    limit: Option<usize>,
) -> Vec<PositionLeaderboard> {
    award_leaderboards(
        players,
        &config.synonyms,
        config.display_mode.into(),
        limit,
    )
}

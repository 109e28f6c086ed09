//! Standings: aggregation from match history, ranking with tie-breaks, champion-first reorder.

use crate::logic::metrics::safe_divide;
use crate::logic::phase::visible_matches;
use crate::logic::rounds::{BRACKET_RESET_ROUND, GRAND_FINAL_ROUND};
use crate::models::lenient::normalize_label;
use crate::models::{
    BracketType, GameMatch, RoundRobinStanding, SportType, StandingRow, TeamId, TeamStanding,
};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Result of a completed match from team 1's point of view.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Outcome {
    Team1,
    Team2,
    Draw,
}

/// A declared winner decides; otherwise the higher score wins and equal scores draw.
fn outcome(game: &GameMatch) -> Outcome {
    match game.winner_id {
        Some(id) if id == game.team1_id => Outcome::Team1,
        Some(id) if id == game.team2_id => Outcome::Team2,
        _ => match game.score_team1.cmp(&game.score_team2) {
            Ordering::Greater => Outcome::Team1,
            Ordering::Less => Outcome::Team2,
            Ordering::Equal => Outcome::Draw,
        },
    }
}

/// Rows in first-appearance order, looked up by team id.
struct Table<T> {
    rows: Vec<T>,
    index: HashMap<TeamId, usize>,
}

impl<T> Table<T> {
    fn new() -> Self {
        Self {
            rows: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn row(&mut self, id: TeamId, create: impl FnOnce() -> T) -> &mut T {
        let next = self.rows.len();
        let idx = *self.index.entry(id).or_insert(next);
        if idx == next {
            self.rows.push(create());
        }
        &mut self.rows[idx]
    }
}

/// Round-robin table from visible round-robin matches.
///
/// Every team in a visible round-robin match gets a row; only completed matches count.
pub fn aggregate_round_robin(matches: &[GameMatch]) -> Vec<RoundRobinStanding> {
    let mut table = Table::new();
    for game in visible_matches(matches).filter(|m| m.bracket_type == BracketType::RoundRobin) {
        table.row(game.team1_id, || {
            RoundRobinStanding::new(game.team1_id, game.team1_name.as_str())
        });
        table.row(game.team2_id, || {
            RoundRobinStanding::new(game.team2_id, game.team2_name.as_str())
        });
        if !game.is_completed() {
            continue;
        }

        let (s1, s2) = (game.score_team1, game.score_team2);
        let result = outcome(game);
        let home = table.row(game.team1_id, RoundRobinStanding::default);
        match result {
            Outcome::Team1 => home.add_win(s1, s2),
            Outcome::Team2 => home.add_loss(s1, s2),
            Outcome::Draw => home.add_draw(s1, s2),
        }
        let away = table.row(game.team2_id, RoundRobinStanding::default);
        match result {
            Outcome::Team1 => away.add_loss(s2, s1),
            Outcome::Team2 => away.add_win(s2, s1),
            Outcome::Draw => away.add_draw(s2, s1),
        }
    }
    table.rows
}

/// Sort a round-robin table: points, then goal difference, then goals for (all descending).
///
/// Full ties keep their input order. Positions are reassigned 1..N.
pub fn rank_round_robin(mut standings: Vec<RoundRobinStanding>) -> Vec<RoundRobinStanding> {
    standings.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| b.goal_difference.cmp(&a.goal_difference))
            .then_with(|| b.goals_for.cmp(&a.goals_for))
    });
    renumber(&mut standings);
    log::debug!("ranked {} round-robin rows", standings.len());
    standings
}

/// General standings from every visible, completed match.
///
/// Volleyball scores count as sets, basketball scores as points. A drawn match adds to the
/// for/against columns but to neither wins nor losses. Counters saturate at `u32::MAX`.
pub fn aggregate_general_standings(matches: &[GameMatch], sport: SportType) -> Vec<TeamStanding> {
    let mut table = Table::new();
    for game in visible_matches(matches).filter(|m| m.is_completed()) {
        let result = outcome(game);
        let sides = [
            (game.team1_id, &game.team1_name, game.score_team1, game.score_team2, Outcome::Team1),
            (game.team2_id, &game.team2_name, game.score_team2, game.score_team1, Outcome::Team2),
        ];
        for (id, name, scored, conceded, wins_as) in sides {
            let row = table.row(id, || TeamStanding {
                team_id: Some(id),
                ..TeamStanding::new(name.as_str())
            });
            match sport {
                SportType::Volleyball => {
                    row.sets_for = row.sets_for.saturating_add(scored);
                    row.sets_against = row.sets_against.saturating_add(conceded);
                }
                SportType::Basketball => {
                    row.points_for = row.points_for.saturating_add(scored);
                    row.points_against = row.points_against.saturating_add(conceded);
                }
            }
            if result == wins_as {
                row.wins = row.wins.saturating_add(1);
            } else if result != Outcome::Draw {
                row.losses = row.losses.saturating_add(1);
            }
        }
    }

    for row in &mut table.rows {
        row.point_diff = i64::from(row.points_for) - i64::from(row.points_against);
        row.set_ratio = if row.sets_against > 0 {
            safe_divide(f64::from(row.sets_for), f64::from(row.sets_against), 2)
        } else {
            f64::from(row.sets_for)
        };
        let decided = f64::from(row.wins) + f64::from(row.losses);
        let pct = safe_divide(f64::from(row.wins) * 100.0, decided, 1);
        row.win_percentage = format!("{:.1}%", pct);
    }
    table.rows
}

/// Rank general standings: win percentage descending, then upstream position ascending.
///
/// `display_position` is reassigned 1..N; the upstream `position` is left untouched.
pub fn rank_standings(standings: &[TeamStanding]) -> Vec<TeamStanding> {
    let mut ranked = standings.to_vec();
    ranked.sort_by(|a, b| {
        b.win_rate()
            .partial_cmp(&a.win_rate())
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.position_key().cmp(&b.position_key()))
    });
    for (i, row) in ranked.iter_mut().enumerate() {
        row.display_position = i as u32 + 1;
    }
    ranked
}

/// Put a known champion first without re-sorting anyone else.
///
/// The baseline is a stable sort by upstream position (missing last). If the champion name
/// (trimmed, case-insensitive) matches a row, that row moves to the front. Positions are
/// renumbered 1..N in every case.
pub fn reorder_champion_first<T>(standings: &[T], champion_name: Option<&str>) -> Vec<T>
where
    T: StandingRow + Clone,
{
    if standings.is_empty() {
        return Vec::new();
    }
    let mut ordered = standings.to_vec();
    ordered.sort_by_key(|row| row.position_key());

    let champion = champion_name
        .map(normalize_label)
        .filter(|name| !name.is_empty());
    if let Some(champion) = champion {
        match ordered
            .iter()
            .position(|row| normalize_label(row.team_name()) == champion)
        {
            Some(0) => {}
            Some(idx) => {
                let row = ordered.remove(idx);
                log::debug!("moving champion {:?} from {} to 1", row.team_name(), idx + 1);
                ordered.insert(0, row);
            }
            None => log::debug!("champion {:?} not found in standings", champion),
        }
    }

    renumber(&mut ordered);
    ordered
}

/// Winner of the tournament as decided by its deciding match, if it has been played.
///
/// A completed bracket reset beats the grand final, which beats a knockout final.
pub fn champion_name(matches: &[GameMatch]) -> Option<String> {
    decided_by(matches, |m: &GameMatch| m.round_number == BRACKET_RESET_ROUND)
        .or_else(|| decided_by(matches, |m: &GameMatch| m.round_number == GRAND_FINAL_ROUND))
        .or_else(|| {
            decided_by(matches, |m: &GameMatch| {
                m.bracket_type == BracketType::KnockoutFinal
            })
        })
}

/// Winner of the last completed match selected by `pred`.
fn decided_by(matches: &[GameMatch], pred: impl Fn(&GameMatch) -> bool) -> Option<String> {
    visible_matches(matches)
        .filter(|m| m.is_completed() && pred(*m))
        .filter_map(|m| m.winner_name())
        .last()
        .map(str::to_string)
}

fn renumber<T: StandingRow>(rows: &mut [T]) {
    for (i, row) in rows.iter_mut().enumerate() {
        row.assign_position(i as u32 + 1);
    }
}

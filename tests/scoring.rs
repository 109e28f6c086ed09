//! MVP score, mythical five, volleyball positional awards and match efficiency.

mod common;

use serde_json::json;
use tournament_engine::{
    award_leaderboards, match_efficiency, mvp_score, mythical_five, position_leaderboard,
    position_score, top_by_mvp, BasketballStatLine, DisplayMode, Position, PositionSynonyms,
    ScoreBasis, VolleyballStatLine,
};

fn guard(name: &str, ppg: f64) -> BasketballStatLine {
    BasketballStatLine {
        ppg: Some(ppg),
        ..BasketballStatLine::new(name, "Hawks")
    }
}

fn volleyball(name: &str, position: &str) -> VolleyballStatLine {
    VolleyballStatLine::new(name, position)
}

#[test]
fn mvp_score_subtracts_turnovers() {
    common::init_logging();
    let row = json!({"ppg": 20, "rpg": 5, "apg": 3, "spg": 1, "bpg": 1, "tpg": 2});
    assert_eq!(mvp_score(&row), 28.0);
    assert_eq!(mvp_score(&json!({})), 0.0);
}

#[test]
fn mvp_score_derives_missing_rates_from_totals() {
    let line = BasketballStatLine {
        points: 100.0,
        rebounds: 40.0,
        assists: 20.0,
        steals: 5.0,
        blocks: 5.0,
        turnovers: 15.0,
        games_played: 5.0,
        ..BasketballStatLine::new("Kai", "Hawks")
    };
    // 20 + 8 + 4 + 1 + 1 - 3
    assert_eq!(mvp_score(&line), 31.0);
}

#[test]
fn mvp_score_keeps_precomputed_precision() {
    let row = json!({"ppg": 20.125, "rpg": 0.0625});
    assert_eq!(mvp_score(&row), 20.1875);
    let line = BasketballStatLine {
        ppg: Some(20.125),
        tpg: Some(0.125),
        ..BasketballStatLine::new("Rae", "Hawks")
    };
    assert_eq!(mvp_score(&line), 20.0);
}

#[test]
fn mythical_five_is_top_five_with_stable_ties() {
    let players = vec![
        guard("Sixth", 5.0),
        guard("Tied first-in", 20.0),
        guard("Top", 30.0),
        guard("Tied second-in", 20.0),
        guard("Fifth", 10.0),
        guard("Fourth", 15.0),
        guard("Seventh", 1.0),
    ];
    let five = mythical_five(&players);
    let names: Vec<&str> = five.iter().map(|s| s.entry.player_name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Top", "Tied first-in", "Tied second-in", "Fourth", "Fifth"]
    );
    let ranks: Vec<u32> = five.iter().map(|s| s.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
    assert_eq!(five[0].score, 30.0);

    assert_eq!(top_by_mvp(&players, 2).len(), 2);
    assert!(mythical_five::<BasketballStatLine>(&[]).is_empty());
}

#[test]
fn setter_score_on_totals() {
    let setter = VolleyballStatLine {
        assists: 30.0,
        assist_errors: 2.0,
        ball_handling_errors: 1.0,
        serve_errors: 1.0,
        ..volleyball("Sam", "Setter")
    };
    assert_eq!(position_score(&setter, Position::Setter, ScoreBasis::Totals), 26.0);
}

#[test]
fn setter_score_per_set() {
    let setter = VolleyballStatLine {
        assists: 300.0,
        assist_errors: 2.0,
        ball_handling_errors: 1.0,
        serve_errors: 1.0,
        total_sets_played: 10.0,
        ..volleyball("Sam", "Setter")
    };
    // 30 - (0.2 + 0.1 + 0.1)
    assert_eq!(position_score(&setter, Position::Setter, ScoreBasis::PerSet), 29.6);

    let precomputed = VolleyballStatLine {
        aps: Some(12.0),
        ..setter.clone()
    };
    assert_eq!(
        position_score(&precomputed, Position::Setter, ScoreBasis::PerSet),
        11.6
    );

    let no_sets = VolleyballStatLine {
        total_sets_played: 0.0,
        ..setter
    };
    assert_eq!(position_score(&no_sets, Position::Setter, ScoreBasis::PerSet), 0.0);
}

#[test]
fn each_position_has_its_own_penalties() {
    let line = VolleyballStatLine {
        kills: 10.0,
        digs: 6.0,
        receptions: 4.0,
        blocks: 3.0,
        service_aces: 2.0,
        attack_errors: 4.0,
        serve_errors: 1.0,
        blocking_errors: 2.0,
        reception_errors: 1.0,
        ball_handling_errors: 1.0,
        ..volleyball("Any", "")
    };
    let score = |p| position_score(&line, p, ScoreBasis::Totals);
    assert_eq!(score(Position::Libero), 6.0); // 10 - 4
    assert_eq!(score(Position::OutsideHitter), 8.0); // 15 - 7
    assert_eq!(score(Position::OppositeHitter), 9.0); // 15 - 6
    assert_eq!(score(Position::MiddleBlocker), 7.0); // 13 - 6
}

#[test]
fn scores_can_go_negative() {
    let libero = VolleyballStatLine {
        digs: 1.0,
        reception_errors: 3.0,
        ..volleyball("Lee", "Libero")
    };
    assert_eq!(position_score(&libero, Position::Libero, ScoreBasis::Totals), -2.0);
}

#[test]
fn leaderboard_uses_synonyms_and_drops_unknown_positions() {
    let players = vec![
        VolleyballStatLine { kills: 5.0, ..volleyball("Short label", "Outside") },
        VolleyballStatLine { kills: 9.0, ..volleyball("Padded", "  outside HITTER ") },
        VolleyballStatLine { kills: 50.0, ..volleyball("Abbreviation", "OH") },
        VolleyballStatLine { kills: 50.0, ..volleyball("Blank", "") },
        VolleyballStatLine { kills: 7.0, ..volleyball("Middle", "middle") },
    ];
    let synonyms = PositionSynonyms::default();
    let board = position_leaderboard(
        &players,
        Position::OutsideHitter,
        &synonyms,
        ScoreBasis::Totals,
        None,
    );
    let names: Vec<&str> = board.iter().map(|s| s.entry.player_name.as_str()).collect();
    assert_eq!(names, vec!["Padded", "Short label"]);

    let custom = PositionSynonyms::default().with_synonym("oh", Position::OutsideHitter);
    let board = position_leaderboard(
        &players,
        Position::OutsideHitter,
        &custom,
        ScoreBasis::Totals,
        Some(1),
    );
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].entry.player_name, "Abbreviation");
}

#[test]
fn award_leaderboards_cover_every_position() {
    let players = vec![
        VolleyballStatLine { assists: 40.0, ..volleyball("Set", "setter") },
        VolleyballStatLine { digs: 20.0, ..volleyball("Dig", "Libero") },
        VolleyballStatLine { blocks: 8.0, ..volleyball("Wall", "Middle Blocker") },
        volleyball("Mystery", "coach"),
    ];
    let boards = award_leaderboards(
        &players,
        &PositionSynonyms::default(),
        ScoreBasis::from(DisplayMode::Totals),
        None,
    );
    let positions: Vec<Position> = boards.iter().map(|b| b.position).collect();
    assert_eq!(positions, Position::ALL.to_vec());
    assert_eq!(boards[0].entries[0].score, 40.0);
    assert_eq!(boards[1].entries[0].entry.player_name, "Dig");
    assert!(boards[2].entries.is_empty());
    assert!(boards[3].entries.is_empty());
    assert_eq!(boards[4].entries[0].score, 8.0);
    let placed: usize = boards.iter().map(|b| b.entries.len()).sum();
    assert_eq!(placed, 3);
}

#[test]
fn match_efficiency_is_a_plain_sum() {
    let line = VolleyballStatLine {
        kills: 12.0,
        digs: 8.0,
        blocks: 2.0,
        service_aces: 1.0,
        receptions: 30.0,
        assists: 4.0,
        attack_errors: 3.0,
        serve_errors: 2.0,
        reception_errors: 1.0,
        ..volleyball("Eff", "Outside Hitter")
    };
    assert_eq!(match_efficiency(&line), 17.0);
    assert_eq!(match_efficiency(&json!({"kills": "4", "serve_errors": null})), 4.0);
}

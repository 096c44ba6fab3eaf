//! Formula generation tests
//!
//! Expected formulas are copied from a live season sheet; the layout below must
//! match that sheet's columns or every expectation shifts.

use pretty_assertions::assert_eq;
use standings_sheets::core::{FormulaGenerator, ScoreEntryColumns, StandingsSheetLayout};
use standings_sheets::types::*;

const START_GAMES_ROW: u32 = 3;
const END_GAMES_ROW: u32 = 8;
const END_TEAMS_ROW: u32 = 18;
const FIRST_TEAM_CELL: &str = "Teams!A2";

/// HOME HG AG AWAY WINNER | TEAM GP W L D PTS REF TOTAL RANK GF GA GD
/// A    B  C  D    E      | F    G  H I J K   L   M     N    O  P  Q
fn reference_layout() -> StandingsSheetLayout {
    StandingsSheetLayout::standard([
        HDR_TEAM_NAME,
        HDR_GAMES_PLAYED,
        HDR_NUM_WINS,
        HDR_NUM_LOSSES,
        HDR_NUM_DRAWS,
        HDR_GAME_PTS,
        HDR_REF_PTS,
        HDR_TOTAL_PTS,
        HDR_RANK,
        HDR_GOALS_FOR,
        HDR_GOALS_AGAINST,
        HDR_GOAL_DIFF,
    ])
    .unwrap()
}

fn formula_generator() -> FormulaGenerator {
    FormulaGenerator::new(reference_layout())
}

// ═══════════════════════════════════════════════════════════════════════════
// GAME ROW FORMULAS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_game_winner_formula() {
    let expected =
        "=IFS(OR(ISBLANK(B3), ISBLANK(C3)), \"\", B3>C3, \"H\", B3<C3, \"A\", B3=C3, \"D\")";
    assert_eq!(formula_generator().game_winner_formula(START_GAMES_ROW).unwrap(), expected);
}

// ═══════════════════════════════════════════════════════════════════════════
// COUNT FORMULAS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_games_played_formula() {
    let expected = "COUNTIFS(A$3:A$8,\"=\"&Teams!A2,B$3:B$8,\"<>\")+COUNTIFS(D$3:D$8,\"=\"&Teams!A2,C$3:C$8,\"<>\")";
    let formula = formula_generator()
        .games_played_formula(START_GAMES_ROW, END_GAMES_ROW, FIRST_TEAM_CELL)
        .unwrap();
    assert_eq!(formula, expected);
}

#[test]
fn test_games_won_formula() {
    let expected = "COUNTIFS(A$3:A$8,\"=\"&Teams!A2,E$3:E$8,\"H\")+COUNTIFS(D$3:D$8,\"=\"&Teams!A2,E$3:E$8,\"A\")";
    let formula = formula_generator()
        .games_won_formula(START_GAMES_ROW, END_GAMES_ROW, FIRST_TEAM_CELL)
        .unwrap();
    assert_eq!(formula, expected);
}

#[test]
fn test_games_lost_formula() {
    let expected = "COUNTIFS(A$3:A$8,\"=\"&Teams!A2,E$3:E$8,\"A\")+COUNTIFS(D$3:D$8,\"=\"&Teams!A2,E$3:E$8,\"H\")";
    let formula = formula_generator()
        .games_lost_formula(START_GAMES_ROW, END_GAMES_ROW, FIRST_TEAM_CELL)
        .unwrap();
    assert_eq!(formula, expected);
}

#[test]
fn test_games_drawn_formula() {
    let expected = "COUNTIFS(A$3:A$8,\"=\"&Teams!A2,E$3:E$8,\"D\")+COUNTIFS(D$3:D$8,\"=\"&Teams!A2,E$3:E$8,\"D\")";
    let formula = formula_generator()
        .games_drawn_formula(START_GAMES_ROW, END_GAMES_ROW, FIRST_TEAM_CELL)
        .unwrap();
    assert_eq!(formula, expected);
}

// ═══════════════════════════════════════════════════════════════════════════
// POINTS AND RANK
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_game_points_formula() {
    assert_eq!(
        formula_generator().game_points_formula(START_GAMES_ROW).unwrap(),
        "=(H3*3) + J3"
    );
}

#[test]
fn test_team_rank_formula() {
    assert_eq!(
        formula_generator()
            .team_rank_formula(START_GAMES_ROW, END_TEAMS_ROW)
            .unwrap(),
        "RANK(M3,M$3:M$18)"
    );
}

#[test]
fn test_team_rank_formula_for_other_row() {
    assert_eq!(
        formula_generator()
            .team_rank_formula_at(7, START_GAMES_ROW, END_TEAMS_ROW)
            .unwrap(),
        "RANK(M7,M$3:M$18)"
    );
    assert_eq!(
        FormulaGenerator::team_rank_formula_for("AB", 4, 4, 9),
        "RANK(AB4,AB$4:AB$9)"
    );
}

#[test]
fn test_total_points_formula() {
    assert_eq!(
        formula_generator().total_points_formula(START_GAMES_ROW).unwrap(),
        "=K3 + L3"
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// GOALS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_goals_scored_formula() {
    let expected = "SUMIFS(B$3:B$8, A$3:A$8,\"=\"&Teams!A2)+SUMIFS(C$3:C$8, D$3:D$8,\"=\"&Teams!A2)";
    let formula = formula_generator()
        .goals_scored_formula(START_GAMES_ROW, END_GAMES_ROW, FIRST_TEAM_CELL)
        .unwrap();
    assert_eq!(formula, expected);
}

#[test]
fn test_goals_against_formula() {
    let expected = "SUMIFS(C$3:C$8, A$3:A$8,\"=\"&Teams!A2)+SUMIFS(B$3:B$8, D$3:D$8,\"=\"&Teams!A2)";
    let formula = formula_generator()
        .goals_against_formula(START_GAMES_ROW, END_GAMES_ROW, FIRST_TEAM_CELL)
        .unwrap();
    assert_eq!(formula, expected);
}

#[test]
fn test_goals_formula_over_explicit_columns() {
    // a second score block further right, as tournament sheets have
    let cols = ScoreEntryColumns {
        home_team_column_name: "S".to_string(),
        home_goals_column_name: "T".to_string(),
        away_goals_column_name: "U".to_string(),
        away_team_column_name: "V".to_string(),
    };
    let formula = formula_generator().goals_formula(&cols, 20, 25, "Teams!A2", true);
    assert_eq!(
        formula,
        "SUMIFS(T$20:T$25, S$20:S$25,\"=\"&Teams!A2)+SUMIFS(U$20:U$25, V$20:V$25,\"=\"&Teams!A2)"
    );
}

#[test]
fn test_goal_differential_formula() {
    assert_eq!(
        formula_generator().goal_differential_formula(START_GAMES_ROW).unwrap(),
        "=O3 - P3"
    );
}

#[test]
fn test_formula_for_unused_column_fails() {
    let layout = StandingsSheetLayout::standard([HDR_TEAM_NAME, HDR_GAMES_PLAYED]).unwrap();
    let fg = FormulaGenerator::new(layout);
    assert!(fg.game_points_formula(START_GAMES_ROW).is_err());
    assert!(fg.goal_differential_formula(START_GAMES_ROW).is_err());
    assert!(fg.team_rank_formula(START_GAMES_ROW, END_TEAMS_ROW).is_err());
}

//! Formula text for the standings table
//!
//! Every formula is generated for the first row of its block; the sheet
//! shifts relative references when the formula is repeated down a column, and
//! the `$` anchors keep the game-row ranges fixed.
//!
//! The count and sum formulas have no leading `=` so several of them can be
//! combined into one cell (tournament sheets do this). The request creators
//! add the `=`.

use super::layout::StandingsSheetLayout;
use crate::error::StandingsResult;
use crate::sheets::cell_reference::{cell_range, cell_reference, CellRangeOptions};
use crate::types::*;
use std::sync::Arc;

/// The four score-entry column names a goals formula reads from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntryColumns {
    pub home_team_column_name: String,
    pub home_goals_column_name: String,
    pub away_goals_column_name: String,
    pub away_team_column_name: String,
}

impl ScoreEntryColumns {
    pub fn from_layout(layout: &StandingsSheetLayout) -> StandingsResult<Self> {
        Ok(Self {
            home_team_column_name: layout.home_team_column_name()?,
            home_goals_column_name: layout.home_goals_column_name()?,
            away_goals_column_name: layout.away_goals_column_name()?,
            away_team_column_name: layout.away_team_column_name()?,
        })
    }
}

/// Generates formulas for the standings table of one sheet layout
#[derive(Debug, Clone)]
pub struct FormulaGenerator {
    layout: Arc<StandingsSheetLayout>,
}

impl FormulaGenerator {
    pub fn new(layout: StandingsSheetLayout) -> Self {
        Self {
            layout: Arc::new(layout),
        }
    }

    pub fn from_shared(layout: Arc<StandingsSheetLayout>) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &StandingsSheetLayout {
        &self.layout
    }

    /// Who won the game on `row_num`.
    ///
    /// `=IFS(OR(ISBLANK(B3), ISBLANK(C3)), "", B3>C3, "H", B3<C3, "A", B3=C3, "D")`:
    /// blank until both scores are in, then the home, away or draw indicator.
    pub fn game_winner_formula(&self, row_num: u32) -> StandingsResult<String> {
        let home = cell_reference(&self.layout.home_goals_column_name()?, row_num);
        let away = cell_reference(&self.layout.away_goals_column_name()?, row_num);
        Ok(format!(
            "=IFS(OR(ISBLANK({home}), ISBLANK({away})), \"\", {home}>{away}, \"{}\", {home}<{away}, \"{}\", {home}={away}, \"{}\")",
            HOME_TEAM_INDICATOR, AWAY_TEAM_INDICATOR, DRAW_INDICATOR
        ))
    }

    /// Games played: appearances in the home column plus the away column, counted
    /// only once a score has been entered.
    ///
    /// `COUNTIFS(A$3:A$8,"="&Teams!A2,B$3:B$8,"<>")+COUNTIFS(D$3:D$8,"="&Teams!A2,C$3:C$8,"<>")`
    pub fn games_played_formula(
        &self,
        start_row_num: u32,
        end_row_num: u32,
        first_team_cell: &str,
    ) -> StandingsResult<String> {
        let home_team = self.game_range_per_team(
            &self.layout.home_team_column_name()?,
            start_row_num,
            end_row_num,
            first_team_cell,
        );
        let away_team = self.game_range_per_team(
            &self.layout.away_team_column_name()?,
            start_row_num,
            end_row_num,
            first_team_cell,
        );
        let home_score =
            Self::ignoring_blank_scores(&self.layout.home_goals_column_name()?, start_row_num, end_row_num);
        let away_score =
            Self::ignoring_blank_scores(&self.layout.away_goals_column_name()?, start_row_num, end_row_num);
        Ok(format!(
            "COUNTIFS({home_team},{home_score})+COUNTIFS({away_team},{away_score})"
        ))
    }

    /// `COUNTIFS(A$3:A$8,"="&Teams!A2,E$3:E$8,"H")+COUNTIFS(D$3:D$8,"="&Teams!A2,E$3:E$8,"A")`
    pub fn games_won_formula(
        &self,
        start_row_num: u32,
        end_row_num: u32,
        first_team_cell: &str,
    ) -> StandingsResult<String> {
        self.result_count_formula(
            start_row_num,
            end_row_num,
            first_team_cell,
            HOME_TEAM_INDICATOR,
            AWAY_TEAM_INDICATOR,
        )
    }

    /// `COUNTIFS(A$3:A$8,"="&Teams!A2,E$3:E$8,"A")+COUNTIFS(D$3:D$8,"="&Teams!A2,E$3:E$8,"H")`
    pub fn games_lost_formula(
        &self,
        start_row_num: u32,
        end_row_num: u32,
        first_team_cell: &str,
    ) -> StandingsResult<String> {
        self.result_count_formula(
            start_row_num,
            end_row_num,
            first_team_cell,
            AWAY_TEAM_INDICATOR,
            HOME_TEAM_INDICATOR,
        )
    }

    /// `COUNTIFS(A$3:A$8,"="&Teams!A2,E$3:E$8,"D")+COUNTIFS(D$3:D$8,"="&Teams!A2,E$3:E$8,"D")`
    pub fn games_drawn_formula(
        &self,
        start_row_num: u32,
        end_row_num: u32,
        first_team_cell: &str,
    ) -> StandingsResult<String> {
        self.result_count_formula(
            start_row_num,
            end_row_num,
            first_team_cell,
            DRAW_INDICATOR,
            DRAW_INDICATOR,
        )
    }

    /// 3 points for a win, 1 for a draw: `=(H3*3) + J3`
    pub fn game_points_formula(&self, start_row_num: u32) -> StandingsResult<String> {
        let wins = cell_reference(&self.layout.num_wins_column_name()?, start_row_num);
        let draws = cell_reference(&self.layout.num_draws_column_name()?, start_row_num);
        Ok(format!("=({wins}*3) + {draws}"))
    }

    /// Rank on total points for a repeated-cell request: `RANK(M3,M$3:M$18)`
    pub fn team_rank_formula(&self, start_row_num: u32, end_row_num: u32) -> StandingsResult<String> {
        self.team_rank_formula_at(start_row_num, start_row_num, end_row_num)
    }

    /// Rank on total points for the team on `row_num`
    pub fn team_rank_formula_at(
        &self,
        row_num: u32,
        start_row_num: u32,
        end_row_num: u32,
    ) -> StandingsResult<String> {
        let total = self.layout.total_points_column_name()?;
        Ok(Self::team_rank_formula_for(&total, row_num, start_row_num, end_row_num))
    }

    /// Rank of `column_name{row_num}` within `column_name${start}:column_name${end}`
    pub fn team_rank_formula_for(
        column_name: &str,
        row_num: u32,
        start_row_num: u32,
        end_row_num: u32,
    ) -> String {
        let range = cell_range(column_name, start_row_num, end_row_num, CellRangeOptions::FixRow);
        format!("RANK({},{})", cell_reference(column_name, row_num), range)
    }

    /// Goals scored: home goals where the team was home, plus away goals where
    /// it was away.
    ///
    /// `SUMIFS(B$3:B$8, A$3:A$8,"="&Teams!A2)+SUMIFS(C$3:C$8, D$3:D$8,"="&Teams!A2)`
    pub fn goals_scored_formula(
        &self,
        start_row_num: u32,
        end_row_num: u32,
        first_team_cell: &str,
    ) -> StandingsResult<String> {
        let cols = ScoreEntryColumns::from_layout(&self.layout)?;
        Ok(self.goals_formula(&cols, start_row_num, end_row_num, first_team_cell, true))
    }

    /// Goals conceded; the goal columns of [`Self::goals_scored_formula`] swapped.
    ///
    /// `SUMIFS(C$3:C$8, A$3:A$8,"="&Teams!A2)+SUMIFS(B$3:B$8, D$3:D$8,"="&Teams!A2)`
    pub fn goals_against_formula(
        &self,
        start_row_num: u32,
        end_row_num: u32,
        first_team_cell: &str,
    ) -> StandingsResult<String> {
        let cols = ScoreEntryColumns::from_layout(&self.layout)?;
        Ok(self.goals_formula(&cols, start_row_num, end_row_num, first_team_cell, false))
    }

    /// Goals scored (`goals_for`) or conceded over an explicit set of
    /// score-entry columns. No leading `=`.
    pub fn goals_formula(
        &self,
        cols: &ScoreEntryColumns,
        start_row_num: u32,
        end_row_num: u32,
        first_team_cell: &str,
        goals_for: bool,
    ) -> String {
        let home_goals = cell_range(
            &cols.home_goals_column_name,
            start_row_num,
            end_row_num,
            CellRangeOptions::FixRow,
        );
        let away_goals = cell_range(
            &cols.away_goals_column_name,
            start_row_num,
            end_row_num,
            CellRangeOptions::FixRow,
        );
        let home_teams = self.game_range_per_team(
            &cols.home_team_column_name,
            start_row_num,
            end_row_num,
            first_team_cell,
        );
        let away_teams = self.game_range_per_team(
            &cols.away_team_column_name,
            start_row_num,
            end_row_num,
            first_team_cell,
        );

        let (when_home, when_away) = if goals_for {
            (&home_goals, &away_goals)
        } else {
            (&away_goals, &home_goals)
        };
        format!("SUMIFS({when_home}, {home_teams})+SUMIFS({when_away}, {away_teams})")
    }

    /// `=O3 - P3`
    pub fn goal_differential_formula(&self, start_row_num: u32) -> StandingsResult<String> {
        let goals_for = cell_reference(&self.layout.goals_for_column_name()?, start_row_num);
        let goals_against = cell_reference(&self.layout.goals_against_column_name()?, start_row_num);
        Ok(format!("={goals_for} - {goals_against}"))
    }

    /// Sum of the point columns present in the layout (`PTS`, `REF`, `VOL`,
    /// `SPT`), minus `DED` when there is one: `=K3 + L3`
    pub fn total_points_formula(&self, start_row_num: u32) -> StandingsResult<String> {
        let mut formula = POINT_COLUMN_HEADERS
            .iter()
            .filter_map(|h| self.layout.column_name_by_header(h))
            .map(|col| cell_reference(&col, start_row_num))
            .collect::<Vec<_>>()
            .join(" + ");

        if formula.is_empty() {
            // at least game points are required for a total
            self.layout.game_points_column_name()?;
        }

        if let Some(deduction) = self.layout.column_name_by_header(HDR_PTS_DEDUCTION) {
            formula.push_str(&format!(" - {}", cell_reference(&deduction, start_row_num)));
        }
        Ok(format!("={formula}"))
    }

    /// Team name pulled from the teams list: `=Teams!A2`
    pub fn team_name_formula(&self, first_team_cell: &str) -> String {
        format!("={first_team_cell}")
    }

    /// `A$3:A$8,"="&Teams!A2`
    fn game_range_per_team(
        &self,
        column_name: &str,
        start_row_num: u32,
        end_row_num: u32,
        first_team_cell: &str,
    ) -> String {
        let range = cell_range(column_name, start_row_num, end_row_num, CellRangeOptions::FixRow);
        format!("{range},\"=\"&{first_team_cell}")
    }

    /// `B$3:B$8,"<>"`
    fn ignoring_blank_scores(column_name: &str, start_row_num: u32, end_row_num: u32) -> String {
        let range = cell_range(column_name, start_row_num, end_row_num, CellRangeOptions::FixRow);
        format!("{range},\"<>\"")
    }

    /// Appearances as home team with `home_result` in the winner column plus
    /// appearances as away team with `away_result`
    fn result_count_formula(
        &self,
        start_row_num: u32,
        end_row_num: u32,
        first_team_cell: &str,
        home_result: char,
        away_result: char,
    ) -> StandingsResult<String> {
        let home_team = self.game_range_per_team(
            &self.layout.home_team_column_name()?,
            start_row_num,
            end_row_num,
            first_team_cell,
        );
        let away_team = self.game_range_per_team(
            &self.layout.away_team_column_name()?,
            start_row_num,
            end_row_num,
            first_team_cell,
        );
        let winner = cell_range(
            &self.layout.winner_column_name()?,
            start_row_num,
            end_row_num,
            CellRangeOptions::FixRow,
        );
        Ok(format!(
            "COUNTIFS({home_team},{winner},\"{home_result}\")+COUNTIFS({away_team},{winner},\"{away_result}\")"
        ))
    }
}

//! Request creators: one per standings-table column
//!
//! Each creator resolves its column when it is built (an unknown header fails
//! there, not later) and turns a [`StandingsRequestConfig`] into a single
//! repeated-cell request for that column.

use super::formula::FormulaGenerator;
use crate::error::{StandingsError, StandingsResult};
use crate::sheets::request::Request;
use crate::sheets::request_creator;
use crate::types::*;
use tracing::debug;

/// Where a block of standings rows (or game rows) sits, and what it reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsRequestConfig {
    /// `None` targets the first sheet
    pub sheet_id: Option<i32>,
    /// Zero-based index of the first row the request writes
    pub sheet_start_row_index: u32,
    /// Row number of the first game-score row (usually `sheet_start_row_index + 1`)
    pub start_games_row_num: u32,
    /// Rows written by the request: games for the winner column, teams otherwise
    pub row_count: u32,
    /// Row number of the last game-score row
    pub end_games_row_num: u32,
    /// Cell holding the first team's name, e.g. `Teams!A2`
    pub first_team_cell: String,
    /// Row number of the previous round's first standings row; `None` in round 1
    pub last_round_start_row_num: Option<u32>,
    /// `false` turns every game of the round into a scrimmage
    pub round_counts_for_standings: bool,
}

impl Default for StandingsRequestConfig {
    fn default() -> Self {
        Self {
            sheet_id: None,
            sheet_start_row_index: 0,
            start_games_row_num: 1,
            row_count: 0,
            end_games_row_num: 1,
            first_team_cell: String::new(),
            last_round_start_row_num: None,
            round_counts_for_standings: true,
        }
    }
}

/// Builds the request for one standings-table column
pub trait StandingsRequestCreator {
    /// Header of the column this creator fills
    fn column_header(&self) -> &str;

    fn is_applicable_to_column(&self, column_header: &str) -> bool {
        column_header == self.column_header()
    }

    fn create_request(&self, config: &StandingsRequestConfig) -> StandingsResult<Request>;
}

/// A resolved column: header, name and index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnTarget {
    pub header: String,
    pub name: String,
    pub index: u32,
}

impl ColumnTarget {
    pub fn resolve(generator: &FormulaGenerator, header: &str) -> StandingsResult<Self> {
        let layout = generator.layout();
        Ok(Self {
            header: header.to_string(),
            name: layout.require_column_name(header)?,
            index: layout.require_column_index(header)?,
        })
    }

    fn formula_request(&self, config: &StandingsRequestConfig, formula: String) -> Request {
        debug!(column = %self.header, %formula, "repeated formula request");
        request_creator::repeated_formula_request(
            config.sheet_id,
            config.sheet_start_row_index,
            self.index,
            config.row_count,
            formula,
        )
    }

    /// `+G3` to add last round's value, nothing in round 1.
    ///
    /// Applies to every cumulative column: games played, results, goals.
    fn add_last_round_value(&self, last_round_start_row_num: Option<u32>) -> String {
        match last_round_start_row_num {
            Some(row) => format!("+{}{}", self.name, row),
            None => String::new(),
        }
    }
}

//==============================================================================
// Per-row formulas
//==============================================================================

/// The per-row formulas that only depend on the block's first row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowFormula {
    GameWinner,
    GamePoints,
    GoalDifferential,
    TotalPoints,
    TeamName,
}

impl RowFormula {
    pub fn column_header(self) -> &'static str {
        match self {
            RowFormula::GameWinner => HDR_WINNING_TEAM,
            RowFormula::GamePoints => HDR_GAME_PTS,
            RowFormula::GoalDifferential => HDR_GOAL_DIFF,
            RowFormula::TotalPoints => HDR_TOTAL_PTS,
            RowFormula::TeamName => HDR_TEAM_NAME,
        }
    }
}

/// Fills a column with a formula computed from the same row
#[derive(Debug, Clone)]
pub struct RowFormulaRequestCreator {
    generator: FormulaGenerator,
    target: ColumnTarget,
    formula: RowFormula,
}

impl RowFormulaRequestCreator {
    pub fn new(generator: &FormulaGenerator, formula: RowFormula) -> StandingsResult<Self> {
        Ok(Self {
            target: ColumnTarget::resolve(generator, formula.column_header())?,
            generator: generator.clone(),
            formula,
        })
    }

    /// `WINNER`: who won each game; the config's rows are game rows
    pub fn game_winner(generator: &FormulaGenerator) -> StandingsResult<Self> {
        Self::new(generator, RowFormula::GameWinner)
    }

    /// `PTS`: 3 points a win, 1 a draw
    pub fn game_points(generator: &FormulaGenerator) -> StandingsResult<Self> {
        Self::new(generator, RowFormula::GamePoints)
    }

    pub fn goal_differential(generator: &FormulaGenerator) -> StandingsResult<Self> {
        Self::new(generator, RowFormula::GoalDifferential)
    }

    pub fn total_points(generator: &FormulaGenerator) -> StandingsResult<Self> {
        Self::new(generator, RowFormula::TotalPoints)
    }

    pub fn team_name(generator: &FormulaGenerator) -> StandingsResult<Self> {
        Self::new(generator, RowFormula::TeamName)
    }

    pub fn formula_kind(&self) -> RowFormula {
        self.formula
    }

    pub fn generate_formula(&self, config: &StandingsRequestConfig) -> StandingsResult<String> {
        let row = config.start_games_row_num;
        match self.formula {
            RowFormula::GameWinner => self.generator.game_winner_formula(row),
            RowFormula::GamePoints => self.generator.game_points_formula(row),
            RowFormula::GoalDifferential => self.generator.goal_differential_formula(row),
            RowFormula::TotalPoints => self.generator.total_points_formula(row),
            RowFormula::TeamName => Ok(self.generator.team_name_formula(&config.first_team_cell)),
        }
    }
}

impl StandingsRequestCreator for RowFormulaRequestCreator {
    fn column_header(&self) -> &str {
        &self.target.header
    }

    fn create_request(&self, config: &StandingsRequestConfig) -> StandingsResult<Request> {
        let formula = self.generate_formula(config)?;
        Ok(self.target.formula_request(config, formula))
    }
}

//==============================================================================
// Score-based formulas
//==============================================================================

/// Statistics computed from the round's game-score rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreStat {
    GamesPlayed,
    GamesWon,
    GamesLost,
    GamesDrawn,
    GoalsScored,
    GoalsAgainst,
}

impl ScoreStat {
    pub fn column_header(self) -> &'static str {
        match self {
            ScoreStat::GamesPlayed => HDR_GAMES_PLAYED,
            ScoreStat::GamesWon => HDR_NUM_WINS,
            ScoreStat::GamesLost => HDR_NUM_LOSSES,
            ScoreStat::GamesDrawn => HDR_NUM_DRAWS,
            ScoreStat::GoalsScored => HDR_GOALS_FOR,
            ScoreStat::GoalsAgainst => HDR_GOALS_AGAINST,
        }
    }

    /// Game counts are zeroed for scrimmage rounds; goals are not
    pub fn zeroed_for_scrimmage(self) -> bool {
        matches!(
            self,
            ScoreStat::GamesPlayed | ScoreStat::GamesWon | ScoreStat::GamesLost | ScoreStat::GamesDrawn
        )
    }
}

/// Fills a cumulative column computed from the game-score rows, adding the
/// previous round's value after round 1
#[derive(Debug, Clone)]
pub struct ScoreBasedRequestCreator {
    generator: FormulaGenerator,
    target: ColumnTarget,
    stat: ScoreStat,
}

impl ScoreBasedRequestCreator {
    pub fn new(generator: &FormulaGenerator, stat: ScoreStat) -> StandingsResult<Self> {
        Ok(Self {
            target: ColumnTarget::resolve(generator, stat.column_header())?,
            generator: generator.clone(),
            stat,
        })
    }

    pub fn games_played(generator: &FormulaGenerator) -> StandingsResult<Self> {
        Self::new(generator, ScoreStat::GamesPlayed)
    }

    pub fn games_won(generator: &FormulaGenerator) -> StandingsResult<Self> {
        Self::new(generator, ScoreStat::GamesWon)
    }

    pub fn games_lost(generator: &FormulaGenerator) -> StandingsResult<Self> {
        Self::new(generator, ScoreStat::GamesLost)
    }

    pub fn games_drawn(generator: &FormulaGenerator) -> StandingsResult<Self> {
        Self::new(generator, ScoreStat::GamesDrawn)
    }

    pub fn goals_scored(generator: &FormulaGenerator) -> StandingsResult<Self> {
        Self::new(generator, ScoreStat::GoalsScored)
    }

    pub fn goals_against(generator: &FormulaGenerator) -> StandingsResult<Self> {
        Self::new(generator, ScoreStat::GoalsAgainst)
    }

    pub fn stat(&self) -> ScoreStat {
        self.stat
    }

    /// The bare statistic over the config's game rows, without `=` or carry-forward
    pub fn stat_formula(&self, config: &StandingsRequestConfig) -> StandingsResult<String> {
        let start = config.start_games_row_num;
        let end = config.end_games_row_num;
        let team = config.first_team_cell.as_str();
        let g = &self.generator;
        match self.stat {
            ScoreStat::GamesPlayed => g.games_played_formula(start, end, team),
            ScoreStat::GamesWon => g.games_won_formula(start, end, team),
            ScoreStat::GamesLost => g.games_lost_formula(start, end, team),
            ScoreStat::GamesDrawn => g.games_drawn_formula(start, end, team),
            ScoreStat::GoalsScored => g.goals_scored_formula(start, end, team),
            ScoreStat::GoalsAgainst => g.goals_against_formula(start, end, team),
        }
    }

    pub fn generate_formula(&self, config: &StandingsRequestConfig) -> StandingsResult<String> {
        Ok(format!(
            "={}{}",
            self.stat_formula(config)?,
            self.target.add_last_round_value(config.last_round_start_row_num)
        ))
    }
}

impl StandingsRequestCreator for ScoreBasedRequestCreator {
    fn column_header(&self) -> &str {
        &self.target.header
    }

    fn create_request(&self, config: &StandingsRequestConfig) -> StandingsResult<Request> {
        if self.stat.zeroed_for_scrimmage() && !config.round_counts_for_standings {
            debug!(column = %self.target.header, "scrimmage round, filling with zero");
            return Ok(request_creator::repeated_number_request(
                config.sheet_id,
                config.sheet_start_row_index,
                self.target.index,
                config.row_count,
                0.0,
            ));
        }

        let formula = self.generate_formula(config)?;
        Ok(self.target.formula_request(config, formula))
    }
}

//==============================================================================
// Rank and tiebreaker
//==============================================================================

/// Fills a rank column, ranking each team's total points within the block
#[derive(Debug, Clone)]
pub struct RankRequestCreator {
    generator: FormulaGenerator,
    target: ColumnTarget,
}

impl RankRequestCreator {
    pub fn new(generator: &FormulaGenerator, column_header: &str) -> StandingsResult<Self> {
        Ok(Self {
            target: ColumnTarget::resolve(generator, column_header)?,
            generator: generator.clone(),
        })
    }

    /// `RANK`
    pub fn team_rank(generator: &FormulaGenerator) -> StandingsResult<Self> {
        Self::new(generator, HDR_RANK)
    }

    /// `C-RANK`: the formula rank kept next to a manually tiebroken `RANK`
    pub fn calculated_rank(generator: &FormulaGenerator) -> StandingsResult<Self> {
        Self::new(generator, HDR_CALC_RANK)
    }

    /// `=RANK(M3,M$3:M$18)` for a block starting at row index 2 with 16 teams
    pub fn generate_formula(&self, config: &StandingsRequestConfig) -> StandingsResult<String> {
        let start = config.sheet_start_row_index;
        let (Some(first), Some(last)) = (start.checked_add(1), start.checked_add(config.row_count)) else {
            return Err(StandingsError::Config(format!(
                "{} rows from row index {} run past the last row",
                config.row_count, start
            )));
        };
        Ok(format!("={}", self.generator.team_rank_formula(first, last)?))
    }
}

impl StandingsRequestCreator for RankRequestCreator {
    fn column_header(&self) -> &str {
        &self.target.header
    }

    fn create_request(&self, config: &StandingsRequestConfig) -> StandingsResult<Request> {
        let formula = self.generate_formula(config)?;
        Ok(self.target.formula_request(config, formula))
    }
}

/// Fills a column with unchecked checkboxes (manual tiebreaker)
#[derive(Debug, Clone)]
pub struct CheckboxRequestCreator {
    target: ColumnTarget,
}

impl CheckboxRequestCreator {
    pub fn new(generator: &FormulaGenerator, column_header: &str) -> StandingsResult<Self> {
        Ok(Self {
            target: ColumnTarget::resolve(generator, column_header)?,
        })
    }

    pub fn tiebreaker(generator: &FormulaGenerator) -> StandingsResult<Self> {
        Self::new(generator, HDR_TIEBREAKER)
    }
}

impl StandingsRequestCreator for CheckboxRequestCreator {
    fn column_header(&self) -> &str {
        &self.target.header
    }

    fn create_request(&self, config: &StandingsRequestConfig) -> StandingsResult<Request> {
        Ok(request_creator::checkbox_request(
            config.sheet_id,
            config.sheet_start_row_index,
            self.target.index,
            config.row_count,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::layout::StandingsSheetLayout;

    fn generator() -> FormulaGenerator {
        FormulaGenerator::new(
            StandingsSheetLayout::standard([
                HDR_TEAM_NAME,
                HDR_GAMES_PLAYED,
                HDR_NUM_WINS,
                HDR_NUM_LOSSES,
                HDR_NUM_DRAWS,
                HDR_GAME_PTS,
                HDR_TOTAL_PTS,
                HDR_RANK,
                HDR_TIEBREAKER,
            ])
            .unwrap(),
        )
    }

    fn formula_of(request: &Request) -> String {
        request
            .as_repeat_cell()
            .and_then(|r| r.cell.user_entered_value.as_ref())
            .and_then(|v| v.formula_value.clone())
            .unwrap()
    }

    #[test]
    fn test_unknown_column_fails_at_construction() {
        let err = ScoreBasedRequestCreator::goals_scored(&generator()).unwrap_err();
        assert!(matches!(err, StandingsError::UnknownColumn { ref header } if header == "GF"));
    }

    #[test]
    fn test_carry_forward_after_first_round() {
        let creator = ScoreBasedRequestCreator::games_played(&generator()).unwrap();
        let config = StandingsRequestConfig {
            sheet_start_row_index: 14,
            start_games_row_num: 15,
            end_games_row_num: 18,
            row_count: 6,
            first_team_cell: "Teams!A2".to_string(),
            last_round_start_row_num: Some(3),
            ..Default::default()
        };
        // GP is column G
        let formula = formula_of(&creator.create_request(&config).unwrap());
        assert!(formula.starts_with("=COUNTIFS(A$15:A$18,"));
        assert!(formula.ends_with("+G3"), "{formula}");
    }

    #[test]
    fn test_no_carry_forward_in_first_round() {
        let creator = ScoreBasedRequestCreator::games_won(&generator()).unwrap();
        let config = StandingsRequestConfig {
            start_games_row_num: 3,
            end_games_row_num: 8,
            first_team_cell: "Teams!A2".to_string(),
            ..Default::default()
        };
        assert_eq!(
            creator.generate_formula(&config).unwrap(),
            "=COUNTIFS(A$3:A$8,\"=\"&Teams!A2,E$3:E$8,\"H\")+COUNTIFS(D$3:D$8,\"=\"&Teams!A2,E$3:E$8,\"A\")"
        );
    }

    #[test]
    fn test_rank_uses_block_rows() {
        let creator = RankRequestCreator::team_rank(&generator()).unwrap();
        let config = StandingsRequestConfig {
            sheet_start_row_index: 2,
            row_count: 16,
            ..Default::default()
        };
        // TOTAL is column L in this layout
        assert_eq!(creator.generate_formula(&config).unwrap(), "=RANK(L3,L$3:L$18)");
    }

    #[test]
    fn test_rank_rejects_rows_past_the_last_row() {
        let creator = RankRequestCreator::team_rank(&generator()).unwrap();
        let config = StandingsRequestConfig {
            sheet_start_row_index: u32::MAX - 4,
            row_count: 16,
            ..Default::default()
        };
        assert!(matches!(
            creator.generate_formula(&config),
            Err(StandingsError::Config(_))
        ));
    }

    #[test]
    fn test_tiebreaker_checkbox() {
        let creator = CheckboxRequestCreator::tiebreaker(&generator()).unwrap();
        let config = StandingsRequestConfig {
            sheet_start_row_index: 2,
            row_count: 4,
            ..Default::default()
        };
        let request = creator.create_request(&config).unwrap();
        let repeat = request.as_repeat_cell().unwrap();
        assert_eq!(repeat.range.start_column_index, 13);
        assert!(repeat.cell.data_validation.is_some());
    }

    #[test]
    fn test_applicability_is_exact() {
        let creator = RowFormulaRequestCreator::game_points(&generator()).unwrap();
        assert!(creator.is_applicable_to_column("PTS"));
        assert!(!creator.is_applicable_to_column("pts"));
        assert!(!creator.is_applicable_to_column("TOTAL"));
    }
}

//! Round-by-round placement of the scores and standings blocks
//!
//! A sheet holds one block per round, stacked vertically. Each block is a
//! label row, a header row, then `max(games_per_round, num_teams)` data rows
//! where the game scores (left) and the standings table (right) share rows.
//! Consecutive blocks' data rows are [`ROUND_OFFSET_STANDINGS_TABLE`] rows
//! apart beyond the block height: the next round's label and header rows.

use super::creators::StandingsRequestConfig;
use super::factory::StandingsRequestCreatorFactory;
use super::formula::FormulaGenerator;
use super::layout::StandingsSheetLayout;
use crate::error::{StandingsError, StandingsResult};
use crate::sheets::cell_reference::is_sheet_cell_reference;
use crate::sheets::request::{BatchUpdateRequest, Request};
use crate::sheets::request_creator;
use crate::types::{
    GAME_SCORE_COLUMN_HEADERS, HDR_WINNING_TEAM, MAX_SHEET_ROWS, ROUND_OFFSET_STANDINGS_TABLE,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

fn default_first_header_row_index() -> u32 {
    1
}

fn default_score_columns() -> Vec<String> {
    GAME_SCORE_COLUMN_HEADERS.iter().map(|h| h.to_string()).collect()
}

fn default_true() -> bool {
    true
}

/// One division's scores-and-standings sheet, as read from a season file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    /// Target sheet; omitted means the first sheet
    #[serde(default)]
    pub sheet_id: Option<i32>,
    /// Cell with the first team's name, e.g. `Teams!A2`; the following teams
    /// are expected in the rows below it
    pub first_team_cell: String,
    pub num_teams: u32,
    pub games_per_round: u32,
    /// Zero-based row of the first round's header row. The round label goes
    /// in the row above it when there is one.
    #[serde(default = "default_first_header_row_index")]
    pub first_header_row_index: u32,
    /// Measured width of the team-name columns; column widths are only
    /// requested when this is set
    #[serde(default)]
    pub team_name_column_width: Option<u32>,
    #[serde(default = "default_score_columns")]
    pub score_columns: Vec<String>,
    pub standings_columns: Vec<String>,
    pub rounds: Vec<RoundSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundSpec {
    #[serde(default)]
    pub label: String,
    /// `false` makes every game of the round a scrimmage. GP, W, L and D are
    /// written as 0 for the round, and the next round carries forward from
    /// those zeros, so the counts restart after a scrimmage round.
    #[serde(default = "default_true")]
    pub counts_for_standings: bool,
}

impl RoundSpec {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            counts_for_standings: true,
        }
    }

    pub fn scrimmage(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            counts_for_standings: false,
        }
    }
}

/// Coordinates of one round's block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundPlan {
    /// 1-based
    pub number: u32,
    pub label: String,
    pub label_row_index: Option<u32>,
    pub header_row_index: u32,
    /// Zero-based index of the first data row
    pub sheet_start_row_index: u32,
    pub start_games_row_num: u32,
    pub end_games_row_num: u32,
    pub last_round_start_row_num: Option<u32>,
    pub counts_for_standings: bool,
}

impl Season {
    pub fn layout(&self) -> StandingsResult<StandingsSheetLayout> {
        let headers = self
            .score_columns
            .iter()
            .chain(self.standings_columns.iter())
            .cloned()
            .collect::<Vec<_>>();
        StandingsSheetLayout::new(headers, self.standings_columns.clone())
    }

    /// Rows in each block's data area
    pub fn block_height(&self) -> u32 {
        self.games_per_round.max(self.num_teams)
    }

    pub fn validate(&self) -> StandingsResult<()> {
        if self.num_teams == 0 {
            return Err(StandingsError::Config("num_teams must be at least 1".to_string()));
        }
        if self.games_per_round == 0 {
            return Err(StandingsError::Config(
                "games_per_round must be at least 1".to_string(),
            ));
        }
        if self.rounds.is_empty() {
            return Err(StandingsError::Config("at least one round is required".to_string()));
        }
        if self.standings_columns.is_empty() {
            return Err(StandingsError::Config(
                "standings_columns must not be empty".to_string(),
            ));
        }
        if !is_sheet_cell_reference(&self.first_team_cell) {
            return Err(StandingsError::InvalidCellReference(format!(
                "first_team_cell '{}' is not a cell reference like Teams!A2",
                self.first_team_cell
            )));
        }
        let rows = self.sheet_rows_needed().filter(|rows| *rows <= u64::from(MAX_SHEET_ROWS));
        if rows.is_none() {
            return Err(StandingsError::Config(format!(
                "{} rounds of {} rows do not fit in a sheet of {} rows",
                self.rounds.len(),
                self.block_height(),
                MAX_SHEET_ROWS
            )));
        }
        self.layout()?;
        Ok(())
    }

    /// Rows from the top of the sheet through the last round's block
    fn sheet_rows_needed(&self) -> Option<u64> {
        let rounds = u64::try_from(self.rounds.len()).ok()?;
        let block = u64::from(self.block_height()) + u64::from(ROUND_OFFSET_STANDINGS_TABLE);
        rounds
            .checked_mul(block)?
            .checked_add(u64::from(self.first_header_row_index))?
            .checked_sub(1)
    }

    pub fn plan_rounds(&self) -> Vec<RoundPlan> {
        let height = self.block_height();
        let mut plans: Vec<RoundPlan> = Vec::with_capacity(self.rounds.len());
        let step = height.saturating_add(ROUND_OFFSET_STANDINGS_TABLE);
        let mut header_row_index = self.first_header_row_index;

        // Saturating: a validated season stays within MAX_SHEET_ROWS
        for (number, round) in (1u32..).zip(self.rounds.iter()) {
            let start_index = header_row_index.saturating_add(1);
            plans.push(RoundPlan {
                number,
                label: round.label.clone(),
                label_row_index: header_row_index.checked_sub(1),
                header_row_index,
                sheet_start_row_index: start_index,
                start_games_row_num: start_index.saturating_add(1),
                end_games_row_num: start_index.saturating_add(self.games_per_round),
                last_round_start_row_num: plans.last().map(|p| p.start_games_row_num),
                counts_for_standings: round.counts_for_standings,
            });
            header_row_index = header_row_index.saturating_add(step);
        }

        plans
    }

    /// Config for the standings rows of `round` (one row per team)
    pub fn standings_config(&self, round: &RoundPlan) -> StandingsRequestConfig {
        StandingsRequestConfig {
            sheet_id: self.sheet_id,
            sheet_start_row_index: round.sheet_start_row_index,
            start_games_row_num: round.start_games_row_num,
            row_count: self.num_teams,
            end_games_row_num: round.end_games_row_num,
            first_team_cell: self.first_team_cell.clone(),
            last_round_start_row_num: round.last_round_start_row_num,
            round_counts_for_standings: round.counts_for_standings,
        }
    }

    /// Config for the game rows of `round` (the winner column)
    pub fn games_config(&self, round: &RoundPlan) -> StandingsRequestConfig {
        StandingsRequestConfig {
            row_count: self.games_per_round,
            ..self.standings_config(round)
        }
    }
}

/// Turns a [`Season`] into the batchUpdate for its whole sheet
pub struct SeasonRequestBuilder<'a> {
    season: &'a Season,
    layout: StandingsSheetLayout,
    factory: StandingsRequestCreatorFactory,
}

impl<'a> SeasonRequestBuilder<'a> {
    pub fn new(season: &'a Season) -> StandingsResult<Self> {
        season.validate()?;
        let layout = season.layout()?;
        let generator = FormulaGenerator::new(layout.clone());
        let factory = StandingsRequestCreatorFactory::with_defaults(&generator)?;
        Ok(Self {
            season,
            layout,
            factory,
        })
    }

    pub fn layout(&self) -> &StandingsSheetLayout {
        &self.layout
    }

    pub fn factory(&self) -> &StandingsRequestCreatorFactory {
        &self.factory
    }

    pub fn rounds(&self) -> Vec<RoundPlan> {
        self.season.plan_rounds()
    }

    /// The request that fills `column_header` in `round`, or `None` when no
    /// creator handles that column
    pub fn column_request(
        &self,
        column_header: &str,
        round: &RoundPlan,
    ) -> StandingsResult<Option<Request>> {
        let config = if column_header == HDR_WINNING_TEAM {
            self.season.games_config(round)
        } else {
            self.season.standings_config(round)
        };
        self.factory
            .get_request_creator(column_header)?
            .map(|creator| creator.create_request(&config))
            .transpose()
    }

    /// Label row, header row, winner column and standings table of one round
    pub fn round_requests(&self, round: &RoundPlan) -> StandingsResult<Vec<Request>> {
        let sheet_id = self.season.sheet_id;
        let mut requests = Vec::new();

        if let (Some(row), false) = (round.label_row_index, round.label.is_empty()) {
            requests.push(request_creator::header_row_request(
                sheet_id,
                row,
                0,
                &[round.label.as_str()],
            ));
        }
        requests.push(request_creator::header_row_request(
            sheet_id,
            round.header_row_index,
            0,
            self.layout.header_row_columns(),
        ));

        if let Some(winner) = self.column_request(HDR_WINNING_TEAM, round)? {
            requests.push(winner);
        }

        let config = self.season.standings_config(round);
        requests.extend(
            self.factory
                .create_standings_requests(self.layout.standings_table_columns(), &config)?,
        );

        debug!(
            round = round.number,
            start_row_index = round.sheet_start_row_index,
            requests = requests.len(),
            "round requests"
        );
        Ok(requests)
    }

    pub fn build(&self) -> StandingsResult<BatchUpdateRequest> {
        let mut requests = Vec::new();
        let rounds = self.rounds();
        for round in &rounds {
            requests.extend(self.round_requests(round)?);
        }

        if let Some(width) = self.season.team_name_column_width {
            requests.extend(
                self.layout
                    .create_cell_width_requests(self.season.sheet_id, width),
            );
        }

        info!(
            rounds = rounds.len(),
            requests = requests.len(),
            "built season requests"
        );
        Ok(BatchUpdateRequest::new(requests))
    }
}

/// Validate `season` and build its batchUpdate
pub fn season_requests(season: &Season) -> StandingsResult<BatchUpdateRequest> {
    SeasonRequestBuilder::new(season)?.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn season(rounds: Vec<RoundSpec>) -> Season {
        Season {
            sheet_id: Some(11),
            first_team_cell: "Teams!A2".to_string(),
            num_teams: 6,
            games_per_round: 3,
            first_header_row_index: 1,
            team_name_column_width: None,
            score_columns: default_score_columns(),
            standings_columns: ["TEAM", "GP", "W", "L", "D", "PTS", "TOTAL", "RANK"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            rounds,
        }
    }

    #[test]
    fn test_plan_rounds_offsets() {
        let s = season(vec![RoundSpec::new("Week 1"), RoundSpec::new("Week 2")]);
        let plans = s.plan_rounds();

        assert_eq!(plans[0].label_row_index, Some(0));
        assert_eq!(plans[0].header_row_index, 1);
        assert_eq!(plans[0].sheet_start_row_index, 2);
        assert_eq!(plans[0].start_games_row_num, 3);
        assert_eq!(plans[0].end_games_row_num, 5);
        assert_eq!(plans[0].last_round_start_row_num, None);

        // 6 data rows + label row + header row
        assert_eq!(plans[1].label_row_index, Some(8));
        assert_eq!(plans[1].header_row_index, 9);
        assert_eq!(plans[1].sheet_start_row_index, 10);
        assert_eq!(plans[1].start_games_row_num, 11);
        assert_eq!(plans[1].end_games_row_num, 13);
        assert_eq!(plans[1].last_round_start_row_num, Some(3));
    }

    #[test]
    fn test_no_label_row_above_row_zero() {
        let mut s = season(vec![RoundSpec::new("Week 1")]);
        s.first_header_row_index = 0;
        assert_eq!(s.plan_rounds()[0].label_row_index, None);
    }

    #[test]
    fn test_games_config_uses_game_rows() {
        let s = season(vec![RoundSpec::new("Week 1")]);
        let plans = s.plan_rounds();
        let plan = &plans[0];
        assert_eq!(s.games_config(plan).row_count, 3);
        assert_eq!(s.standings_config(plan).row_count, 6);
    }

    #[test]
    fn test_validate_rejects_bad_seasons() {
        let mut s = season(vec![]);
        assert!(matches!(s.validate(), Err(StandingsError::Config(_))));

        s.rounds.push(RoundSpec::new("Week 1"));
        s.first_team_cell = "not a cell".to_string();
        assert!(matches!(
            s.validate(),
            Err(StandingsError::InvalidCellReference(_))
        ));

        s.first_team_cell = "Teams!A2".to_string();
        s.standings_columns.push("HOME".to_string());
        assert!(matches!(s.validate(), Err(StandingsError::DuplicateColumn(_))));
    }

    #[test]
    fn test_validate_rejects_seasons_past_the_last_row() {
        let mut s = season(vec![RoundSpec::new("Week 1")]);
        s.num_teams = u32::MAX - 1;
        assert!(matches!(s.validate(), Err(StandingsError::Config(_))));

        let mut s = season(vec![RoundSpec::new("Week 1")]);
        s.first_header_row_index = u32::MAX;
        assert!(matches!(s.validate(), Err(StandingsError::Config(_))));

        // header row plus 6 data rows ending exactly on the last row
        let mut s = season(vec![RoundSpec::new("Week 1")]);
        s.first_header_row_index = MAX_SHEET_ROWS - 7;
        assert!(s.validate().is_ok());
        s.first_header_row_index += 1;
        assert!(matches!(s.validate(), Err(StandingsError::Config(_))));

        s.first_header_row_index = 1;
        s.rounds.push(RoundSpec::new("Week 2"));
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_plan_rounds_does_not_overflow() {
        let mut s = season(vec![RoundSpec::new("Week 1"), RoundSpec::new("Week 2")]);
        s.num_teams = u32::MAX - 1;
        let plans = s.plan_rounds();
        assert_eq!(plans[1].sheet_start_row_index, u32::MAX);
    }
}

//! Column layout of a scores-and-standings sheet
//!
//! The header row lists the score-entry columns first and the standings-table
//! columns after them, all on the same rows. Every other module asks this one
//! where a logical column (by header) physically lives.

use crate::error::{StandingsError, StandingsResult};
use crate::sheets::cell_reference::column_index_to_name;
use crate::sheets::request::Request;
use crate::sheets::request_creator;
use crate::types::*;
use std::collections::HashSet;

/// Maps header labels to column indexes and names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsSheetLayout {
    /// All header columns, including the ones in `standings_table_columns`
    header_row_columns: Vec<String>,
    /// The header columns that make up the standings table
    standings_table_columns: Vec<String>,
}

impl StandingsSheetLayout {
    /// Create a layout from the full header row and the standings subset.
    ///
    /// Headers must be unique, and every standings column must appear in the
    /// header row.
    pub fn new<H, S>(header_columns: H, standings_table_columns: S) -> StandingsResult<Self>
    where
        H: IntoIterator,
        H::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        let header_row_columns: Vec<String> =
            header_columns.into_iter().map(Into::into).collect();
        let standings_table_columns: Vec<String> =
            standings_table_columns.into_iter().map(Into::into).collect();

        let mut seen = HashSet::new();
        for header in &header_row_columns {
            if !seen.insert(header.as_str()) {
                return Err(StandingsError::DuplicateColumn(header.clone()));
            }
        }

        if let Some(missing) = standings_table_columns
            .iter()
            .find(|h| !seen.contains(h.as_str()))
        {
            return Err(StandingsError::unknown_column(missing.clone()));
        }

        Ok(Self {
            header_row_columns,
            standings_table_columns,
        })
    }

    /// The standard score-entry columns followed by `standings_table_columns`
    pub fn standard<S>(standings_table_columns: S) -> StandingsResult<Self>
    where
        S: IntoIterator,
        S::Item: Into<String>,
    {
        let standings: Vec<String> = standings_table_columns.into_iter().map(Into::into).collect();
        let headers = GAME_SCORE_COLUMN_HEADERS
            .iter()
            .map(|h| h.to_string())
            .chain(standings.iter().cloned())
            .collect::<Vec<_>>();
        Self::new(headers, standings)
    }

    pub fn header_row_columns(&self) -> &[String] {
        &self.header_row_columns
    }

    pub fn standings_table_columns(&self) -> &[String] {
        &self.standings_table_columns
    }

    pub fn has_column(&self, header: &str) -> bool {
        self.column_index_by_header(header).is_some()
    }

    /// Zero-based column index of `header`, e.g. `HOME` → 0 in the standard
    /// layout. `None` when the column isn't used.
    pub fn column_index_by_header(&self, header: &str) -> Option<u32> {
        self.header_row_columns
            .iter()
            .position(|h| h == header)
            .map(|idx| idx as u32)
    }

    /// Column name of `header`, e.g. `HOME` → `A` in the standard layout
    pub fn column_name_by_header(&self, header: &str) -> Option<String> {
        self.column_index_by_header(header)
            .map(column_index_to_name)
    }

    pub fn require_column_index(&self, header: &str) -> StandingsResult<u32> {
        self.column_index_by_header(header)
            .ok_or_else(|| StandingsError::unknown_column(header))
    }

    pub fn require_column_name(&self, header: &str) -> StandingsResult<String> {
        self.column_name_by_header(header)
            .ok_or_else(|| StandingsError::unknown_column(header))
    }

    pub fn home_team_column_name(&self) -> StandingsResult<String> {
        self.require_column_name(HDR_HOME_TEAM)
    }

    pub fn home_goals_column_name(&self) -> StandingsResult<String> {
        self.require_column_name(HDR_HOME_GOALS)
    }

    pub fn away_goals_column_name(&self) -> StandingsResult<String> {
        self.require_column_name(HDR_AWAY_GOALS)
    }

    pub fn away_team_column_name(&self) -> StandingsResult<String> {
        self.require_column_name(HDR_AWAY_TEAM)
    }

    pub fn team_name_column_name(&self) -> StandingsResult<String> {
        self.require_column_name(HDR_TEAM_NAME)
    }

    pub fn games_played_column_name(&self) -> StandingsResult<String> {
        self.require_column_name(HDR_GAMES_PLAYED)
    }

    pub fn num_wins_column_name(&self) -> StandingsResult<String> {
        self.require_column_name(HDR_NUM_WINS)
    }

    pub fn num_losses_column_name(&self) -> StandingsResult<String> {
        self.require_column_name(HDR_NUM_LOSSES)
    }

    pub fn num_draws_column_name(&self) -> StandingsResult<String> {
        self.require_column_name(HDR_NUM_DRAWS)
    }

    pub fn game_points_column_name(&self) -> StandingsResult<String> {
        self.require_column_name(HDR_GAME_PTS)
    }

    pub fn total_points_column_name(&self) -> StandingsResult<String> {
        self.require_column_name(HDR_TOTAL_PTS)
    }

    pub fn rank_column_name(&self) -> StandingsResult<String> {
        self.require_column_name(HDR_RANK)
    }

    pub fn winner_column_name(&self) -> StandingsResult<String> {
        self.require_column_name(HDR_WINNING_TEAM)
    }

    pub fn goals_for_column_name(&self) -> StandingsResult<String> {
        self.require_column_name(HDR_GOALS_FOR)
    }

    pub fn goals_against_column_name(&self) -> StandingsResult<String> {
        self.require_column_name(HDR_GOALS_AGAINST)
    }

    pub fn goal_differential_column_name(&self) -> StandingsResult<String> {
        self.require_column_name(HDR_GOAL_DIFF)
    }

    /// Requests that resize every header column.
    ///
    /// `team_name_column_width` is the measured width of the team-name column
    /// (it depends on the longest team name) and applies to both team columns
    /// of the score entry as well.
    pub fn create_cell_width_requests(
        &self,
        sheet_id: Option<i32>,
        team_name_column_width: u32,
    ) -> Vec<Request> {
        self.header_row_columns
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                let width = match header.as_str() {
                    HDR_HOME_TEAM | HDR_AWAY_TEAM | HDR_TEAM_NAME => team_name_column_width,
                    // header text is longer than the values
                    HDR_WINNING_TEAM => WIDTH_WINNING_TEAM_COL,
                    HDR_TOTAL_PTS | HDR_RANK | HDR_CALC_RANK | HDR_HOME_PTS | HDR_AWAY_PTS => {
                        WIDTH_WIDE_NUM_COL
                    }
                    _ => WIDTH_NUM_COL,
                };
                request_creator::cell_width_request(sheet_id, width, idx as u32)
            })
            .collect()
    }
}

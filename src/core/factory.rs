//! Picks the request creator for a standings-table column

use super::creators::{
    CheckboxRequestCreator, RankRequestCreator, RowFormula, RowFormulaRequestCreator, ScoreBasedRequestCreator,
    ScoreStat, StandingsRequestConfig, StandingsRequestCreator,
};
use super::formula::FormulaGenerator;
use crate::error::{StandingsError, StandingsResult};
use crate::sheets::request::Request;
use crate::types::*;
use tracing::debug;

/// Holds the creators in use and hands out the one matching a column
pub struct StandingsRequestCreatorFactory {
    creators: Vec<Box<dyn StandingsRequestCreator>>,
}

impl StandingsRequestCreatorFactory {
    pub fn new(creators: Vec<Box<dyn StandingsRequestCreator>>) -> Self {
        Self { creators }
    }

    /// Every built-in creator whose column appears in the generator's layout.
    ///
    /// The winner creator is included; it writes game rows rather than team
    /// rows, so [`Self::create_standings_requests`] skips it unless `WINNER` is
    /// listed as a standings column.
    pub fn with_defaults(generator: &FormulaGenerator) -> StandingsResult<Self> {
        let layout = generator.layout();
        let mut creators: Vec<Box<dyn StandingsRequestCreator>> = Vec::new();

        for kind in [
            RowFormula::TeamName,
            RowFormula::GameWinner,
            RowFormula::GamePoints,
            RowFormula::TotalPoints,
            RowFormula::GoalDifferential,
        ] {
            if layout.has_column(kind.column_header()) {
                creators.push(Box::new(RowFormulaRequestCreator::new(generator, kind)?));
            }
        }

        for stat in [
            ScoreStat::GamesPlayed,
            ScoreStat::GamesWon,
            ScoreStat::GamesLost,
            ScoreStat::GamesDrawn,
            ScoreStat::GoalsScored,
            ScoreStat::GoalsAgainst,
        ] {
            if layout.has_column(stat.column_header()) {
                creators.push(Box::new(ScoreBasedRequestCreator::new(generator, stat)?));
            }
        }

        for header in [HDR_RANK, HDR_CALC_RANK] {
            if layout.has_column(header) {
                creators.push(Box::new(RankRequestCreator::new(generator, header)?));
            }
        }

        if layout.has_column(HDR_TIEBREAKER) {
            creators.push(Box::new(CheckboxRequestCreator::tiebreaker(generator)?));
        }

        debug!(count = creators.len(), "default request creators");
        Ok(Self::new(creators))
    }

    pub fn creators(&self) -> &[Box<dyn StandingsRequestCreator>] {
        &self.creators
    }

    pub fn add(&mut self, creator: Box<dyn StandingsRequestCreator>) {
        self.creators.push(creator);
    }

    /// The single creator applicable to `column_header`, `None` if there is none.
    /// More than one applicable creator is an error.
    pub fn get_request_creator(
        &self,
        column_header: &str,
    ) -> StandingsResult<Option<&dyn StandingsRequestCreator>> {
        let mut matching = self
            .creators
            .iter()
            .filter(|c| c.is_applicable_to_column(column_header));

        let first = matching.next();
        let others = matching.count();
        if others > 0 {
            return Err(StandingsError::AmbiguousCreator {
                header: column_header.to_string(),
                count: others + 1,
            });
        }
        Ok(first.map(|c| c.as_ref()))
    }

    /// One request per standings-table column that has a creator, in layout order
    pub fn create_standings_requests(
        &self,
        standings_table_columns: &[String],
        config: &StandingsRequestConfig,
    ) -> StandingsResult<Vec<Request>> {
        let mut requests = Vec::new();
        for header in standings_table_columns {
            match self.get_request_creator(header)? {
                Some(creator) => requests.push(creator.create_request(config)?),
                None => debug!(column = %header, "no request creator, column left for manual entry"),
            }
        }
        Ok(requests)
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
                HDR_NUM_DRAWS,
                HDR_GAME_PTS,
                HDR_REF_PTS,
                HDR_TOTAL_PTS,
                HDR_RANK,
            ])
            .unwrap(),
        )
    }

    #[test]
    fn test_defaults_cover_layout_columns() {
        let factory = StandingsRequestCreatorFactory::with_defaults(&generator()).unwrap();
        let headers: Vec<&str> = factory.creators().iter().map(|c| c.column_header()).collect();
        assert_eq!(headers, vec!["TEAM", "WINNER", "PTS", "TOTAL", "GP", "W", "D", "RANK"]);
    }

    #[test]
    fn test_get_request_creator() {
        let factory = StandingsRequestCreatorFactory::with_defaults(&generator()).unwrap();
        let creator = factory.get_request_creator("GP").unwrap().unwrap();
        assert_eq!(creator.column_header(), "GP");
        assert!(factory.get_request_creator("REF").unwrap().is_none());
    }

    #[test]
    fn test_ambiguous_creators() {
        let g = generator();
        let mut factory = StandingsRequestCreatorFactory::with_defaults(&g).unwrap();
        factory.add(Box::new(RankRequestCreator::team_rank(&g).unwrap()));
        let err = factory.get_request_creator("RANK").err().unwrap();
        assert!(matches!(err, StandingsError::AmbiguousCreator { count: 2, .. }));
    }

    #[test]
    fn test_standings_requests_skip_manual_columns() {
        let g = generator();
        let factory = StandingsRequestCreatorFactory::with_defaults(&g).unwrap();
        let config = StandingsRequestConfig {
            sheet_start_row_index: 2,
            start_games_row_num: 3,
            end_games_row_num: 6,
            row_count: 8,
            first_team_cell: "Teams!A2".to_string(),
            ..Default::default()
        };
        let requests = factory
            .create_standings_requests(g.layout().standings_table_columns(), &config)
            .unwrap();
        // REF has no creator
        assert_eq!(requests.len(), 7);
    }
}

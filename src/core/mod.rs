//! Standings engine: column layout, formula generation and request creators

pub mod creators;
pub mod factory;
pub mod formula;
pub mod layout;
pub mod season;

pub use creators::{
    CheckboxRequestCreator, RankRequestCreator, RowFormula, RowFormulaRequestCreator,
    ScoreBasedRequestCreator, ScoreStat, StandingsRequestConfig, StandingsRequestCreator,
};
pub use factory::StandingsRequestCreatorFactory;
pub use formula::{FormulaGenerator, ScoreEntryColumns};
pub use layout::StandingsSheetLayout;
pub use season::{season_requests, RoundPlan, RoundSpec, Season, SeasonRequestBuilder};

//! Standings Sheets - standings-table formulas for league score sheets
//!
//! This library maps a sheet's named header columns to concrete columns,
//! generates the formulas of a sports-league standings table (games played,
//! wins, losses, draws, points, goal differential, rank) from the raw game-score
//! rows, and wraps them in Sheets API `batchUpdate` requests.
//!
//! # Features
//!
//! - Column resolution from header labels (`GP` → `G`)
//! - Formulas that carry totals forward from one round to the next
//! - Scrimmage rounds that don't count for standings
//! - Manual tiebreaker checkboxes next to a calculated rank
//! - JSON output ready for `spreadsheets.batchUpdate`
//!
//! # Example
//!
//! ```no_run
//! use standings_sheets::core::season_requests;
//! use standings_sheets::parser::parse_season;
//! use std::path::Path;
//!
//! let season = parse_season(Path::new("season.yaml"))?;
//! let batch = season_requests(&season)?;
//!
//! println!("Requests: {}", batch.requests.len());
//! # Ok::<(), standings_sheets::error::StandingsError>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod parser;
pub mod sheets;
pub mod types;

// Re-export commonly used types
pub use error::{StandingsError, StandingsResult};
pub use sheets::{BatchUpdateRequest, Request};

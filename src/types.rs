//! Header labels, result indicators and sizing constants shared by the
//! layout, formula and request modules.

//==============================================================================
// Game result indicators
//==============================================================================

/// Written to the winner column when the home team won
pub const HOME_TEAM_INDICATOR: char = 'H';
/// Written to the winner column when the away team won
pub const AWAY_TEAM_INDICATOR: char = 'A';
pub const WIN_INDICATOR: char = 'W';
pub const LOSS_INDICATOR: char = 'L';
/// Written to the winner column when the game was drawn
pub const DRAW_INDICATOR: char = 'D';

//==============================================================================
// Column headers
//==============================================================================

pub const HDR_HOME_TEAM: &str = "HOME";
pub const HDR_HOME_GOALS: &str = "HG";
pub const HDR_AWAY_GOALS: &str = "AG";
pub const HDR_AWAY_TEAM: &str = "AWAY";
pub const HDR_WINNING_TEAM: &str = "WINNER";
pub const HDR_TEAM_NAME: &str = "TEAM";
pub const HDR_TOTAL_PTS: &str = "TOTAL";
pub const HDR_RANK: &str = "RANK";
pub const HDR_GAMES_PLAYED: &str = "GP";
pub const HDR_NUM_WINS: &str = "W";
pub const HDR_NUM_LOSSES: &str = "L";
pub const HDR_NUM_DRAWS: &str = "D";
pub const HDR_GAME_PTS: &str = "PTS";
pub const HDR_GOALS_FOR: &str = "GF";
pub const HDR_GOALS_AGAINST: &str = "GA";
pub const HDR_GOAL_DIFF: &str = "GD";

// Core season
pub const HDR_REF_PTS: &str = "REF";
pub const HDR_VOL_PTS: &str = "VOL";
pub const HDR_SPORTSMANSHIP_PTS: &str = "SPT";
pub const HDR_PTS_DEDUCTION: &str = "DED";

// Tournament
pub const HDR_YELLOW_CARDS: &str = "YC";
pub const HDR_RED_CARDS: &str = "RC";
pub const HDR_HOME_PTS: &str = "Pts (H)";
pub const HDR_AWAY_PTS: &str = "Pts (A)";
/// Rank from the formula alone, before any manual tiebreak is applied
pub const HDR_CALC_RANK: &str = "C-RANK";
pub const HDR_TIEBREAKER: &str = "TB";

/// The score-entry headers, in sheet order: home team, home score, away score,
/// away team, game winner
pub const GAME_SCORE_COLUMN_HEADERS: [&str; 5] = [
    HDR_HOME_TEAM,
    HDR_HOME_GOALS,
    HDR_AWAY_GOALS,
    HDR_AWAY_TEAM,
    HDR_WINNING_TEAM,
];

/// Point columns that add into the total, in the order they are summed
pub const POINT_COLUMN_HEADERS: [&str; 4] =
    [HDR_GAME_PTS, HDR_REF_PTS, HDR_VOL_PTS, HDR_SPORTSMANSHIP_PTS];

//==============================================================================
// Sizing
//==============================================================================

pub const WIDTH_WINNING_TEAM_COL: u32 = 65;
pub const WIDTH_NUM_COL: u32 = 30;
pub const WIDTH_WIDE_NUM_COL: u32 = 50;

/// Rows separating one round's scoring block from the next
pub const ROUND_OFFSET_STANDINGS_TABLE: u32 = 2;

/// A spreadsheet holds at most 10 million cells, so no sheet has more rows
pub const MAX_SHEET_ROWS: u32 = 10_000_000;

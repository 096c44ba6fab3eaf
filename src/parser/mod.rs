use crate::core::Season;
use crate::error::StandingsResult;
use std::path::Path;
use tracing::debug;

/// Parse and validate a season file.
///
/// # Example
/// ```no_run
/// use standings_sheets::parser::parse_season;
/// use std::path::Path;
///
/// let season = parse_season(Path::new("season.yaml"))?;
/// println!("Rounds: {}", season.rounds.len());
/// # Ok::<(), standings_sheets::error::StandingsError>(())
/// ```
pub fn parse_season(path: &Path) -> StandingsResult<Season> {
    let content = std::fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = content.len(), "read season file");
    parse_season_str(&content)
}

/// Parse and validate season YAML text
pub fn parse_season_str(content: &str) -> StandingsResult<Season> {
    let season: Season = serde_yaml::from_str(content)?;
    season.validate()?;
    Ok(season)
}

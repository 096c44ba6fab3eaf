use crate::core::SeasonRequestBuilder;
use crate::error::{StandingsError, StandingsResult};
use crate::parser;
use crate::sheets::request::Request;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// Execute the generate command - season file to batchUpdate JSON.
///
/// Without `output` the JSON goes to stdout and nothing else is printed there,
/// so the command can be piped into an API client.
pub fn generate(
    file: PathBuf,
    output: Option<PathBuf>,
    compact: bool,
    verbose: bool,
) -> StandingsResult<()> {
    let to_file = output.is_some();

    if to_file {
        println!("{}", "⚽ Standings - Generating requests".bold().green());
        println!("   File: {}\n", file.display());
    }

    let season = parser::parse_season(&file)?;
    let builder = SeasonRequestBuilder::new(&season)?;

    if verbose && to_file {
        println!("{}", "📐 Round layout:".cyan());
        for round in builder.rounds() {
            println!(
                "   Round {} {} rows {}-{}{}",
                round.number,
                round.label.bright_blue(),
                round.start_games_row_num,
                round.start_games_row_num + season.block_height() - 1,
                if round.counts_for_standings {
                    String::new()
                } else {
                    " (scrimmage)".yellow().to_string()
                }
            );
        }
        println!();
    }

    let batch = builder.build()?;
    let json = if compact {
        serde_json::to_string(&batch)?
    } else {
        serde_json::to_string_pretty(&batch)?
    };

    match output {
        Some(path) => {
            fs::write(&path, json + "\n")?;
            println!("{}", "✅ Requests written".bold().green());
            println!("   Requests: {}", batch.requests.len());
            println!("   Output:   {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

/// Execute the validate command on one or more season files
pub fn validate(files: Vec<PathBuf>) -> StandingsResult<()> {
    println!("{}", "✅ Validating season files".bold().green());
    println!();

    let mut failures = 0;
    for file in &files {
        match check_season(file) {
            Ok(count) => println!(
                "   {} {} ({} requests)",
                "✅".green(),
                file.display(),
                count
            ),
            Err(e) => {
                failures += 1;
                println!("   {} {}", "❌".red(), file.display());
                println!("      {}", e.to_string().red());
            }
        }
    }

    println!();
    if failures == 0 {
        println!("{}", "✅ All season files are valid!".bold().green());
        Ok(())
    } else {
        println!(
            "{}",
            format!("❌ {} of {} files failed validation", failures, files.len())
                .bold()
                .red()
        );
        Err(StandingsError::Config(format!(
            "{} season file(s) failed validation",
            failures
        )))
    }
}

/// Parse a season file and build its requests, returning the request count
fn check_season(file: &Path) -> StandingsResult<usize> {
    let season = parser::parse_season(file)?;
    let batch = SeasonRequestBuilder::new(&season)?.build()?;
    Ok(batch.requests.len())
}

/// Execute the columns command - show where each header lives
pub fn columns(file: PathBuf) -> StandingsResult<()> {
    let season = parser::parse_season(&file)?;
    let layout = season.layout()?;

    println!("{}", "📋 Column layout".bold().green());
    println!("   File: {}\n", file.display());

    for header in layout.header_row_columns() {
        // Every header-row column resolves, the layout was built from them
        let name = layout.require_column_name(header)?;
        let role = if layout.standings_table_columns().contains(header) {
            "standings"
        } else {
            "scores"
        };
        println!("   {:<4} {:<8} {}", name.bold(), header.bright_blue(), role.dimmed());
    }

    Ok(())
}

/// Execute the formula command - show what one column gets in one round
pub fn formula(file: PathBuf, header: String, round: u32) -> StandingsResult<()> {
    let season = parser::parse_season(&file)?;
    let builder = SeasonRequestBuilder::new(&season)?;

    let plan = builder
        .rounds()
        .into_iter()
        .find(|r| r.number == round)
        .ok_or_else(|| {
            StandingsError::Config(format!(
                "round {} does not exist (season has {} rounds)",
                round,
                season.rounds.len()
            ))
        })?;

    // Surface unknown headers before checking for a creator
    builder.layout().require_column_index(&header)?;

    match builder.column_request(&header, &plan)? {
        Some(request) => {
            println!("{}", describe_cell_value(&request));
            Ok(())
        }
        None => {
            println!(
                "{}",
                format!("⚠️  Column '{}' has no generated formula (manual entry)", header).yellow()
            );
            Ok(())
        }
    }
}

fn describe_cell_value(request: &Request) -> String {
    let value = request
        .as_repeat_cell()
        .and_then(|r| r.cell.user_entered_value.as_ref());

    match value {
        Some(v) => {
            if let Some(formula) = &v.formula_value {
                formula.clone()
            } else if let Some(number) = v.number_value {
                format!("{number}")
            } else if let Some(b) = v.bool_value {
                b.to_string().to_uppercase()
            } else {
                String::new()
            }
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheets::request_creator;

    #[test]
    fn test_describe_cell_value() {
        let formula = request_creator::repeated_formula_request(None, 0, 0, 1, "=A1");
        assert_eq!(describe_cell_value(&formula), "=A1");

        let zero = request_creator::repeated_number_request(None, 0, 0, 1, 0.0);
        assert_eq!(describe_cell_value(&zero), "0");

        let checkbox = request_creator::checkbox_request(None, 0, 0, 1);
        assert_eq!(describe_cell_value(&checkbox), "FALSE");
    }
}

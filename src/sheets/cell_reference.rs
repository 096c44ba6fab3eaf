//! A1-notation helpers: column letters, cell references and cell ranges

use crate::error::{StandingsError, StandingsResult};
use regex::Regex;
use std::sync::OnceLock;

/// Which parts of a range get a `$` anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellRangeOptions {
    #[default]
    None,
    /// `A$3:A$8`
    FixRow,
    /// `$A3:$A8`
    FixColumn,
    /// `$A$3:$A$8`
    FixBoth,
}

impl CellRangeOptions {
    fn column_anchor(self) -> &'static str {
        match self {
            CellRangeOptions::FixColumn | CellRangeOptions::FixBoth => "$",
            _ => "",
        }
    }

    fn row_anchor(self) -> &'static str {
        match self {
            CellRangeOptions::FixRow | CellRangeOptions::FixBoth => "$",
            _ => "",
        }
    }
}

/// Convert a zero-based column index to its column name
///
/// Examples:
/// - 0 → A
/// - 1 → B
/// - 25 → Z
/// - 26 → AA
pub fn column_index_to_name(index: u32) -> String {
    let mut result = String::new();
    let mut idx = index;

    loop {
        let remainder = idx % 26;
        result.insert(0, (b'A' + remainder as u8) as char);
        if idx < 26 {
            break;
        }
        idx = idx / 26 - 1;
    }

    result
}

/// Convert a column name (`A`, `AA`, case-insensitive) back to its zero-based index
pub fn column_name_to_index(name: &str) -> StandingsResult<u32> {
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(StandingsError::InvalidCellReference(format!(
            "'{}' is not a column name",
            name
        )));
    }

    let mut index: u32 = 0;
    for c in name.chars() {
        let digit = (c.to_ascii_uppercase() as u8 - b'A') as u32 + 1;
        index = index
            .checked_mul(26)
            .and_then(|i| i.checked_add(digit))
            .ok_or_else(|| {
                StandingsError::InvalidCellReference(format!("column '{}' is out of range", name))
            })?;
    }

    Ok(index - 1)
}

/// `M3`
pub fn cell_reference(column_name: &str, row_num: u32) -> String {
    format!("{}{}", column_name, row_num)
}

/// A single-column range, e.g. `A$3:A$8` with [`CellRangeOptions::FixRow`]
pub fn cell_range(
    column_name: &str,
    start_row_num: u32,
    end_row_num: u32,
    options: CellRangeOptions,
) -> String {
    let col = options.column_anchor();
    let row = options.row_anchor();
    format!(
        "{col}{column_name}{row}{start_row_num}:{col}{column_name}{row}{end_row_num}"
    )
}

fn sheet_cell_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // Optional sheet prefix (bare or quoted), then an optionally anchored A1 cell
        Regex::new(r"^(?:(?:[A-Za-z0-9_]+|'(?:[^']|'')+')!)?\$?[A-Za-z]{1,3}\$?[1-9][0-9]*$")
            .expect("sheet cell pattern is valid")
    })
}

/// Recognizes `C7`, `Teams!A2` and `'My Teams'!$B$4`
pub fn is_sheet_cell_reference(text: &str) -> bool {
    sheet_cell_pattern().is_match(text)
}

//! Sheets API plumbing: A1 references and the batchUpdate request model
//!
//! Nothing here knows about standings; the `core` module feeds it column
//! indexes and formula text.

pub mod cell_reference;
pub mod request;
pub mod request_creator;

pub use cell_reference::{
    cell_range, cell_reference, column_index_to_name, column_name_to_index,
    is_sheet_cell_reference, CellRangeOptions,
};
pub use request::{BatchUpdateRequest, Request};

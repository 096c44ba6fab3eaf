//! Builders for the handful of request shapes a standings sheet needs

use super::request::{
    BooleanCondition, CellData, DataValidationRule, Dimension, DimensionProperties,
    DimensionRange, ExtendedValue, GridCoordinate, GridRange, RepeatCellRequest, Request,
    RowData, UpdateCellsRequest, UpdateDimensionPropertiesRequest,
};

pub const FIELDS_USER_ENTERED_VALUE: &str = "userEnteredValue";
pub const FIELDS_DATA_VALIDATION: &str = "dataValidation";
pub const FIELDS_PIXEL_SIZE: &str = "pixelSize";

/// One column, `row_count` rows starting at `start_row_index`. The end
/// indices saturate at `u32::MAX`.
pub fn column_range(
    sheet_id: Option<i32>,
    start_row_index: u32,
    column_index: u32,
    row_count: u32,
) -> GridRange {
    GridRange {
        sheet_id,
        start_row_index,
        end_row_index: start_row_index.saturating_add(row_count),
        start_column_index: column_index,
        end_column_index: column_index.saturating_add(1),
    }
}

fn repeat_value(range: GridRange, value: ExtendedValue) -> Request {
    Request::RepeatCell(RepeatCellRequest {
        range,
        cell: CellData {
            user_entered_value: Some(value),
            data_validation: None,
        },
        fields: FIELDS_USER_ENTERED_VALUE.to_string(),
    })
}

/// Fill a column with the same formula; relative references shift per row
pub fn repeated_formula_request(
    sheet_id: Option<i32>,
    start_row_index: u32,
    column_index: u32,
    row_count: u32,
    formula: impl Into<String>,
) -> Request {
    repeat_value(
        column_range(sheet_id, start_row_index, column_index, row_count),
        ExtendedValue::formula(formula),
    )
}

/// Fill a column with a constant number
pub fn repeated_number_request(
    sheet_id: Option<i32>,
    start_row_index: u32,
    column_index: u32,
    row_count: u32,
    value: f64,
) -> Request {
    repeat_value(
        column_range(sheet_id, start_row_index, column_index, row_count),
        ExtendedValue::number(value),
    )
}

/// Fill a column with unchecked checkboxes.
///
/// The value is set to `false` so sorting doesn't treat the cells as empty.
pub fn checkbox_request(
    sheet_id: Option<i32>,
    start_row_index: u32,
    column_index: u32,
    row_count: u32,
) -> Request {
    Request::RepeatCell(RepeatCellRequest {
        range: column_range(sheet_id, start_row_index, column_index, row_count),
        cell: CellData {
            user_entered_value: Some(ExtendedValue::boolean(false)),
            data_validation: Some(DataValidationRule {
                condition: BooleanCondition {
                    condition_type: "BOOLEAN".to_string(),
                },
            }),
        },
        fields: FIELDS_DATA_VALIDATION.to_string(),
    })
}

pub fn cell_width_request(sheet_id: Option<i32>, width: u32, column_index: u32) -> Request {
    Request::UpdateDimensionProperties(UpdateDimensionPropertiesRequest {
        range: DimensionRange {
            sheet_id,
            dimension: Dimension::Columns,
            start_index: column_index,
            end_index: column_index.saturating_add(1),
        },
        properties: DimensionProperties { pixel_size: width },
        fields: FIELDS_PIXEL_SIZE.to_string(),
    })
}

/// Write `values` as text across one row, starting at `start_column_index`
pub fn header_row_request<S: AsRef<str>>(
    sheet_id: Option<i32>,
    row_index: u32,
    start_column_index: u32,
    values: &[S],
) -> Request {
    let cells = values
        .iter()
        .map(|v| CellData {
            user_entered_value: Some(ExtendedValue::string(v.as_ref())),
            data_validation: None,
        })
        .collect();

    Request::UpdateCells(UpdateCellsRequest {
        start: GridCoordinate {
            sheet_id,
            row_index,
            column_index: start_column_index,
        },
        rows: vec![RowData { values: cells }],
        fields: FIELDS_USER_ENTERED_VALUE.to_string(),
    })
}

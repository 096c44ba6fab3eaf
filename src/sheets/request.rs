//! The subset of the Sheets v4 `batchUpdate` request schema this crate emits.
//!
//! Field names and nesting follow the REST JSON representation, so a
//! serialized [`BatchUpdateRequest`] can be posted as-is by any client.

use serde::{Deserialize, Serialize};

/// Body of `spreadsheets.batchUpdate`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdateRequest {
    pub requests: Vec<Request>,
}

impl BatchUpdateRequest {
    pub fn new(requests: Vec<Request>) -> Self {
        Self { requests }
    }
}

/// A single update. Serializes as `{"repeatCell": {...}}` and so on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Request {
    RepeatCell(RepeatCellRequest),
    UpdateDimensionProperties(UpdateDimensionPropertiesRequest),
    UpdateCells(UpdateCellsRequest),
}

impl Request {
    pub fn as_repeat_cell(&self) -> Option<&RepeatCellRequest> {
        match self {
            Request::RepeatCell(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_update_dimension_properties(&self) -> Option<&UpdateDimensionPropertiesRequest> {
        match self {
            Request::UpdateDimensionProperties(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_update_cells(&self) -> Option<&UpdateCellsRequest> {
        match self {
            Request::UpdateCells(r) => Some(r),
            _ => None,
        }
    }
}

/// Copies one cell's data across a whole range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatCellRequest {
    pub range: GridRange,
    pub cell: CellData,
    /// Field mask of the `cell` members to write
    pub fields: String,
}

/// Half-open rectangle of cells; indexes are zero-based
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet_id: Option<i32>,
    pub start_row_index: u32,
    pub end_row_index: u32,
    pub start_column_index: u32,
    pub end_column_index: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_entered_value: Option<ExtendedValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_validation: Option<DataValidationRule>,
}

/// Exactly one member is set in practice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bool_value: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula_value: Option<String>,
}

impl ExtendedValue {
    pub fn formula(formula: impl Into<String>) -> Self {
        Self {
            formula_value: Some(formula.into()),
            ..Default::default()
        }
    }

    pub fn number(value: f64) -> Self {
        Self {
            number_value: Some(value),
            ..Default::default()
        }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self {
            string_value: Some(value.into()),
            ..Default::default()
        }
    }

    pub fn boolean(value: bool) -> Self {
        Self {
            bool_value: Some(value),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataValidationRule {
    pub condition: BooleanCondition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BooleanCondition {
    #[serde(rename = "type")]
    pub condition_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDimensionPropertiesRequest {
    pub range: DimensionRange,
    pub properties: DimensionProperties,
    pub fields: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Dimension {
    Rows,
    Columns,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet_id: Option<i32>,
    pub dimension: Dimension,
    pub start_index: u32,
    pub end_index: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionProperties {
    pub pixel_size: u32,
}

/// Writes explicit cell values starting at a single coordinate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCellsRequest {
    pub start: GridCoordinate,
    pub rows: Vec<RowData>,
    pub fields: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCoordinate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet_id: Option<i32>,
    pub row_index: u32,
    pub column_index: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowData {
    pub values: Vec<CellData>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_repeat_cell_serializes_in_api_shape() {
        let request = Request::RepeatCell(RepeatCellRequest {
            range: GridRange {
                sheet_id: Some(7),
                start_row_index: 2,
                end_row_index: 10,
                start_column_index: 6,
                end_column_index: 7,
            },
            cell: CellData {
                user_entered_value: Some(ExtendedValue::formula("=G3")),
                data_validation: None,
            },
            fields: "userEnteredValue".to_string(),
        });

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "repeatCell": {
                    "range": {
                        "sheetId": 7,
                        "startRowIndex": 2,
                        "endRowIndex": 10,
                        "startColumnIndex": 6,
                        "endColumnIndex": 7
                    },
                    "cell": { "userEnteredValue": { "formulaValue": "=G3" } },
                    "fields": "userEnteredValue"
                }
            })
        );
    }

    #[test]
    fn test_missing_sheet_id_is_omitted() {
        let range = GridRange::default();
        let value = serde_json::to_value(range).unwrap();
        assert!(value.get("sheetId").is_none());
    }

    #[test]
    fn test_dimension_serializes_uppercase() {
        let value = serde_json::to_value(Dimension::Columns).unwrap();
        assert_eq!(value, json!("COLUMNS"));
    }
}

use thiserror::Error;

pub type StandingsResult<T> = Result<T, StandingsError>;

#[derive(Error, Debug)]
pub enum StandingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Can't find column '{header}' in the header row. Did you forget to add it to the sheet layout?")]
    UnknownColumn { header: String },

    #[error("Column '{0}' appears more than once in the header row")]
    DuplicateColumn(String),

    #[error("{count} request creators apply to column '{header}'")]
    AmbiguousCreator { header: String, count: usize },

    #[error("Invalid cell reference: {0}")]
    InvalidCellReference(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl StandingsError {
    pub fn unknown_column(header: impl Into<String>) -> Self {
        StandingsError::UnknownColumn {
            header: header.into(),
        }
    }
}

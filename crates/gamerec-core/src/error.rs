//! Error types for gamerec core

use thiserror::Error;

/// Result type alias for recommendation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Recommendation error types
#[derive(Error, Debug)]
pub enum Error {
    // Lookup errors
    #[error("Title not found: {title}")]
    TitleNotFound { title: String },

    #[error("Index {index} out of range for dataset of {len} rows")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Label not found in feature table: {label}")]
    LabelNotFound { label: String },

    // Selection errors
    #[error("Unknown genre: {genre}")]
    UnknownGenre { genre: String },

    #[error("Invalid ranking option: {option}")]
    InvalidOption { option: String },

    // Input shape errors
    #[error("Similarity matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("Row {row} has {found} values, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },

    #[error("Feature grid is {rows}x{cols} but the labels describe {items}x{dimensions}")]
    ShapeMismatch { rows: usize, cols: usize, items: usize, dimensions: usize },

    #[error("Similarity matrix covers {matrix} rows but the dataset has {catalog}")]
    DimensionMismatch { matrix: usize, catalog: usize },

    #[error("Invalid value {value:?} in row {row}, column {column}")]
    InvalidValue { row: usize, column: String, value: String },

    // Input errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Rendering errors
    #[error("Chart rendering failed: {0}")]
    Render(String),
}

impl Error {
    /// Create a rendering error
    pub fn render(msg: impl ToString) -> Self {
        Error::Render(msg.to_string())
    }

    /// Returns true if this error was caused by operator input rather than
    /// by malformed data.
    pub fn is_selection_error(&self) -> bool {
        matches!(
            self,
            Error::TitleNotFound { .. }
                | Error::UnknownGenre { .. }
                | Error::InvalidOption { .. }
                | Error::LabelNotFound { .. }
        )
    }

    /// Returns the error code for reports
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::TitleNotFound { .. } => "TITLE_NOT_FOUND",
            Error::IndexOutOfRange { .. } => "INDEX_OUT_OF_RANGE",
            Error::LabelNotFound { .. } => "LABEL_NOT_FOUND",
            Error::UnknownGenre { .. } => "UNKNOWN_GENRE",
            Error::InvalidOption { .. } => "INVALID_OPTION",
            Error::NotSquare { .. } => "NOT_SQUARE",
            Error::RaggedRow { .. } => "RAGGED_ROW",
            Error::ShapeMismatch { .. } => "SHAPE_MISMATCH",
            Error::DimensionMismatch { .. } => "DIMENSION_MISMATCH",
            Error::InvalidValue { .. } => "INVALID_VALUE",
            Error::Csv(_) => "CSV",
            Error::Io(_) => "IO",
            Error::Render(_) => "RENDER",
        }
    }
}

use chrono::NaiveDate;
use polars::prelude::PolarsError;
use thiserror::Error;

/// Raised by the plan generators. Only the weekly minute budget is checked;
/// unknown levels and focus areas fall back to default text instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl PlanError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("workbook error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("dataframe conversion error: {0}")]
    DataFrame(#[from] PolarsError),
    #[error("invalid start date '{0}' (expected YYYY-MM-DD)")]
    InvalidStartDate(String),
    #[error("{day} starting {start} falls outside the supported date range")]
    OutOfRange { day: String, start: NaiveDate },
}

pub type PlanResult<T> = Result<T, PlanError>;
pub type ExportResult<T> = Result<T, ExportError>;
pub type CalendarResult<T> = Result<T, CalendarError>;

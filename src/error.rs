use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Source missing, unreadable, or not tabular text with the required headers.
    #[error("failed to load data from `{origin}`: {detail}")]
    DataLoad { origin: String, detail: String },

    /// A row whose count field is not a finite, non-negative number.
    #[error("row {row}: count value `{value}` is not a valid non-negative number")]
    DataFormat { row: usize, value: String },
}

impl ChartError {
    pub(crate) fn data_load(origin: impl Into<String>, detail: impl ToString) -> Self {
        Self::DataLoad {
            origin: origin.into(),
            detail: detail.to_string(),
        }
    }
}

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("dataset is empty")]
    EmptyDataset,

    #[error("failed to parse sample json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read sample file: {0}")]
    Io(#[from] std::io::Error),

    #[error("redirect loop while resolving `{path}`")]
    RedirectLoop { path: String },

    #[cfg(feature = "fetch")]
    #[error("failed to fetch samples: {0}")]
    Fetch(String),
}

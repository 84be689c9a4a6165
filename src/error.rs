use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid tick range: min={min}, max={max}")]
    InvalidRange { min: f64, max: f64 },

    #[error("xy source must contain at least one point")]
    EmptySource,

    #[error("bucket count must be >= 1")]
    InvalidBucketCount,

    #[error("degenerate geometry: {0}")]
    InvalidGeometry(String),

    #[error("render backend failure: {0}")]
    Backend(String),

    #[error("sample i/o failure: {0}")]
    Io(#[from] std::io::Error),
}

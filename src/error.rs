use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Grid shape, tick count, or value range outside the supported window.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Data matrix dimensions disagree with the configured grid shape.
    #[error("data shape mismatch: {0}")]
    Shape(String),

    /// User-entered text could not be parsed into the expected numbers.
    #[error("parse error: {0}")]
    Parse(String),

    /// Operation referenced a plot item id missing from the registry.
    #[error("plot item `{0}` not found")]
    NotFound(String),

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    /// Failure surfaced by a rendering backend or the PNG encoder.
    #[error("render backend error: {0}")]
    Backend(String),

    #[error("export io error: {0}")]
    Io(#[from] std::io::Error),
}

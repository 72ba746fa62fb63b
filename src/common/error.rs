use thiserror::Error;

/// Errors reported by the enhancement pipeline.
///
/// Every failure is a distinguishable condition; nothing is collapsed into
/// a bare boolean and nothing is retried internally. A frame that fails is
/// simply not produced; retry policy belongs to the host.
#[derive(Debug, Error)]
pub enum Error {
    /// A processing parameter is outside its valid domain. Rejected before
    /// any processing begins; no partial output is written.
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// Planes that must be processed together disagree in size.
    #[error(
        "dimension mismatch in {context}: expected {expected_width}x{expected_height}, \
         got {actual_width}x{actual_height}"
    )]
    DimensionMismatch {
        context: &'static str,
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    /// Pipeline resources could not be prepared. The engine was not
    /// constructed and must not be used.
    #[error("pipeline initialization failed: {0}")]
    Initialization(String),

    /// Both pooled intermediate planes are already borrowed.
    #[error("buffer pool exhausted: both pooled planes are in use")]
    PoolExhausted,

    /// The engine has been shut down and can no longer process frames.
    #[error("pipeline has been shut down")]
    ShutDown,
}

pub type Result<T> = std::result::Result<T, Error>;

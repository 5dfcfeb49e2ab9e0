pub mod config;
pub mod error;
pub mod format;
pub mod kpi;
pub mod math;
pub mod types;

#[cfg(feature = "narrative")]
pub mod narrative;

#[cfg(feature = "benchmark")]
pub mod benchmark;

#[cfg(feature = "ma_scoring")]
pub mod ma_scoring;

#[cfg(feature = "report")]
pub mod report;

pub use config::MaConfig;
pub use error::EvaliumError;
pub use types::*;

/// Standard result type for all evalium operations
pub type EvaliumResult<T> = Result<T, EvaliumError>;

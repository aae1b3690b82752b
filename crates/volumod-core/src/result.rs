//! Convenience result type alias for Volumod.

use crate::error::AppError;

/// A specialized `Result` type for Volumod operations.
pub type AppResult<T> = Result<T, AppError>;

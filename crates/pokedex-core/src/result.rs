//! Convenience result type alias for the Pokedex crates.

use crate::error::AppError;

/// A specialized `Result` type for catalog operations.
///
/// Every repository and service call resolves to exactly one `AppResult`,
/// so callers never need to handle panics or partial streams.
pub type AppResult<T> = Result<T, AppError>;

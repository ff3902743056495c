//! Shared types for the Tiffin POS crates
//!
//! Domain models, the unified error type and id/time utilities used by
//! the mock backend and the page-level ordering front-ends.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult};
pub use serde::{Deserialize, Serialize};

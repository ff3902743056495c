//! Unified error type for the POS crates
//!
//! Every failure ends up in front of the operator as a single
//! human-readable message. [`AppError::message`] produces that string;
//! callers render it once and leave their local state unchanged.

use thiserror::Error;

/// Application error
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Input rejected before the backend is reached
    #[error("{message}")]
    Validation { message: String },

    /// Referenced record does not exist
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// Failure reported by the backend
    #[error("{message}")]
    Backend { message: String },
}

impl AppError {
    // ========== Convenient constructors ==========

    /// Create a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a NotFound error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a Backend error
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    /// The message shown to the user
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message } => message.clone(),
            Self::NotFound { resource } => format!("{} not found", resource),
            Self::Backend { message } => message.clone(),
        }
    }
}

/// Result type for POS operations
pub type AppResult<T> = Result<T, AppError>;

//! # Hestia Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Group AUZA
//!
//! ## Overview
//!
//! This module defines the error types used throughout Hestia. Very little in
//! Hestia can actually fail: the matcher is a total function and connectivity
//! probing only ever reports `Offline`. What remains are boundary errors
//! (empty submissions, unknown FAQ ids, bad configuration) and the server's
//! startup failures.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `HestiaError`: a custom error enum using `thiserror` for specific error types
//! - `Result<T>`: a type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust
//! // Reject an empty submission at the boundary
//! if text.trim().is_empty() {
//!     return Err(HestiaError::EmptyInput);
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the Hestia application.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum HestiaError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Empty or whitespace-only text was submitted. No turn is created.
    #[error("Input cannot be empty.")]
    EmptyInput,

    #[error("FAQ item {id} does not exist (valid items: 1-{count}).")]
    UnknownFaqItem { id: usize, count: usize },

    #[error("Quick response {index} does not exist (valid choices: 1-{count}).")]
    UnknownQuickResponse { index: usize, count: usize },

    #[error("Install failed: {0}")]
    Install(String),

    #[error("Server error: {0}")]
    Server(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            HestiaError::Config("Missing setting 'foo'".to_string()).to_string(),
            "Configuration error: Missing setting 'foo'"
        );
        assert_eq!(HestiaError::EmptyInput.to_string(), "Input cannot be empty.");
        assert_eq!(
            HestiaError::UnknownFaqItem { id: 12, count: 10 }.to_string(),
            "FAQ item 12 does not exist (valid items: 1-10)."
        );
        assert_eq!(
            HestiaError::UnknownQuickResponse { index: 0, count: 9 }.to_string(),
            "Quick response 0 does not exist (valid choices: 1-9)."
        );
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let err: anyhow::Error = HestiaError::EmptyInput.into();
        assert_eq!(
            err.downcast_ref::<HestiaError>(),
            Some(&HestiaError::EmptyInput)
        );
    }
}

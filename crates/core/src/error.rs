//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Result type returned by external collaborators (stock, customers, tax,
/// fulfillment, notification).
///
/// Boundary failures are opaque to the domain: they are carried as-is and
/// never translated or retried by the core.
pub type BoundaryResult<T> = anyhow::Result<T>;

/// Domain-level error.
///
/// Keep this focused on deterministic failures raised while constructing
/// domain values. Business-rule findings on whole orders are reported by the
/// sales validation engine instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. negative price).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure, blank SKU).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_message() {
        assert_eq!(
            DomainError::validation("price must not be negative").to_string(),
            "validation failed: price must not be negative"
        );
        assert_eq!(
            DomainError::invalid_id("sku is blank").to_string(),
            "invalid identifier: sku is blank"
        );
    }
}

//! # Controller Error Type
//!
//! The boundary error type for controller operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in MiniCart                               │
//! │                                                                         │
//! │  Renderer                       Controller                              │
//! │  ────────                       ──────────                              │
//! │                                                                         │
//! │  add_product(id)                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Unknown id?  ──► ControllerError { INVALID_PRODUCT_ID } ───────►│  │
//! │  │       │           (contract violation: UI offered a bad id)     │  │
//! │  │       ▼                                                          │  │
//! │  │  Unavailable? ──► blocked feedback, Ok(view)  (NOT an error)    │  │
//! │  │       │                                                          │  │
//! │  │       ▼                                                          │  │
//! │  │  Success ─────► added feedback, Ok(view)                         │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  remove_product(id): never fails. NotInCart is a silent no-op.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `Unavailable` and `NotInCart` are recovered locally and become feedback
//! or a no-op; only `InvalidProductId` surfaces, and even that is a
//! defensive precondition check, not something a well-formed UI can trigger.

use serde::Serialize;

use minicart_core::ProductId;

/// Error returned from controller operations.
///
/// ## Serialization
/// This is what the presentation layer receives when an operation fails:
/// ```json
/// {
///   "code": "INVALID_PRODUCT_ID",
///   "message": "Product not found in catalog: 42"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for controller responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The id is not in the catalog. A well-formed UI never offers such an
    /// id, so this indicates a programming-contract violation in the host.
    InvalidProductId,
}

impl ControllerError {
    /// Creates an invalid-product-id error.
    pub fn invalid_product_id(id: ProductId) -> Self {
        ControllerError {
            code: ErrorCode::InvalidProductId,
            message: format!("Product not found in catalog: {}", id),
        }
    }
}

impl std::fmt::Display for ControllerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ControllerError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_product_id_message() {
        let err = ControllerError::invalid_product_id(ProductId::new(42));
        assert_eq!(err.code, ErrorCode::InvalidProductId);
        assert_eq!(err.message, "Product not found in catalog: 42");
    }

    #[test]
    fn test_serializes_with_screaming_code() {
        let err = ControllerError::invalid_product_id(ProductId::new(42));
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("INVALID_PRODUCT_ID"));
    }
}

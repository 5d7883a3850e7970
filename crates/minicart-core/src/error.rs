//! # Error Types
//!
//! Domain-specific error types for minicart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  minicart-core errors (this file)                                       │
//! │  ├── CartError        - Cart/catalog rule violations                    │
//! │  └── ValidationError  - Catalog construction failures                   │
//! │                                                                         │
//! │  minicart-session errors (separate crate)                               │
//! │  └── ControllerError  - What the presentation layer sees (serialized)  │
//! │                                                                         │
//! │  Flow: ValidationError → CartError → ControllerError → Renderer        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, id)
//! 3. Errors are enum variants, never String
//! 4. `Unavailable` and `NotInCart` are reported outcomes, not failures that
//!    escape to the presentation layer: the controller recovers both locally

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Cart Error
// =============================================================================

/// Cart and catalog rule violations.
///
/// These represent business rule outcomes. The controller catches every one
/// of them and turns it into either a feedback message or a no-op; none
/// propagates as an unhandled failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// Add was rejected because the product's availability flag is off.
    ///
    /// ## When This Occurs
    /// - The UI's add control should be disabled, but a stale or synthetic
    ///   click can still arrive
    ///
    /// ## Guarantee
    /// The cart is unchanged when this is returned.
    #[error("Product is not available: {name}")]
    Unavailable { name: String },

    /// Remove was requested for a product with no occurrences in the cart.
    ///
    /// Treated as a defensive no-op by the controller: the cart and total
    /// are unchanged.
    #[error("Product not in cart: {id}")]
    NotInCart { id: ProductId },

    /// Catalog construction error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Catalog construction validation errors.
///
/// The catalog is built once at session start and is read-only afterwards,
/// so these can only occur during construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A product name is missing or empty.
    #[error("Product name is required (id {id})")]
    NameRequired { id: ProductId },

    /// A product price is negative.
    #[error("Price for '{name}' must not be negative")]
    NegativePrice { name: String },

    /// Two catalog products share the same id.
    #[error("Duplicate product id: {id}")]
    DuplicateId { id: ProductId },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;

// =============================================================================
// Unit Tests
// =============================================================================

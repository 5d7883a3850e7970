//! # Validation Module
//!
//! Catalog construction validation for MiniCart.
//!
//! The catalog is the only place new product data enters the system, so
//! validation happens exactly once, at `Catalog::new`. Everything after
//! that works with already-validated, immutable products.
//!
//! ## Usage
//! ```rust
//! use minicart_core::validation::{validate_product_name, validate_price};
//! use minicart_core::types::ProductId;
//!
//! validate_product_name(ProductId::new(1), "Apple").unwrap();
//! validate_price("Apple", 100).unwrap();
//! ```

use crate::error::ValidationError;
use crate::types::ProductId;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum length of a product name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
pub fn validate_product_name(id: ProductId, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() || name.len() > MAX_NAME_LENGTH {
        return Err(ValidationError::NameRequired { id });
    }

    Ok(())
}

/// Validates a product price.
///
/// ## Rules
/// - Must not be negative (zero is allowed: free samples are a thing)
pub fn validate_price(name: &str, price_cents: i64) -> ValidationResult<()> {
    if price_cents < 0 {
        return Err(ValidationError::NegativePrice {
            name: name.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Catalog Module
//!
//! The fixed, read-only set of products available for a session.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Lifecycle                                  │
//! │                                                                         │
//! │  Session start ──► Catalog::new(products)  (validated once)            │
//! │                         │                                               │
//! │                         ▼                                               │
//! │                 read-only for the whole session:                        │
//! │                 products() / find(id) — no mutation, no side effects   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Availability is a static per-product attribute set at construction. It is
//! NOT derived from stock counts or any external state.

use crate::error::{CartResult, ValidationError};
use crate::types::{Product, ProductId};
use crate::validation::{validate_price, validate_product_name};

// =============================================================================
// Catalog
// =============================================================================

/// A fixed, ordered, read-only collection of products.
///
/// ## Invariants
/// - Product ids are unique
/// - Names are non-empty, prices are non-negative (validated at construction)
/// - Iteration order is stable: `products()` returns the same sequence on
///   every call
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog from a list of products, validating each one.
    ///
    /// ## Errors
    /// Returns a validation error if any name is empty, any price is
    /// negative, or two products share an id.
    pub fn new(products: Vec<Product>) -> CartResult<Self> {
        for (index, product) in products.iter().enumerate() {
            validate_product_name(product.id, &product.name)?;
            validate_price(&product.name, product.price_cents)?;

            // ids must be unique across the whole catalog
            if products[..index].iter().any(|p| p.id == product.id) {
                return Err(ValidationError::DuplicateId { id: product.id }.into());
            }
        }

        Ok(Catalog { products })
    }

    /// The storefront catalog used by the demo UI and the integration tests.
    ///
    /// Grapes is deliberately unavailable so the disabled-control path is
    /// always exercisable.
    pub fn demo() -> Self {
        Catalog {
            products: vec![
                Product::new(1u32, "Apple", 100),          // $1.00
                Product::new(2u32, "Banana", 50),          // $0.50
                Product::new(3u32, "Orange", 75),          // $0.75
                Product::unavailable(4u32, "Grapes", 200), // $2.00, disabled
            ],
        }
    }

    /// Returns all products in stable catalog order.
    #[inline]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by id.
    ///
    /// Returns `None` for ids outside the catalog. A well-formed UI never
    /// offers such an id; the controller treats it as a contract violation.
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Number of products in the catalog.
    #[inline]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Domain Types
//!
//! Core domain types used throughout MiniCart.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    Product      │   │   ProductId     │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  id             │   │  u32 (unique,   │                             │
//! │  │  name           │   │  stable)        │                             │
//! │  │  price_cents    │   └─────────────────┘                             │
//! │  │  available      │                                                   │
//! │  └─────────────────┘                                                   │
//! │                                                                         │
//! │  Identity is by id: two Products with the same id ARE the same         │
//! │  product. Products are immutable after catalog construction.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product Id
// =============================================================================

/// Stable, unique identifier for a product.
///
/// ## Why a Newtype?
/// A bare `u32` would let any integer pass for a product id. The newtype
/// makes the controller's contract explicit: only ids handed out by the
/// catalog are meaningful.
///
/// `Ord` is derived so id-keyed maps (e.g. the per-product disabled map in
/// the view snapshot) iterate in a stable order, which keeps serialized
/// snapshots deterministic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct ProductId(u32);

impl ProductId {
    /// Creates a product id from a raw integer.
    #[inline]
    pub const fn new(id: u32) -> Self {
        ProductId(id)
    }

    /// Returns the raw integer value.
    #[inline]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        ProductId(id)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product offered by the catalog.
///
/// Immutable after catalog construction: the catalog hands out shared
/// references and the cart freezes a snapshot of the fields it needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique, stable identifier. Identity is by id.
    pub id: ProductId,

    /// Display name shown in the storefront and in feedback messages.
    pub name: String,

    /// Price in cents (smallest currency unit). Never negative.
    pub price_cents: i64,

    /// Whether the product may be added to a cart.
    ///
    /// This is a static attribute set at catalog construction, not derived
    /// from stock counts or external state. An unavailable product's add
    /// control is rendered disabled, and add attempts are rejected.
    pub available: bool,
}

impl Product {
    /// Creates a new product.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price_cents: i64) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            price_cents,
            available: true,
        }
    }

    /// Creates a product that cannot be added to the cart.
    pub fn unavailable(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price_cents: i64,
    ) -> Self {
        Product {
            available: false,
            ..Product::new(id, name, price_cents)
        }
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

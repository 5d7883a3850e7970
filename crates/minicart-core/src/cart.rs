//! # Cart Module
//!
//! The mutable multiset of products selected during a session.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  UI Action               Cart Operation          State Change           │
//! │  ─────────               ──────────────          ────────────           │
//! │                                                                         │
//! │  Click "Add" ──────────► add(&product) ────────► qty += 1 (or push)    │
//! │                                                                         │
//! │  Click "Remove" ───────► remove(id) ───────────► qty -= 1              │
//! │                                                  (line dropped at 0)    │
//! │                                                                         │
//! │  Render ───────────────► total() / lines() ────► (read only, fresh)    │
//! │                                                                         │
//! │  NOTE: N clicks on "Add" yield exactly N occurrences. No debouncing,   │
//! │        no coalescing beyond simple counting. A rapid double-click is   │
//! │        two adds.                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - A line's quantity is always ≥ 1; a line that would reach 0 is deleted
//! - The cart never contains a product whose `available` flag was false at
//!   the time of the add attempt (such adds are rejected, cart unchanged)
//! - `total()` is recomputed fresh from current contents on every call,
//!   never cached, and is never negative
//! - Lines keep first-insertion order while their quantity stays ≥ 1;
//!   removing all occurrences and re-adding appends a fresh line at the end

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CartError, CartResult};
use crate::money::Money;
use crate::types::{Product, ProductId};

// =============================================================================
// Cart Line
// =============================================================================

/// A distinct product in the cart together with its quantity.
///
/// ## Design Notes
/// - `product_id`: identity reference back to the catalog
/// - `name` / `unit_price_cents`: frozen copy of product data at the time of
///   the first add. Products are immutable for the session anyway, but the
///   snapshot keeps the cart self-contained for display.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product identity (catalog reference).
    pub product_id: ProductId,

    /// Product name at time of first adding (frozen).
    pub name: String,

    /// Price in cents at time of first adding (frozen).
    pub unit_price_cents: i64,

    /// Number of occurrences of this product in the cart. Always ≥ 1.
    pub quantity: i64,

    /// When this line was first added to the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a new line with quantity 1 from a catalog product.
    fn from_product(product: &Product) -> Self {
        CartLine {
            product_id: product.id,
            name: product.name.clone(),
            unit_price_cents: product.price_cents,
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Removed Item
// =============================================================================

/// Outcome of a successful remove, for feedback and display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removed {
    /// Frozen name of the removed product (for the feedback message).
    pub name: String,

    /// Occurrences left in the cart after removing one. 0 means the line
    /// was deleted.
    pub remaining: i64,
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: a multiset of catalog products.
///
/// Created empty at session start, never restored from a previous session,
/// destroyed when the session ends. There is no persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Counted lines, in first-insertion order.
    lines: Vec<CartLine>,

    /// When the cart was created/last cleared.
    #[serde(default = "Utc::now")]
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds one occurrence of a product to the cart.
    ///
    /// ## Behavior
    /// - Product unavailable: rejected with `Unavailable`, cart unchanged
    /// - Product already in cart: quantity incremented by exactly 1
    /// - Product not in cart: new line appended with quantity 1
    ///
    /// Safe to invoke repeatedly and rapidly: N calls yield exactly N
    /// occurrences.
    pub fn add(&mut self, product: &Product) -> CartResult<()> {
        if !product.available {
            return Err(CartError::Unavailable {
                name: product.name.clone(),
            });
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            line.quantity += 1;
            return Ok(());
        }

        self.lines.push(CartLine::from_product(product));
        Ok(())
    }

    /// Removes exactly one occurrence of a product from the cart.
    ///
    /// ## Behavior
    /// - Not in cart: rejected with `NotInCart`, cart unchanged
    /// - Quantity > 1: decremented by exactly 1, line kept
    /// - Quantity == 1: line deleted (never kept at quantity 0)
    ///
    /// Quantity can therefore never go below 0 and the total can never go
    /// negative.
    pub fn remove(&mut self, id: ProductId) -> CartResult<Removed> {
        let index = self
            .lines
            .iter()
            .position(|l| l.product_id == id)
            .ok_or(CartError::NotInCart { id })?;

        let line = &mut self.lines[index];
        line.quantity -= 1;

        let removed = Removed {
            name: line.name.clone(),
            remaining: line.quantity,
        };

        if removed.remaining == 0 {
            self.lines.remove(index);
        }

        Ok(removed)
    }

    /// Calculates the total: sum of price × quantity over all lines.
    ///
    /// Recomputed fresh from current contents on every call — never cached,
    /// never stale. Returns $0.00 for an empty cart.
    pub fn total(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(), |acc, line| acc + line.line_total())
    }

    /// Returns the lines in first-insertion order.
    #[inline]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Returns the quantity of a product currently in the cart (0 if absent).
    pub fn quantity_of(&self, id: ProductId) -> i64 {
        self.lines
            .iter()
            .find(|l| l.product_id == id)
            .map_or(0, |l| l.quantity)
    }

    /// Total occurrences across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Checks if the cart is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

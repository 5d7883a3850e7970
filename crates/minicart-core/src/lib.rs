//! # minicart-core: Pure Business Logic for MiniCart
//!
//! This crate is the **heart** of MiniCart. It contains all cart rules as
//! pure, synchronous logic with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        MiniCart Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation Layer (out of scope)               │   │
//! │  │    Storefront UI ──► Cart UI ──► Feedback banner                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ clicks / snapshot JSON                 │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    minicart-session                             │   │
//! │  │    CartController: add_product, remove_product, view            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ minicart-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  catalog  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │  Catalog  │  │   │
//! │  │   │ ProductId │  │  (cents)  │  │ CartLine  │  │ (fixed)   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐                                 │   │
//! │  │   │ feedback  │  │validation │                                 │   │
//! │  │   └───────────┘  └───────────┘                                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductId)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - Fixed, read-only product set for the session
//! - [`cart`] - Mutable multiset of products with add/remove/total
//! - [`feedback`] - Transient message for the last mutation
//! - [`error`] - Domain error types
//! - [`validation`] - Catalog construction validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and persistence access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use minicart_core::catalog::Catalog;
//! use minicart_core::cart::Cart;
//! use minicart_core::types::ProductId;
//!
//! let catalog = Catalog::demo();
//! let mut cart = Cart::new();
//!
//! // Apple $1.00 + Orange $0.75
//! cart.add(catalog.find(ProductId::new(1)).unwrap()).unwrap();
//! cart.add(catalog.find(ProductId::new(3)).unwrap()).unwrap();
//!
//! assert_eq!(cart.total().to_string(), "$1.75");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod feedback;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use minicart_core::Money` instead of
// `use minicart_core::money::Money`

pub use cart::{Cart, CartLine, Removed};
pub use catalog::Catalog;
pub use error::{CartError, CartResult, ValidationError};
pub use feedback::{Feedback, FeedbackKind, FeedbackNotifier};
pub use money::Money;
pub use types::{Product, ProductId};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Message the presentation layer shows when, and only when, the cart is
/// empty.
///
/// ## Why a constant?
/// Both the view snapshot and the tests assert this exact string; a single
/// definition keeps them from drifting apart.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty.";

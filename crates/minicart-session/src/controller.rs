//! # Cart Controller
//!
//! Orchestrates Catalog, Cart, and FeedbackNotifier in response to action
//! events, and exposes the current view snapshot for rendering.
//!
//! ## Action Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Controller Action Flow                               │
//! │                                                                         │
//! │  UI click ──► add_product(id)                                           │
//! │                   │                                                     │
//! │                   ▼                                                     │
//! │        ┌──────────────────────────────────────────────────┐            │
//! │        │  1. Look up product in catalog                   │            │
//! │        │     - unknown id → ControllerError (contract     │            │
//! │        │       violation, documented)                     │            │
//! │        │  2. Unavailable → blocked feedback, cart         │            │
//! │        │     untouched                                    │            │
//! │        │  3. Else → cart add + added feedback             │            │
//! │        │  4. Recompute snapshot (lines, total, feedback,  │            │
//! │        │     per-product disabled)                        │            │
//! │        └──────────────────────────────────────────────────┘            │
//! │                                                                         │
//! │  Each action is processed synchronously to completion before the next  │
//! │  is accepted. No overlapping in-flight mutations, no debouncing: a     │
//! │  rapid double-click is two adds.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Session Model
//! One controller per session, with explicit fields and clear construction.
//! No globals, no statics: multiple independent sessions coexist without
//! shared mutable state. A fresh controller always starts with an empty
//! cart regardless of any prior session's mutations.

use tracing::debug;

use minicart_core::{Cart, CartError, Catalog, FeedbackNotifier, ProductId};

use crate::error::ControllerError;
use crate::view::CartView;

// =============================================================================
// Cart Controller
// =============================================================================

/// One user session's cart state machine.
#[derive(Debug)]
pub struct CartController {
    catalog: Catalog,
    cart: Cart,
    feedback: FeedbackNotifier,
}

impl CartController {
    /// Creates a controller for a fresh session: the given catalog, an
    /// empty cart, and no feedback.
    pub fn new(catalog: Catalog) -> Self {
        CartController {
            catalog,
            cart: Cart::new(),
            feedback: FeedbackNotifier::new(),
        }
    }

    /// Creates a controller over the demo storefront catalog.
    pub fn with_demo_catalog() -> Self {
        CartController::new(Catalog::demo())
    }

    /// Handles an add-product action.
    ///
    /// ## Behavior
    /// - Unknown id: fails with `InvalidProductId` (the UI should never
    ///   offer an id outside the catalog)
    /// - Unavailable product: cart and total unchanged, feedback set to
    ///   blocked, snapshot returned
    /// - Otherwise: one occurrence appended/incremented, feedback set to
    ///   added, snapshot returned with the updated total
    pub fn add_product(&mut self, id: ProductId) -> Result<CartView, ControllerError> {
        debug!(product_id = %id, "add_product action");

        let product = self
            .catalog
            .find(id)
            .ok_or_else(|| ControllerError::invalid_product_id(id))?;

        match self.cart.add(product) {
            Ok(()) => self.feedback.on_added(product),
            Err(CartError::Unavailable { .. }) => self.feedback.on_blocked(product),
            // add() only reports Unavailable; nothing else reaches here
            Err(other) => {
                debug!(error = %other, "unexpected cart add outcome");
            }
        }

        Ok(self.view())
    }

    /// Handles a remove-product action.
    ///
    /// ## Behavior
    /// - One occurrence in cart: removed; feedback set to removed using the
    ///   line's frozen name
    /// - Not in cart: defensive no-op, feedback unchanged
    ///
    /// Never fails past this boundary: an unknown or absent id simply
    /// leaves the state as it was.
    pub fn remove_product(&mut self, id: ProductId) -> CartView {
        debug!(product_id = %id, "remove_product action");

        match self.cart.remove(id) {
            Ok(removed) => self.feedback.on_removed(&removed.name),
            Err(_) => {
                // NotInCart: nothing to remove, nothing to report
                debug!(product_id = %id, "remove_product no-op (not in cart)");
            }
        }

        self.view()
    }

    /// Projects the current state into a view snapshot.
    ///
    /// Recomputed on demand from the live catalog, cart, and feedback;
    /// never cached, never independently mutated.
    pub fn view(&self) -> CartView {
        CartView::project(&self.catalog, &self.cart, self.feedback.current())
    }

    /// The session's catalog (read-only).
    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The session's cart (read-only; mutate through actions).
    #[inline]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    const APPLE: ProductId = ProductId::new(1);
    const BANANA: ProductId = ProductId::new(2);
    const ORANGE: ProductId = ProductId::new(3);
    const GRAPES: ProductId = ProductId::new(4);

    #[test]
    fn test_fresh_session_is_empty() {
        let controller = CartController::with_demo_catalog();
        let view = controller.view();

        assert_eq!(view.empty_message.as_deref(), Some("Your cart is empty."));
        assert_eq!(view.total, "$0.00");
        assert_eq!(view.feedback, None);
    }

    #[test]
    fn test_add_updates_total_and_feedback() {
        let mut controller = CartController::with_demo_catalog();
        let view = controller.add_product(APPLE).unwrap();

        assert_eq!(view.total, "$1.00");
        assert_eq!(view.empty_message, None);
        assert!(view.feedback.unwrap().contains("Added"));
    }

    #[test]
    fn test_unknown_id_is_contract_violation() {
        let mut controller = CartController::with_demo_catalog();
        let err = controller.add_product(ProductId::new(999)).unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidProductId);
        // State untouched by the failed action
        assert_eq!(controller.view().total, "$0.00");
    }

    #[test]
    fn test_blocked_add_changes_only_feedback() {
        let mut controller = CartController::with_demo_catalog();
        controller.add_product(APPLE).unwrap();

        let view = controller.add_product(GRAPES).unwrap();

        assert_eq!(view.total, "$1.00"); // unchanged
        assert_eq!(view.lines.len(), 1); // unchanged
        assert!(view.feedback.unwrap().contains("Grapes"));
        assert_eq!(view.disabled[&GRAPES], true);
    }

    #[test]
    fn test_remove_absent_is_silent_noop() {
        let mut controller = CartController::with_demo_catalog();
        controller.add_product(APPLE).unwrap();

        let before = controller.view();
        let after = controller.remove_product(BANANA);

        // Cart, total, and feedback all unchanged
        assert_eq!(before, after);
    }

    #[test]
    fn test_remove_sets_removed_feedback() {
        let mut controller = CartController::with_demo_catalog();
        controller.add_product(ORANGE).unwrap();

        let view = controller.remove_product(ORANGE);
        assert!(view.feedback.unwrap().contains("Removed"));
        assert_eq!(view.total, "$0.00");
        assert_eq!(view.empty_message.as_deref(), Some("Your cart is empty."));
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut first = CartController::with_demo_catalog();
        let second = CartController::with_demo_catalog();

        first.add_product(APPLE).unwrap();

        assert_eq!(first.view().total, "$1.00");
        assert_eq!(second.view().total, "$0.00");
    }
}

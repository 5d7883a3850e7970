//! # Session State
//!
//! Thread-safe wrapper for hosting a controller in a concurrent runtime.
//!
//! ## Thread Safety
//! The controller itself is single-threaded by design: each action is
//! processed synchronously to completion before the next is accepted. When
//! a host runtime can dispatch events from multiple threads, all cart
//! mutations must still be serialized behind a single mutual-exclusion
//! boundary per session, because the same cart instance must never be read
//! mid-mutation. `SessionState` is that boundary.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    SessionState                                         │
//! │                                                                         │
//! │  Host event thread A ──┐                                                │
//! │  Host event thread B ──┼──► Mutex ──► CartController (one at a time)   │
//! │  Host event thread C ──┘                                                │
//! │                                                                         │
//! │  • Arc: shared ownership across threads                                 │
//! │  • Mutex: exclusive access per action                                   │
//! │                                                                         │
//! │  WHY NOT RwLock? Nearly every action mutates, and actions are quick.   │
//! │  A RwLock would add complexity with minimal benefit.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use minicart_core::Catalog;

use crate::controller::CartController;

/// Shareable, lockable session handle.
#[derive(Debug, Clone)]
pub struct SessionState {
    controller: Arc<Mutex<CartController>>,
}

impl SessionState {
    /// Creates a session over the given catalog, starting empty.
    pub fn new(catalog: Catalog) -> Self {
        SessionState {
            controller: Arc::new(Mutex::new(CartController::new(catalog))),
        }
    }

    /// Creates a session over the demo storefront catalog.
    pub fn with_demo_catalog() -> Self {
        SessionState::new(Catalog::demo())
    }

    /// Executes a function with read access to the controller.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let view = session.with_controller(|c| c.view());
    /// ```
    pub fn with_controller<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CartController) -> R,
    {
        let controller = self.controller.lock().expect("Session mutex poisoned");
        f(&controller)
    }

    /// Executes a function with write access to the controller.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let view = session.with_controller_mut(|c| c.remove_product(id));
    /// ```
    pub fn with_controller_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CartController) -> R,
    {
        let mut controller = self.controller.lock().expect("Session mutex poisoned");
        f(&mut controller)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::with_demo_catalog()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use minicart_core::ProductId;

    #[test]
    fn test_actions_through_the_lock() {
        let session = SessionState::with_demo_catalog();

        let view = session.with_controller_mut(|c| c.add_product(ProductId::new(1)).unwrap());
        assert_eq!(view.total, "$1.00");

        let view = session.with_controller(|c| c.view());
        assert_eq!(view.total, "$1.00");
    }

    #[test]
    fn test_clones_share_one_cart() {
        let session = SessionState::with_demo_catalog();
        let handle = session.clone();

        handle.with_controller_mut(|c| c.add_product(ProductId::new(2)).unwrap());

        assert_eq!(session.with_controller(|c| c.view()).total, "$0.50");
    }

    #[test]
    fn test_serialized_mutation_across_threads() {
        let session = SessionState::with_demo_catalog();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let session = session.clone();
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        session.with_controller_mut(|c| {
                            c.add_product(ProductId::new(1)).unwrap();
                        });
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        // 4 threads × 25 adds of $1.00, exactly once per call
        assert_eq!(session.with_controller(|c| c.view()).total, "$100.00");
    }
}

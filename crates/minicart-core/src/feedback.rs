//! # Feedback Module
//!
//! Transient, human-readable feedback for the most recent cart action.
//!
//! Feedback is overwritten, never queued: only the outcome of the latest
//! mutation is observable. It lives in memory for the session and is never
//! persisted.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Product;

// =============================================================================
// Feedback
// =============================================================================

/// What kind of action the current feedback describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
    /// A product was added to the cart.
    Added,
    /// One occurrence of a product was removed from the cart.
    Removed,
    /// An add was rejected because the product is unavailable.
    Blocked,
    /// No action has happened yet this session.
    None,
}

/// The current feedback message.
///
/// Hard contract: `Added`/`Removed` texts contain the words "Added" and
/// "Removed" respectively. Including the product name is for usability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub text: String,
}

impl Feedback {
    /// The empty feedback a fresh session starts with.
    pub fn none() -> Self {
        Feedback {
            kind: FeedbackKind::None,
            text: String::new(),
        }
    }
}

// =============================================================================
// Feedback Notifier
// =============================================================================

/// Records the outcome of the last cart mutation.
///
/// Each notification replaces the previous feedback entirely.
#[derive(Debug, Clone)]
pub struct FeedbackNotifier {
    current: Feedback,
}

impl FeedbackNotifier {
    /// Creates a notifier with no feedback yet.
    pub fn new() -> Self {
        FeedbackNotifier {
            current: Feedback::none(),
        }
    }

    /// A product was added to the cart.
    pub fn on_added(&mut self, product: &Product) {
        self.current = Feedback {
            kind: FeedbackKind::Added,
            text: format!("Added {} to cart.", product.name),
        };
    }

    /// One occurrence of a product was removed. Takes the frozen line name
    /// so removal feedback works even without a catalog lookup.
    pub fn on_removed(&mut self, name: &str) {
        self.current = Feedback {
            kind: FeedbackKind::Removed,
            text: format!("Removed {} from cart.", name),
        };
    }

    /// An add was blocked by the availability flag. The cart and total are
    /// untouched; only this feedback changes.
    pub fn on_blocked(&mut self, product: &Product) {
        self.current = Feedback {
            kind: FeedbackKind::Blocked,
            text: format!("{} is currently unavailable.", product.name),
        };
    }

    /// The most recent feedback.
    #[inline]
    pub fn current(&self) -> &Feedback {
        &self.current
    }
}

impl Default for FeedbackNotifier {
    fn default() -> Self {
        FeedbackNotifier::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

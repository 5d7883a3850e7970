//! # View Snapshot
//!
//! The read model the renderer consumes after every action.
//!
//! ## Projection Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       CartView Projection                               │
//! │                                                                         │
//! │  Cart + Catalog + Feedback ──► CartView (pure function, recomputed     │
//! │                                 on demand, never independently mutated)│
//! │                                                                         │
//! │  empty_message  = "Your cart is empty."  iff cart.is_empty()           │
//! │  lines          = [(name, unit price, qty, line total)] in cart order  │
//! │  total          = "$D.CC"  (two fraction digits, always)               │
//! │  feedback       = text of the most recent action, if any               │
//! │  disabled       = product id → true iff !available                     │
//! │                                                                         │
//! │  DETERMINISM: the same controller state always serializes to the same  │
//! │  bytes. Two clicks on a disabled product produce identical snapshots.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use std::collections::BTreeMap;
use ts_rs::TS;

use minicart_core::{Cart, Catalog, Feedback, FeedbackKind, ProductId, EMPTY_CART_MESSAGE};

// =============================================================================
// Line View
// =============================================================================

/// One displayed cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineView {
    pub product_id: ProductId,
    pub name: String,
    /// Unit price formatted "$D.CC".
    pub unit_price: String,
    pub quantity: i64,
    /// price × quantity, formatted "$D.CC".
    pub line_total: String,
}

// =============================================================================
// Cart View
// =============================================================================

/// Read-only snapshot of the whole session state, for rendering.
///
/// The renderer turns this into markup: `disabled` wires button `disabled`
/// attributes, `empty_message` gates the empty-cart text, `total` and
/// `lines` are shown verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    /// Present iff the cart is empty. Always the exact storefront wording.
    pub empty_message: Option<String>,

    /// Cart lines in first-insertion order.
    pub lines: Vec<LineView>,

    /// Grand total, formatted "$D.CC". "$0.00" for an empty cart.
    pub total: String,

    /// Text of the most recent action's feedback, if any action happened.
    pub feedback: Option<String>,

    /// For each catalog product: should its add control be disabled?
    /// BTreeMap keeps key order stable so serialization is deterministic.
    pub disabled: BTreeMap<ProductId, bool>,
}

impl CartView {
    /// Projects the current state into a snapshot.
    ///
    /// Pure: reads everything fresh, caches nothing, mutates nothing.
    pub fn project(catalog: &Catalog, cart: &Cart, feedback: &Feedback) -> Self {
        let lines = cart
            .lines()
            .iter()
            .map(|line| LineView {
                product_id: line.product_id,
                name: line.name.clone(),
                unit_price: line.unit_price().to_string(),
                quantity: line.quantity,
                line_total: line.line_total().to_string(),
            })
            .collect();

        let disabled = catalog
            .products()
            .iter()
            .map(|p| (p.id, !p.available))
            .collect();

        let feedback_text = match feedback.kind {
            FeedbackKind::None => None,
            _ => Some(feedback.text.clone()),
        };

        CartView {
            empty_message: cart.is_empty().then(|| EMPTY_CART_MESSAGE.to_string()),
            lines,
            total: cart.total().to_string(),
            feedback: feedback_text,
            disabled,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! End-to-end session behavior through the controller boundary.
//!
//! These tests drive the controller exactly the way a renderer would:
//! clicks become `add_product`/`remove_product` calls, and every assertion
//! reads only the returned `CartView` snapshot.

use minicart_core::ProductId;
use minicart_session::{CartController, ErrorCode};

const APPLE: ProductId = ProductId::new(1); // $1.00
const BANANA: ProductId = ProductId::new(2); // $0.50
const ORANGE: ProductId = ProductId::new(3); // $0.75
const GRAPES: ProductId = ProductId::new(4); // unavailable

fn fresh_session() -> CartController {
    CartController::with_demo_catalog()
}

#[test]
fn empty_cart_shows_empty_message() {
    let controller = fresh_session();
    let view = controller.view();

    assert_eq!(view.empty_message.as_deref(), Some("Your cart is empty."));
    assert_eq!(view.total, "$0.00");
    assert!(view.lines.is_empty());
}

#[test]
fn add_to_cart_updates_total() {
    let mut controller = fresh_session();

    // Click the first product's add button twice
    controller.add_product(APPLE).unwrap();
    let view = controller.add_product(APPLE).unwrap();

    assert_eq!(view.total, "$2.00"); // Apple x2
}

#[test]
fn remove_from_cart_removes_item_and_updates_total() {
    let mut controller = fresh_session();

    controller.add_product(APPLE).unwrap();
    controller.add_product(BANANA).unwrap();

    let view = controller.remove_product(APPLE);

    assert_eq!(view.empty_message, None); // cart not empty
    assert_eq!(view.total, "$0.50");
}

#[test]
fn rapid_double_click_adds_exactly_twice() {
    let mut controller = fresh_session();

    // No debouncing, no coalescing: two clicks are two adds
    controller.add_product(APPLE).unwrap();
    let view = controller.add_product(APPLE).unwrap();

    assert_eq!(view.lines.len(), 1);
    assert_eq!(view.lines[0].quantity, 2);
    assert_eq!(view.total, "$2.00");
}

#[test]
fn reload_starts_empty_by_design() {
    // First session: add an item so the cart is NOT empty
    let mut controller = fresh_session();
    controller.add_product(APPLE).unwrap();
    assert_eq!(controller.view().empty_message, None);

    // Simulate a browser reload: a fresh session, no persistence
    let reloaded = fresh_session();
    assert_eq!(
        reloaded.view().empty_message.as_deref(),
        Some("Your cart is empty.")
    );
}

#[test]
fn duplicate_adds_scale_total_correctly() {
    let mut controller = fresh_session();

    controller.add_product(APPLE).unwrap();
    controller.add_product(APPLE).unwrap();
    let view = controller.add_product(APPLE).unwrap();

    assert_eq!(view.total, "$3.00");
}

#[test]
fn remove_one_instance_when_duplicates_exist() {
    let mut controller = fresh_session();

    controller.add_product(APPLE).unwrap();
    controller.add_product(APPLE).unwrap();

    let view = controller.remove_product(APPLE);

    // One Apple remains; the line survives
    assert_eq!(view.lines.len(), 1);
    assert_eq!(view.lines[0].quantity, 1);
    assert_eq!(view.total, "$1.00");
}

#[test]
fn mixed_prices_sum_is_exact() {
    let mut controller = fresh_session();

    controller.add_product(APPLE).unwrap(); // $1.00
    controller.add_product(BANANA).unwrap(); // $0.50
    let view = controller.add_product(ORANGE).unwrap(); // $0.75

    assert_eq!(view.total, "$2.25");
}

#[test]
fn price_formatting_is_two_decimals() {
    let mut controller = fresh_session();

    let view = controller.add_product(BANANA).unwrap();

    assert_eq!(view.total, "$0.50");
    assert_eq!(view.lines[0].unit_price, "$0.50");
}

#[test]
fn removing_last_item_shows_empty_state() {
    let mut controller = fresh_session();

    controller.add_product(APPLE).unwrap();
    let view = controller.remove_product(APPLE);

    assert_eq!(view.empty_message.as_deref(), Some("Your cart is empty."));
    assert!(view.lines.is_empty());
}

#[test]
fn catalog_renders_products_with_prices_and_add_controls() {
    let controller = fresh_session();
    let catalog = controller.catalog();

    let names: Vec<&str> = catalog.products().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Apple", "Banana", "Orange", "Grapes"]);

    let prices: Vec<String> = catalog
        .products()
        .iter()
        .map(|p| p.price().to_string())
        .collect();
    assert_eq!(prices, vec!["$1.00", "$0.50", "$0.75", "$2.00"]);

    // Every catalog product has an entry in the disabled map
    let view = controller.view();
    assert_eq!(view.disabled.len(), catalog.len());
}

#[test]
fn burst_adds_100x_first_product_total_is_accurate() {
    let mut controller = fresh_session();

    for _ in 0..100 {
        controller.add_product(APPLE).unwrap();
    }

    let view = controller.view();
    assert_eq!(view.total, "$100.00");
    assert_eq!(view.lines[0].quantity, 100);
}

#[test]
fn alternating_add_remove_never_produces_negative_total() {
    let mut controller = fresh_session();

    for _ in 0..5 {
        controller.add_product(APPLE).unwrap();
    }
    for _ in 0..5 {
        let view = controller.remove_product(APPLE);
        assert!(!view.total.starts_with("-$"));
    }

    // Empty state restored
    let view = controller.view();
    assert_eq!(view.empty_message.as_deref(), Some("Your cart is empty."));
    assert_eq!(view.total, "$0.00");
}

#[test]
fn add_then_remove_shows_feedback_message() {
    let mut controller = fresh_session();

    let view = controller.add_product(APPLE).unwrap();
    assert!(view.feedback.unwrap().contains("Added"));

    let view = controller.remove_product(APPLE);
    let feedback = view.feedback.unwrap();
    // Overwritten, not appended
    assert!(feedback.contains("Removed"));
    assert!(!feedback.contains("Added"));
}

#[test]
fn unavailable_product_disables_add_control() {
    let mut controller = fresh_session();

    let view = controller.view();
    assert_eq!(view.disabled[&GRAPES], true);
    assert_eq!(view.disabled[&APPLE], false);

    // Double-safety: clicking twice produces byte-identical exposed state
    let first = controller.add_product(GRAPES).unwrap();
    let second = controller.add_product(GRAPES).unwrap();

    let first_json = serde_json::to_string(&first).unwrap();
    let second_json = serde_json::to_string(&second).unwrap();
    assert_eq!(first_json, second_json);

    // And neither click changed the cart
    assert_eq!(first.total, "$0.00");
    assert!(first.lines.is_empty());
}

#[test]
fn unknown_product_id_fails_the_contract() {
    let mut controller = fresh_session();

    let err = controller.add_product(ProductId::new(999)).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidProductId);

    // The failed action left no trace
    assert_eq!(controller.view().total, "$0.00");
}

#[test]
fn remove_of_absent_product_is_a_safe_noop() {
    let mut controller = fresh_session();
    controller.add_product(ORANGE).unwrap();

    let before = serde_json::to_string(&controller.view()).unwrap();
    let view = controller.remove_product(BANANA);
    let after = serde_json::to_string(&view).unwrap();

    assert_eq!(before, after);
}

//! # MiniCart Session Library
//!
//! The orchestration layer a host UI embeds: one `CartController` per
//! session, plus the serializable view snapshot it projects and a
//! thread-safe wrapper for concurrent hosts.
//!
//! ## Module Organization
//! ```text
//! minicart_session/
//! ├── lib.rs          ◄─── You are here (exports & tracing setup)
//! ├── controller.rs   ◄─── CartController: add/remove actions
//! ├── view.rs         ◄─── CartView snapshot projection
//! ├── state.rs        ◄─── SessionState: Arc<Mutex<CartController>>
//! └── error.rs        ◄─── ControllerError for the boundary
//! ```
//!
//! ## Embedding
//! The core contract is two plain synchronous operations and a snapshot —
//! callable from any event-dispatch mechanism (callback, message, direct
//! call). No framework-specific callback type leaks into this crate.
//!
//! ```rust
//! use minicart_session::CartController;
//! use minicart_core::ProductId;
//!
//! let mut controller = CartController::with_demo_catalog();
//!
//! let view = controller.add_product(ProductId::new(1)).unwrap();
//! assert_eq!(view.total, "$1.00");
//!
//! let view = controller.remove_product(ProductId::new(1));
//! assert_eq!(view.empty_message.as_deref(), Some("Your cart is empty."));
//! ```

pub mod controller;
pub mod error;
pub mod state;
pub mod view;

pub use controller::CartController;
pub use error::{ControllerError, ErrorCode};
pub use state::SessionState;
pub use view::{CartView, LineView};

use tracing_subscriber::EnvFilter;

/// Initializes tracing for an embedding host.
///
/// Default level is INFO; override with `RUST_LOG` (e.g.
/// `RUST_LOG=minicart_session=debug` to see every controller action).
///
/// Safe to call once per process; calling it again is a no-op because a
/// global subscriber is already installed.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}

//! # carta-page: Runtime State for the Carta Public Menu
//!
//! The stateful layer behind the public catalog page. Everything pure lives
//! in `carta-core`; this crate owns the three things that change or touch
//! the outside world:
//!
//! ## Page Runtime
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          CatalogPage                                    │
//! │                                                                         │
//! │   catalog source ───snapshot───┐                                        │
//! │                                ▼                                        │
//! │   ┌─────────────┐   ┌────────────────────┐   ┌─────────────────────┐   │
//! │   │ ComboLoader │──►│  carta_core::compose│◄──│ CategorySelection   │   │
//! │   │ one-shot    │   │  (pure)            │   │ select / show_all   │   │
//! │   │ fetch       │   └─────────┬──────────┘   └─────────────────────┘   │
//! │   └─────────────┘             │                                         │
//! │                               ▼                                         │
//! │                         CatalogView ──────► frontend                    │
//! │                                                                         │
//! │   combo tap ──► CartBridge ──► CartSink.add_combo_to_cart               │
//! │                            └─► Notifier.notify(success)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`api`] - the `ComboApi` network seam and endpoint path
//! - [`selection`] - the active category filter
//! - [`combos`] - one-shot combo fetch with explicit soft-fail policy
//! - [`bridge`] - cart and toast collaborator seams
//! - [`page`] - the `CatalogPage` facade tying it all together
//! - [`error`] - fetch error taxonomy

pub mod api;
pub mod bridge;
pub mod combos;
pub mod error;
pub mod page;
pub mod selection;

pub use api::{ComboApi, COMBOS_PATH};
pub use bridge::{CartBridge, CartSink, NoOpCart, NoOpNotifier, Notifier, Severity};
pub use combos::{ComboLoader, ComboLoaderHandle, ComboLoadStatus, ComboStore, LoadErrorPolicy};
pub use error::{FetchError, FetchResult};
pub use page::CatalogPage;
pub use selection::CategorySelection;

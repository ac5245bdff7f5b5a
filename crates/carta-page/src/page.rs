//! # Catalog Page Facade
//!
//! `CatalogPage` is what the presentation layer talks to: one struct that
//! owns the selection, the combo store, the loader handle and the cart
//! bridge, and exposes the composed view plus the two user operations.
//!
//! ## Page Surface
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         CatalogPage                                     │
//! │                                                                         │
//! │  INBOUND (owned by collaborators, injected)                            │
//! │  ────────────────────────────────────────                              │
//! │  • CatalogSnapshot      - pushed per change, passed to view()          │
//! │  • ComboApi             - spawned against exactly once at open()        │
//! │  • CartSink / Notifier  - invoked on combo activation                   │
//! │                                                                         │
//! │  OUTBOUND (exposed to the frontend)                                    │
//! │  ──────────────────────────────────                                    │
//! │  • view(snapshot)       - the composed CatalogView                     │
//! │  • select(category_id)  - narrow to one category, hide combos          │
//! │  • show_all()           - back to everything                           │
//! │  • activate_combo(c)    - cart mutation + success toast                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Dropping the page aborts an in-flight combo fetch; a response racing the
//! teardown is discarded silently.

use std::sync::Arc;

use tracing::info;

use carta_core::{compose, CatalogSnapshot, CatalogView, Combo};

use crate::api::ComboApi;
use crate::bridge::{CartBridge, CartSink, Notifier};
use crate::combos::{ComboLoader, ComboLoaderHandle, ComboStore, LoadErrorPolicy};
use crate::selection::CategorySelection;

/// The public catalog page runtime.
pub struct CatalogPage {
    selection: CategorySelection,
    combos: ComboStore,
    bridge: CartBridge,
    loader: ComboLoaderHandle,
}

impl CatalogPage {
    /// Opens the page: wires the collaborators and fires the one-shot combo
    /// fetch. Combos may land before, after, or never relative to catalog
    /// readiness; `view` is correct throughout.
    pub fn open(
        api: Arc<dyn ComboApi>,
        cart: Arc<dyn CartSink>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        info!("catalog page opened");

        let combos = ComboStore::new();
        let loader = ComboLoader::spawn(api, &combos, LoadErrorPolicy::Ignore);

        CatalogPage {
            selection: CategorySelection::new(),
            combos,
            bridge: CartBridge::new(cart, notifier),
            loader,
        }
    }

    /// Composes the render-ready view from the given catalog snapshot and
    /// the page's current selection and combos.
    pub fn view(&self, snapshot: &CatalogSnapshot) -> CatalogView {
        let selection = self.selection.current();
        compose(snapshot, &self.combos.combos(), selection.as_deref())
    }

    /// Narrows the view to one category. Unvalidated: an unknown id renders
    /// zero sections. Selection survives catalog snapshot changes.
    pub fn select(&self, category_id: impl Into<String>) {
        self.selection.select(category_id);
    }

    /// Clears the category filter, restoring combos and all sections.
    pub fn show_all(&self) {
        self.selection.show_all();
    }

    /// Adds the combo to the cart and announces it. See
    /// [`CartBridge::activate_combo`].
    pub fn activate_combo(&self, combo: &Combo) {
        self.bridge.activate_combo(combo);
    }

    /// Current combo load status, for diagnostics.
    pub fn combo_status(&self) -> crate::combos::ComboLoadStatus {
        self.combos.status()
    }

    /// Waits for the one-shot combo fetch to resolve. Rendering never needs
    /// this - `view` works with whatever has arrived - but deterministic
    /// tests and the preview binary do.
    pub async fn combos_loaded(&mut self) {
        self.loader.finished().await;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

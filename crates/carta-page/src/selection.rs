//! # Category Selection State
//!
//! Holds the active category filter for the page.
//!
//! ## Selection Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Category Selection                                  │
//! │                                                                         │
//! │   page opens ────────────► None  (show everything, combos included)    │
//! │                              │                                          │
//! │   tap category tab ──► select("drinks") ──► Some("drinks")             │
//! │                              │                                          │
//! │   tap another tab ───► select("burgers") ─► Some("burgers")            │
//! │                              │                                          │
//! │   tap "all" tab ─────► show_all() ────────► None                       │
//! │                                                                         │
//! │   NOT a transition: catalog snapshot changes never reset selection.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No validation is performed on selected ids. An unknown id yields zero
//! matching sections downstream, which the composer suppresses.

use std::sync::Mutex;

use tracing::debug;

/// The active category filter. `None` means "show everything, including the
/// combos section".
///
/// ## Thread Safety
/// Wrapped in a `Mutex` because the page facade hands out shared references
/// while the UI thread mutates the selection. Operations hold the lock only
/// long enough to swap the value.
#[derive(Debug, Default)]
pub struct CategorySelection {
    current: Mutex<Option<String>>,
}

impl CategorySelection {
    /// Creates a selection in the initial "show everything" state.
    pub fn new() -> Self {
        CategorySelection {
            current: Mutex::new(None),
        }
    }

    /// Replaces the selection unconditionally.
    ///
    /// Selecting the already-active category re-assigns the same value;
    /// the composed output is identical, so the operation is idempotent.
    pub fn select(&self, category_id: impl Into<String>) {
        let category_id = category_id.into();
        debug!(category_id = %category_id, "category selected");
        *self.lock() = Some(category_id);
    }

    /// Clears the filter back to "show everything".
    pub fn show_all(&self) {
        debug!("category filter cleared");
        *self.lock() = None;
    }

    /// Returns the current selection.
    pub fn current(&self) -> Option<String> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.current.lock().expect("selection mutex poisoned")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

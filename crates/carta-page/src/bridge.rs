//! # Cart Bridge
//!
//! Translates "tap the add-to-cart button on a combo" into its two side
//! effects: the cart mutation and the success toast.
//!
//! ## Activation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Combo Activation                                  │
//! │                                                                         │
//! │   Idle ──► Activating ──► Idle      (instantaneous - the cart          │
//! │                                      collaborator is synchronous,       │
//! │                                      so there is no pending state)      │
//! │                                                                         │
//! │   activate_combo(combo)                                                 │
//! │        │                                                                │
//! │        ├── (a) CartSink.add_combo_to_cart(combo)                        │
//! │        │                                                                │
//! │        └── (b) Notifier.notify("<name> agregado al carrito", Success)   │
//! │                                                                         │
//! │   (a) then (b), always, in order. Not transactional: the cart           │
//! │   collaborator is infallible by contract, so there is no rollback       │
//! │   and no suppression path for the toast.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both sinks are append-only from this layer's point of view: nothing here
//! ever reads cart contents or the toast queue back. Removing or adjusting
//! a combo already added belongs entirely to the cart collaborator.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use carta_core::Combo;

// =============================================================================
// Collaborator Seams
// =============================================================================

/// The external cart state, reduced to the one mutation this layer makes.
///
/// Quantity accumulation, line merging and every other cart invariant are
/// the collaborator's business; this layer assumes the call succeeds.
pub trait CartSink: Send + Sync {
    /// Adds the combo to the cart.
    fn add_combo_to_cart(&self, combo: &Combo);
}

/// Toast severity levels understood by the notification collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// The external toast queue. Fire-and-forget.
pub trait Notifier: Send + Sync {
    /// Enqueues a toast.
    fn notify(&self, message: &str, severity: Severity);
}

/// No-op cart for tests and the preview binary.
pub struct NoOpCart;

impl CartSink for NoOpCart {
    fn add_combo_to_cart(&self, _combo: &Combo) {}
}

/// No-op notifier for tests and the preview binary.
pub struct NoOpNotifier;

impl Notifier for NoOpNotifier {
    fn notify(&self, _message: &str, _severity: Severity) {}
}

// =============================================================================
// Cart Bridge
// =============================================================================

/// Stateless bridge between combo taps and the injected sinks.
///
/// ## Why Injected Traits?
/// The original page reached for ambient cart/toast contexts. Explicit
/// interfaces keep the coupling visible and make both effects observable
/// in tests with recording fakes.
pub struct CartBridge {
    cart: Arc<dyn CartSink>,
    notifier: Arc<dyn Notifier>,
}

impl CartBridge {
    /// Creates a bridge over the given collaborators.
    pub fn new(cart: Arc<dyn CartSink>, notifier: Arc<dyn Notifier>) -> Self {
        CartBridge { cart, notifier }
    }

    /// Adds `combo` to the cart, then announces it.
    ///
    /// Two sequential, non-cancelable effects with no rollback. The toast
    /// message carries the combo's display name.
    pub fn activate_combo(&self, combo: &Combo) {
        debug!(combo_id = %combo.id, combo_name = %combo.name, "combo activated");

        self.cart.add_combo_to_cart(combo);
        self.notifier
            .notify(&format!("{} agregado al carrito", combo.name), Severity::Success);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use carta_core::ComboItem;

    /// Records every effect, in order, across both sinks.
    #[derive(Default)]
    struct EffectLog {
        entries: Mutex<Vec<String>>,
    }

    impl EffectLog {
        fn entries(&self) -> Vec<String> {
            self.entries.lock().unwrap().clone()
        }

        fn push(&self, entry: String) {
            self.entries.lock().unwrap().push(entry);
        }
    }

    struct RecordingCart(Arc<EffectLog>);

    impl CartSink for RecordingCart {
        fn add_combo_to_cart(&self, combo: &Combo) {
            self.0.push(format!("cart:{}", combo.id));
        }
    }

    struct RecordingNotifier(Arc<EffectLog>);

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str, severity: Severity) {
            self.0.push(format!("toast:{:?}:{}", severity, message));
        }
    }

    fn combo() -> Combo {
        Combo {
            id: "combo-1".to_string(),
            name: "Combo Familiar".to_string(),
            price_cents: 1_500_000,
            items: vec![ComboItem {
                qty: 2,
                product_name: "Hamburguesa Doble".to_string(),
            }],
        }
    }

    fn bridge_over(log: &Arc<EffectLog>) -> CartBridge {
        CartBridge::new(
            Arc::new(RecordingCart(log.clone())),
            Arc::new(RecordingNotifier(log.clone())),
        )
    }

    #[test]
    fn test_activation_produces_exactly_one_of_each_effect() {
        let log = Arc::new(EffectLog::default());
        let bridge = bridge_over(&log);

        bridge.activate_combo(&combo());

        let entries = log.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], "cart:combo-1");
        assert_eq!(
            entries[1],
            "toast:Success:Combo Familiar agregado al carrito"
        );
    }

    #[test]
    fn test_cart_mutation_precedes_toast() {
        let log = Arc::new(EffectLog::default());
        let bridge = bridge_over(&log);

        bridge.activate_combo(&combo());

        let entries = log.entries();
        assert!(entries[0].starts_with("cart:"));
        assert!(entries[1].starts_with("toast:"));
    }

    #[test]
    fn test_each_activation_is_independent() {
        let log = Arc::new(EffectLog::default());
        let bridge = bridge_over(&log);

        // Tapping the same combo twice delegates accumulation to the cart
        // collaborator - the bridge just forwards both taps.
        bridge.activate_combo(&combo());
        bridge.activate_combo(&combo());

        let carts = log
            .entries()
            .iter()
            .filter(|e| e.starts_with("cart:"))
            .count();
        assert_eq!(carts, 2);
    }

    #[test]
    fn test_toast_contains_combo_name() {
        let log = Arc::new(EffectLog::default());
        let bridge = bridge_over(&log);

        let mut c = combo();
        c.name = "Mega Promo".to_string();
        bridge.activate_combo(&c);

        assert!(log.entries()[1].contains("Mega Promo"));
    }
}

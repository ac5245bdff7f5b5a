//! # Menu Preview
//!
//! Composes the public menu from fixture data and prints each view state,
//! for eyeballing the composition rules without a frontend.
//!
//! ## Usage
//! ```bash
//! cargo run -p carta-page --bin preview
//!
//! # With debug logs from the loader and bridge
//! RUST_LOG=carta=debug cargo run -p carta-page --bin preview
//! ```
//!
//! Walks through the page lifecycle:
//! 1. Catalog still loading (placeholder)
//! 2. Catalog ready, combos landed (full menu)
//! 3. Category selected (filtered, combos hidden)
//! 4. Combo activated (cart call + toast printed to stdout)

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use tracing_subscriber::EnvFilter;

use carta_core::{
    BusinessInfo, CatalogSnapshot, Category, Combo, ComboItem, Contact, Product,
};
use carta_page::{CartSink, CatalogPage, ComboApi, FetchResult, Notifier, Severity};

/// Serves the fixture combos the way the real endpoint would.
struct FixtureApi;

#[async_trait]
impl ComboApi for FixtureApi {
    async fn fetch_combos(&self, _path: &str) -> FetchResult<Vec<Combo>> {
        Ok(vec![Combo {
            id: "combo-familiar".to_string(),
            name: "Combo Familiar".to_string(),
            price_cents: 1_850_000,
            items: vec![
                ComboItem {
                    qty: 2,
                    product_name: "Hamburguesa Doble".to_string(),
                },
                ComboItem {
                    qty: 1,
                    product_name: "Papas Grandes".to_string(),
                },
                ComboItem {
                    qty: 2,
                    product_name: "Gaseosa 500ml".to_string(),
                },
            ],
        }])
    }
}

/// Prints cart mutations instead of forwarding them anywhere.
struct StdoutCart;

impl CartSink for StdoutCart {
    fn add_combo_to_cart(&self, combo: &Combo) {
        println!("  [cart] + {} (${})", combo.name, combo.price_cents / 100);
    }
}

/// Prints toasts instead of queueing them.
struct StdoutNotifier;

impl Notifier for StdoutNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        println!("  [toast:{:?}] {}", severity, message);
    }
}

fn fixture_snapshot(is_loading: bool) -> CatalogSnapshot {
    let burgers = |id: &str, name: &str, cents: i64| Product {
        id: id.to_string(),
        name: name.to_string(),
        description: "Todos los combos incluyen papas.".to_string(),
        price_cents: cents,
        category_id: "burgers".to_string(),
        has_image: false,
    };

    CatalogSnapshot {
        products: vec![
            burgers("p-1", "Hamburguesa Doble", 850_000),
            burgers("p-2", "Hamburguesa Veggie", 790_000),
            Product {
                id: "p-3".to_string(),
                name: "Gaseosa 500ml".to_string(),
                description: "Linea Coca-Cola".to_string(),
                price_cents: 180_000,
                category_id: "drinks".to_string(),
                has_image: false,
            },
        ],
        categories: vec![
            Category {
                id: "burgers".to_string(),
                name: "Hamburguesas".to_string(),
            },
            Category {
                id: "drinks".to_string(),
                name: "Bebidas".to_string(),
            },
            // No products yet: composed out of the view entirely.
            Category {
                id: "desserts".to_string(),
                name: "Postres".to_string(),
            },
        ],
        business_info: Some(BusinessInfo {
            name: Some("La Esquina".to_string()),
            contact: Contact {
                phone: Some("+54 9 11-2345-6789".to_string()),
            },
        }),
        is_loading,
    }
}

fn print_view(label: &str, view: &carta_core::CatalogView) {
    println!("── {} ──", label);
    println!("{}", serde_json::to_string_pretty(view).expect("view serializes"));
    println!();
}

#[tokio::main]
async fn main() {
    init_tracing();

    println!("🍔 Carta Menu Preview");
    println!("=====================");
    println!();

    let mut page = CatalogPage::open(
        Arc::new(FixtureApi),
        Arc::new(StdoutCart),
        Arc::new(StdoutNotifier),
    );

    // 1. Catalog source still loading.
    print_view("catalog loading", &page.view(&fixture_snapshot(true)));

    // 2. Both sources ready.
    page.combos_loaded().await;
    info!(status = ?page.combo_status(), "combo fetch resolved");
    let snapshot = fixture_snapshot(false);
    print_view("full menu", &page.view(&snapshot));

    // 3. Category filter active: combos hidden, one section.
    page.select("drinks");
    print_view("filtered to drinks", &page.view(&snapshot));
    page.show_all();

    // 4. Combo tapped.
    println!("── combo activation ──");
    if let Some(menu) = page.view(&snapshot).menu() {
        if let Some(combo) = menu.combos.first() {
            page.activate_combo(combo);
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=carta=trace` - Show trace for carta crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,carta=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

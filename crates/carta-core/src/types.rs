//! # Domain Types
//!
//! Core domain types for the Carta public menu.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Category     │   │     Product     │   │      Combo      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  name           │   │  category_id    │   │  name           │       │
//! │  │                 │   │  price_cents    │   │  price_cents    │       │
//! │  │                 │   │  has_image      │   │  items (qty×name)│      │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────────────────────────────┐     │
//! │  │  BusinessInfo   │   │           CatalogSnapshot               │     │
//! │  │  ─────────────  │   │  ─────────────────────────────────────  │     │
//! │  │  name?          │   │  products, categories,                  │     │
//! │  │  contact.phone? │   │  business_info?, is_loading             │     │
//! │  └─────────────────┘   └─────────────────────────────────────────┘     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership Rules
//! - Category/Product/BusinessInfo are owned by the external catalog source
//!   and arrive here as an immutable snapshot per render.
//! - Combos are owned by the page runtime: created empty, populated once by
//!   a one-shot fetch, never refreshed.
//! - Upstream ordering is canonical: this crate never reorders categories,
//!   products, or combo items.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Category
// =============================================================================

/// A named grouping of products, used purely for display filtering.
///
/// The catalog source defines the category order; it is preserved verbatim
/// through composition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Category {
    /// Unique identifier, opaque to this crate.
    pub id: String,

    /// Display name shown as the category tab and section heading.
    pub name: String,
}

// =============================================================================
// Product
// =============================================================================

/// A product available on the public menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier, opaque to this crate.
    pub id: String,

    /// Display name shown on the product card.
    pub name: String,

    /// Short description shown under the name.
    pub description: String,

    /// Price in cents (smallest currency unit). Always >= 0 upstream.
    pub price_cents: i64,

    /// The category this product belongs to. A product whose category id
    /// matches no known category is silently dropped from display.
    pub category_id: String,

    /// Whether an uploaded image exists for this product. Image URL
    /// construction belongs to the frontend, not this crate.
    pub has_image: bool,
}

// =============================================================================
// Combo
// =============================================================================

/// One line of a combo bundle: a quantity of a product, referenced by
/// display name only.
///
/// There is no referential integrity between `product_name` and the product
/// catalog. A name that matches nothing is tolerated and rendered as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ComboItem {
    /// Quantity of the named product. Always > 0 upstream.
    pub qty: i64,

    /// Display name of the bundled product.
    pub product_name: String,
}

/// A fixed bundle of named product quantities sold at a single bundled
/// price, managed independently of the main product catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Combo {
    /// Unique identifier, opaque to this crate.
    pub id: String,

    /// Display name shown on the combo card and in the cart toast.
    pub name: String,

    /// Bundled price in cents. Always >= 0 upstream.
    pub price_cents: i64,

    /// Bundle contents. Server order is significant and preserved.
    pub items: Vec<ComboItem>,
}

// =============================================================================
// Business Info
// =============================================================================

/// Contact details from the business profile.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Contact {
    /// Raw phone number as configured by the business, in any human format
    /// ("+54 9 11-2345-6789"). Normalized by [`crate::contact`].
    #[serde(default)]
    pub phone: Option<String>,
}

/// The business profile, as far as this layer cares about it.
///
/// The upstream profile carries more fields (address, hours, branding);
/// serde ignores what is not modeled here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BusinessInfo {
    /// Business display name.
    #[serde(default)]
    pub name: Option<String>,

    /// Contact details, source of the derived contact link.
    #[serde(default)]
    pub contact: Contact,
}

// =============================================================================
// Catalog Snapshot
// =============================================================================

/// The immutable catalog state pushed by the external catalog source on
/// every change.
///
/// ## Snapshot Semantics
/// The composer treats one snapshot as one consistent point in time. It
/// never caches a previous snapshot and never mutates this one; a new push
/// simply means a new composition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CatalogSnapshot {
    /// All products, in upstream order.
    pub products: Vec<Product>,

    /// All categories, in upstream order.
    pub categories: Vec<Category>,

    /// Business profile, absent while still loading upstream.
    pub business_info: Option<BusinessInfo>,

    /// Whether the catalog source is still loading. While true, composition
    /// yields only the loading placeholder.
    pub is_loading: bool,
}

impl CatalogSnapshot {
    /// An empty, ready snapshot. Mostly useful in tests and fixtures.
    pub fn empty() -> Self {
        CatalogSnapshot {
            products: Vec::new(),
            categories: Vec::new(),
            business_info: None,
            is_loading: false,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_wire_format_is_camel_case() {
        let product = Product {
            id: "p-1".to_string(),
            name: "Hamburguesa Doble".to_string(),
            description: "Doble carne, cheddar".to_string(),
            price_cents: 850_000,
            category_id: "burgers".to_string(),
            has_image: true,
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["priceCents"], 850_000);
        assert_eq!(json["categoryId"], "burgers");
        assert_eq!(json["hasImage"], true);
    }

    #[test]
    fn test_combo_deserializes_server_payload() {
        let payload = r#"{
            "id": "combo-1",
            "name": "Combo Familiar",
            "priceCents": 1500000,
            "items": [
                { "qty": 2, "productName": "Hamburguesa Doble" },
                { "qty": 1, "productName": "Papas Grandes" }
            ]
        }"#;

        let combo: Combo = serde_json::from_str(payload).unwrap();
        assert_eq!(combo.items.len(), 2);
        assert_eq!(combo.items[0].qty, 2);
        assert_eq!(combo.items[1].product_name, "Papas Grandes");
    }

    #[test]
    fn test_business_info_tolerates_missing_fields() {
        // Upstream profiles carry many fields this layer never reads;
        // a minimal object must still deserialize.
        let info: BusinessInfo = serde_json::from_str("{}").unwrap();
        assert_eq!(info.contact.phone, None);

        let info: BusinessInfo =
            serde_json::from_str(r#"{ "contact": { "phone": "+54 11 2345-6789" } }"#).unwrap();
        assert_eq!(info.contact.phone.as_deref(), Some("+54 11 2345-6789"));
    }
}

//! # Catalog View Composer
//!
//! Merges the three independently loading inputs into one render-ready
//! view model.
//!
//! ## Composition Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Catalog View Composition                            │
//! │                                                                         │
//! │  CatalogSnapshot ─────┐                                                │
//! │  (products,           │                                                 │
//! │   categories,         │      ┌─────────────┐                           │
//! │   business info)      ├─────►│  compose()  │────► CatalogView          │
//! │                       │      └─────────────┘        │                  │
//! │  Combos ──────────────┤                             ├── Loading        │
//! │  (one-shot fetch)     │                             │                  │
//! │                       │                             └── Ready(MenuView)│
//! │  Selection ───────────┘                                  • combos      │
//! │  (None = show all)                                       • sections    │
//! │                                                          • contact link│
//! │                                                                         │
//! │  RULES:                                                                │
//! │  1. is_loading     ──► Loading placeholder, nothing else               │
//! │  2. selection set  ──► combos hidden, exactly that category            │
//! │  3. empty section  ──► omitted entirely (no per-category placeholder)  │
//! │  4. upstream order ──► preserved for categories, products and combos   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why a Pure Function?
//! The original page derived this view inside its render path from ambient
//! reactive state. Making the composer an explicit function of three labeled
//! inputs keeps it deterministic and lets any change-detection scheme drive
//! re-invocation without re-subscription machinery.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::contact::{contact_link, ContactLink};
use crate::types::{CatalogSnapshot, Category, Combo, Product};

// =============================================================================
// View Model
// =============================================================================

/// One category heading plus the products rendered under it.
///
/// Only produced for categories with at least one matching product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CategorySection {
    /// The category being rendered.
    pub category: Category,

    /// Products whose `category_id` equals `category.id`, in snapshot order.
    pub products: Vec<Product>,
}

/// The ready-to-render menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MenuView {
    /// Combos to show. Empty both when no combos have arrived and when a
    /// category filter is active - an active filter always hides combos.
    pub combos: Vec<Combo>,

    /// Ordered category sections. At most one when a filter is active.
    pub sections: Vec<CategorySection>,

    /// Derived contact affordance, absent when the business profile has no
    /// usable phone number.
    pub contact_link: Option<ContactLink>,
}

/// The composed output for one render pass.
///
/// `Loading` is terminal for the pass: while the catalog source reports
/// loading, no sections, combos or contact link exist in the output, by
/// construction rather than by convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "state", content = "menu", rename_all = "camelCase")]
#[ts(export)]
pub enum CatalogView {
    /// The catalog source is still loading; render a placeholder only.
    Loading,

    /// The catalog is ready; render the composed menu.
    Ready(MenuView),
}

impl CatalogView {
    /// Returns the menu if the view is ready.
    pub fn menu(&self) -> Option<&MenuView> {
        match self {
            CatalogView::Loading => None,
            CatalogView::Ready(menu) => Some(menu),
        }
    }

    /// Whether this is the loading placeholder.
    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogView::Loading)
    }
}

// =============================================================================
// Composer
// =============================================================================

/// Composes the render-ready view from the catalog snapshot, the fetched
/// combos and the active category selection.
///
/// ## Inputs
/// * `snapshot` - immutable catalog state pushed by the catalog source
/// * `combos` - combos fetched so far (empty until the one-shot fetch lands)
/// * `selection` - active category filter, `None` meaning "show everything"
///
/// ## Guarantees
/// - Deterministic: the same input tuple always composes the same view.
/// - Order preserving: categories, products within a section, and combos
///   keep their upstream relative order.
/// - Combos and an active filter are mutually exclusive in the output.
///
/// ## Behavior
/// Catalog readiness and combo arrival are independent; this function is
/// correct for combos arriving before, after, or never relative to the
/// catalog. Until the catalog is ready it composes `Loading`; until combos
/// arrive it composes a menu with an empty combo list.
pub fn compose(
    snapshot: &CatalogSnapshot,
    combos: &[Combo],
    selection: Option<&str>,
) -> CatalogView {
    if snapshot.is_loading {
        return CatalogView::Loading;
    }

    // An active category filter always hides the combos section, even when
    // combos would otherwise display.
    let combos = match selection {
        None => combos.to_vec(),
        Some(_) => Vec::new(),
    };

    let sections = snapshot
        .categories
        .iter()
        .filter(|category| selection.map_or(true, |id| category.id == id))
        .filter_map(|category| {
            let products: Vec<Product> = snapshot
                .products
                .iter()
                .filter(|product| product.category_id == category.id)
                .cloned()
                .collect();

            // Categories without products are omitted outright.
            if products.is_empty() {
                None
            } else {
                Some(CategorySection {
                    category: category.clone(),
                    products,
                })
            }
        })
        .collect();

    CatalogView::Ready(MenuView {
        combos,
        sections,
        contact_link: contact_link(snapshot.business_info.as_ref()),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

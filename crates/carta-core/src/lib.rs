//! # carta-core: Pure Composition Logic for the Carta Public Menu
//!
//! This crate is the **heart** of Carta. It merges three independently
//! loading inputs into one render-ready view model, as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Carta Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (TypeScript)                        │   │
//! │  │    Category Tabs ──► Combo Cards ──► Product Grid ──► Cart     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ composed view model                    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    carta-page (runtime)                         │   │
//! │  │    selection state, combo loader, cart bridge                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ carta-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐        ┌───────────┐        ┌───────────┐      │   │
//! │  │   │   types   │        │  compose  │        │  contact  │      │   │
//! │  │   │  Product  │        │ CatalogView│       │ wa.me link│      │   │
//! │  │   │  Combo    │        │ MenuView  │        │ digits    │      │   │
//! │  │   └───────────┘        └───────────┘        └───────────┘      │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO HIDDEN STATE • PURE FUNCTIONS       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Category, Product, Combo, BusinessInfo)
//! - [`compose`] - The catalog view composer (the core algorithm)
//! - [`contact`] - Phone normalization and contact-link derivation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: composition is deterministic - same input tuple,
//!    same composed view
//! 2. **No I/O**: network, file system and clock access are FORBIDDEN here
//! 3. **Integer Money**: all prices are in cents (i64) to avoid float errors
//! 4. **Snapshot In, View Out**: the catalog snapshot is immutable per call;
//!    this crate never mutates what it is given
//!
//! ## Example Usage
//!
//! ```rust
//! use carta_core::{compose, CatalogSnapshot, CatalogView};
//!
//! let snapshot = CatalogSnapshot {
//!     products: vec![],
//!     categories: vec![],
//!     business_info: None,
//!     is_loading: true,
//! };
//!
//! // A loading catalog composes to the loading placeholder, nothing else.
//! assert_eq!(compose(&snapshot, &[], None), CatalogView::Loading);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod compose;
pub mod contact;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use carta_core::Combo` instead of
// `use carta_core::types::Combo`

pub use compose::{compose, CatalogView, CategorySection, MenuView};
pub use contact::{contact_link, normalize_phone, ContactLink};
pub use types::*;

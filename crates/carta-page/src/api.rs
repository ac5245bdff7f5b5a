//! # Combo API Seam
//!
//! The network client is an external collaborator; this module defines the
//! trait it is consumed through.
//!
//! ## Endpoint Contract
//! ```text
//! GET /api/public/combos  ──►  [ { id, name, priceCents, items: [...] }, ... ]
//! ```
//!
//! Fixed, singular path. No pagination, no filtering, no query parameters.
//! Response order is significant: combos render in exactly the order the
//! server returns them.

use async_trait::async_trait;

use carta_core::Combo;

use crate::error::FetchResult;

/// Path of the public combo endpoint.
pub const COMBOS_PATH: &str = "/api/public/combos";

/// The external network client, reduced to the one call this layer makes.
///
/// ## Why a Trait?
/// The page never constructs a network client; it receives one. That keeps
/// transport policy (base URL, auth, timeouts) with its owner and lets tests
/// substitute a recording or failing client.
#[async_trait]
pub trait ComboApi: Send + Sync {
    /// Fetches the combo list from `path`.
    ///
    /// Transport-level timeouts, if any, belong to the implementor; this
    /// layer applies none of its own.
    async fn fetch_combos(&self, path: &str) -> FetchResult<Vec<Combo>>;
}

//! # Fetch Error Types
//!
//! Error taxonomy for the combo fetch.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Combo Fetch Errors                                │
//! │                                                                         │
//! │   network client ──► Transport ──┐                                     │
//! │                                  ├──► LoadErrorPolicy::Ignore          │
//! │   bad payload ─────► Decode ─────┘    (debug log, combos stay empty)   │
//! │                                                                         │
//! │   Nothing here ever reaches the user. A failed combo fetch renders     │
//! │   exactly like "no combos configured".                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Errors the combo fetch can produce.
///
/// All variants are swallowed by the loader's error policy; they exist so
/// the policy is applied to a typed value rather than to an incidental
/// omission.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The network client failed to reach the endpoint (timeouts, DNS,
    /// connection resets - whatever the transport reports).
    #[error("transport error: {0}")]
    Transport(String),

    /// The endpoint answered, but the payload was not a valid combo list.
    #[error("failed to decode combo payload: {0}")]
    Decode(#[from] serde_json::Error),
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Contact Link Derivation
//!
//! Turns the business profile's free-form phone number into the WhatsApp
//! contact affordance shown on the public menu.
//!
//! ## Derivation
//! ```text
//! "+54 9 11-2345-6789"  ──strip non-digits──►  "5491123456789"
//!                                                    │
//!                              empty? ──► no link, affordance omitted
//!                                                    │
//!                                                    ▼
//!                                   https://wa.me/5491123456789
//! ```
//!
//! Businesses type their number however they like; wa.me requires a bare
//! digit string in international format. No further validation is done -
//! a wrong-but-numeric phone produces a well-formed link to nowhere, which
//! is the business's configuration problem, not this layer's.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::BusinessInfo;

/// Base URL for WhatsApp click-to-chat links.
pub const WHATSAPP_BASE_URL: &str = "https://wa.me/";

/// The derived contact affordance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ContactLink {
    /// The normalized, digits-only phone number.
    pub digits: String,

    /// The full click-to-chat URL.
    pub href: String,
}

/// Strips every non-digit character from a raw phone number.
///
/// ## Example
/// ```rust
/// use carta_core::contact::normalize_phone;
///
/// assert_eq!(normalize_phone("+54 9 11-2345-6789"), "5491123456789");
/// assert_eq!(normalize_phone("sin teléfono"), "");
/// ```
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Derives the contact link from the business profile.
///
/// Returns `None` when the profile is absent, has no phone, or the phone
/// contains no digits at all. The caller omits the affordance in that case;
/// there is no error state.
pub fn contact_link(business_info: Option<&BusinessInfo>) -> Option<ContactLink> {
    let raw = business_info?.contact.phone.as_deref()?;
    let digits = normalize_phone(raw);

    if digits.is_empty() {
        return None;
    }

    let href = format!("{}{}", WHATSAPP_BASE_URL, digits);
    Some(ContactLink { digits, href })
}

// =============================================================================
// Unit Tests
// =============================================================================

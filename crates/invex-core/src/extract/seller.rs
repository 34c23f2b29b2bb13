//! Seller-detail extraction.

use tracing::debug;

use super::rules::patterns::{EMAIL, PHONE, SELLER_ADDRESS, SELLER_NAME};
use crate::models::record::SellerRecord;

/// Extractor for seller identity fields.
///
/// Stateless; every call is a pure function of its text input.
pub struct SellerDetailExtractor;

impl SellerDetailExtractor {
    /// Create a new seller-detail extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract seller name, email, phone, and address from one page of
    /// transcribed text.
    ///
    /// The four searches are independent and order does not matter. Each
    /// field is absent when its pattern finds no match; only the first
    /// occurrence of each is kept. Never fails.
    pub fn extract_seller(&self, text: &str) -> SellerRecord {
        let seller_name = SELLER_NAME
            .captures(text)
            .map(|caps| caps[2].trim().to_string());

        let seller_email = EMAIL.find(text).map(|m| m.as_str().trim().to_string());

        // First syntactic match wins; no semantic disambiguation against
        // item codes or amounts that happen to look phone-shaped.
        let seller_phone = PHONE.find(text).map(|m| m.as_str().trim().to_string());

        let seller_address = SELLER_ADDRESS
            .captures(text)
            .map(|caps| caps[1].trim().to_string());

        debug!(
            "seller fields: name={} email={} phone={} address={}",
            seller_name.is_some(),
            seller_email.is_some(),
            seller_phone.is_some(),
            seller_address.is_some(),
        );

        SellerRecord {
            seller_name,
            seller_email,
            seller_phone,
            seller_address,
        }
    }
}

impl Default for SellerDetailExtractor {
    fn default() -> Self {
        Self::new()
    }
}

//! Extracted record models for one scanned document page.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single purchased line item.
///
/// All five fields come from one row match; a row that does not yield
/// every field is never emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item code token, kept verbatim (leading zeros are significant).
    pub item_code: String,

    /// Item name, trimmed of surrounding whitespace.
    pub item_name: String,

    /// Purchased quantity.
    pub quantity: u32,

    /// Unit price with two fractional digits as found in the text.
    pub unit_price: Decimal,

    /// Line total with two fractional digits as found in the text.
    pub line_total: Decimal,
}

/// Itemized purchase details for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    /// Line items in the order they appear in the source text.
    pub items: Vec<LineItem>,

    /// Labeled grand total, when one was found.
    ///
    /// Never reconciled against the line-item totals.
    pub order_amount: Option<Decimal>,
}

impl PurchaseRecord {
    /// Check whether anything was extracted.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.order_amount.is_none()
    }
}

/// Seller identity fields, each independently optional.
///
/// Each field is populated from the first match of its pattern; later
/// occurrences in the text are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerRecord {
    /// Seller name, taken from a labeled line.
    pub seller_name: Option<String>,

    /// Seller email address.
    pub seller_email: Option<String>,

    /// Seller phone number.
    pub seller_phone: Option<String>,

    /// Seller postal address, taken from a labeled line.
    pub seller_address: Option<String>,
}

impl SellerRecord {
    /// Check whether any field was extracted.
    pub fn is_empty(&self) -> bool {
        self.seller_name.is_none()
            && self.seller_email.is_none()
            && self.seller_phone.is_none()
            && self.seller_address.is_none()
    }
}

/// Combined extraction output for one document page.
///
/// Created fresh per extraction call and owned by the caller; nothing is
/// mutated after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Seller identity fields.
    pub seller_details: SellerRecord,

    /// Itemized purchase details.
    pub purchase_details: PurchaseRecord,
}

impl ExtractionResult {
    /// Check whether both sub-records are empty.
    pub fn is_empty(&self) -> bool {
        self.seller_details.is_empty() && self.purchase_details.is_empty()
    }
}

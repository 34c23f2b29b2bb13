//! Purchase-detail extraction.

use tracing::debug;

use super::rules::{extract_line_items, extract_order_amount};
use crate::models::record::PurchaseRecord;

/// Extractor for itemized purchase details.
///
/// Stateless; every call is a pure function of its text input.
pub struct PurchaseDetailExtractor;

impl PurchaseDetailExtractor {
    /// Create a new purchase-detail extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract all line items and the labeled total from one page of
    /// transcribed text.
    ///
    /// The total search runs over the whole text, not just past the item
    /// rows, and the two searches are independent. Never fails; text
    /// without matches yields an empty record.
    pub fn extract_purchase(&self, text: &str) -> PurchaseRecord {
        let items = extract_line_items(text);
        let order_amount = extract_order_amount(text);

        debug!(
            "extracted {} line items, order total {}",
            items.len(),
            order_amount
                .map(|a| a.to_string())
                .unwrap_or_else(|| "absent".to_string()),
        );

        PurchaseRecord {
            items,
            order_amount,
        }
    }
}

impl Default for PurchaseDetailExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_items_and_total() {
        let record = PurchaseDetailExtractor::new()
            .extract_purchase("3 Widget 2 $5.00 $10.00 Total $10.00");

        assert_eq!(record.items.len(), 1);
        assert_eq!(record.items[0].item_code, "3");
        assert_eq!(record.items[0].item_name, "Widget");
        assert_eq!(record.items[0].quantity, 2);
        assert_eq!(
            record.items[0].unit_price,
            Decimal::from_str("5.00").unwrap()
        );
        assert_eq!(
            record.items[0].line_total,
            Decimal::from_str("10.00").unwrap()
        );
        assert_eq!(record.order_amount, Some(Decimal::from_str("10.00").unwrap()));
    }

    #[test]
    fn test_total_without_items() {
        let record = PurchaseDetailExtractor::new().extract_purchase("Total $99.00");

        assert!(record.items.is_empty());
        assert_eq!(record.order_amount, Some(Decimal::from_str("99.00").unwrap()));
    }

    #[test]
    fn test_items_without_total() {
        let record = PurchaseDetailExtractor::new().extract_purchase("4 Mug 1 $8.00 $8.00");

        assert_eq!(record.items.len(), 1);
        assert_eq!(record.order_amount, None);
    }

    #[test]
    fn test_total_not_reconciled_with_items() {
        // The labeled total is taken as-is even when it disagrees with
        // the line items.
        let record =
            PurchaseDetailExtractor::new().extract_purchase("4 Mug 1 $8.00 $8.00\nTotal $50.00");

        assert_eq!(record.order_amount, Some(Decimal::from_str("50.00").unwrap()));
    }

    #[test]
    fn test_empty_text() {
        let record = PurchaseDetailExtractor::new().extract_purchase("");

        assert!(record.is_empty());
    }
}

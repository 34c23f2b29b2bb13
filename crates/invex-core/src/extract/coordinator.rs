//! Coordinator combining the two independent extractors.

use tracing::info;

use super::purchase::PurchaseDetailExtractor;
use super::seller::SellerDetailExtractor;
use crate::models::record::ExtractionResult;

/// Trait for document-level parsers.
pub trait DocumentParser {
    /// Parse one page of transcribed text into an extraction result.
    fn parse(&self, text: &str) -> ExtractionResult;
}

/// Coordinator running the seller and purchase extractors over one text.
///
/// Both extractors are pure functions of the same immutable input and
/// share no state, so they may also be driven concurrently by callers.
/// This is the single integration point external callers depend on.
pub struct ExtractionCoordinator {
    seller: SellerDetailExtractor,
    purchase: PurchaseDetailExtractor,
}

impl ExtractionCoordinator {
    /// Create a new coordinator.
    pub fn new() -> Self {
        Self {
            seller: SellerDetailExtractor::new(),
            purchase: PurchaseDetailExtractor::new(),
        }
    }

    /// Extract seller and purchase details from one page of transcribed
    /// text.
    ///
    /// The two sub-records occupy disjoint namespaces, so combining them
    /// cannot conflict. Never fails; worst case every field is absent and
    /// the item list is empty.
    pub fn extract(&self, text: &str) -> ExtractionResult {
        info!("extracting records from {} characters of text", text.len());

        ExtractionResult {
            seller_details: self.seller.extract_seller(text),
            purchase_details: self.purchase.extract_purchase(text),
        }
    }
}

impl Default for ExtractionCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentParser for ExtractionCoordinator {
    fn parse(&self, text: &str) -> ExtractionResult {
        self.extract(text)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    use super::*;
    use crate::models::record::{LineItem, PurchaseRecord};

    // Labeled captures run on alphanumeric/space classes, so each labeled
    // line ends in punctuation to terminate its capture.
    const RECEIPT: &str = "\
Seller: Acme Corp.
Email: billing@acme.example
Phone: +1 555 123 4567.
Address: 12 Harbor Road, Portsmouth.
3 Widget 2 $5.00 $10.00
Total $10.00
";

    #[test]
    fn test_extract_combines_both_records() {
        let result = ExtractionCoordinator::new().extract(RECEIPT);

        assert_eq!(result.seller_details.seller_name.as_deref(), Some("Acme Corp"));
        assert_eq!(
            result.seller_details.seller_phone.as_deref(),
            Some("+1 555 123 4567")
        );
        assert_eq!(
            result.seller_details.seller_address.as_deref(),
            Some("12 Harbor Road, Portsmouth")
        );
        assert_eq!(
            result.seller_details.seller_email.as_deref(),
            Some("billing@acme.example")
        );
        assert_eq!(
            result.purchase_details,
            PurchaseRecord {
                items: vec![LineItem {
                    item_code: "3".to_string(),
                    item_name: "Widget".to_string(),
                    quantity: 2,
                    unit_price: Decimal::from_str("5.00").unwrap(),
                    line_total: Decimal::from_str("10.00").unwrap(),
                }],
                order_amount: Some(Decimal::from_str("10.00").unwrap()),
            }
        );
    }

    #[test]
    fn test_no_matches_yields_empty_result() {
        let result = ExtractionCoordinator::new().extract("*** &&& ***");

        assert!(result.is_empty());
        assert_eq!(result, ExtractionResult::default());
    }

    #[test]
    fn test_extract_is_idempotent() {
        let coordinator = ExtractionCoordinator::new();

        let first = coordinator.extract(RECEIPT);
        let second = coordinator.extract(RECEIPT);

        assert_eq!(first, second);
    }

    #[test]
    fn test_parse_trait_matches_extract() {
        let coordinator = ExtractionCoordinator::new();

        assert_eq!(coordinator.parse(RECEIPT), coordinator.extract(RECEIPT));
    }
}

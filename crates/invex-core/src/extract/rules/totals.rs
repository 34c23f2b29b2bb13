//! Labeled order-total extraction.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::FieldExtractor;
use super::patterns::ORDER_TOTAL;

/// Order-total extractor.
pub struct OrderTotalExtractor;

impl OrderTotalExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OrderTotalExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for OrderTotalExtractor {
    type Output = Decimal;

    fn extract(&self, text: &str) -> Option<Decimal> {
        ORDER_TOTAL
            .captures(text)
            .and_then(|caps| Decimal::from_str(&caps[1]).ok())
    }

    fn extract_all(&self, text: &str) -> Vec<Decimal> {
        ORDER_TOTAL
            .captures_iter(text)
            .filter_map(|caps| Decimal::from_str(&caps[1]).ok())
            .collect()
    }
}

/// Extract the first labeled total found anywhere in the text.
pub fn extract_order_amount(text: &str) -> Option<Decimal> {
    OrderTotalExtractor::new().extract(text)
}

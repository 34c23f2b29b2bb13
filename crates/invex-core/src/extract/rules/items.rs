//! Line-item row extraction.

use std::str::FromStr;

use regex::Captures;
use rust_decimal::Decimal;

use super::FieldExtractor;
use super::patterns::ITEM_ROW;
use crate::models::record::LineItem;

/// Line-item row extractor.
pub struct LineItemExtractor;

impl LineItemExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LineItemExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for LineItemExtractor {
    type Output = LineItem;

    fn extract(&self, text: &str) -> Option<LineItem> {
        self.extract_all(text).into_iter().next()
    }

    /// Matches are non-overlapping and left-to-right; once a span is
    /// consumed as one row, scanning resumes after it. Source order is
    /// preserved in the output.
    fn extract_all(&self, text: &str) -> Vec<LineItem> {
        ITEM_ROW
            .captures_iter(text)
            .filter_map(|caps| parse_item_row(&caps))
            .collect()
    }
}

/// Extract all line items from text.
pub fn extract_line_items(text: &str) -> Vec<LineItem> {
    LineItemExtractor::new().extract_all(text)
}

/// Build a line item from one row match.
///
/// The pattern only hands digit runs to the numeric fields, so the parses
/// can only fail on runs too large for their type; such rows are dropped
/// whole rather than emitted partially.
fn parse_item_row(caps: &Captures) -> Option<LineItem> {
    Some(LineItem {
        item_code: caps[1].to_string(),
        item_name: caps[2].trim().to_string(),
        quantity: caps[3].parse().ok()?,
        unit_price: Decimal::from_str(&caps[4]).ok()?,
        line_total: Decimal::from_str(&caps[5]).ok()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_single_row() {
        let items = extract_line_items("3 Widget 2 $5.00 $10.00");

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].item_code, "3");
        assert_eq!(items[0].item_name, "Widget");
        assert_eq!(items[0].quantity, 2);
        assert_eq!(items[0].unit_price, Decimal::from_str("5.00").unwrap());
        assert_eq!(items[0].line_total, Decimal::from_str("10.00").unwrap());
    }

    #[test]
    fn test_rows_keep_source_order() {
        let text = "2 Ink Cartridge 1 $30.00 $30.00\n1 Paper Ream 10 $4.50 $45.00";
        let items = extract_line_items(text);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].item_name, "Ink Cartridge");
        assert_eq!(items[1].item_name, "Paper Ream");
    }

    #[test]
    fn test_item_code_kept_verbatim() {
        let items = extract_line_items("007 Stapler 1 $3.25 $3.25");

        assert_eq!(items[0].item_code, "007");
    }

    #[test]
    fn test_dollar_signs_optional() {
        let items = extract_line_items("12 Notebook 3 2.50 7.50");

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].unit_price, Decimal::from_str("2.50").unwrap());
    }

    #[test]
    fn test_row_missing_a_field_is_not_emitted() {
        // Only one two-decimal amount present, so no row matches.
        let items = extract_line_items("12 Stapler 4 $3.00");

        assert!(items.is_empty());
    }

    #[test]
    fn test_adjacent_rows_do_not_share_digits() {
        // The digit run closing one row cannot also open the next one.
        let text = "1 Pen 2 $1.00 $2.00 2 Ink 1 $3.00 $3.00";
        let items = extract_line_items(text);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].item_code, "1");
        assert_eq!(items[1].item_code, "2");
    }

    #[test]
    fn test_no_rows_in_prose() {
        let items = extract_line_items("Thank you for shopping with us");

        assert!(items.is_empty());
    }

    #[test]
    fn test_first_via_extract() {
        let extractor = LineItemExtractor::new();
        let text = "1 Pen 2 $1.00 $2.00\n2 Ink 1 $3.00 $3.00";

        let first = extractor.extract(text).unwrap();
        assert_eq!(first.item_name, "Pen");
    }
}

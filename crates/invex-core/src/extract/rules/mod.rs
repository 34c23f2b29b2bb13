//! Rule-based field extractors for receipt/invoice text.

pub mod items;
pub mod patterns;
pub mod totals;

pub use items::{LineItemExtractor, extract_line_items};
pub use patterns::*;
pub use totals::{OrderTotalExtractor, extract_order_amount};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the first occurrence of the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

//! Common regex patterns for receipt/invoice text extraction.
//!
//! All patterns compile once and run on the linear-time regex engine, so
//! garbled OCR input cannot trigger pathological matching.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Tabular line-item rows: code, name, quantity, unit price, line total.
    // The name capture is non-greedy so it stops at the quantity digits.
    pub static ref ITEM_ROW: Regex = Regex::new(
        r"(\d+)\s*([A-Za-z0-9\s]+?)\s*(\d+)\s*\$?(\d+\.\d{2})\s*\$?(\d+\.\d{2})"
    ).unwrap();

    // Grand-total label. Loose: also matches inside "Subtotal", and the
    // first occurrence anywhere in the text wins.
    pub static ref ORDER_TOTAL: Regex = Regex::new(
        r"(?i)total\s*\$?(\d+\.\d{2})"
    ).unwrap();

    // Seller name anchored on a label token.
    pub static ref SELLER_NAME: Regex = Regex::new(
        r"(Seller|Vendor|From)\s*[:\-]?\s*([A-Za-z0-9\s]+)"
    ).unwrap();

    // Email pattern.
    pub static ref EMAIL: Regex = Regex::new(
        r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"
    ).unwrap();

    // Phone pattern. Permissive digit grouping; can pick up other numeric
    // runs such as item codes or prices.
    pub static ref PHONE: Regex = Regex::new(
        r"\(?\+?[0-9]*\)?[\s.-]?[0-9]+[\s.-]?[0-9]+[\s.-]?[0-9]+"
    ).unwrap();

    // Seller address anchored on the "Address" label.
    pub static ref SELLER_ADDRESS: Regex = Regex::new(
        r"Address\s*[:\-]?\s*([A-Za-z0-9\s,]+)"
    ).unwrap();
}

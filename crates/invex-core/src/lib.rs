//! Core library for receipt/invoice OCR text extraction.
//!
//! This crate provides:
//! - Data models for extracted seller and purchase records
//! - Rule-based field extraction over one page of transcribed text
//! - A coordinator combining the independent extractors
//! - The text-source seam for upstream OCR collaborators

pub mod error;
pub mod extract;
pub mod models;
pub mod source;

pub use error::{InvexError, Result, SourceError};
pub use extract::{
    DocumentParser, ExtractionCoordinator, PurchaseDetailExtractor, SellerDetailExtractor,
};
pub use models::config::InvexConfig;
pub use models::record::{ExtractionResult, LineItem, PurchaseRecord, SellerRecord};
pub use source::{ExtractionPipeline, TextFileSource, TextSource};

//! Field extraction over one page of transcribed text.

mod coordinator;
mod purchase;
pub mod rules;
mod seller;

pub use coordinator::{DocumentParser, ExtractionCoordinator};
pub use purchase::PurchaseDetailExtractor;
pub use seller::SellerDetailExtractor;

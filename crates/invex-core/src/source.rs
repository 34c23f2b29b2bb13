//! Text-source seam for upstream OCR collaborators.
//!
//! The extraction engine never touches images or an OCR runtime; it
//! consumes one blob of transcribed text per document page. Upstream
//! collaborators implement [`TextSource`] and are injected where the text
//! is needed, rather than living in process-wide state.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, SourceError};
use crate::extract::{DocumentParser, ExtractionCoordinator};
use crate::models::record::ExtractionResult;

/// A collaborator that produces the OCR text of one document page.
pub trait TextSource {
    /// Produce the transcribed text.
    fn page_text(&self) -> std::result::Result<String, SourceError>;
}

/// Text source backed by a stored OCR transcript file.
#[derive(Debug, Clone)]
pub struct TextFileSource {
    path: PathBuf,
}

impl TextFileSource {
    /// Create a source reading from the given transcript path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying transcript.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TextSource for TextFileSource {
    fn page_text(&self) -> std::result::Result<String, SourceError> {
        std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SourceError::MissingInput(self.path.clone()),
            _ => SourceError::Read {
                path: self.path.clone(),
                source: e,
            },
        })
    }
}

/// Extraction pipeline: one text source feeding one coordinator.
pub struct ExtractionPipeline<S: TextSource> {
    source: S,
    coordinator: ExtractionCoordinator,
}

impl<S: TextSource> ExtractionPipeline<S> {
    /// Create a pipeline around the given text source.
    pub fn new(source: S) -> Self {
        Self {
            source,
            coordinator: ExtractionCoordinator::new(),
        }
    }

    /// Fetch the page text and extract a result from it.
    ///
    /// The fetch is the only fallible step; extraction always produces a
    /// (possibly empty) result.
    pub fn run(&self) -> Result<ExtractionResult> {
        let text = self.source.page_text()?;
        debug!("source produced {} characters of text", text.len());

        Ok(self.coordinator.parse(&text))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rust_decimal::Decimal;

    use super::*;

    struct StaticSource(&'static str);

    impl TextSource for StaticSource {
        fn page_text(&self) -> std::result::Result<String, SourceError> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn test_pipeline_runs_extraction() {
        let pipeline = ExtractionPipeline::new(StaticSource("Total $12.00"));
        let result = pipeline.run().unwrap();

        assert_eq!(
            result.purchase_details.order_amount,
            Some(Decimal::from_str("12.00").unwrap())
        );
    }

    #[test]
    fn test_pipeline_accepts_empty_text() {
        let pipeline = ExtractionPipeline::new(StaticSource(""));
        let result = pipeline.run().unwrap();

        assert!(result.is_empty());
    }

    #[test]
    fn test_missing_transcript_is_missing_input() {
        let source = TextFileSource::new("/nonexistent/transcript.txt");

        match source.page_text() {
            Err(SourceError::MissingInput(path)) => {
                assert!(path.ends_with("transcript.txt"));
            }
            other => panic!("expected MissingInput, got {other:?}"),
        }
    }
}

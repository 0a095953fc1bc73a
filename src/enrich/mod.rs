//! Response enrichment.
//!
//! Raw generated text becomes an [`EnrichedResponse`]: the dominant
//! language of the whole reply with a confidence score, plus the reply
//! split into sentences with each sentence classified independently —
//! a reply may mix languages sentence by sentence.

mod language;
mod segment;

pub use language::LanguageIdentifier;
pub use segment::segment;

use tracing::{debug, warn};

use crate::types::response::{EnrichedResponse, Sentence};

/// Stateless enrichment pipeline. Owns the language-identification model;
/// build once at client construction and share read-only across calls.
pub struct ResponseEnricher {
    identifier: LanguageIdentifier,
}

impl ResponseEnricher {
    pub fn new() -> Self {
        Self {
            identifier: LanguageIdentifier::new(),
        }
    }

    /// Identify the overall language, segment with it as a hint, then
    /// re-classify every sentence on its own. Never fails: degenerate input
    /// yields a zero-confidence guess and no sentences.
    pub fn enrich(&self, text: &str) -> EnrichedResponse {
        let (language, confidence) = self.identifier.identify(text);
        if confidence == 0.0 && !text.trim().is_empty() {
            warn!("language identification fell back to a zero-confidence guess");
        }

        let sentences = segment(text, &language)
            .into_iter()
            .map(|text| {
                let (language, confidence) = self.identifier.identify(&text);
                Sentence {
                    text,
                    language,
                    confidence,
                }
            })
            .collect::<Vec<_>>();

        debug!(
            language = %language,
            confidence,
            sentences = sentences.len(),
            "enriched completion response"
        );

        EnrichedResponse {
            response: text.to_string(),
            language,
            confidence,
            sentences,
        }
    }
}

impl Default for ResponseEnricher {
    fn default() -> Self {
        Self::new()
    }
}

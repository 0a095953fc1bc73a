//! Language identification.

use lingua::{LanguageDetector, LanguageDetectorBuilder};

/// Guess reported for text the detector has nothing to say about.
pub(crate) const FALLBACK_LANGUAGE: &str = "en";

/// Wraps a [`LanguageDetector`] behind the small surface the enrichment
/// pipeline needs. Building one loads language models; build once and share.
pub struct LanguageIdentifier {
    detector: LanguageDetector,
}

impl LanguageIdentifier {
    pub fn new() -> Self {
        Self {
            detector: LanguageDetectorBuilder::from_all_languages().build(),
        }
    }

    /// Identify the dominant language of `text`.
    ///
    /// Returns a 2-letter ISO 639-1 code and a confidence in [0, 1].
    /// Degenerate input (empty, or carrying no letters at all) yields the
    /// fallback guess with zero confidence instead of an error.
    pub fn identify(&self, text: &str) -> (String, f64) {
        if !text.chars().any(char::is_alphabetic) {
            return (FALLBACK_LANGUAGE.to_string(), 0.0);
        }

        match self
            .detector
            .compute_language_confidence_values(text)
            .into_iter()
            .next()
        {
            Some((language, confidence)) => (
                language.iso_code_639_1().to_string(),
                confidence.clamp(0.0, 1.0),
            ),
            None => (FALLBACK_LANGUAGE.to_string(), 0.0),
        }
    }
}

impl Default for LanguageIdentifier {
    fn default() -> Self {
        Self::new()
    }
}

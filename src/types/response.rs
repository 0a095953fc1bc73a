//! The enriched response record returned to the service caller.

use serde::{Deserialize, Serialize};

/// One sentence of the response, classified independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    pub text: String,
    /// 2-letter ISO 639-1 code.
    pub language: String,
    /// In [0, 1].
    pub confidence: f64,
}

/// Generated text plus language identification, overall and per sentence.
/// Derived per call; not persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedResponse {
    pub response: String,
    /// Dominant language of the whole response, 2-letter ISO 639-1 code.
    pub language: String,
    /// In [0, 1].
    pub confidence: f64,
    pub sentences: Vec<Sentence>,
}

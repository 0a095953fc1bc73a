//! Sentence segmentation.
//!
//! UAX #29 supplies the candidate boundaries (via `unicode-segmentation`);
//! the detected language selects an abbreviation table used to undo false
//! breaks the boundary rules cannot know about — "Dr. Smith" splits after
//! "Dr. " under plain UAX #29, "M. Dupont" after "M. ", and so on.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use unicode_segmentation::UnicodeSegmentation;

static EN_ABBREVIATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "dr", "mr", "mrs", "ms", "prof", "rev", "sr", "jr", "st", "vs", "etc", "e.g", "i.e",
        "approx", "dept",
    ]
    .into_iter()
    .collect()
});

static DE_ABBREVIATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "dr", "prof", "z.b", "bzw", "ca", "evtl", "ggf", "inkl", "nr", "u.a", "usw", "vgl", "z.t",
    ]
    .into_iter()
    .collect()
});

static FR_ABBREVIATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["m", "mme", "mlle", "dr", "st", "etc", "ex", "p.ex", "av", "env", "boul"]
        .into_iter()
        .collect()
});

static ES_ABBREVIATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["sr", "sra", "srta", "dr", "dra", "etc", "ej", "p.ej", "ud", "uds", "av"]
        .into_iter()
        .collect()
});

fn abbreviations(language: &str) -> Option<&'static HashSet<&'static str>> {
    match language {
        "en" => Some(&EN_ABBREVIATIONS),
        "de" => Some(&DE_ABBREVIATIONS),
        "fr" => Some(&FR_ABBREVIATIONS),
        "es" => Some(&ES_ABBREVIATIONS),
        _ => None,
    }
}

/// Split `text` into an ordered sequence of sentences, using `language`
/// (2-letter code) as a hint for abbreviation handling.
///
/// Languages without an abbreviation table fall back to plain UAX #29
/// boundaries. An empty or blank input yields an empty sequence.
pub fn segment(text: &str, language: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let abbrev = abbreviations(language);
    let mut sentences: Vec<String> = Vec::new();

    for raw in text.unicode_sentences() {
        if let Some(last) = sentences.last_mut() {
            if ends_with_abbreviation(last, abbrev) {
                last.push_str(raw);
                continue;
            }
        }
        sentences.push(raw.to_string());
    }

    sentences
        .into_iter()
        .map(|s| s.trim_end().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn ends_with_abbreviation(sentence: &str, abbrev: Option<&HashSet<&'static str>>) -> bool {
    let Some(table) = abbrev else {
        return false;
    };
    let trimmed = sentence.trim_end();
    if !trimmed.ends_with('.') {
        return false;
    }
    let last_word = trimmed
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or(trimmed);
    let key = last_word
        .trim_end_matches('.')
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();
    !key.is_empty() && table.contains(key.as_str())
}

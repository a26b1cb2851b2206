//! RAKE keyword extraction for article text.
//!
//! This module turns free-form article text into a ranked list of search
//! phrases: candidate phrases are maximal runs of content words between
//! stopwords and punctuation, scored by word co-occurrence.

mod language;
mod rake;
mod stopwords;

pub use self::language::Language;
pub use self::rake::{extract_keywords, MAX_KEYWORDS};
pub use self::stopwords::stopwords;

//! Text search primitives.
//!
//! # Responsibility
//! - Tokenize topic/note text into the per-kind inverted indexes.
//! - Provide the case-insensitive substring matcher used by default search.
//!
//! # Invariants
//! - Tokenization and substring matching share no logic: substring search
//!   sees the full lowercased text, including punctuation and spacing.

pub mod index;
pub mod tokenizer;

/// Case-insensitive substring test.
///
/// `needle_lower` must already be lowercased; callers lowercase a query once
/// and reuse it across a scan. An empty needle matches every haystack.
pub fn contains_lowercased(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

#[cfg(test)]
mod tests {
    use super::contains_lowercased;

    #[test]
    fn substring_match_spans_word_boundaries() {
        assert!(contains_lowercased("Gun Control Politics", "control poli"));
        assert!(contains_lowercased("Climate Change", "mate ch"));
        assert!(!contains_lowercased("Climate Change", "weather"));
    }

    #[test]
    fn empty_needle_matches_everything() {
        assert!(contains_lowercased("anything", ""));
    }
}

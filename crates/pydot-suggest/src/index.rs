//! Suggestion index
//!
//! One query: `suggestions_for(prefix, document_text)`. Candidates come from
//! the static source lists, snippet names, and the document scan, matched
//! case-insensitively by prefix. The result is deduplicated and
//! lexicographically sorted. Nothing is cached between queries.

use std::collections::BTreeSet;

use crate::{SuggestionData, scan_document};

/// Marker prepended to snippet candidates so the controller can distinguish
/// a multi-line body insertion from a plain word replacement.
pub const SNIPPET_MARKER: &str = "snippet:";

pub struct SuggestionIndex {
    data: SuggestionData,
}

impl SuggestionIndex {
    pub fn new(data: SuggestionData) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &SuggestionData {
        &self.data
    }

    /// Candidates for `prefix`, given the current document text.
    ///
    /// Every non-snippet candidate starts with `prefix` case-insensitively;
    /// snippet candidates carry [`SNIPPET_MARKER`] and their name starts
    /// with the prefix. An empty prefix yields no candidates - the popup is
    /// never offered unprompted.
    pub fn suggestions_for(&self, prefix: &str, document_text: &str) -> Vec<String> {
        if prefix.is_empty() {
            return Vec::new();
        }
        let needle = prefix.to_lowercase();

        // BTreeSet handles both dedup and lexicographic order.
        let mut candidates = BTreeSet::new();

        for word in self.data.static_words() {
            if word.to_lowercase().starts_with(&needle) {
                candidates.insert(word.to_string());
            }
        }

        for name in self.data.code_snippets.keys() {
            if name.to_lowercase().starts_with(&needle) {
                candidates.insert(format!("{SNIPPET_MARKER}{name}"));
            }
        }

        let symbols = scan_document(document_text, |word| self.data.is_keyword(word));
        for symbol in symbols.all() {
            if symbol.to_lowercase().starts_with(&needle) {
                candidates.insert(symbol.to_string());
            }
        }

        let result: Vec<String> = candidates.into_iter().collect();
        tracing::debug!(prefix = %prefix, count = result.len(), "computed suggestions");
        result
    }

    /// Resolves a snippet candidate (with or without marker) to its body.
    pub fn snippet_body(&self, candidate: &str) -> Option<&str> {
        let name = candidate.strip_prefix(SNIPPET_MARKER).unwrap_or(candidate);
        self.data.snippet_body(name)
    }
}

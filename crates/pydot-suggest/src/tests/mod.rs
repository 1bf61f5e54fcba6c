//! Autocomplete tests
//!
//! Organized by category:
//! - test_helpers: Common test fixtures
//! - test_sources: Suggestion data loading and built-in defaults
//! - test_document_scan: Identifier extraction from document text
//! - test_word: Current-word extraction at the cursor
//! - test_index: Prefix matching, ordering, and dedup
//! - test_controller: Popup state machine transitions and accept
//! - test_snippets: Snippet candidates and body insertion





mod test_index;

mod test_controller;

mod test_snippets;

//! Tests for prefix matching, ordering, and dedup

use pretty_assertions::assert_eq;

use super::test_helpers::*;
use crate::SNIPPET_MARKER;

#[test]
fn test_empty_prefix_yields_nothing() {
    let index = create_test_index();
    assert!(index.suggestions_for("", sample_document()).is_empty());
}

#[test]
fn test_keyword_prefix() {
    let index = create_test_index();
    let suggestions = index.suggestions_for("f", "");

    assert!(suggestions.iter().any(|s| s == "for"));
    assert!(suggestions.iter().any(|s| s == "from"));
    assert!(suggestions.iter().any(|s| s == "finally"));
}

#[test]
fn test_every_candidate_starts_with_prefix_case_insensitively() {
    let index = create_test_index();
    for prefix in ["p", "pl", "pydot.", "FOR", "Sc", "def"] {
        for candidate in index.suggestions_for(prefix, sample_document()) {
            let name = candidate.strip_prefix(SNIPPET_MARKER).unwrap_or(&candidate);
            assert!(
                name.to_lowercase().starts_with(&prefix.to_lowercase()),
                "{candidate:?} does not match prefix {prefix:?}"
            );
        }
    }
}

#[test]
fn test_case_insensitive_match_includes_document_class() {
    // "pl" matches "Player" case-insensitively even though it does not
    // match case-sensitively.
    let index = create_test_index();
    let suggestions = index.suggestions_for("pl", sample_document());

    assert!(
        suggestions.iter().any(|s| s == "Player"),
        "got: {suggestions:?}"
    );
    assert!(suggestions.iter().any(|s| s == "player_speed"));
}

#[test]
fn test_document_symbols_from_all_three_scans() {
    let index = create_test_index();

    assert!(
        index
            .suggestions_for("up", sample_document())
            .iter()
            .any(|s| s == "update")
    );
    assert!(
        index
            .suggestions_for("sc", sample_document())
            .iter()
            .any(|s| s == "score")
    );
}

#[test]
fn test_result_is_sorted_and_deduplicated() {
    let index = create_test_index();
    // "print" is a builtin; a document assigning to "print_count" should not
    // duplicate anything.
    let suggestions = index.suggestions_for("pr", "print_count = 0\nprint_count = 1\n");

    let mut sorted = suggestions.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(suggestions, sorted);
    assert_eq!(
        suggestions.iter().filter(|s| *s == "print_count").count(),
        1
    );
}

#[test]
fn test_dotted_prefix_matches_library_functions() {
    let index = create_test_index();
    let suggestions = index.suggestions_for("pydot.dis", "");

    assert!(suggestions.iter().any(|s| s == "pydot.display.set_mode"));
    assert!(suggestions.iter().any(|s| s == "pydot.display.flip"));
}

#[test]
fn test_unmatched_prefix_yields_nothing() {
    let index = create_test_index();
    assert!(index.suggestions_for("zzzzzz", sample_document()).is_empty());
}

#[test]
fn test_stateless_across_documents() {
    // The document scan is recomputed per call; symbols from an earlier
    // document must not leak into a later query.
    let index = create_test_index();
    let with_doc = index.suggestions_for("sc", sample_document());
    assert!(with_doc.iter().any(|s| s == "score"));

    let without_doc = index.suggestions_for("sc", "");
    assert!(!without_doc.iter().any(|s| s == "score"));
}

//! Tests for snippet candidates and body insertion

use pretty_assertions::assert_eq;

use super::test_helpers::*;
use crate::{SNIPPET_MARKER, SuggestionData, SuggestionIndex};

#[test]
fn test_snippet_candidates_carry_the_marker() {
    let index = create_test_index();
    let suggestions = index.suggestions_for("main", "");

    assert!(
        suggestions.iter().any(|s| s == "snippet:main_loop"),
        "got: {suggestions:?}"
    );
}

#[test]
fn test_snippet_body_lookup_with_and_without_marker() {
    let index = create_test_index();

    let body = index.snippet_body("snippet:main_loop").unwrap();
    assert!(body.contains("while running:"));
    assert_eq!(index.snippet_body("main_loop"), Some(body));
    assert_eq!(index.snippet_body("snippet:nope"), None);
}

#[test]
fn test_accept_snippet_inserts_body_not_marker() {
    let mut controller = create_test_controller();
    let line = "main_lo";
    controller.refresh(line, 7, "");

    let accepted = controller.accept(line, 7).unwrap();
    assert!(!accepted.line.contains(SNIPPET_MARKER));
    assert!(accepted.line.starts_with("running = True\n"));
    assert!(accepted.line.contains("pydot.display.flip()"));
}

#[test]
fn test_accept_snippet_places_cursor_after_body() {
    let data = SuggestionData::builtin();
    let body_len = data.snippet_body("main_loop").unwrap().chars().count();

    let mut controller = create_test_controller();
    let line = "main_lo";
    controller.refresh(line, 7, "");

    let accepted = controller.accept(line, 7).unwrap();
    // The partial word started at column 0, so the cursor lands right after
    // the inserted body.
    assert_eq!(accepted.cursor, body_len);
}

#[test]
fn test_snippet_insertion_preserves_line_suffix() {
    let index = SuggestionIndex::new(SuggestionData::builtin());
    let mut controller = crate::AutocompleteController::new(index);

    let line = "ev  # handle input";
    controller.refresh(line, 2, "");
    assert!(
        controller
            .candidates()
            .iter()
            .any(|c| c == "snippet:event_handler")
    );

    let accepted = controller.accept(line, 2).unwrap();
    assert!(accepted.line.ends_with("  # handle input"));
}

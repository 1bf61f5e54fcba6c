//! Tests for popup state machine transitions and accept

use pretty_assertions::assert_eq;

use super::test_helpers::*;
use crate::{Acceptance, AutocompleteConfig, NavDirection, PopupState};

#[test]
fn test_popup_opens_on_single_char_with_matches() {
    let mut controller = create_test_controller();
    controller.refresh("f", 1, "");

    assert!(controller.is_visible());
    assert!(!controller.candidates().is_empty());
    assert_eq!(controller.selected(), Some(0));
}

#[test]
fn test_popup_stays_hidden_without_matches() {
    let mut controller = create_test_controller();
    controller.refresh("zzzzzz", 6, "");

    assert!(!controller.is_visible());
    assert_eq!(controller.state(), &PopupState::Hidden);
}

#[test]
fn test_popup_hidden_on_empty_word() {
    let mut controller = create_test_controller();
    controller.refresh("x = ", 4, "");

    assert!(!controller.is_visible());
}

#[test]
fn test_min_prefix_len_two_requires_two_chars() {
    let mut controller = create_controller_with(AutocompleteConfig {
        min_prefix_len: 2,
        ..AutocompleteConfig::default()
    });

    controller.refresh("f", 1, "");
    assert!(!controller.is_visible());

    controller.refresh("fo", 2, "");
    assert!(controller.is_visible());
}

#[test]
fn test_recompute_to_empty_hides_popup() {
    let mut controller = create_test_controller();
    controller.refresh("f", 1, "");
    assert!(controller.is_visible());

    controller.refresh("fzzz", 4, "");
    assert!(!controller.is_visible());
}

#[test]
fn test_navigation_clamps_at_both_ends() {
    let mut controller = create_test_controller();
    controller.refresh("f", 1, "");
    let count = controller.candidates().len();
    assert!(count > 1, "need several candidates for this test");

    // Hammer Up well past the top.
    for _ in 0..count + 10 {
        controller.navigate(NavDirection::Up);
    }
    assert_eq!(controller.selected(), Some(0));

    // Hammer Down well past the bottom.
    for _ in 0..count + 10 {
        controller.navigate(NavDirection::Down);
    }
    assert_eq!(controller.selected(), Some(count - 1));

    // Selection stays in bounds the whole way back up.
    for _ in 0..count + 10 {
        controller.navigate(NavDirection::Up);
        let selected = controller.selected().unwrap();
        assert!(selected < count);
    }
}

#[test]
fn test_navigation_while_hidden_is_a_noop() {
    let mut controller = create_test_controller();
    controller.navigate(NavDirection::Down);
    assert_eq!(controller.state(), &PopupState::Hidden);
}

#[test]
fn test_dismiss_hides() {
    let mut controller = create_test_controller();
    controller.refresh("f", 1, "");
    controller.dismiss();

    assert!(!controller.is_visible());
}

#[test]
fn test_accept_replaces_exactly_the_partial_word() {
    let mut controller = create_test_controller();
    let line = "pri";
    controller.refresh(line, 3, "");
    assert!(controller.is_visible());

    // "print" sorts first among the "pri" candidates.
    let accepted = controller.accept(line, 3).unwrap();
    assert_eq!(
        accepted,
        Acceptance {
            line: "print".to_string(),
            cursor: 5
        }
    );
    assert!(!controller.is_visible());
}

#[test]
fn test_accept_leaves_rest_of_line_unmodified() {
    let mut controller = create_test_controller();
    let line = "    x = pri  # count";
    controller.refresh(line, 11, "");

    let accepted = controller.accept(line, 11).unwrap();
    assert_eq!(accepted.line, "    x = print  # count");
    assert_eq!(accepted.cursor, 13);
}

#[test]
fn test_accept_after_navigation_takes_selected_candidate() {
    let mut controller = create_test_controller();
    let line = "pl";
    controller.refresh(line, 2, sample_document());
    let candidates = controller.candidates().to_vec();
    assert!(candidates.len() > 1);

    controller.navigate(NavDirection::Down);
    let accepted = controller.accept(line, 2).unwrap();
    assert!(accepted.line.starts_with(&candidates[1]));
}

#[test]
fn test_accept_while_hidden_is_a_noop() {
    let mut controller = create_test_controller();
    assert_eq!(controller.accept("pri", 3), None);
    assert!(!controller.is_visible());
}

#[test]
fn test_swallow_enter_only_while_visible() {
    let mut controller = create_test_controller();
    assert!(!controller.swallows_enter());

    controller.refresh("f", 1, "");
    assert!(controller.swallows_enter());
}

#[test]
fn test_swallow_enter_configurable_off() {
    let mut controller = create_controller_with(AutocompleteConfig {
        swallow_enter: false,
        ..AutocompleteConfig::default()
    });
    controller.refresh("f", 1, "");

    assert!(controller.is_visible());
    assert!(!controller.swallows_enter());
}

#[test]
fn test_selection_resets_on_refresh() {
    let mut controller = create_test_controller();
    controller.refresh("f", 1, "");
    controller.navigate(NavDirection::Down);
    controller.navigate(NavDirection::Down);

    controller.refresh("fo", 2, "");
    assert_eq!(controller.selected(), Some(0));
}

#[test]
fn test_selected_always_within_candidates_while_visible() {
    let mut controller = create_test_controller();
    for (line, cursor) in [("f", 1), ("fo", 2), ("for", 3)] {
        controller.refresh(line, cursor, sample_document());
        if let PopupState::Visible {
            candidates,
            selected,
        } = controller.state()
        {
            assert!(!candidates.is_empty());
            assert!(*selected < candidates.len());
        }
    }
}

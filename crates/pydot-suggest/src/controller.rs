//! Autocomplete popup state machine
//!
//! Two states: `Hidden` and `Visible { candidates, selected }`. Transitions
//! are driven entirely by editor input - there are no timers and no
//! debouncing; every keystroke recomputes the candidate list from scratch.
//!
//! Invariants while visible: the candidate list is non-empty and `selected`
//! is a valid index into it. A recompute that comes back empty hides the
//! popup rather than leaving it open on stale candidates.

use crate::{SNIPPET_MARKER, SuggestionIndex, word_before_cursor};

/// Tunables the source variants disagreed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutocompleteConfig {
    /// Minimum current-word length before the popup opens.
    pub min_prefix_len: usize,
    /// Whether Enter is consumed by the popup while it is visible.
    pub swallow_enter: bool,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        Self {
            min_prefix_len: 1,
            swallow_enter: true,
        }
    }
}

/// Popup visibility plus selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupState {
    Hidden,
    Visible {
        candidates: Vec<String>,
        selected: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Up,
    Down,
}

/// Result of accepting a candidate: the rewritten line (snippet bodies may
/// introduce newlines) and the cursor as a character offset into it, placed
/// immediately after the inserted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acceptance {
    pub line: String,
    pub cursor: usize,
}

pub struct AutocompleteController {
    index: SuggestionIndex,
    config: AutocompleteConfig,
    state: PopupState,
}

impl AutocompleteController {
    pub fn new(index: SuggestionIndex) -> Self {
        Self::with_config(index, AutocompleteConfig::default())
    }

    pub fn with_config(index: SuggestionIndex, config: AutocompleteConfig) -> Self {
        Self {
            index,
            config,
            state: PopupState::Hidden,
        }
    }

    pub fn state(&self) -> &PopupState {
        &self.state
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, PopupState::Visible { .. })
    }

    pub fn candidates(&self) -> &[String] {
        match &self.state {
            PopupState::Visible { candidates, .. } => candidates,
            PopupState::Hidden => &[],
        }
    }

    pub fn selected(&self) -> Option<usize> {
        match &self.state {
            PopupState::Visible { selected, .. } => Some(*selected),
            PopupState::Hidden => None,
        }
    }

    /// Recomputes candidates for the word under the cursor.
    ///
    /// `line` is the current line, `cursor` a character column on it,
    /// `document` the full document text (for the identifier scans). The
    /// popup shows when the word is at least `min_prefix_len` characters and
    /// something matches; otherwise it hides. Selection resets to the first
    /// candidate - the list was rebuilt, the old index means nothing.
    pub fn refresh(&mut self, line: &str, cursor: usize, document: &str) {
        let word = word_before_cursor(line, cursor);
        if word.text.chars().count() < self.config.min_prefix_len {
            self.state = PopupState::Hidden;
            return;
        }

        let candidates = self.index.suggestions_for(&word.text, document);
        self.state = if candidates.is_empty() {
            PopupState::Hidden
        } else {
            PopupState::Visible {
                candidates,
                selected: 0,
            }
        };
    }

    /// Moves the selection, clamped to the candidate list. No wraparound;
    /// navigating past either end is ignored. No-op while hidden.
    pub fn navigate(&mut self, direction: NavDirection) {
        if let PopupState::Visible {
            candidates,
            selected,
        } = &mut self.state
        {
            match direction {
                NavDirection::Up => *selected = selected.saturating_sub(1),
                NavDirection::Down => *selected = (*selected + 1).min(candidates.len() - 1),
            }
        }
    }

    pub fn dismiss(&mut self) {
        self.state = PopupState::Hidden;
    }

    /// True when the shell should not insert a newline for Enter because the
    /// popup will consume it as an accept.
    pub fn swallows_enter(&self) -> bool {
        self.config.swallow_enter && self.is_visible()
    }

    /// Accepts the selected candidate into `line` at `cursor`.
    ///
    /// The scanned partial word is replaced by the candidate; a snippet
    /// candidate is replaced by its body with the marker stripped. The popup
    /// hides either way. Returns `None` (and hides) when nothing is selected
    /// or a snippet body is missing - accept on an invalid selection is a
    /// no-op.
    pub fn accept(&mut self, line: &str, cursor: usize) -> Option<Acceptance> {
        let candidate = match &self.state {
            PopupState::Visible {
                candidates,
                selected,
            } => candidates.get(*selected).cloned(),
            PopupState::Hidden => None,
        };
        self.state = PopupState::Hidden;

        let candidate = candidate?;
        let insert = if candidate.starts_with(SNIPPET_MARKER) {
            self.index.snippet_body(&candidate)?.to_string()
        } else {
            candidate
        };

        let chars: Vec<char> = line.chars().collect();
        let cursor = cursor.min(chars.len());
        let word = word_before_cursor(line, cursor);

        let mut result: String = chars[..word.start].iter().collect();
        result.push_str(&insert);
        let new_cursor = word.start + insert.chars().count();
        result.extend(&chars[cursor..]);

        Some(Acceptance {
            line: result,
            cursor: new_cursor,
        })
    }
}

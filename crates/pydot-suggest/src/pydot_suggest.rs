//! PyDot Suggest - autocomplete for the PyDot editor
//!
//! The pieces, in the order a keystroke flows through them:
//!
//! - [`SuggestionData`] - the static word lists (Python keywords, builtins,
//!   pydot library symbols, common patterns, code snippets), loaded from a
//!   JSON data file with built-in defaults.
//! - [`scan_document`] - identifiers pulled out of the current document text
//!   (class names, function names, assignment targets).
//! - [`SuggestionIndex`] - `suggestions_for(prefix, document_text)`:
//!   case-insensitive prefix matching over every source, deduplicated and
//!   sorted.
//! - [`AutocompleteController`] - the popup state machine: show on a
//!   sufficiently long word with matches, clamp navigation, accept into the
//!   line, dismiss on escape or when matches dry up.
//!
//! Everything is recomputed per keystroke; nothing is cached between calls.

mod controller;
mod document;
mod index;
mod sources;
mod word;

pub use controller::{
    Acceptance, AutocompleteConfig, AutocompleteController, NavDirection, PopupState,
};
pub use document::{DocumentSymbols, scan_document};
pub use index::{SNIPPET_MARKER, SuggestionIndex};
pub use sources::SuggestionData;
pub use word::{WordSpan, is_word_char, word_before_cursor};

#[cfg(test)]
mod tests;

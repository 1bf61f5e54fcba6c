//! PyDot Highlight - Python syntax highlighting using tree-sitter.
//!
//! The editor shell calls [`Highlighter::token_stream`] on every key
//! release: the full document is re-tokenized, previously applied tags are
//! cleared, and the returned spans are applied as display tags. Tree-sitter
//! recovers from malformed and partial input by design, so a half-typed
//! string literal degrades to plain spans instead of an error.
//!
//! Colors resolve through the active [`pydot_theme::Palette`]: each token
//! class maps to a syntax role, and roles missing from the theme's `syntax`
//! mapping fall back to the documented accent colors.

mod colors;
mod highlighter;

pub use colors::{color_for, syntax_role};
pub use highlighter::{HighlightError, Highlighter, Span, TokenClass};

//! Color palettes
//!
//! A palette is immutable once loaded; switching themes replaces the whole
//! value. Every top-level field is required - a palette missing one is a
//! configuration error and fails deserialization. Only the `syntax`
//! sub-mapping is optional: a missing syntax role resolves through the
//! documented accent fallback for that role.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A named set of colors mapped to semantic UI and syntax roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Palette {
    /// Human-readable name shown in theme pickers.
    pub name: String,
    pub bg_primary: String,
    pub bg_secondary: String,
    pub bg_tertiary: String,
    pub bg_accent: String,
    pub text_primary: String,
    pub text_secondary: String,
    pub accent_blue: String,
    pub accent_green: String,
    pub accent_orange: String,
    pub accent_red: String,
    pub border: String,
    /// Per-syntax-role overrides, keyed by [`SyntaxRole::key`].
    #[serde(default)]
    pub syntax: IndexMap<String, String>,
}

/// Semantic color roles for syntax highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxRole {
    Keyword,
    Constant,
    Builtin,
    String,
    Docstring,
    Number,
    Comment,
    Function,
    Class,
    Operator,
    Decorator,
    Variable,
}

impl SyntaxRole {
    /// The key this role uses in a palette's `syntax` mapping.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Constant => "constant",
            Self::Builtin => "builtin",
            Self::String => "string",
            Self::Docstring => "docstring",
            Self::Number => "number",
            Self::Comment => "comment",
            Self::Function => "function",
            Self::Class => "class",
            Self::Operator => "operator",
            Self::Decorator => "decorator",
            Self::Variable => "variable",
        }
    }
}

impl Palette {
    /// Resolves the color for a syntax role.
    ///
    /// Looks the role up in the `syntax` mapping first; when absent, falls
    /// back to the accent color documented for that role (strings fall back
    /// to `accent_green`, keywords to `accent_blue`, and so on). The
    /// fallback chain is total, so resolution never fails.
    pub fn syntax_color(&self, role: SyntaxRole) -> &str {
        if let Some(color) = self.syntax.get(role.key()) {
            return color;
        }
        match role {
            SyntaxRole::Keyword | SyntaxRole::Builtin | SyntaxRole::Function => &self.accent_blue,
            SyntaxRole::Constant
            | SyntaxRole::Number
            | SyntaxRole::Class
            | SyntaxRole::Decorator => &self.accent_orange,
            SyntaxRole::String => &self.accent_green,
            SyntaxRole::Operator => &self.accent_red,
            SyntaxRole::Comment | SyntaxRole::Docstring => &self.text_secondary,
            SyntaxRole::Variable => &self.text_primary,
        }
    }
}

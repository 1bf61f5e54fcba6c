//! Token class to palette color resolution

use pydot_theme::{Palette, SyntaxRole};

use crate::TokenClass;

/// The palette syntax role a token class renders with.
pub fn syntax_role(class: TokenClass) -> SyntaxRole {
    match class {
        TokenClass::Keyword => SyntaxRole::Keyword,
        TokenClass::Builtin => SyntaxRole::Builtin,
        TokenClass::String => SyntaxRole::String,
        TokenClass::Docstring => SyntaxRole::Docstring,
        TokenClass::Comment => SyntaxRole::Comment,
        TokenClass::Number => SyntaxRole::Number,
        TokenClass::Constant => SyntaxRole::Constant,
        TokenClass::Function => SyntaxRole::Function,
        TokenClass::Class => SyntaxRole::Class,
        TokenClass::Decorator => SyntaxRole::Decorator,
        TokenClass::Operator => SyntaxRole::Operator,
        TokenClass::Identifier | TokenClass::Plain => SyntaxRole::Variable,
    }
}

/// Resolves a token class to a concrete color under `palette`.
///
/// Roles missing from the palette's `syntax` mapping fall back to the
/// documented accent colors, so this never fails.
pub fn color_for(class: TokenClass, palette: &Palette) -> &str {
    palette.syntax_color(syntax_role(class))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pydot_theme::ThemeRegistry;

    #[test]
    fn test_every_class_resolves_to_a_color() {
        let registry = ThemeRegistry::builtin();
        let palette = registry.palette("vs_code_dark").unwrap();

        for class in [
            TokenClass::Keyword,
            TokenClass::Builtin,
            TokenClass::String,
            TokenClass::Docstring,
            TokenClass::Comment,
            TokenClass::Number,
            TokenClass::Constant,
            TokenClass::Function,
            TokenClass::Class,
            TokenClass::Decorator,
            TokenClass::Operator,
            TokenClass::Identifier,
            TokenClass::Plain,
        ] {
            assert!(!color_for(class, palette).is_empty());
        }
    }

    #[test]
    fn test_accent_fallback_without_syntax_overrides() {
        // The "midnight" theme has no syntax mapping; string-like tokens
        // fall back to the green accent.
        let registry = ThemeRegistry::builtin();
        let palette = registry.palette("midnight").unwrap();

        assert_eq!(
            color_for(TokenClass::String, palette),
            palette.accent_green.as_str()
        );
        assert_eq!(
            color_for(TokenClass::Keyword, palette),
            palette.accent_blue.as_str()
        );
        assert_eq!(
            color_for(TokenClass::Operator, palette),
            palette.accent_red.as_str()
        );
    }
}

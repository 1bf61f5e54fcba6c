//! Widget styling rules
//!
//! Instead of per-widget-type dispatch, styling is a total mapping from a
//! [`WidgetRole`] to a [`WidgetStyle`] rule derived from the active palette.
//! The shell asks for the rule for a role and applies whichever fields its
//! toolkit understands.

use crate::Palette;

/// The role a widget plays in the UI, independent of any toolkit type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetRole {
    Window,
    Frame,
    Button,
    Label,
    Entry,
    TextArea,
    ListBox,
    Checkbox,
    Combobox,
}

impl WidgetRole {
    pub const ALL: [WidgetRole; 9] = [
        WidgetRole::Window,
        WidgetRole::Frame,
        WidgetRole::Button,
        WidgetRole::Label,
        WidgetRole::Entry,
        WidgetRole::TextArea,
        WidgetRole::ListBox,
        WidgetRole::Checkbox,
        WidgetRole::Combobox,
    ];
}

/// Border treatment for a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relief {
    Flat,
    Solid,
}

/// A styling rule: colors borrowed from the palette plus border treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetStyle<'a> {
    pub background: &'a str,
    pub foreground: Option<&'a str>,
    pub active_background: Option<&'a str>,
    pub active_foreground: Option<&'a str>,
    /// Text caret color for editable widgets.
    pub caret: Option<&'a str>,
    pub selection_background: Option<&'a str>,
    pub selection_foreground: Option<&'a str>,
    pub border_width: u8,
    pub relief: Relief,
}

impl<'a> WidgetStyle<'a> {
    fn plain(background: &'a str) -> Self {
        Self {
            background,
            foreground: None,
            active_background: None,
            active_foreground: None,
            caret: None,
            selection_background: None,
            selection_foreground: None,
            border_width: 0,
            relief: Relief::Flat,
        }
    }
}

/// The styling rule for a widget role under the given palette.
pub fn widget_style(role: WidgetRole, palette: &Palette) -> WidgetStyle<'_> {
    match role {
        WidgetRole::Window => WidgetStyle::plain(&palette.bg_primary),
        WidgetRole::Frame => WidgetStyle::plain(&palette.bg_secondary),
        WidgetRole::Button | WidgetRole::Checkbox => WidgetStyle {
            background: &palette.accent_blue,
            foreground: Some(&palette.text_primary),
            active_background: Some(&palette.bg_accent),
            active_foreground: Some(&palette.text_primary),
            ..WidgetStyle::plain(&palette.accent_blue)
        },
        WidgetRole::Label => WidgetStyle {
            foreground: Some(&palette.text_primary),
            ..WidgetStyle::plain(&palette.bg_secondary)
        },
        WidgetRole::Entry | WidgetRole::Combobox => WidgetStyle {
            background: &palette.bg_tertiary,
            foreground: Some(&palette.text_primary),
            caret: Some(&palette.text_primary),
            selection_background: Some(&palette.accent_blue),
            selection_foreground: Some(&palette.text_primary),
            border_width: 1,
            relief: Relief::Solid,
            ..WidgetStyle::plain(&palette.bg_tertiary)
        },
        WidgetRole::TextArea => WidgetStyle {
            foreground: Some(&palette.text_primary),
            caret: Some(&palette.text_primary),
            selection_background: Some(&palette.accent_blue),
            selection_foreground: Some(&palette.text_primary),
            ..WidgetStyle::plain(&palette.bg_primary)
        },
        WidgetRole::ListBox => WidgetStyle {
            foreground: Some(&palette.text_primary),
            selection_background: Some(&palette.accent_blue),
            selection_foreground: Some(&palette.text_primary),
            ..WidgetStyle::plain(&palette.bg_primary)
        },
    }
}

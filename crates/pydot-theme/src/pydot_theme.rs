//! PyDot Theme - theme registry and color palettes
//!
//! Themes are a flat JSON mapping from theme key to a [`Palette`]: semantic
//! UI colors (`bg_primary`, `accent_blue`, ...) plus an optional `syntax`
//! sub-mapping for per-token-class colors. The registry preserves the
//! declaration order of the file so UIs list themes the way the file does.
//!
//! Styling is expressed as a mapping from [`WidgetRole`] to a
//! [`WidgetStyle`] rule rather than per-widget-type dispatch, so consumers
//! stay decoupled from any particular GUI toolkit.

mod palette;
mod registry;
mod widgets;

pub use palette::{Palette, SyntaxRole};
pub use registry::ThemeRegistry;
pub use widgets::{Relief, WidgetRole, WidgetStyle, widget_style};

//! Starter-file template engine using MiniJinja

use minijinja::Environment;
use pydot_core::{PydotError, Result};
use serde::Serialize;

const MAIN_BASIC: &str = include_str!("../data/templates/main_basic.py.jinja");
const MAIN_WITH_CLASSES: &str = include_str!("../data/templates/main_with_classes.py.jinja");
const GAME: &str = include_str!("../data/templates/game.py.jinja");
const CLASS_FILE: &str = include_str!("../data/templates/class_file.py.jinja");
const TEXT: &str = include_str!("../data/templates/text.py.jinja");
const BUTTON: &str = include_str!("../data/templates/button.py.jinja");

/// Template engine pre-loaded with the embedded starter-file templates.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Creates the engine and registers the embedded templates.
    pub fn new() -> Self {
        let mut env = Environment::new();
        for (name, source) in [
            ("main_basic", MAIN_BASIC),
            ("main_with_classes", MAIN_WITH_CLASSES),
            ("game", GAME),
            ("class_file", CLASS_FILE),
            ("text", TEXT),
            ("button", BUTTON),
        ] {
            env.add_template(name, source)
                .expect("embedded template must parse");
        }
        Self { env }
    }

    /// Renders a named embedded template with a serializable context.
    pub fn render<T: Serialize>(&self, name: &str, context: &T) -> Result<String> {
        let template = self
            .env
            .get_template(name)
            .map_err(|e| PydotError::Template(e.to_string()))?;
        template
            .render(context)
            .map_err(|e| PydotError::Template(e.to_string()))
    }

    /// Renders a one-off template string.
    pub fn render_str<T: Serialize>(&self, template: &str, context: &T) -> Result<String> {
        self.env
            .render_str(template, context)
            .map_err(|e| PydotError::Template(e.to_string()))
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn test_class_file_renders_class_name() {
        let engine = TemplateEngine::new();
        let rendered = engine
            .render("class_file", &context! { class_name => "Player" })
            .unwrap();

        assert!(rendered.contains("class Player:"));
        assert!(rendered.contains("import pygame as pydot"));
    }

    #[test]
    fn test_game_renders_project_name_caption() {
        let engine = TemplateEngine::new();
        let rendered = engine
            .render("game", &context! { project_name => "Space Miner" })
            .unwrap();

        assert!(rendered.contains("pydot.display.set_caption(\"Space Miner\")"));
        assert!(rendered.contains("clock.tick(m.fps)"));
    }

    #[test]
    fn test_unknown_template_is_an_error() {
        let engine = TemplateEngine::new();
        let err = engine
            .render("missing", &context! {})
            .unwrap_err();
        assert!(matches!(err, PydotError::Template(_)));
    }

    #[test]
    fn test_render_str() {
        let engine = TemplateEngine::new();
        let rendered = engine
            .render_str("hello {{ who }}", &context! { who => "world" })
            .unwrap();
        assert_eq!(rendered, "hello world");
    }
}

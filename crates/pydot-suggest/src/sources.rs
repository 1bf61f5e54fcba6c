//! Static suggestion sources
//!
//! The data file is JSON with one key per source list plus a snippet
//! mapping. Every key is optional and individually defaulted, so a partial
//! file still yields the built-in list for the keys it omits. A missing or
//! malformed file falls back to the built-in defaults entirely - the editor
//! session must keep working either way.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Python reserved words. Also used to filter assignment-derived
/// identifiers out of the document scan.
const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class", "continue",
    "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if", "import",
    "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try", "while",
    "with", "yield",
];

const PYTHON_BUILTINS: &[&str] = &[
    "abs", "bool", "dict", "enumerate", "filter", "float", "getattr", "hasattr", "input", "int",
    "isinstance", "len", "list", "map", "max", "min", "open", "print", "range", "round", "set",
    "setattr", "sorted", "str", "sum", "super", "tuple", "type", "zip",
];

/// The pydot game library surface (pygame imported as `pydot`).
const PYDOT_FUNCTIONS: &[&str] = &[
    "pydot.init",
    "pydot.quit",
    "pydot.display.set_mode",
    "pydot.display.set_caption",
    "pydot.display.flip",
    "pydot.event.get",
    "pydot.time.Clock",
    "pydot.image.load",
    "pydot.font.Font",
    "pydot.key.get_pressed",
    "pydot.mouse.get_pos",
    "pydot.sprite.Sprite",
    "pydot.Rect",
    "pydot.Surface",
];

const PYDOT_CONSTANTS: &[&str] = &[
    "pydot.QUIT",
    "pydot.KEYDOWN",
    "pydot.KEYUP",
    "pydot.MOUSEBUTTONDOWN",
    "pydot.MOUSEBUTTONUP",
    "pydot.FULLSCREEN",
    "pydot.RESIZABLE",
    "pydot.K_ESCAPE",
    "pydot.K_SPACE",
    "pydot.K_UP",
    "pydot.K_DOWN",
    "pydot.K_LEFT",
    "pydot.K_RIGHT",
];

const PYDOT_MODULES: &[&str] = &[
    "display", "draw", "event", "font", "image", "key", "mixer", "mouse", "sprite", "time",
    "transform",
];

const COMMON_PATTERNS: &[&str] = &[
    "import pygame as pydot",
    "if __name__ == \"__main__\":",
    "for event in pydot.event.get():",
    "def __init__(self):",
    "while running:",
];

/// Word lists and snippets backing the suggestion index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionData {
    #[serde(default = "default_python_keywords")]
    pub python_keywords: Vec<String>,
    #[serde(default = "default_python_builtins")]
    pub python_builtins: Vec<String>,
    #[serde(default = "default_pydot_functions")]
    pub pydot_functions: Vec<String>,
    #[serde(default = "default_pydot_constants")]
    pub pydot_constants: Vec<String>,
    #[serde(default = "default_pydot_modules")]
    pub pydot_modules: Vec<String>,
    #[serde(default = "default_common_patterns")]
    pub common_patterns: Vec<String>,
    /// Snippet name -> body text (may span multiple lines).
    #[serde(default = "default_code_snippets")]
    pub code_snippets: IndexMap<String, String>,
}

impl Default for SuggestionData {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SuggestionData {
    /// The built-in defaults, used whenever no usable data file is present.
    pub fn builtin() -> Self {
        Self {
            python_keywords: default_python_keywords(),
            python_builtins: default_python_builtins(),
            pydot_functions: default_pydot_functions(),
            pydot_constants: default_pydot_constants(),
            pydot_modules: default_pydot_modules(),
            common_patterns: default_common_patterns(),
            code_snippets: default_code_snippets(),
        }
    }

    /// Loads the data file, falling back to [`SuggestionData::builtin`] when
    /// the file is missing or malformed. Never fails: autocomplete keeps
    /// working with defaults no matter what happened to the file.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(data) => data,
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "malformed suggestion data file, using built-in defaults"
                    );
                    Self::builtin()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no suggestion data file, using built-in defaults");
                Self::builtin()
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "unreadable suggestion data file, using built-in defaults"
                );
                Self::builtin()
            }
        }
    }

    /// All static (non-snippet) source words.
    pub fn static_words(&self) -> impl Iterator<Item = &str> {
        self.python_keywords
            .iter()
            .chain(&self.python_builtins)
            .chain(&self.pydot_functions)
            .chain(&self.pydot_constants)
            .chain(&self.pydot_modules)
            .chain(&self.common_patterns)
            .map(String::as_str)
    }

    /// True if `word` is a reserved Python keyword.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.python_keywords.iter().any(|k| k == word)
    }

    /// Looks up a snippet body by name.
    pub fn snippet_body(&self, name: &str) -> Option<&str> {
        self.code_snippets.get(name).map(String::as_str)
    }
}

fn default_python_keywords() -> Vec<String> {
    PYTHON_KEYWORDS.iter().map(|s| s.to_string()).collect()
}

fn default_python_builtins() -> Vec<String> {
    PYTHON_BUILTINS.iter().map(|s| s.to_string()).collect()
}

fn default_pydot_functions() -> Vec<String> {
    PYDOT_FUNCTIONS.iter().map(|s| s.to_string()).collect()
}

fn default_pydot_constants() -> Vec<String> {
    PYDOT_CONSTANTS.iter().map(|s| s.to_string()).collect()
}

fn default_pydot_modules() -> Vec<String> {
    PYDOT_MODULES.iter().map(|s| s.to_string()).collect()
}

fn default_common_patterns() -> Vec<String> {
    COMMON_PATTERNS.iter().map(|s| s.to_string()).collect()
}

fn default_code_snippets() -> IndexMap<String, String> {
    let mut snippets = IndexMap::new();
    snippets.insert(
        "main_loop".to_string(),
        concat!(
            "running = True\n",
            "while running:\n",
            "    for event in pydot.event.get():\n",
            "        if event.type == pydot.QUIT:\n",
            "            running = False\n",
            "    screen.fill(\"black\")\n",
            "    pydot.display.flip()\n",
            "    clock.tick(60)\n",
        )
        .to_string(),
    );
    snippets.insert(
        "game_class".to_string(),
        concat!(
            "class Game:\n",
            "    def __init__(self):\n",
            "        pass\n",
            "\n",
            "    def update(self):\n",
            "        pass\n",
        )
        .to_string(),
    );
    snippets.insert(
        "event_handler".to_string(),
        concat!(
            "for event in pydot.event.get():\n",
            "    if event.type == pydot.QUIT:\n",
            "        running = False\n",
        )
        .to_string(),
    );
    snippets
}

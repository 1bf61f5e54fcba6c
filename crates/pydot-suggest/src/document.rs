//! Document-derived identifiers
//!
//! Three independent scans over the current document text: `class`
//! declarations, `def` declarations, and simple assignment targets (a name
//! immediately followed by `=`, which excludes `==` comparisons and
//! augmented assignments). Recomputed from the full text on every call.

use once_cell::sync::Lazy;
use regex::Regex;

static CLASS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*class\s+([A-Za-z_]\w*)").expect("class regex"));

static DEF_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*def\s+([A-Za-z_]\w*)").expect("def regex"));

static ASSIGN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*([A-Za-z_]\w*)\s*=(?:[^=]|$)").expect("assign regex"));

/// Identifiers found in a document, by the scan that produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentSymbols {
    pub classes: Vec<String>,
    pub functions: Vec<String>,
    pub assignments: Vec<String>,
}

impl DocumentSymbols {
    pub fn all(&self) -> impl Iterator<Item = &str> {
        self.classes
            .iter()
            .chain(&self.functions)
            .chain(&self.assignments)
            .map(String::as_str)
    }
}

/// Scans `text` for class names, function names and assignment targets.
///
/// Assignment targets that collide with a reserved keyword are dropped;
/// `is_keyword` supplies the reserved set.
pub fn scan_document(text: &str, is_keyword: impl Fn(&str) -> bool) -> DocumentSymbols {
    let mut symbols = DocumentSymbols::default();

    for caps in CLASS_RE.captures_iter(text) {
        push_unique(&mut symbols.classes, &caps[1]);
    }
    for caps in DEF_RE.captures_iter(text) {
        push_unique(&mut symbols.functions, &caps[1]);
    }
    for caps in ASSIGN_RE.captures_iter(text) {
        let name = &caps[1];
        if !is_keyword(name) {
            push_unique(&mut symbols.assignments, name);
        }
    }

    symbols
}

fn push_unique(list: &mut Vec<String>, name: &str) {
    if !list.iter().any(|n| n == name) {
        list.push(name.to_string());
    }
}

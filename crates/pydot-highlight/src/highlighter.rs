//! Python syntax highlighter
//!
//! Parses document text with the tree-sitter Python grammar and maps syntax
//! nodes to token classes. Every call re-tokenizes the full document; the
//! output only depends on the text, so identical text yields identical
//! spans.

use std::collections::HashMap;

use thiserror::Error;
use tree_sitter::{Node, Parser};

/// Builtins recognized by name when an identifier is not otherwise
/// classified.
const PYTHON_BUILTINS: &[&str] = &[
    "abs", "bool", "dict", "enumerate", "filter", "float", "getattr", "hasattr", "input", "int",
    "isinstance", "len", "list", "map", "max", "min", "open", "print", "range", "round", "set",
    "setattr", "sorted", "str", "sum", "super", "tuple", "type", "zip",
];

/// Keywords appear in the Python grammar as anonymous terminal tokens, so
/// they are matched by text rather than node type.
const PYTHON_KEYWORDS: &[&str] = &[
    "and", "as", "assert", "async", "await", "break", "class", "continue", "def", "del", "elif",
    "else", "except", "finally", "for", "from", "global", "if", "import", "in", "is", "lambda",
    "nonlocal", "not", "or", "pass", "raise", "return", "try", "while", "with", "yield",
];

const OPERATORS: &[&str] = &[
    "=", "==", "!=", "<", "<=", ">", ">=", "+", "-", "*", "/", "//", "%", "**", "+=", "-=", "*=",
    "/=", "//=", "%=", "**=", "->", ":=", "&", "|", "^", "~", "<<", ">>",
];

/// A lexer-assigned category for a span of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// Language keywords (def, class, if, ...)
    Keyword,
    /// Built-in functions and types (print, len, ...)
    Builtin,
    /// String literals
    String,
    /// String statements, conventionally docstrings
    Docstring,
    /// Comments
    Comment,
    /// Integer and float literals
    Number,
    /// True / False / None
    Constant,
    /// Function names at their definition
    Function,
    /// Class names at their definition
    Class,
    /// Decorators (@something)
    Decorator,
    /// Operators (=, ==, +, ...)
    Operator,
    /// Other identifiers
    Identifier,
    /// Unclassified text (whitespace, punctuation, error recovery)
    Plain,
}

/// A classified range of text, in byte offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub class: TokenClass,
    pub start: usize,
    pub end: usize,
}

#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("failed to load Python grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),
}

/// Python syntax highlighter.
///
/// The parser is reusable; create one `Highlighter` and call it per edit
/// rather than constructing a parser per call.
pub struct Highlighter {
    parser: Parser,
    node_type_map: HashMap<&'static str, TokenClass>,
}

impl Highlighter {
    /// Initializes the tree-sitter parser with the Python grammar.
    pub fn new() -> Result<Self, HighlightError> {
        let mut parser = Parser::new();
        let language = tree_sitter::Language::new(tree_sitter_python::LANGUAGE);
        parser.set_language(&language)?;

        // Named node types with a fixed classification. Strings are handled
        // as whole literals (no recursion into string_content/escapes), and
        // `true`/`false`/`none` are their own named nodes in this grammar.
        let mut node_type_map = HashMap::new();
        node_type_map.insert("comment", TokenClass::Comment);
        node_type_map.insert("string", TokenClass::String);
        node_type_map.insert("concatenated_string", TokenClass::String);
        node_type_map.insert("integer", TokenClass::Number);
        node_type_map.insert("float", TokenClass::Number);
        node_type_map.insert("true", TokenClass::Constant);
        node_type_map.insert("false", TokenClass::Constant);
        node_type_map.insert("none", TokenClass::Constant);
        node_type_map.insert("decorator", TokenClass::Decorator);
        node_type_map.insert("ellipsis", TokenClass::Constant);

        Ok(Self {
            parser,
            node_type_map,
        })
    }

    /// Classified spans for `text`, sorted by start with overlaps merged.
    ///
    /// Only classified ranges are returned; use [`Self::token_stream`] for a
    /// gap-free covering of the whole text.
    pub fn highlight(&mut self, text: &str) -> Vec<Span> {
        let tree = match self.parser.parse(text, None) {
            Some(tree) => tree,
            None => return Vec::new(),
        };

        let mut spans = Vec::new();
        self.collect_spans(tree.root_node(), text, &mut spans);
        spans.sort_by_key(|s| s.start);
        Self::merge_overlapping(&spans)
    }

    /// Like [`Self::highlight`], but gaps between classified spans are
    /// filled with [`TokenClass::Plain`] so the sequence covers the full
    /// text with no gaps. This is the shape tag application consumes, and it
    /// holds for malformed input too: whatever the grammar could not parse
    /// comes back as plain text.
    pub fn token_stream(&mut self, text: &str) -> Vec<Span> {
        let classified = self.highlight(text);
        let mut stream = Vec::with_capacity(classified.len() * 2);
        let mut pos = 0;

        for span in classified {
            if span.start > pos {
                stream.push(Span {
                    class: TokenClass::Plain,
                    start: pos,
                    end: span.start,
                });
            }
            pos = span.end;
            stream.push(span);
        }
        if pos < text.len() {
            stream.push(Span {
                class: TokenClass::Plain,
                start: pos,
                end: text.len(),
            });
        }

        stream
    }

    /// Recursively classify syntax nodes.
    ///
    /// Once a node is classified we do not recurse into its children - their
    /// ranges would overlap the parent's and confuse the merge step.
    fn collect_spans(&self, node: Node, text: &str, spans: &mut Vec<Span>) {
        let node_kind = node.kind();

        let class = if node_kind == "string" && Self::is_string_statement(&node) {
            Some(TokenClass::Docstring)
        } else if let Some(&mapped) = self.node_type_map.get(node_kind) {
            Some(mapped)
        } else if node_kind == "identifier" {
            Some(self.classify_identifier(&node, text))
        } else {
            None
        };

        if let Some(class) = class {
            spans.push(Span {
                class,
                start: node.start_byte(),
                end: node.end_byte(),
            });
            return;
        }

        // Keywords and operators are anonymous terminal tokens in the
        // Python grammar, so they are not caught by the node_type_map.
        if !node.is_named() && node.child_count() == 0 {
            let token = &text[node.start_byte()..node.end_byte()];
            let class = if PYTHON_KEYWORDS.contains(&token) {
                Some(TokenClass::Keyword)
            } else if OPERATORS.contains(&token) {
                Some(TokenClass::Operator)
            } else {
                None
            };
            if let Some(class) = class {
                spans.push(Span {
                    class,
                    start: node.start_byte(),
                    end: node.end_byte(),
                });
            }
            return;
        }

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.collect_spans(child, text, spans);
        }
    }

    /// A string that is itself a statement - by convention, a docstring.
    fn is_string_statement(node: &Node) -> bool {
        node.parent()
            .is_some_and(|parent| parent.kind() == "expression_statement")
    }

    /// Identifiers get special classes at definition sites and for known
    /// builtins; everything else is a plain identifier.
    fn classify_identifier(&self, node: &Node, text: &str) -> TokenClass {
        if let Some(parent) = node.parent() {
            let name_field = parent.child_by_field_name("name");
            if name_field.is_some_and(|name| name.id() == node.id()) {
                match parent.kind() {
                    "function_definition" => return TokenClass::Function,
                    "class_definition" => return TokenClass::Class,
                    _ => {}
                }
            }
        }

        let name = &text[node.start_byte()..node.end_byte()];
        if PYTHON_BUILTINS.contains(&name) {
            TokenClass::Builtin
        } else {
            TokenClass::Identifier
        }
    }

    /// Merge overlapping span ranges; the earlier span takes precedence.
    fn merge_overlapping(spans: &[Span]) -> Vec<Span> {
        if spans.is_empty() {
            return Vec::new();
        }

        let mut result = Vec::new();
        let mut current = spans[0].clone();

        for next in spans.iter().skip(1) {
            if next.start >= current.end {
                result.push(current);
                current = next.clone();
            } else if next.end > current.end {
                current.end = next.end;
            }
        }

        result.push(current);
        result
    }
}

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A labeled span of one line.
///
/// `position` is the byte offset of the span inside its line and `lineno` is
/// the 0-based index of that line. Tokens produced by a
/// [`CompositeRule`](super::rule::CompositeRule) also list the sub-tokens the
/// match was decomposed into; for every other token `parts` is empty.
///
/// Equality and hashing only look at the identifier, content, position and
/// line number; `parts` is carried along but never compared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub identifier: String,
    pub content: String,
    pub position: usize,
    pub lineno: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parts: Vec<Token>,
}

impl Token {
    pub fn new(
        identifier: impl Into<String>,
        content: impl Into<String>,
        position: usize,
        lineno: usize,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            content: content.into(),
            position,
            lineno,
            parts: Vec::new(),
        }
    }

    pub fn with_parts(mut self, parts: Vec<Token>) -> Self {
        self.parts = parts;
        self
    }

    /// Byte offset right after the token inside its line.
    pub fn end(&self) -> usize {
        self.position + self.content.len()
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
            && self.content == other.content
            && self.position == other.position
            && self.lineno == other.lineno
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identifier.hash(state);
        self.content.hash(state);
        self.position.hash(state);
        self.lineno.hash(state);
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token({:?}, {:?}, {}, {})",
            self.identifier, self.content, self.position, self.lineno
        )
    }
}

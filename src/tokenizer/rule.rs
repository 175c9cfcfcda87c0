//! # Lexing Rules
//!
//! A rule pairs an identifier with a [`Pattern`]. The lexer treats every
//! rule the same way through the [`Matcher`] trait: given a line and a
//! position it either produces a token starting at that position or
//! nothing.
//!
//! Two kinds of rules are provided:
//!
//! * [`Rule`]: the matched text becomes one token labeled with the rule's
//!   identifier.
//! * [`CompositeRule`]: like [`Rule`], but the matched text is further
//!   decomposed into sub-tokens by an ordered list of part rules. The
//!   composite token is still reported once, with the full span and the
//!   outer identifier; the sub-tokens are attached as
//!   [`Token::parts`](super::token::Token::parts).
//!
//! ## Decomposition
//!
//! Parts are walked once, in declaration order, starting at offset 0 of the
//! matched text. A part that matches at the current offset is recorded and
//! the offset moves past it; a part that does not match is skipped. When the
//! walk ends before the whole matched text is covered, the composite rule
//! does not match at all and the lexer goes on with the next rule.

use std::fmt::Debug;

use super::{pattern::Pattern, token::Token};
use crate::error::LexResult;

/// Anything that can classify text starting at a fixed position.
pub trait Matcher: Debug + Send + Sync {
    fn identifier(&self) -> &str;

    /// Attempts a match anchored at `position` of `line`.
    fn match_at(&self, line: &str, position: usize, lineno: usize) -> Option<Token>;
}

#[derive(Debug, Clone)]
pub struct Rule {
    identifier: String,
    pattern: Pattern,
}

impl Rule {
    pub fn new(identifier: impl Into<String>, pattern: &str) -> LexResult<Self> {
        Ok(Self::from_pattern(identifier, Pattern::new(pattern)?))
    }

    pub fn from_pattern(identifier: impl Into<String>, pattern: Pattern) -> Self {
        Self {
            identifier: identifier.into(),
            pattern,
        }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }
}

impl Matcher for Rule {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn match_at(&self, line: &str, position: usize, lineno: usize) -> Option<Token> {
        let end = self.pattern.match_at(line, position)?;
        Some(Token::new(
            self.identifier.as_str(),
            &line[position..end],
            position,
            lineno,
        ))
    }
}

#[derive(Debug, Clone)]
pub struct CompositeRule {
    identifier: String,
    pattern: Pattern,
    parts: Vec<Rule>,
}

impl CompositeRule {
    pub fn new(identifier: impl Into<String>, pattern: &str, parts: Vec<Rule>) -> LexResult<Self> {
        Ok(Self {
            identifier: identifier.into(),
            pattern: Pattern::new(pattern)?,
            parts,
        })
    }

    pub fn parts(&self) -> &[Rule] {
        &self.parts
    }

    fn decompose(&self, content: &str, position: usize, lineno: usize) -> Option<Vec<Token>> {
        let mut offset = 0;
        let mut tokens = Vec::new();

        for part in &self.parts {
            if offset == content.len() {
                break;
            }
            if let Some(mut token) = part.match_at(content, offset, lineno) {
                offset = token.end();
                token.position += position;
                tokens.push(token);
            }
        }

        if offset < content.len() {
            tracing::trace!(
                identifier = %self.identifier,
                uncovered = &content[offset..],
                "parts do not cover the match"
            );
            return None;
        }

        Some(tokens)
    }
}

impl Matcher for CompositeRule {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn match_at(&self, line: &str, position: usize, lineno: usize) -> Option<Token> {
        let end = self.pattern.match_at(line, position)?;
        let content = &line[position..end];
        let parts = self.decompose(content, position, lineno)?;
        Some(Token::new(self.identifier.as_str(), content, position, lineno).with_parts(parts))
    }
}

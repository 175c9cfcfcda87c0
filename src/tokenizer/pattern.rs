//! # Anchored Pattern Matching
//!
//! Rules classify text with regular expressions, but unlike a regular
//! search, a rule must match starting exactly at the scan position: the
//! lexer never skips ahead looking for a later match.
//!
//! [`Pattern`] compiles the expression once and runs anchored searches
//! against the whole line restricted to `position..`, so assertions such as
//! `\b` still look at the characters before the scan position.
//!
//! Matching is delegated to `regex_automata`'s meta engine, which has no
//! catastrophic backtracking; search time is linear in the searched text.

use regex_automata::{meta::Regex, Anchored, Input};

use crate::error::{Error, LexResult};

/// A compiled regular expression that only matches at a given offset.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    pub fn new(source: &str) -> LexResult<Self> {
        let regex = Regex::new(source).map_err(|e| Error::InvalidPattern {
            pattern: source.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns the end offset of a match starting exactly at `position`.
    ///
    /// An empty match counts as no match, so a rule can never keep the
    /// scan position in place.
    pub fn match_at(&self, haystack: &str, position: usize) -> Option<usize> {
        if position > haystack.len() {
            return None;
        }
        let input = Input::new(haystack)
            .range(position..)
            .anchored(Anchored::Yes);
        let found = self.regex.search(&input)?;
        if found.end() == position {
            tracing::trace!(pattern = %self.source, position, "ignoring empty match");
            return None;
        }
        Some(found.end())
    }
}

//! # linelex: line-oriented rule-table lexing
//!
//! `linelex` splits text into lines of labeled tokens. The caller supplies
//! an ordered list of identifier/pattern rules; the first rule that matches
//! at a position wins. Whitespace can be skipped, characters no rule covers
//! can be gathered into synthetic tokens, and otherwise the first
//! unclassifiable character aborts lexing with an error pointing at it.
//!
//! * Core types and the scanning loop live in [`tokenizer`].
//! * Rule tables can be loaded from JSON through [`config`].
//! * Errors are collected in [`error`].
//!
//! ```rust
//! use linelex::{Lexer, Token};
//!
//! let lexer = Lexer::builder()
//!     .rule("number", r"[0-9]+")?
//!     .rule("letters", r"[a-z]+")?
//!     .unmatched_identifier("unmatched")
//!     .build();
//!
//! assert_eq!(
//!     lexer.lex("ab#1")?,
//!     vec![vec![
//!         Token::new("letters", "ab", 0, 0),
//!         Token::new("unmatched", "#", 2, 0),
//!         Token::new("number", "1", 3, 0),
//!     ]]
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod error;
pub mod tokenizer;

// Re-exports
pub use config::{LexerConfig, RuleConfig};
pub use error::*;
pub use tokenizer::{
    error::LexError,
    lexer::{Lexer, LexerBuilder},
    pattern::Pattern,
    rule::{CompositeRule, Matcher, Rule},
    token::Token,
};

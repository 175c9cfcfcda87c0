//! # Tokenizer Component
//!
//! The tokenizer turns text into lines of labeled tokens using an ordered
//! table of regular-expression rules.
//!
//! ## Matching Model
//!
//! Each line is scanned left to right. At every position:
//!
//! 1. The rules are tried in declaration order; the first rule matching
//!    exactly at the position emits a token and the scan moves past it.
//! 2. Otherwise, if whitespace skipping is enabled, one whitespace character
//!    is dropped.
//! 3. Otherwise, if an unmatched identifier is configured, the character is
//!    added to the current unmatched run.
//! 4. Otherwise lexing fails with [`LexError::UnmatchedText`](error::LexError::UnmatchedText).
//!
//! Unmatched runs are emitted as a single token once a rule matches, the
//! line ends or whitespace is skipped.
//!
//! ## Component Structure
//!
//! * [`token`]: the [`Token`](token::Token) record
//! * [`lines`]: splitting text into lines
//! * [`pattern`]: anchored regular-expression matching
//! * [`rule`]: plain and decomposing rules behind the [`Matcher`](rule::Matcher) trait
//! * [`whitespace`]: whitespace skipping
//! * [`lexer`]: the scanning loop and its builder
//! * [`error`]: the unmatched-text error and its caret rendering
//!
//! ## Usage Example
//!
//! ```rust
//! use linelex::tokenizer::{lexer::Lexer, token::Token};
//!
//! fn lex_example() -> Result<Vec<Vec<Token>>, Box<dyn std::error::Error>> {
//!     let lexer = Lexer::builder()
//!         .rule("identifier", r"[a-zA-Z_]+")?
//!         .rule("number", r"[1-9][0-9]*")?
//!         .rule("lpar", r"\(")?
//!         .rule("rpar", r"\)")?
//!         .skip_whitespace(true)
//!         .build();
//!
//!     Ok(lexer.lex("crop ( 20 )\nresize(40)")?)
//! }
//! # assert_eq!(lex_example().unwrap().len(), 2);
//! ```

pub mod error;
pub mod lexer;
pub mod lines;
pub mod pattern;
pub mod rule;
mod state;
pub mod token;
pub mod whitespace;

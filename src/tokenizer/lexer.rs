use super::{
    error::LexError,
    lines::split_lines,
    rule::{CompositeRule, Matcher, Rule},
    state::LexingState,
    token::Token,
    whitespace::skip_whitespace,
};
use crate::error::LexResult;

/// Splits text into lines of labeled tokens using an ordered rule table.
///
/// At every position the rules are tried in declaration order and the first
/// one that matches wins, regardless of how long the other matches would
/// be. A `Lexer` is immutable once built and can be shared between threads;
/// each call to [`Lexer::lex`] keeps its own state.
#[derive(Debug, Default)]
pub struct Lexer {
    rules: Vec<Box<dyn Matcher>>,
    skip_whitespace: bool,
    unmatched_identifier: Option<String>,
}

impl Lexer {
    pub fn new(rules: Vec<Box<dyn Matcher>>) -> Self {
        Self {
            rules,
            ..Default::default()
        }
    }

    pub fn builder() -> LexerBuilder {
        LexerBuilder::default()
    }

    pub fn rules(&self) -> &[Box<dyn Matcher>] {
        &self.rules
    }

    pub fn skips_whitespace(&self) -> bool {
        self.skip_whitespace
    }

    pub fn unmatched_identifier(&self) -> Option<&str> {
        self.unmatched_identifier.as_deref()
    }

    /// Lexes `text` line by line.
    ///
    /// Lines end at `\n`, `\r\n`, `\r` or any other terminator listed in
    /// [`lines`](super::lines); a terminator at the very end of the text does
    /// not start another line. The outer vector is indexed by line number,
    /// and an empty line yields an empty token list.
    ///
    /// Fails on the first character that no rule matches, unless whitespace
    /// skipping or unmatched accumulation takes care of it.
    #[tracing::instrument(level = "debug", skip(self, text), fields(rules = self.rules.len()))]
    pub fn lex(&self, text: &str) -> Result<Vec<Vec<Token>>, LexError> {
        let mut state = LexingState::new(self.unmatched_identifier.as_deref());

        for (lineno, line) in split_lines(text).enumerate() {
            self.lex_line(&mut state, line, lineno)?;
            state.end_line();
        }

        Ok(state.finish())
    }

    fn lex_line(
        &self,
        state: &mut LexingState<'_>,
        line: &str,
        lineno: usize,
    ) -> Result<(), LexError> {
        let mut position = 0;

        while position < line.len() {
            if let Some(token) = self.match_rules(line, position, lineno) {
                position = token.end();
                state.push(token);
                continue;
            }

            if self.skip_whitespace {
                if let Some(width) = skip_whitespace(line, position) {
                    state.break_run();
                    position += width;
                    continue;
                }
            }

            match (self.unmatched_identifier.is_some(), line[position..].chars().next()) {
                (true, Some(c)) => {
                    state.push_unmatched(c, position, lineno);
                    position += c.len_utf8();
                }
                _ => {
                    let error = LexError::unmatched_text(line, position, lineno);
                    tracing::debug!("{}", error);
                    return Err(error);
                }
            }
        }

        Ok(())
    }

    /// First rule token that starts at `position` and moves past it.
    ///
    /// Custom matchers may hand back tokens that would not move the scan
    /// forward; those count as no match and the next rule gets its turn.
    fn match_rules(&self, line: &str, position: usize, lineno: usize) -> Option<Token> {
        self.rules.iter().find_map(|rule| {
            let token = rule.match_at(line, position, lineno)?;
            let advances = token.position == position
                && token.end() > position
                && line.is_char_boundary(token.end());
            if !advances {
                tracing::warn!(
                    rule = rule.identifier(),
                    position,
                    "ignoring token {} that does not advance the scan",
                    token
                );
                return None;
            }
            Some(token)
        })
    }
}

/// Incremental construction of a [`Lexer`].
///
/// ```
/// # use linelex::tokenizer::lexer::Lexer;
/// let lexer = Lexer::builder()
///     .rule("number", r"[0-9]+")?
///     .rule("word", r"[a-z]+")?
///     .skip_whitespace(true)
///     .build();
/// let lines = lexer.lex("abc 12")?;
/// assert_eq!(lines[0].len(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default)]
pub struct LexerBuilder {
    rules: Vec<Box<dyn Matcher>>,
    skip_whitespace: bool,
    unmatched_identifier: Option<String>,
}

impl LexerBuilder {
    /// Appends a plain rule compiled from `pattern`.
    pub fn rule(self, identifier: impl Into<String>, pattern: &str) -> LexResult<Self> {
        Ok(self.matcher(Rule::new(identifier, pattern)?))
    }

    /// Appends a rule whose matches are decomposed by `parts`.
    pub fn composite(
        self,
        identifier: impl Into<String>,
        pattern: &str,
        parts: Vec<Rule>,
    ) -> LexResult<Self> {
        Ok(self.matcher(CompositeRule::new(identifier, pattern, parts)?))
    }

    pub fn matcher(mut self, matcher: impl Matcher + 'static) -> Self {
        self.rules.push(Box::new(matcher));
        self
    }

    pub fn skip_whitespace(mut self, skip: bool) -> Self {
        self.skip_whitespace = skip;
        self
    }

    pub fn unmatched_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.unmatched_identifier = Some(identifier.into());
        self
    }

    pub fn build(self) -> Lexer {
        Lexer {
            rules: self.rules,
            skip_whitespace: self.skip_whitespace,
            unmatched_identifier: self.unmatched_identifier,
        }
    }
}

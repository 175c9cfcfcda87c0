use super::token::Token;

/// Characters that matched no rule, waiting to be emitted as one token.
#[derive(Debug)]
struct UnmatchedRun {
    content: String,
    position: usize,
    lineno: usize,
}

/// Per-call bookkeeping of [`Lexer::lex`](super::lexer::Lexer::lex).
///
/// Holds the tokens of the line being scanned, the finished lines and the
/// pending unmatched run. The run is flushed before any matched token is
/// pushed and whenever a line is closed, so a run never crosses a matched
/// token or a line boundary.
#[derive(Debug)]
pub(crate) struct LexingState<'a> {
    unmatched_identifier: Option<&'a str>,
    line_tokens: Vec<Token>,
    lines: Vec<Vec<Token>>,
    unmatched: Option<UnmatchedRun>,
}

impl<'a> LexingState<'a> {
    pub(crate) fn new(unmatched_identifier: Option<&'a str>) -> Self {
        Self {
            unmatched_identifier,
            line_tokens: Vec::new(),
            lines: Vec::new(),
            unmatched: None,
        }
    }

    pub(crate) fn push(&mut self, token: Token) {
        self.flush_unmatched();
        tracing::trace!(%token, "matched");
        self.line_tokens.push(token);
    }

    pub(crate) fn push_unmatched(&mut self, c: char, position: usize, lineno: usize) {
        self.unmatched
            .get_or_insert_with(|| UnmatchedRun {
                content: String::new(),
                position,
                lineno,
            })
            .content
            .push(c);
    }

    /// Ends the pending unmatched run, e.g. at skipped whitespace.
    pub(crate) fn break_run(&mut self) {
        self.flush_unmatched();
    }

    /// Closes the current line and starts an empty one.
    pub(crate) fn end_line(&mut self) {
        self.flush_unmatched();
        self.lines.push(std::mem::take(&mut self.line_tokens));
    }

    pub(crate) fn finish(mut self) -> Vec<Vec<Token>> {
        self.flush_unmatched();
        if !self.line_tokens.is_empty() {
            self.lines.push(self.line_tokens);
        }
        self.lines
    }

    fn flush_unmatched(&mut self) {
        let Some(run) = self.unmatched.take() else {
            return;
        };
        // Runs only start when an identifier is configured.
        let Some(identifier) = self.unmatched_identifier else {
            return;
        };
        let token = Token::new(identifier, run.content, run.position, run.lineno);
        tracing::trace!(%token, "flushed unmatched run");
        self.line_tokens.push(token);
    }
}

use thiserror::Error;

/// Raised when no rule, no whitespace skip and no unmatched accumulation
/// applies at a position. Lexing stops at the first such position.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error(
        "Unmatched text at line {lineno} and position {position}:\n{line}\n{}",
        pointer(.line, .position)
    )]
    UnmatchedText {
        line: String,
        position: usize,
        lineno: usize,
    },
}

impl LexError {
    pub fn unmatched_text(line: impl Into<String>, position: usize, lineno: usize) -> Self {
        LexError::UnmatchedText {
            line: line.into(),
            position,
            lineno,
        }
    }

    pub fn line(&self) -> &str {
        match self {
            LexError::UnmatchedText { line, .. } => line,
        }
    }

    pub fn position(&self) -> usize {
        match self {
            LexError::UnmatchedText { position, .. } => *position,
        }
    }

    pub fn lineno(&self) -> usize {
        match self {
            LexError::UnmatchedText { lineno, .. } => *lineno,
        }
    }

    /// Multi-line message with a caret under the failing column.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

// Tabs are kept so the caret lines up however the terminal expands them.
fn pointer(line: &str, position: &usize) -> String {
    let prefix = line.get(..*position).unwrap_or(line);
    let mut pointer: String = prefix
        .chars()
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect();
    pointer.push('^');
    pointer
}

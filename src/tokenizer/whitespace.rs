//! # Whitespace Skipping
//!
//! When a lexer is configured with `skip_whitespace`, a character that no
//! rule matches is dropped silently if it is whitespace. Whitespace is never
//! accumulated into an unmatched token and never produces a token of its
//! own; rules that match whitespace explicitly still take precedence.
//!
//! ## Whitespace Class
//!
//! A character counts as whitespace when it has the Unicode `White_Space`
//! property, the same class regular expressions use for `\s`. Line
//! terminators never reach this point since lines are split on them first.

/// Returns the byte width of the whitespace character at `position`, if any.
///
/// Only a single character is consumed so that the lexer retries its rules
/// right after it.
///
/// # Examples
///
/// ```
/// # use linelex::tokenizer::whitespace::skip_whitespace;
/// assert_eq!(skip_whitespace("a \tb", 1), Some(1));
/// assert_eq!(skip_whitespace("a \tb", 2), Some(1));
/// assert_eq!(skip_whitespace("a \tb", 0), None);
/// ```
pub fn skip_whitespace(line: &str, position: usize) -> Option<usize> {
    line.get(position..)?
        .chars()
        .next()
        .filter(|c| c.is_whitespace())
        .map(char::len_utf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace() {
        assert_eq!(skip_whitespace("  x", 0), Some(1));
        assert_eq!(skip_whitespace("\tx", 0), Some(1));
        assert_eq!(skip_whitespace("x\r", 1), Some(1));
        assert_eq!(skip_whitespace("x\u{3000}", 1), Some(3));
    }

    #[test]
    fn test_error() {
        assert_eq!(skip_whitespace("hello", 0), None);
        assert_eq!(skip_whitespace("hello", 5), None);
        assert_eq!(skip_whitespace("hello", 9), None);
    }
}

//! Line splitting.
//!
//! Lines end at any of `\n`, `\r\n`, `\r`, vertical tab, form feed, the
//! file/group/record separators (`\x1c`..`\x1e`), next line (`\u{85}`),
//! line separator (`\u{2028}`) and paragraph separator (`\u{2029}`). A
//! terminator at the very end of the text does not start another line, so
//! empty text has no lines at all.

/// Returns true for characters that end a line.
pub fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Iterator over the lines of a text, without their terminators.
///
/// ```
/// # use linelex::tokenizer::lines::split_lines;
/// let lines: Vec<&str> = split_lines("a\rb\u{2028}c\r\n").collect();
/// assert_eq!(lines, vec!["a", "b", "c"]);
/// ```
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
}

pub fn split_lines(text: &str) -> Lines<'_> {
    Lines { rest: text }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let Some((end, c)) = self.rest.char_indices().find(|&(_, c)| is_line_break(c)) else {
            let line = self.rest;
            self.rest = "";
            return Some(line);
        };

        let line = &self.rest[..end];
        let mut next = end + c.len_utf8();
        if c == '\r' && self.rest[next..].starts_with('\n') {
            next += 1;
        }
        self.rest = &self.rest[next..];
        Some(line)
    }
}

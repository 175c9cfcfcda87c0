//! Property-based tests for the scanning loop.

mod common;

use common::SKIPPING_CALL_LEXER;
use linelex::{tokenizer::lines::split_lines, Lexer, Token};
use proptest::prelude::*;

fn words_lexer() -> Lexer {
    Lexer::builder()
        .rule("word", r"[a-z]+")
        .unwrap()
        .rule("number", r"[0-9]+")
        .unwrap()
        .rule("space", r" +")
        .unwrap()
        .rule("punct", r"[,;()]")
        .unwrap()
        .build()
}

/// Lines made only of characters the words lexer covers.
fn covered_text() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z0-9 ,;()]{0,30}", 0..5).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn test_tokens_reconstruct_lines(text in covered_text()) {
        let lines = words_lexer().lex(&text).unwrap();
        let expected: Vec<&str> = split_lines(&text).collect();
        prop_assert_eq!(lines.len(), expected.len());

        for (lineno, (tokens, line)) in lines.iter().zip(expected).enumerate() {
            let joined: String = tokens.iter().map(|t| t.content.as_str()).collect();
            prop_assert_eq!(joined.as_str(), line);
            prop_assert!(tokens.iter().all(|t| t.lineno == lineno));
        }
    }

    #[test]
    fn test_skipped_whitespace_fills_gaps(line in "[a-z(),;1-9 \t]{0,40}") {
        let tokens = SKIPPING_CALL_LEXER.lex(&line).unwrap();
        let mut rebuilt = String::new();
        for token in tokens.iter().flatten() {
            prop_assert!(line[rebuilt.len()..token.position].chars().all(char::is_whitespace));
            rebuilt.push_str(&line[rebuilt.len()..token.position]);
            rebuilt.push_str(&token.content);
        }
        prop_assert!(line[rebuilt.len()..].chars().all(char::is_whitespace));
    }

    #[test]
    fn test_earlier_rule_always_wins(line in "[ab]{1,20}") {
        let lexer = Lexer::builder()
            .rule("single", r"[ab]")
            .unwrap()
            .rule("run", r"[ab]+")
            .unwrap()
            .build();
        let tokens = lexer.lex(&line).unwrap();
        prop_assert_eq!(tokens[0].len(), line.len());
        prop_assert!(tokens[0].iter().all(|t| t.identifier == "single"));
    }

    #[test]
    fn test_lexing_is_idempotent(text in covered_text()) {
        let lexer = words_lexer();
        prop_assert_eq!(lexer.lex(&text).unwrap(), lexer.lex(&text).unwrap());
    }

    #[test]
    fn test_unmatched_runs_are_maximal(line in "[a-z#]{0,30}") {
        let lexer = Lexer::builder()
            .rule("word", r"[a-z]+")
            .unwrap()
            .unmatched_identifier("unmatched")
            .build();
        let lines = lexer.lex(&line).unwrap();
        let tokens: Vec<&Token> = lines.iter().flatten().collect();

        let runs = line.split(|c: char| c != '#').filter(|run| !run.is_empty()).count();
        let unmatched: Vec<&&Token> = tokens.iter().filter(|t| t.identifier == "unmatched").collect();
        prop_assert_eq!(unmatched.len(), runs);

        for token in unmatched {
            prop_assert!(token.content.chars().all(|c| c == '#'));
            prop_assert!(token.position == 0 || &line[token.position - 1..token.position] != "#");
            prop_assert!(!line[token.end()..].starts_with('#'));
        }
    }
}

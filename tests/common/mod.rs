#![allow(dead_code)]

use lazy_static::lazy_static;
use linelex::{Lexer, LexerBuilder};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[ctor::ctor]
fn init_tests() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Rules for `name ( 1, 2 ) ;` style calls, without any whitespace rule.
pub fn call_rules() -> LexerBuilder {
    Lexer::builder()
        .rule("identifier", r"[a-zA-Z_][a-zA-Z_]*")
        .unwrap()
        .rule("lpar", r"\(")
        .unwrap()
        .rule("number", r"[1-9][0-9]*")
        .unwrap()
        .rule("rpar", r"\)")
        .unwrap()
        .rule("comma", r",")
        .unwrap()
        .rule("semi", r";")
        .unwrap()
}

lazy_static! {
    pub static ref CALL_LEXER: Lexer = call_rules().rule("space", r" ").unwrap().build();
    pub static ref SKIPPING_CALL_LEXER: Lexer = call_rules().skip_whitespace(true).build();
}

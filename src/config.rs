//! Declarative lexer definitions.
//!
//! A [`LexerConfig`] describes the rule table and flags of a [`Lexer`] as
//! plain data, so rule tables can live in JSON files next to the text they
//! classify:
//!
//! ```json
//! {
//!   "rules": [
//!     { "identifier": "number", "pattern": "[0-9]+" },
//!     {
//!       "identifier": "call",
//!       "pattern": "[a-z]+\\(\\)",
//!       "parts": [
//!         { "identifier": "name", "pattern": "[a-z]+" },
//!         { "identifier": "parens", "pattern": "\\(\\)" }
//!       ]
//!     }
//!   ],
//!   "skip_whitespace": true,
//!   "unmatched_identifier": "unknown"
//! }
//! ```
//!
//! A rule with `parts` becomes a [`CompositeRule`]; parts themselves must be
//! plain rules.

use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

use crate::{
    error::{Error, LexResult},
    tokenizer::{
        lexer::Lexer,
        rule::{CompositeRule, Rule},
    },
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LexerConfig {
    pub rules: Vec<RuleConfig>,

    #[serde(default)]
    pub skip_whitespace: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unmatched_identifier: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    pub identifier: String,
    pub pattern: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parts: Vec<RuleConfig>,
}

impl RuleConfig {
    pub fn new(identifier: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            pattern: pattern.into(),
            parts: Vec::new(),
        }
    }

    fn to_rule(&self) -> LexResult<Rule> {
        if !self.parts.is_empty() {
            return Err(Error::config(format!(
                "rule `{}`: parts cannot have parts of their own",
                self.identifier
            )));
        }
        Rule::new(self.identifier.as_str(), &self.pattern)
    }
}

impl LexerConfig {
    /// Reads a JSON lexer definition.
    pub fn from_file<P: AsRef<Path>>(path: P) -> LexResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            Error::config(format!("Failed to open lexer config {}: {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| Error::config(format!("Failed to parse lexer config: {}", e)))?;
        tracing::debug!(path = %path.display(), rules = config.rules.len(), "lexer config loaded");
        Ok(config)
    }

    pub fn from_json(s: &str) -> LexResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| Error::config(format!("Failed to parse lexer config: {}", e)))
    }

    /// Compiles every pattern and assembles the lexer.
    pub fn build(&self) -> LexResult<Lexer> {
        let mut builder = Lexer::builder().skip_whitespace(self.skip_whitespace);
        if let Some(identifier) = &self.unmatched_identifier {
            builder = builder.unmatched_identifier(identifier.as_str());
        }

        for rule in &self.rules {
            builder = if rule.parts.is_empty() {
                builder.matcher(rule.to_rule()?)
            } else {
                let parts = rule
                    .parts
                    .iter()
                    .map(RuleConfig::to_rule)
                    .collect::<LexResult<Vec<_>>>()?;
                builder.matcher(CompositeRule::new(
                    rule.identifier.as_str(),
                    &rule.pattern,
                    parts,
                )?)
            };
        }

        Ok(builder.build())
    }
}

impl TryFrom<&LexerConfig> for Lexer {
    type Error = Error;

    fn try_from(config: &LexerConfig) -> Result<Self, Self::Error> {
        config.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::token::Token;

    const CONFIG: &str = r#"{
        "rules": [
            { "identifier": "number", "pattern": "[0-9]+" },
            {
                "identifier": "call",
                "pattern": "[a-z]+\\(\\)",
                "parts": [
                    { "identifier": "name", "pattern": "[a-z]+" },
                    { "identifier": "parens", "pattern": "\\(\\)" }
                ]
            }
        ],
        "skip_whitespace": true,
        "unmatched_identifier": "unknown"
    }"#;

    #[test]
    fn test_lexer_config_serde() {
        let config = LexerConfig::from_json(CONFIG).unwrap();
        assert_eq!(config.rules.len(), 2);
        assert!(config.skip_whitespace);
        assert_eq!(config.unmatched_identifier.as_deref(), Some("unknown"));

        let json = serde_json::to_string(&config).unwrap();
        tracing::debug!("{}", json);
        let deserialized = LexerConfig::from_json(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_defaults() {
        let config = LexerConfig::from_json(r#"{ "rules": [] }"#).unwrap();
        assert_eq!(config, LexerConfig::default());
    }

    #[test]
    fn test_build_lexer() {
        let lexer = LexerConfig::from_json(CONFIG).unwrap().build().unwrap();
        assert!(lexer.skips_whitespace());
        assert_eq!(lexer.unmatched_identifier(), Some("unknown"));

        let tokens = lexer.lex("12 run() ;").unwrap();
        assert_eq!(tokens[0][0], Token::new("number", "12", 0, 0));
        assert_eq!(tokens[0][1].identifier, "call");
        assert_eq!(tokens[0][1].parts.len(), 2);
        assert_eq!(tokens[0][2], Token::new("unknown", ";", 9, 0));
    }

    #[test]
    fn test_invalid_pattern() {
        let config = LexerConfig {
            rules: vec![RuleConfig::new("broken", "[a-")],
            ..Default::default()
        };
        let err = Lexer::try_from(&config).unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { .. }));
    }

    #[test]
    fn test_nested_parts_are_rejected() {
        let mut inner = RuleConfig::new("inner", "a");
        inner.parts.push(RuleConfig::new("deeper", "a"));
        let mut outer = RuleConfig::new("outer", "a");
        outer.parts.push(inner);

        let config = LexerConfig {
            rules: vec![outer],
            ..Default::default()
        };
        assert!(matches!(config.build(), Err(Error::Config(_))));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            LexerConfig::from_json("{ not json"),
            Err(Error::Config(_))
        ));
    }
}

//! Tokenizer: the final pipeline stage.
//!
//! Splits a segment's text into word and non-word tokens so a host UI can
//! attach per-word interaction handlers. The split is a lossless partition:
//! nothing is dropped, reordered, or normalized. Boundary cleanup (stripping
//! trailing punctuation for dictionary lookup, say) belongs to the caller.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// One interaction-addressable unit within a segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    /// True iff the text contains at least one alphanumeric character. A run
    /// of pure punctuation (an em-dash, say) is its own non-word token even
    /// when it sits flush against letters.
    pub is_word: bool,
    /// Stable key for list diffing: `{segment_key}-{ordinal}`. Identical
    /// input always produces identical keys.
    pub key: String,
}

/// A maximal run of whitespace or punctuation is one non-word token;
/// everything between such runs is one word-candidate token.
fn non_word_run() -> &'static Regex {
    static NON_WORD: OnceLock<Regex> = OnceLock::new();
    NON_WORD.get_or_init(|| Regex::new(r"[\s\p{P}]+").expect("valid token pattern"))
}

/// Partition `segment_text` into tokens. Concatenating the returned tokens
/// in order reconstructs the input exactly.
pub fn tokenize(segment_text: &str, segment_key: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut cursor = 0;

    for run in non_word_run().find_iter(segment_text) {
        if run.start() > cursor {
            push_token(&mut tokens, &segment_text[cursor..run.start()], segment_key);
        }
        push_token(&mut tokens, run.as_str(), segment_key);
        cursor = run.end();
    }
    if cursor < segment_text.len() {
        push_token(&mut tokens, &segment_text[cursor..], segment_key);
    }

    tokens
}

fn push_token(tokens: &mut Vec<Token>, text: &str, segment_key: &str) {
    let key = format!("{}-{}", segment_key, tokens.len());
    tokens.push(Token {
        text: text.to_string(),
        is_word: text.chars().any(char::is_alphanumeric),
        key,
    });
}

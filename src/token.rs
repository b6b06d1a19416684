//! Tokenizer: splits paragraph text into whitespace/non-whitespace runs.
//!
//! This is the leaf of the engine (spec.md §4.1, ≈3% of budget). Every
//! other component that needs word-level granularity builds on this.

use crate::model::Token;

/// Split `text` into a sequence of tokens covering it exactly —
/// concatenating the tokens in order reproduces `text`. Split boundaries
/// fall at whitespace/non-whitespace transitions; this is the regular
/// language `(\S+|\s+)*`. Empty input yields an empty sequence.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_whitespace: Option<bool> = None;

    for (idx, ch) in text.char_indices() {
        let is_ws = ch.is_whitespace();
        match in_whitespace {
            None => in_whitespace = Some(is_ws),
            Some(prev_ws) if prev_ws != is_ws => {
                tokens.push(Token::new(&text[start..idx]));
                start = idx;
                in_whitespace = Some(is_ws);
            }
            _ => {}
        }
    }

    if start < text.len() {
        tokens.push(Token::new(&text[start..]));
    }

    tokens
}

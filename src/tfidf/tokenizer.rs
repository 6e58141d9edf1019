//! Product-text tokenizer with Unicode folding and stop word removal.
//!
//! Tokenizes by NFKD-folding to ASCII, lowercasing, splitting on
//! non-alphabetic characters, and removing common English stop words.
//! Tokens shorter than [`config::MIN_TOKEN_LEN`](crate::config::MIN_TOKEN_LEN)
//! characters are discarded — product titles are dominated by short filler
//! ("for", "with", "2pk") that carries no signal. Uses a zero-per-token
//! allocation design via byte spans.

use crate::config;
use std::collections::HashSet;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "about", "above", "after", "again", "against", "because", "been", "before", "being",
        "below", "between", "both", "cannot", "could", "does", "doing", "down", "during", "each",
        "from", "further", "have", "having", "here", "hers", "herself", "himself", "into",
        "itself", "more", "most", "myself", "once", "only", "other", "ought", "ours", "ourselves",
        "over", "same", "should", "some", "such", "than", "that", "their", "theirs", "them",
        "themselves", "then", "there", "these", "they", "this", "those", "through", "under",
        "until", "very", "were", "what", "when", "where", "which", "while", "whom", "with",
        "would", "your", "yours", "yourself", "yourselves",
    ]
    .into_iter()
    .collect()
});

/// Tokenized text: owns the folded, lowercased buffer and provides `&str`
/// slices via byte spans. Only 1 heap allocation (the buffer) instead of
/// N per-token Strings.
pub struct Tokens {
    buffer: String,
    spans: Vec<(u32, u32)>, // (start, end) byte offsets into buffer
}

impl Tokens {
    /// Returns an iterator over the token `&str` slices.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.spans
            .iter()
            .map(|&(s, e)| &self.buffer[s as usize..e as usize])
    }

    /// Returns the number of tokens.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Returns `true` if there are no tokens.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

/// Folds text to lowercase ASCII: NFKD decomposition, then drop every
/// non-ASCII char (combining marks fall away, "Ⅱ" becomes "II", "é"
/// becomes "e").
fn fold(text: &str) -> String {
    text.nfkd()
        .filter(char::is_ascii)
        .flat_map(char::to_lowercase)
        .collect()
}

/// Tokenize text: fold to ASCII, split on non-alphabetic characters,
/// drop short tokens and stop words. Returns a [`Tokens`] struct that
/// owns the folded buffer.
pub fn tokenize(text: &str) -> Tokens {
    let buffer = fold(text);
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in buffer.char_indices() {
        if c.is_ascii_alphabetic() {
            if start.is_none() {
                start = Some(i);
            }
        } else if let Some(s) = start {
            push_span(&buffer, s, i, &mut spans);
            start = None;
        }
    }
    // Handle last token (no trailing separator)
    if let Some(s) = start {
        push_span(&buffer, s, buffer.len(), &mut spans);
    }

    Tokens { buffer, spans }
}

fn push_span(buffer: &str, start: usize, end: usize, spans: &mut Vec<(u32, u32)>) {
    let token = &buffer[start..end];
    if token.len() >= config::MIN_TOKEN_LEN && !STOP_WORDS.contains(token) {
        spans.push((start as u32, end as u32));
    }
}

//! Text normalization applied before scoring
//!
//! Deterministic cleanup that makes lexicon scoring more stable on noisy,
//! real-world input. Total function: always returns a string, possibly empty.

use once_cell::sync::Lazy;
use regex::Regex;

/// URL-like tokens: `http(s)://...` or `www....`
static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\S+|www\.\S+").expect("valid URL pattern"));

/// Normalize raw text for scoring.
///
/// Steps, in order (each idempotent after the previous):
/// 1. Trim leading/trailing whitespace
/// 2. Remove URL-like substrings
/// 3. Collapse runs of 3+ repeated punctuation (`!?.,`) down to 2
/// 4. Collapse runs of 3+ repeated identical characters (any) down to 2
///
/// Punctuation collapsing runs before the general pass; the two steps use
/// different character classes. A final trim removes whitespace exposed at
/// the ends by URL removal, keeping the whole function idempotent.
pub fn normalize(text: &str) -> String {
    let trimmed = text.trim();
    let without_urls = URL_PATTERN.replace_all(trimmed, "");
    let depunctuated = collapse_runs(&without_urls, is_collapsible_punctuation);
    collapse_runs(&depunctuated, |_| true).trim().to_string()
}

fn is_collapsible_punctuation(c: char) -> bool {
    matches!(c, '!' | '?' | '.' | ',')
}

/// Collapse runs of 3-or-more identical characters down to exactly 2.
///
/// The regex crate has no backreferences, so this is a linear scan with the
/// same output as the backreference pattern `(.)\1{2,}` -> `\1\1` restricted
/// to characters accepted by `eligible`.
fn collapse_runs(input: &str, eligible: fn(char) -> bool) -> String {
    let mut out = String::with_capacity(input.len());
    let mut run_char: Option<char> = None;
    let mut run_len = 0usize;

    for c in input.chars() {
        if Some(c) == run_char {
            run_len += 1;
        } else {
            run_char = Some(c);
            run_len = 1;
        }

        // Keep at most two of an eligible run; everything else verbatim
        if run_len <= 2 || !eligible(c) {
            out.push(c);
        }
    }

    out
}

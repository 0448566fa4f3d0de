// file: src/extractor/boundary.rs
// description: whole-word pattern wrapper with non-consuming boundary checks
// reference: https://docs.rs/regex/latest/regex/struct.Regex.html#method.captures_at

use crate::error::{Result, ScanError};
use crate::models::{Category, Hit};
use lazy_static::lazy_static;
use regex::{Match, Regex};

lazy_static! {
    static ref WORD_CHAR: Regex = Regex::new(r"^\w$").expect("WORD_CHAR regex is valid");
}

const TOKEN_GROUP: &str = "token";

/// Default right boundary: any non-word character or the end of the text.
pub const WORD_END: &str = r"(?:\W|$)";

/// A compiled fragment that only matches when flanked by non-word characters
/// (or the edge of the text) on both sides.
///
/// The regex crate has no look-around, so the right boundary is a consuming
/// group after the `token` group and the left boundary is checked by hand.
/// Iteration resumes at the token end, never past the flanking character, so
/// `15-20` still yields both `15` and `20`.
#[derive(Debug, Clone)]
pub struct WholeWord {
    name: String,
    category: Category,
    fragment: String,
    regex: Regex,
}

impl WholeWord {
    pub fn new(name: impl Into<String>, category: Category, fragment: &str) -> Result<Self> {
        Self::with_right_boundary(name, category, fragment, WORD_END)
    }

    /// Like [`WholeWord::new`] with a custom right boundary. The boundary must
    /// start with a non-word character or be empty at the end of the text.
    pub fn with_right_boundary(
        name: impl Into<String>,
        category: Category,
        fragment: &str,
        right_boundary: &str,
    ) -> Result<Self> {
        let name = name.into();
        let pattern = format!(r"(?P<{}>{}){}", TOKEN_GROUP, fragment, right_boundary);
        let regex = Regex::new(&pattern).map_err(|source| ScanError::Pattern {
            name: name.clone(),
            source,
        })?;

        Ok(Self {
            name,
            category,
            fragment: fragment.to_string(),
            regex,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    pub fn find_iter<'r, 't>(&'r self, text: &'t str) -> WholeWordMatches<'r, 't> {
        WholeWordMatches {
            pattern: self,
            text,
            pos: 0,
        }
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.find_iter(text).next().is_some()
    }

    /// Matches tagged with this pattern's category.
    pub fn hits<'t>(&self, text: &'t str) -> impl Iterator<Item = Hit<'t>> {
        let category = self.category;
        self.find_iter(text)
            .map(move |matched| Hit::new(category, matched))
    }
}

/// Lazy iterator over the bounded matches of a [`WholeWord`] in one text.
#[derive(Debug)]
pub struct WholeWordMatches<'r, 't> {
    pattern: &'r WholeWord,
    text: &'t str,
    pos: usize,
}

impl<'t> Iterator for WholeWordMatches<'_, 't> {
    type Item = Match<'t>;

    fn next(&mut self) -> Option<Match<'t>> {
        while self.pos <= self.text.len() {
            let Some(candidate) = self.pattern.regex.find_at(self.text, self.pos) else {
                self.pos = self.text.len() + 1;
                return None;
            };
            let start = candidate.start();

            // No match can start inside a run of word chars, so skip the
            // whole run rather than retrying one char at a time.
            if preceded_by_word_char(self.text, start) {
                self.pos = past_word_run(self.text, start);
                continue;
            }

            // The leftmost match from `start` is the candidate itself.
            let token = self
                .pattern
                .regex
                .captures_at(self.text, start)
                .and_then(|caps| caps.name(TOKEN_GROUP))?;

            self.pos = if token.is_empty() {
                next_char_boundary(self.text, token.end())
            } else {
                token.end()
            };
            return Some(token);
        }

        None
    }
}

fn is_word_char(c: char) -> bool {
    let mut buf = [0u8; 4];
    WORD_CHAR.is_match(c.encode_utf8(&mut buf))
}

fn preceded_by_word_char(text: &str, pos: usize) -> bool {
    text[..pos].chars().next_back().is_some_and(is_word_char)
}

/// Position just past the first non-word char at or after `pos`.
fn past_word_run(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .find(|&(_, c)| !is_word_char(c))
        .map_or(text.len() + 1, |(offset, c)| pos + offset + c.len_utf8())
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    pos + text[pos..].chars().next().map_or(1, char::len_utf8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::{Duration, Instant};

    fn digits() -> WholeWord {
        WholeWord::new("digits", Category::Integer, r"\d+").unwrap()
    }

    fn found(pattern: &WholeWord, text: &str) -> Vec<String> {
        pattern
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    #[test]
    fn test_adjacent_tokens_share_delimiter() {
        assert_eq!(found(&digits(), "15-20"), vec!["15", "20"]);
        assert_eq!(found(&digits(), "1 2 3"), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_partial_words_rejected() {
        assert!(found(&digits(), "a15 15a _15 15_").is_empty());
    }

    #[test]
    fn test_text_edges_are_boundaries() {
        let pattern = digits();
        let matches: Vec<_> = pattern.find_iter("42").collect();

        assert_eq!(matches.len(), 1);
        assert_eq!((matches[0].start(), matches[0].end()), (0, 2));
    }

    #[test]
    fn test_boundary_not_part_of_match() {
        let pattern = digits();
        let m = pattern.find_iter("(1845)").next().unwrap();

        assert_eq!(m.as_str(), "1845");
        assert_eq!(m.range(), 1..5);
    }

    #[test]
    fn test_unicode_letters_are_word_chars() {
        assert!(found(&digits(), "日本15").is_empty());
        assert_eq!(found(&digits(), "🚀15🚀"), vec!["15"]);
    }

    #[test]
    fn test_shorter_alternative_satisfies_boundary() {
        let pattern = WholeWord::new("decimal", Category::Integer, r"\d+(?:\.\d+)?").unwrap();

        assert_eq!(found(&pattern, "3.x 3.5 3.5y"), vec!["3", "3.5", "3"]);
    }

    #[test]
    fn test_malformed_fragment_is_error() {
        let err = WholeWord::new("broken", Category::Integer, r"(\d+").unwrap_err();

        assert!(matches!(err, ScanError::Pattern { ref name, .. } if name == "broken"));
    }

    #[test]
    fn test_long_word_run_scans_in_linear_time() {
        let pattern = digits();
        let text = format!("a{}", "1".repeat(1_000_000));
        let started = Instant::now();

        assert_eq!(pattern.find_iter(&text).count(), 0);
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn test_rejected_run_resumes_after_delimiter() {
        let ordinal = WholeWord::new("ordinal", Category::Ordinal, r"-?\d+(?:st|th)").unwrap();

        assert_eq!(found(&ordinal, "a-5th x1st 2nd-1st"), vec!["5th", "1st"]);
    }

    #[test]
    fn test_custom_right_boundary() {
        let pattern =
            WholeWord::with_right_boundary("digits", Category::Integer, r"\d+", r"(?:\s|$)")
                .unwrap();

        assert_eq!(found(&pattern, "1, 2 3"), vec!["2", "3"]);
    }

    #[test]
    fn test_hits_carry_category() {
        let pattern = digits();
        let hits: Vec<_> = pattern.hits("x 7 y").collect();

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].category, Category::Integer);
        assert_eq!(hits[0].as_str(), "7");
    }
}

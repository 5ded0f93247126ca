//! Keyword containment tests shared by every detector.

use regex::Regex;
use skillup_core::config::MatchMode;

use crate::error::ChatError;

struct Term {
    text: String,
    boundary: Option<Regex>,
}

impl Term {
    fn is_in(&self, haystack: &str) -> bool {
        match &self.boundary {
            Some(re) => re.is_match(haystack),
            None => haystack.contains(&self.text),
        }
    }
}

/// An ordered list of lowercase terms tested against lowercase text.
///
/// Blank terms are dropped: an empty substring would match every query.
pub struct TermSet {
    terms: Vec<Term>,
}

impl TermSet {
    pub fn new<I, S>(terms: I, mode: MatchMode) -> Result<Self, ChatError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut compiled = Vec::new();
        for raw in terms {
            let text = raw.as_ref().trim().to_lowercase();
            if text.is_empty() {
                continue;
            }
            let boundary = match mode {
                MatchMode::Substring => None,
                MatchMode::WordBoundary => Some(Regex::new(&format!(
                    r"(?:^|\W){}(?:\W|$)",
                    regex::escape(&text)
                ))?),
            };
            compiled.push(Term { text, boundary });
        }
        Ok(Self { terms: compiled })
    }

    /// First term, in declared order, found in `text`.
    pub fn first_match(&self, text: &str) -> Option<&str> {
        self.terms
            .iter()
            .find(|t| t.is_in(text))
            .map(|t| t.text.as_str())
    }

    pub fn matches(&self, text: &str) -> bool {
        self.first_match(text).is_some()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

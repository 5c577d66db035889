//! Core types for themefilter-core.
//!
//! This module defines the filter token grammar and the two data structures
//! shared by the vocabulary, index and parser layers: a named [`Taxonomy`] and
//! a parsed [`FilterToken`].

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

// ---------------------------------------------------------------------------
// Grammar
// ---------------------------------------------------------------------------

/// `taxonomy:term`, optional whitespace after the colon. Word characters are
/// ASCII only; terms additionally allow `-`.
const FILTER_PATTERN: &str = r"([A-Za-z0-9_]+):\s*([A-Za-z0-9_-]+)";

const TAXONOMY_GROUP: usize = 1;
const TERM_GROUP: usize = 2;

/// Unanchored grammar, used to scan free text for every token.
pub(crate) static FILTER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(FILTER_PATTERN).expect("built-in filter pattern must compile")
});

/// Anchored grammar, used to parse a string that should be exactly one token.
static FILTER_REGEX_SINGLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{FILTER_PATTERN}$")).expect("built-in filter pattern must compile")
});

/// True if `name` could appear on the left of the colon.
pub(crate) fn is_taxonomy_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// True if `term` could appear on the right of the colon.
pub(crate) fn is_term(term: &str) -> bool {
    !term.is_empty()
        && term
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

// ---------------------------------------------------------------------------
// Taxonomy
// ---------------------------------------------------------------------------

/// A named category of terms, e.g. `color` with `blue`, `red`, ….
///
/// Deserializes from a `[[taxonomy]]` table in `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Taxonomy {
    pub name: String,
    #[serde(default)]
    pub terms: Vec<String>,
}

impl Taxonomy {
    pub fn new<N, I, T>(name: N, terms: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            name: name.into(),
            terms: terms.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.iter().any(|t| t == term)
    }
}

// ---------------------------------------------------------------------------
// FilterToken
// ---------------------------------------------------------------------------

/// One `taxonomy:term` occurrence. Syntactic only: a token may name a
/// taxonomy that does not own the term, or one that does not exist at all.
/// Use [`FilterParser::is_valid`](crate::FilterParser::is_valid) to check it
/// against a vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterToken {
    pub taxonomy: String,
    pub term: String,
}

impl FilterToken {
    pub fn new(taxonomy: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            taxonomy: taxonomy.into(),
            term: term.into(),
        }
    }

    /// Parse a string that is exactly one token. Returns `None` for anything
    /// else, including surrounding whitespace or trailing text.
    ///
    /// ```
    /// use themefilter_core::FilterToken;
    ///
    /// let token = FilterToken::parse("color: blue").unwrap();
    /// assert_eq!(token.taxonomy, "color");
    /// assert_eq!(token.term, "blue");
    /// assert!(FilterToken::parse("color:blue and more").is_none());
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        FILTER_REGEX_SINGLE.captures(s).map(|caps| Self::from_captures(&caps))
    }

    /// Every token in `input`, leftmost-first and non-overlapping.
    pub(crate) fn scan(input: &str) -> impl Iterator<Item = FilterToken> + '_ {
        FILTER_REGEX
            .captures_iter(input)
            .map(|caps| Self::from_captures(&caps))
    }

    fn from_captures(caps: &regex::Captures<'_>) -> Self {
        Self {
            taxonomy: caps[TAXONOMY_GROUP].to_string(),
            term: caps[TERM_GROUP].to_string(),
        }
    }
}

impl std::fmt::Display for FilterToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.taxonomy, self.term)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

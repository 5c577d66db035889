//! Filter parser — splits search-box input into free text and
//! `taxonomy:term` filters.
//!
//! Two families of operation live here and deliberately disagree about
//! validity:
//!
//! - Extraction ([`get_sorted_filter_terms`], [`sort_filter_terms`]) keeps
//!   only tokens whose taxonomy is the term's canonical owner.
//! - [`strip_filters`] removes every token the grammar matches, valid or not,
//!   so filter-shaped text never leaks into the plain search string.
//!
//! Sorting is always on the canonical `taxonomy:term` string, never on the
//! bare term.
//!
//! [`get_sorted_filter_terms`]: FilterParser::get_sorted_filter_terms
//! [`sort_filter_terms`]: FilterParser::sort_filter_terms
//! [`strip_filters`]: FilterParser::strip_filters

use crate::error::VocabularyError;
use crate::index::TermIndex;
use crate::types::{FilterToken, FILTER_REGEX};
use crate::vocabulary::{Vocabulary, SUBJECT_TAXONOMY};

/// Owns a vocabulary and the term index built from it. Immutable after
/// construction; share it freely across threads.
#[derive(Debug, Clone)]
pub struct FilterParser {
    vocab: Vocabulary,
    index: TermIndex,
}

impl FilterParser {
    pub fn new(vocab: Vocabulary) -> Result<Self, VocabularyError> {
        let index = TermIndex::build(&vocab)?;
        Ok(Self { vocab, index })
    }

    /// Parser over [`Vocabulary::builtin`].
    pub fn builtin() -> Self {
        let vocab = Vocabulary::builtin();
        // The built-in table has 6 taxonomies and only grammar-valid terms.
        let index = TermIndex::build(&vocab).expect("built-in vocabulary must index");
        Self { vocab, index }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    pub fn index(&self) -> &TermIndex {
        &self.index
    }

    /// Complete `taxonomy:term` filter for `term`, or `""` if the term is
    /// unknown.
    pub fn get_filter(&self, term: &str) -> String {
        match self.index.canonical_taxonomy(term) {
            Some(taxonomy) => format!("{taxonomy}:{term}"),
            None => String::new(),
        }
    }

    /// Canonical owner of `term`.
    pub fn taxonomy_of(&self, term: &str) -> Option<&str> {
        self.index.canonical_taxonomy(term)
    }

    /// True if the token's taxonomy is the canonical owner of its term, i.e.
    /// the token equals `get_filter(term)` modulo whitespace.
    pub fn is_valid(&self, token: &FilterToken) -> bool {
        self.index.is_canonical(&token.taxonomy, &token.term)
    }

    /// Every syntactic token in `input`, in order, valid or not.
    pub fn filters(&self, input: &str) -> Vec<FilterToken> {
        FilterToken::scan(input).collect()
    }

    /// Valid filter terms from `input`, sorted by canonical form,
    /// de-duplicated, and joined with `,`. Free text is ignored.
    ///
    /// ```
    /// use themefilter_core::FilterParser;
    ///
    /// let parser = FilterParser::builtin();
    /// assert_eq!(
    ///     parser.get_sorted_filter_terms("color:blue some text feature:video"),
    ///     "blue,video"
    /// );
    /// assert_eq!(parser.get_sorted_filter_terms("bogus:term"), "");
    /// ```
    pub fn get_sorted_filter_terms(&self, input: &str) -> String {
        self.sorted_filter_terms(input).join(",")
    }

    /// [`get_sorted_filter_terms`](Self::get_sorted_filter_terms) before
    /// joining.
    pub fn sorted_filter_terms(&self, input: &str) -> Vec<String> {
        let terms: Vec<String> = FilterToken::scan(input)
            .filter(|token| {
                let valid = self.is_valid(token);
                tracing::trace!(%token, valid, "filter token");
                valid
            })
            .map(|token| token.term)
            .collect();

        let mut sorted = self.sort_filter_terms(&terms);
        // Sorted by canonical form, so equal terms are adjacent.
        sorted.dedup();
        sorted
    }

    /// Known `terms` ordered by their canonical `taxonomy:term` form. Unknown
    /// terms are dropped; duplicates are kept.
    pub fn sort_filter_terms<S: AsRef<str>>(&self, terms: &[S]) -> Vec<String> {
        let mut canonical: Vec<FilterToken> = terms
            .iter()
            .filter_map(|term| {
                let term = term.as_ref();
                self.index
                    .canonical_taxonomy(term)
                    .map(|taxonomy| FilterToken::new(taxonomy, term))
            })
            .collect();
        canonical.sort_by_cached_key(ToString::to_string);
        canonical.into_iter().map(|token| token.term).collect()
    }

    /// `input` with every filter-shaped token removed, then trimmed of
    /// whitespace and byte-order marks.
    pub fn strip_filters(&self, input: &str) -> String {
        FILTER_REGEX
            .replace_all(input, "")
            .trim_matches(is_trimmable)
            .to_string()
    }

    /// Terms of the `subject` taxonomy, in declaration order.
    pub fn subjects(&self) -> &[String] {
        self.terms_of(SUBJECT_TAXONOMY)
    }

    /// Terms of `taxonomy`, in declaration order. Empty if undeclared.
    pub fn terms_of(&self, taxonomy: &str) -> &[String] {
        self.vocab.terms_of(taxonomy)
    }
}

// U+FEFF is not White_Space but pasted search text often carries one.
fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

impl Default for FilterParser {
    fn default() -> Self {
        Self::builtin()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

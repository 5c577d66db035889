//! Term index — FST map from term to the taxonomies that own it.
//!
//! Each value is a bitmask over taxonomy positions in the source
//! [`Vocabulary`]. A term listed under several taxonomies (the built-in data
//! has `dark`, `light` and `video`) has several bits set; its canonical owner
//! is the lowest set bit, i.e. the first taxonomy declared. Only the canonical
//! owner makes a `taxonomy:term` pair valid.

use crate::error::VocabularyError;
use crate::vocabulary::Vocabulary;
use fst::Map;
use std::collections::BTreeMap;

#[derive(Clone)]
pub struct TermIndex {
    terms: Map<Vec<u8>>,
    /// Taxonomy names by position, copied out of the vocabulary.
    taxonomies: Vec<String>,
}

impl std::fmt::Debug for TermIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TermIndex")
            .field("terms", &self.terms.len())
            .field("taxonomies", &self.taxonomies)
            .finish()
    }
}

impl TermIndex {
    /// Build the index from `vocab`.
    pub fn build(vocab: &Vocabulary) -> Result<Self, VocabularyError> {
        // BTreeMap iterates in byte order, which is what the FST builder needs.
        let mut owners: BTreeMap<&str, u64> = BTreeMap::new();
        for (pos, taxonomy) in vocab.taxonomies().iter().enumerate() {
            for term in &taxonomy.terms {
                *owners.entry(term.as_str()).or_default() |= 1u64 << pos;
            }
        }

        let terms = Map::from_iter(owners)?;
        tracing::debug!(
            taxonomies = vocab.len(),
            terms = terms.len(),
            "term index built"
        );

        Ok(Self {
            terms,
            taxonomies: vocab.taxonomies().iter().map(|t| t.name.clone()).collect(),
        })
    }

    /// The canonical owning taxonomy of `term`, if any.
    pub fn canonical_taxonomy(&self, term: &str) -> Option<&str> {
        let mask = self.terms.get(term)?;
        let pos = mask.trailing_zeros() as usize;
        self.taxonomies.get(pos).map(String::as_str)
    }

    /// True if `taxonomy` is the canonical owner of `term`.
    pub fn is_canonical(&self, taxonomy: &str, term: &str) -> bool {
        self.canonical_taxonomy(term) == Some(taxonomy)
    }

    /// Every taxonomy that lists `term`, in declaration order. Informational;
    /// validity only considers the canonical owner.
    pub fn owners(&self, term: &str) -> Vec<&str> {
        let mask = self.terms.get(term).unwrap_or(0);
        self.taxonomies
            .iter()
            .enumerate()
            .filter(|(pos, _)| mask & (1u64 << pos) != 0)
            .map(|(_, name)| name.as_str())
            .collect()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

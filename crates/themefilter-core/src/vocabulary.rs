//! Taxonomy vocabulary — the controlled set of valid `taxonomy:term` pairs.
//!
//! The built-in table is a compile-time ordered map. Declaration order
//! matters: when a term is listed under more than one taxonomy, the first
//! taxonomy declared is its canonical owner (see [`TermIndex`]).
//!
//! [`TermIndex`]: crate::TermIndex

use crate::error::{VocabularyError, MAX_TAXONOMIES};
use crate::types::{is_taxonomy_name, is_term, Taxonomy};
use std::collections::HashSet;

// ---------------------------------------------------------------------------
// Built-in table
// ---------------------------------------------------------------------------

const COLOR: &[&str] = &[
    "black", "blue", "brown", "dark", "gray", "green", "light", "orange", "pink", "purple", "red",
    "silver", "tan", "white", "yellow",
];

const COLUMN: &[&str] = &[
    "four-columns",
    "left-sidebar",
    "one-column",
    "right-sidebar",
    "three-columns",
    "two-columns",
];

const FEATURE: &[&str] = &[
    "accessibility-ready",
    "author-bio",
    "blog-excerpts",
    "breadcrumb-navigation",
    "classic-menu",
    "custom-background",
    "custom-colors",
    "custom-header",
    "custom-menu",
    "editor-style",
    "featured-content-with-pages",
    "featured-image-header",
    "featured-images",
    "fixed-menu",
    "flexible-header",
    "front-page-post-form",
    "full-width-template",
    "infinite-scroll",
    "microformats",
    "multiple-menus",
    "one-page",
    "post-formats",
    "post-slider",
    "rtl-language-support",
    "site-logo",
    "sticky-post",
    "testimonials",
    "theme-options",
    "threaded-comments",
    "translation-ready",
    "video",
    "wordads",
];

const LAYOUT: &[&str] = &["fixed-layout", "fluid-layout", "responsive-layout"];

const SUBJECT: &[&str] = &[
    "announcement",
    "art",
    "artwork",
    "blog",
    "business",
    "cartoon",
    "collaboration",
    "craft",
    "design",
    "education",
    "fashion",
    "food",
    "gaming",
    "holiday",
    "hotel",
    "journal",
    "lifestream",
    "magazine",
    "major-league-baseball",
    "mlb",
    "music",
    "nature",
    "news",
    "outdoors",
    "partner",
    "photoblogging",
    "photography",
    "portfolio",
    "productivity",
    "real-estate",
    "school",
    "scrapbooking",
    "seasonal",
    "sports",
    "travel",
    "tumblelog",
    "video",
    "wedding",
];

const STYLE: &[&str] = &[
    "abstract",
    "artistic",
    "bright",
    "clean",
    "colorful",
    "conservative",
    "contemporary",
    "curved",
    "dark",
    "earthy",
    "elegant",
    "faded",
    "flamboyant",
    "flowery",
    "formal",
    "funny",
    "futuristic",
    "geometric",
    "glamorous",
    "grungy",
    "hand-drawn",
    "handcrafted",
    "humorous",
    "industrial",
    "light",
    "metallic",
    "minimal",
    "modern",
    "natural",
    "paper-made",
    "playful",
    "professional",
    "retro",
    "simple",
    "sophisticated",
    "tech",
    "textured",
    "traditional",
    "urban",
    "vibrant",
    "whimsical",
];

/// The built-in theme taxonomies, in declaration order.
pub static BUILTIN_TAXONOMIES: phf::OrderedMap<&'static str, &'static [&'static str]> = phf::phf_ordered_map! {
    "color" => COLOR,
    "column" => COLUMN,
    "feature" => FEATURE,
    "layout" => LAYOUT,
    "subject" => SUBJECT,
    "style" => STYLE,
};

/// Name of the taxonomy returned by
/// [`FilterParser::subjects`](crate::FilterParser::subjects).
pub const SUBJECT_TAXONOMY: &str = "subject";

// ---------------------------------------------------------------------------
// Vocabulary
// ---------------------------------------------------------------------------

/// A validated, ordered list of taxonomies.
///
/// Every taxonomy name and term is guaranteed to be expressible in the filter
/// grammar, taxonomy names are unique, and each taxonomy's term list is free
/// of duplicates (first occurrence kept).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    taxonomies: Vec<Taxonomy>,
}

impl Vocabulary {
    /// Validate and build a vocabulary from taxonomies in declaration order.
    pub fn new(taxonomies: Vec<Taxonomy>) -> Result<Self, VocabularyError> {
        if taxonomies.len() > MAX_TAXONOMIES {
            return Err(VocabularyError::TooManyTaxonomies {
                count: taxonomies.len(),
            });
        }

        let mut names = HashSet::with_capacity(taxonomies.len());
        let mut cleaned = Vec::with_capacity(taxonomies.len());

        for taxonomy in taxonomies {
            if taxonomy.name.is_empty() {
                return Err(VocabularyError::EmptyTaxonomyName);
            }
            if !is_taxonomy_name(&taxonomy.name) {
                return Err(VocabularyError::InvalidTaxonomyName {
                    name: taxonomy.name,
                });
            }
            if !names.insert(taxonomy.name.clone()) {
                return Err(VocabularyError::DuplicateTaxonomy {
                    name: taxonomy.name,
                });
            }
            if let Some(bad) = taxonomy.terms.iter().find(|t| !is_term(t)) {
                return Err(VocabularyError::InvalidTerm {
                    taxonomy: taxonomy.name.clone(),
                    term: bad.clone(),
                });
            }

            let mut seen = HashSet::with_capacity(taxonomy.terms.len());
            let terms = taxonomy
                .terms
                .into_iter()
                .filter(|t| seen.insert(t.clone()))
                .collect();
            cleaned.push(Taxonomy {
                name: taxonomy.name,
                terms,
            });
        }

        Ok(Self {
            taxonomies: cleaned,
        })
    }

    /// The built-in theme vocabulary.
    pub fn builtin() -> Self {
        let taxonomies = BUILTIN_TAXONOMIES
            .entries()
            .map(|(name, terms)| Taxonomy::new(*name, terms.iter().copied()))
            .collect();
        Self { taxonomies }
    }

    pub fn taxonomies(&self) -> &[Taxonomy] {
        &self.taxonomies
    }

    pub fn get(&self, name: &str) -> Option<&Taxonomy> {
        self.taxonomies.iter().find(|t| t.name == name)
    }

    /// Position of `name` in declaration order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.taxonomies.iter().position(|t| t.name == name)
    }

    /// Terms of taxonomy `name`, or an empty slice if it is not declared.
    pub fn terms_of(&self, name: &str) -> &[String] {
        self.get(name).map(|t| t.terms.as_slice()).unwrap_or(&[])
    }

    /// Number of taxonomies.
    pub fn len(&self) -> usize {
        self.taxonomies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taxonomies.is_empty()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

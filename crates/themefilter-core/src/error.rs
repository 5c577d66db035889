//! Error types for vocabulary construction and config loading.
//!
//! Parser operations never fail; they degrade to empty results. Only building
//! a [`Vocabulary`](crate::Vocabulary) (and therefore loading one from config)
//! can produce an error.

use thiserror::Error;

/// Maximum number of taxonomies a vocabulary may declare. Taxonomy ownership
/// is stored as a `u64` bitmask in the term index.
pub const MAX_TAXONOMIES: usize = 64;

/// Why a vocabulary was rejected.
#[derive(Error, Debug)]
pub enum VocabularyError {
    #[error("taxonomy name must not be empty")]
    EmptyTaxonomyName,

    /// The name contains characters outside `[A-Za-z0-9_]`, so no filter
    /// token could ever address it.
    #[error("invalid taxonomy name {name:?}: only ASCII letters, digits and '_' are allowed")]
    InvalidTaxonomyName { name: String },

    #[error("invalid term {term:?} in taxonomy {taxonomy:?}: only ASCII letters, digits, '_' and '-' are allowed")]
    InvalidTerm { taxonomy: String, term: String },

    #[error("taxonomy {name:?} is declared more than once")]
    DuplicateTaxonomy { name: String },

    #[error("{count} taxonomies declared, at most {max} are supported", max = MAX_TAXONOMIES)]
    TooManyTaxonomies { count: usize },

    #[error("failed to build term index: {0}")]
    Index(#[from] fst::Error),
}

/// Failure to load or interpret a config file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid vocabulary in config: {0}")]
    Vocabulary(#[from] VocabularyError),
}

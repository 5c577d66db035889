//! Domain-specific assertion macros for themefilter harnesses.
//!
//! These add context to failures so it is clear which filter invariant was
//! violated and for which input.

/// Assert that a comma-separated term list is in strictly ascending
/// canonical `taxonomy:term` order.
///
/// ```rust
/// assert_canonical_order!(parser, "blue,video");
/// ```
#[macro_export]
macro_rules! assert_canonical_order {
    ($parser:expr, $joined:expr) => {{
        let parser: &themefilter::FilterParser = &$parser;
        let joined: &str = &$joined;
        if !joined.is_empty() {
            let canonical: Vec<String> = joined.split(',').map(|t| parser.get_filter(t)).collect();
            if let Some(missing) = canonical.iter().position(|c| c.is_empty()) {
                panic!(
                    "assert_canonical_order! failed: unknown term #{} in output {:?}",
                    missing, joined
                );
            }
            for pair in canonical.windows(2) {
                if pair[0] >= pair[1] {
                    panic!(
                        "assert_canonical_order! failed:\n  {:?} is not before {:?}\n  output: {:?}",
                        pair[0], pair[1], joined
                    );
                }
            }
        }
    }};
}

/// Assert that `text` contains nothing the filter grammar would match.
#[macro_export]
macro_rules! assert_no_filter_tokens {
    ($parser:expr, $text:expr) => {{
        let parser: &themefilter::FilterParser = &$parser;
        let text: &str = &$text;
        let found = parser.filters(text);
        if !found.is_empty() {
            panic!(
                "assert_no_filter_tokens! failed: {:?} still contains {:?}",
                text,
                found.iter().map(ToString::to_string).collect::<Vec<_>>()
            );
        }
    }};
}

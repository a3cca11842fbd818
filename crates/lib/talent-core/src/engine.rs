//! Pure matching primitives.
//!
//! Everything here is side-effect free and CPU-only, so it may run on any
//! worker without synchronization.

/// Case handling for substring matches.
///
/// Name lookup and skill lookup disagreed on case folding in the original
/// data contracts, so the choice is an explicit parameter rather than an
/// assumption baked into the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchCase {
    Sensitive,
    Insensitive,
}

/// Unicode-aware substring containment.
///
/// The insensitive arm folds both sides with `str::to_lowercase`, so
/// non-ASCII tags like `"Communicatie"` match regardless of input casing.
#[must_use]
pub fn contains_with_case(haystack: &str, needle: &str, case: MatchCase) -> bool {
    match case {
        MatchCase::Sensitive => haystack.contains(needle),
        MatchCase::Insensitive => haystack.to_lowercase().contains(&needle.to_lowercase()),
    }
}

/// True when at least one tag contains `query` as a case-insensitive
/// substring.
///
/// An absent or empty tag list never matches and never errors. The empty
/// query is a substring of every tag, so it matches exactly the records with
/// a non-empty list; that pass-through is deliberate.
#[must_use]
pub fn any_tag_contains(tags: Option<&[String]>, query: &str) -> bool {
    tags.is_some_and(|tags| {
        tags.iter()
            .any(|tag| contains_with_case(tag, query, MatchCase::Insensitive))
    })
}

//! Generic skill catalog.
//!
//! The employee and job-offering domains expose the same five query shapes
//! (list, get-by-id, get-by-name, find-by-hard-skill, find-by-soft-skill),
//! so the catalog is written once over [`SkillRecord`] and instantiated per
//! dataset instead of duplicating per-domain dispatch code.

use talent_store::{Dataset, SkillRecord};

use crate::engine::{MatchCase, any_tag_contains, contains_with_case};

/// Which tag list a skill search targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillField {
    Hard,
    Soft,
}

/// Read-only query service over a single dataset.
#[derive(Debug)]
pub struct SkillCatalog<R> {
    dataset: Dataset<R>,
    name_match: MatchCase,
}

impl<R: SkillRecord> SkillCatalog<R> {
    /// Wraps a loaded dataset. Name lookup defaults to case-sensitive
    /// matching, the contract of the original employee lookup.
    #[must_use]
    pub const fn new(dataset: Dataset<R>) -> Self {
        Self {
            dataset,
            name_match: MatchCase::Sensitive,
        }
    }

    /// Overrides the case handling used by [`Self::get_by_name`].
    #[must_use]
    pub const fn with_name_match(mut self, name_match: MatchCase) -> Self {
        self.name_match = name_match;
        self
    }

    /// All records in dataset order.
    #[must_use]
    pub fn list(&self) -> &[R] {
        self.dataset.all()
    }

    /// Record with the given id, if any.
    #[must_use]
    pub fn get(&self, id: i64) -> Option<&R> {
        self.dataset.get_by_id(id)
    }

    /// First record (in dataset order) whose name contains `query` as a
    /// substring. Records without a name are skipped.
    #[must_use]
    pub fn get_by_name(&self, query: &str) -> Option<&R> {
        self.dataset.all().iter().find(|record| {
            record
                .name()
                .is_some_and(|name| contains_with_case(name, query, self.name_match))
        })
    }

    /// All records whose targeted tag list contains `query` as a
    /// case-insensitive substring, in dataset order. No ranking, no scoring.
    pub fn find_by_skill(&self, field: SkillField, query: &str) -> Vec<&R> {
        let select: fn(&R) -> Option<&[String]> = match field {
            SkillField::Hard => R::hard_skills,
            SkillField::Soft => R::soft_skills,
        };
        self.dataset.filter(|record| any_tag_contains(select(record), query))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dataset.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }
}

use std::collections::HashSet;
use std::error::Error;
use std::fmt;

use serde::de::DeserializeOwned;

use crate::models::SkillRecord;

/// Error raised while loading a dataset artifact.
///
/// Every variant is fatal: the process must not serve traffic with a missing
/// or partially-loaded dataset.
#[derive(Debug)]
pub enum DatasetError {
    Malformed(String),
    DuplicateId(i64),
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(message) => write!(f, "malformed dataset artifact: {message}"),
            Self::DuplicateId(id) => write!(f, "duplicate record id in dataset: {id}"),
        }
    }
}

impl Error for DatasetError {}

/// Immutable, ordered snapshot of a record collection.
///
/// Built exactly once at startup and shared read-only for the process
/// lifetime, so readers never need locking. Insertion order is the artifact
/// order and is preserved by every accessor.
#[derive(Debug, Clone)]
pub struct Dataset<R> {
    records: Vec<R>,
}

impl<R: SkillRecord + DeserializeOwned> Dataset<R> {
    /// Parses a JSON array of records into a dataset snapshot.
    ///
    /// The byte sourcing (embedded artifact, file override) is the caller's
    /// concern; this only defines the load contract.
    ///
    /// # Errors
    /// Returns [`DatasetError::Malformed`] for invalid JSON or schema
    /// mismatches and [`DatasetError::DuplicateId`] when two records share an
    /// id.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let records: Vec<R> =
            serde_json::from_str(json).map_err(|err| DatasetError::Malformed(err.to_string()))?;

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id()) {
                return Err(DatasetError::DuplicateId(record.id()));
            }
        }

        Ok(Self { records })
    }
}

impl<R: SkillRecord> Dataset<R> {
    /// All records in stable insertion order.
    #[must_use]
    pub fn all(&self) -> &[R] {
        &self.records
    }

    /// Looks up a record by id. Ids are unique, so at most one record matches.
    #[must_use]
    pub fn get_by_id(&self, id: i64) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Order-preserving filter over the snapshot. Borrows only, never copies
    /// or mutates the underlying collection.
    pub fn filter(&self, predicate: impl Fn(&R) -> bool) -> Vec<&R> {
        self.records.iter().filter(|record| predicate(record)).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Employee;

    const SAMPLE: &str = r#"[
        { "id": 1, "name": "Ann", "hardSkills": ["Azure", "C#"] },
        { "id": 2, "name": "Bo", "hardSkills": ["Java"] },
        { "id": 3, "name": "Cas" }
    ]"#;

    #[test]
    fn loads_records_in_artifact_order() {
        let dataset: Dataset<Employee> = Dataset::from_json(SAMPLE).expect("sample should load");

        let ids: Vec<i64> = dataset.all().iter().map(SkillRecord::id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(dataset.len(), 3);
        assert!(!dataset.is_empty());
    }

    #[test]
    fn get_by_id_round_trips_every_record() {
        let dataset: Dataset<Employee> = Dataset::from_json(SAMPLE).expect("sample should load");

        for record in dataset.all() {
            let found = dataset.get_by_id(record.id()).expect("id should resolve");
            assert_eq!(found, record);
        }
        assert!(dataset.get_by_id(99).is_none());
    }

    #[test]
    fn filter_preserves_order_and_borrows() {
        let dataset: Dataset<Employee> = Dataset::from_json(SAMPLE).expect("sample should load");

        let matches = dataset.filter(|record| record.id() != 2);
        let ids: Vec<i64> = matches.iter().map(|record| record.id()).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(dataset.len(), 3);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = r#"[ { "id": 1, "name": "Ann" }, { "id": 1, "name": "Bo" } ]"#;

        let err = Dataset::<Employee>::from_json(json).expect_err("duplicate ids should fail");
        assert!(matches!(err, DatasetError::DuplicateId(1)));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = Dataset::<Employee>::from_json("{ not json").expect_err("garbage should fail");
        assert!(matches!(err, DatasetError::Malformed(_)));
    }

    #[test]
    fn rejects_schema_mismatch() {
        let json = r#"[ { "id": "not-a-number" } ]"#;

        let err = Dataset::<Employee>::from_json(json).expect_err("bad id type should fail");
        assert!(matches!(err, DatasetError::Malformed(_)));
    }
}

use talent_store::{Dataset, DatasetError, Employee, JobOffering};
use tracing::info;

use crate::catalog::SkillCatalog;

/// Shared, read-only services bundle built once at startup.
///
/// Both catalogs are immutable snapshots, so a single instance is safely
/// shared across every session without locking.
#[derive(Debug)]
pub struct TalentServices {
    employees: SkillCatalog<Employee>,
    offerings: SkillCatalog<JobOffering>,
}

impl TalentServices {
    /// Wraps two loaded dataset snapshots.
    #[must_use]
    pub fn new(employees: Dataset<Employee>, offerings: Dataset<JobOffering>) -> Self {
        let employees = SkillCatalog::new(employees);
        let offerings = SkillCatalog::new(offerings);

        info!(
            employees = employees.len(),
            job_offerings = offerings.len(),
            "loaded dataset snapshots"
        );

        Self {
            employees,
            offerings,
        }
    }

    /// Builds the services bundle from the two JSON dataset artifacts.
    ///
    /// # Errors
    /// Returns the first [`DatasetError`] encountered; the caller must treat
    /// any failure as fatal and refuse to serve traffic.
    pub fn from_json(employees_json: &str, offerings_json: &str) -> Result<Self, DatasetError> {
        Ok(Self::new(
            Dataset::from_json(employees_json)?,
            Dataset::from_json(offerings_json)?,
        ))
    }

    #[must_use]
    pub const fn employees(&self) -> &SkillCatalog<Employee> {
        &self.employees
    }

    #[must_use]
    pub const fn offerings(&self) -> &SkillCatalog<JobOffering> {
        &self.offerings
    }
}

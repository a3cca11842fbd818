//! Bundled dataset artifacts and startup loading.
//!
//! The canonical artifacts are compiled into the binary; a filesystem
//! override exists for swapping datasets without rebuilding. Either way the
//! load happens exactly once, before any transport is opened, and any
//! failure is fatal.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};

use talent_core::TalentServices;
use talent_store::{Dataset, DatasetError};
use tracing::info;

use crate::config::TalentConfig;

const EMPLOYEES_JSON: &str = include_str!("../data/employees.json");
const JOB_OFFERINGS_JSON: &str = include_str!("../data/jobofferings.json");

const ARTIFACT_EMPLOYEES: &str = "employees";
const ARTIFACT_OFFERINGS: &str = "job offerings";

/// Fatal startup error while sourcing or parsing a dataset artifact.
#[derive(Debug)]
pub enum DatasetLoadError {
    Read {
        artifact: &'static str,
        path: PathBuf,
        message: String,
    },
    Parse {
        artifact: &'static str,
        source: DatasetError,
    },
}

impl fmt::Display for DatasetLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read {
                artifact,
                path,
                message,
            } => {
                let path = path.display();
                write!(f, "failed to read {artifact} dataset at {path}: {message}")
            }
            Self::Parse { artifact, source } => {
                write!(f, "failed to load {artifact} dataset: {source}")
            }
        }
    }
}

impl Error for DatasetLoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { .. } => None,
            Self::Parse { source, .. } => Some(source),
        }
    }
}

/// Builds the shared services bundle from the bundled artifacts, honoring
/// any configured filesystem overrides.
///
/// # Errors
/// Returns a [`DatasetLoadError`] when an override is unreadable or either
/// artifact fails to parse; the daemon must exit without serving.
pub fn build_services(config: &TalentConfig) -> Result<TalentServices, DatasetLoadError> {
    let employees = artifact_json(
        ARTIFACT_EMPLOYEES,
        config.employees_data.as_deref(),
        EMPLOYEES_JSON,
    )?;
    let offerings = artifact_json(
        ARTIFACT_OFFERINGS,
        config.offerings_data.as_deref(),
        JOB_OFFERINGS_JSON,
    )?;

    let employees =
        Dataset::from_json(&employees).map_err(|source| DatasetLoadError::Parse {
            artifact: ARTIFACT_EMPLOYEES,
            source,
        })?;
    let offerings =
        Dataset::from_json(&offerings).map_err(|source| DatasetLoadError::Parse {
            artifact: ARTIFACT_OFFERINGS,
            source,
        })?;

    Ok(TalentServices::new(employees, offerings))
}

fn artifact_json<'a>(
    artifact: &'static str,
    override_path: Option<&Path>,
    embedded: &'a str,
) -> Result<Cow<'a, str>, DatasetLoadError> {
    match override_path {
        Some(path) => {
            info!(artifact, path = %path.display(), "loading dataset override");
            std::fs::read_to_string(path)
                .map(Cow::Owned)
                .map_err(|err| DatasetLoadError::Read {
                    artifact,
                    path: path.to_path_buf(),
                    message: err.to_string(),
                })
        }
        None => Ok(Cow::Borrowed(embedded)),
    }
}

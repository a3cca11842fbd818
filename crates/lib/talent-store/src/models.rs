use serde::{Deserialize, Serialize};

/// Common read surface over the two record kinds.
///
/// Every query operation is written once against this trait; the concrete
/// record types only decide which wire field backs each accessor.
pub trait SkillRecord {
    /// Unique, stable identifier within the record's dataset.
    fn id(&self) -> i64;

    /// Display name (employee name or job offering title).
    fn name(&self) -> Option<&str>;

    /// Technical skill list (`hardSkills` / `requiredSkills` on the wire).
    fn hard_skills(&self) -> Option<&[String]>;

    /// Soft skill list.
    fn soft_skills(&self) -> Option<&[String]>;
}

/// Employee record as stored in the bundled `employees.json` artifact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hard_skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soft_skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_skillset_summary: Option<String>,
}

impl SkillRecord for Employee {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn hard_skills(&self) -> Option<&[String]> {
        self.hard_skills.as_deref()
    }

    fn soft_skills(&self) -> Option<&[String]> {
        self.soft_skills.as_deref()
    }
}

/// Job offering record as stored in the bundled `jobofferings.json` artifact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JobOffering {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soft_skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<String>,
}

impl SkillRecord for JobOffering {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn hard_skills(&self) -> Option<&[String]> {
        self.required_skills.as_deref()
    }

    fn soft_skills(&self) -> Option<&[String]> {
        self.soft_skills.as_deref()
    }
}

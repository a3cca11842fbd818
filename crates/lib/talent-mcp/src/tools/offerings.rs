use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};
use talent_core::SkillField;

use crate::TalentMcp;

/// Parameters for fetching a job offering by id.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GetJobOfferingParams {
    /// The id of the job offering to get details for.
    pub id: i64,
}

/// Parameters for fetching a job offering by (partial) title.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GetJobOfferingByTitleParams {
    /// The (partial) title of the job offering to get details for.
    pub title: String,
}

/// Parameters for finding job offerings by technical skill.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct FindOfferingsByTechnicalSkillParams {
    /// The technical skill to search for (e.g. 'C#', 'Azure', 'React').
    pub skill: String,
}

/// Parameters for finding job offerings by soft skill.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct FindOfferingsBySoftSkillParams {
    /// The soft skill to search for (e.g. 'Teamwerk', 'Communicatie', 'Leiderschap').
    pub skill: String,
}

#[tool_router(router = tool_router_offerings, vis = "pub")]
impl TalentMcp {
    #[tool(description = "Get a list of job offerings.")]
    async fn list_job_offerings(&self) -> Result<CallToolResult, ErrorData> {
        let offerings = self.services().offerings().list();
        Ok(CallToolResult::success(vec![Content::json(offerings)?]))
    }

    #[tool(description = "Get a job offering by id.")]
    async fn get_job_offering(
        &self,
        Parameters(params): Parameters<GetJobOfferingParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let offering = self.services().offerings().get(params.id);
        Ok(CallToolResult::success(vec![Content::json(offering)?]))
    }

    #[tool(description = "Get a job offering by (partial) title.")]
    async fn get_job_offering_by_title(
        &self,
        Parameters(params): Parameters<GetJobOfferingByTitleParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let offering = self.services().offerings().get_by_name(&params.title);
        Ok(CallToolResult::success(vec![Content::json(offering)?]))
    }

    #[tool(
        description = "Find job offerings that require a specific technical skill (case-insensitive, substring match)."
    )]
    async fn find_job_offerings_by_technical_skill(
        &self,
        Parameters(params): Parameters<FindOfferingsByTechnicalSkillParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let offerings = self
            .services()
            .offerings()
            .find_by_skill(SkillField::Hard, &params.skill);
        Ok(CallToolResult::success(vec![Content::json(offerings)?]))
    }

    #[tool(
        description = "Find job offerings that require a specific soft skill (case-insensitive, substring match)."
    )]
    async fn find_job_offerings_by_soft_skill(
        &self,
        Parameters(params): Parameters<FindOfferingsBySoftSkillParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let offerings = self
            .services()
            .offerings()
            .find_by_skill(SkillField::Soft, &params.skill);
        Ok(CallToolResult::success(vec![Content::json(offerings)?]))
    }
}

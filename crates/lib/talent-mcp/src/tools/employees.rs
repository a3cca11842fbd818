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

/// Parameters for fetching an employee by id.
///
/// Unknown parameters are rejected so that malformed invocations fail fast,
/// before any catalog access.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GetEmployeeParams {
    /// The id of the employee to get details for.
    pub id: i64,
}

/// Parameters for fetching an employee by (partial) name.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GetEmployeeByNameParams {
    /// The (partial) name of the employee to get details for.
    pub name: String,
}

/// Parameters for finding employees by hard skill.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct FindEmployeesByHardSkillParams {
    /// The hard skill to search for (e.g. '.NET', 'Azure', 'AI').
    pub skill: String,
}

/// Parameters for finding employees by soft skill.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct FindEmployeesBySoftSkillParams {
    /// The soft skill to search for (e.g. 'Teamwerk', 'Communicatie', 'Leiderschap').
    pub skill: String,
}

#[tool_router(router = tool_router_employees, vis = "pub")]
impl TalentMcp {
    #[tool(description = "Get a list of employees.")]
    async fn list_employees(&self) -> Result<CallToolResult, ErrorData> {
        let employees = self.services().employees().list();
        Ok(CallToolResult::success(vec![Content::json(employees)?]))
    }

    #[tool(description = "Get an employee by id.")]
    async fn get_employee(
        &self,
        Parameters(params): Parameters<GetEmployeeParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let employee = self.services().employees().get(params.id);
        Ok(CallToolResult::success(vec![Content::json(employee)?]))
    }

    #[tool(description = "Get an employee by (partial) name.")]
    async fn get_employee_by_name(
        &self,
        Parameters(params): Parameters<GetEmployeeByNameParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let employee = self.services().employees().get_by_name(&params.name);
        Ok(CallToolResult::success(vec![Content::json(employee)?]))
    }

    #[tool(
        description = "Find employees that have a specific hard skill (case-insensitive, substring match)."
    )]
    async fn find_employees_by_hard_skill(
        &self,
        Parameters(params): Parameters<FindEmployeesByHardSkillParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let employees = self
            .services()
            .employees()
            .find_by_skill(SkillField::Hard, &params.skill);
        Ok(CallToolResult::success(vec![Content::json(employees)?]))
    }

    #[tool(
        description = "Find employees that have a specific soft skill (case-insensitive, substring match)."
    )]
    async fn find_employees_by_soft_skill(
        &self,
        Parameters(params): Parameters<FindEmployeesBySoftSkillParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let employees = self
            .services()
            .employees()
            .find_by_skill(SkillField::Soft, &params.skill);
        Ok(CallToolResult::success(vec![Content::json(employees)?]))
    }
}

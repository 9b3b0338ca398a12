//! PlanApi trait definition

use async_trait::async_trait;

use super::{ApiError, CreatePlanResponse, ExportResponse, Plan, PlanRequest, ProgressResponse, ProgressStatus};

/// The planner service as seen by the client
///
/// Every call is a single request with no retry. Implementations must not
/// reorder calls: the planner relies on `create_plan` resolving before it
/// decides whether to call `get_plan`.
#[async_trait]
pub trait PlanApi: Send + Sync {
    /// `POST /create-plan`
    async fn create_plan(&self, request: &PlanRequest) -> Result<CreatePlanResponse, ApiError>;

    /// `GET /get-plan?plan_id=<id>`
    async fn get_plan(&self, plan_id: &str) -> Result<Plan, ApiError>;

    /// `POST /update-progress`
    async fn update_progress(
        &self,
        plan_id: &str,
        session_uuid: &str,
        status: ProgressStatus,
    ) -> Result<ProgressResponse, ApiError>;

    /// `GET /export?plan_id=<id>`
    async fn export_plan(&self, plan_id: &str) -> Result<ExportResponse, ApiError>;
}

//! The create-then-fetch plan exchange

use tracing::{debug, info, warn};

use crate::api::{ApiError, Plan, PlanApi, PlanRequest};

/// Result of submitting the plan form
#[derive(Debug, Clone, PartialEq)]
pub enum PlanOutcome {
    /// The service created a plan and it was fetched
    Plan(Plan),
    /// The create call succeeded but returned no plan identifier
    Pending,
    /// A request failed or a response could not be decoded
    Failed { reason: String },
}

impl PlanOutcome {
    pub fn is_plan(&self) -> bool {
        matches!(self, PlanOutcome::Plan(_))
    }

    fn failed(stage: &str, err: ApiError) -> Self {
        PlanOutcome::Failed {
            reason: format!("{stage}: {err}"),
        }
    }
}

/// Create a plan and, when the service hands back an identifier, fetch it
///
/// The fetch starts only after the create response has been decoded, and is
/// issued at most once.
pub async fn create_plan(api: &dyn PlanApi, request: &PlanRequest) -> PlanOutcome {
    debug!(user_id = %request.user_id, "create_plan: called");

    let created = match api.create_plan(request).await {
        Ok(created) => created,
        Err(e) => {
            warn!(error = %e, "create_plan: create request failed");
            return PlanOutcome::failed("create-plan", e);
        }
    };

    let Some(plan_id) = created.identifier() else {
        debug!(?created, "create_plan: no plan_id in response");
        return PlanOutcome::Pending;
    };

    info!(%plan_id, days = ?created.days, sessions = ?created.sessions_created, "create_plan: plan created");

    match api.get_plan(plan_id).await {
        Ok(plan) => {
            debug!(sessions = plan.sessions.len(), "create_plan: plan fetched");
            PlanOutcome::Plan(plan)
        }
        Err(e) => {
            warn!(%plan_id, error = %e, "create_plan: fetch failed");
            PlanOutcome::failed("get-plan", e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::mock::{Call, MockPlanApi};
    use crate::api::{CreatePlanResponse, Session};
    use crate::config::PlanDefaults;
    use crate::planner::{FormState, build_request};
    use chrono::NaiveDate;

    fn request() -> PlanRequest {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        build_request(&FormState::default(), &PlanDefaults::default(), date)
    }

    fn created(plan_id: Option<&str>) -> CreatePlanResponse {
        CreatePlanResponse {
            plan_id: plan_id.map(str::to_string),
            ..Default::default()
        }
    }

    fn one_session_plan() -> Plan {
        Plan {
            sessions: vec![Session {
                session_uuid: "a".to_string(),
                date: "2024-01-01".to_string(),
                subject: "CSA".to_string(),
                minutes: 50,
                topic: None,
                status: None,
            }],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_plan_id_triggers_exactly_one_fetch() {
        let api = MockPlanApi::new()
            .with_create(Ok(created(Some("p1"))))
            .with_plan(Ok(one_session_plan()));

        let outcome = create_plan(&api, &request()).await;

        assert_eq!(outcome, PlanOutcome::Plan(one_session_plan()));
        assert_eq!(api.get_calls(), vec!["p1".to_string()]);
        assert!(matches!(api.calls()[0], Call::Create(_)));
    }

    #[tokio::test]
    async fn test_missing_plan_id_is_pending() {
        let api = MockPlanApi::new().with_create(Ok(created(None)));

        let outcome = create_plan(&api, &request()).await;

        assert_eq!(outcome, PlanOutcome::Pending);
        assert!(api.get_calls().is_empty());
        assert_eq!(api.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_plan_id_is_pending() {
        let api = MockPlanApi::new().with_create(Ok(created(Some(""))));

        assert_eq!(create_plan(&api, &request()).await, PlanOutcome::Pending);
        assert!(api.get_calls().is_empty());
    }

    #[tokio::test]
    async fn test_create_failure_skips_fetch() {
        let api = MockPlanApi::new().with_create(Err(ApiError::Status {
            status: 400,
            message: "end_date must be after start_date".to_string(),
        }));

        let outcome = create_plan(&api, &request()).await;

        match outcome {
            PlanOutcome::Failed { reason } => {
                assert!(reason.starts_with("create-plan"));
                assert!(reason.contains("400"));
            }
            other => panic!("expected Failed, got {other:?}"),
        }
        assert!(api.get_calls().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_is_failed() {
        let api = MockPlanApi::new()
            .with_create(Ok(created(Some("p1"))))
            .with_plan(Err(ApiError::Decode("expected value".to_string())));

        let outcome = create_plan(&api, &request()).await;

        assert!(!outcome.is_plan());
        match outcome {
            PlanOutcome::Failed { reason } => assert!(reason.starts_with("get-plan")),
            other => panic!("expected Failed, got {other:?}"),
        }
        assert_eq!(api.get_calls(), vec!["p1".to_string()]);
    }

    #[tokio::test]
    async fn test_request_is_sent_unchanged() {
        let api = MockPlanApi::new().with_create(Ok(created(None)));
        let req = request();

        create_plan(&api, &req).await;

        assert_eq!(api.calls(), vec![Call::Create(req)]);
    }
}

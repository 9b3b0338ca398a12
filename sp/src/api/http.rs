//! reqwest implementation of the planner service client

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use super::{ApiError, CreatePlanResponse, ExportResponse, Plan, PlanApi, PlanRequest, ProgressResponse, ProgressStatus};
use crate::config::ApiConfig;

/// HTTP client for the planner service
#[derive(Debug, Clone)]
pub struct HttpPlanApi {
    base_url: Url,
    http: Client,
}

impl HttpPlanApi {
    /// Create a client for `base_url` with no request timeout
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::build(base_url, None)
    }

    /// Create a client from API configuration
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        debug!(?config, "from_config: called");
        Self::build(&config.base_url, config.timeout_ms.map(Duration::from_millis))
    }

    fn build(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let base_url = parse_base_url(base_url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            debug!(?timeout, "build: request timeout set");
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ApiError::Network)?;

        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url.join(path).map_err(|e| ApiError::InvalidBaseUrl {
            url: self.base_url.to_string(),
            reason: e.to_string(),
        })
    }

    /// Send a request and decode a JSON body from a successful response
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        if !(200..300).contains(&status) {
            debug!(%status, "send: API error");
            return Err(ApiError::from_body(status, &body));
        }

        serde_json::from_str(&body).map_err(|e| {
            debug!(error = %e, "send: failed to decode body");
            ApiError::Decode(e.to_string())
        })
    }
}

/// Parse a base URL so that endpoint paths join beneath it
fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let invalid = |reason: String| ApiError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };

    let mut url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(invalid("not a base URL".to_string()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[async_trait]
impl PlanApi for HttpPlanApi {
    async fn create_plan(&self, request: &PlanRequest) -> Result<CreatePlanResponse, ApiError> {
        debug!(user_id = %request.user_id, subjects = request.subjects.len(), "create_plan: called");
        let url = self.endpoint("create-plan")?;
        self.send(self.http.post(url).json(request)).await
    }

    async fn get_plan(&self, plan_id: &str) -> Result<Plan, ApiError> {
        debug!(%plan_id, "get_plan: called");
        let url = self.endpoint("get-plan")?;
        self.send(self.http.get(url).query(&[("plan_id", plan_id)])).await
    }

    async fn update_progress(
        &self,
        plan_id: &str,
        session_uuid: &str,
        status: ProgressStatus,
    ) -> Result<ProgressResponse, ApiError> {
        debug!(%plan_id, %session_uuid, %status, "update_progress: called");
        let url = self.endpoint("update-progress")?;
        let query = [
            ("plan_id", plan_id),
            ("session_uuid", session_uuid),
            ("status", status.as_str()),
        ];
        self.send(self.http.post(url).query(&query)).await
    }

    async fn export_plan(&self, plan_id: &str) -> Result<ExportResponse, ApiError> {
        debug!(%plan_id, "export_plan: called");
        let url = self.endpoint("export")?;
        self.send(self.http.get(url).query(&[("plan_id", plan_id)])).await
    }
}

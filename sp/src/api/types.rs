//! Wire types exchanged with the planner service

use serde::{Deserialize, Serialize};

/// A study subject and its scheduling weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectIn {
    pub name: String,
    pub weight: u32,
}

/// Body of `POST /create-plan`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub user_id: String,
    pub subjects: Vec<SubjectIn>,
    pub start_date: String,
    /// Omitted from the body when unset; the service picks start + 14 days
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// `None` is a value that failed numeric coercion and is sent as `null`
    pub hours_per_day: Option<f64>,
    pub session_length_minutes: u32,
}

/// Response of `POST /create-plan`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatePlanResponse {
    #[serde(default)]
    pub plan_id: Option<String>,
    #[serde(default)]
    pub days: Option<i64>,
    #[serde(default)]
    pub sessions_created: Option<u64>,
}

impl CreatePlanResponse {
    /// The plan identifier, if the service returned a usable one
    pub fn identifier(&self) -> Option<&str> {
        self.plan_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Plan metadata stored by the service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanInfo {
    #[serde(default)]
    pub plan_uuid: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub hours_per_day: Option<f64>,
    #[serde(default)]
    pub session_length_minutes: Option<u32>,
}

/// A subject as stored alongside a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectRecord {
    pub name: String,
    #[serde(default)]
    pub weight: Option<u32>,
    #[serde(default)]
    pub topics_count: Option<u32>,
}

/// One scheduled study block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub session_uuid: String,
    pub date: String,
    pub subject: String,
    pub minutes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Response of `GET /get-plan`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<PlanInfo>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subjects: Vec<SubjectRecord>,
    pub sessions: Vec<Session>,
}

/// Status values accepted by `POST /update-progress`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ProgressStatus {
    Done,
    Skipped,
}

impl ProgressStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressStatus::Done => "done",
            ProgressStatus::Skipped => "skipped",
        }
    }
}

impl std::fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response of `POST /update-progress`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressResponse {
    pub updated: bool,
    pub session: Session,
}

/// One row of `GET /export`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportEntry {
    pub date: String,
    pub subject: String,
    pub minutes: u32,
    pub status: String,
    pub session_uuid: String,
}

/// Response of `GET /export`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportResponse {
    pub export: Vec<ExportEntry>,
}

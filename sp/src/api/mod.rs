//! Planner service API
//!
//! Wire types, the [`PlanApi`] trait, and its reqwest-backed implementation.

pub mod client;
mod error;
mod http;
mod types;

pub use client::PlanApi;
pub use error::ApiError;
pub use http::HttpPlanApi;
pub use types::{
    CreatePlanResponse, ExportEntry, ExportResponse, Plan, PlanInfo, PlanRequest, ProgressResponse, ProgressStatus,
    Session, SubjectIn, SubjectRecord,
};

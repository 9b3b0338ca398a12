//! studyplan - client for the study planner service
//!
//! Collects subject preferences, asks the planner service to build a plan,
//! and renders the returned sessions as cards.
//!
//! # Flow
//!
//! ```text
//! FormState ──build_request──▶ PlanRequest ──POST /create-plan──▶ plan_id?
//!                                                                  │
//!                              PlanOutcome::Pending ◀── no ────────┤
//!                                                                  yes
//!                                                                  ▼
//!                  PlannerView ◀── PlanOutcome::Plan ◀── GET /get-plan
//! ```
//!
//! # Modules
//!
//! - [`api`] - wire types, the `PlanApi` trait, and the HTTP client
//! - [`planner`] - form coercion and the create-then-fetch exchange
//! - [`view`] - view state and terminal rendering
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod api;
pub mod cli;
pub mod config;
pub mod planner;
pub mod view;

pub use api::{ApiError, HttpPlanApi, Plan, PlanApi, PlanRequest, Session};
pub use config::Config;
pub use planner::{FormState, PlanOutcome, build_request, create_plan};
pub use view::{PlannerView, Screen};

//! Turning form input into a plan
//!
//! [`build_request`] coerces the raw form into a [`PlanRequest`](crate::api::PlanRequest);
//! [`create_plan`] runs the create-then-fetch exchange and reports a [`PlanOutcome`].

mod flow;
mod form;

pub use flow::{PlanOutcome, create_plan};
pub use form::{FormState, build_request, coerce_number, parse_subjects, today};

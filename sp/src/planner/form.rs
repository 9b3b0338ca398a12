//! Form state and plan request construction

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::{PlanRequest, SubjectIn};
use crate::config::PlanDefaults;

/// Raw field values as the user typed them
///
/// Nothing here is validated; values are coerced only when a request is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormState {
    /// Comma separated subject names
    pub subjects_text: String,
    /// `YYYY-MM-DD`, or empty for today
    pub start_date: String,
    /// Optional last day of the plan, empty to let the service decide
    pub end_date: String,
    pub hours: String,
}

impl FormState {
    /// A form pre-filled with the configured defaults
    pub fn from_defaults(defaults: &PlanDefaults) -> Self {
        Self {
            subjects_text: defaults.default_subjects.clone(),
            start_date: String::new(),
            end_date: String::new(),
            hours: defaults.default_hours.clone(),
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::from_defaults(&PlanDefaults::default())
    }
}

/// Split comma separated subjects, trimming each name and giving all the same weight
///
/// Empty segments are kept as empty names.
pub fn parse_subjects(text: &str, weight: u32) -> Vec<SubjectIn> {
    text.split(',')
        .map(|s| SubjectIn {
            name: s.trim().to_string(),
            weight,
        })
        .collect()
}

/// Numeric cast of a form field
///
/// Blank input is zero; anything that is not a finite decimal number is `None`.
pub fn coerce_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Today's date in UTC, used when the start date is left blank
pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

/// Build the create-plan payload from the form
pub fn build_request(form: &FormState, defaults: &PlanDefaults, today: NaiveDate) -> PlanRequest {
    debug!(?form, "build_request: called");

    let start_date = if form.start_date.is_empty() {
        debug!("build_request: start date blank, using today");
        today.format("%Y-%m-%d").to_string()
    } else {
        form.start_date.clone()
    };

    let end_date = Some(form.end_date.clone()).filter(|d| !d.is_empty());

    let hours_per_day = coerce_number(&form.hours);
    if hours_per_day.is_none() {
        debug!(hours = %form.hours, "build_request: hours is not a number");
    }

    PlanRequest {
        user_id: defaults.user_id.clone(),
        subjects: parse_subjects(&form.subjects_text, defaults.subject_weight),
        start_date,
        end_date,
        hours_per_day,
        session_length_minutes: defaults.session_length_minutes,
    }
}

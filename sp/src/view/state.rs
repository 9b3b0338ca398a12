//! Top-level view state

use tracing::debug;

use crate::api::Plan;
use crate::planner::{FormState, PlanOutcome};
use crate::view::render::{render_form, render_plan};

/// Which screen the planner is showing
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen<'a> {
    Form(&'a FormState),
    Plan(&'a Plan),
}

/// The planner's state: the form, and the plan once one has been fetched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlannerView {
    form: FormState,
    plan: Option<Plan>,
}

impl PlannerView {
    pub fn new(form: FormState) -> Self {
        Self { form, plan: None }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn plan(&self) -> Option<&Plan> {
        self.plan.as_ref()
    }

    pub fn screen(&self) -> Screen<'_> {
        match &self.plan {
            Some(plan) => Screen::Plan(plan),
            None => Screen::Form(&self.form),
        }
    }

    pub fn set_subjects_text(&mut self, value: impl Into<String>) {
        self.form.subjects_text = value.into();
    }

    pub fn set_start_date(&mut self, value: impl Into<String>) {
        self.form.start_date = value.into();
    }

    pub fn set_end_date(&mut self, value: impl Into<String>) {
        self.form.end_date = value.into();
    }

    pub fn set_hours(&mut self, value: impl Into<String>) {
        self.form.hours = value.into();
    }

    /// Move to the plan screen on success; any other outcome leaves the view untouched
    ///
    /// Returns true if the screen changed.
    pub fn apply_outcome(&mut self, outcome: PlanOutcome) -> bool {
        match outcome {
            PlanOutcome::Plan(plan) => {
                debug!(sessions = plan.sessions.len(), "apply_outcome: showing plan");
                self.plan = Some(plan);
                true
            }
            other => {
                debug!(?other, "apply_outcome: staying on form");
                false
            }
        }
    }

    pub fn render(&self, color: bool) -> String {
        match self.screen() {
            Screen::Form(form) => render_form(form, color),
            Screen::Plan(plan) => render_plan(plan, color),
        }
    }
}

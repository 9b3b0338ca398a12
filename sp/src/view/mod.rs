//! Planner screens
//!
//! [`PlannerView`] owns all UI state; rendering functions only read it.

mod prompt;
mod render;
mod state;

pub use prompt::{LineReader, TerminalReader, prompt_form};
pub use render::{duplicate_keys, render_export, render_form, render_plan, render_progress, session_line};
pub use state::{PlannerView, Screen};

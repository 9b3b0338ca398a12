//! Interactive form entry

use eyre::{Context, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

use super::PlannerView;

/// Source of edited input lines
pub trait LineReader {
    /// Read one line with `initial` pre-filled; `None` means the user cancelled
    fn read_line(&mut self, prompt: &str, initial: &str) -> Result<Option<String>>;
}

/// Terminal line editor backed by rustyline
pub struct TerminalReader {
    editor: DefaultEditor,
}

impl TerminalReader {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().context("Failed to initialise line editor")?;
        Ok(Self { editor })
    }
}

impl LineReader for TerminalReader {
    fn read_line(&mut self, prompt: &str, initial: &str) -> Result<Option<String>> {
        match self.editor.readline_with_initial(prompt, (initial, "")) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                debug!("read_line: cancelled");
                Ok(None)
            }
            Err(e) => Err(e).context("Failed to read input"),
        }
    }
}

/// Walk the user through every form field, writing each answer into the view
///
/// Fields are pre-filled with their current values and stored exactly as
/// submitted. Returns false if the user cancelled.
pub fn prompt_form(reader: &mut dyn LineReader, view: &mut PlannerView) -> Result<bool> {
    debug!("prompt_form: called");

    let Some(subjects) = reader.read_line("Subjects (comma separated): ", &view.form().subjects_text)? else {
        return Ok(false);
    };
    view.set_subjects_text(subjects);

    let Some(start) = reader.read_line("Start Date (YYYY-MM-DD, blank for today): ", &view.form().start_date)? else {
        return Ok(false);
    };
    view.set_start_date(start.trim());

    let Some(end) = reader.read_line("End Date (optional): ", &view.form().end_date)? else {
        return Ok(false);
    };
    view.set_end_date(end.trim());

    let Some(hours) = reader.read_line("Hours per day: ", &view.form().hours)? else {
        return Ok(false);
    };
    view.set_hours(hours);

    Ok(true)
}

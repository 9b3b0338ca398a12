//! studyplan - study planner client
//!
//! CLI entry point: loads config, builds the HTTP client, dispatches commands.

use std::path::PathBuf;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::{debug, info};

use studyplan::api::{HttpPlanApi, PlanApi, ProgressStatus};
use studyplan::cli::{Cli, Command, OutputFormat};
use studyplan::config::Config;
use studyplan::planner::{self, FormState, PlanOutcome};
use studyplan::view::{self, PlannerView, TerminalReader};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Priority: CLI --log-level > config file > WARN, so stdout stays clean for cards
    let level = match cli_log_level.or(config_log_level) {
        Some(s) => match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", s);
                tracing::Level::WARN
            }
        },
        None => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .try_init()
        .map_err(|e| eyre::eyre!("{}", e))?;

    debug!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let mut config = load_config(cli.config.as_ref())?;
    if let Some(base_url) = cli.base_url {
        debug!(%base_url, "main: base URL overridden from CLI");
        config.api.base_url = base_url;
    }

    let api = HttpPlanApi::from_config(&config.api).context("Failed to create planner client")?;
    info!("studyplan using {}", api.base_url());

    let color = colored::control::SHOULD_COLORIZE.should_colorize();

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        None => cmd_new(&api, &config, OutputFormat::Text, color).await,
        Some(Command::New { format }) => cmd_new(&api, &config, format, color).await,
        Some(Command::Create {
            subjects,
            start_date,
            end_date,
            hours,
            format,
        }) => {
            let mut view = PlannerView::new(FormState::from_defaults(&config.plan));
            if let Some(subjects) = subjects {
                view.set_subjects_text(subjects);
            }
            if let Some(start_date) = start_date {
                view.set_start_date(start_date);
            }
            if let Some(end_date) = end_date {
                view.set_end_date(end_date);
            }
            if let Some(hours) = hours {
                view.set_hours(hours);
            }
            submit(&api, &config, view, format, color).await
        }
        Some(Command::Show { plan_id, format }) => cmd_show(&api, &plan_id, format, color).await,
        Some(Command::Progress {
            plan_id,
            session_uuid,
            status,
        }) => cmd_progress(&api, &plan_id, &session_uuid, status, color).await,
        Some(Command::Export { plan_id, format }) => cmd_export(&api, &plan_id, format, color).await,
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    Config::load(path).context("Failed to load configuration")
}

async fn cmd_new(api: &dyn PlanApi, config: &Config, format: OutputFormat, color: bool) -> Result<()> {
    debug!("cmd_new: called");
    let mut view = PlannerView::new(FormState::from_defaults(&config.plan));
    print!("{}", view.render(color));

    let mut reader = TerminalReader::new()?;
    if !view::prompt_form(&mut reader, &mut view)? {
        println!("{}", "Cancelled".yellow());
        return Ok(());
    }

    submit(api, config, view, format, color).await
}

/// Build the request from the form, run the create-then-fetch exchange, and show the result
async fn submit(
    api: &dyn PlanApi,
    config: &Config,
    mut view: PlannerView,
    format: OutputFormat,
    color: bool,
) -> Result<()> {
    let request = planner::build_request(view.form(), &config.plan, planner::today());
    debug!(?request, "submit: built request");

    match planner::create_plan(api, &request).await {
        PlanOutcome::Failed { reason } => Err(eyre::eyre!("Failed to create plan: {}", reason)),
        PlanOutcome::Pending => Err(eyre::eyre!("The planner service did not return a plan id")),
        outcome => {
            view.apply_outcome(outcome);
            match (format, view.plan()) {
                (OutputFormat::Json, Some(plan)) => print_json(plan),
                _ => {
                    print!("{}", view.render(color));
                    Ok(())
                }
            }
        }
    }
}

async fn cmd_show(api: &dyn PlanApi, plan_id: &str, format: OutputFormat, color: bool) -> Result<()> {
    debug!(%plan_id, "cmd_show: called");
    let plan = api
        .get_plan(plan_id)
        .await
        .context(format!("Failed to fetch plan {}", plan_id))?;

    match format {
        OutputFormat::Json => print_json(&plan),
        OutputFormat::Text => {
            print!("{}", view::render_plan(&plan, color));
            Ok(())
        }
    }
}

async fn cmd_progress(
    api: &dyn PlanApi,
    plan_id: &str,
    session_uuid: &str,
    status: ProgressStatus,
    color: bool,
) -> Result<()> {
    debug!(%plan_id, %session_uuid, %status, "cmd_progress: called");
    let resp = api
        .update_progress(plan_id, session_uuid, status)
        .await
        .context(format!("Failed to update session {}", session_uuid))?;

    print!("{}", view::render_progress(&resp, color));
    Ok(())
}

async fn cmd_export(api: &dyn PlanApi, plan_id: &str, format: OutputFormat, color: bool) -> Result<()> {
    debug!(%plan_id, "cmd_export: called");
    let resp = api
        .export_plan(plan_id)
        .await
        .context(format!("Failed to export plan {}", plan_id))?;

    match format {
        OutputFormat::Json => print_json(&resp),
        OutputFormat::Text => {
            print!("{}", view::render_export(&resp.export, color));
            Ok(())
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

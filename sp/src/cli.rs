//! CLI command definitions and subcommands

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::api::ProgressStatus;

/// studyplan - study planner client
#[derive(Parser, Debug)]
#[command(name = "sp", author, version, about = "Create and view study plans from the planner service")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    /// Planner service base URL (overrides config)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Subcommand to execute; defaults to the interactive form
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fill in the plan form interactively, then create the plan
    New {
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Create a plan from flags
    Create {
        /// Comma separated subject names
        #[arg(short, long)]
        subjects: Option<String>,

        /// First day of the plan (YYYY-MM-DD, default today)
        #[arg(long)]
        start_date: Option<String>,

        /// Last day of the plan (default decided by the service)
        #[arg(long)]
        end_date: Option<String>,

        /// Study hours per day
        #[arg(long)]
        hours: Option<String>,

        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Show an existing plan
    Show {
        plan_id: String,

        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Mark a session as done or skipped
    Progress {
        plan_id: String,

        session_uuid: String,

        #[arg(value_enum)]
        status: ProgressStatus,
    },

    /// Export a plan's sessions
    Export {
        plan_id: String,

        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

/// Output format for plan-producing commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

//! Start command
//!
//! Start timing a milestone.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use timer_core::duration::format_duration;
use timer_core::TimerError;

use super::AppContext;

/// Arguments for the start command
#[derive(Debug, Args)]
pub struct StartArgs {
    /// Name of the milestone
    pub milestone: String,

    /// Name of the project
    #[arg(long, short)]
    pub project: String,
}

/// Execute the start command
pub fn execute(ctx: &AppContext, args: StartArgs) -> Result<()> {
    let manager = ctx.manager();

    match manager.start(&args.project, &args.milestone) {
        Ok(session) => {
            println!("{}", "Timer started.".green().bold());
            println!("  Project  : {}", session.project);
            println!("  Milestone: {}", session.milestone);
            Ok(())
        }
        Err(TimerError::TimerAlreadyRunning {
            project,
            milestone,
            started_at,
        }) => {
            let elapsed = format_duration(chrono::Utc::now() - started_at);
            eprintln!("{}", "A timer is already running!".yellow().bold());
            eprintln!("  Project  : {}", project);
            eprintln!("  Milestone: {}", milestone);
            eprintln!("  Elapsed  : {}", elapsed);
            eprintln!("\nRun '{}' to stop it first.", "timer stop".cyan());

            Err(TimerError::TimerAlreadyRunning {
                project,
                milestone,
                started_at,
            }
            .into())
        }
        Err(e) => Err(e.into()),
    }
}

//! Status command
//!
//! Show whether a timer is running and for how long.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use timer_core::session::TimerStatus;

use super::AppContext;

/// Arguments for the status command
#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute the status command
pub fn execute(ctx: &AppContext, args: StatusArgs) -> Result<()> {
    let manager = ctx.manager();
    let status = manager.status()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    match status {
        TimerStatus::Idle => println!("No timer is currently running."),
        TimerStatus::Running(timed) => {
            println!("{}", "Timer running.".green().bold());
            println!("  Project  : {}", timed.session.project);
            println!("  Milestone: {}", timed.session.milestone);
            println!("  Elapsed  : {}", timed.duration.cyan());
        }
    }

    Ok(())
}

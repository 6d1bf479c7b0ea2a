//! Stop command
//!
//! Stop the running timer and record the session.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::AppContext;

/// Arguments for the stop command
#[derive(Debug, Args)]
pub struct StopArgs {
    /// Optional note about how the milestone went
    #[arg(long, short)]
    pub note: Option<String>,
}

/// Execute the stop command
pub fn execute(ctx: &AppContext, args: StopArgs) -> Result<()> {
    let manager = ctx.manager();
    let stopped = manager.stop(args.note.as_deref())?;
    let session = &stopped.session;

    println!("{}", "Timer stopped.".green().bold());
    println!("  Project  : {}", session.project);
    println!("  Milestone: {}", session.milestone);
    println!("  Duration : {}", stopped.duration.cyan());
    if let Some(note) = &session.note {
        println!("  Note     : {}", note);
    }

    Ok(())
}

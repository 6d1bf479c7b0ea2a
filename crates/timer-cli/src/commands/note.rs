//! Note command
//!
//! Attach or replace the note on the most recently completed session.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::AppContext;

/// Arguments for the note command
#[derive(Debug, Args)]
pub struct NoteArgs {
    /// Note text
    pub text: String,
}

/// Execute the note command
pub fn execute(ctx: &AppContext, args: NoteArgs) -> Result<()> {
    let manager = ctx.manager();
    let session = manager.note(&args.text)?;

    println!(
        "{} Note saved on {} / {}",
        "✓".green(),
        session.project,
        session.milestone
    );

    Ok(())
}

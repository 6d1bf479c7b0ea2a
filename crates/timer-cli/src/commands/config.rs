//! Config command
//!
//! Inspect the resolved configuration.

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use super::AppContext;

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the config and data file locations
    Path,
}

/// Execute the config command
pub fn execute(ctx: &AppContext, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => show_config(ctx, json),
        ConfigCommand::Path => show_paths(ctx),
    }
}

fn show_config(ctx: &AppContext, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(&ctx.config)?);
        return Ok(());
    }

    println!("{}", "Configuration:".bold().underline());
    if ctx.config_path.exists() {
        println!("{}", ctx.config_path.display().to_string().dimmed());
    } else {
        println!("{}", "(defaults, no config file)".dimmed());
    }
    println!();
    print!("{}", ctx.config.to_toml_string()?);

    Ok(())
}

fn show_paths(ctx: &AppContext) -> Result<()> {
    println!("config: {}", ctx.config_path.display());
    println!("data:   {}", ctx.data_file.display());
    Ok(())
}

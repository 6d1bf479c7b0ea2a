//! Summary command
//!
//! Print completed sessions as one table per project.

use anyhow::Result;
use clap::Args;
use chrono::{DateTime, Utc};
use colored::Colorize;
use std::fmt::Write;

use timer_core::config::DisplayConfig;
use timer_core::session::ProjectSummary;

use super::AppContext;

const HEADERS: [&str; 4] = ["Milestone", "Duration", "Date", "Notes"];

/// Arguments for the summary command
#[derive(Debug, Args)]
pub struct SummaryArgs {
    /// Only show this project (exact, case-sensitive)
    #[arg(long, short)]
    pub project: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute the summary command
pub fn execute(ctx: &AppContext, args: SummaryArgs) -> Result<()> {
    let manager = ctx.manager();
    let project = args.project.as_deref().filter(|p| !p.is_empty());
    let summary = manager.summary(project)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    if summary.is_empty() {
        match project {
            Some(name) => println!("No sessions found for project: {}", name),
            None => println!("No completed sessions yet."),
        }
        return Ok(());
    }

    for group in &summary.groups {
        println!();
        println!("{} {}", "Project:".bold(), group.project.bold());
        print!("{}", render_table(group, &ctx.config.display));
    }

    Ok(())
}

/// Lay out a project's rows as a plain-text table with a Total row
pub fn render_table(group: &ProjectSummary, display: &DisplayConfig) -> String {
    let mut rows: Vec<[String; 4]> = group
        .rows
        .iter()
        .map(|row| {
            let note = if row.note.is_empty() {
                display.empty_note.clone()
            } else {
                row.note.clone()
            };
            [
                row.milestone.clone(),
                row.duration.clone(),
                format_date(&row.started_at, &display.date_format),
                note,
            ]
        })
        .collect();
    rows.push([
        "Total".to_string(),
        group.total.clone(),
        String::new(),
        String::new(),
    ]);

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header = HEADERS.map(String::from);
    out.push_str(&format_line(&header, &widths));
    out.push_str(&format_line(&widths.map(|w| "-".repeat(w)), &widths));
    for row in &rows {
        out.push_str(&format_line(row, &widths));
    }
    out
}

/// Format with the configured pattern; a malformed pattern falls back to ISO dates
fn format_date(at: &DateTime<Utc>, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", at.format(pattern)).is_err() {
        return at.format("%Y-%m-%d").to_string();
    }
    out
}

fn format_line(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ");
    format!("{}\n", line.trim_end())
}

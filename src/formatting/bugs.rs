use colored::*;

use super::utils::*;
use crate::error::BugzillaResult;
use crate::models::Bug;

pub fn format_status_color(status: &str) -> ColoredString {
    match status {
        "NEW" | "UNCONFIRMED" => status.normal(),
        "ASSIGNED" | "IN_PROGRESS" => status.yellow(),
        "RESOLVED" | "VERIFIED" => status.green(),
        "CLOSED" => status.green().dimmed(),
        _ => status.normal(),
    }
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}

pub fn print_bugs(bugs: &[Bug], format: &str) -> BugzillaResult<()> {
    if bugs.is_empty() {
        println!("{}", "No bugs found.".dimmed());
        return Ok(());
    }

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&bugs)?);
        }
        _ => {
            println!("{}", "─".repeat(100).dimmed());
            println!(
                "{:<10} {:<50} {:<12} {:<4} {:<20}",
                "ID".bold(),
                "Summary".bold(),
                "Status".bold(),
                "Pri".bold(),
                "Assignee".bold()
            );
            println!("{}", "─".repeat(100).dimmed());

            for bug in bugs {
                let id = bug.id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string());
                let assignee = bug
                    .assignee_user()
                    .map(|user| user.display_name().to_string())
                    .unwrap_or_else(|| "-".to_string());

                println!(
                    "{:<10} {:<50} {:<12} {:<4} {:<20}",
                    id.blue(),
                    truncate(text(&bug.summary), 50),
                    format_status_color(text(&bug.status)),
                    format_priority(bug.priority.as_deref()),
                    truncate(&assignee, 20),
                );
            }
            println!("{}", "─".repeat(100).dimmed());
        }
    }

    Ok(())
}

pub fn print_single_bug(bug: &Bug, format: &str) -> BugzillaResult<()> {
    if format == "json" {
        println!("{}", serde_json::to_string_pretty(bug)?);
        return Ok(());
    }

    let id = bug.id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string());
    println!("{} {}", format!("Bug {}", id).blue().bold(), text(&bug.summary).bold());
    println!("{}", "─".repeat(80).dimmed());

    let mut status = text(&bug.status).to_string();
    if let Some(resolution) = bug.resolution.as_deref().filter(|r| !r.is_empty()) {
        status = format!("{} {}", status, resolution);
    }
    println!("{:<14} {}", "Status:".dimmed(), format_status_color(&status));
    println!("{:<14} {}", "Priority:".dimmed(), format_priority(bug.priority.as_deref()));

    if bug.product.is_some() || bug.component.is_some() {
        println!("{:<14} {} :: {}", "Component:".dimmed(), text(&bug.product), text(&bug.component));
    }
    if let Some(severity) = &bug.severity {
        println!("{:<14} {}", "Severity:".dimmed(), severity);
    }
    if let Some(user) = bug.assignee_user() {
        println!("{:<14} {}", "Assignee:".dimmed(), user.display_name().green());
    }
    if let Some(user) = bug.creator_user() {
        println!("{:<14} {}", "Reporter:".dimmed(), user.display_name());
    }
    if let Some(keywords) = bug.keywords.as_ref().filter(|k| !k.is_empty()) {
        println!("{:<14} {}", "Keywords:".dimmed(), keywords.join(", ").cyan());
    }
    if let Some(created) = &bug.creation_time {
        println!("{:<14} {}", "Created:".dimmed(), format_relative_time(created));
    }
    if let Some(changed) = &bug.last_change_time {
        println!("{:<14} {}", "Changed:".dimmed(), format_relative_time(changed));
    }
    if let Some(url) = bug.url.as_deref().filter(|u| !u.is_empty()) {
        println!("{:<14} {}", "URL:".dimmed(), url.underline());
    }

    Ok(())
}

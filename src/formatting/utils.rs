use colored::*;
use chrono::{DateTime, Utc};

/// Bugzilla priorities run P1 (highest) to P5; `--` means untriaged.
pub fn format_priority(priority: Option<&str>) -> ColoredString {
    match priority {
        Some("P1") => "P1".red().bold(),
        Some("P2") => "P2".red(),
        Some("P3") => "P3".yellow(),
        Some(p @ ("P4" | "P5")) => p.normal(),
        _ => "--".dimmed(),
    }
}

pub fn format_relative_time(timestamp: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) {
        let now = Utc::now();
        let duration = now.signed_duration_since(parsed);

        if duration.num_days() > 365 {
            format!("{}y ago", duration.num_days() / 365)
        } else if duration.num_days() > 30 {
            format!("{}mo ago", duration.num_days() / 30)
        } else if duration.num_days() > 0 {
            format!("{}d ago", duration.num_days())
        } else if duration.num_hours() > 0 {
            format!("{}h ago", duration.num_hours())
        } else if duration.num_minutes() > 0 {
            format!("{}m ago", duration.num_minutes())
        } else {
            "just now".to_string()
        }
    } else {
        "unknown".to_string()
    }
}

pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

use chrono::{DateTime, Utc};

/// Truncate a string to a maximum length, adding ellipsis if needed
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Format a due date with a relative hint, e.g. "Jun 22, 2025 (in 7d)"
pub fn format_due(due: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let date = due.format("%b %d, %Y");
    let minutes = (due - now).num_minutes();
    if minutes < 0 {
        format!("{} (overdue)", date)
    } else if minutes < 60 * 24 {
        format!("{} (today)", date)
    } else {
        format!("{} (in {}d)", date, minutes / (60 * 24))
    }
}

/// Text progress bar with a trailing percentage, e.g. "█████░░░░░ 50%"
pub fn progress_bar(progress: f64, width: usize) -> String {
    let progress = progress.clamp(0.0, 1.0);
    let filled = ((progress * width as f64).round() as usize).min(width);
    format!(
        "{}{} {:>3}%",
        "█".repeat(filled),
        "░".repeat(width - filled),
        (progress * 100.0).round() as u32
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("Hello", 10), "Hello");
        assert_eq!(truncate_string("Hello World", 8), "Hello...");
        assert_eq!(truncate_string("Hi", 2), "Hi");
        assert_eq!(truncate_string("Höhere Mathematik", 6), "Höh...");
    }

    #[test]
    fn test_format_due() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        assert_eq!(
            format_due(now + Duration::days(7), now),
            "Jun 22, 2025 (in 7d)"
        );
        assert_eq!(format_due(now + Duration::hours(3), now), "Jun 15, 2025 (today)");
        assert_eq!(format_due(now - Duration::days(1), now), "Jun 14, 2025 (overdue)");
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0.5, 10), "█████░░░░░  50%");
        assert_eq!(progress_bar(0.0, 4), "░░░░   0%");
        assert_eq!(progress_bar(2.0, 4), "████ 100%");
    }
}

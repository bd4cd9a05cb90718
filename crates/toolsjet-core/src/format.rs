//! Formatting utilities

/// Format seconds as a MM:SS clock
pub fn clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Format a duration in human-readable form
pub fn duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    }
}

/// Render a fraction in [0, 1] as a fixed-width bar
pub fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!(
        "{}{}",
        "\u{2588}".repeat(filled),
        "\u{2591}".repeat(width - filled)
    )
}

/// Truncate a string to max characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".to_string()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock() {
        assert_eq!(clock(0), "00:00");
        assert_eq!(clock(25 * 60), "25:00");
        assert_eq!(clock(61), "01:01");
        assert_eq!(clock(100 * 60 + 5), "100:05");
    }

    #[test]
    fn test_duration() {
        assert_eq!(duration(42), "42s");
        assert_eq!(duration(125), "2m 5s");
        assert_eq!(duration(3 * 3600 + 120), "3h 2m");
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0.0, 4), "\u{2591}".repeat(4));
        assert_eq!(progress_bar(1.0, 4), "\u{2588}".repeat(4));
        assert_eq!(progress_bar(0.5, 4).chars().filter(|c| *c == '\u{2588}').count(), 2);
        assert_eq!(progress_bar(7.0, 3).chars().count(), 3);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer title", 8), "a lon...");
        assert_eq!(truncate("abcdef", 2), "...");
        assert_eq!(truncate("héllo wörld", 8), "héllo...");
    }
}

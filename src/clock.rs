//! Site uptime
//!
//! The footer clock counts from the instant the site first went live, not
//! from page load.

use chrono::Utc;

/// 2023-12-13T11:00:00Z, when the site first went live.
const LAUNCH_EPOCH: i64 = 1_702_465_200;

/// Whole seconds since launch. Clamped at zero for clients with a skewed clock.
pub fn uptime_secs() -> i64 {
    (Utc::now().timestamp() - LAUNCH_EPOCH).max(0)
}

/// `N days, HH:MM:SS`
pub fn format_uptime(secs: i64) -> String {
    let secs = secs.max(0);
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3_600;
    let minutes = (secs % 3_600) / 60;
    let seconds = secs % 60;
    format!("{} days, {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_zero() {
        assert_eq!(format_uptime(0), "0 days, 00:00:00");
    }

    #[test]
    fn formats_days_and_padding() {
        // 1 day, 1 hour, 1 minute, 1 second
        assert_eq!(format_uptime(90_061), "1 days, 01:01:01");
    }

    #[test]
    fn clamps_negative() {
        assert_eq!(format_uptime(-5), "0 days, 00:00:00");
    }

    #[test]
    fn uptime_is_positive() {
        assert!(uptime_secs() > 0);
    }
}

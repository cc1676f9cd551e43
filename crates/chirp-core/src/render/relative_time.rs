use chrono::{DateTime, Duration, Utc};

/// Phrase the time elapsed between `then` and `now` using the coarsest unit
///
/// More than one whole day gives "N days ago", exactly one gives "yesterday";
/// below a day the largest non-zero of hours, minutes, seconds is used, with a
/// singular unit for 1. A `then` in the future counts as zero elapsed.
///
/// # Example
/// ```
/// use chirp_core::render::relative_time;
/// use chrono::{Duration, TimeZone, Utc};
///
/// let now = Utc.with_ymd_and_hms(2000, 1, 1, 15, 5, 10).unwrap();
/// assert_eq!(relative_time(now - Duration::seconds(70), now), "1 minute ago");
/// assert_eq!(relative_time(now - Duration::hours(4), now), "4 hours ago");
/// ```
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = (now - then).max(Duration::zero());

    let days = elapsed.num_days();
    if days > 1 {
        return format!("{} days ago", days);
    }
    if days == 1 {
        return "yesterday".to_string();
    }

    let hours = elapsed.num_hours();
    if hours > 0 {
        return ago(hours, "hour");
    }

    let minutes = elapsed.num_minutes();
    if minutes > 0 {
        return ago(minutes, "minute");
    }

    ago(elapsed.num_seconds(), "second")
}

fn ago(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}

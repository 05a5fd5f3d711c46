//! Expiration timestamps and the human-relative phrasing used in sections.

use chrono::{DateTime, Duration, Utc};

/// Instant at which a reservation lapses: start + duration.
pub fn expiration(start: DateTime<Utc>, duration_secs: i64) -> DateTime<Utc> {
    start + Duration::seconds(duration_secs)
}

/// Fixed report rendering, real seconds in the last component.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// "in 3 months" / "2 days ago" style phrase for `target` seen from `now`.
/// Threshold table follows the conventional calendar-ish buckets: seconds
/// up to 45, minutes up to 45, hours up to 22, days up to 26, months up to
/// 320 days, then years.
pub fn relative_phrase(target: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = target - now;
    let future = delta >= Duration::zero();
    let secs = delta.num_seconds().abs();

    let body = if secs < 45 {
        "a few seconds".to_string()
    } else if secs < 90 {
        "a minute".to_string()
    } else if secs < 45 * 60 {
        format!("{} minutes", round_div(secs, 60))
    } else if secs < 90 * 60 {
        "an hour".to_string()
    } else if secs < 22 * 3600 {
        format!("{} hours", round_div(secs, 3600))
    } else if secs < 36 * 3600 {
        "a day".to_string()
    } else if secs < 26 * 86_400 {
        format!("{} days", round_div(secs, 86_400))
    } else if secs < 46 * 86_400 {
        "a month".to_string()
    } else if secs < 320 * 86_400 {
        format!("{} months", round_div(secs, 30 * 86_400))
    } else if secs < 548 * 86_400 {
        "a year".to_string()
    } else {
        format!("{} years", round_div(secs, 365 * 86_400))
    };

    if future {
        format!("in {}", body)
    } else {
        format!("{} ago", body)
    }
}

fn round_div(value: i64, unit: i64) -> i64 {
    (value + unit / 2) / unit
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn expiration_adds_duration_seconds() {
        let start = at("2023-01-01T00:00:00Z");
        let end = expiration(start, 31_536_000); // one non-leap year
        assert_eq!(format_timestamp(end), "2024-01-01 00:00:00");
    }

    #[test]
    fn timestamp_renders_real_seconds() {
        // Minutes and seconds deliberately differ so a minutes-for-seconds
        // formatting mixup cannot pass.
        let ts = Utc.with_ymd_and_hms(2023, 6, 5, 7, 8, 9).unwrap();
        assert_eq!(format_timestamp(ts), "2023-06-05 07:08:09");
    }

    #[test]
    fn relative_phrase_future_buckets() {
        let now = at("2023-01-01T00:00:00Z");
        assert_eq!(relative_phrase(now + Duration::seconds(10), now), "in a few seconds");
        assert_eq!(relative_phrase(now + Duration::seconds(60), now), "in a minute");
        assert_eq!(relative_phrase(now + Duration::minutes(10), now), "in 10 minutes");
        assert_eq!(relative_phrase(now + Duration::hours(1), now), "in an hour");
        assert_eq!(relative_phrase(now + Duration::hours(5), now), "in 5 hours");
        assert_eq!(relative_phrase(now + Duration::hours(24), now), "in a day");
        assert_eq!(relative_phrase(now + Duration::days(12), now), "in 12 days");
        assert_eq!(relative_phrase(now + Duration::days(30), now), "in a month");
        assert_eq!(relative_phrase(now + Duration::days(91), now), "in 3 months");
        assert_eq!(relative_phrase(now + Duration::days(365), now), "in a year");
        assert_eq!(relative_phrase(now + Duration::days(730), now), "in 2 years");
    }

    #[test]
    fn relative_phrase_past() {
        let now = at("2023-01-01T00:00:00Z");
        assert_eq!(relative_phrase(now - Duration::days(2), now), "2 days ago");
        assert_eq!(relative_phrase(now - Duration::days(91), now), "3 months ago");
    }
}

use chrono::{DateTime, Utc};

/// en-GB style timestamp, always in UTC, matching what the pages print next
/// to solves and announcements.
pub fn format_date(value: &DateTime<Utc>) -> String {
    value.format("%d/%m/%Y, %H:%M:%S UTC").to_string()
}

/// Splits a remaining duration into (days, hours, minutes, seconds) for the
/// countdown display. Negative input clamps to zero.
pub fn countdown_parts(remaining_secs: i64) -> (i64, i64, i64, i64) {
    let total = remaining_secs.max(0);
    let days = total / 86_400;
    let hours = (total / 3_600) % 24;
    let minutes = (total / 60) % 60;
    let seconds = total % 60;
    (days, hours, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_in_utc() {
        let date = Utc.with_ymd_and_hms(2019, 12, 20, 20, 0, 0).unwrap();
        assert_eq!(format_date(&date), "20/12/2019, 20:00:00 UTC");
    }

    #[test]
    fn countdown_splits_days_hours_minutes_seconds() {
        let secs = 2 * 86_400 + 3 * 3_600 + 4 * 60 + 5;
        assert_eq!(countdown_parts(secs), (2, 3, 4, 5));
    }

    #[test]
    fn countdown_clamps_past_deadlines() {
        assert_eq!(countdown_parts(-30), (0, 0, 0, 0));
        assert_eq!(countdown_parts(0), (0, 0, 0, 0));
    }
}

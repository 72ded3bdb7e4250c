use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// Returns the current time in the configured timezone.
pub fn now_in_timezone(tz: &Tz) -> DateTime<Tz> {
    Utc::now().with_timezone(tz)
}

/// Returns today's date in the configured timezone. Drives the date stamp in
/// export filenames.
pub fn today_local(tz: &Tz) -> NaiveDate {
    now_in_timezone(tz).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_in_timezone_returns_datetime_in_tz() {
        let tz = chrono_tz::UTC;
        let result = now_in_timezone(&tz);
        assert_eq!(result.timezone(), tz);
    }

    #[test]
    fn today_local_matches_utc_today_for_utc() {
        let tz = chrono_tz::UTC;
        assert_eq!(today_local(&tz), Utc::now().date_naive());
    }

    #[test]
    fn today_local_respects_the_offset() {
        // Kiritimati (UTC+14) and Niue (UTC-11) can never share a date.
        let ahead = today_local(&chrono_tz::Pacific::Kiritimati);
        let behind = today_local(&chrono_tz::Pacific::Niue);
        assert!(ahead > behind);
    }
}

//! Whole-hour time arithmetic shared by the filters.

use chrono::NaiveDateTime;

/// Whole hours from `from` to `to`, truncated toward zero.
///
/// Negative when `to` is earlier than `from`. A 1h59m gap counts as 1 hour,
/// and anything under an hour in either direction counts as 0.
pub fn whole_hours_between(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    (to - from).num_hours()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn t0() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_whole_hours_truncates_toward_zero() {
        let t = t0();
        assert_eq!(whole_hours_between(t, t), 0);
        assert_eq!(whole_hours_between(t, t + Duration::minutes(119)), 1);
        assert_eq!(whole_hours_between(t, t + Duration::hours(3)), 3);
        assert_eq!(whole_hours_between(t, t - Duration::minutes(59)), 0);
        assert_eq!(whole_hours_between(t, t - Duration::minutes(61)), -1);
        assert_eq!(whole_hours_between(t, t - Duration::days(6)), -144);
    }
}

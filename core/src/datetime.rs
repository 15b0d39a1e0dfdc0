// SPDX-FileCopyrightText: 2026 Commcal Contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{
    DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc, offset::LocalResult,
};

/// Combines a calendar date and a clock time into an absolute instant,
/// interpreted in `tz`. Production callers pass `Local`; tests pass a
/// `FixedOffset` for determinism.
pub fn combine<Tz: TimeZone>(tz: &Tz, date: NaiveDate, time: NaiveTime) -> DateTime<Tz> {
    from_local_datetime(tz, NaiveDateTime::new(date, time))
}

/// The signed gap between an instant's UTC weekday index and its weekday
/// index in the instant's own timezone, both with Sunday = 0.
///
/// A local weekday label maps to a different UTC weekday whenever the
/// timezone offset pushes the instant across midnight UTC (a local Tuesday
/// evening in the Americas is already UTC Wednesday). Always in `-6..=6`.
pub fn utc_local_day_offset<Tz: TimeZone>(dt: &DateTime<Tz>) -> i32 {
    let utc = dt.with_timezone(&Utc).weekday().num_days_from_sunday() as i32;
    let local = dt.weekday().num_days_from_sunday() as i32;
    utc - local
}

/// Convert the `NaiveDateTime` to `tz`, handling local time ambiguities:
/// - `Single(dt)` returns directly;
/// - `Ambiguous(a, b)` takes the earlier one;
/// - `None` (local time does not exist, e.g., due to DST transition): falls
///   back to UTC combination and then converts.
fn from_local_datetime<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(x) => x,
        LocalResult::Ambiguous(a, b) => {
            // Choose the earlier one
            if a <= b { a } else { b }
        }
        LocalResult::None => Utc.from_utc_datetime(&naive).with_timezone(tz),
    }
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn combines_date_and_time_in_utc() {
        let dt = combine(&Utc, date(2024, 6, 10), time(9, 0));
        let expected = Utc.with_ymd_and_hms(2024, 6, 10, 9, 0, 0).unwrap();
        assert_eq!(dt, expected);
    }

    #[test]
    fn combines_date_and_time_in_fixed_offset() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let dt = combine(&tz, date(2024, 6, 10), time(9, 0));
        let expected = Utc.with_ymd_and_hms(2024, 6, 10, 7, 0, 0).unwrap();
        assert_eq!(dt.with_timezone(&Utc), expected);
    }

    #[test]
    fn day_offset_is_zero_when_utc_shares_the_day() {
        // 2024-06-11 is a Tuesday; midday UTC stays Tuesday in UTC.
        let dt = combine(&Utc, date(2024, 6, 11), time(12, 0));
        assert_eq!(utc_local_day_offset(&dt), 0);
    }

    #[test]
    fn day_offset_is_plus_one_when_utc_is_a_day_ahead() {
        // Local Tuesday 22:00 at UTC-6 is UTC Wednesday 04:00.
        let tz = FixedOffset::west_opt(6 * 3600).unwrap();
        let dt = combine(&tz, date(2024, 6, 11), time(22, 0));
        assert_eq!(utc_local_day_offset(&dt), 1);
    }

    #[test]
    fn day_offset_is_minus_one_when_utc_is_a_day_behind() {
        // Local Tuesday 02:00 at UTC+5 is UTC Monday 21:00.
        let tz = FixedOffset::east_opt(5 * 3600).unwrap();
        let dt = combine(&tz, date(2024, 6, 11), time(2, 0));
        assert_eq!(utc_local_day_offset(&dt), -1);
    }

    #[test]
    fn day_offset_wraps_across_the_weekend() {
        // Local Saturday 20:00 at UTC-5 is UTC Sunday 01:00: 0 - 6 = -6.
        let tz = FixedOffset::west_opt(5 * 3600).unwrap();
        let dt = combine(&tz, date(2024, 6, 15), time(20, 0));
        assert_eq!(utc_local_day_offset(&dt), -6);

        // Local Sunday 02:00 at UTC+5 is UTC Saturday 21:00: 6 - 0 = 6.
        let tz = FixedOffset::east_opt(5 * 3600).unwrap();
        let dt = combine(&tz, date(2024, 6, 16), time(2, 0));
        assert_eq!(utc_local_day_offset(&dt), 6);
    }
}

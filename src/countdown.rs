//! Months-and-days countdown to the wedding weekend.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime};

const MS_PER_DAY: i64 = 86_400_000;

/// Midnight (local time) on the first day of the celebrations.
pub fn wedding_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 18)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    Remaining { months: u32, days: u32 },
    Passed,
}

fn add_months(at: NaiveDateTime, months: u32) -> NaiveDateTime {
    at.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDateTime::MAX)
}

/// Whole months, then days rounded up, from `now` until `target`.
///
/// Adding months clamps to the end of shorter months (Jan 31 + 1 month is
/// Feb 28), and the month count steps back whenever that overshoots.
pub fn countdown(now: NaiveDateTime, target: NaiveDateTime) -> Countdown {
    if now >= target {
        return Countdown::Passed;
    }

    let month_span = (target.year() - now.year()) * 12 + target.month() as i32 - now.month() as i32;
    let mut months = month_span.max(0) as u32;
    let mut base = add_months(now, months);
    while months > 0 && base > target {
        months -= 1;
        base = add_months(now, months);
    }

    let remaining_ms = (target - base).num_milliseconds().max(0);
    let days = ((remaining_ms + MS_PER_DAY - 1) / MS_PER_DAY) as u32;
    Countdown::Remaining { months, days }
}

/// i18n key for the month unit.
pub fn month_label_key(months: u32) -> &'static str {
    if months == 1 {
        "countdown.month_singular"
    } else {
        "countdown.months"
    }
}

/// i18n key for the day unit.
pub fn day_label_key(days: u32) -> &'static str {
    if days == 1 {
        "countdown.day_singular"
    } else {
        "countdown.days"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, 0, 0).unwrap()
    }

    #[test]
    fn wedding_date_is_october_18th() {
        assert_eq!(wedding_start(), at(2026, 10, 18, 0));
    }

    #[test]
    fn whole_months_and_days() {
        assert_eq!(
            countdown(at(2026, 1, 1, 0), wedding_start()),
            Countdown::Remaining { months: 9, days: 17 }
        );
    }

    #[test]
    fn exact_month_boundary() {
        assert_eq!(
            countdown(at(2026, 8, 18, 0), wedding_start()),
            Countdown::Remaining { months: 2, days: 0 }
        );
    }

    #[test]
    fn steps_back_when_month_overshoots() {
        // Jan 31 + 2 months = Mar 31, past Mar 1; Jan 31 + 1 month clamps to Feb 28.
        assert_eq!(
            countdown(at(2026, 1, 31, 12), at(2026, 3, 1, 0)),
            Countdown::Remaining { months: 1, days: 1 }
        );
        // Later in the day than the target: not a full month yet.
        assert_eq!(
            countdown(at(2026, 9, 18, 10), wedding_start()),
            Countdown::Remaining { months: 0, days: 30 }
        );
    }

    #[test]
    fn partial_day_rounds_up() {
        assert_eq!(
            countdown(at(2026, 10, 17, 23), wedding_start()),
            Countdown::Remaining { months: 0, days: 1 }
        );
    }

    #[test]
    fn passed_on_and_after_the_day() {
        assert_eq!(countdown(wedding_start(), wedding_start()), Countdown::Passed);
        assert_eq!(countdown(at(2027, 1, 1, 0), wedding_start()), Countdown::Passed);
    }

    #[test]
    fn singular_labels() {
        assert_eq!(month_label_key(1), "countdown.month_singular");
        assert_eq!(month_label_key(0), "countdown.months");
        assert_eq!(day_label_key(1), "countdown.day_singular");
        assert_eq!(day_label_key(12), "countdown.days");
    }
}

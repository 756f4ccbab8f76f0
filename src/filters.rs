//! Date display filters for the page templates.
//!
//! Three house styles used across the site:
//! - [`readable_date`] — compact, `29 Aug 2026` (bylines, listing rows)
//! - [`date_pretty`] — full month, `29 August 2026` (item page headers)
//! - [`date_readable`] — long form, `August 29, 2026` (prose contexts)

use chrono::NaiveDate;

/// Compact byline form: `29 Aug 2026`.
pub fn readable_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// Full-month form: `29 August 2026`.
pub fn date_pretty(date: NaiveDate) -> String {
    date.format("%d %B %Y").to_string()
}

/// Long locale form: `August 29, 2026`.
pub fn date_readable(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 29).unwrap()
    }

    #[test]
    fn readable_is_compact() {
        assert_eq!(readable_date(date()), "29 Aug 2026");
    }

    #[test]
    fn pretty_spells_out_month() {
        assert_eq!(date_pretty(date()), "29 August 2026");
    }

    #[test]
    fn readable_long_form() {
        assert_eq!(date_readable(date()), "August 29, 2026");
    }

    #[test]
    fn single_digit_day_padding() {
        let d = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        // Compact and pretty forms zero-pad; long form does not
        assert_eq!(readable_date(d), "02 Jan 2026");
        assert_eq!(date_pretty(d), "02 January 2026");
        assert_eq!(date_readable(d), "January 2, 2026");
    }
}

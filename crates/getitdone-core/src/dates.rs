use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Short and full weekday names, lowercase.
pub const WEEKDAY_NAMES: [(&str, Weekday); 14] = [
    ("mon", Weekday::Mon),
    ("monday", Weekday::Mon),
    ("tue", Weekday::Tue),
    ("tuesday", Weekday::Tue),
    ("wed", Weekday::Wed),
    ("wednesday", Weekday::Wed),
    ("thu", Weekday::Thu),
    ("thursday", Weekday::Thu),
    ("fri", Weekday::Fri),
    ("friday", Weekday::Fri),
    ("sat", Weekday::Sat),
    ("saturday", Weekday::Sat),
    ("sun", Weekday::Sun),
    ("sunday", Weekday::Sun),
];

/// Calendar date layouts accepted for explicit dates.
const CALENDAR_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"];

/// Look up a weekday by short or full name, ignoring case.
pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    let name = name.trim();
    WEEKDAY_NAMES
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
        .map(|&(_, weekday)| weekday)
}

/// Days from `today` until the next `target`, in `1..=7`.
///
/// A weekday equal to today's maps to 7: today itself is never returned.
pub fn days_until(today: NaiveDate, target: Weekday) -> u64 {
    let ahead = (7 + target.num_days_from_monday() - today.weekday().num_days_from_monday()) % 7;
    if ahead == 0 {
        7
    } else {
        u64::from(ahead)
    }
}

/// Resolve a weekday name relative to `today`.
///
/// With `next_week` unset this is the next occurrence strictly after today
/// (1 to 7 days ahead). With `next_week` set the result is pushed one more
/// week out (8 to 14 days ahead), so "next mon" said on a Monday lands
/// two weeks later.
pub fn resolve_weekday(name: &str, today: NaiveDate, next_week: bool) -> Option<NaiveDate> {
    let target = weekday_from_name(name)?;
    let mut ahead = days_until(today, target);
    if next_week {
        ahead += 7;
    }
    today.checked_add_days(Days::new(ahead))
}

/// `date` shifted by a signed number of days, `None` outside chrono's range.
pub fn offset_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    let magnitude = Days::new(days.unsigned_abs());
    if days >= 0 {
        date.checked_add_days(magnitude)
    } else {
        date.checked_sub_days(magnitude)
    }
}

/// The day after `date`. Saturates at chrono's maximum date.
pub fn next_day(date: NaiveDate) -> NaiveDate {
    date.succ_opt().unwrap_or(date)
}

/// Parse a relative offset such as `+3d` or `+2w`.
///
/// The count must be a positive run of ASCII digits, optionally padded with
/// spaces (`+ 3d`, `+3 d`); anything else, including a missing `+`, an
/// unknown unit or an overflowing count, is not an offset.
pub fn parse_relative_offset(token: &str, today: NaiveDate) -> Option<NaiveDate> {
    let body = token.trim().strip_prefix('+')?;
    let unit = body.chars().last()?;
    let count = body[..body.len() - unit.len_utf8()].trim();
    if count.is_empty() || !count.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let count: u64 = count.parse().ok()?;
    if count == 0 {
        return None;
    }
    let days = match unit.to_ascii_lowercase() {
        'd' => count,
        'w' => count.checked_mul(7)?,
        _ => return None,
    };
    today.checked_add_days(Days::new(days))
}

/// Parse an explicit calendar date in one of the locale-independent layouts.
pub fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    CALENDAR_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // 2026-10-14 is a Wednesday
    const WED: (i32, u32, u32) = (2026, 10, 14);

    #[rstest]
    #[case("mon", Weekday::Mon)]
    #[case("Tuesday", Weekday::Tue)]
    #[case("WED", Weekday::Wed)]
    #[case("sunday", Weekday::Sun)]
    fn test_weekday_from_name(#[case] name: &str, #[case] expected: Weekday) {
        assert_eq!(weekday_from_name(name), Some(expected));
    }

    #[rstest]
    #[case("mo")]
    #[case("")]
    #[case("weds")]
    #[case("tomorrow")]
    fn test_weekday_from_name_rejects(#[case] name: &str) {
        assert_eq!(weekday_from_name(name), None);
    }

    #[rstest]
    #[case("thu", date(2026, 10, 15))]
    #[case("sun", date(2026, 10, 18))]
    #[case("tue", date(2026, 10, 20))]
    #[case("wed", date(2026, 10, 21))]
    fn test_resolve_weekday_this_week(#[case] name: &str, #[case] expected: NaiveDate) {
        let today = date(WED.0, WED.1, WED.2);
        assert_eq!(resolve_weekday(name, today, false), Some(expected));
    }

    #[rstest]
    #[case("thu", date(2026, 10, 22))]
    #[case("tue", date(2026, 10, 27))]
    #[case("wed", date(2026, 10, 28))]
    fn test_resolve_weekday_next_week(#[case] name: &str, #[case] expected: NaiveDate) {
        let today = date(WED.0, WED.1, WED.2);
        assert_eq!(resolve_weekday(name, today, true), Some(expected));
    }

    #[rstest]
    #[case("+1d", Some(date(2026, 10, 15)))]
    #[case("+3D", Some(date(2026, 10, 17)))]
    #[case("+2w", Some(date(2026, 10, 28)))]
    #[case("+0d", None)]
    #[case("3d", None)]
    #[case("+d", None)]
    #[case("+3x", None)]
    #[case("+-3d", None)]
    #[case("+3", None)]
    #[case("+99999999999999999999d", None)]
    #[case("+3 d", Some(date(2026, 10, 17)))]
    #[case("+ 3d", Some(date(2026, 10, 17)))]
    #[case("+ 2 w", Some(date(2026, 10, 28)))]
    #[case("+ d", None)]
    #[case("+3 3d", None)]
    fn test_parse_relative_offset(#[case] token: &str, #[case] expected: Option<NaiveDate>) {
        let today = date(WED.0, WED.1, WED.2);
        assert_eq!(parse_relative_offset(token, today), expected);
    }

    #[rstest]
    #[case("2026-11-03", Some(date(2026, 11, 3)))]
    #[case("2026/11/03", Some(date(2026, 11, 3)))]
    #[case(" 2026.1.5 ", Some(date(2026, 1, 5)))]
    #[case("2026-02-30", None)]
    #[case("next week", None)]
    fn test_parse_calendar_date(#[case] input: &str, #[case] expected: Option<NaiveDate>) {
        assert_eq!(parse_calendar_date(input), expected);
    }

    #[test]
    fn test_offset_days() {
        let today = date(2026, 3, 1);
        assert_eq!(offset_days(today, -1), Some(date(2026, 2, 28)));
        assert_eq!(offset_days(today, 1), Some(date(2026, 3, 2)));
        assert_eq!(next_day(NaiveDate::MAX), NaiveDate::MAX);
    }
}

//! Free-text date expressions and logged-time durations.
//!
//! Every function here is total: input that is not understood yields
//! [`DateParseOutcome::None`] (or `0` for durations) and never an error.

use chrono::NaiveDate;

use crate::dates::{
    next_day, offset_days, parse_calendar_date, parse_relative_offset, resolve_weekday,
};
use crate::models::{DateParseOutcome, Extraction};

/// Split a recognized trailing date expression off a freeform sentence.
///
/// Two-token suffixes (`on <day|date>`, `next <day>`) are tried first when at
/// least one word would remain, then single-token suffixes (`today`,
/// `tomorrow`/`tmw`, `asap`, `background`/`bg`, a weekday, `+Nd`/`+Nw`).
/// The suffix is removed entirely or not at all; when nothing matches the
/// input comes back unchanged.
pub fn extract_trailing_date(input: &str, today: NaiveDate) -> Extraction {
    let words: Vec<&str> = input.split_whitespace().collect();
    if words.len() < 2 {
        return unchanged(input);
    }

    if words.len() >= 3 {
        let (head, suffix) = words.split_at(words.len() - 2);
        let (keyword, value) = (suffix[0], suffix[1]);

        if keyword.eq_ignore_ascii_case("on") {
            let date = resolve_weekday(value, today, false).or_else(|| parse_calendar_date(value));
            if let Some(date) = date {
                return matched(head, DateParseOutcome::Date(date));
            }
        }

        if keyword.eq_ignore_ascii_case("next") {
            if let Some(date) = resolve_weekday(value, today, true) {
                return matched(head, DateParseOutcome::Date(date));
            }
        }
    }

    let (head, last) = words.split_at(words.len() - 1);
    match trailing_keyword(last[0], today) {
        DateParseOutcome::None => unchanged(input),
        outcome => matched(head, outcome),
    }
}

fn trailing_keyword(word: &str, today: NaiveDate) -> DateParseOutcome {
    let word = word.to_lowercase();
    match word.as_str() {
        "today" => DateParseOutcome::Date(today),
        "tomorrow" | "tmw" => DateParseOutcome::Date(next_day(today)),
        "asap" => DateParseOutcome::Asap,
        "background" | "bg" => DateParseOutcome::Background,
        _ => resolve_weekday(&word, today, false)
            .or_else(|| parse_relative_offset(&word, today))
            .map_or(DateParseOutcome::None, DateParseOutcome::Date),
    }
}

fn unchanged(input: &str) -> Extraction {
    Extraction {
        text: input.to_string(),
        outcome: DateParseOutcome::None,
    }
}

fn matched(kept: &[&str], outcome: DateParseOutcome) -> Extraction {
    Extraction {
        text: kept.join(" "),
        outcome,
    }
}

/// Interpret an answer to a "due date?" prompt.
///
/// Besides dates this understands `none`/`clear`, `asap` and
/// `background`/`bg`.
pub fn parse_standalone_date(input: &str, today: NaiveDate) -> DateParseOutcome {
    let lower = input.trim().to_lowercase();
    match lower.as_str() {
        "none" | "clear" => DateParseOutcome::Clear,
        "asap" => DateParseOutcome::Asap,
        "background" | "bg" => DateParseOutcome::Background,
        _ => parse_due_date(&lower, today).map_or(DateParseOutcome::None, DateParseOutcome::Date),
    }
}

/// Interpret a date-only answer: `today`, `tomorrow`/`tmw`, `yesterday`,
/// `+Nd`/`+Nw`, a weekday, `next <weekday>` or an explicit calendar date.
pub fn parse_due_date(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let lower = input.trim().to_lowercase();
    match lower.as_str() {
        "today" => return Some(today),
        "tomorrow" | "tmw" => return Some(next_day(today)),
        "yesterday" => return offset_days(today, -1),
        _ => {}
    }

    if let Some(date) = parse_relative_offset(&lower, today) {
        return Some(date);
    }

    if let Some(date) = resolve_weekday(&lower, today, false) {
        return Some(date);
    }

    if let Some(day) = lower.strip_prefix("next ") {
        if let Some(date) = resolve_weekday(day, today, true) {
            return Some(date);
        }
    }

    parse_calendar_date(&lower)
}

/// Parse logged time into minutes.
///
/// Accepts a plain number of minutes or `<N>h`, `<N>m`, `<N>h<N>m` and
/// `<N>h<N>`. Returns 0 when nothing usable is found.
pub fn parse_duration(input: &str) -> u32 {
    let lower = input.trim().to_lowercase();
    if let Some(minutes) = parse_count(&lower) {
        return minutes;
    }
    sum_duration_parts(&lower).unwrap_or(0)
}

fn sum_duration_parts(lower: &str) -> Option<u32> {
    let mut total: u32 = 0;
    let mut rest = lower;

    if let Some(h_idx) = rest.find('h') {
        if h_idx > 0 {
            if let Some(hours) = parse_count(&rest[..h_idx]) {
                total = hours.checked_mul(60)?;
                rest = &rest[h_idx + 1..];
            }
        }
    }

    match rest.find('m') {
        Some(m_idx) if m_idx > 0 => {
            if let Some(minutes) = parse_count(&rest[..m_idx]) {
                total = total.checked_add(minutes)?;
            }
        }
        None if !rest.trim().is_empty() => {
            if let Some(minutes) = parse_count(rest) {
                total = total.checked_add(minutes)?;
            }
        }
        _ => {}
    }

    Some(total)
}

fn parse_count(s: &str) -> Option<u32> {
    let s = s.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

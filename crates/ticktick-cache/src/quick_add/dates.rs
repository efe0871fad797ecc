//! Natural-language date recognition.
//!
//! [`extract_dates`] scans a line for date and time expressions such as
//! `tomorrow at 10am`, `next friday`, `May 26` or `in 3 days`, resolves them
//! against an explicit "now" in a given zone, and reports the substrings it
//! consumed so callers can strip them from a title.
//!
//! Recognition works in three steps. Every pattern is matched independently,
//! overlapping candidates are resolved leftmost-longest, and adjacent pieces
//! are merged: a date next to a time becomes one expression, and two
//! expressions joined by `-` become one expression with an end.

use std::ops::Range;

use chrono::{
    DateTime, Datelike, Days, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeZone,
    Timelike, Utc, Weekday,
};
use chrono_tz::Tz;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use ticktick_api_rs::models::format_wire_date;

/// Dates found in a line of text, formatted for the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDates {
    /// Start of the first expression.
    pub start_date: Option<String>,
    /// End of the first expression, or the start of the second one.
    pub due_date: Option<String>,
    /// Zone the expressions were interpreted in; `None` when nothing matched.
    pub time_zone: Option<String>,
    /// False only when a consumed expression carries a time of day.
    pub is_all_day: bool,
    /// The exact substrings consumed, in order.
    pub date_texts: Vec<String>,
}

impl Default for ParsedDates {
    fn default() -> Self {
        Self {
            start_date: None,
            due_date: None,
            time_zone: None,
            is_all_day: true,
            date_texts: Vec::new(),
        }
    }
}

impl ParsedDates {
    /// Returns true if any date was recognized.
    pub fn has_dates(&self) -> bool {
        self.start_date.is_some() || self.due_date.is_some()
    }
}

/// Recognizes up to two date expressions in `text`.
///
/// Relative expressions ("tomorrow", "in 2 hours") are resolved against
/// `now`; local times are interpreted in `zone`. A time without a date means
/// today, or tomorrow when that time has already passed. A date without a
/// time means local midnight.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use ticktick_cache_rs::quick_add::extract_dates;
///
/// let now = Utc.with_ymd_and_hms(2025, 5, 20, 12, 0, 0).unwrap();
/// let parsed = extract_dates("Meeting tomorrow at 10am", now, chrono_tz::UTC);
///
/// assert_eq!(parsed.start_date.as_deref(), Some("2025-05-21T10:00:00.000+0000"));
/// assert_eq!(parsed.date_texts, vec!["tomorrow at 10am"]);
/// assert!(!parsed.is_all_day);
/// ```
pub fn extract_dates(text: &str, now: DateTime<Utc>, zone: Tz) -> ParsedDates {
    let clock = Clock {
        now: now.with_timezone(&zone).naive_local(),
    };
    let expressions = recognize(text, &clock);

    let Some(first) = expressions.first() else {
        return ParsedDates::default();
    };

    let mut parsed = ParsedDates {
        time_zone: Some(zone.name().to_string()),
        ..ParsedDates::default()
    };
    parsed.date_texts.push(text[first.range.clone()].to_string());
    let mut has_time = first.start.time.is_some();

    let start = clock.local(first.start);
    parsed.start_date = start.and_then(|local| to_wire(local, zone));

    if let Some(end) = first.end {
        let end = Moment {
            date: end.date.or(start.map(|local| local.date())),
            time: end.time,
        };
        has_time |= end.time.is_some();
        parsed.due_date = clock.local(end).and_then(|local| to_wire(local, zone));
    } else if let Some(second) = expressions.get(1) {
        has_time |= second.start.time.is_some();
        parsed.date_texts.push(text[second.range.clone()].to_string());
        parsed.due_date = clock.local(second.start).and_then(|local| to_wire(local, zone));
    }

    parsed.is_all_day = !has_time;
    parsed
}

/// A calendar date and/or a time of day, not yet placed in a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Moment {
    date: Option<NaiveDate>,
    time: Option<NaiveTime>,
}

impl Moment {
    fn date(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            time: None,
        }
    }

    fn time(time: NaiveTime) -> Self {
        Self {
            date: None,
            time: Some(time),
        }
    }

    fn at(date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            date: Some(date),
            time: Some(time),
        }
    }

    fn is_date_only(&self) -> bool {
        self.date.is_some() && self.time.is_none()
    }

    fn is_time_only(&self) -> bool {
        self.date.is_none() && self.time.is_some()
    }
}

/// One recognized expression and the bytes it covers.
#[derive(Debug, Clone)]
struct Expression {
    range: Range<usize>,
    start: Moment,
    end: Option<Moment>,
}

/// Local wall-clock reference for relative expressions.
struct Clock {
    now: NaiveDateTime,
}

impl Clock {
    fn today(&self) -> NaiveDate {
        self.now.date()
    }

    fn local(&self, moment: Moment) -> Option<NaiveDateTime> {
        match (moment.date, moment.time) {
            (Some(date), Some(time)) => Some(date.and_time(time)),
            (Some(date), None) => Some(date.and_time(NaiveTime::MIN)),
            (None, Some(time)) => {
                let today = self.today().and_time(time);
                if today <= self.now {
                    today.checked_add_days(Days::new(1))
                } else {
                    Some(today)
                }
            }
            (None, None) => None,
        }
    }
}

/// Converts a local time to the wire format.
///
/// Times inside a DST gap are pushed forward by an hour; ambiguous times
/// take the earlier instant.
fn to_wire(local: NaiveDateTime, zone: Tz) -> Option<String> {
    zone.from_local_datetime(&local)
        .earliest()
        .or_else(|| zone.from_local_datetime(&(local + Duration::hours(1))).earliest())
        .map(|instant| format_wire_date(instant.with_timezone(&Utc)))
}

type Build = fn(&Captures<'_>, &Clock) -> Option<Moment>;

const MONTH: &str = r"(jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)";

fn pattern(source: &str) -> Regex {
    Regex::new(&format!("(?i){source}")).expect("valid date regex")
}

fn recognizer(source: &str, build: Build) -> (Regex, Build) {
    (pattern(source), build)
}

static RECOGNIZERS: Lazy<Vec<(Regex, Build)>> = Lazy::new(|| {
    vec![
        recognizer(r"\b(?:the\s+)?day\s+after\s+tomorrow\b", day_after_tomorrow),
        recognizer(r"\b(today|tonight|tomorrow|tmrw?|yesterday)\b", keyword),
        recognizer(
            r"\b(?:(this|next)\s+)?(monday|tuesday|wednesday|thursday|friday|saturday|sunday|mon|tues?|wed|thu(?:rs?)?|fri)\b",
            weekday,
        ),
        recognizer(
            &format!(r"\b{MONTH}\.?\s+(\d{{1,2}})(?:st|nd|rd|th)?(?:,?\s+(\d{{4}}))?\b"),
            month_day,
        ),
        recognizer(
            &format!(r"\b(\d{{1,2}})(?:st|nd|rd|th)?\s+(?:of\s+)?{MONTH}(?:,?\s+(\d{{4}}))?\b"),
            day_month,
        ),
        recognizer(r"\b(\d{4})-(\d{1,2})-(\d{1,2})\b", iso_date),
        recognizer(r"\b(\d{1,2})/(\d{1,2})(?:/(\d{4}|\d{2}))?\b", slash_date),
        recognizer(
            r"\bin\s+(a|an|one|two|three|four|five|six|seven|eight|nine|ten|eleven|twelve|\d{1,3})\s+(minutes?|mins?|hours?|hrs?|days?|weeks?|months?|years?)\b",
            in_amount,
        ),
        recognizer(r"\bnext\s+(week|month|year)\b", next_period),
        recognizer(r"\b(?:at\s+)?(\d{1,2})(?::([0-5]\d))?\s*([ap])m\b", twelve_hour),
        recognizer(r"\b(?:at\s+)?([01]?\d|2[0-3]):([0-5]\d)\b", twenty_four_hour),
        recognizer(r"\b(?:at\s+)?(noon|midnight)\b", named_time),
    ]
});

/// Whitespace (optionally with a comma or "on") between a date and a time.
static JOIN_DATE_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*,?\s*(?:on\s+)?$").expect("valid join regex"));

/// A dash between the two ends of a range.
static JOIN_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[-–]\s*$").expect("valid range regex"));

fn recognize(text: &str, clock: &Clock) -> Vec<Expression> {
    let mut candidates: Vec<Expression> = Vec::new();
    for (regex, build) in RECOGNIZERS.iter() {
        for captures in regex.captures_iter(text) {
            let (Some(whole), Some(moment)) = (captures.get(0), build(&captures, clock)) else {
                continue;
            };
            candidates.push(Expression {
                range: whole.range(),
                start: moment,
                end: None,
            });
        }
    }

    // Leftmost first, longest first among equal starts.
    candidates.sort_by(|a, b| {
        a.range
            .start
            .cmp(&b.range.start)
            .then(b.range.end.cmp(&a.range.end))
    });

    let mut picked: Vec<Expression> = Vec::new();
    let mut cursor = 0;
    for candidate in candidates {
        if candidate.range.start >= cursor {
            cursor = candidate.range.end;
            picked.push(candidate);
        }
    }

    join_ranges(text, join_date_times(text, picked))
}

fn join_date_times(text: &str, expressions: Vec<Expression>) -> Vec<Expression> {
    let mut joined: Vec<Expression> = Vec::with_capacity(expressions.len());
    for expression in expressions {
        if let Some(previous) = joined.last_mut() {
            let gap = &text[previous.range.end..expression.range.start];
            let (a, b) = (previous.start, expression.start);
            let complementary = (a.is_date_only() && b.is_time_only())
                || (a.is_time_only() && b.is_date_only());
            if complementary && JOIN_DATE_TIME.is_match(gap) {
                previous.start = Moment {
                    date: a.date.or(b.date),
                    time: a.time.or(b.time),
                };
                previous.range.end = expression.range.end;
                continue;
            }
        }
        joined.push(expression);
    }
    joined
}

fn join_ranges(text: &str, expressions: Vec<Expression>) -> Vec<Expression> {
    let mut joined: Vec<Expression> = Vec::with_capacity(expressions.len());
    for expression in expressions {
        if let Some(previous) = joined.last_mut() {
            let gap = &text[previous.range.end..expression.range.start];
            if previous.end.is_none() && JOIN_RANGE.is_match(gap) {
                previous.end = Some(expression.start);
                previous.range.end = expression.range.end;
                continue;
            }
        }
        joined.push(expression);
    }
    joined
}

fn capture<'t>(captures: &Captures<'t>, index: usize) -> Option<&'t str> {
    captures.get(index).map(|m| m.as_str())
}

fn number(captures: &Captures<'_>, index: usize) -> Option<u32> {
    capture(captures, index)?.parse().ok()
}

fn day_after_tomorrow(_: &Captures<'_>, clock: &Clock) -> Option<Moment> {
    clock.today().checked_add_days(Days::new(2)).map(Moment::date)
}

fn keyword(captures: &Captures<'_>, clock: &Clock) -> Option<Moment> {
    let today = clock.today();
    match capture(captures, 1)?.to_lowercase().as_str() {
        "today" => Some(Moment::date(today)),
        "tonight" => Some(Moment::at(today, NaiveTime::from_hms_opt(20, 0, 0)?)),
        "tomorrow" | "tmr" | "tmrw" => today.checked_add_days(Days::new(1)).map(Moment::date),
        "yesterday" => today.checked_sub_days(Days::new(1)).map(Moment::date),
        _ => None,
    }
}

fn parse_weekday(name: &str) -> Option<Weekday> {
    let weekday = match name.get(..3)? {
        "mon" => Weekday::Mon,
        "tue" => Weekday::Tue,
        "wed" => Weekday::Wed,
        "thu" => Weekday::Thu,
        "fri" => Weekday::Fri,
        "sat" => Weekday::Sat,
        "sun" => Weekday::Sun,
        _ => return None,
    };
    Some(weekday)
}

/// Plain and `this` mean the next occurrence on or after today; `next` means
/// one week after the next occurrence strictly after today.
fn weekday(captures: &Captures<'_>, clock: &Clock) -> Option<Moment> {
    let target = parse_weekday(&capture(captures, 2)?.to_lowercase())?;
    let today = clock.today();
    let ahead = (7 + target.num_days_from_monday() - today.weekday().num_days_from_monday()) % 7;

    let days = match capture(captures, 1).map(str::to_lowercase).as_deref() {
        Some("next") => {
            let strictly_after = if ahead == 0 { 7 } else { ahead };
            strictly_after + 7
        }
        _ => ahead,
    };
    today.checked_add_days(Days::new(u64::from(days))).map(Moment::date)
}

fn parse_month(name: &str) -> Option<u32> {
    let month = match name.get(..3)? {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

/// Builds a calendar date; without a year, a date already past rolls over to
/// next year.
fn calendar_date(year: Option<i32>, month: u32, day: u32, today: NaiveDate) -> Option<NaiveDate> {
    match year {
        Some(year) => NaiveDate::from_ymd_opt(year, month, day),
        None => {
            let this_year = NaiveDate::from_ymd_opt(today.year(), month, day);
            match this_year {
                Some(date) if date >= today => Some(date),
                _ => NaiveDate::from_ymd_opt(today.year() + 1, month, day),
            }
        }
    }
}

fn month_day(captures: &Captures<'_>, clock: &Clock) -> Option<Moment> {
    let month = parse_month(&capture(captures, 1)?.to_lowercase())?;
    let day = number(captures, 2)?;
    let year = capture(captures, 3).and_then(|y| y.parse().ok());
    calendar_date(year, month, day, clock.today()).map(Moment::date)
}

fn day_month(captures: &Captures<'_>, clock: &Clock) -> Option<Moment> {
    let day = number(captures, 1)?;
    let month = parse_month(&capture(captures, 2)?.to_lowercase())?;
    let year = capture(captures, 3).and_then(|y| y.parse().ok());
    calendar_date(year, month, day, clock.today()).map(Moment::date)
}

fn iso_date(captures: &Captures<'_>, _: &Clock) -> Option<Moment> {
    let year = capture(captures, 1)?.parse().ok()?;
    NaiveDate::from_ymd_opt(year, number(captures, 2)?, number(captures, 3)?).map(Moment::date)
}

fn slash_date(captures: &Captures<'_>, clock: &Clock) -> Option<Moment> {
    let month = number(captures, 1)?;
    let day = number(captures, 2)?;
    let year = match capture(captures, 3) {
        Some(y) if y.len() == 2 => Some(2000 + y.parse::<i32>().ok()?),
        Some(y) => Some(y.parse().ok()?),
        None => None,
    };
    calendar_date(year, month, day, clock.today()).map(Moment::date)
}

fn parse_amount(word: &str) -> Option<u32> {
    let amount = match word {
        "a" | "an" | "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        "eleven" => 11,
        "twelve" => 12,
        digits => digits.parse().ok()?,
    };
    Some(amount)
}

fn in_amount(captures: &Captures<'_>, clock: &Clock) -> Option<Moment> {
    let amount = parse_amount(&capture(captures, 1)?.to_lowercase())?;
    let unit = capture(captures, 2)?.to_lowercase();
    let today = clock.today();

    let exact = |delta: Duration| -> Option<Moment> {
        let at = clock.now.checked_add_signed(delta)?;
        let time = NaiveTime::from_hms_opt(at.hour(), at.minute(), 0)?;
        Some(Moment::at(at.date(), time))
    };

    match unit.trim_end_matches('s') {
        "minute" | "min" => exact(Duration::minutes(i64::from(amount))),
        "hour" | "hr" => exact(Duration::hours(i64::from(amount))),
        "day" => today.checked_add_days(Days::new(u64::from(amount))).map(Moment::date),
        "week" => today
            .checked_add_days(Days::new(u64::from(amount) * 7))
            .map(Moment::date),
        "month" => today.checked_add_months(Months::new(amount)).map(Moment::date),
        "year" => today
            .checked_add_months(Months::new(amount * 12))
            .map(Moment::date),
        _ => None,
    }
}

fn next_period(captures: &Captures<'_>, clock: &Clock) -> Option<Moment> {
    let today = clock.today();
    match capture(captures, 1)?.to_lowercase().as_str() {
        "week" => today.checked_add_days(Days::new(7)),
        "month" => today.checked_add_months(Months::new(1)),
        "year" => today.checked_add_months(Months::new(12)),
        _ => None,
    }
    .map(Moment::date)
}

fn twelve_hour(captures: &Captures<'_>, _: &Clock) -> Option<Moment> {
    let hour = number(captures, 1)?;
    if !(1..=12).contains(&hour) {
        return None;
    }
    let minute = number(captures, 2).unwrap_or(0);
    let hour = match capture(captures, 3)?.to_lowercase().as_str() {
        "p" => hour % 12 + 12,
        _ => hour % 12,
    };
    NaiveTime::from_hms_opt(hour, minute, 0).map(Moment::time)
}

fn twenty_four_hour(captures: &Captures<'_>, _: &Clock) -> Option<Moment> {
    NaiveTime::from_hms_opt(number(captures, 1)?, number(captures, 2)?, 0).map(Moment::time)
}

fn named_time(captures: &Captures<'_>, _: &Clock) -> Option<Moment> {
    let hour = match capture(captures, 1)?.to_lowercase().as_str() {
        "noon" => 12,
        _ => 0,
    };
    NaiveTime::from_hms_opt(hour, 0, 0).map(Moment::time)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    /// Tuesday 2025-05-20, 12:00 UTC.
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 20, 12, 0, 0).unwrap()
    }

    fn utc(text: &str) -> ParsedDates {
        extract_dates(text, now(), chrono_tz::UTC)
    }

    #[test]
    fn test_meeting_tomorrow_at_10am() {
        let parsed = extract_dates("Meeting tomorrow at 10am", now(), chrono_tz::America::Santiago);

        // Santiago is UTC-4 in May.
        assert_eq!(parsed.start_date.as_deref(), Some("2025-05-21T14:00:00.000+0000"));
        assert_eq!(parsed.due_date, None);
        assert!(!parsed.is_all_day);
        assert_eq!(parsed.time_zone.as_deref(), Some("America/Santiago"));
        assert_eq!(parsed.date_texts, vec!["tomorrow at 10am"]);
    }

    #[test]
    fn test_two_dates_become_start_and_due() {
        let parsed = extract_dates(
            "Project from May 26 to June 1",
            now(),
            chrono_tz::America::Santiago,
        );

        assert_eq!(parsed.start_date.as_deref(), Some("2025-05-26T04:00:00.000+0000"));
        assert_eq!(parsed.due_date.as_deref(), Some("2025-06-01T04:00:00.000+0000"));
        assert!(parsed.is_all_day);
        assert_eq!(parsed.date_texts, vec!["May 26", "June 1"]);
    }

    #[test]
    fn test_no_dates() {
        let parsed = utc("Just a regular task without dates");

        assert_eq!(parsed, ParsedDates::default());
        assert!(parsed.is_all_day);
        assert!(parsed.time_zone.is_none());
        assert!(!parsed.has_dates());
    }

    #[test]
    fn test_keywords() {
        assert_eq!(utc("today").start_date.as_deref(), Some("2025-05-20T00:00:00.000+0000"));
        assert_eq!(utc("yesterday").start_date.as_deref(), Some("2025-05-19T00:00:00.000+0000"));
        assert_eq!(utc("tmr").start_date.as_deref(), Some("2025-05-21T00:00:00.000+0000"));
        assert_eq!(
            utc("the day after tomorrow").start_date.as_deref(),
            Some("2025-05-22T00:00:00.000+0000")
        );

        let tonight = utc("party tonight");
        assert_eq!(tonight.start_date.as_deref(), Some("2025-05-20T20:00:00.000+0000"));
        assert!(!tonight.is_all_day);
    }

    #[test]
    fn test_weekdays() {
        assert_eq!(utc("friday").start_date.as_deref(), Some("2025-05-23T00:00:00.000+0000"));
        assert_eq!(utc("this Tuesday").start_date.as_deref(), Some("2025-05-20T00:00:00.000+0000"));
        assert_eq!(utc("next friday").start_date.as_deref(), Some("2025-05-30T00:00:00.000+0000"));
        assert_eq!(utc("next tuesday").start_date.as_deref(), Some("2025-06-03T00:00:00.000+0000"));
    }

    #[test]
    fn test_time_then_date_merges() {
        let parsed = utc("Dentist 5pm friday");
        assert_eq!(parsed.start_date.as_deref(), Some("2025-05-23T17:00:00.000+0000"));
        assert_eq!(parsed.date_texts, vec!["5pm friday"]);
        assert!(!parsed.is_all_day);
    }

    #[test]
    fn test_lone_time_rolls_to_tomorrow_when_past() {
        assert_eq!(utc("call at 7am").start_date.as_deref(), Some("2025-05-21T07:00:00.000+0000"));
        assert_eq!(utc("call at 3:30 pm").start_date.as_deref(), Some("2025-05-20T15:30:00.000+0000"));
        assert_eq!(utc("lunch at noon").start_date.as_deref(), Some("2025-05-21T12:00:00.000+0000"));
        assert_eq!(utc("deploy 18:45").start_date.as_deref(), Some("2025-05-20T18:45:00.000+0000"));
    }

    #[test]
    fn test_month_names_and_years() {
        assert_eq!(utc("26th of May").start_date.as_deref(), Some("2025-05-26T00:00:00.000+0000"));
        assert_eq!(utc("Jan 5").start_date.as_deref(), Some("2026-01-05T00:00:00.000+0000"));
        assert_eq!(
            utc("March 3, 2027").start_date.as_deref(),
            Some("2027-03-03T00:00:00.000+0000")
        );
        assert_eq!(utc("Feb 30").start_date, None);
    }

    #[test]
    fn test_numeric_dates() {
        assert_eq!(utc("2025-06-01").start_date.as_deref(), Some("2025-06-01T00:00:00.000+0000"));
        assert_eq!(utc("6/1").start_date.as_deref(), Some("2025-06-01T00:00:00.000+0000"));
        assert_eq!(utc("1/15/26").start_date.as_deref(), Some("2026-01-15T00:00:00.000+0000"));
    }

    #[test]
    fn test_relative_amounts() {
        assert_eq!(utc("in 3 days").start_date.as_deref(), Some("2025-05-23T00:00:00.000+0000"));
        assert_eq!(utc("in two weeks").start_date.as_deref(), Some("2025-06-03T00:00:00.000+0000"));
        assert_eq!(utc("next month").start_date.as_deref(), Some("2025-06-20T00:00:00.000+0000"));

        let soon = utc("stretch in an hour");
        assert_eq!(soon.start_date.as_deref(), Some("2025-05-20T13:00:00.000+0000"));
        assert!(!soon.is_all_day);
        assert_eq!(soon.date_texts, vec!["in an hour"]);
    }

    #[test]
    fn test_dash_forms_range() {
        let parsed = utc("workshop tomorrow 10am-11:30am");
        assert_eq!(parsed.start_date.as_deref(), Some("2025-05-21T10:00:00.000+0000"));
        assert_eq!(parsed.due_date.as_deref(), Some("2025-05-21T11:30:00.000+0000"));
        assert_eq!(parsed.date_texts, vec!["tomorrow 10am-11:30am"]);
    }

    #[test]
    fn test_ordinary_words_are_not_dates() {
        assert!(!utc("meet the mayor").has_dates());
        assert!(!utc("I may go").has_dates());
        assert!(!utc("buy 3 apples").has_dates());
    }

    #[test]
    fn test_only_two_expressions_are_used() {
        let parsed = utc("today tomorrow friday");
        assert_eq!(parsed.date_texts, vec!["today", "tomorrow"]);
    }
}

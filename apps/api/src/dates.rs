//! Temporal utilities for résumé date strings.
//!
//! Handles the `"Jan 2024"` / `"Jan 2024 - Present · 1 yr 6 mos"` formats,
//! calendar-accurate durations, and the refresh of ongoing ("Present")
//! entries. All parsing fails soft: a `None` means "cannot evaluate" and
//! recency filters must keep the entry.

use chrono::{Datelike, NaiveDate};

use crate::models::profile::Profile;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A parsed date range. `end` is the current date when `is_ongoing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub is_ongoing: bool,
}

fn month_number(token: &str) -> Option<u32> {
    if token.len() != 3 {
        return None;
    }
    MONTHS
        .iter()
        .position(|m| m.eq_ignore_ascii_case(token))
        .map(|i| i as u32 + 1)
}

/// Parses `"<Mon> <YYYY>"` to the first day of that month. Returns `None`
/// on anything else.
pub fn parse_single_date(text: &str) -> Option<NaiveDate> {
    let mut tokens = text.split_whitespace();
    let month = month_number(tokens.next()?)?;
    let year: i32 = tokens.next()?.parse().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Parses `"<start> - <end>"` / `"<start> - Present[ · <duration>]"`.
///
/// The part after the first `·` is a precomputed duration annotation and is
/// ignored. A string without a `" - "` separator is treated as a lone start
/// date whose end is that same date. Returns `None` only for empty input.
pub fn parse_date_range(text: &str, now: NaiveDate) -> Option<DateRange> {
    let date_part = text.split('·').next().unwrap_or("").trim();
    if date_part.is_empty() {
        return None;
    }

    let mut parts = date_part.splitn(2, " - ");
    let start = parse_single_date(parts.next().unwrap_or(""));
    let end_token = parts.next().map(str::trim);

    let is_ongoing = end_token == Some("Present");
    let end = match end_token {
        Some("Present") => Some(now),
        Some(token) => parse_single_date(token),
        None => start,
    };

    Some(DateRange {
        start,
        end,
        is_ongoing,
    })
}

/// Extracts the effective end date of a date field for recency comparisons:
/// the range's end, or `now` for ongoing entries. `None` means the field
/// could not be evaluated and the entry must be kept.
pub fn end_date(text: &str, now: NaiveDate) -> Option<NaiveDate> {
    if text.contains(" - ") {
        parse_date_range(text, now).and_then(|r| r.end)
    } else {
        parse_single_date(text)
    }
}

/// Whole calendar months from `start` to `end`, never negative. A partial
/// month (end day before start day) does not count.
fn months_between(start: NaiveDate, end: NaiveDate) -> i32 {
    let mut total =
        (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32);
    if end.day() < start.day() {
        total -= 1;
    }
    total.max(0)
}

/// Humanized duration like `"1 yr 6 mos"` or `"8 yrs"`; `"Less than 1 mo"`
/// when both components are zero.
pub fn compute_duration(start: NaiveDate, end: NaiveDate) -> String {
    let total = months_between(start, end);
    let years = total / 12;
    let months = total % 12;

    let mut parts = Vec::new();
    if years > 0 {
        parts.push(format!("{} yr{}", years, if years > 1 { "s" } else { "" }));
    }
    if months > 0 {
        parts.push(format!("{} mo{}", months, if months > 1 { "s" } else { "" }));
    }

    if parts.is_empty() {
        "Less than 1 mo".to_string()
    } else {
        parts.join(" ")
    }
}

/// Rewrites `"Jan 2024 - Present[ · …]"` with the duration recomputed
/// against `now`. Strings without a leading `"<Mon> <YYYY> - Present"` shape
/// come back unchanged. Idempotent for a fixed `now`.
pub fn refresh_present_duration(text: &str, now: NaiveDate) -> String {
    if !text.contains("Present") {
        return text.to_string();
    }

    let date_part = text.split('·').next().unwrap_or("").trim();
    let mut parts = date_part.splitn(2, " - ");
    let start_text = parts.next().unwrap_or("").trim();
    let end_token = parts.next().map(str::trim);

    if end_token != Some("Present") {
        return text.to_string();
    }
    let Some(start) = parse_single_date(start_text) else {
        return text.to_string();
    };

    format!(
        "{} - Present · {}",
        start_text,
        compute_duration(start, now)
    )
}

/// Recomputes the trailing duration of every ongoing entry on a deep copy of
/// the profile. Experience and volunteering use `duration`; projects use
/// `date`.
pub fn refresh_ongoing_durations(profile: &Profile, now: NaiveDate) -> Profile {
    let mut updated = profile.clone();

    for exp in &mut updated.sections.experience.entries {
        if let Some(duration) = &exp.duration {
            if duration.contains("Present") {
                exp.duration = Some(refresh_present_duration(duration, now));
            }
        }
    }
    for project in &mut updated.sections.projects.entries {
        if let Some(date) = &project.date {
            if date.contains("Present") {
                project.date = Some(refresh_present_duration(date, now));
            }
        }
    }
    for vol in &mut updated.sections.volunteering.entries {
        if let Some(duration) = &vol.duration {
            if duration.contains("Present") {
                vol.duration = Some(refresh_present_duration(duration, now));
            }
        }
    }

    updated
}

/// Years from the earliest start date across experience and projects to
/// `now`. Falls back to 10 when nothing parses; never reports less than 1.
pub fn total_experience_years(profile: &Profile, now: NaiveDate) -> i32 {
    let mut starts: Vec<NaiveDate> = Vec::new();

    for exp in &profile.sections.experience.entries {
        if let Some(range) = exp.duration.as_deref().and_then(|d| parse_date_range(d, now)) {
            if let Some(start) = range.start {
                starts.push(start);
            }
        }
    }
    for project in &profile.sections.projects.entries {
        if let Some(range) = project.date.as_deref().and_then(|d| parse_date_range(d, now)) {
            if let Some(start) = range.start {
                starts.push(start);
            }
        }
    }

    let Some(earliest) = starts.into_iter().min() else {
        tracing::warn!("No parseable start dates in experience or projects; assuming 10 years");
        return 10;
    };

    (months_between(earliest, now) / 12).max(1)
}

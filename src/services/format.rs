//! Ordering and display helpers shared by the views

use chrono::{DateTime, SecondsFormat, Utc};
use std::cmp::Ordering;

/// Human ordering for labels and hosts.
///
/// Letters compare case-insensitively first; when two strings differ only in
/// case the lower-case one sorts first (`apple` < `Apple` < `banana`).
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);

    folded_a.cmp(folded_b).then_with(|| b.cmp(a))
}

/// Render an ISO-8601 timestamp as `2025-Jan-02 03:04:05` in UTC.
///
/// Input that does not parse is returned as-is.
pub fn fmt_time(iso: &str) -> String {
    match DateTime::parse_from_rfc3339(iso) {
        Ok(parsed) => parsed
            .with_timezone(&Utc)
            .format("%Y-%b-%d %H:%M:%S")
            .to_string(),
        Err(_) => iso.to_string(),
    }
}

/// ISO-8601 with millisecond precision and a `Z` suffix.
pub fn iso_utc(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// URL-safe slug: `https://Foo.Bar/x` becomes `foo-bar-x`.
pub fn slugify(value: &str) -> String {
    let lowered = value.to_lowercase();
    let scheme = [lowered.find("https://").map(|at| (at, 8)), lowered.find("http://").map(|at| (at, 7))]
        .into_iter()
        .flatten()
        .min();
    let without_scheme = match scheme {
        Some((at, len)) => format!("{}{}", &lowered[..at], &lowered[at + len..]),
        None => lowered,
    };

    let mut slug = String::with_capacity(without_scheme.len());
    let mut pending_dash = false;
    for c in without_scheme.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            if pending_dash {
                slug.push('-');
                pending_dash = false;
            }
            slug.push(c);
        } else {
            pending_dash = !slug.is_empty();
        }
    }
    slug
}

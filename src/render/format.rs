//! Field formatters turning raw document values into display text and link targets.
//!
//! Every function here is total: missing or malformed input produces an empty
//! string or `None`, which the projector reads as "omit this row".

use crate::models::Location;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::borrow::Cow;
use std::fmt::Write as _;

/// Separator placed between location components.
pub const LOCATION_SEPARATOR: &str = ", ";

/// `<scheme>://` prefix, per RFC 3986 scheme syntax.
const SCHEME_PATTERN: &str = r"^[A-Za-z][A-Za-z0-9+.\-]*://";

/// Formats a calendar date with the given pattern.
///
/// `raw` may be a plain date (`2024-03-01`), an RFC 3339 timestamp or a naive
/// `YYYY-MM-DDTHH:MM:SS` timestamp. `format` is a strftime pattern, or a
/// dayjs-style pattern (`MMMM DD, YYYY`) when it contains no `%`.
///
/// Returns an empty string when the date cannot be parsed or the pattern
/// cannot be rendered.
///
/// # Examples
///
/// ```
/// use masthead::render::format::format_date;
///
/// assert_eq!(format_date("1990-07-04", "%d/%m/%Y"), "04/07/1990");
/// assert_eq!(format_date("1990-07-04", "MMMM D, YYYY"), "July 4, 1990");
/// assert_eq!(format_date("someday", "%Y"), "");
/// ```
pub fn format_date(raw: &str, format: &str) -> String {
    let Some(date) = parse_date(raw) else {
        return String::new();
    };

    let pattern = to_strftime(format);
    let mut output = String::new();
    if write!(output, "{}", date.format(&pattern)).is_err() {
        return String::new();
    }
    output
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
}

/// Converts a dayjs-style date pattern to strftime. Patterns that already
/// contain `%` are returned unchanged.
fn to_strftime(pattern: &str) -> Cow<'_, str> {
    // Longest tokens first so "MMMM" wins over "MM"
    const TOKENS: &[(&str, &str)] = &[
        ("YYYY", "%Y"),
        ("YY", "%y"),
        ("MMMM", "%B"),
        ("MMM", "%b"),
        ("MM", "%m"),
        ("M", "%-m"),
        ("dddd", "%A"),
        ("ddd", "%a"),
        ("DD", "%d"),
        ("D", "%-d"),
    ];

    if pattern.contains('%') {
        return Cow::Borrowed(pattern);
    }

    let mut output = String::with_capacity(pattern.len() * 2);
    let mut rest = pattern;
    'outer: while !rest.is_empty() {
        for (token, replacement) in TOKENS {
            if let Some(tail) = rest.strip_prefix(token) {
                output.push_str(replacement);
                rest = tail;
                continue 'outer;
            }
        }

        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            output.push(c);
        }
        rest = chars.as_str();
    }

    Cow::Owned(output)
}

/// Joins the non-empty location components with [`LOCATION_SEPARATOR`].
///
/// Components are taken in the order address, city, region, postal code,
/// country. Blank components are skipped, so the result never starts, ends,
/// or doubles up on a separator.
///
/// # Examples
///
/// ```
/// use masthead::models::Location;
/// use masthead::render::format::format_location;
///
/// let location = Location {
///     city: "Berlin".into(),
///     country: "Germany".into(),
///     ..Location::default()
/// };
/// assert_eq!(format_location(&location), "Berlin, Germany");
/// ```
pub fn format_location(location: &Location) -> String {
    [
        &location.address,
        &location.city,
        &location.region,
        &location.postal_code,
        &location.country,
    ]
    .into_iter()
    .map(|component| component.trim())
    .filter(|component| !component.is_empty())
    .collect::<Vec<_>>()
    .join(LOCATION_SEPARATOR)
}

/// Makes a URL navigable by prefixing `http://` when it has no scheme.
///
/// Returns `None` for empty or whitespace-only input. Already-prefixed URLs
/// are returned unchanged, so normalizing twice equals normalizing once.
///
/// # Examples
///
/// ```
/// use masthead::render::format::normalize_url;
///
/// assert_eq!(normalize_url("example.com").as_deref(), Some("http://example.com"));
/// assert_eq!(normalize_url("https://example.com").as_deref(), Some("https://example.com"));
/// assert_eq!(normalize_url("  "), None);
/// ```
pub fn normalize_url(raw: &str) -> Option<String> {
    let url = display_text(raw)?;
    if has_scheme(&url) {
        Some(url)
    } else {
        Some(format!("http://{url}"))
    }
}

fn has_scheme(url: &str) -> bool {
    Regex::new(SCHEME_PATTERN).is_ok_and(|regex| regex.is_match(url))
}

/// Trimmed display text, or `None` when nothing is left.
pub fn display_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// `mailto:` link target for an email address.
pub fn mailto_link(email: &str) -> Option<String> {
    display_text(email).map(|email| format!("mailto:{email}"))
}

/// `tel:` link target for a phone number.
pub fn tel_link(phone: &str) -> Option<String> {
    display_text(phone).map(|phone| format!("tel:{phone}"))
}

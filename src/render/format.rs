//! Value formatting and the single place where presence is checked.
//!
//! Every builder takes an `Option` and yields `None` when the source field
//! is absent, so a missing value drops its row instead of rendering blank.

use num_format::{Locale, ToFormattedString};

use super::tree::Field;

/// Plain number display: integral values print without a fraction.
pub fn plain(v: f64) -> String {
    v.to_string()
}

/// en-US grouped display with at most three fraction digits, e.g. `1,234,567.891`.
pub fn grouped(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }

    let fixed = format!("{:.3}", v.abs());
    let (int_part, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac.trim_end_matches('0');

    let int_grouped = int_part
        .parse::<u64>()
        .map_or_else(|_| int_part.to_string(), |n| n.to_formatted_string(&Locale::en));

    let is_zero = int_grouped == "0" && frac.is_empty();
    let sign = if v.is_sign_negative() && !is_zero { "-" } else { "" };

    if frac.is_empty() {
        format!("{sign}{int_grouped}")
    } else {
        format!("{sign}{int_grouped}.{frac}")
    }
}

/// A fraction shown as a percentage with two decimals, e.g. `0.1234` → `12.34%`.
pub fn percent(v: f64) -> String {
    format!("{:.2}%", v * 100.0)
}

/// `$` followed by the plain display.
pub fn dollars(v: f64) -> String {
    format!("${}", plain(v))
}

/// `$` followed by the grouped display.
pub fn dollars_grouped(v: f64) -> String {
    format!("${}", grouped(v))
}

pub(crate) fn text(label: &'static str, value: Option<&str>) -> Option<Field> {
    value.map(|v| Field {
        label,
        value: v.to_string(),
    })
}

pub(crate) fn number(label: &'static str, value: Option<f64>, fmt: fn(f64) -> String) -> Option<Field> {
    value.map(|v| Field {
        label,
        value: fmt(v),
    })
}

/// Joins the present parts of a postal address as
/// `street, city, state zip, country`.
pub(crate) fn address(
    street: Option<&str>,
    city: Option<&str>,
    state: Option<&str>,
    zip: Option<&str>,
    country: Option<&str>,
) -> Option<String> {
    let state_zip = [state, zip].into_iter().flatten().collect::<Vec<_>>().join(" ");
    let parts: Vec<&str> = [street, city, Some(state_zip.as_str()), country]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect();
    (!parts.is_empty()).then(|| parts.join(", "))
}

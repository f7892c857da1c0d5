//! Derived-value formatting rules shared by the resources.
//!
//! The output of every function here is part of the wire contract: token
//! order, separators and rounding are fixed and covered by tests.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::config;

/// View over the address columns shared by properties and condominiums.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressParts<'a> {
    pub street: Option<&'a str>,
    pub number: Option<&'a str>,
    pub complement: Option<&'a str>,
    pub district: Option<&'a str>,
    pub city: Option<&'a str>,
    pub state: Option<&'a str>,
}

/// Currency display: `"R$ "` prefix, two decimal digits, `,` decimal
/// separator and `.` thousands separator. `1234.5` becomes `"R$ 1.234,50"`.
/// Absent values never reach this function; callers map them to null.
pub fn format_currency(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac)) => (int_part.to_string(), format!("{:0<2}", frac)),
        None => (text, "00".to_string()),
    };

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("R$ {}{},{}", sign, group_thousands(&int_part), frac_part)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// Single-line address: `street, number - complement - district - city/state`.
/// Empty or whitespace-only components drop out without leaving separators
/// behind; `None` when no component is filled.
pub fn format_address(parts: &AddressParts<'_>) -> Option<String> {
    let mut segments: Vec<String> = Vec::new();

    match (filled(parts.street), filled(parts.number)) {
        (Some(street), Some(number)) => segments.push(format!("{}, {}", street, number)),
        (Some(street), None) => segments.push(street.to_string()),
        (None, Some(number)) => segments.push(number.to_string()),
        (None, None) => {}
    }
    if let Some(complement) = filled(parts.complement) {
        segments.push(complement.to_string());
    }
    if let Some(district) = filled(parts.district) {
        segments.push(district.to_string());
    }
    match (filled(parts.city), filled(parts.state)) {
        (Some(city), Some(state)) => segments.push(format!("{}/{}", city, state)),
        (Some(city), None) => segments.push(city.to_string()),
        (None, Some(state)) => segments.push(state.to_string()),
        (None, None) => {}
    }

    if segments.is_empty() {
        None
    } else {
        Some(segments.join(" - "))
    }
}

fn filled(part: Option<&str>) -> Option<&str> {
    part.map(str::trim).filter(|p| !p.is_empty())
}

/// Distance display: meters below one kilometer (`"850 m"`), otherwise
/// kilometers with one decimal and `,` separator (`"1,2 km"`, `"2,0 km"`).
pub fn format_distance(meters: i32) -> String {
    if meters < 1000 {
        return format!("{} m", meters);
    }
    // Round half up to tenths of a kilometer
    let km_tenths = (meters as i64 * 10 + 500) / 1000;
    format!("{},{} km", km_tenths / 10, km_tenths % 10)
}

/// `DD/MM/YYYY`, the localized date form next to the raw `YYYY-MM-DD` value.
pub fn format_date_br(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// `YYYY-MM-DD HH:MM:SS`, the form price-history timestamps are emitted in.
pub fn format_datetime_sql(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Current date in the configured reference timezone. Day-granularity
/// comparisons (price validity windows) all go through this.
pub fn reference_today() -> NaiveDate {
    let offset_hours = config::config().projection.reference_utc_offset_hours.clamp(-23, 23);
    (Utc::now() + Duration::hours(offset_hours as i64)).date_naive()
}

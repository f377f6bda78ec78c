//! Number formatting for monetary and percentage figures.
//!
//! Rounding is half-to-even throughout so that displayed figures agree with
//! the figures produced by the legacy calculators (`round(2.5) == 2`).

/// Every monetary figure is expressed in this single currency.
pub const CURRENCY: &str = "AUD";

/// Round to `decimals` places, ties to even.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round_ties_even() / factor
}

/// Round to a whole number, ties to even.
pub fn round_whole(value: f64) -> f64 {
    value.round_ties_even()
}

/// Format with thousands separators and a fixed number of decimals.
///
/// ```rust
/// use clarity::formatting::group_thousands;
///
/// assert_eq!(group_thousands(1234567.891, 2), "1,234,567.89");
/// assert_eq!(group_thousands(-2500.0, 0), "-2,500");
/// ```
pub fn group_thousands(value: f64, decimals: usize) -> String {
    let rounded = round_to(value, decimals as u32);
    let negative = rounded < 0.0;
    let body = format!("{:.*}", decimals, rounded.abs());

    let (digits, fraction) = match body.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (body.as_str(), None),
    };

    let mut out = String::with_capacity(body.len() + digits.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = fraction {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// `AUD $12,345`
pub fn format_currency(value: f64) -> String {
    format!("{} ${}", CURRENCY, group_thousands(value, 0))
}

/// `AUD $12,345.67`
pub fn format_currency_cents(value: f64) -> String {
    format!("{} ${}", CURRENCY, group_thousands(value, 2))
}

/// `AUD $12,345/month`
pub fn format_per_month(value: f64) -> String {
    format!("{}/month", format_currency(value))
}

/// One-decimal percentage: `12.5%`
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", round_to(value, 1))
}

/// Report-style dollars without the currency code; `$N/A` when absent.
pub fn format_dollars(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("${}", group_thousands(v, 0)),
        _ => "$N/A".to_string(),
    }
}

/// Shortest natural rendering: `160`, `7.5`.
pub fn format_plain(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

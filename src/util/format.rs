//! Display formatting and form-field parsing.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Render an ISO date (`YYYY-MM-DD`, optionally followed by a time) as
/// `DD/MM/YYYY`. Anything unparseable is returned unchanged; `None` is empty.
pub fn display_date(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    let date = raw.get(..10).unwrap_or(raw);
    let mut parts = date.split('-');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day), None) if year.len() == 4 && month.len() == 2 && day.len() == 2 => {
            format!("{day}/{month}/{year}")
        }
        _ => raw.to_owned(),
    }
}

/// Amount with two decimals, thousands separated by `.` and decimals by `,`.
pub fn money(amount: f64, currency: &str) -> String {
    let negative = amount < 0.0;
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    if currency.is_empty() {
        format!("{sign}$ {grouped},{cents}")
    } else {
        format!("{currency} {sign}{grouped},{cents}")
    }
}

/// Trimmed text, or `None` when blank. Optional form fields submit this.
pub fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

/// `optional_text` over an already-optional field.
pub fn blank_to_none(value: Option<String>) -> Option<String> {
    value.as_deref().and_then(optional_text)
}

/// Parse a `<select>` value holding a record id; blank or invalid is `None`.
pub fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Parse a numeric input, accepting `,` as the decimal separator.
/// Blank or invalid input reads as zero.
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim().replace(',', ".").parse().unwrap_or(0.0)
}

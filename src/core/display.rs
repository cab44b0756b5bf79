use crate::domain::model::{ConversionRequest, RateTable};
use crate::domain::ports::Console;
use crate::utils::error::Result;

const LISTING_HEADER: &str = "--- Available Currencies ---";
const LISTING_FOOTER: &str = "----------------------------";

/// Writes the supported codes, sorted, framed by header and footer lines.
pub fn list_currencies<C: Console>(console: &mut C, table: &RateTable) -> Result<()> {
    console.write_line(LISTING_HEADER)?;
    for code in table.codes() {
        console.write_line(&format!("- {}", code))?;
    }
    console.write_line(LISTING_FOOTER)?;
    Ok(())
}

pub fn present_result<C: Console>(
    console: &mut C,
    request: &ConversionRequest,
    converted: f64,
) -> Result<()> {
    console.write_line(&format!(
        "{} {} is equal to {} {}",
        format_amount(request.amount),
        request.from,
        format_amount(converted),
        request.to
    ))
}

/// Two decimal places with comma thousands separators, e.g. 1234567.891 →
/// "1,234,567.89". Non-finite values (possible when extreme file-supplied
/// rates overflow a conversion) pass through as "inf"/"NaN" rather than
/// gaining a bogus ".00".
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.2}", value);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}.{}", sign, grouped, frac_part)
}

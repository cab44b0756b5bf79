use crate::core::display;
use crate::domain::model::{ConversionRequest, RateTable};
use crate::domain::ports::Console;
use crate::utils::error::{FxError, Result};

// Interactive validation loops. Each loop validates one line into a typed
// error, prints its diagnostic, and retries; there is deliberately no
// iteration cap. Only console I/O failures (closed stdin included)
// propagate out.

pub fn collect_request<C: Console>(console: &mut C, table: &RateTable) -> Result<ConversionRequest> {
    let amount = collect_amount(console)?;
    let from = collect_source_currency(console, table)?;
    let to = collect_target_currency(console, table, &from)?;
    Ok(ConversionRequest { amount, from, to })
}

pub fn collect_amount<C: Console>(console: &mut C) -> Result<f64> {
    loop {
        console.write_line("Enter the amount to convert:")?;
        let line = console.read_line()?;
        match parse_amount(&line) {
            Ok(amount) => return Ok(amount),
            Err(e) => console.write_line(&diagnostic(&e))?,
        }
    }
}

pub fn collect_source_currency<C: Console>(console: &mut C, table: &RateTable) -> Result<String> {
    loop {
        console.write_line("Convert from currency (e.g., USD, EUR):")?;
        let line = console.read_line()?;
        match validate_code(table, &line) {
            Ok(code) => return Ok(code),
            Err(e) => {
                console.write_line(&diagnostic(&e))?;
                display::list_currencies(console, table)?;
            }
        }
    }
}

/// Like [`collect_source_currency`], but also rejects `excluding` so source
/// and target stay distinct. The same-currency diagnostic re-prompts without
/// re-listing; only unknown codes repeat the listing.
pub fn collect_target_currency<C: Console>(
    console: &mut C,
    table: &RateTable,
    excluding: &str,
) -> Result<String> {
    loop {
        console.write_line("Convert to currency (e.g., JPY, GBP):")?;
        let line = console.read_line()?;
        match validate_target_code(table, &line, excluding) {
            Ok(code) => return Ok(code),
            Err(e) => {
                let relist = matches!(e, FxError::UnknownCurrency { .. });
                console.write_line(&diagnostic(&e))?;
                if relist {
                    display::list_currencies(console, table)?;
                }
            }
        }
    }
}

pub fn ask_repeat<C: Console>(console: &mut C) -> Result<bool> {
    console.write_line("Do you want to perform another conversion? (yes/no):")?;
    let answer = console.read_line()?;
    Ok(answer.trim().eq_ignore_ascii_case("yes"))
}

/// Validates one amount line: must parse as a finite number greater than
/// zero.
pub fn parse_amount(line: &str) -> Result<f64> {
    let input = line.trim();
    let amount: f64 = input.parse().map_err(|_| FxError::ParseAmount {
        input: input.to_string(),
    })?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(FxError::NonPositiveAmount { value: amount });
    }
    Ok(amount)
}

/// Validates one currency-code line against the table, normalizing
/// (trim + uppercase) first.
pub fn validate_code(table: &RateTable, line: &str) -> Result<String> {
    let code = line.trim().to_uppercase();
    if table.contains(&code) {
        Ok(code)
    } else {
        Err(FxError::UnknownCurrency { code })
    }
}

pub fn validate_target_code(table: &RateTable, line: &str, excluding: &str) -> Result<String> {
    let code = validate_code(table, line)?;
    if code == excluding {
        return Err(FxError::SameCurrency { code });
    }
    Ok(code)
}

/// The one-line user-facing message printed before re-prompting.
pub fn diagnostic(error: &FxError) -> String {
    match error {
        FxError::ParseAmount { .. } => {
            "Invalid amount. Please enter a numerical value.".to_string()
        }
        FxError::NonPositiveAmount { .. } => {
            "Amount must be a positive number. Please try again.".to_string()
        }
        FxError::UnknownCurrency { code } => format!(
            "Currency '{}' not supported. Please choose from the list above.",
            code
        ),
        FxError::SameCurrency { .. } => "Source and target currencies cannot be the same. \
                                         Please choose a different target currency."
            .to_string(),
        other => format!("Conversion failed: {}", other),
    }
}

use crate::domain::model::{ConversionRequest, RateTable};
use crate::utils::error::{FxError, Result};

/// Converts an amount by normalizing through the base currency: amount →
/// base units → target units. Pure function, no I/O.
///
/// Equal source and target codes are a valid degenerate case yielding the
/// identity amount; distinctness is enforced by the collector, not here.
/// The zero-rate guard stays even though validated tables cannot hit it:
/// a live-rate provider would hand this function untrusted data.
pub fn convert(request: &ConversionRequest, table: &RateTable) -> Result<f64> {
    let from_rate = table.rate(&request.from)?;
    let to_rate = table.rate(&request.to)?;

    if from_rate == 0.0 {
        return Err(FxError::ZeroRate {
            code: request.from.clone(),
        });
    }

    let amount_in_base = request.amount / from_rate;
    Ok(amount_in_base * to_rate)
}

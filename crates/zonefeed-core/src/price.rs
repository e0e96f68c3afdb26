//! Currency text → minor units. A price that cannot be read is fatal.

use crate::error::{NormalizeError, Result};
use crate::types::Price;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// The amount must not continue a digit group or follow a minus sign.
    static ref EURO_AMOUNT: Regex = Regex::new(r"(?:^|[^\d\s.,\-])\s*(?P<amount>\d+(?:[.,]\d+)?)\s*(?:&euro;|€)")
        .expect("EURO_AMOUNT regex to compile");
}

/// Parse text such as `"5€"`, `"1.50 €"` or `"2 &euro;"` into cents.
pub fn parse_price(text: &str) -> Result<Price> {
    let amount = EURO_AMOUNT
        .captures(text)
        .and_then(|captures| captures["amount"].replace(',', ".").parse::<f64>().ok())
        .ok_or_else(|| NormalizeError::UnknownPriceFormat(text.to_string()))?;

    cents_from_euros(amount)
}

/// `round(euros * 100)`, rejecting negative and non-finite amounts.
pub fn cents_from_euros(euros: f64) -> Result<Price> {
    let cents = (euros * 100.0).round();
    if !cents.is_finite() || cents < 0.0 || cents > f64::from(Price::MAX) {
        return Err(NormalizeError::InvalidPrice(euros));
    }
    Ok(cents as Price)
}

use crate::errors::LedgerError;

/// Parses a user-entered amount.
///
/// Blank input is `MissingAmount`; anything that is not a finite decimal is
/// `InvalidAmount`. Zero and negative values are accepted.
pub fn parse_amount(raw: &str) -> Result<f64, LedgerError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::MissingAmount);
    }
    let cleaned: String = trimmed.chars().filter(|ch| *ch != ',' && *ch != '_').collect();
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(LedgerError::InvalidAmount(trimmed.to_string())),
    }
}

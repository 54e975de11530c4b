// src/services/calculations.rs
//! Pieces shared by the certificate and treasury-bill calculators.
use thiserror::Error;

/// Why a calculation produced no result.
///
/// `NotReady` means the caller has nothing to show yet (a selection or amount is
/// missing). `InvalidInput` means a supplied value breaks a structural rule and
/// should be surfaced to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("{0} is required")]
    NotReady(&'static str),

    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
}

impl CalcError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

pub type CalcResult<T> = std::result::Result<T, CalcError>;

/// A missing or zero amount is "not ready"; any other finite value, negative
/// included, passes through unchanged.
pub fn require_amount(value: Option<f64>, field: &'static str) -> CalcResult<f64> {
    match value {
        None => Err(CalcError::NotReady(field)),
        Some(v) if v == 0.0 => Err(CalcError::NotReady(field)),
        Some(v) if !v.is_finite() => Err(CalcError::invalid(field, "must be a finite number")),
        Some(v) => Ok(v),
    }
}

/// A missing or blank identifier is "not ready".
pub fn require_selection<'a>(value: Option<&'a str>, field: &'static str) -> CalcResult<&'a str> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(CalcError::NotReady(field)),
    }
}

pub fn percent_of(amount: f64, rate_percent: f64) -> f64 {
    amount * (rate_percent / 100.0)
}

/// Rounds to piasters for display. Results are never rounded internally.
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_zero_amounts_are_not_ready() {
        assert_eq!(require_amount(None, "principal"), Err(CalcError::NotReady("principal")));
        assert_eq!(require_amount(Some(0.0), "principal"), Err(CalcError::NotReady("principal")));
    }

    #[test]
    fn negative_amounts_pass_through() {
        assert_eq!(require_amount(Some(-500.0), "principal"), Ok(-500.0));
    }

    #[test]
    fn non_finite_amounts_are_invalid() {
        let err = require_amount(Some(f64::INFINITY), "rate").unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { field: "rate", .. }));
    }

    #[test]
    fn blank_selection_is_not_ready() {
        assert_eq!(require_selection(None, "bankId"), Err(CalcError::NotReady("bankId")));
        assert_eq!(require_selection(Some("  "), "bankId"), Err(CalcError::NotReady("bankId")));
        assert_eq!(require_selection(Some(" nbe "), "bankId"), Ok("nbe"));
    }

    #[test]
    fn currency_rounding() {
        assert_eq!(round_currency(1261.390764), 1261.39);
        assert_eq!(round_currency(1250.004), 1250.0);
        assert_eq!(round_currency(0.126), 0.13);
        assert_eq!(percent_of(100_000.0, 15.0), 15_000.0);
    }
}

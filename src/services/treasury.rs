// src/services/treasury.rs
use serde::Serialize;

use crate::services::calculations::{require_amount, CalcError, CalcResult};

/// Flat withholding tax on treasury-bill discount income.
pub const TAX_RATE: f64 = 0.20;

pub const DAYS_PER_YEAR: f64 = 365.0;

/// Auction tenors in months and the day counts used to price them.
/// These are fixed auction terms, not calendar months.
pub const DAY_COUNT: [(u32, u32); 4] = [(3, 91), (6, 182), (9, 273), (12, 364)];

pub fn days_for_tenor(tenor_months: u32) -> Option<u32> {
    DAY_COUNT
        .iter()
        .find(|(months, _)| *months == tenor_months)
        .map(|(_, days)| *days)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TBillResult {
    pub principal: f64,
    pub rate: f64,
    pub tenor_months: u32,
    pub days: u32,
    pub purchase_price: f64,
    pub upfront_profit: f64,
    pub tax: f64,
    pub net_profit: f64,
    pub net_profit_rate: f64,
}

/// Net yield of a bill with face value `principal` bought at the quoted
/// annual discount rate (in percent) for `tenor_months`.
pub fn compute_treasury_bill_yield(
    principal: Option<f64>,
    quoted_annual_rate_percent: Option<f64>,
    tenor_months: Option<u32>,
) -> CalcResult<TBillResult> {
    let principal = require_amount(principal, "amount")?;
    let rate = require_amount(quoted_annual_rate_percent, "rate")?;
    let tenor_months = tenor_months
        .filter(|months| *months != 0)
        .ok_or(CalcError::NotReady("durationMonths"))?;

    let days = days_for_tenor(tenor_months).ok_or_else(|| {
        CalcError::invalid(
            "durationMonths",
            format!("{} is not one of 3, 6, 9 or 12", tenor_months),
        )
    })?;
    if principal < 0.0 {
        return Err(CalcError::invalid("amount", "must be positive"));
    }
    if rate < 0.0 {
        return Err(CalcError::invalid("rate", "must be positive"));
    }

    let face_factor = (days as f64 / DAYS_PER_YEAR) * (rate / 100.0) + 1.0;
    let purchase_price = principal / face_factor;
    let upfront_profit = principal - purchase_price;
    let tax = upfront_profit * TAX_RATE;
    let net_profit = upfront_profit - tax;
    let net_profit_rate = (net_profit / principal) * 100.0;

    Ok(TBillResult {
        principal,
        rate,
        tenor_months,
        days,
        purchase_price,
        upfront_profit,
        tax,
        net_profit,
        net_profit_rate,
    })
}

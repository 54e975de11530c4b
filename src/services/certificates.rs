// src/services/certificates.rs
use serde::Serialize;

use crate::models::{Certificate, GraduatedRates, PayoutCadence, ReturnType};
use crate::services::calculations::{percent_of, require_amount, CalcError, CalcResult};

/// Periodic payout reported for fixed and variable certificates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Installment {
    pub cadence: PayoutCadence,
    pub amount: f64,
    pub monthly_amount: f64,
}

/// One year of a graduated certificate. `monthly_profit` is only set when the
/// certificate does not pay annually.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyProfit {
    pub year: u8,
    pub rate: f64,
    pub yearly_profit: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_profit: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateResult {
    pub principal: f64,
    pub total_profit: f64,
    pub total_amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installment: Option<Installment>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub yearly_breakdown: Vec<YearlyProfit>,
}

/// Projects profit for `principal` invested in `certificate`.
///
/// Rates and principal are used as given: zero or negative values flow through
/// the formulas. Only a missing or zero principal short-circuits (`NotReady`),
/// and a certificate whose rate fields contradict its return type is rejected
/// (`InvalidInput`).
pub fn compute_certificate_profit(
    certificate: &Certificate,
    principal: Option<f64>,
) -> CalcResult<CertificateResult> {
    let principal = require_amount(principal, "principal")?;

    let (total_profit, installment, yearly_breakdown) =
        match (certificate.return_type, &certificate.graduated_rates) {
            (ReturnType::Graduated, Some(rates)) => {
                let breakdown = graduated_breakdown(principal, rates, certificate.payout_cadence);
                let total = breakdown.iter().map(|y| y.yearly_profit).sum::<f64>();
                (total, None, breakdown)
            }
            (ReturnType::Graduated, None) => {
                return Err(CalcError::invalid(
                    "certificate",
                    format!("graduated certificate '{}' has no graduatedRates", certificate.id),
                ));
            }
            (ReturnType::Fixed | ReturnType::Variable, Some(_)) => {
                return Err(CalcError::invalid(
                    "certificate",
                    format!("certificate '{}' is not graduated but has graduatedRates", certificate.id),
                ));
            }
            (ReturnType::Fixed | ReturnType::Variable, None) => {
                let monthly = percent_of(principal, certificate.interest_rate) / 12.0;
                let total = monthly * 12.0 * certificate.years();
                let installment = Installment {
                    cadence: certificate.payout_cadence,
                    amount: monthly * certificate.payout_cadence.months() as f64,
                    monthly_amount: monthly,
                };
                (total, Some(installment), Vec::new())
            }
        };

    Ok(CertificateResult {
        principal,
        total_profit,
        total_amount: principal + total_profit,
        installment,
        yearly_breakdown,
    })
}

fn graduated_breakdown(
    principal: f64,
    rates: &GraduatedRates,
    cadence: PayoutCadence,
) -> Vec<YearlyProfit> {
    rates
        .as_array()
        .iter()
        .zip(1u8..)
        .map(|(&rate, year)| {
            let yearly_profit = percent_of(principal, rate);
            let monthly_profit = match cadence {
                PayoutCadence::Annual => None,
                PayoutCadence::Monthly | PayoutCadence::Quarterly => Some(yearly_profit / 12.0),
            };
            YearlyProfit {
                year,
                rate,
                yearly_profit,
                monthly_profit,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(rate: f64, duration_months: u32, cadence: PayoutCadence) -> Certificate {
        Certificate {
            id: "fixed".into(),
            name: String::new(),
            duration_months,
            interest_rate: rate,
            return_type: ReturnType::Fixed,
            graduated_rates: None,
            payout_cadence: cadence,
            min_amount: 1000.0,
            description: String::new(),
            features: Vec::new(),
        }
    }

    fn graduated(y1: f64, y2: f64, y3: f64, cadence: PayoutCadence) -> Certificate {
        Certificate {
            id: "graduated".into(),
            return_type: ReturnType::Graduated,
            graduated_rates: Some(GraduatedRates { year1: y1, year2: y2, year3: y3 }),
            ..fixed(0.0, 36, cadence)
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn fixed_monthly_one_year() {
        let result = compute_certificate_profit(&fixed(15.0, 12, PayoutCadence::Monthly), Some(100_000.0)).unwrap();
        assert_eq!(result.total_profit, 15_000.0);
        assert_eq!(result.total_amount, 115_000.0);
        let installment = result.installment.unwrap();
        assert_eq!(installment.amount, 1250.0);
        assert_eq!(installment.monthly_amount, 1250.0);
        assert!(result.yearly_breakdown.is_empty());
    }

    #[test]
    fn quarterly_installment_is_three_months() {
        let result = compute_certificate_profit(&fixed(15.0, 12, PayoutCadence::Quarterly), Some(100_000.0)).unwrap();
        assert_eq!(result.installment.unwrap().amount, 3750.0);
    }

    #[test]
    fn total_profit_ignores_cadence() {
        for rate in [0.0, 12.5, 17.25, 27.0] {
            for months in [12, 36, 60] {
                let totals: Vec<f64> = [PayoutCadence::Monthly, PayoutCadence::Quarterly, PayoutCadence::Annual]
                    .into_iter()
                    .map(|c| compute_certificate_profit(&fixed(rate, months, c), Some(75_000.0)).unwrap().total_profit)
                    .collect();
                assert!(totals.iter().all(|t| *t == totals[0]), "rate {} months {}: {:?}", rate, months, totals);
            }
        }
    }

    #[test]
    fn variable_uses_same_formula_as_fixed() {
        let mut cert = fixed(20.0, 36, PayoutCadence::Monthly);
        cert.return_type = ReturnType::Variable;
        let result = compute_certificate_profit(&cert, Some(10_000.0)).unwrap();
        assert!(close(result.total_profit, 6000.0));
    }

    #[test]
    fn odd_duration_gives_fractional_years() {
        let result = compute_certificate_profit(&fixed(10.0, 18, PayoutCadence::Monthly), Some(10_000.0)).unwrap();
        assert!(close(result.total_profit, 1500.0));
    }

    #[test]
    fn graduated_annual_sums_three_years() {
        let result = compute_certificate_profit(&graduated(10.0, 11.0, 12.0, PayoutCadence::Annual), Some(50_000.0)).unwrap();
        assert_eq!(result.total_profit, 16_500.0);
        assert_eq!(result.total_amount, 66_500.0);
        assert!(result.installment.is_none());
        assert_eq!(result.yearly_breakdown.len(), 3);
        assert!(result.yearly_breakdown.iter().all(|y| y.monthly_profit.is_none()));
        assert_eq!(result.yearly_breakdown[1].yearly_profit, 5500.0);
    }

    #[test]
    fn graduated_monthly_breakdown_round_trips() {
        let result = compute_certificate_profit(&graduated(30.0, 25.0, 20.0, PayoutCadence::Monthly), Some(120_000.0)).unwrap();
        let from_monthly: f64 = result
            .yearly_breakdown
            .iter()
            .map(|y| y.monthly_profit.unwrap() * 12.0)
            .sum();
        let from_yearly: f64 = result.yearly_breakdown.iter().map(|y| y.yearly_profit).sum();
        assert!(close(from_monthly, from_yearly));
        assert!(close(from_yearly, result.total_profit));
        assert!(close(result.total_profit, 90_000.0));
        assert_eq!(result.yearly_breakdown[0].monthly_profit, Some(3000.0));
    }

    #[test]
    fn total_amount_is_principal_plus_profit() {
        for cert in [
            fixed(18.0, 36, PayoutCadence::Quarterly),
            graduated(22.0, 18.0, 14.0, PayoutCadence::Quarterly),
        ] {
            let r = compute_certificate_profit(&cert, Some(33_333.0)).unwrap();
            assert_eq!(r.total_amount, r.principal + r.total_profit);
        }
    }

    #[test]
    fn negative_rates_and_principal_pass_through() {
        let r = compute_certificate_profit(&fixed(-5.0, 12, PayoutCadence::Monthly), Some(1000.0)).unwrap();
        assert!(close(r.total_profit, -50.0));
        let r = compute_certificate_profit(&fixed(10.0, 12, PayoutCadence::Monthly), Some(-1000.0)).unwrap();
        assert!(close(r.total_profit, -100.0));
    }

    #[test]
    fn zero_rate_is_a_valid_zero_result() {
        let r = compute_certificate_profit(&fixed(0.0, 12, PayoutCadence::Monthly), Some(1000.0)).unwrap();
        assert_eq!(r.total_profit, 0.0);
        assert_eq!(r.total_amount, 1000.0);
    }

    #[test]
    fn missing_principal_is_not_ready() {
        let cert = fixed(15.0, 12, PayoutCadence::Monthly);
        assert_eq!(compute_certificate_profit(&cert, None), Err(CalcError::NotReady("principal")));
        assert_eq!(compute_certificate_profit(&cert, Some(0.0)), Err(CalcError::NotReady("principal")));
    }

    #[test]
    fn graduated_without_rates_is_invalid() {
        let mut cert = graduated(1.0, 2.0, 3.0, PayoutCadence::Annual);
        cert.graduated_rates = None;
        let err = compute_certificate_profit(&cert, Some(1000.0)).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { field: "certificate", .. }));
    }

    #[test]
    fn fixed_with_graduated_rates_is_invalid() {
        let mut cert = fixed(10.0, 12, PayoutCadence::Monthly);
        cert.graduated_rates = Some(GraduatedRates { year1: 1.0, year2: 2.0, year3: 3.0 });
        assert!(compute_certificate_profit(&cert, Some(1000.0)).is_err());
    }
}

// src/models.rs
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnType {
    Fixed,
    Variable,
    Graduated,
}

/// How often the profit is paid out. Stored under the `type` key in the data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoutCadence {
    Monthly,
    Quarterly,
    Annual,
}

impl PayoutCadence {
    /// Number of months covered by one installment.
    pub fn months(self) -> u32 {
        match self {
            PayoutCadence::Monthly => 1,
            PayoutCadence::Quarterly => 3,
            PayoutCadence::Annual => 12,
        }
    }
}

/// Annual percentages for each of the first three years of a graduated certificate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraduatedRates {
    pub year1: f64,
    pub year2: f64,
    pub year3: f64,
}

impl GraduatedRates {
    pub fn as_array(&self) -> [f64; 3] {
        [self.year1, self.year2, self.year3]
    }

    pub fn max(&self) -> f64 {
        self.year1.max(self.year2).max(self.year3)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "duration")]
    pub duration_months: u32,
    #[serde(default)]
    pub interest_rate: f64,
    pub return_type: ReturnType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graduated_rates: Option<GraduatedRates>,
    #[serde(rename = "type")]
    pub payout_cadence: PayoutCadence,
    #[serde(default)]
    pub min_amount: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
}

impl Certificate {
    /// Tenor in years. Durations that are not a multiple of 12 give a fractional value.
    pub fn years(&self) -> f64 {
        self.duration_months as f64 / 12.0
    }

    /// The single rate shown in listings: the best graduated year, or the nominal rate.
    pub fn headline_rate(&self) -> f64 {
        match (self.return_type, &self.graduated_rates) {
            (ReturnType::Graduated, Some(rates)) => rates.max(),
            _ => self.interest_rate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bank {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
}

impl Bank {
    pub fn certificate(&self, certificate_id: &str) -> Option<&Certificate> {
        self.certificates.iter().find(|c| c.id == certificate_id)
    }
}

/// Root of the bank data file: `{ "banks": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BankData {
    pub banks: Vec<Bank>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub location: String,
    pub reason: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.reason)
    }
}

impl std::error::Error for ValidationError {}

fn slug_pattern() -> &'static Regex {
    static SLUG: OnceLock<Regex> = OnceLock::new();
    SLUG.get_or_init(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]*$").expect("slug pattern is valid"))
}

impl BankData {
    pub fn bank(&self, bank_id: &str) -> Option<&Bank> {
        self.banks.iter().find(|b| b.id == bank_id)
    }

    pub fn certificate(&self, bank_id: &str, certificate_id: &str) -> Option<&Certificate> {
        self.bank(bank_id).and_then(|b| b.certificate(certificate_id))
    }

    /// Structural checks run before the data file is overwritten.
    /// Reports the first problem found, in display order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let invalid = |location: String, reason: &str| ValidationError {
            location,
            reason: reason.to_string(),
        };

        let mut bank_ids = HashSet::new();
        for (i, bank) in self.banks.iter().enumerate() {
            let at = format!("banks[{}]", i);
            if !slug_pattern().is_match(&bank.id) {
                return Err(invalid(at, "bank id must be letters, digits, '-' or '_'"));
            }
            if !bank_ids.insert(bank.id.as_str()) {
                return Err(invalid(at, "duplicate bank id"));
            }
            if bank.name.trim().is_empty() {
                return Err(invalid(at, "bank name is empty"));
            }

            let mut certificate_ids = HashSet::new();
            for (j, cert) in bank.certificates.iter().enumerate() {
                let at = format!("banks[{}].certificates[{}]", i, j);
                if !slug_pattern().is_match(&cert.id) {
                    return Err(invalid(at, "certificate id must be letters, digits, '-' or '_'"));
                }
                if !certificate_ids.insert(cert.id.as_str()) {
                    return Err(invalid(at, "duplicate certificate id within bank"));
                }
                if cert.duration_months == 0 {
                    return Err(invalid(at, "duration must be positive"));
                }
                match (cert.return_type, cert.graduated_rates.is_some()) {
                    (ReturnType::Graduated, false) => {
                        return Err(invalid(at, "graduated certificate has no graduatedRates"));
                    }
                    (ReturnType::Fixed | ReturnType::Variable, true) => {
                        return Err(invalid(at, "graduatedRates set on a non-graduated certificate"));
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }
}

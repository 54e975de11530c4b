// src/bin/check_bank_data.rs
// Usage: check_bank_data [principal]
use anyhow::{Context, Result};
use dotenv::dotenv;
use std::env;

use egp_certificates::config::AppConfig;
use egp_certificates::services::bank_store::BankStore;
use egp_certificates::services::calculations::round_currency;
use egp_certificates::services::certificates::compute_certificate_profit;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let principal: f64 = match env::args().nth(1) {
        Some(raw) => raw.parse().with_context(|| format!("principal must be a number, got {:?}", raw))?,
        None => 100_000.0,
    };

    let config = AppConfig::from_env()?;
    let store = BankStore::new(config.bank_data_path);
    let data = store
        .load()
        .await
        .with_context(|| format!("loading {}", store.path().display()))?;

    match data.validate() {
        Ok(()) => println!("{}: OK ({} banks)", store.path().display(), data.banks.len()),
        Err(e) => println!("{}: INVALID at {}", store.path().display(), e),
    }

    println!("\nProjection for {} EGP", principal);
    for bank in &data.banks {
        println!("\n{} [{}]", bank.name, bank.id);
        for cert in &bank.certificates {
            match compute_certificate_profit(cert, Some(principal)) {
                Ok(result) => {
                    let installment = result
                        .installment
                        .as_ref()
                        .map(|i| format!("{:?} {:.2}", i.cadence, i.amount))
                        .unwrap_or_else(|| "-".to_string());
                    println!(
                        "  {:<28} {:>5.2}% {:>4.1}y  profit {:>12.2}  total {:>12.2}  installment {}",
                        cert.id,
                        cert.headline_rate(),
                        cert.years(),
                        round_currency(result.total_profit),
                        round_currency(result.total_amount),
                        installment
                    );
                    for year in &result.yearly_breakdown {
                        println!(
                            "      year {} @ {:.2}%: {:.2}/year{}",
                            year.year,
                            year.rate,
                            year.yearly_profit,
                            year.monthly_profit
                                .map(|m| format!(", {:.2}/month", m))
                                .unwrap_or_default()
                        );
                    }
                }
                Err(e) => println!("  {:<28} ERROR {}", cert.id, e),
            }
        }
    }
    Ok(())
}

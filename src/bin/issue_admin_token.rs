// src/bin/issue_admin_token.rs
// Usage: issue_admin_token <subject> [hours]
use anyhow::{bail, Context, Result};
use dotenv::dotenv;
use std::env;

use egp_certificates::services::admin_auth::{issue_token, ttl_from_hours};

fn main() -> Result<()> {
    dotenv().ok();

    let secret = env::var("ADMIN_JWT_SECRET").context("ADMIN_JWT_SECRET must be set")?;
    if secret.len() < 16 {
        bail!("ADMIN_JWT_SECRET is too short (need at least 16 bytes)");
    }

    let mut args = env::args().skip(1);
    let subject = args.next().context("usage: issue_admin_token <subject> [hours]")?;
    let hours: i64 = match args.next() {
        Some(raw) => raw.parse().with_context(|| format!("hours must be a number, got {:?}", raw))?,
        None => 12,
    };

    if hours <= 0 {
        bail!("hours must be positive, got {}", hours);
    }
    let ttl = ttl_from_hours(hours).with_context(|| format!("{} hours is too long", hours))?;

    let token = issue_token(&secret, &subject, ttl)?;
    println!("{}", token);
    Ok(())
}

// src/config.rs
use anyhow::{Context, Result};
use log::warn;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3030;
pub const DEFAULT_BANK_DATA_PATH: &str = "data/bank-certificates.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub bank_data_path: PathBuf,
    /// Admin routes refuse every request when this is unset.
    pub admin_jwt_secret: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a number, got {:?}", raw))?,
            None => {
                warn!("$PORT not set, defaulting to {}", DEFAULT_PORT);
                DEFAULT_PORT
            }
        };

        let bank_data_path = lookup("BANK_DATA_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BANK_DATA_PATH));

        let admin_jwt_secret = lookup("ADMIN_JWT_SECRET").filter(|s| !s.is_empty());
        if admin_jwt_secret.is_none() {
            warn!("ADMIN_JWT_SECRET not set, admin routes are disabled");
        }

        Ok(AppConfig {
            port,
            bank_data_path,
            admin_jwt_secret,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.bank_data_path, PathBuf::from(DEFAULT_BANK_DATA_PATH));
        assert!(config.admin_jwt_secret.is_none());
    }

    #[test]
    fn reads_all_values() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("BANK_DATA_PATH", "/srv/banks.json"),
            ("ADMIN_JWT_SECRET", "s3cret"),
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.bank_data_path, PathBuf::from("/srv/banks.json"));
        assert_eq!(config.admin_jwt_secret.as_deref(), Some("s3cret"));
    }

    #[test]
    fn bad_port_is_an_error() {
        assert!(config_from(&[("PORT", "eighty")]).is_err());
    }

    #[test]
    fn empty_secret_counts_as_unset() {
        assert!(config_from(&[("ADMIN_JWT_SECRET", "")]).unwrap().admin_jwt_secret.is_none());
    }
}

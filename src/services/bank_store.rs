// src/services/bank_store.rs
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use thiserror::Error;
use tokio::fs;
use tokio::sync::Mutex;

use crate::models::{BankData, ValidationError};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("bank data file error: {0}")]
    Io(#[from] io::Error),

    #[error("bank data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bank data rejected: {0}")]
    Invalid(#[from] ValidationError),
}

/// Flat JSON file holding every bank and its certificates.
///
/// The file is re-read on every `load`, so edits made by hand or by another
/// process are picked up without a restart. Saves are serialised and replace
/// the file through a rename.
pub struct BankStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl BankStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Result<BankData, StoreError> {
        debug!("Reading bank data from {}", self.path.display());
        let contents = fs::read_to_string(&self.path).await?;
        let data: BankData = serde_json::from_str(&contents)?;
        debug!("Loaded {} banks", data.banks.len());
        Ok(data)
    }

    pub async fn save(&self, data: &BankData) -> Result<(), StoreError> {
        data.validate()?;
        let mut body = serde_json::to_string_pretty(data)?;
        body.push('\n');

        let _guard = self.write_lock.lock().await;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, body).await?;
        fs::rename(&tmp, &self.path).await?;

        info!(
            "Saved {} banks ({} certificates) to {}",
            data.banks.len(),
            data.banks.iter().map(|b| b.certificates.len()).sum::<usize>(),
            self.path.display()
        );
        Ok(())
    }
}

use crate::core::{DeskError, Result};
use reqwest::Url;
use std::env;
use std::path::{Path, PathBuf};

pub const SCRIPT_URL_VAR: &str = "INTIMATION_SCRIPT_URL";
pub const DATA_DIR_VAR: &str = "INTIMATION_DATA_DIR";
pub const EXPORT_DIR_VAR: &str = "INTIMATION_EXPORT_DIR";

/// Marker left in an endpoint that was never filled in.
pub const ENDPOINT_PLACEHOLDER: &str = "YOUR_SCRIPT_ID_HERE";

/// File name of the local fallback collection.
pub const LOCAL_BLOB_NAME: &str = "intimation_files.json";

/// Which store implementation backs the desk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Remote { endpoint: Url },
    Local { path: PathBuf },
}

#[derive(Debug, Clone)]
pub struct DeskConfig {
    /// Sheet service endpoint, as configured.
    pub endpoint: Option<String>,

    /// Directory holding the local fallback blob.
    pub data_dir: PathBuf,

    /// Directory CSV exports are written to.
    pub export_dir: PathBuf,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            data_dir: PathBuf::from("data"),
            export_dir: PathBuf::from("."),
        }
    }
}

impl DeskConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let dir = |key: &str| lookup(key).filter(|d| !d.trim().is_empty()).map(PathBuf::from);
        Self {
            endpoint: lookup(SCRIPT_URL_VAR),
            data_dir: dir(DATA_DIR_VAR).unwrap_or(defaults.data_dir),
            export_dir: dir(EXPORT_DIR_VAR).unwrap_or(defaults.export_dir),
        }
    }

    pub fn endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = Some(endpoint.to_string());
        self
    }

    pub fn data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.data_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn export_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.export_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn local_blob_path(&self) -> PathBuf {
        self.data_dir.join(LOCAL_BLOB_NAME)
    }

    /// Resolves the backend once. A missing, blank or placeholder endpoint
    /// selects the local fallback; anything else must be an http(s) URL.
    pub fn backend(&self) -> Result<StoreBackend> {
        let raw = match self.endpoint.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() && !raw.contains(ENDPOINT_PLACEHOLDER) => raw,
            _ => {
                return Ok(StoreBackend::Local {
                    path: self.local_blob_path(),
                });
            }
        };

        let endpoint = Url::parse(raw)
            .map_err(|e| DeskError::Config(format!("{} '{}': {}", SCRIPT_URL_VAR, raw, e)))?;
        match endpoint.scheme() {
            "http" | "https" => Ok(StoreBackend::Remote { endpoint }),
            scheme => Err(DeskError::Config(format!(
                "{} must be an http(s) URL, got scheme '{}'",
                SCRIPT_URL_VAR, scheme
            ))),
        }
    }
}

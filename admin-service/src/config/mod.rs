use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Production base URL for Firestore's REST API.
const DEFAULT_FIRESTORE_API_BASE: &str = "https://firestore.googleapis.com/v1";

#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Path to the service-account key file (JSON bundle).
    pub credentials_path: String,
    /// Base URL of the Firestore REST API.
    pub api_base_url: String,
    /// Collection holding the administrative record.
    pub collection: String,
    /// Identifier of the record served at /admin.
    pub record_id: String,
}

impl AdminConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(AdminConfig {
            common: common_config,
            store: StoreConfig {
                credentials_path: get_env("GOOGLE_APPLICATION_CREDENTIALS", None, is_prod)?,
                api_base_url: get_env(
                    "FIRESTORE_API_BASE",
                    Some(DEFAULT_FIRESTORE_API_BASE),
                    is_prod,
                )?,
                collection: get_env("ADMIN_COLLECTION", Some("admin"), is_prod)?,
                record_id: get_env("ADMIN_RECORD_ID", None, is_prod)?,
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}

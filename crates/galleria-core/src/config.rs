//! Configuration module
//!
//! Environment-driven configuration with sensible defaults. Every value can
//! be overridden via the process environment; a `.env` file is honored when
//! present.

use std::env;

use crate::constants::MAX_UPLOAD_BYTES;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STORE_URL: &str = "http://localhost:8080";
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_STATIC_DIR: &str = "static";

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub store_url: String,
    pub upload_dir: String,
    pub static_dir: String,
    pub max_upload_bytes: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let server_port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("Invalid PORT '{}': {}", raw, e))?,
            Err(_) => DEFAULT_PORT,
        };

        let store_url = env::var("STORE_URL")
            .unwrap_or_else(|_| DEFAULT_STORE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let upload_dir = env::var("UPLOAD_DIR").unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.to_string());
        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string());

        Ok(Config {
            server_port,
            store_url,
            upload_dir,
            static_dir,
            max_upload_bytes: MAX_UPLOAD_BYTES,
        })
    }
}

use crate::error::ConfigError;
use reqwest::Url;
use std::env;

pub const BACKEND_ENV: &str = "PDF_CHATBOT_BACKEND";
pub const DEFAULT_BACKEND_ORIGIN: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    backend_origin: String,
}

impl ClientConfig {
    pub fn new(origin: &str) -> Result<Self, ConfigError> {
        let trimmed = origin.trim().trim_end_matches('/');
        let invalid = |reason: String| ConfigError::InvalidOrigin {
            origin: origin.to_string(),
            reason,
        };

        let url = Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(invalid(format!("unsupported scheme {}", url.scheme())));
        }

        Ok(Self {
            backend_origin: trimmed.to_string(),
        })
    }

    /// Reads the origin from the environment, falling back to the local
    /// development server. Callers load `.env` beforehand.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(BACKEND_ENV) {
            Ok(origin) if !origin.trim().is_empty() => Self::new(&origin),
            _ => {
                log::info!("{} not set, using {}", BACKEND_ENV, DEFAULT_BACKEND_ORIGIN);
                Self::new(DEFAULT_BACKEND_ORIGIN)
            }
        }
    }

    pub fn backend_origin(&self) -> &str {
        &self.backend_origin
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.backend_origin, path.trim_start_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_origin: DEFAULT_BACKEND_ORIGIN.to_string(),
        }
    }
}

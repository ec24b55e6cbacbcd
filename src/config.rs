use std::time::Duration;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_GEMINI_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const PROVIDER_TIMEOUT: Duration = Duration::from_secs(60);

/// Process-wide relay settings, read once at startup.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub api_key: Option<String>,
    pub port: u16,
    pub gemini_base: String,
    pub gemini_model: String,
    pub provider_timeout: Duration,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            port: DEFAULT_PORT,
            gemini_base: DEFAULT_GEMINI_BASE.to_string(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            provider_timeout: PROVIDER_TIMEOUT,
        }
    }
}

impl RelayConfig {
    /// Reads `GOOGLE_API_KEY`, `PORT`, `GEMINI_API_BASE` and `GEMINI_MODEL`.
    /// An empty key counts as absent.
    pub fn from_env() -> Self {
        let api_key = dotenvy::var("GOOGLE_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());
        let port = dotenvy::var("PORT")
            .ok()
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let gemini_base =
            dotenvy::var("GEMINI_API_BASE").unwrap_or_else(|_| DEFAULT_GEMINI_BASE.to_string());
        let gemini_model =
            dotenvy::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string());

        Self {
            api_key,
            port,
            gemini_base,
            gemini_model,
            provider_timeout: PROVIDER_TIMEOUT,
        }
    }

    pub fn api_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Chat client settings.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    pub download_dir: std::path::PathBuf,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let api_url = dotenvy::var("MR_BUKKAN_API_URL")
            .ok()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let download_dir = dotenvy::var("MR_BUKKAN_DOWNLOAD_DIR")
            .map(std::path::PathBuf::from)
            .unwrap_or_else(|_| std::path::PathBuf::from("."));

        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            download_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_key() {
        let cfg = RelayConfig::default();
        assert!(!cfg.api_configured());
        assert_eq!(cfg.listen_addr(), "0.0.0.0:5000");
        assert_eq!(cfg.provider_timeout, Duration::from_secs(60));
    }
}

use std::env;
use std::path::PathBuf;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_STATIC_DIR: &str = "static";

/// Server settings read from the environment (after `.env` is loaded).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Unset or unparsable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = lookup("PORT")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let static_dir = lookup("STATIC_DIR")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string());

        Self {
            host,
            port,
            static_dir: PathBuf::from(static_dir),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The next port up, or `None` when `port` is already the highest one.
    pub fn fallback_bind_addr(&self) -> Option<String> {
        self.port
            .checked_add(1)
            .map(|port| format!("{}:{}", self.host, port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

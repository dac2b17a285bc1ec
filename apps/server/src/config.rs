use anyhow::Context;
use std::{net::SocketAddr, time::Duration};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// Base64 (or 32 ASCII chars) HS256 secret. A random one is generated
    /// per process when unset, so tokens do not survive restarts.
    pub jwt_secret: Option<String>,
    pub access_token_ttl: Duration,
    /// Shared token for the reporting API. Unset means every reporting
    /// request is rejected.
    pub api_token: Option<String>,
    pub alert_webhook_url: Option<String>,
    pub alert_webhook_token: Option<String>,
}

fn optional_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("HG_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid HG_LISTEN_ADDR")?;
        let db_path = std::env::var("HG_DB_PATH").unwrap_or_else(|_| "./db/app.db".into());
        let cors_allow = std::env::var("HG_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("HG_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let ttl_minutes: u64 = std::env::var("HG_ACCESS_TOKEN_TTL_MINUTES")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .unwrap_or(60);
        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            jwt_secret: optional_var("HG_JWT_SECRET"),
            access_token_ttl: Duration::from_secs(ttl_minutes * 60),
            api_token: optional_var("HG_API_TOKEN"),
            alert_webhook_url: optional_var("HG_ALERT_WEBHOOK_URL"),
            alert_webhook_token: optional_var("HG_ALERT_WEBHOOK_TOKEN"),
        })
    }
}

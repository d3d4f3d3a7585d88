use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Load the sample catalogue (regions, artisans, products) at startup.
    pub seed_data: bool,
    pub body_limit: usize,
    pub concurrency_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            seed_data: true,
            body_limit: 1024 * 1024,
            concurrency_limit: 100,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();
        let host = env::var("APP_HOST").unwrap_or(defaults.host);
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(defaults.port);
        let seed_data = match env::var("APP_SEED_DATA") {
            Ok(value) => parse_flag(&value)?,
            Err(_) => defaults.seed_data,
        };
        let body_limit = env::var("APP_BODY_LIMIT")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(defaults.body_limit);
        let concurrency_limit = env::var("APP_CONCURRENCY_LIMIT")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(defaults.concurrency_limit);
        Ok(Self {
            host,
            port,
            seed_data,
            body_limit,
            concurrency_limit,
        })
    }
}

fn parse_flag(value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("APP_SEED_DATA must be a boolean, got {other:?}"),
    }
}

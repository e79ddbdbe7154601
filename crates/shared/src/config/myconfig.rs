use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub struct Config {
    /// When absent the service keeps transactions in memory.
    pub database_url: Option<String>,
    pub run_migrations: bool,
    pub port: u16,
    pub is_dev: bool,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        let run_migrations = match std::env::var("RUN_MIGRATIONS") {
            Ok(value) => parse_bool("RUN_MIGRATIONS", &value)?,
            Err(_) => false,
        };

        let port = std::env::var("PORT")
            .context("Missing env: PORT")?
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let is_dev = std::env::var("DEV_MODE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        Ok(Self {
            database_url,
            run_migrations,
            port,
            is_dev,
        })
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(anyhow!("{name} must be 'true' or 'false', got '{other}'")),
    }
}

use anyhow::{Context, Result};

const DEFAULT_RECENT_LIMIT: usize = 8;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Number of records served by the recent-activity view by default.
    pub recent_limit: usize,
    /// Optional path to a JSON roster file; the built-in roster applies when
    /// unset or unreadable.
    pub roster_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            recent_limit: match std::env::var("RECENT_LIMIT") {
                Ok(value) => value.parse().context("RECENT_LIMIT must be a number")?,
                Err(_) => DEFAULT_RECENT_LIMIT,
            },
            roster_path: std::env::var("ROSTER_PATH").ok(),
        })
    }
}

use anyhow::Context;
use std::path::PathBuf;

pub const HOST_VAR: &str = "EMPLOYEES_HOST";
pub const PORT_VAR: &str = "EMPLOYEES_PORT";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Reads the process environment, after loading `.env` if one exists.
    pub fn from_env() -> anyhow::Result<Self> {
        load_env_file(dotenvy::dotenv())?;
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let host = lookup(HOST_VAR).unwrap_or(defaults.host);
        let port = match lookup(PORT_VAR) {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("{PORT_VAR} must be a port number, got {raw:?}"))?,
            None => defaults.port,
        };
        Ok(Self { host, port })
    }
}

/// A missing `.env` is fine; one that exists but cannot be read or parsed is not.
fn load_env_file(loaded: Result<PathBuf, dotenvy::Error>) -> anyhow::Result<()> {
    match loaded {
        Err(err) if !err.not_found() => Err(err).context("failed to load .env"),
        _ => Ok(()),
    }
}

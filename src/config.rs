// Runtime configuration, read from environment variables the same way the
// API client used to pick up its gateway URL.

use crate::error::ConfigError;
use std::str::FromStr;
use std::time::Duration;

/// Public gist holding the sample catalog.
pub const DEFAULT_BOOKS_URL: &str = "https://gist.githubusercontent.com/samiksha-awachat/69c085f70040f80c0ed3229f08367ffe/raw/3d287fa1d778a21e2787930b807771270a83c1b2/books.json";

/// Characters of description shown before the truncation marker.
pub const DEFAULT_DESCRIPTION_WIDTH: usize = 60;

pub const ENV_URL: &str = "BOOKS_URL";
pub const ENV_OUTPUT: &str = "BOOKS_OUTPUT";
pub const ENV_DESCRIPTION_WIDTH: &str = "BOOKS_DESCRIPTION_WIDTH";
pub const ENV_TIMEOUT_SECS: &str = "BOOKS_TIMEOUT_SECS";

/// Which columns the result table shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Title and author.
    #[default]
    Plain,
    /// Title, author and a truncated description.
    Descriptive,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(OutputMode::Plain),
            "descriptive" => Ok(OutputMode::Descriptive),
            _ => Err("expected `plain` or `descriptive`".into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub url: String,
    pub output: OutputMode,
    pub description_width: usize,
    /// `None` lets a slow server block the request indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: DEFAULT_BOOKS_URL.into(),
            output: OutputMode::Plain,
            description_width: DEFAULT_DESCRIPTION_WIDTH,
            timeout: None,
        }
    }
}

impl Config {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup. Unset or blank keys
    /// fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Config::default();

        if let Some(url) = get(ENV_URL) {
            config.url = url.trim().to_string();
        }
        if let Some(raw) = get(ENV_OUTPUT) {
            config.output = parse(ENV_OUTPUT, &raw)?;
        }
        if let Some(raw) = get(ENV_DESCRIPTION_WIDTH) {
            config.description_width = parse(ENV_DESCRIPTION_WIDTH, &raw)?;
        }
        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            let secs: u64 = parse(ENV_TIMEOUT_SECS, &raw)?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }
}

fn parse<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

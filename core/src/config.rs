use std::path::PathBuf;
use std::str::FromStr;

use crate::error::TrackerError;

pub const ENV_PACKAGES: &str = "TRACKER_PACKAGES";
pub const ENV_OUTPUT: &str = "TRACKER_OUTPUT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(TrackerError::UnknownOutputFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// None → innebygde pakker
    pub packages_path: Option<PathBuf>,
    pub output: OutputFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, TrackerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Som `from_env`, men med valgfri oppslagsfunksjon (for tester).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, TrackerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let packages_path = lookup(ENV_PACKAGES)
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let output = match lookup(ENV_OUTPUT) {
            Some(s) => s.parse()?,
            None => OutputFormat::default(),
        };

        Ok(Self { packages_path, output })
    }
}

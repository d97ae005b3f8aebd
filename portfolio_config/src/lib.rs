use std::{
    fmt,
    net::IpAddr,
    path::{Path, PathBuf},
};

use anyhow::Context;
use config::{builder::DefaultState, ConfigBuilder, Environment, File, FileFormat};
use serde::Deserialize;
use url::Url;

pub use duration::Duration;

mod duration;

/// The built-in default configuration. Every other source is layered on top
/// of it.
pub const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

/// Colon separated list of additional config files.
pub const CONFIG_PATHS_ENV: &str = "PORTFOLIO_CONFIG";

/// Prefix of environment variables overriding single config values, e.g.
/// `PORTFOLIO__HTTP__PORT=8000`.
pub const ENV_PREFIX: &str = "PORTFOLIO";

/// Load the config from the default config, the files listed in
/// `PORTFOLIO_CONFIG` and `PORTFOLIO__*` environment variables, in this
/// order of precedence (lowest first).
pub fn load() -> anyhow::Result<Config> {
    let paths = std::env::var(CONFIG_PATHS_ENV)
        .map(|paths| split_paths(&paths))
        .unwrap_or_default();
    let paths = paths.iter().map(PathBuf::as_path).collect::<Vec<_>>();

    builder(&paths, &[])?
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

/// Load the config from the default config, the given files and the given
/// inline toml snippets. The environment is ignored.
pub fn load_with_override(paths: &[&Path], overrides: &[&str]) -> anyhow::Result<Config> {
    builder(paths, overrides)?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

fn builder(paths: &[&Path], overrides: &[&str]) -> anyhow::Result<ConfigBuilder<DefaultState>> {
    let builder = config::Config::builder()
        .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

    let builder = paths.iter().try_fold(builder, |builder, path| {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;
        anyhow::Ok(builder.add_source(File::from_str(&content, FileFormat::Toml)))
    })?;

    Ok(overrides.iter().fold(builder, |builder, &content| {
        builder.add_source(File::from_str(content, FileFormat::Toml))
    }))
}

fn split_paths(paths: &str) -> Vec<PathBuf> {
    paths
        .split(':')
        .filter(|x| !x.is_empty())
        .map(PathBuf::from)
        .collect()
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    pub sheets: SheetsConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
    pub real_ip: Option<HttpRealIpConfig>,
}

#[derive(Debug, Deserialize)]
pub struct HttpRealIpConfig {
    pub header: String,
    pub set_from: IpAddr,
}

#[derive(Debug, Default, Deserialize)]
pub struct ContactConfig {
    pub max_messages: Option<u64>,
}

#[derive(Deserialize)]
pub struct SheetsConfig {
    pub spreadsheet_id: Option<String>,
    pub api_key: Option<String>,
    pub range: String,
    pub timeout: Duration,
    pub endpoint_override: Option<Url>,
}

impl fmt::Debug for SheetsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SheetsConfig")
            .field("spreadsheet_id", &self.spreadsheet_id)
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("range", &self.range)
            .field("timeout", &self.timeout)
            .field("endpoint_override", &self.endpoint_override)
            .finish()
    }
}

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report.
    Text,
    /// One JSON document per evaluated hand.
    Json,
}

impl OutputFormat {
    fn parse(s: &str) -> Option<OutputFormat> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub format: OutputFormat,
    /// `rank` prints every hand instead of only the best one.
    pub show_all: bool,
    /// Suit glyphs instead of letters in text output.
    pub unicode: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub format: ValueSource,
    pub show_all: ValueSource,
    pub unicode: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            format: ValueSource::Default,
            show_all: ValueSource::Default,
            unicode: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_all: false,
            unicode: false,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub const CONFIG_ENV: &str = "HANDRANK_CONFIG";
pub const FORMAT_ENV: &str = "HANDRANK_FORMAT";
pub const SHOW_ALL_ENV: &str = "HANDRANK_SHOW_ALL";
pub const UNICODE_ENV: &str = "HANDRANK_UNICODE";

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Defaults, then the TOML file named by `HANDRANK_CONFIG`, then environment variables.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.format {
            cfg.format = v;
            sources.format = ValueSource::File;
        }
        if let Some(v) = f.show_all {
            cfg.show_all = v;
            sources.show_all = ValueSource::File;
        }
        if let Some(v) = f.unicode {
            cfg.unicode = v;
            sources.unicode = ValueSource::File;
        }
    }

    if let Ok(format) = std::env::var(FORMAT_ENV)
        && !format.is_empty()
    {
        cfg.format = OutputFormat::parse(&format)
            .ok_or_else(|| ConfigError::Invalid(format!("Invalid format: {}", format)))?;
        sources.format = ValueSource::Env;
    }
    if let Ok(all) = std::env::var(SHOW_ALL_ENV)
        && !all.is_empty()
    {
        cfg.show_all =
            parse_bool(&all).ok_or_else(|| ConfigError::Invalid("Invalid show_all".into()))?;
        sources.show_all = ValueSource::Env;
    }
    if let Ok(uni) = std::env::var(UNICODE_ENV)
        && !uni.is_empty()
    {
        cfg.unicode =
            parse_bool(&uni).ok_or_else(|| ConfigError::Invalid("Invalid unicode".into()))?;
        sources.unicode = ValueSource::Env;
    }

    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    format: Option<OutputFormat>,
    #[serde(default)]
    show_all: Option<bool>,
    #[serde(default)]
    unicode: Option<bool>,
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

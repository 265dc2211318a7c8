use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::cli::CliArgs;
use super::toml::FileConfig;
use super::{env, toml};
use crate::color::ColorChoice;
use crate::report::Format;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "sprint-select.toml";

/// Default bound on `(tasks + 1) * (capacity + 1)` (50 million cells).
pub const DEFAULT_MAX_CELLS: usize = 50_000_000;

/// sprint-select configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Capacity override; `None` uses the backlog's `targetStoryPoints`.
    pub capacity: Option<usize>,
    /// Largest optimizer table allowed, in cells.
    pub max_cells: usize,
    /// Report format.
    pub format: Format,
    /// When to color the text report.
    pub color: ColorChoice,
    /// Config file that was loaded, if any.
    pub source: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: None,
            max_cells: DEFAULT_MAX_CELLS,
            format: Format::Text,
            color: ColorChoice::Auto,
            source: None,
        }
    }
}

impl Config {
    /// Load configuration from all sources with proper precedence.
    ///
    /// Precedence: CLI args > env vars > config file > defaults.
    ///
    /// A file named with `--config` must exist; the default
    /// `sprint-select.toml` is only read when present.
    pub fn load(cli_args: &CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(ref path) = cli_args.config {
            config.apply_file(&toml::load_from_file(path)?);
            config.source = Some(path.clone());
        } else if Path::new(DEFAULT_CONFIG_FILE).exists() {
            config.apply_file(&toml::load_from_file(DEFAULT_CONFIG_FILE)?);
            config.source = Some(PathBuf::from(DEFAULT_CONFIG_FILE));
        }

        config.apply_env();
        config.apply_cli(cli_args);

        debug!(?config, "loaded configuration");
        Ok(config)
    }

    /// Load configuration from env vars and CLI args only.
    ///
    /// `init` uses this so a broken config file can still be replaced.
    pub fn load_without_file(cli_args: &CliArgs) -> Self {
        Self::without_file_from(cli_args, |key| std::env::var(key).ok())
    }

    pub(super) fn without_file_from<F>(cli_args: &CliArgs, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        env::apply_env_from(&mut config, lookup);
        config.apply_cli(cli_args);
        config
    }

    /// Parse TOML content into configuration.
    pub fn parse_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_file(&toml::parse_toml(content)?);
        Ok(config)
    }

    /// Apply values set in a config file.
    pub(super) fn apply_file(&mut self, file: &FileConfig) {
        if let Some(n) = file.planning.capacity {
            self.capacity = Some(n);
        }
        if let Some(n) = file.limits.max_cells {
            self.max_cells = n;
        }
        if let Some(format) = file.output.format {
            self.format = format;
        }
        if let Some(color) = file.output.color {
            self.color = color;
        }
    }

    /// Apply environment variables.
    fn apply_env(&mut self) {
        env::apply_env(self);
    }

    /// Apply CLI arguments.
    pub(super) fn apply_cli(&mut self, args: &CliArgs) {
        if let Some(n) = args.capacity {
            self.capacity = Some(n);
        }
        if let Some(n) = args.max_cells {
            self.max_cells = n;
        }
        if let Some(format) = args.format {
            self.format = format;
        }
        if let Some(color) = args.color {
            self.color = color;
        }
    }

    /// Generate default sprint-select.toml content.
    pub fn default_toml() -> String {
        format!(
            r#"# sprint-select configuration

[planning]
# Uncomment to ignore the backlog's targetStoryPoints.
# capacity = 20

[limits]
max_cells = {}  # largest (tasks + 1) * (capacity + 1) table

[output]
format = "{}"  # text or json
color = "{}"  # auto, always or never
"#,
            DEFAULT_MAX_CELLS,
            Format::Text.as_str(),
            ColorChoice::Auto.as_str(),
        )
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error reading config file.
    #[error("config I/O error: {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Parse error in config file.
    #[error("config parse error: {0}")]
    Parse(String),
}

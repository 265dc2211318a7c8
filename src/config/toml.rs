use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::types::ConfigError;
use crate::color::ColorChoice;
use crate::report::Format;

/// The subset of settings a config file may set. Unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct FileConfig {
    pub planning: PlanningSection,
    pub limits: LimitsSection,
    pub output: OutputSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct PlanningSection {
    pub capacity: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct LimitsSection {
    pub max_cells: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct OutputSection {
    #[serde(deserialize_with = "format_opt")]
    pub format: Option<Format>,
    #[serde(deserialize_with = "color_opt")]
    pub color: Option<ColorChoice>,
}

pub(super) fn load_from_file<P: AsRef<Path>>(path: P) -> Result<FileConfig, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_toml(&content)
}

pub(super) fn parse_toml(content: &str) -> Result<FileConfig, ConfigError> {
    ::toml::from_str(content).map_err(|e| ConfigError::Parse(e.message().to_string()))
}

fn format_opt<'de, D: Deserializer<'de>>(de: D) -> Result<Option<Format>, D::Error> {
    let value = String::deserialize(de)?;
    Format::parse(&value)
        .map(Some)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid output.format: {}", value)))
}

fn color_opt<'de, D: Deserializer<'de>>(de: D) -> Result<Option<ColorChoice>, D::Error> {
    let value = String::deserialize(de)?;
    ColorChoice::parse(&value)
        .map(Some)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid output.color: {}", value)))
}

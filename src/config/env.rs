use tracing::warn;

use super::types::Config;
use crate::color::ColorChoice;
use crate::report::Format;

pub(super) fn apply_env(config: &mut Config) {
    apply_env_from(config, |key| std::env::var(key).ok());
}

/// Apply environment settings read through `lookup`.
///
/// Unparseable values are skipped with a warning.
pub(super) fn apply_env_from<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup("SPRINT_SELECT_CAPACITY") {
        match val.trim().parse() {
            Ok(n) => config.capacity = Some(n),
            Err(_) => warn!(value = %val, "ignoring invalid SPRINT_SELECT_CAPACITY"),
        }
    }
    if let Some(val) = lookup("SPRINT_SELECT_MAX_CELLS") {
        match val.trim().parse() {
            Ok(n) => config.max_cells = n,
            Err(_) => warn!(value = %val, "ignoring invalid SPRINT_SELECT_MAX_CELLS"),
        }
    }
    if let Some(val) = lookup("SPRINT_SELECT_FORMAT") {
        match Format::parse(val.trim()) {
            Some(format) => config.format = format,
            None => warn!(value = %val, "ignoring invalid SPRINT_SELECT_FORMAT"),
        }
    }
    // https://no-color.org: presence disables color, whatever the value.
    if lookup("NO_COLOR").is_some() {
        config.color = ColorChoice::Never;
    }
    if let Some(val) = lookup("SPRINT_SELECT_COLOR") {
        match ColorChoice::parse(val.trim()) {
            Some(color) => config.color = color,
            None => warn!(value = %val, "ignoring invalid SPRINT_SELECT_COLOR"),
        }
    }
}

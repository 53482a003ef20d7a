//! Support for library configuration options
//!
//! The timezone rule is process-wide: it is loaded once (usually at startup) and never changes afterwards.

use std::path::Path;

use once_cell::sync::OnceCell;
use serde::Deserialize;

use crate::error::{EventError, EventResult};
use crate::timezone::{TimezoneRule, DEFAULT_TIMEZONE};

static TIMEZONE_RULE: OnceCell<TimezoneRule> = OnceCell::new();

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

/// Settings, usually read from a `settings.toml` file
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// IANA name of the zone that submitted dates and times are expressed in
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self { timezone: default_timezone() }
    }
}

impl Settings {
    pub fn from_toml_str(content: &str) -> EventResult<Self> {
        toml::from_str(content).map_err(|err| EventError::Config(err.to_string()))
    }

    pub fn from_file(path: &Path) -> EventResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|err| EventError::Config(format!("Unable to read {:?}: {}", path, err)))?;
        Self::from_toml_str(&content)
    }

    pub fn timezone_rule(&self) -> EventResult<TimezoneRule> {
        TimezoneRule::from_name(&self.timezone)
    }
}

/// Load the process-wide timezone rule.
///
/// Calling this again with the same zone is a no-op. Trying to switch to another zone is an error.
pub fn init(settings: &Settings) -> EventResult<TimezoneRule> {
    let wanted = settings.timezone_rule()?;
    let loaded = *TIMEZONE_RULE.get_or_init(|| {
        log::info!("Using timezone {}", wanted);
        wanted
    });

    if loaded != wanted {
        return Err(EventError::Config(format!(
            "Timezone is already set to {}, cannot switch to {}", loaded, wanted
        )));
    }
    Ok(loaded)
}

pub(crate) fn loaded_timezone_rule() -> Option<TimezoneRule> {
    TIMEZONE_RULE.get().copied()
}

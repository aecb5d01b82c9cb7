//! User preferences stored as a JSON sidecar in the config directory.
//!
//! A missing, unreadable or corrupt file is never fatal: the defaults are
//! used and a warning is logged.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Greek
    #[default]
    El,
    En,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub theme: ThemeName,
    pub language: Language,
    pub window_size: [u32; 2],
    pub window_position: [i32; 2],
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: ThemeName::Light,
            language: Language::El,
            window_size: [1400, 900],
            window_position: [100, 100],
        }
    }
}

/// Keys accepted by `fleet prefs set`.
pub const PREFERENCE_KEYS: [&str; 4] = ["theme", "language", "window_size", "window_position"];

impl Preferences {
    /// Load preferences, falling back to defaults on any problem.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "no preferences file; using defaults");
            return Self::default();
        }
        let parsed = std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|contents| serde_json::from_str(&contents).map_err(|e| e.to_string()));
        match parsed {
            Ok(prefs) => prefs,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "ignoring unreadable preferences");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                anyhow::anyhow!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                )
            })?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)
            .map_err(|e| anyhow::anyhow!("Failed to write preferences {}: {}", path.display(), e))
    }

    /// Set one preference from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "theme" => self.theme = value.parse()?,
            "language" => self.language = value.parse()?,
            "window_size" => {
                let (w, h) = parse_pair::<u32>(value, 'x')?;
                self.window_size = [w, h];
            }
            "window_position" => {
                let (x, y) = parse_pair::<i32>(value, ',')?;
                self.window_position = [x, y];
            }
            other => {
                return Err(CliError::invalid_input(format!(
                    "Unknown preference '{}'. Use: {}",
                    other,
                    PREFERENCE_KEYS.join(", ")
                ))
                .into())
            }
        }
        Ok(())
    }

    /// Key/value pairs in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("theme", self.theme.to_string()),
            ("language", self.language.to_string()),
            (
                "window_size",
                format!("{}x{}", self.window_size[0], self.window_size[1]),
            ),
            (
                "window_position",
                format!("{},{}", self.window_position[0], self.window_position[1]),
            ),
        ]
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
        })
    }
}

impl FromStr for ThemeName {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ThemeName::Light),
            "dark" => Ok(ThemeName::Dark),
            other => Err(CliError::invalid_input(format!(
                "Unknown theme '{}'. Use: light, dark",
                other
            ))),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Language::El => "el",
            Language::En => "en",
        })
    }
}

impl FromStr for Language {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "el" => Ok(Language::El),
            "en" => Ok(Language::En),
            other => Err(CliError::invalid_input(format!(
                "Unknown language '{}'. Use: el, en",
                other
            ))),
        }
    }
}

fn parse_pair<T: FromStr>(value: &str, separator: char) -> anyhow::Result<(T, T)> {
    let invalid = || {
        CliError::invalid_input(format!(
            "Invalid value '{}' (expected <a>{}<b>)",
            value, separator
        ))
    };
    let (a, b) = value.split_once(separator).ok_or_else(invalid)?;
    let a = a.trim().parse::<T>().map_err(|_| invalid())?;
    let b = b.trim().parse::<T>().map_err(|_| invalid())?;
    Ok((a, b))
}

//! User preferences, persisted as one JSON object.
//!
//! Settings are loaded once by the host and passed explicitly to the parts
//! that need them ([`Entry::compose`](crate::Entry::compose),
//! [`Journal`](crate::Journal)).

use crate::{HydError, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;

pub const MIN_FONT_SIZE: u8 = 10;
pub const MAX_FONT_SIZE: u8 = 28;
const FONT_SIZE_STEP: u8 = 2;

/// Colour scheme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    System,
    Light,
    Dark,
}

/// What a swipe on a list row does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeAction {
    Delete,
    Restore,
    Export,
    Preview,
}

/// The four configurable swipe gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Swipe {
    LeftShort,
    LeftLong,
    RightShort,
    RightLong,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SwipeBindings {
    pub left_short: SwipeAction,
    pub left_long: SwipeAction,
    pub right_short: SwipeAction,
    pub right_long: SwipeAction,
}

impl Default for SwipeBindings {
    fn default() -> Self {
        Self {
            left_short: SwipeAction::Delete,
            left_long: SwipeAction::Restore,
            right_short: SwipeAction::Export,
            right_long: SwipeAction::Preview,
        }
    }
}

impl SwipeBindings {
    pub fn action(&self, swipe: Swipe) -> SwipeAction {
        match swipe {
            Swipe::LeftShort => self.left_short,
            Swipe::LeftLong => self.left_long,
            Swipe::RightShort => self.right_short,
            Swipe::RightLong => self.right_long,
        }
    }

    fn slot_mut(&mut self, swipe: Swipe) -> &mut SwipeAction {
        match swipe {
            Swipe::LeftShort => &mut self.left_short,
            Swipe::LeftLong => &mut self.left_long,
            Swipe::RightShort => &mut self.right_short,
            Swipe::RightLong => &mut self.right_long,
        }
    }
}

/// Persisted application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub theme: Theme,
    /// Author written when an entry leaves its author blank.
    pub default_author: String,
    /// Comma-separated tags used when an entry leaves its tags blank.
    pub default_tags: String,
    pub font_size: u8,
    pub show_accessibility_labels: bool,
    pub swipe: SwipeBindings,
    pub biometric_lock: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::System,
            default_author: String::new(),
            default_tags: String::new(),
            font_size: 14,
            show_accessibility_labels: false,
            swipe: SwipeBindings::default(),
            biometric_lock: false,
        }
    }
}

/// Keys accepted by [`Settings::set`], in display order.
pub const SETTING_KEYS: &[&str] = &[
    "theme",
    "default-author",
    "default-tags",
    "font-size",
    "show-accessibility-labels",
    "swipe.left-short",
    "swipe.left-long",
    "swipe.right-short",
    "swipe.right-long",
    "biometric-lock",
];

impl Settings {
    /// Loads settings from `path`.
    ///
    /// A missing file yields defaults. An unreadable or corrupt file also
    /// yields defaults and is logged; it is not overwritten until the next [`save`](Self::save).
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<Settings>(&content) {
                Ok(settings) => settings.clamped(),
                Err(e) => {
                    warn!("ignoring unreadable settings at {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => Self::default(),
            Err(e) => {
                warn!("cannot read settings at {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Saves settings to `path`, creating parent directories as needed.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Applies one `key = value` pair. Keys are listed in [`SETTING_KEYS`].
    ///
    /// # Errors
    ///
    /// Returns [`HydError::InvalidSetting`] for an unknown key or a value that
    /// does not parse for that key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "theme" => self.theme = value.parse()?,
            "default-author" => self.default_author = value.trim().to_string(),
            "default-tags" => self.default_tags = value.trim().to_string(),
            "font-size" => self.font_size = parse_font_size(value)?,
            "show-accessibility-labels" => self.show_accessibility_labels = parse_bool(key, value)?,
            "biometric-lock" => self.biometric_lock = parse_bool(key, value)?,
            _ => {
                let swipe = key
                    .strip_prefix("swipe.")
                    .and_then(|s| s.parse::<Swipe>().ok())
                    .ok_or_else(|| HydError::InvalidSetting(format!("Unknown setting: {key}")))?;
                *self.swipe.slot_mut(swipe) = value.parse()?;
            }
        }
        Ok(())
    }

    /// Returns the value of one key, formatted the way [`set`](Self::set) accepts it.
    pub fn get(&self, key: &str) -> Result<String> {
        let value = match key {
            "theme" => self.theme.to_string(),
            "default-author" => self.default_author.clone(),
            "default-tags" => self.default_tags.clone(),
            "font-size" => self.font_size.to_string(),
            "show-accessibility-labels" => self.show_accessibility_labels.to_string(),
            "biometric-lock" => self.biometric_lock.to_string(),
            _ => {
                let swipe = key
                    .strip_prefix("swipe.")
                    .and_then(|s| s.parse::<Swipe>().ok())
                    .ok_or_else(|| HydError::InvalidSetting(format!("Unknown setting: {key}")))?;
                self.swipe.action(swipe).to_string()
            }
        };
        Ok(value)
    }

    fn clamped(mut self) -> Self {
        self.font_size = snap_font_size(self.font_size);
        self
    }
}

fn snap_font_size(size: u8) -> u8 {
    let size = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    size - (size - MIN_FONT_SIZE) % FONT_SIZE_STEP
}

fn parse_font_size(value: &str) -> Result<u8> {
    let size: u8 = value
        .trim()
        .parse()
        .map_err(|_| HydError::InvalidSetting(format!("Font size must be a number: {value}")))?;
    if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&size) || (size - MIN_FONT_SIZE) % FONT_SIZE_STEP != 0 {
        return Err(HydError::InvalidSetting(format!(
            "Font size must be an even number from {MIN_FONT_SIZE} to {MAX_FONT_SIZE}"
        )));
    }
    Ok(size)
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(HydError::InvalidSetting(format!("{key} expects true or false, got {value}"))),
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Theme::System => "system",
            Theme::Light => "light",
            Theme::Dark => "dark",
        })
    }
}

impl FromStr for Theme {
    type Err = HydError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "system" => Ok(Theme::System),
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(HydError::InvalidSetting(format!("Unknown theme: {other}"))),
        }
    }
}

impl fmt::Display for SwipeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SwipeAction::Delete => "delete",
            SwipeAction::Restore => "restore",
            SwipeAction::Export => "export",
            SwipeAction::Preview => "preview",
        })
    }
}

impl FromStr for SwipeAction {
    type Err = HydError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "delete" => Ok(SwipeAction::Delete),
            "restore" => Ok(SwipeAction::Restore),
            "export" => Ok(SwipeAction::Export),
            "preview" => Ok(SwipeAction::Preview),
            other => Err(HydError::InvalidSetting(format!("Unknown swipe action: {other}"))),
        }
    }
}

impl FromStr for Swipe {
    type Err = HydError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "left-short" => Ok(Swipe::LeftShort),
            "left-long" => Ok(Swipe::LeftLong),
            "right-short" => Ok(Swipe::RightShort),
            "right-long" => Ok(Swipe::RightLong),
            other => Err(HydError::InvalidSetting(format!("Unknown swipe: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.theme, Theme::System);
        assert_eq!(s.font_size, 14);
        assert_eq!(s.swipe.action(Swipe::LeftShort), SwipeAction::Delete);
        assert_eq!(s.swipe.action(Swipe::LeftLong), SwipeAction::Restore);
        assert_eq!(s.swipe.action(Swipe::RightShort), SwipeAction::Export);
        assert_eq!(s.swipe.action(Swipe::RightLong), SwipeAction::Preview);
        assert!(!s.biometric_lock);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        assert_eq!(Settings::load(dir.path().join("none.json")), Settings::default());
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(Settings::load(&path), Settings::default());
    }

    #[test]
    fn test_unreadable_path_gives_defaults() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("settings.json")).unwrap();
        assert_eq!(Settings::load(dir.path().join("settings.json")), Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hyd").join("settings.json");
        let mut s = Settings::default();
        s.set("theme", "dark").unwrap();
        s.set("default-author", " Mat ").unwrap();
        s.set("swipe.right-long", "delete").unwrap();
        s.save(&path).unwrap();

        let loaded = Settings::load(&path);
        assert_eq!(loaded, s);
        assert_eq!(loaded.default_author, "Mat");
        assert_eq!(loaded.swipe.right_long, SwipeAction::Delete);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"defaultTags":"rust, notes","fontSize":13}"#).unwrap();
        let s = Settings::load(&path);
        assert_eq!(s.default_tags, "rust, notes");
        assert_eq!(s.font_size, 12);
        assert_eq!(s.theme, Theme::System);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut s = Settings::default();
        assert!(s.set("theme", "sepia").is_err());
        assert!(s.set("font-size", "11").is_err());
        assert!(s.set("font-size", "30").is_err());
        assert!(s.set("swipe.up", "delete").is_err());
        assert!(s.set("swipe.left-short", "archive").is_err());
        assert!(s.set("biometric-lock", "maybe").is_err());
        assert!(s.set("colour", "red").is_err());
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn test_get_matches_set() {
        let mut s = Settings::default();
        for key in SETTING_KEYS {
            let value = s.get(key).unwrap();
            s.set(key, &value).unwrap();
        }
        assert_eq!(s, Settings::default());
        s.set("font-size", "20").unwrap();
        assert_eq!(s.get("font-size").unwrap(), "20");
    }

    #[test]
    fn test_snap_font_size() {
        assert_eq!(snap_font_size(4), 10);
        assert_eq!(snap_font_size(15), 14);
        assert_eq!(snap_font_size(99), 28);
    }
}

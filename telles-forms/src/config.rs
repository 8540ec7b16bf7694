//! Page configuration.
//!
//! The server template renders a JSON object into the mount element's
//! `data-config` attribute. Every key is optional:
//!
//! ```json
//! {
//!   "department_options": ["情報システム科", "IT"],
//!   "course_years_options": ["2", "3"],
//!   "login_url": "/login/",
//!   "countdown_seconds": 5
//! }
//! ```
//!
//! `countdown_seconds` may also be the text the template printed, e.g.
//! `"5秒"`; its leading digits are used.

use crate::clock::ClockStyle;
use crate::countdown;
use crate::snapshot::DEFAULT_SNAPSHOT_KEY;
use anyhow::Context;
use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_ATTENDANCE_FORM_PATH: &str = "/attendance_form/";
pub const DEFAULT_COUNTDOWN_SECONDS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Where the calendar's confirm button sends the picked date.
    pub attendance_form_path: String,
    /// Session storage key for row snapshots.
    pub snapshot_key: String,
    /// Show the save/restore buttons under the rows.
    pub snapshot_controls: bool,
    pub clock_style: ClockStyle,
    pub department_options: Vec<String>,
    pub course_years_options: Vec<String>,
    /// Countdown redirect target.
    pub login_url: Option<String>,
    #[serde(deserialize_with = "seconds_from_number_or_text")]
    pub countdown_seconds: u32,
    /// Logout link target; the link is hidden when unset.
    pub logout_url: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSeconds {
    Number(u32),
    Text(String),
}

fn seconds_from_number_or_text<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawSeconds::deserialize(deserializer)? {
        RawSeconds::Number(n) => n,
        RawSeconds::Text(text) => countdown::parse_seconds(&text).unwrap_or_else(|| {
            log::warn!("countdown_seconds {text:?} has no leading digits; using {DEFAULT_COUNTDOWN_SECONDS}");
            DEFAULT_COUNTDOWN_SECONDS
        }),
    })
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            attendance_form_path: DEFAULT_ATTENDANCE_FORM_PATH.to_string(),
            snapshot_key: DEFAULT_SNAPSHOT_KEY.to_string(),
            snapshot_controls: false,
            clock_style: ClockStyle::default(),
            department_options: Vec::new(),
            course_years_options: Vec::new(),
            login_url: None,
            countdown_seconds: DEFAULT_COUNTDOWN_SECONDS,
            logout_url: None,
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("invalid page config")
    }

    /// Parse the attribute if present; fall back to defaults otherwise.
    pub fn from_attribute(raw: Option<&str>) -> Self {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => Self::from_json(raw).unwrap_or_else(|e| {
                log::warn!("{e:#}; using defaults");
                Self::default()
            }),
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_attribute_missing() {
        let config = PageConfig::from_attribute(None);
        assert_eq!(config, PageConfig::default());
        assert_eq!(config.attendance_form_path, "/attendance_form/");
        assert_eq!(config.snapshot_key, "signupForm");
        assert_eq!(config.countdown_seconds, 5);
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let config = PageConfig::from_attribute(Some(
            r#"{"login_url":"/login/","clock_style":"japanese","snapshot_controls":true}"#,
        ));
        assert!(config.snapshot_controls);
        assert_eq!(config.login_url.as_deref(), Some("/login/"));
        assert_eq!(config.clock_style, ClockStyle::Japanese);
        assert_eq!(config.attendance_form_path, "/attendance_form/");
        assert!(config.department_options.is_empty());
    }

    #[test]
    fn test_malformed_json_falls_back() {
        assert!(PageConfig::from_json("{").is_err());
        assert_eq!(PageConfig::from_attribute(Some("{")), PageConfig::default());
        assert_eq!(PageConfig::from_attribute(Some("  ")), PageConfig::default());
    }

    #[test]
    fn test_countdown_seconds_from_text() {
        let config = PageConfig::from_attribute(Some(r#"{"countdown_seconds":"10秒"}"#));
        assert_eq!(config.countdown_seconds, 10);
        let config = PageConfig::from_attribute(Some(r#"{"countdown_seconds":"すぐ"}"#));
        assert_eq!(config.countdown_seconds, DEFAULT_COUNTDOWN_SECONDS);
        let config = PageConfig::from_attribute(Some(r#"{"countdown_seconds":3}"#));
        assert_eq!(config.countdown_seconds, 3);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config = PageConfig::from_attribute(Some(r#"{"variant":"password_reset"}"#));
        assert_eq!(config, PageConfig::default());
    }
}

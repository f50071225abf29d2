//! # Club configuration: `club.toml`
//!
//! Tunables for the front-end. The web crate embeds a `club.toml` next to its
//! manifest and parses it at start-up.
//!
//! ## Structure
//!
//! ```toml
//! [club]
//! name = "نادي اللياقة الرياضية"
//! name_en = "Fitness Sports Club"
//!
//! [auth]
//! login_delay_ms = 1000        # simulated sign-in latency
//!
//! [notifications]
//! toast_duration_ms = 4000
//!
//! [sessions]
//! max_capacity = 10            # upper bound for "max students"
//!
//! [students]
//! min_age = 5
//! max_age = 80
//!
//! [attendance]
//! stats_window_days = 30
//! recent_count = 4
//! ```
//!
//! Every section and field has a default, so a missing or partial file is
//! equivalent to the defaults shown above. Values the app cannot work with
//! are replaced by [`ClubConfig::validate`], which logs a warning for each.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::i18n::Lang;

/// Top-level configuration stored in `club.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClubConfig {
    #[serde(default)]
    pub club: ClubInfo,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub sessions: SessionConfig,
    #[serde(default)]
    pub students: StudentConfig,
    #[serde(default)]
    pub attendance: AttendanceConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClubInfo {
    #[serde(default = "default_club_name")]
    pub name: String,
    #[serde(default = "default_club_name_en")]
    pub name_en: String,
}

fn default_club_name() -> String {
    "نادي اللياقة الرياضية".to_string()
}

fn default_club_name_en() -> String {
    "Fitness Sports Club".to_string()
}

impl Default for ClubInfo {
    fn default() -> Self {
        Self {
            name: default_club_name(),
            name_en: default_club_name_en(),
        }
    }
}

impl ClubInfo {
    pub fn display_name(&self, lang: Lang) -> &str {
        match lang {
            Lang::Ar => &self.name,
            Lang::En => &self.name_en,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Simulated sign-in latency in milliseconds.
    #[serde(default = "default_login_delay")]
    pub login_delay_ms: u64,
}

fn default_login_delay() -> u64 {
    1000
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: default_login_delay(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_toast_duration")]
    pub toast_duration_ms: u64,
}

fn default_toast_duration() -> u64 {
    4000
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: default_toast_duration(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_max_capacity")]
    pub max_capacity: u32,
}

fn default_max_capacity() -> u32 {
    10
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_capacity: default_max_capacity(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentConfig {
    #[serde(default = "default_min_age")]
    pub min_age: u8,
    #[serde(default = "default_max_age")]
    pub max_age: u8,
}

fn default_min_age() -> u8 {
    5
}

fn default_max_age() -> u8 {
    80
}

impl Default for StudentConfig {
    fn default() -> Self {
        Self {
            min_age: default_min_age(),
            max_age: default_max_age(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttendanceConfig {
    #[serde(default = "default_stats_window")]
    pub stats_window_days: u32,
    #[serde(default = "default_recent_count")]
    pub recent_count: usize,
}

/// Longest statistics window accepted, in days.
pub const MAX_STATS_WINDOW_DAYS: u32 = 3650;

fn default_stats_window() -> u32 {
    30
}

fn default_recent_count() -> usize {
    4
}

impl Default for AttendanceConfig {
    fn default() -> Self {
        Self {
            stats_window_days: default_stats_window(),
            recent_count: default_recent_count(),
        }
    }
}

impl ClubConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "club.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Parse and validate, falling back to defaults (with a warning) on
    /// invalid input.
    pub fn from_toml_or_default(s: &str) -> Self {
        Self::from_toml(s)
            .unwrap_or_else(|e| {
                tracing::warn!("{} is invalid, using defaults: {e}", Self::filename());
                Self::default()
            })
            .validate()
    }

    /// Replace out-of-range values with their defaults or bounds.
    pub fn validate(mut self) -> Self {
        if self.sessions.max_capacity == 0 {
            tracing::warn!("sessions.max_capacity is 0, using {}", default_max_capacity());
            self.sessions.max_capacity = default_max_capacity();
        }
        if self.students.min_age > self.students.max_age {
            tracing::warn!(
                min_age = self.students.min_age,
                max_age = self.students.max_age,
                "students age range is empty, using defaults"
            );
            self.students = StudentConfig::default();
        }
        let window = self.attendance.stats_window_days;
        if window == 0 {
            tracing::warn!("attendance.stats_window_days is 0, using {}", default_stats_window());
            self.attendance.stats_window_days = default_stats_window();
        } else if window > MAX_STATS_WINDOW_DAYS {
            tracing::warn!("attendance.stats_window_days {window} capped at {MAX_STATS_WINDOW_DAYS}");
            self.attendance.stats_window_days = MAX_STATS_WINDOW_DAYS;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ClubConfig::from_toml("").unwrap();
        assert_eq!(config, ClubConfig::default());
        assert_eq!(config.auth.login_delay_ms, 1000);
        assert_eq!(config.sessions.max_capacity, 10);
        assert_eq!(config.attendance.stats_window_days, 30);
        assert_eq!(config.attendance.recent_count, 4);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = ClubConfig::from_toml("[students]\nmax_age = 18\n").unwrap();
        assert_eq!(config.students.max_age, 18);
        assert_eq!(config.students.min_age, 5);
        assert_eq!(config.notifications.toast_duration_ms, 4000);
    }

    #[test]
    fn test_roundtrip() {
        let mut config = ClubConfig::default();
        config.club.name_en = "Riverside Club".to_string();
        config.auth.login_delay_ms = 0;
        let text = config.to_toml().unwrap();
        assert_eq!(ClubConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_falls_back() {
        assert!(ClubConfig::from_toml("[auth]\nlogin_delay_ms = \"soon\"").is_err());
        let config = ClubConfig::from_toml_or_default("[auth]\nlogin_delay_ms = \"soon\"");
        assert_eq!(config, ClubConfig::default());
    }

    #[test]
    fn test_out_of_range_values_are_replaced() {
        let text = "[sessions]\nmax_capacity = 0\n\n[students]\nmin_age = 30\nmax_age = 10\n\n[attendance]\nstats_window_days = 4000000000\n";
        let config = ClubConfig::from_toml_or_default(text);
        assert_eq!(config.sessions.max_capacity, 10);
        assert_eq!(config.students, StudentConfig::default());
        assert_eq!(config.attendance.stats_window_days, MAX_STATS_WINDOW_DAYS);

        let config = ClubConfig::from_toml_or_default("[attendance]\nstats_window_days = 0\n");
        assert_eq!(config.attendance.stats_window_days, 30);
    }

    #[test]
    fn test_valid_values_are_kept() {
        let mut config = ClubConfig::default();
        config.sessions.max_capacity = 1;
        config.students.min_age = 12;
        config.students.max_age = 12;
        config.attendance.stats_window_days = MAX_STATS_WINDOW_DAYS;
        assert_eq!(config.clone().validate(), config);
    }

    #[test]
    fn test_display_name_by_language() {
        let info = ClubInfo::default();
        assert_eq!(info.display_name(Lang::Ar), "نادي اللياقة الرياضية");
        assert_eq!(info.display_name(Lang::En), "Fitness Sports Club");
    }
}

use chrono::NaiveDate;
use common::params::{default_start_date, DATE_FORMAT};
use log::Level;
use wasm_bindgen::JsValue;
use web_sys::window;

const STORAGE_API_BASE: &str = "covid_dashboard_api_base";
const STORAGE_LOG_LEVEL: &str = "covid_dashboard_log_level";
const STORAGE_START_DATE: &str = "covid_dashboard_start_date";

/// Global application settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Prefix for the simulation and tuning endpoints (e.g. "https://sim.example.com").
    /// Empty means same origin as the page.
    pub api_base: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Start date proposed by the tuning form
    pub default_start_date: NaiveDate,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            log_level: Level::Info,
            debug_mode: false,
            default_start_date: default_start_date(),
        }
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            for key in [STORAGE_API_BASE, STORAGE_LOG_LEVEL, STORAGE_START_DATE] {
                if let Ok(Some(value)) = storage.get_item(key) {
                    settings.apply_stored(key, &value);
                }
            }
        }

        settings
    }

    /// Applies one localStorage override; unparsable values are ignored.
    fn apply_stored(&mut self, key: &str, value: &str) {
        match key {
            STORAGE_API_BASE => self.api_base = value.to_string(),
            STORAGE_LOG_LEVEL => {
                if let Some(level) = parse_log_level(value) {
                    self.log_level = level;
                }
            }
            STORAGE_START_DATE => {
                if let Ok(date) = NaiveDate::parse_from_str(value.trim(), DATE_FORMAT) {
                    self.default_start_date = date;
                }
            }
            _ => {}
        }
    }

    fn storage_entries(&self) -> [(&'static str, String); 3] {
        [
            (STORAGE_API_BASE, self.api_base.clone()),
            (STORAGE_LOG_LEVEL, self.log_level.as_str().to_lowercase()),
            (
                STORAGE_START_DATE,
                self.default_start_date.format(DATE_FORMAT).to_string(),
            ),
        ]
    }

    /// Save settings to localStorage
    pub fn save_to_storage(&self) -> Result<(), JsValue> {
        if let Some(window) = window() {
            if let Some(storage) = window.local_storage()? {
                for (key, value) in self.storage_entries() {
                    storage.set_item(key, &value)?;
                }
            }
        }
        Ok(())
    }

    /// Base URL without a trailing slash
    pub fn api_base_url(&self) -> String {
        self.api_base.trim_end_matches('/').to_string()
    }

    /// Get the full URL for an endpoint path
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url(), path)
    }
}

fn parse_log_level(value: &str) -> Option<Level> {
    value.trim().parse::<Level>().ok()
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::from_environment());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Update the global settings
pub fn update_settings<F>(f: F)
where
    F: FnOnce(&mut AppSettings),
{
    SETTINGS.with(|s| {
        let mut settings = s.borrow_mut();
        f(&mut settings);
    });
}

/// Makes `date` the start date proposed by the next Tune form, in this
/// session and across reloads.
pub fn remember_start_date(date: NaiveDate) {
    update_settings(|s| s.default_start_date = date);
    if let Err(err) = get_settings().save_to_storage() {
        log::warn!("Could not save settings: {:?}", err);
    }
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_origin_by_default() {
        let settings = AppSettings::default();
        assert_eq!(settings.api_url("/simulation"), "/simulation");
        assert_eq!(settings.default_start_date.to_string(), "2020-04-05");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let settings = AppSettings {
            api_base: "https://sim.example.com/".to_string(),
            ..AppSettings::default()
        };
        assert_eq!(settings.api_url("/tuning"), "https://sim.example.com/tuning");
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("debug"), Some(Level::Debug));
        assert_eq!(parse_log_level(" WARN "), Some(Level::Warn));
        assert_eq!(parse_log_level("loud"), None);
    }

    #[test]
    fn test_stored_entries_restore_settings() {
        let saved = AppSettings {
            api_base: "https://sim.example.com".to_string(),
            log_level: Level::Warn,
            debug_mode: true,
            default_start_date: NaiveDate::from_ymd_opt(2020, 6, 1).unwrap(),
        };

        let mut restored = AppSettings::default();
        for (key, value) in saved.storage_entries() {
            restored.apply_stored(key, &value);
        }

        assert_eq!(restored.api_base, saved.api_base);
        assert_eq!(restored.log_level, Level::Warn);
        assert_eq!(restored.default_start_date, saved.default_start_date);
        assert!(!restored.debug_mode);
    }

    #[test]
    fn test_unparsable_stored_values_are_ignored() {
        let mut settings = AppSettings::default();
        settings.apply_stored(STORAGE_START_DATE, "05/04/2020");
        settings.apply_stored(STORAGE_LOG_LEVEL, "loud");
        settings.apply_stored("unrelated_key", "value");
        assert_eq!(settings, AppSettings::default());
    }
}

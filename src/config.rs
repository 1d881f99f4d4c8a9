//! App Configuration
//!
//! Defaults, optionally overridden from the page URL query string
//! (`?log=debug&color=%23f5f5dc`).

use log::LevelFilter;
use url::form_urlencoded;

use crate::models::DEFAULT_COLOR;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Page heading
    pub title: String,
    /// Color given to newly added items
    pub default_color: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "My Travel List".to_string(),
            default_color: DEFAULT_COLOR.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Read overrides from `window.location.search`
    pub fn from_location() -> Self {
        web_sys::window()
            .and_then(|window| window.location().search().ok())
            .map(|query| Self::from_query(&query))
            .unwrap_or_default()
    }

    /// Parse a query string with or without the leading `?`.
    /// Unknown keys and bad values are ignored.
    pub fn from_query(query: &str) -> Self {
        let mut config = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "log" => match value.parse::<LevelFilter>() {
                    Ok(level) => config.log_level = level,
                    Err(_) => log::debug!("[CONFIG] Ignoring log level {:?}", value),
                },
                "color" => {
                    if is_hex_color(&value) {
                        config.default_color = value.to_lowercase();
                    } else {
                        log::debug!("[CONFIG] Ignoring color {:?}", value);
                    }
                }
                "title" => {
                    let title = value.trim();
                    if title.is_empty() {
                        log::debug!("[CONFIG] Ignoring empty title");
                    } else {
                        config.title = title.to_string();
                    }
                }
                _ => log::debug!("[CONFIG] Ignoring unknown key {:?}", key),
            }
        }
        config
    }
}

/// `#rgb` or `#rrggbb`
fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_query("");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.title, "My Travel List");
        assert_eq!(config.default_color, "#ffffff");
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_query("?log=debug&color=%23F5F5DC&title=Summer+Trip");
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.default_color, "#f5f5dc");
        assert_eq!(config.title, "Summer Trip");
    }

    #[test]
    fn test_encoded_plus_survives_decoding() {
        let config = AppConfig::from_query("?title=C%2B%2B+Trip");
        assert_eq!(config.title, "C++ Trip");
    }

    #[test]
    fn test_invalid_utf8_is_replaced_not_dropped() {
        let config = AppConfig::from_query("title=Caf%FF&log=warn");
        assert_eq!(config.title, "Caf\u{FFFD}");
        assert_eq!(config.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = AppConfig::from_query("log=loud&color=red&title=&unknown=1&flag");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_hex_color() {
        assert!(is_hex_color("#fff"));
        assert!(is_hex_color("#A0b1C2"));
        assert!(!is_hex_color("fff"));
        assert!(!is_hex_color("#ffff"));
        assert!(!is_hex_color("#ggg"));
    }
}

//! Application Configuration
//!
//! Resolved at build time; the browser bundle has no runtime config file.

use log::LevelFilter;

pub const DEFAULT_API_URL: &str = "http://localhost:3000/feedback";
pub const DEFAULT_SUCCESS_NOTICE_MS: u32 = 3_000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Collection endpoint used for both listing and creating feedback
    pub api_url: String,
    /// How long the form's success notice stays visible
    pub success_notice_ms: u32,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            success_notice_ms: DEFAULT_SUCCESS_NOTICE_MS,
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Read `FEEDBACK_API_URL` and `FEEDBACK_LOG_LEVEL` captured by the compiler
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("FEEDBACK_API_URL"), option_env!("FEEDBACK_LOG_LEVEL"))
    }

    fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_url: api_url
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            log_level: log_level
                .and_then(|level| level.trim().parse().ok())
                .unwrap_or(defaults.log_level),
            ..defaults
        }
    }
}

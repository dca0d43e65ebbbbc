//! Display and locale settings.

use serde::Serialize;

pub(crate) const DEFAULT_SHOW_SERVER_INFO: &str = "false";
pub(crate) const DEFAULT_TIME_ZONE: &str = "America/New_York";
pub(crate) const DEFAULT_CURRENCY: &str = "$";

/// Presentation settings. These are fixed and never read from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySettings {
    /// Whether pages show server details, as the string "true" or "false".
    pub(crate) show_server_info: String,
    /// IANA time zone used for order timestamps.
    pub(crate) time_zone: String,
    /// Currency symbol prefixed to prices.
    pub(crate) currency: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            show_server_info: DEFAULT_SHOW_SERVER_INFO.to_string(),
            time_zone: DEFAULT_TIME_ZONE.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl DisplaySettings {
    pub fn show_server_info(&self) -> &str {
        &self.show_server_info
    }

    pub fn time_zone(&self) -> &str {
        &self.time_zone
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Interprets `show_server_info` as a flag.
    pub fn server_info_enabled(&self) -> bool {
        self.show_server_info.eq_ignore_ascii_case("true")
    }
}

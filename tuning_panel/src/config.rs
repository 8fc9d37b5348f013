use serde::Deserialize;

/// Panel defaults
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Reconciliation
    pub const POLL_INTERVAL_MS: u32 = 100;

    // Display
    pub const DEFAULT_DECIMALS: u8 = 2;
    pub const NOT_AVAILABLE: &'static str = "N/A";
    pub const DEFAULT_TITLE: &'static str = "Tuning";
}

/// Panel configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PanelConfig {
    pub title: String,
    pub poll_interval_ms: u32,
    pub default_decimals: u8,
    pub show_schema_version: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            title: Params::DEFAULT_TITLE.to_string(),
            poll_interval_ms: Params::POLL_INTERVAL_MS,
            default_decimals: Params::DEFAULT_DECIMALS,
            show_schema_version: true,
        }
    }
}

impl PanelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// A zero interval would fire on every advance; treat it as 1 ms.
    pub fn poll_interval_ms(&self) -> u32 {
        self.poll_interval_ms.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_poll_interval() {
        let config = PanelConfig::new();
        assert_eq!(config.poll_interval_ms(), 100);
        assert_eq!(config.default_decimals, 2);
    }

    #[test]
    fn test_zero_interval_is_floored() {
        let config = PanelConfig {
            poll_interval_ms: 0,
            ..PanelConfig::default()
        };
        assert_eq!(config.poll_interval_ms(), 1);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: PanelConfig = serde_json::from_str(r#"{"title": "Pong Tuning"}"#).unwrap();
        assert_eq!(config.title, "Pong Tuning");
        assert_eq!(config.poll_interval_ms, Params::POLL_INTERVAL_MS);
        assert!(config.show_schema_version);
    }
}

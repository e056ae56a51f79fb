use serde::Deserialize;
use std::time::Duration;

/// Element id of the JSON config block a page may embed.
pub const CONFIG_ELEMENT_ID: &str = "ui-config";

pub const TOAST_CLASS: &str =
    "fixed bottom-6 right-6 bg-slate-800 text-white px-4 py-2 rounded shadow-lg";

// Runtime tunables for the shell
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long a toast stays fully visible.
    pub visible_for_ms: u64,
    /// How long the fade-out lasts before the toast is removed.
    pub fade_for_ms: u64,
    pub toast_class: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            visible_for_ms: 3500,
            fade_for_ms: 300,
            toast_class: TOAST_CLASS.to_string(),
        }
    }
}

impl UiConfig {
    pub fn from_json(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|e| format!("Invalid UI config: {}", e))
    }

    /// Read the config embedded in the page, falling back to defaults.
    pub fn load() -> Self {
        match crate::page::embedded_json(CONFIG_ELEMENT_ID) {
            Some(raw) => Self::from_json(&raw).unwrap_or_else(|e| {
                tracing::warn!("{}; using defaults", e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn visible_for(&self) -> Duration {
        Duration::from_millis(self.visible_for_ms)
    }

    pub fn fade_for(&self) -> Duration {
        Duration::from_millis(self.fade_for_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_toast_lifecycle() {
        let config = UiConfig::default();
        assert_eq!(config.visible_for(), Duration::from_millis(3500));
        assert_eq!(config.fade_for(), Duration::from_millis(300));
        assert_eq!(config.toast_class, TOAST_CLASS);
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let config = UiConfig::from_json(r#"{"visible_for_ms": 5000}"#).unwrap();
        assert_eq!(config.visible_for_ms, 5000);
        assert_eq!(config.fade_for_ms, 300);
    }

    #[test]
    fn wrong_types_are_rejected() {
        assert!(UiConfig::from_json(r#"{"fade_for_ms": "slow"}"#).is_err());
    }
}

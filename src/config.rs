use log::{debug, warn};
use serde::Deserialize;

pub const CONFIG_ELEMENT_ID: &str = "page-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub header_shrink_threshold_px: f64,
    pub header_offset_px: f64,
    pub slide_interval_ms: u32,
    pub counter_speed: u32,
    pub counter_step_ms: u32,
    pub counter_threshold: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub submit_delay_ms: u32,
    pub success_dismiss_ms: u32,
    pub rtl: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            header_shrink_threshold_px: 100.0,
            header_offset_px: 80.0,
            slide_interval_ms: 5000,
            counter_speed: 200, // the lower the slower
            counter_step_ms: 20,
            counter_threshold: 0.5,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
            submit_delay_ms: 1500,
            success_dismiss_ms: 5000,
            rtl: true,
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<PageConfig>(raw) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring malformed page config: {}", e);
                Self::default()
            }
        }
    }

    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw),
            _ => {
                debug!("No embedded page config, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_document_overrides_only_named_keys() {
        let config = PageConfig::from_json(r#"{ "slide_interval_ms": 8000, "rtl": false }"#);
        assert_eq!(config.slide_interval_ms, 8000);
        assert!(!config.rtl);
        assert_eq!(config.header_offset_px, 80.0);
        assert_eq!(config.counter_speed, 200);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let config = PageConfig::from_json(r#"{ "theme": "dark" }"#);
        assert_eq!(config, PageConfig::default());
    }

    #[test]
    fn malformed_document_falls_back_to_defaults() {
        let config = PageConfig::from_json("{ slide_interval_ms: ");
        assert_eq!(config, PageConfig::default());
    }
}

//! Storefront Configuration
//!
//! Compiled-in defaults, optionally overridden by a JSON block embedded in
//! `index.html`:
//!
//! ```html
//! <script id="techstore-config" type="application/json">
//!   { "store_name": "TechStore", "log_level": "debug" }
//! </script>
//! ```

use log::LevelFilter;
use serde::Deserialize;
use techstore_domain::{DomainError, DomainResult};

/// Id of the `<script>` element holding config overrides
pub const CONFIG_ELEMENT_ID: &str = "techstore-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// Shown in the header and footer
    pub store_name: String,
    /// Appended to every price
    pub currency: String,
    /// Price slider step
    pub price_step: u32,
    /// Number of catalog products shown on the home section
    pub popular_count: usize,
    /// `error`, `warn`, `info`, `debug`, `trace` or `off`
    pub log_level: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            store_name: "TechStore".to_string(),
            currency: "₽".to_string(),
            price_step: 5000,
            popular_count: 3,
            log_level: "info".to_string(),
        }
    }
}

impl ShopConfig {
    /// Parse overrides; missing fields keep their defaults
    pub fn from_json(raw: &str) -> DomainResult<Self> {
        let config: ShopConfig = serde_json::from_str(raw)
            .map_err(|e| DomainError::InvalidInput(format!("config JSON: {}", e)))?;
        if config.price_step == 0 {
            return Err(DomainError::InvalidInput("config price_step must be positive".to_string()));
        }
        Ok(config)
    }

    /// Unknown level names fall back to `info`
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    /// The recent-log panel is only rendered at `debug` or `trace`
    pub fn shows_log_panel(&self) -> bool {
        self.level_filter() >= LevelFilter::Debug
    }

    /// Price followed by the currency symbol
    pub fn price_label(&self, amount: u64) -> String {
        format!("{} {}", techstore_domain::format_price(amount), self.currency)
    }
}

/// Read the embedded config block, `None` when the page has none
pub fn read_embedded() -> DomainResult<Option<ShopConfig>> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| DomainError::Internal("document is not available".to_string()))?;
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(None);
    };
    let raw = element.text_content().unwrap_or_default();
    if raw.trim().is_empty() {
        return Ok(None);
    }
    ShopConfig::from_json(&raw).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = ShopConfig::from_json(r#"{ "store_name": "PC Shop", "log_level": "debug" }"#).unwrap();
        assert_eq!(config.store_name, "PC Shop");
        assert_eq!(config.level_filter(), LevelFilter::Debug);
        assert_eq!(config.currency, "₽");
        assert_eq!(config.popular_count, 3);
        assert_eq!(config.price_step, 5000);
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let err = ShopConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));

        let err = ShopConfig::from_json(r#"{ "price_step": 0 }"#).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        let config = ShopConfig { log_level: "loud".to_string(), ..ShopConfig::default() };
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_log_panel_follows_level() {
        let verbose = ShopConfig::from_json(r#"{ "log_level": "trace" }"#).unwrap();
        assert!(verbose.shows_log_panel());
        assert!(!ShopConfig::default().shows_log_panel());
    }

    #[test]
    fn test_price_label() {
        assert_eq!(ShopConfig::default().price_label(120_000), "120\u{a0}000 ₽");
    }
}

use serde::Deserialize;
use wasm_bindgen::JsValue;

/// Global object a page template may define to override defaults, e.g.
/// `window.taskflowConfig = { apiBase: "/app" }`.
pub const CONFIG_GLOBAL: &str = "taskflowConfig";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct UiConfig {
    /// Prefix prepended to `/tasks/{id}/move`. Empty means same origin, root path.
    pub api_base: String,
    pub column_selector: String,
    pub card_selector: String,
    /// Looked up inside each column's parent element.
    pub count_badge_selector: String,
    pub notification_visible_ms: u32,
    pub notification_fade_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            column_selector: ".kanban-column".to_string(),
            card_selector: ".task-card".to_string(),
            count_badge_selector: ".column-count".to_string(),
            notification_visible_ms: 3000,
            notification_fade_ms: 300,
        }
    }
}

impl UiConfig {
    /// Trailing slashes on `api_base` are dropped so endpoints never contain `//`.
    pub fn normalized(mut self) -> Self {
        let trimmed = self.api_base.trim_end_matches('/').len();
        self.api_base.truncate(trimmed);
        self
    }
}

/// Reads `window.taskflowConfig`; anything missing or malformed falls back to defaults.
pub fn load_config() -> UiConfig {
    let Some(window) = web_sys::window() else {
        return UiConfig::default();
    };

    let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
        .unwrap_or(JsValue::UNDEFINED);
    if raw.is_undefined() || raw.is_null() {
        return UiConfig::default();
    }

    match serde_wasm_bindgen::from_value::<UiConfig>(raw) {
        Ok(config) => {
            log::debug!("loaded page config: {:?}", config);
            config.normalized()
        }
        Err(e) => {
            log::warn!("ignoring malformed {}: {}", CONFIG_GLOBAL, e);
            UiConfig::default()
        }
    }
}

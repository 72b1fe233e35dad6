//! Reads the display values the server injected into the page.
//!
//! The hosting server writes `portalTitle` and `portalDescription` onto the
//! `window` object when it serves the SPA shell. They are plain globals, so
//! reading them is synchronous and cannot fail. The globals are collected
//! into a JSON mapping and handed to `PortalConfig::from_json`, which owns
//! the leniency rules for absent or malformed fields.

use serde_json::Value;
use shared::{DESCRIPTION_KEY, PortalConfig, TITLE_KEY};
use wasm_bindgen::JsValue;

fn injected_global(key: &str) -> Value {
    let Some(window) = web_sys::window() else {
        return Value::Null;
    };

    match js_sys::Reflect::get(window.as_ref(), &JsValue::from_str(key)) {
        // Non-string globals carry no usable text
        Ok(value) => value.as_string().map(Value::String).unwrap_or(Value::Null),
        Err(_) => Value::Null,
    }
}

/// The Configuration Provider accessor: one synchronous read per render.
pub fn injected_values() -> PortalConfig {
    let mut values = serde_json::Map::new();
    values.insert(TITLE_KEY.to_string(), injected_global(TITLE_KEY));
    values.insert(DESCRIPTION_KEY.to_string(), injected_global(DESCRIPTION_KEY));

    PortalConfig::from_json(&Value::Object(values))
}

//! Values shared between the portal front-end and any tooling around it.

use serde_json::Value;

/// Field the server injects the portal heading under.
pub const TITLE_KEY: &str = "portalTitle";
/// Field the server injects the portal body text under.
pub const DESCRIPTION_KEY: &str = "portalDescription";

/// Display text for the portal, injected by the hosting server at serve time.
///
/// The server writes `portalTitle` and `portalDescription` into the page it
/// serves; the front-end reads them back once per render. There is no
/// persistence or identity beyond the render pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PortalConfig {
    pub title: String,
    pub description: String,
}

impl PortalConfig {
    /// Extract the config from the injected JSON mapping.
    ///
    /// The server makes no promise about what was injected. A field that is
    /// missing, null, or not a string becomes the empty string, so the view
    /// renders empty text instead of failing. Unknown fields are ignored.
    pub fn from_json(values: &Value) -> Self {
        Self {
            title: text_field(values, TITLE_KEY),
            description: text_field(values, DESCRIPTION_KEY),
        }
    }
}

fn text_field(values: &Value, key: &str) -> String {
    values
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

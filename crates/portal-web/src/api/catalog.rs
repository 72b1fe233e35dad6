use chrono::{DateTime, Utc};
use gloo_net::http::Request;
use serde::Deserialize;

/// Where the agent serving this SPA exposes the catalog document.
const CATALOG_ENDPOINT: &str = "/api/catalog";

/// Catalog of services exposed through the portal
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub name: String,
    pub version: String,
    pub domain: String,
    #[serde(default)]
    pub custom_domains: Vec<String>,
    #[serde(default)]
    pub services: Vec<CatalogService>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A service within a catalog
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogService {
    pub name: String,
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub open_api_spec_url: Option<String>,
}

impl Catalog {
    /// Public URLs the catalog is reachable on.
    /// As soon as a custom domain is set, the generated domain is no longer offered.
    pub fn urls(&self) -> Vec<String> {
        if self.custom_domains.is_empty() {
            vec![format!("https://{}", self.domain)]
        } else {
            self.custom_domains
                .iter()
                .map(|domain| format!("https://{domain}"))
                .collect()
        }
    }
}

impl CatalogService {
    /// Display label, namespace-qualified when the namespace is known.
    pub fn label(&self) -> String {
        match &self.namespace {
            Some(namespace) => format!("{}/{}", namespace, self.name),
            None => self.name.clone(),
        }
    }
}

/// Fetch the catalog from the portal's backing endpoint
pub async fn get_catalog() -> Option<Catalog> {
    let response = Request::get(CATALOG_ENDPOINT)
        .header("Accept", "application/json")
        .send()
        .await
        .ok()?;

    if !response.ok() {
        web_sys::console::error_1(&format!("Catalog API error: {}", response.status()).into());
        return None;
    }

    response.json().await.ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_catalog(custom_domains: &[&str]) -> Catalog {
        Catalog {
            name: "my-portal".to_string(),
            version: "v1".to_string(),
            domain: "generated.example.hub".to_string(),
            custom_domains: custom_domains.iter().map(|d| d.to_string()).collect(),
            services: Vec::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_urls_fall_back_to_generated_domain() {
        let catalog = test_catalog(&[]);
        assert_eq!(catalog.urls(), vec!["https://generated.example.hub"]);
    }

    #[test]
    fn test_custom_domains_replace_generated_domain() {
        let catalog = test_catalog(&["api.example.com", "dev.example.com"]);
        assert_eq!(
            catalog.urls(),
            vec!["https://api.example.com", "https://dev.example.com"]
        );
    }

    #[test]
    fn test_deserialize_wire_format() {
        let raw = r#"{
            "name": "my-portal",
            "version": "v3",
            "domain": "generated.example.hub",
            "customDomains": ["api.example.com"],
            "services": [
                {"name": "whoami", "namespace": "default", "openApiSpecUrl": "/specs/whoami.yaml"},
                {"name": "legacy"}
            ],
            "createdAt": "2023-01-12T09:30:00Z",
            "updatedAt": "2023-03-04T17:05:00Z"
        }"#;

        let catalog: Catalog = serde_json::from_str(raw).unwrap();
        assert_eq!(catalog.name, "my-portal");
        assert_eq!(catalog.custom_domains, vec!["api.example.com"]);
        assert_eq!(catalog.services.len(), 2);

        let whoami = &catalog.services[0];
        assert_eq!(whoami.label(), "default/whoami");
        assert_eq!(whoami.open_api_spec_url.as_deref(), Some("/specs/whoami.yaml"));

        // Optional fields may be absent on the wire
        let legacy = &catalog.services[1];
        assert_eq!(legacy.label(), "legacy");
        assert!(legacy.namespace.is_none());
        assert!(legacy.open_api_spec_url.is_none());
    }

    #[test]
    fn test_deserialize_without_services() {
        let raw = r#"{
            "name": "empty-portal",
            "version": "v1",
            "domain": "generated.example.hub",
            "customDomains": [],
            "createdAt": "2023-01-12T09:30:00Z",
            "updatedAt": "2023-01-12T09:30:00Z"
        }"#;

        let catalog: Catalog = serde_json::from_str(raw).unwrap();
        assert!(catalog.services.is_empty());
    }
}

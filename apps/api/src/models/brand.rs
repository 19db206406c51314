use serde::{Deserialize, Serialize};

/// Request-scoped branding for PDF headers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandConfig {
    #[serde(alias = "app_name", alias = "name")]
    pub app_name: Option<String>,
    /// Base64 image bytes (optionally a `data:` URL) or an `http(s)` URL.
    pub logo: Option<String>,
}

impl BrandConfig {
    /// Brand name, falling back to the service default.
    pub fn name_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.app_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(default)
    }
}

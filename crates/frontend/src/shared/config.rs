//! Client configuration
//!
//! The defaults are embedded in the bundle. An empty `base_url` means "same
//! host as the page, API port", resolved with `page_api_base` at start-up.

use serde::Deserialize;

pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Target language for translated labels and `Accept-Language`
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
prefix = "/api/v1"
port = 3000
language = "en"
page_size = 20
"#;

#[derive(Debug, Deserialize)]
struct ConfigFile {
    api: ApiConfig,
}

impl ApiConfig {
    /// Parse a TOML document with an `[api]` table
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        let file: ConfigFile = toml::from_str(contents)?;
        Ok(file.api.normalized())
    }

    /// Embedded defaults with the base URL taken from the page location
    pub fn load() -> Self {
        let mut config = match Self::from_toml(DEFAULT_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Embedded config is invalid, using built-in defaults: {}", e);
                Self::default()
            }
        };
        if config.base_url.is_empty() {
            config.base_url = page_api_base(config.port);
        }
        log::info!(
            "API config: base_url={} prefix={} language={}",
            config.base_url,
            config.prefix,
            config.language
        );
        config
    }

    /// `base_url` + `prefix` + `path`, e.g. "http://host:3000/api/v1/brands"
    pub fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, self.prefix, path)
    }

    fn normalized(mut self) -> Self {
        self.base_url = self.base_url.trim_end_matches('/').to_string();
        let prefix = self.prefix.trim_matches('/');
        self.prefix = if prefix.is_empty() {
            String::new()
        } else {
            format!("/{}", prefix)
        };
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            prefix: default_prefix(),
            port: default_port(),
            language: default_language(),
            page_size: default_page_size(),
        }
    }
}

/// Page protocol and hostname with the API port, e.g. "https://admin.example.com:3000".
/// Empty outside a browser window.
fn page_api_base(port: u16) -> String {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return String::new();
    };
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location.hostname().unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, host, port)
}

fn default_prefix() -> String {
    "/api/v1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_page_size() -> u32 {
    20
}

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use super::error::ApiError;
use crate::shared::config::ApiConfig;

/// Source of the bearer token attached to API requests
pub trait TokenProvider: Send + Sync {
    fn token(&self) -> Option<String>;

    /// Forget the token once the API rejects it
    fn clear(&self) {}
}

/// Fixed token, mostly for tests and tooling
#[derive(Debug, Clone, Default)]
pub struct StaticToken(pub Option<String>);

impl TokenProvider for StaticToken {
    fn token(&self) -> Option<String> {
        self.0.clone()
    }
}

/// HTTP client shared by every resource
#[derive(Clone)]
pub struct ApiClient {
    config: Arc<ApiConfig>,
    tokens: Arc<dyn TokenProvider>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .field("has_token", &self.tokens.token().is_some())
            .finish()
    }
}

impl ApiClient {
    pub fn new(config: ApiConfig, tokens: impl TokenProvider + 'static) -> Self {
        Self {
            config: Arc::new(config),
            tokens: Arc::new(tokens),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn url(&self, path: &str) -> String {
        self.config.url(path)
    }

    /// Header pairs added to every request
    pub fn default_headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![
            ("Accept", "application/json".to_string()),
            ("Accept-Language", self.config.language.clone()),
        ];
        if let Some(token) = self.tokens.token().filter(|t| !t.is_empty()) {
            headers.push(("Authorization", format!("Bearer {}", token)));
        }
        headers
    }

    fn prepare(&self, builder: RequestBuilder) -> RequestBuilder {
        self.default_headers()
            .into_iter()
            .fold(builder, |builder, (name, value)| builder.header(name, &value))
    }

    /// Drops the stored token on 401 so the next request goes out anonymous
    fn on_failure(&self, error: &ApiError) {
        if *error == ApiError::Unauthorized {
            log::info!("Access token rejected, clearing it");
            self.tokens.clear();
        }
    }

    async fn check(&self, response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let error = ApiError::from_status(status, &body);
        log::warn!("{} {} -> {}", status, response.url(), error);
        self.on_failure(&error);
        Err(error)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        log::debug!("GET {}", url);
        let response = self.prepare(Request::get(&url)).send().await?;
        decode(self.check(response).await?).await
    }

    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize,
    {
        let url = with_query(&self.url(path), query)?;
        log::debug!("GET {}", url);
        let response = self.prepare(Request::get(&url)).send().await?;
        decode(self.check(response).await?).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        log::debug!("POST {}", url);
        let request = self
            .prepare(Request::post(&url))
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        decode(self.check(request.send().await?).await?).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        log::debug!("PUT {}", url);
        let request = self
            .prepare(Request::put(&url))
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        decode(self.check(request.send().await?).await?).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.url(path);
        log::debug!("DELETE {}", url);
        let response = self.prepare(Request::delete(&url)).send().await?;
        self.check(response).await.map(|_| ())
    }
}

/// Append a serialized query string; empty queries leave the URL untouched
pub fn with_query<Q: Serialize>(url: &str, query: &Q) -> Result<String, ApiError> {
    let qs = serde_qs::to_string(query).map_err(|e| ApiError::Encode(e.to_string()))?;
    if qs.is_empty() {
        return Ok(url.to_string());
    }
    let separator = if url.contains('?') { '&' } else { '?' };
    Ok(format!("{}{}{}", url, separator, qs))
}


/// Empty bodies (204, bare 200) decode as JSON `null` so `()` and `Option` work
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let text = response.text().await?;
    let text = if text.trim().is_empty() { "null" } else { text.as_str() };
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::list::ListQuery;

    fn client(token: Option<&str>) -> ApiClient {
        let config = ApiConfig {
            base_url: "http://localhost:3000".to_string(),
            ..ApiConfig::default()
        };
        ApiClient::new(config, StaticToken(token.map(str::to_string)))
    }

    #[test]
    fn test_bearer_header_only_with_token() {
        let headers = client(Some("abc")).default_headers();
        assert!(headers.contains(&("Authorization", "Bearer abc".to_string())));
        assert!(headers.contains(&("Accept-Language", "en".to_string())));

        let headers = client(None).default_headers();
        assert!(headers.iter().all(|(name, _)| *name != "Authorization"));

        let headers = client(Some("")).default_headers();
        assert!(headers.iter().all(|(name, _)| *name != "Authorization"));
    }

    #[derive(Default)]
    struct SessionToken(std::sync::Mutex<Option<String>>);

    impl TokenProvider for SessionToken {
        fn token(&self) -> Option<String> {
            self.0.lock().unwrap().clone()
        }

        fn clear(&self) {
            *self.0.lock().unwrap() = None;
        }
    }

    #[test]
    fn test_unauthorized_clears_token() {
        let client = ApiClient::new(
            ApiConfig::default(),
            SessionToken(std::sync::Mutex::new(Some("abc".to_string()))),
        );

        client.on_failure(&ApiError::from_status(500, ""));
        assert!(client.default_headers().iter().any(|(name, _)| *name == "Authorization"));

        client.on_failure(&ApiError::from_status(401, ""));
        assert!(client.default_headers().iter().all(|(name, _)| *name != "Authorization"));
    }

    #[test]
    fn test_url() {
        assert_eq!(client(None).url("/brands"), "http://localhost:3000/api/v1/brands");
    }

    #[test]
    fn test_with_query() {
        let query = ListQuery::new(10).with_search("panadol").with_sort("name", false);
        let url = with_query("http://h/api/v1/brands", &query).unwrap();
        assert_eq!(
            url,
            "http://h/api/v1/brands?page=1&perPage=10&search=panadol&sort=name&order=desc"
        );
    }

    #[test]
    fn test_with_query_appends_to_existing() {
        #[derive(serde::Serialize)]
        struct Q {
            status: &'static str,
        }
        let url = with_query("http://h/orders?x=1", &Q { status: "pending" }).unwrap();
        assert_eq!(url, "http://h/orders?x=1&status=pending");
    }
}

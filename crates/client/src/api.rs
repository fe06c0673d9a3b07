//! HTTP client for the GTD backend.
//!
//! Wraps reqwest with the configured per-request timeout, JSON decoding and
//! uniform error translation. A failed attempt is final; there is no retry.

use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use gtd_core::errors::{Error, Result};
use gtd_core::{ApiConfig, ApiResponse};

/// Client for the GTD REST API.
///
/// # Example
///
/// ```ignore
/// let client = ApiClient::new(ApiConfig::from_env()?)?;
/// let response: ApiResponse<serde_json::Value> = client.get("goals").await?;
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured header is not a valid HTTP header or
    /// the HTTP client cannot be initialized.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .default_headers(Self::default_headers(&config)?)
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                Error::InvalidConfigValue(format!("Failed to initialize HTTP client: {}", e))
            })?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn default_headers(config: &ApiConfig) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| Error::InvalidConfigValue(format!("Invalid header name: {}", name)))?;
            let header_value = HeaderValue::from_str(value).map_err(|_| {
                Error::InvalidConfigValue(format!("Invalid value for header {}", name))
            })?;
            headers.insert(header_name, header_value);
        }
        Ok(headers)
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<ApiResponse<T>> {
        self.request(Method::GET, endpoint, None).await
    }

    pub async fn post<T, B>(&self, endpoint: &str, body: &B) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        self.request(Method::POST, endpoint, Some(body)).await
    }

    pub async fn put<T, B>(&self, endpoint: &str, body: &B) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        self.request(Method::PUT, endpoint, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<ApiResponse<T>> {
        self.request(Method::DELETE, endpoint, None).await
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<serde_json::Value>,
    ) -> Result<ApiResponse<T>> {
        let url = self.config.api_url(endpoint);
        debug!("[ApiClient] {} {}", method, url);

        let mut request = self.client.request(method.clone(), &url);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(translate_error)?;

        let status = response.status();
        if !status.is_success() {
            warn!("[ApiClient] {} {} failed with {}", method, url, status);
            return Err(Error::HttpStatus(status.as_u16()));
        }

        let bytes = response.bytes().await.map_err(translate_error)?;
        let data = decode_body(&bytes)?;

        Ok(ApiResponse::new(data, status.as_u16()))
    }
}

/// Map a reqwest failure onto the core error taxonomy.
fn translate_error(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::Timeout
    } else {
        Error::transport(err.to_string())
    }
}

/// Decode a JSON body; an empty body decodes as `null`.
fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::from_value(serde_json::Value::Null)?);
    }
    Ok(serde_json::from_slice(bytes)?)
}

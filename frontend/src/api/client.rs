use log::{debug, warn};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{header, Client, Method, Request, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::{api::types::ApiError, config::AppConfig};

/// Characters escaped when an identifier is spliced into a path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self::new_with_base_url(config.api_base_url.as_str())
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.base_url, path))
            .header(header::CONTENT_TYPE, "application/json")
    }

    pub(crate) async fn fetch_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        self.send(request).await?.into_json()
    }

    /// Like [`fetch_json`](Self::fetch_json) but tolerates an empty success body.
    pub(crate) async fn fetch_json_or_default<T: DeserializeOwned + Default>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.send(request).await?;
        if response.status.is_success() && response.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(T::default());
        }
        response.into_json()
    }

    async fn send(&self, request: RequestBuilder) -> Result<RawResponse, ApiError> {
        let request = request
            .build()
            .map_err(|e| ApiError::network(format!("Request failed: {}", e)))?;
        debug!("{} {}", request.method(), request.url().path());
        if let Some(intercepted) = test_hook::intercept(&request).await {
            return intercepted;
        }
        self.dispatch(request).await
    }

    async fn dispatch(&self, request: Request) -> Result<RawResponse, ApiError> {
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ApiError::network(format!("Request failed: {}", e)))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::network(format!("Request failed: {}", e)))?;
        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}

pub(crate) fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

pub(crate) struct RawResponse {
    status: StatusCode,
    body: Vec<u8>,
}

impl RawResponse {
    fn into_json<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        if !self.status.is_success() {
            let error = ApiError::from_response(self.status.as_u16(), &self.body);
            warn!("API responded {}: {}", self.status.as_u16(), error.message);
            return Err(error);
        }
        serde_json::from_slice(&self.body)
            .map_err(|e| ApiError::decode(format!("Failed to parse response: {}", e)))
    }
}

#[cfg(not(all(test, not(target_arch = "wasm32"))))]
mod test_hook {
    use super::RawResponse;
    use crate::api::types::ApiError;

    #[inline]
    pub(super) async fn intercept(
        _request: &reqwest::Request,
    ) -> Option<Result<RawResponse, ApiError>> {
        None
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
pub use test_hook::{register_mock, MockResponse, TestResponder};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_drops_trailing_slashes() {
        let client = ApiClient::new_with_base_url("http://localhost:8000//");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn client_uses_configured_base_url() {
        let config = AppConfig {
            api_base_url: "https://hr.example.com".into(),
            ..AppConfig::default()
        };
        assert_eq!(ApiClient::new(&config).base_url(), "https://hr.example.com");
    }

    #[test]
    fn path_segments_are_percent_encoded() {
        assert_eq!(encode_segment("EMP001"), "EMP001");
        assert_eq!(encode_segment("EMP 1/2"), "EMP%201%2F2");
        assert_eq!(encode_segment("a?b#c"), "a%3Fb%23c");
    }
}

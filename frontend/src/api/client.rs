use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Client, RequestBuilder, Response, StatusCode,
};
use serde::de::DeserializeOwned;

use crate::{api::types::ApiError, config, utils::storage as storage_utils};

pub const ACCESS_TOKEN_KEY: &str = "token";

fn bearer_header(token: Option<&str>) -> Option<HeaderValue> {
    let token = token.map(str::trim).filter(|t| !t.is_empty())?;
    match HeaderValue::from_str(&format!("Bearer {}", token)) {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Ignoring access token with invalid header characters");
            None
        }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&base_url.into())),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    /// Bearer header for the stored access token. A missing token is not an error:
    /// the service decides whether the endpoint needs one.
    pub(crate) fn auth_headers(&self) -> HeaderMap {
        let token = storage_utils::read_item(ACCESS_TOKEN_KEY).ok().flatten();
        let mut headers = HeaderMap::new();
        if let Some(value) = bearer_header(token.as_deref()) {
            headers.insert(AUTHORIZATION, value);
        }
        headers
    }

    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        request
            .headers(self.auth_headers())
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }

    pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::error_from_response(status, response).await)
        }
    }

    pub(crate) async fn expect_success(response: Response) -> Result<(), ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::error_from_response(status, response).await)
        }
    }

    async fn error_from_response(status: StatusCode, response: Response) -> ApiError {
        match response.json::<ApiError>().await {
            Ok(mut error) => {
                if error.code.is_empty() {
                    error.code = format!("HTTP_{}", status.as_u16());
                }
                error
            }
            Err(_) => ApiError::from_status(status.as_u16()),
        }
    }
}

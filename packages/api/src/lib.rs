//! # REST client for the wellness backend
//!
//! Thin typed facade over the backend's HTTP API. Each call is a single
//! attempt with no retry, timeout or status-specific handling; failures come
//! back as one [`ApiError`] taxonomy and the caller decides what to show.
//!
//! ## Modules
//!
//! | Module | Endpoints |
//! |--------|-----------|
//! | `auth` | `/auth/demo-login`, `/auth/me`, `/auth/logout`, OAuth redirect URLs |
//! | `wellness` | `/api/categories`, `/api/entries`, `/api/entries/today`, `/api/stats` |
//! | `journal` | `/api/journal` CRUD, `/privacy`, `/stats`, `/tags` |
//! | `inspiration` | `/api/inspiration` daily, generate, history, delete |
//! | [`models`] | Request/response wire shapes |
//!
//! The bearer token lives in a [`TokenStore`] (localStorage in the browser);
//! [`ApiClient::demo_login`] stores it, [`ApiClient::logout`] always clears
//! it, and every request attaches it when present.

use serde::de::DeserializeOwned;
use serde::Serialize;

mod auth;
mod error;
mod inspiration;
mod journal;
pub mod models;
mod token;
mod wellness;

pub use error::ApiError;
pub use models::*;
pub use token::{TokenStore, TOKEN_KEY};

/// Fallback backend origin when `API_BASE_URL` is not set at build time.
const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Today's date in the user's local timezone, as sent with new entries.
pub fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

/// HTTP client for the backend. Cheap to clone; clones share the token store.
#[derive(Clone, Default)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: TokenStore,
}

impl ApiClient {
    /// Client against the compile-time configured backend
    /// (`API_BASE_URL`, default `http://localhost:5000`).
    pub fn new() -> Self {
        Self::with_base_url(option_env!("API_BASE_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    /// Client against an explicit backend origin. Tests point this at a
    /// local mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            tokens: TokenStore::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Persist or clear the bearer token.
    pub fn set_token(&self, token: Option<&str>) {
        self.tokens.set(token);
    }

    pub fn token(&self) -> Option<String> {
        self.tokens.get()
    }

    pub fn has_token(&self) -> bool {
        self.tokens.get().is_some()
    }

    /// Absolute URL of the backend's OAuth entry point for `provider`.
    /// The app navigates the whole browser there; the flow never returns
    /// through this client.
    pub fn login_redirect_url(&self, provider: &str) -> String {
        format!("{}/auth/login/{provider}", self.base_url)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach headers, fire the request once, and lift non-success statuses
    /// into [`ApiError::Backend`].
    async fn send(
        &self,
        path: &str,
        req: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        let req = match self.tokens.get() {
            Some(token) => req.bearer_auth(token),
            None => req,
        };
        let resp = req
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        let err = ApiError::backend(status.as_u16(), &body);
        tracing::warn!("{path}: {err}");
        Err(err)
    }

    /// Decode a success response the backend declared as JSON.
    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = resp.text().await?;
        if !content_type.contains("application/json") {
            return Err(ApiError::Decode(format!(
                "expected JSON, got {content_type:?}"
            )));
        }
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
        serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.send(path, self.http.get(self.url(path))).await?;
        Self::decode(resp).await
    }

    pub(crate) async fn get_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize,
    {
        let resp = self
            .send(path, self.http.get(self.url(path)).query(query))
            .await?;
        Self::decode(resp).await
    }

    /// Raw body of a success response, whatever its content type. The typed
    /// getters insist on JSON; this is the other half of the negotiation.
    pub async fn get_text(&self, path: &str) -> Result<String, ApiError> {
        let resp = self.send(path, self.http.get(self.url(path))).await?;
        Ok(resp.text().await?)
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let resp = self
            .send(path, self.http.post(self.url(path)).body(Self::encode(body)?))
            .await?;
        Self::decode(resp).await
    }

    /// POST without a body, response discarded.
    pub(crate) async fn post_discard(&self, path: &str) -> Result<(), ApiError> {
        self.send(path, self.http.post(self.url(path))).await?;
        Ok(())
    }

    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let resp = self
            .send(path, self.http.put(self.url(path)).body(Self::encode(body)?))
            .await?;
        Self::decode(resp).await
    }

    /// PUT whose response body carries nothing the client uses.
    pub(crate) async fn put_discard<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        self.send(path, self.http.put(self.url(path)).body(Self::encode(body)?))
            .await?;
        Ok(())
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(path, self.http.delete(self.url(path))).await?;
        Ok(())
    }

    /// `GET /health` — backend liveness probe.
    pub async fn health(&self) -> Result<Health, ApiError> {
        self.get("/health").await
    }
}

//! Authentication endpoints.
//!
//! Demo login is a plain POST that hands back a bearer token; OAuth happens
//! entirely on the backend after a full-page redirect, so the only OAuth
//! surface here is [`ApiClient::login_redirect_url`].

use serde::Serialize;

use crate::{ApiClient, ApiError, LoginResponse, User};

#[derive(Serialize)]
struct DemoLoginRequest<'a> {
    email: &'a str,
    name: &'a str,
}

impl ApiClient {
    /// `POST /auth/demo-login`. On success the returned access token is
    /// persisted so subsequent calls authenticate.
    pub async fn demo_login(&self, email: &str, name: &str) -> Result<LoginResponse, ApiError> {
        let login: LoginResponse = self
            .post("/auth/demo-login", &DemoLoginRequest { email, name })
            .await?;
        self.set_token(Some(&login.access_token));
        Ok(login)
    }

    /// `GET /auth/me` — the account behind the stored token.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.get("/auth/me").await
    }

    /// `POST /auth/logout`. The local token is cleared whether or not the
    /// server call succeeds; a dead backend cannot keep the user signed in.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let result = self.post_discard("/auth/logout").await;
        self.set_token(None);
        result
    }

    /// Validate any persisted token at startup. `Ok(None)` when no token is
    /// stored, `Ok(Some(user))` when the backend accepts it. A rejected
    /// token is cleared before the error is returned, so a stale login can
    /// never wedge the app.
    pub async fn restore_session(&self) -> Result<Option<User>, ApiError> {
        if !self.has_token() {
            return Ok(None);
        }
        match self.current_user().await {
            Ok(user) => Ok(Some(user)),
            Err(err) => {
                self.set_token(None);
                Err(err)
            }
        }
    }
}

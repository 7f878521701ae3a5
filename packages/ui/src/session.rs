//! Session state and the actions that drive it.
//!
//! One [`SessionState`] signal, provided via context together with the
//! shared [`ApiClient`], is the single place authentication and the home
//! screen's data live. Views obtain a [`Session`] handle with
//! [`use_session`] and go through its methods; nothing mutates the state
//! directly.

use std::collections::HashMap;

use api::{ApiClient, ApiError, Category, NewScoreEntry, TodayEntry, User};
use dioxus::prelude::*;

use crate::toast::{use_toasts, Toasts};

/// Where the app is in its auth lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Startup: a persisted token is being validated.
    CheckingAuth,
    Unauthenticated,
    /// Demo-login round trip in flight.
    Authenticating,
    Authenticated,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub phase: Phase,
    pub user: Option<User>,
    pub categories: Vec<Category>,
    pub today: Vec<TodayEntry>,
    /// Slider values applied locally while their write is still in flight.
    pending_scores: HashMap<i64, u8>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            phase: Phase::CheckingAuth,
            user: None,
            categories: Vec::new(),
            today: Vec::new(),
            pending_scores: HashMap::new(),
        }
    }
}

impl SessionState {
    fn signed_out() -> Self {
        Self {
            phase: Phase::Unauthenticated,
            ..Self::default()
        }
    }

    /// Today's score for a category; unrated categories read as 0. Pending
    /// slider values win over the last fetched state.
    pub fn score_for(&self, category_id: i64) -> u8 {
        if let Some(&score) = self.pending_scores.get(&category_id) {
            return score;
        }
        self.today
            .iter()
            .find(|row| row.category.id == category_id)
            .and_then(|row| row.entry.as_ref())
            .map(|entry| entry.score)
            .unwrap_or(0)
    }

    /// Scores aligned with `categories` ordering, for the wheel.
    pub fn scores(&self) -> Vec<u8> {
        self.categories
            .iter()
            .map(|c| self.score_for(c.id))
            .collect()
    }
}

/// Handle combining the shared client, the session signal and the toaster.
/// Cheap to clone into event handlers.
#[derive(Clone)]
pub struct Session {
    pub client: ApiClient,
    pub state: Signal<SessionState>,
    toasts: Toasts,
}

pub fn use_session() -> Session {
    Session {
        client: use_context::<ApiClient>(),
        state: use_context::<Signal<SessionState>>(),
        toasts: use_toasts(),
    }
}

/// Provides the [`ApiClient`] and [`SessionState`] contexts and runs the
/// startup token check. Mount below [`crate::Toaster`].
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let client = use_context_provider(ApiClient::new);
    let state = use_signal(SessionState::default);
    let toasts = use_toasts();

    let session = Session {
        client,
        state,
        toasts,
    };

    // Validate any persisted token once on mount
    let _ = use_resource(move || {
        let session = session.clone();
        async move {
            session.bootstrap().await;
        }
    });

    use_context_provider(|| state);

    rsx! {
        {children}
    }
}

impl Session {
    async fn bootstrap(&self) {
        let mut state = self.state;
        match self.client.restore_session().await {
            Ok(Some(user)) => {
                state.write().user = Some(user);
                self.reload_data().await;
                state.write().phase = Phase::Authenticated;
            }
            Ok(None) => {
                state.write().phase = Phase::Unauthenticated;
            }
            Err(err) => {
                tracing::warn!("stored token rejected: {err}");
                state.set(SessionState::signed_out());
            }
        }
    }

    /// `POST /auth/demo-login` and load the user's data. Failures toast and
    /// return to the login screen.
    pub async fn demo_login(&self, email: &str, name: &str) {
        let mut state = self.state;
        let mut toasts = self.toasts;
        state.write().phase = Phase::Authenticating;

        match self.client.demo_login(email, name).await {
            Ok(login) => {
                let name = login.user.name.clone();
                state.write().user = Some(login.user);
                self.reload_data().await;
                state.write().phase = Phase::Authenticated;
                toasts.success("Přihlášení úspěšné", format!("Vítejte zpět, {name}!"));
            }
            Err(err) => {
                tracing::warn!("demo login failed: {err}");
                state.write().phase = Phase::Unauthenticated;
                let description = match err {
                    ApiError::Backend { message, .. } => message,
                    _ => "Nepodařilo se přihlásit. Zkuste to prosím znovu.".to_string(),
                };
                toasts.error("Chyba při přihlášení", description);
            }
        }
    }

    /// Navigate the whole browser to the backend's OAuth entry point. The
    /// flow completes outside the app.
    pub fn oauth_login(&self, provider: &str) {
        let url = self.client.login_redirect_url(provider);
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(&url);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            tracing::info!("OAuth login would redirect to {url}");
        }
    }

    /// Log out. Local state is cleared whatever the server says; only a
    /// confirmed logout gets the farewell toast.
    pub async fn logout(&self) {
        let mut state = self.state;
        let mut toasts = self.toasts;

        let result = self.client.logout().await;
        state.set(SessionState::signed_out());

        match result {
            Ok(()) => toasts.success("Odhlášení úspěšné", "Byli jste úspěšně odhlášeni."),
            Err(err) => tracing::warn!("server logout failed: {err}"),
        }
    }

    /// Write today's score for a category, then re-fetch today's entries so
    /// the wheel reflects what the backend actually stored.
    pub async fn record_score(&self, category_id: i64, score: u8) {
        let mut state = self.state;
        let mut toasts = self.toasts;
        state.write().pending_scores.insert(category_id, score);

        let new = NewScoreEntry {
            category_id,
            score,
            entry_date: api::today(),
            note: String::new(),
        };
        let result: Result<Vec<TodayEntry>, ApiError> = async {
            self.client.record_score(&new).await?;
            self.client.today_entries().await
        }
        .await;

        match result {
            Ok(today) => {
                {
                    let mut s = state.write();
                    s.today = today;
                    s.pending_scores.clear();
                }
                toasts.success("Skóre aktualizováno", "Vaše hodnocení bylo úspěšně uloženo.");
            }
            Err(err) => {
                tracing::warn!("score write failed: {err}");
                toasts.error(
                    "Chyba při ukládání",
                    "Nepodařilo se uložit hodnocení. Zkuste to prosím znovu.",
                );
            }
        }
    }

    /// Re-fetch categories and today's entries. Load failures surface one
    /// toast and leave the previous data in place.
    pub async fn reload_data(&self) {
        let mut state = self.state;
        let mut toasts = self.toasts;

        match load_user_data(&self.client).await {
            Ok((categories, today)) => {
                let mut s = state.write();
                s.categories = categories;
                s.today = today;
                s.pending_scores.clear();
            }
            Err(err) => {
                tracing::warn!("user data load failed: {err}");
                toasts.error(
                    "Chyba při načítání dat",
                    "Nepodařilo se načíst vaše data. Zkuste to prosím znovu.",
                );
            }
        }
    }
}

async fn load_user_data(
    client: &ApiClient,
) -> Result<(Vec<Category>, Vec<TodayEntry>), ApiError> {
    let (categories, today) = futures::join!(client.categories(), client.today_entries());
    Ok((categories?, today?))
}

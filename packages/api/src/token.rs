//! Bearer-token persistence.
//!
//! The access token is the only client state that survives a reload. In the
//! browser it lives in `localStorage` under a fixed key; natively each store
//! keeps its own in-memory slot so parallel tests stay isolated.

#[cfg(not(target_arch = "wasm32"))]
use std::sync::{Arc, Mutex};

/// localStorage key the backend token is persisted under.
pub const TOKEN_KEY: &str = "access_token";

#[derive(Clone, Default)]
pub struct TokenStore {
    #[cfg(not(target_arch = "wasm32"))]
    token: Arc<Mutex<Option<String>>>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(target_arch = "wasm32")]
    pub fn get(&self) -> Option<String> {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok()??;
        storage.get_item(TOKEN_KEY).ok()?
    }

    #[cfg(target_arch = "wasm32")]
    pub fn set(&self, token: Option<&str>) {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
        else {
            return;
        };
        let result = match token {
            Some(value) => storage.set_item(TOKEN_KEY, value),
            None => storage.remove_item(TOKEN_KEY),
        };
        if let Err(e) = result {
            tracing::warn!("localStorage write failed: {e:?}");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn get(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn set(&self, token: Option<&str>) {
        *self.token.lock().unwrap() = token.map(str::to_string);
    }

    pub fn clear(&self) {
        self.set(None);
    }
}

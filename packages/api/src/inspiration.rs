//! Generated-content endpoints.

use serde::Serialize;

use crate::models::{Inspiration, InspirationKind};
use crate::{ApiClient, ApiError};

#[derive(Serialize)]
struct GenerateRequest {
    #[serde(rename = "type")]
    kind: InspirationKind,
}

impl ApiClient {
    /// `GET /api/inspiration/daily` — today's piece, generated on first call
    /// and served with `is_cached` afterwards.
    pub async fn daily_inspiration(&self) -> Result<Inspiration, ApiError> {
        self.get("/api/inspiration/daily").await
    }

    /// `POST /api/inspiration/generate` — a fresh piece of the given kind.
    pub async fn generate_inspiration(
        &self,
        kind: InspirationKind,
    ) -> Result<Inspiration, ApiError> {
        self.post("/api/inspiration/generate", &GenerateRequest { kind })
            .await
    }

    /// `GET /api/inspiration/history?limit=N` — most recent pieces.
    pub async fn inspiration_history(&self, limit: u32) -> Result<Vec<Inspiration>, ApiError> {
        self.get_query("/api/inspiration/history", &[("limit", limit)])
            .await
    }

    /// `DELETE /api/inspiration/:id`.
    pub async fn delete_inspiration(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/api/inspiration/{id}")).await
    }
}

//! Journal endpoints.

use serde::Serialize;

use crate::models::{
    JournalEntry, JournalEntryUpdate, JournalFilter, JournalStats, NewJournalEntry,
};
use crate::{ApiClient, ApiError};

#[derive(Serialize)]
struct PrivacyRequest {
    is_private: bool,
}

impl ApiClient {
    /// `GET /api/journal` with optional search/date-range/limit filters.
    pub async fn journal_entries(
        &self,
        filter: &JournalFilter,
    ) -> Result<Vec<JournalEntry>, ApiError> {
        self.get_query("/api/journal", filter).await
    }

    /// `GET /api/journal/today`.
    pub async fn today_journal_entries(&self) -> Result<Vec<JournalEntry>, ApiError> {
        self.get("/api/journal/today").await
    }

    /// `POST /api/journal`.
    pub async fn create_journal_entry(
        &self,
        new: &NewJournalEntry,
    ) -> Result<JournalEntry, ApiError> {
        self.post("/api/journal", new).await
    }

    /// `PUT /api/journal/:id`.
    pub async fn update_journal_entry(
        &self,
        id: i64,
        update: &JournalEntryUpdate,
    ) -> Result<JournalEntry, ApiError> {
        self.put(&format!("/api/journal/{id}"), update).await
    }

    /// `DELETE /api/journal/:id`.
    pub async fn delete_journal_entry(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/api/journal/{id}")).await
    }

    /// `PUT /api/journal/:id/privacy` — flip an entry between private and
    /// public.
    pub async fn set_journal_privacy(&self, id: i64, is_private: bool) -> Result<(), ApiError> {
        self.put_discard(
            &format!("/api/journal/{id}/privacy"),
            &PrivacyRequest { is_private },
        )
        .await
    }

    /// `GET /api/journal/stats?days=N`.
    pub async fn journal_stats(&self, days: u32) -> Result<JournalStats, ApiError> {
        self.get_query("/api/journal/stats", &[("days", days)]).await
    }

    /// `GET /api/journal/tags` — every tag the user has used, sorted.
    pub async fn journal_tags(&self) -> Result<Vec<String>, ApiError> {
        self.get("/api/journal/tags").await
    }
}

//! Category, score-entry and statistics endpoints.

use crate::models::{
    Category, CategoryUpdate, EntryFilter, NewCategory, NewScoreEntry, ScoreEntry,
    ScoreEntryUpdate, TodayEntry, WellnessStats,
};
use crate::{ApiClient, ApiError};

impl ApiClient {
    /// `GET /api/categories` — active categories, ordered by `order_index`.
    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get("/api/categories").await
    }

    /// `POST /api/categories`.
    pub async fn create_category(&self, new: &NewCategory) -> Result<Category, ApiError> {
        self.post("/api/categories", new).await
    }

    /// `PUT /api/categories/:id`.
    pub async fn update_category(
        &self,
        id: i64,
        update: &CategoryUpdate,
    ) -> Result<Category, ApiError> {
        self.put(&format!("/api/categories/{id}"), update).await
    }

    /// `DELETE /api/categories/:id`.
    pub async fn delete_category(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/api/categories/{id}")).await
    }

    /// `GET /api/entries` with optional category/date-range/limit filters.
    pub async fn entries(&self, filter: &EntryFilter) -> Result<Vec<ScoreEntry>, ApiError> {
        self.get_query("/api/entries", filter).await
    }

    /// `GET /api/entries/today` — one row per category, entry `None` where
    /// nothing is recorded yet.
    pub async fn today_entries(&self) -> Result<Vec<TodayEntry>, ApiError> {
        self.get("/api/entries/today").await
    }

    /// `POST /api/entries`. The backend upserts on (category, date), so
    /// repeated writes for the same day overwrite the score.
    pub async fn record_score(&self, new: &NewScoreEntry) -> Result<ScoreEntry, ApiError> {
        self.post("/api/entries", new).await
    }

    /// `PUT /api/entries/:id`.
    pub async fn update_entry(
        &self,
        id: i64,
        update: &ScoreEntryUpdate,
    ) -> Result<ScoreEntry, ApiError> {
        self.put(&format!("/api/entries/{id}"), update).await
    }

    /// `DELETE /api/entries/:id`.
    pub async fn delete_entry(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/api/entries/{id}")).await
    }

    /// `GET /api/stats?days=N` — aggregates over the trailing window.
    pub async fn wellness_stats(&self, days: u32) -> Result<WellnessStats, ApiError> {
        self.get_query("/api/stats", &[("days", days)]).await
    }
}

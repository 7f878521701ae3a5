//! # Wire models for the wellness backend
//!
//! Request and response shapes exchanged with the REST backend. Decoding is
//! deliberately tolerant: anything the backend may omit is `Option` or
//! defaulted, unknown fields are ignored, and the few places where the
//! backend's field names drifted from the client's carry serde aliases.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`User`] | The authenticated account, as returned by `/auth/me`. |
//! | [`Category`] | One wellness category (name, hex color, icon key, ordering). |
//! | [`ScoreEntry`] | A 0–10 self-rating for one category on one date. |
//! | [`TodayEntry`] | Category paired with today's entry, `entry == None` when unrated. |
//! | [`JournalEntry`] | A journal record: title, content, tags, mood, privacy. |
//! | [`Inspiration`] | One piece of generated content (quote, tip, prompt, affirmation). |
//! | [`WellnessStats`] / [`JournalStats`] | Aggregates for the statistics page. |

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Decode `null` the same as a missing string field.
fn null_to_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    /// Auth origin: "demo", "google", "microsoft" or "apple".
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    /// Hex fill color for the category's wedge: "#A8B4A0"
    pub color: String,
    /// Icon key: "body", "mind", "relationships", ...
    pub icon: String,
    /// Position on the wheel, ascending clockwise from 12 o'clock.
    #[serde(default)]
    pub order_index: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub id: i64,
    pub category_id: i64,
    /// Self-rating 0–10; the backend accepts 1–10 on writes.
    pub score: u8,
    pub entry_date: NaiveDate,
    #[serde(default, deserialize_with = "null_to_empty")]
    pub note: String,
}

/// One row of `GET /api/entries/today`: every active category, with the
/// entry filled in only where the user already rated it today.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TodayEntry {
    pub category: Category,
    pub entry: Option<ScoreEntry>,
}

/// Body of `POST /api/entries`. The backend upserts on (category, date).
#[derive(Clone, Debug, Serialize)]
pub struct NewScoreEntry {
    pub category_id: i64,
    pub score: u8,
    pub entry_date: NaiveDate,
    pub note: String,
}

/// Partial update for `PUT /api/entries/:id`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ScoreEntryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Body of `POST /api/categories`.
#[derive(Clone, Debug, Serialize)]
pub struct NewCategory {
    pub name: String,
    pub color: String,
    pub icon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i64>,
}

/// Partial update for `PUT /api/categories/:id`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct CategoryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i64>,
}

/// Optional query parameters for `GET /api/entries`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct EntryFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Happy,
    Excited,
    Content,
    Peaceful,
    #[default]
    Neutral,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Happy,
        Mood::Excited,
        Mood::Content,
        Mood::Peaceful,
        Mood::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Excited => "excited",
            Mood::Content => "content",
            Mood::Peaceful => "peaceful",
            Mood::Neutral => "neutral",
        }
    }

    /// Inverse of [`as_str`](Mood::as_str); unknown keys map to `Neutral`.
    pub fn from_key(key: &str) -> Mood {
        Mood::ALL
            .into_iter()
            .find(|mood| mood.as_str() == key)
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct JournalEntry {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub mood: Mood,
    pub entry_date: NaiveDate,
    #[serde(default)]
    pub is_private: bool,
}

/// Body of `POST /api/journal`.
#[derive(Clone, Debug, Serialize)]
pub struct NewJournalEntry {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub mood: Mood,
    pub entry_date: NaiveDate,
}

/// Partial update for `PUT /api/journal/:id`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct JournalEntryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
}

/// Optional query parameters for `GET /api/journal`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct JournalFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_private: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InspirationKind {
    DailyQuote,
    WellnessTip,
    ReflectionPrompt,
    Affirmation,
}

impl InspirationKind {
    pub const ALL: [InspirationKind; 4] = [
        InspirationKind::DailyQuote,
        InspirationKind::WellnessTip,
        InspirationKind::ReflectionPrompt,
        InspirationKind::Affirmation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InspirationKind::DailyQuote => "daily_quote",
            InspirationKind::WellnessTip => "wellness_tip",
            InspirationKind::ReflectionPrompt => "reflection_prompt",
            InspirationKind::Affirmation => "affirmation",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Inspiration {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: InspirationKind,
    pub content: String,
    pub created_date: NaiveDate,
    /// True when `/daily` served a previously generated piece.
    #[serde(default)]
    pub is_cached: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BestCategory {
    pub name: String,
    pub average: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DailyScore {
    /// ISO date label; rendered as-is on the chart axis.
    pub date: String,
    pub average_score: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CategoryAverage {
    pub name: String,
    pub average: f64,
}

/// Aggregates behind `GET /api/stats?days=N`. Every field is optional: the
/// page renders whatever the backend provides and placeholders for the rest.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct WellnessStats {
    #[serde(default)]
    pub average_score: Option<f64>,
    /// Signed delta against the previous window; positive means improving.
    #[serde(default)]
    pub score_trend: Option<f64>,
    #[serde(default)]
    pub active_days: Option<u32>,
    #[serde(default)]
    pub best_category: Option<BestCategory>,
    #[serde(default)]
    pub daily_scores: Option<Vec<DailyScore>>,
    #[serde(default)]
    pub category_averages: Option<Vec<CategoryAverage>>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MoodCount {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub count: u32,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TagCount {
    /// The backend emits this field as `tag`.
    #[serde(alias = "tag")]
    pub name: String,
    pub count: u32,
}

/// Aggregates behind `GET /api/journal/stats?days=N`, as tolerant as
/// [`WellnessStats`].
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct JournalStats {
    #[serde(default)]
    pub total_entries: u32,
    #[serde(default)]
    pub entries_this_week: Option<u32>,
    #[serde(default)]
    pub private_entries: Option<u32>,
    #[serde(default)]
    pub public_entries: Option<u32>,
    #[serde(default)]
    pub average_entries_per_day: Option<f64>,
    #[serde(default)]
    pub mood_distribution: Option<Vec<MoodCount>>,
    #[serde(default)]
    pub popular_tags: Option<Vec<TagCount>>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    /// Carried on the wire but unused: the client does no token rotation.
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: User,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Health {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

//! Integration tests: the real client against an in-process mock backend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use api::{
    ApiClient, ApiError, CategoryUpdate, EntryFilter, InspirationKind, JournalEntryUpdate,
    JournalFilter, Mood, NewCategory, NewJournalEntry, NewScoreEntry, ScoreEntryUpdate,
};
use axum::extract::{Path, Query, State};
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use chrono::NaiveDate;
use serde_json::{json, Value};

/// Bind an ephemeral port, serve the router from a background task, and hand
/// back the base URL.
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn demo_user() -> Value {
    json!({
        "id": 1,
        "email": "demo@example.com",
        "name": "Demo Uživatel",
        "provider": "demo",
        "avatar_url": null
    })
}

#[tokio::test]
async fn demo_login_stores_the_access_token() {
    let app = Router::new().route(
        "/auth/demo-login",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["email"], "demo@example.com");
            assert_eq!(body["name"], "Demo Uživatel");
            Json(json!({
                "access_token": "tok-123",
                "refresh_token": "ref-456",
                "user": demo_user(),
            }))
        }),
    );
    let client = ApiClient::with_base_url(serve(app).await);
    assert!(!client.has_token());

    let login = client
        .demo_login("demo@example.com", "Demo Uživatel")
        .await
        .unwrap();

    assert_eq!(login.user.name, "Demo Uživatel");
    assert_eq!(login.refresh_token.as_deref(), Some("ref-456"));
    assert_eq!(client.token().as_deref(), Some("tok-123"));
}

#[tokio::test]
async fn requests_attach_the_bearer_token_only_when_present() {
    let seen: Arc<Mutex<Vec<Option<String>>>> = Arc::default();
    let record = seen.clone();
    let app = Router::new().route(
        "/auth/me",
        get(move |headers: HeaderMap| {
            let record = record.clone();
            async move {
                let auth = headers
                    .get(AUTHORIZATION)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string);
                record.lock().unwrap().push(auth);
                Json(demo_user())
            }
        }),
    );
    let client = ApiClient::with_base_url(serve(app).await);

    client.current_user().await.unwrap();
    client.set_token(Some("tok-789"));
    client.current_user().await.unwrap();

    let calls = seen.lock().unwrap();
    assert_eq!(calls[0], None);
    assert_eq!(calls[1].as_deref(), Some("Bearer tok-789"));
}

#[tokio::test]
async fn backend_error_bodies_become_messages() {
    let app = Router::new().route(
        "/api/entries",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Skóre musí být mezi 1 a 10"})),
            )
        }),
    );
    let client = ApiClient::with_base_url(serve(app).await);

    let err = client
        .record_score(&NewScoreEntry {
            category_id: 1,
            score: 0,
            entry_date: api::today(),
            note: String::new(),
        })
        .await
        .unwrap_err();

    match err {
        ApiError::Backend { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Skóre musí být mezi 1 a 10");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn non_json_error_bodies_fall_back_to_status() {
    let app = Router::new().route(
        "/api/categories",
        get(|| async { (StatusCode::BAD_GATEWAY, "<html>upstream dead</html>") }),
    );
    let client = ApiClient::with_base_url(serve(app).await);

    let err = client.categories().await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP status 502");
}

#[tokio::test]
async fn rejected_token_surfaces_as_backend_401() {
    let app = Router::new().route(
        "/auth/me",
        get(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({"error": "Neplatný token"})),
            )
        }),
    );
    let client = ApiClient::with_base_url(serve(app).await);
    client.set_token(Some("expired"));

    let err = client.current_user().await.unwrap_err();
    match err {
        ApiError::Backend { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Neplatný token");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn restore_session_clears_a_rejected_token() {
    let app = Router::new().route(
        "/auth/me",
        get(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({"error": "Token vypršel"})),
            )
        }),
    );
    let client = ApiClient::with_base_url(serve(app).await);
    client.set_token(Some("stale-token"));

    let result = client.restore_session().await;

    assert!(result.is_err());
    assert_eq!(client.token(), None, "rejected token must not survive startup");
}

#[tokio::test]
async fn restore_session_without_a_token_skips_the_network() {
    // No server at all: if the client tried to call out, this would error.
    let client = ApiClient::with_base_url("http://127.0.0.1:9");

    let result = client.restore_session().await.unwrap();
    assert_eq!(result, None);
}

#[tokio::test]
async fn restore_session_returns_the_user_for_a_valid_token() {
    let app = Router::new().route("/auth/me", get(|| async { Json(demo_user()) }));
    let client = ApiClient::with_base_url(serve(app).await);
    client.set_token(Some("tok-ok"));

    let user = client.restore_session().await.unwrap().unwrap();
    assert_eq!(user.email, "demo@example.com");
    assert_eq!(client.token().as_deref(), Some("tok-ok"));
}

#[tokio::test]
async fn text_responses_stay_text_and_refuse_typed_decode() {
    let app = Router::new().route("/health", get(|| async { "OK" }));
    let client = ApiClient::with_base_url(serve(app).await);

    assert_eq!(client.get_text("/health").await.unwrap(), "OK");

    let err = client.health().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn health_decodes_json() {
    let app = Router::new().route(
        "/health",
        get(|| async {
            Json(json!({"status": "healthy", "message": "Kolo Pohody API is running"}))
        }),
    );
    let client = ApiClient::with_base_url(serve(app).await);

    let health = client.health().await.unwrap();
    assert_eq!(health.status, "healthy");
}

#[tokio::test]
async fn logout_clears_token_even_without_a_server() {
    // Nothing listens on the discard port; the call fails at transport level.
    let client = ApiClient::with_base_url("http://127.0.0.1:9");
    client.set_token(Some("stale"));

    let result = client.logout().await;

    assert!(result.is_err());
    assert_eq!(client.token(), None);
}

#[tokio::test]
async fn logout_clears_token_when_server_errors() {
    let app = Router::new().route(
        "/auth/logout",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Session store down"})),
            )
        }),
    );
    let client = ApiClient::with_base_url(serve(app).await);
    client.set_token(Some("tok"));

    assert!(client.logout().await.is_err());
    assert_eq!(client.token(), None);
}

#[tokio::test]
async fn logout_clears_token_on_success() {
    let app = Router::new().route(
        "/auth/logout",
        post(|| async { Json(json!({"message": "Odhlášení proběhlo úspěšně"})) }),
    );
    let client = ApiClient::with_base_url(serve(app).await);
    client.set_token(Some("tok"));

    client.logout().await.unwrap();
    assert_eq!(client.token(), None);
}

type Scores = Arc<Mutex<HashMap<i64, (i64, u8)>>>;

async fn mock_record(State(scores): State<Scores>, Json(body): Json<Value>) -> Json<Value> {
    let category_id = body["category_id"].as_i64().unwrap();
    let score = body["score"].as_u64().unwrap() as u8;
    let id = 100 + category_id;
    scores.lock().unwrap().insert(category_id, (id, score));
    Json(json!({
        "id": id,
        "category_id": category_id,
        "score": score,
        "entry_date": body["entry_date"],
        "note": body["note"],
    }))
}

async fn mock_today(State(scores): State<Scores>) -> Json<Value> {
    let scores = scores.lock().unwrap();
    let rows: Vec<Value> = [(1, "Tělo", "#A8B4A0"), (2, "Mysl", "#8C7B6F")]
        .iter()
        .enumerate()
        .map(|(i, (id, name, color))| {
            let entry = scores.get(id).map(|(entry_id, score)| {
                json!({
                    "id": entry_id,
                    "category_id": id,
                    "score": score,
                    "entry_date": "2025-03-14",
                    "note": "",
                })
            });
            json!({
                "category": {
                    "id": id,
                    "name": name,
                    "color": color,
                    "icon": "body",
                    "order_index": i,
                },
                "entry": entry,
            })
        })
        .collect();
    Json(Value::Array(rows))
}

#[tokio::test]
async fn record_then_refetch_today_round_trip() {
    let scores: Scores = Arc::default();
    let app = Router::new()
        .route("/api/entries", post(mock_record))
        .route("/api/entries/today", get(mock_today))
        .with_state(scores);
    let client = ApiClient::with_base_url(serve(app).await);

    let before = client.today_entries().await.unwrap();
    assert!(before.iter().all(|row| row.entry.is_none()));

    client
        .record_score(&NewScoreEntry {
            category_id: 1,
            score: 7,
            entry_date: api::today(),
            note: String::new(),
        })
        .await
        .unwrap();

    let after = client.today_entries().await.unwrap();
    let rated = after.iter().find(|row| row.category.id == 1).unwrap();
    assert_eq!(rated.entry.as_ref().unwrap().score, 7);
    assert!(after.iter().find(|row| row.category.id == 2).unwrap().entry.is_none());
}

#[tokio::test]
async fn entry_filters_become_query_parameters() {
    let app = Router::new().route(
        "/api/entries",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            assert_eq!(params.get("category_id").map(String::as_str), Some("2"));
            assert_eq!(params.get("start_date").map(String::as_str), Some("2025-03-01"));
            assert_eq!(params.get("limit").map(String::as_str), Some("10"));
            assert!(!params.contains_key("end_date"));
            Json(json!([]))
        }),
    );
    let client = ApiClient::with_base_url(serve(app).await);

    let entries = client
        .entries(&EntryFilter {
            category_id: Some(2),
            start_date: NaiveDate::from_ymd_opt(2025, 3, 1),
            end_date: None,
            limit: Some(10),
        })
        .await
        .unwrap();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn journal_privacy_and_delete_hit_the_right_paths() {
    let app = Router::new()
        .route(
            "/api/journal/:id/privacy",
            put(|Path(id): Path<i64>, Json(body): Json<Value>| async move {
                assert_eq!(id, 7);
                assert_eq!(body["is_private"], json!(true));
                Json(json!({"id": id, "is_private": true, "message": "Soukromí aktualizováno"}))
            }),
        )
        .route(
            "/api/journal/:id",
            delete(|Path(id): Path<i64>| async move {
                assert_eq!(id, 7);
                Json(json!({"message": "Záznam smazán"}))
            }),
        );
    let client = ApiClient::with_base_url(serve(app).await);

    client.set_journal_privacy(7, true).await.unwrap();
    client.delete_journal_entry(7).await.unwrap();
}

#[tokio::test]
async fn generate_inspiration_sends_the_kind() {
    let app = Router::new().route(
        "/api/inspiration/generate",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["type"], "reflection_prompt");
            Json(json!({
                "id": 5,
                "type": "reflection_prompt",
                "content": "Za co jsi dnes vděčný?",
                "created_date": "2025-03-14",
            }))
        }),
    );
    let client = ApiClient::with_base_url(serve(app).await);

    let insp = client
        .generate_inspiration(InspirationKind::ReflectionPrompt)
        .await
        .unwrap();
    assert_eq!(insp.kind, InspirationKind::ReflectionPrompt);
    assert!(!insp.is_cached);
}

#[tokio::test]
async fn category_crud_hits_the_expected_paths() {
    let app = Router::new()
        .route(
            "/api/categories",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["name"], "Spánek");
                assert_eq!(body["color"], "#5A6A70");
                assert_eq!(body["icon"], "mind");
                assert!(body.get("order_index").is_none());
                Json(json!({
                    "id": 9,
                    "name": "Spánek",
                    "color": "#5A6A70",
                    "icon": "mind",
                    "order_index": 6,
                }))
            }),
        )
        .route(
            "/api/categories/:id",
            put(|Path(id): Path<i64>, Json(body): Json<Value>| async move {
                assert_eq!(id, 9);
                assert_eq!(body, json!({"name": "Odpočinek"}));
                Json(json!({
                    "id": 9,
                    "name": "Odpočinek",
                    "color": "#5A6A70",
                    "icon": "mind",
                    "order_index": 6,
                }))
            })
            .delete(|Path(id): Path<i64>| async move {
                assert_eq!(id, 9);
                Json(json!({"message": "Kategorie smazána"}))
            }),
        );
    let client = ApiClient::with_base_url(serve(app).await);

    let created = client
        .create_category(&NewCategory {
            name: "Spánek".to_string(),
            color: "#5A6A70".to_string(),
            icon: "mind".to_string(),
            order_index: None,
        })
        .await
        .unwrap();
    assert_eq!(created.id, 9);

    let renamed = client
        .update_category(
            9,
            &CategoryUpdate {
                name: Some("Odpočinek".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.name, "Odpočinek");

    client.delete_category(9).await.unwrap();
}

#[tokio::test]
async fn score_entry_update_sends_only_changed_fields() {
    let app = Router::new().route(
        "/api/entries/:id",
        put(|Path(id): Path<i64>, Json(body): Json<Value>| async move {
            assert_eq!(id, 42);
            assert_eq!(body, json!({"score": 9}));
            Json(json!({
                "id": id,
                "category_id": 1,
                "score": 9,
                "entry_date": "2025-03-14",
                "note": null,
            }))
        })
        .delete(|Path(id): Path<i64>| async move {
            assert_eq!(id, 42);
            Json(json!({"message": "Záznam smazán"}))
        }),
    );
    let client = ApiClient::with_base_url(serve(app).await);

    let updated = client
        .update_entry(
            42,
            &ScoreEntryUpdate {
                score: Some(9),
                note: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.score, 9);
    assert_eq!(updated.note, "", "null note must decode as empty");

    client.delete_entry(42).await.unwrap();
}

#[tokio::test]
async fn stats_tolerate_partial_backends() {
    let app = Router::new()
        .route(
            "/api/stats",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                assert_eq!(params.get("days").map(String::as_str), Some("90"));
                Json(json!({
                    "average_score": 6.4,
                    "daily_scores": [{"date": "2025-03-14", "average_score": 6.4}],
                }))
            }),
        )
        .route(
            "/api/journal/stats",
            get(|| async {
                Json(json!({
                    "total_entries": 12,
                    "popular_tags": [{"tag": "rodina", "count": 5}],
                }))
            }),
        );
    let client = ApiClient::with_base_url(serve(app).await);

    let wellness = client.wellness_stats(90).await.unwrap();
    assert_eq!(wellness.average_score, Some(6.4));
    assert_eq!(wellness.score_trend, None);
    assert!(wellness.best_category.is_none());
    assert_eq!(wellness.daily_scores.unwrap().len(), 1);

    let journal = client.journal_stats(90).await.unwrap();
    assert_eq!(journal.total_entries, 12);
    let tags = journal.popular_tags.unwrap();
    assert_eq!(tags[0].name, "rodina", "backend's `tag` key must map to name");
    assert!(journal.mood_distribution.is_none());
}

#[tokio::test]
async fn journal_create_and_update_round_trip() {
    let app = Router::new()
        .route(
            "/api/journal",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["title"], "Procházka");
                assert_eq!(body["mood"], "peaceful");
                assert_eq!(body["tags"], json!(["příroda"]));
                assert!(body["entry_date"].is_string());
                Json(json!({
                    "id": 3,
                    "title": "Procházka",
                    "content": "Les voněl deštěm.",
                    "tags": ["příroda"],
                    "mood": "peaceful",
                    "entry_date": body["entry_date"],
                    "is_private": false,
                }))
            }),
        )
        .route(
            "/api/journal/:id",
            put(|Path(id): Path<i64>, Json(body): Json<Value>| async move {
                assert_eq!(id, 3);
                assert!(
                    body.get("is_private").is_none(),
                    "an edit must not touch privacy"
                );
                Json(json!({
                    "id": 3,
                    "title": body["title"],
                    "content": body["content"],
                    "tags": body["tags"],
                    "mood": body["mood"],
                    "entry_date": "2025-03-14",
                    "is_private": true,
                }))
            }),
        );
    let client = ApiClient::with_base_url(serve(app).await);

    let created = client
        .create_journal_entry(&NewJournalEntry {
            title: "Procházka".to_string(),
            content: "Les voněl deštěm.".to_string(),
            tags: vec!["příroda".to_string()],
            mood: Mood::Peaceful,
            entry_date: api::today(),
        })
        .await
        .unwrap();
    assert_eq!(created.id, 3);
    assert_eq!(created.mood, Mood::Peaceful);

    let updated = client
        .update_journal_entry(
            3,
            &JournalEntryUpdate {
                title: Some("Dlouhá procházka".to_string()),
                content: Some("Les voněl deštěm.".to_string()),
                tags: Some(vec!["příroda".to_string()]),
                mood: Some(Mood::Peaceful),
                is_private: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.title, "Dlouhá procházka");
}

#[tokio::test]
async fn journal_listing_endpoints_decode() {
    let app = Router::new()
        .route(
            "/api/journal",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                assert_eq!(params.get("limit").map(String::as_str), Some("50"));
                assert_eq!(params.get("search").map(String::as_str), Some("radost"));
                Json(json!([{
                    "id": 1,
                    "title": "Ranní káva",
                    "content": "Na balkoně.",
                    "entry_date": "2025-03-14",
                }]))
            }),
        )
        .route(
            "/api/journal/today",
            get(|| async { Json(json!([])) }),
        )
        .route(
            "/api/journal/tags",
            get(|| async { Json(json!(["klid", "rodina"])) }),
        );
    let client = ApiClient::with_base_url(serve(app).await);

    let entries = client
        .journal_entries(&JournalFilter {
            search: Some("radost".to_string()),
            limit: Some(50),
            ..Default::default()
        })
        .await
        .unwrap();
    // Absent mood/tags/is_private fall back to defaults.
    assert_eq!(entries[0].mood, Mood::Neutral);
    assert!(entries[0].tags.is_empty());
    assert!(!entries[0].is_private);

    assert!(client.today_journal_entries().await.unwrap().is_empty());
    assert_eq!(client.journal_tags().await.unwrap(), vec!["klid", "rodina"]);
}

#[tokio::test]
async fn inspiration_daily_history_and_delete() {
    let app = Router::new()
        .route(
            "/api/inspiration/daily",
            get(|| async {
                Json(json!({
                    "id": 8,
                    "type": "affirmation",
                    "content": "Dnes si dovolím odpočívat.",
                    "created_date": "2025-03-13",
                    "is_cached": true,
                }))
            }),
        )
        .route(
            "/api/inspiration/history",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                assert_eq!(params.get("limit").map(String::as_str), Some("10"));
                Json(json!([{
                    "id": 8,
                    "type": "affirmation",
                    "content": "Dnes si dovolím odpočívat.",
                    "created_date": "2025-03-13",
                    "is_cached": true,
                }]))
            }),
        )
        .route(
            "/api/inspiration/:id",
            delete(|Path(id): Path<i64>| async move {
                assert_eq!(id, 8);
                Json(json!({"message": "Inspirace smazána"}))
            }),
        );
    let client = ApiClient::with_base_url(serve(app).await);

    let daily = client.daily_inspiration().await.unwrap();
    assert!(daily.is_cached);
    assert_eq!(daily.content, "Dnes si dovolím odpočívat.");

    let history = client.inspiration_history(10).await.unwrap();
    assert_eq!(history[0].kind, InspirationKind::Affirmation);
    assert!(history[0].is_cached);

    client.delete_inspiration(8).await.unwrap();
}

#[test]
fn login_redirect_url_targets_the_backend() {
    let client = ApiClient::with_base_url("https://pohoda.example.com/");
    assert_eq!(
        client.login_redirect_url("google"),
        "https://pohoda.example.com/auth/login/google"
    );
}

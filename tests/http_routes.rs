//! HTTP 路由集成测试
//!
//! 使用临时目录准备大纲、页面和静态资源，通过 `oneshot` 直接驱动路由

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::path::Path;
use syllabus_server::{create_router, AppState, SyllabusStore};
use tempfile::TempDir;
use tower::ServiceExt;

/// 测试用的 AKU 大纲
fn aku_syllabus() -> Value {
    json!([
        {
            "class": 9,
            "subjects": [
                {
                    "name": { "en": "Biology", "ur": "حیاتیات" },
                    "chapters": [
                        {
                            "title": { "en": "Cell Structure", "ur": "خلیے کی ساخت" },
                            "chapter": { "en": "Cell Structure", "ur": "خلیے کی ساخت" },
                            "mcqs": [{ "q": "m1" }, { "q": "m2" }, { "q": "m3" }],
                            "short_questions": [{ "q": "s1" }],
                            "long_questions": [{ "q": "l1" }]
                        },
                        {
                            "chapter": { "en": "Enzymes" },
                            "mcqs": [{ "q": "e1" }]
                        }
                    ]
                },
                { "name": { "en": "Civics" }, "chapters": [] },
                { "name": { "en": "Computer Science" }, "chapters": [] }
            ]
        },
        {
            "class": "11",
            "subjects": [{ "name": { "en": "Physics" } }]
        }
    ])
}

/// 准备临时目录并创建路由
fn setup() -> (TempDir, Router) {
    let dir = tempfile::tempdir().unwrap();
    let syllabus = dir.path().join("syllabus");
    let views = dir.path().join("views");
    let public = dir.path().join("public");
    for d in [&syllabus, &views, &public] {
        std::fs::create_dir_all(d).unwrap();
    }

    std::fs::write(
        syllabus.join("aku_board_syllabus.json"),
        aku_syllabus().to_string(),
    )
    .unwrap();
    std::fs::write(syllabus.join("broken_board_syllabus.json"), "[{ oops").unwrap();
    std::fs::write(views.join("Welcomepage.html"), "<h1>Welcome</h1>").unwrap();
    std::fs::write(views.join("paper-generator.html"), "<h1>Paper</h1>").unwrap();
    std::fs::write(public.join("style.css"), "body { margin: 0; }").unwrap();

    let router = build_router(&syllabus, &views, &public);
    (dir, router)
}

fn build_router(syllabus: &Path, views: &Path, public: &Path) -> Router {
    let state = AppState::new(SyllabusStore::new(syllabus), views);
    create_router(state, public)
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

async fn get_json(router: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, body) = send(router, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

async fn post_json(router: &Router, uri: &str, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    let (status, body) = send(router, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_board_data_round_trips_document() {
    let (_dir, router) = setup();

    let (status, body) = get_json(&router, "/api/data/AKU").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["class"], json!(9));
    assert_eq!(body[0]["subjects"][0]["name"]["en"], json!("Biology"));
    assert_eq!(body[0]["subjects"][0]["chapters"][0]["mcqs"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_unknown_or_broken_board_is_empty_list() {
    let (_dir, router) = setup();

    let (status, body) = get_json(&router, "/api/data/federal").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = get_json(&router, "/api/data/broken").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_subjects_for_class() {
    let (_dir, router) = setup();

    let (_, body) = get_json(&router, "/api/subjects/aku/9").await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"]["en"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Biology", "Civics", "Computer Science"]);

    let (_, body) = get_json(&router, "/api/subjects/aku/10").await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_group_subjects() {
    let (_dir, router) = setup();

    let (_, body) = get_json(&router, "/api/subjects/aku/9/Science").await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"]["en"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Biology", "Computer Science"]);

    let (_, body) = get_json(&router, "/api/subjects/aku/9/arts").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"]["en"], json!("Civics"));

    let (status, body) = get_json(&router, "/api/subjects/aku/9/commerce").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_chapters_with_url_encoded_subject() {
    let (_dir, router) = setup();

    let (_, body) = get_json(&router, "/api/chapters/aku/9/%20biology").await;
    assert_eq!(
        body,
        json!([
            { "title": "Cell Structure", "title_ur": "خلیے کی ساخت" },
            { "title": "Enzymes", "title_ur": "" }
        ])
    );

    let (_, body) = get_json(&router, "/api/chapters/aku/9/Computer%20Science").await;
    assert_eq!(body, json!([]));

    let (_, body) = get_json(&router, "/api/chapters/aku/9/Chemistry").await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_book_subjects_outline() {
    let (_dir, router) = setup();

    let (status, body) = get_json(&router, "/book/subjects/aku/9").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["name"]["en"], json!("Biology"));
    assert_eq!(body[0]["chapters"][1]["en"], json!("Enzymes"));

    let (status, body) = get_json(&router, "/book/subjects/aku/12").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Class not found" }));

    let (status, body) = get_json(&router, "/book/subjects/federal/9").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to load subjects" }));
}

#[tokio::test]
async fn test_generate_book_mcqs_only() {
    let (_dir, router) = setup();

    let request = json!({
        "board": "aku",
        "class": "9",
        "selections": [
            { "subject": "Biology", "chapters": ["Cell Structure"], "includeTypes": ["mcqs"] },
            { "subject": "Chemistry", "chapters": ["Atoms"], "includeTypes": ["mcqs"] }
        ]
    });

    let (status, body) = post_json(&router, "/book/generate", request.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], json!("Custom Book - Class 9"));
    assert_eq!(body["board"], json!("aku"));
    assert_eq!(body["class"], json!("9"));

    let subjects = body["subjects"].as_array().unwrap();
    assert_eq!(subjects.len(), 1);
    assert_eq!(subjects[0]["name"]["en"], json!("Biology"));

    let chapters = subjects[0]["chapters"].as_array().unwrap();
    assert_eq!(chapters.len(), 1);
    assert_eq!(chapters[0]["title"]["en"], json!("Cell Structure"));
    assert_eq!(
        chapters[0]["content"],
        json!({ "mcqs": [{ "q": "m1" }, { "q": "m2" }, { "q": "m3" }] })
    );
}

#[tokio::test]
async fn test_generate_book_error_statuses() {
    let (_dir, router) = setup();

    let unknown_class = json!({ "board": "aku", "class": "12", "selections": [] });
    let (status, body) = post_json(&router, "/book/generate", unknown_class.to_string()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Class not found" }));

    let missing_board = json!({ "board": "federal", "class": "9", "selections": [] });
    let (status, body) = post_json(&router, "/book/generate", missing_board.to_string()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to generate book" }));

    let malformed = json!({ "board": "aku", "class": "9" });
    let (status, body) = post_json(&router, "/book/generate", malformed.to_string()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to generate book" }));

    let (status, _) = post_json(&router, "/book/generate", "not json".to_string()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_page_routes() {
    let (_dir, router) = setup();

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (status, body) = send(&router, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"<h1>Welcome</h1>");

    let request = Request::builder().uri("/pape").body(Body::empty()).unwrap();
    let (status, body) = send(&router, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"<h1>Paper</h1>");

    let (status, body) = get_json(&router, "/ans").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to render page" }));
}

#[tokio::test]
async fn test_static_assets_fallback() {
    let (_dir, router) = setup();

    let request = Request::builder().uri("/style.css").body(Body::empty()).unwrap();
    let (status, body) = send(&router, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"body { margin: 0; }");

    let request = Request::builder().uri("/missing.png").body(Body::empty()).unwrap();
    let (status, _) = send(&router, request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

//! Grading and word-list API tests.

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;

use common::TestContext;

#[tokio::test]
async fn spell_words_include_fill_in_patterns() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/api/spell/words").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    let words = body["words"].as_array().unwrap();
    assert_eq!(words.len(), 8);
    assert_eq!(words[0]["word"], "elephant");
    assert_eq!(words[0]["fill_in_blank"], "ele____t");
}

#[tokio::test]
async fn spell_words_filter_by_difficulty() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/api/spell/words?difficulty=hard").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    let words = body["words"].as_array().unwrap();
    assert_eq!(words.len(), 1);
    assert_eq!(words[0]["word"], "knowledge");
}

#[tokio::test]
async fn bad_difficulty_is_rejected() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/api/spell/words?difficulty=impossible").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn meaning_words_are_served() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/api/spell/meanings").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    let words = body["words"].as_array().unwrap();
    assert_eq!(words.len(), 6);
    assert_eq!(words[0]["word"], "Happy");
    assert!(words[0]["keywords"].as_array().unwrap().len() > 0);
}

#[tokio::test]
async fn correct_spelling_grades_correct() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/api/grade/spelling")
        .json(&json!({ "word_id": 1, "answer": "elephant" }))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    assert_eq!(body["verdict"], "correct");
    assert_eq!(body["correct_answer"], "elephant");
}

#[tokio::test]
async fn near_miss_spelling_grades_close() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/api/grade/spelling")
        .json(&json!({ "word_id": 1, "answer": "elefant" }))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    assert_eq!(body["verdict"], "close");
    assert_eq!(body["user_answer"], "elefant");
}

#[tokio::test]
async fn wrong_spelling_grades_incorrect() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/api/grade/spelling")
        .json(&json!({ "word_id": 1, "answer": "banana" }))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["verdict"], "incorrect");
}

#[tokio::test]
async fn unknown_spell_word_is_not_found() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/api/grade/spelling")
        .json(&json!({ "word_id": 999, "answer": "elephant" }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn synonym_answer_grades_meaning_correct() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    // word 1 is "Happy"; "cheerful" is a listed synonym
    let response = server
        .post("/api/grade/meaning")
        .json(&json!({ "word_id": 1, "answer": "cheerful" }))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    assert_eq!(body["verdict"], "correct");
    assert_eq!(body["correct_meaning"], "feeling joy or pleasure");
}

#[tokio::test]
async fn genuine_attempt_earns_partial_credit() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/api/grade/meaning")
        .json(&json!({ "word_id": 2, "answer": "someone who climbs tall mountains" }))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["verdict"], "partial");
}

#[tokio::test]
async fn short_unrelated_answer_grades_incorrect() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/api/grade/meaning")
        .json(&json!({ "word_id": 1, "answer": "dunno" }))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["verdict"], "incorrect");
}

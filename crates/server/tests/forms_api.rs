mod common;

use axum::http::StatusCode;
use common::TestApp;
use db::models::{message::Message, subscriber::Subscriber};
use serde_json::json;

#[tokio::test]
async fn test_contact_form_is_stored() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/api/contact",
            json!({
                "name": "Ada",
                "email": "ada@example.com",
                "subject": "Demo",
                "message": "Can we book a call?",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Message sent successfully");

    let (status, messages) = app.get("/api/messages").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(messages.as_array().unwrap().len(), 1);
    assert_eq!(messages[0]["subject"], "Demo");
}

#[tokio::test]
async fn test_contact_form_with_missing_field_is_rejected() {
    let app = TestApp::new().await;
    let complete = json!({
        "name": "Ada",
        "email": "ada@example.com",
        "subject": "Demo",
        "message": "Hi",
    });

    for field in ["name", "email", "subject", "message"] {
        let mut body = complete.clone();
        body.as_object_mut().unwrap().remove(field);

        let (status, response) = app.post("/api/contact", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "missing {field}");
        assert_eq!(response["error"], "All fields are required");
    }

    let mut empty = complete.clone();
    empty["message"] = json!("");
    let (status, _) = app.post("/api/contact", empty).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(Message::count(&app.db.pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_duplicate_subscription_conflicts() {
    let app = TestApp::new().await;
    let body = json!({"email": "fan@genzsmart.dev"});

    let (status, response) = app.post("/api/subscribe", body.clone()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(response["message"], "Subscribed successfully");

    let (status, response) = app.post("/api/subscribe", body).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(response["error"], "Email already subscribed");

    assert_eq!(Subscriber::count(&app.db.pool).await.unwrap(), 1);

    let (status, subscribers) = app.get("/api/subscribers").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(subscribers[0]["email"], "fan@genzsmart.dev");
}

#[tokio::test]
async fn test_invalid_email_is_rejected() {
    let app = TestApp::new().await;

    let (status, response) = app
        .post("/api/subscribe", json!({"email": "no-at-sign"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "Valid email is required");

    let (status, _) = app.post("/api/subscribe", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(Subscriber::count(&app.db.pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_unreadable_contact_body_counts_as_empty_form() {
    let app = TestApp::new().await;

    let (status, body) = app.send_raw("POST", "/api/contact", None, "").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "All fields are required");

    let (status, body) = app
        .send_raw(
            "POST",
            "/api/contact",
            Some("application/x-www-form-urlencoded"),
            "name=Ada&email=ada%40example.com&subject=S&message=M",
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "All fields are required");

    let (status, body) = app
        .send_raw("POST", "/api/contact", Some("application/json"), "{not json")
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "All fields are required");

    assert_eq!(Message::count(&app.db.pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_unreadable_subscribe_body_is_invalid_email() {
    let app = TestApp::new().await;

    let (status, body) = app.post("/api/subscribe", json!({"email": 5})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Valid email is required");

    let (status, body) = app.send_raw("POST", "/api/subscribe", None, "").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Valid email is required");

    assert_eq!(Subscriber::count(&app.db.pool).await.unwrap(), 0);
}

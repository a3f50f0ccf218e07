/// Integration tests for the FieldOps API
///
/// These drive the full router end-to-end over an in-memory SQLite
/// database: registration and the password policy, login and the signed
/// session cookie, role-scoped ledger operations, and the dashboard.

mod common;

use axum::http::StatusCode;
use common::{body_json, session_cookie, TestContext};
use fieldops_shared::models::booking::ServiceBooking;
use fieldops_shared::models::user::User;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_register_then_login_establishes_client_session() {
    let ctx = TestContext::new().await.unwrap();

    ctx.register("alice", "a@x.com", "Secret1x", "client").await;

    let response = ctx
        .send(
            "POST",
            "/login",
            None,
            Some(json!({"email": "a@x.com", "password": "Secret1x"})),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(session_cookie(&response).is_some(), "Cookie should be set");

    let body = body_json(response).await;
    assert_eq!(body["role"], "client");
    assert!(body["user_id"].is_string());
}

#[tokio::test]
async fn test_register_rejects_weak_password() {
    let ctx = TestContext::new().await.unwrap();

    // No uppercase letter
    let response = ctx
        .send(
            "POST",
            "/register",
            None,
            Some(json!({
                "username": "alice",
                "email": "a@x.com",
                "password": "abcdefg1",
                "role": "client",
            })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"], "validation_error");

    // Policy failure must not create a record
    let user = User::find_by_email(&ctx.db, "a@x.com").await.unwrap();
    assert!(user.is_none());
}

#[tokio::test]
async fn test_register_rejects_short_password() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .send(
            "POST",
            "/register",
            None,
            Some(json!({
                "username": "alice",
                "email": "a@x.com",
                "password": "Abc123",
                "role": "client",
            })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_register_rejects_unknown_role() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .send(
            "POST",
            "/register",
            None,
            Some(json!({
                "username": "mallory",
                "email": "m@x.com",
                "password": "Secret1x",
                "role": "superuser",
            })),
        )
        .await;

    // Rejected at the deserialization boundary, before any handler runs
    assert!(response.status().is_client_error());

    let user = User::find_by_email(&ctx.db, "m@x.com").await.unwrap();
    assert!(user.is_none());
}

#[tokio::test]
async fn test_duplicate_email_registration_conflicts() {
    let ctx = TestContext::new().await.unwrap();

    ctx.register("alice", "a@x.com", "Secret1x", "client").await;

    let response = ctx
        .send(
            "POST",
            "/register",
            None,
            Some(json!({
                "username": "alice2",
                "email": "a@x.com",
                "password": "Secret1x",
                "role": "client",
            })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(User::count(&ctx.db).await.unwrap(), 1);
}

#[tokio::test]
async fn test_login_wrong_password_sets_no_session() {
    let ctx = TestContext::new().await.unwrap();

    ctx.register("alice", "a@x.com", "Secret1x", "client").await;

    let response = ctx
        .send(
            "POST",
            "/login",
            None,
            Some(json!({"email": "a@x.com", "password": "WrongPass1"})),
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(session_cookie(&response).is_none(), "No cookie may be set");
}

#[tokio::test]
async fn test_login_failure_message_does_not_enumerate_accounts() {
    let ctx = TestContext::new().await.unwrap();

    ctx.register("alice", "a@x.com", "Secret1x", "client").await;

    let wrong_password = ctx
        .send(
            "POST",
            "/login",
            None,
            Some(json!({"email": "a@x.com", "password": "WrongPass1"})),
        )
        .await;
    let unknown_email = ctx
        .send(
            "POST",
            "/login",
            None,
            Some(json!({"email": "nobody@x.com", "password": "Secret1x"})),
        )
        .await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

    // Same generic message either way
    let a = body_json(wrong_password).await;
    let b = body_json(unknown_email).await;
    assert_eq!(a["message"], b["message"]);
}

#[tokio::test]
async fn test_client_books_service() {
    let ctx = TestContext::new().await.unwrap();
    let cookie = ctx
        .register_and_login("alice", "a@x.com", "Secret1x", "client")
        .await;

    let response = ctx
        .send(
            "POST",
            "/book_service",
            Some(&cookie),
            Some(json!({"service_details": "Fix the boiler"})),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "Pending");
    assert_eq!(body["service_details"], "Fix the boiler");

    // client_id must come from the session
    let user = User::find_by_email(&ctx.db, "a@x.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(body["client_id"], json!(user.id));

    let bookings = ServiceBooking::list_by_client(&ctx.db, user.id)
        .await
        .unwrap();
    assert_eq!(bookings.len(), 1);
}

#[tokio::test]
async fn test_client_uploads_receipt() {
    let ctx = TestContext::new().await.unwrap();
    let cookie = ctx
        .register_and_login("alice", "a@x.com", "Secret1x", "client")
        .await;

    let response = ctx
        .send(
            "POST",
            "/upload_receipt",
            Some(&cookie),
            Some(json!({"receipt_url": "https://example.com/r/1.pdf"})),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["receipt_url"], "https://example.com/r/1.pdf");
}

#[tokio::test]
async fn test_agent_cannot_assign_task() {
    let ctx = TestContext::new().await.unwrap();
    let cookie = ctx
        .register_and_login("ag1", "ag1@x.com", "Secret1x", "agent")
        .await;

    let response = ctx
        .send(
            "POST",
            "/assign_task",
            Some(&cookie),
            Some(json!({
                "agent_id": Uuid::new_v4(),
                "task_details": "Sneaky self-assignment",
            })),
        )
        .await;

    // Role mismatch is indistinguishable from not being logged in
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_agent_cannot_book_service() {
    let ctx = TestContext::new().await.unwrap();
    let cookie = ctx
        .register_and_login("ag1", "ag1@x.com", "Secret1x", "agent")
        .await;

    let response = ctx
        .send(
            "POST",
            "/book_service",
            Some(&cookie),
            Some(json!({"service_details": "Agent booking"})),
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_assigns_task() {
    let ctx = TestContext::new().await.unwrap();

    ctx.register("ag1", "ag1@x.com", "Secret1x", "agent").await;
    let agent = User::find_by_email(&ctx.db, "ag1@x.com")
        .await
        .unwrap()
        .unwrap();

    let cookie = ctx
        .register_and_login("boss", "boss@x.com", "Secret1x", "admin")
        .await;

    let response = ctx
        .send(
            "POST",
            "/assign_task",
            Some(&cookie),
            Some(json!({
                "agent_id": agent.id,
                "task_details": "Visit the warehouse",
            })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "Assigned");
    assert_eq!(body["agent_id"], json!(agent.id));
}

#[tokio::test]
async fn test_assign_task_to_unknown_agent_conflicts() {
    let ctx = TestContext::new().await.unwrap();
    let cookie = ctx
        .register_and_login("boss", "boss@x.com", "Secret1x", "admin")
        .await;

    let response = ctx
        .send(
            "POST",
            "/assign_task",
            Some(&cookie),
            Some(json!({
                "agent_id": Uuid::new_v4(),
                "task_details": "Task for nobody",
            })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_dashboard_requires_session() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.send("GET", "/dashboard", None, None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_tampered_session_cookie_is_rejected() {
    let ctx = TestContext::new().await.unwrap();
    let cookie = ctx
        .register_and_login("alice", "a@x.com", "Secret1x", "client")
        .await;

    // Corrupt the signed value
    let mut tampered = cookie.clone();
    tampered.push('x');

    let response = ctx.send("GET", "/dashboard", Some(&tampered), None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_then_dashboard_is_unauthorized() {
    let ctx = TestContext::new().await.unwrap();
    let cookie = ctx
        .register_and_login("alice", "a@x.com", "Secret1x", "client")
        .await;

    // Session works before logout
    let response = ctx.send("GET", "/dashboard", Some(&cookie), None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = ctx.send("GET", "/logout", Some(&cookie), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let cleared = response
        .headers()
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.split(';').next().unwrap_or("").to_string())
        .expect("Logout should clear the cookie");

    let response = ctx.send("GET", "/dashboard", Some(&cleared), None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_without_session_is_a_noop() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.send("GET", "/logout", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_dashboard_views_by_role() {
    let ctx = TestContext::new().await.unwrap();

    // Client sees own bookings and receipts
    let client_cookie = ctx
        .register_and_login("alice", "a@x.com", "Secret1x", "client")
        .await;
    ctx.send(
        "POST",
        "/book_service",
        Some(&client_cookie),
        Some(json!({"service_details": "Fix the boiler"})),
    )
    .await;

    let response = ctx
        .send("GET", "/dashboard", Some(&client_cookie), None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["role"], "client");
    assert_eq!(body["bookings"].as_array().unwrap().len(), 1);
    assert_eq!(body["receipts"].as_array().unwrap().len(), 0);
    assert!(body.get("tasks").is_none());

    // Agent sees own assignments
    let agent_cookie = ctx
        .register_and_login("ag1", "ag1@x.com", "Secret1x", "agent")
        .await;
    let agent = User::find_by_email(&ctx.db, "ag1@x.com")
        .await
        .unwrap()
        .unwrap();

    let admin_cookie = ctx
        .register_and_login("boss", "boss@x.com", "Secret1x", "admin")
        .await;
    ctx.send(
        "POST",
        "/assign_task",
        Some(&admin_cookie),
        Some(json!({"agent_id": agent.id, "task_details": "Visit the warehouse"})),
    )
    .await;

    let response = ctx
        .send("GET", "/dashboard", Some(&agent_cookie), None)
        .await;
    let body = body_json(response).await;
    assert_eq!(body["role"], "agent");
    assert_eq!(body["tasks"].as_array().unwrap().len(), 1);

    // Admin sees the agent roster and recent assignments
    let response = ctx
        .send("GET", "/dashboard", Some(&admin_cookie), None)
        .await;
    let body = body_json(response).await;
    assert_eq!(body["role"], "admin");
    assert_eq!(body["agents"].as_array().unwrap().len(), 1);
    assert_eq!(body["agents"][0]["username"], "ag1");
    assert!(body["agents"][0].get("password_hash").is_none());
    assert_eq!(body["recent_assignments"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_health_and_index() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.send("GET", "/health", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");

    let response = ctx.send("GET", "/", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["service"], "fieldops");
}

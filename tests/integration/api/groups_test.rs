//! Group and note API integration tests
//!
//! Drives `/api` end to end over the memory store.

use axum::http::StatusCode;
use groupnotes::shared::{GroupSummary, Note, User, UserId};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{assert_error, assert_rejected_body, generate_test_token, group, register_unique_user, spawn_app, TestApp};

/// Seed a user and return it with a token for that user
async fn seeded(app: &TestApp, groups: Vec<groupnotes::shared::Group>) -> (User, String) {
    let user = app.seed_user("seeded@example.com", groups).await;
    let token = generate_test_token(&user.id, &user.email);
    (user, token)
}

#[tokio::test]
async fn test_list_groups_returns_summaries_in_order() {
    let app = spawn_app();
    let (user, token) = seeded(&app, vec![group(1, "Work", &["a"]), group(2, "Home", &[])]).await;

    let response = app
        .server
        .get(&format!("/api/{}", user.id))
        .authorization_bearer(&token)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!([
            { "groupId": 1, "groupName": "Work", "groupColor": "blue", "shortForm": "W" },
            { "groupId": 2, "groupName": "Home", "groupColor": "blue", "shortForm": "H" },
        ])
    );
}

#[tokio::test]
async fn test_list_notes_is_positional() {
    let app = spawn_app();
    let (user, token) = seeded(
        &app,
        vec![group(1, "Work", &["a", "b"]), group(2, "Home", &[]), group(3, "Misc", &["c"])],
    )
    .await;

    let response = app
        .server
        .get(&format!("/api/{}/notes", user.id))
        .authorization_bearer(&token)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body, json!([["a", "b"], [], ["c"]]));
}

#[tokio::test]
async fn test_reads_reject_malformed_user_id() {
    let app = spawn_app();
    let token = generate_test_token(&UserId::generate(), "x@example.com");

    for path in ["/api/not-an-id", "/api/0123456789ABCDEF0123456G"] {
        let response = app.server.get(path).authorization_bearer(&token).await;
        assert_error(&response, StatusCode::BAD_REQUEST, "invalid user ID format");
    }
    let response = app.server.get("/api/not-an-id/notes").authorization_bearer(&token).await;
    assert_error(&response, StatusCode::BAD_REQUEST, "Invalid user ID format");
    assert_eq!(app.store.operations(), 0);
}

#[tokio::test]
async fn test_unknown_user_is_not_found_everywhere() {
    let app = spawn_app();
    let missing = UserId::generate();
    let token = generate_test_token(&missing, "x@example.com");

    let response = app.server.get(&format!("/api/{}", missing)).authorization_bearer(&token).await;
    assert_error(&response, StatusCode::NOT_FOUND, "User not found");

    let response = app
        .server
        .get(&format!("/api/{}/notes", missing))
        .authorization_bearer(&token)
        .await;
    assert_error(&response, StatusCode::NOT_FOUND, "User not found");

    let response = app
        .server
        .post("/api")
        .authorization_bearer(&token)
        .json(&json!({
            "userId": missing.to_string(),
            "groupName": "Work",
            "groupColor": "red",
            "shortForm": "W"
        }))
        .await;
    assert_error(&response, StatusCode::NOT_FOUND, "User not found");

    let response = app
        .server
        .patch(&format!("/api/{}/1", missing))
        .authorization_bearer(&token)
        .json(&json!({ "notes": "hello" }))
        .await;
    assert_error(&response, StatusCode::NOT_FOUND, "Group not found or no change made");

    let response = app
        .server
        .delete(&format!("/api/{}/1", missing))
        .authorization_bearer(&token)
        .await;
    assert_error(&response, StatusCode::NOT_FOUND, "Group not found");
}

#[tokio::test]
async fn test_create_group_assigns_next_id_and_round_trips() {
    let app = spawn_app();
    let user = register_unique_user(&app.server).await;

    let response = app
        .server
        .post("/api")
        .authorization_bearer(&user.token)
        .json(&json!({
            "userId": user.id,
            "groupName": "Recipes",
            "groupColor": "#ff8800",
            "shortForm": "RC",
            "notes": [{ "text": "pancakes" }, "eggs"]
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let created: User = response.json();
    assert_eq!(created.id.to_string(), user.id);
    assert_eq!(created.groups.len(), 1);
    assert_eq!(created.groups[0].group_id, 1);
    assert_eq!(
        created.groups[0].notes,
        vec![Note::new(json!({ "text": "pancakes" })), Note::from("eggs")]
    );

    let second = app
        .server
        .post("/api")
        .authorization_bearer(&user.token)
        .json(&json!({
            "userId": user.id,
            "groupName": "Travel",
            "groupColor": "green",
            "shortForm": "TR"
        }))
        .await;
    let second: User = second.json();
    assert_eq!(second.groups[1].group_id, 2);
    assert!(second.groups[1].notes.is_empty());

    let summaries: Vec<GroupSummary> = app
        .server
        .get(&format!("/api/{}", user.id))
        .authorization_bearer(&user.token)
        .await
        .json();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].group_name, "Recipes");
    assert_eq!(summaries[0].group_color, "#ff8800");
    assert_eq!(summaries[0].short_form, "RC");
    assert_eq!(summaries[1].group_id, 2);
}

#[tokio::test]
async fn test_create_group_requires_fields() {
    let app = spawn_app();
    let user = register_unique_user(&app.server).await;

    let response = app
        .server
        .post("/api")
        .authorization_bearer(&user.token)
        .json(&json!({ "userId": user.id, "groupName": "Work", "shortForm": "W" }))
        .await;
    assert_error(&response, StatusCode::BAD_REQUEST, "groupColor is required");

    let response = app
        .server
        .post("/api")
        .authorization_bearer(&user.token)
        .json(&json!({ "userId": "xyz", "groupName": "Work", "groupColor": "red", "shortForm": "W" }))
        .await;
    assert_error(&response, StatusCode::BAD_REQUEST, "invalid user ID format");
}

#[tokio::test]
async fn test_malformed_bodies_get_json_errors() {
    let app = spawn_app();
    let user = register_unique_user(&app.server).await;

    let response = app
        .server
        .post("/api")
        .authorization_bearer(&user.token)
        .json(&json!({ "userId": user.id, "groupName": 5, "groupColor": "red", "shortForm": "W" }))
        .await;
    assert_rejected_body(&response, "groupName");

    let response = app
        .server
        .post("/api")
        .authorization_bearer(&user.token)
        .json(&json!({ "userId": user.id, "groupName": "Work", "groupColor": "red", "shortForm": "W", "notes": "x" }))
        .await;
    assert_rejected_body(&response, "notes");

    // Nothing was stored by the rejected requests
    let response = app
        .server
        .get(&format!("/api/{}", user.id))
        .authorization_bearer(&user.token)
        .await;
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_append_note_returns_all_groups_keyed_by_offset() {
    let app = spawn_app();
    let (user, token) = seeded(&app, vec![group(1, "Work", &["a"]), group(2, "Home", &["x"])]).await;

    let response = app
        .server
        .post(&format!("/api/{}/1", user.id))
        .authorization_bearer(&token)
        .json(&json!({ "notes": "a" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "Note added successfully");
    // Duplicates are kept; untouched groups are included
    assert_eq!(body["data"], json!({ "0": ["a", "a"], "1": ["x"] }));
}

#[tokio::test]
async fn test_append_note_errors() {
    let app = spawn_app();
    let (user, token) = seeded(&app, vec![group(1, "Work", &[])]).await;

    let response = app
        .server
        .patch(&format!("/api/{}/1", user.id))
        .authorization_bearer(&token)
        .json(&json!({}))
        .await;
    assert_error(&response, StatusCode::BAD_REQUEST, "notes is required");

    for group_id in ["7", "abc"] {
        let response = app
            .server
            .patch(&format!("/api/{}/{}", user.id, group_id))
            .authorization_bearer(&token)
            .json(&json!({ "notes": "n" }))
            .await;
        assert_error(&response, StatusCode::NOT_FOUND, "Group not found or no change made");
    }

    let response = app
        .server
        .patch("/api/bad-id/1")
        .authorization_bearer(&token)
        .json(&json!({ "notes": "n" }))
        .await;
    assert_error(&response, StatusCode::BAD_REQUEST, "invalid user ID format");
}

#[tokio::test]
async fn test_delete_group_leaves_others_untouched() {
    let app = spawn_app();
    let (user, token) = seeded(
        &app,
        vec![group(1, "Work", &["a"]), group(2, "Home", &["b"]), group(3, "Misc", &["c"])],
    )
    .await;

    let response = app
        .server
        .delete(&format!("/api/{}/2", user.id))
        .authorization_bearer(&token)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "message": "Group deleted successfully" }));

    let summaries: Vec<GroupSummary> = app
        .server
        .get(&format!("/api/{}", user.id))
        .authorization_bearer(&token)
        .await
        .json();
    let ids: Vec<i64> = summaries.iter().map(|g| g.group_id).collect();
    assert_eq!(ids, vec![1, 3]);

    let notes: Value = app
        .server
        .get(&format!("/api/{}/notes", user.id))
        .authorization_bearer(&token)
        .await
        .json();
    assert_eq!(notes, json!([["a"], ["c"]]));

    let again = app
        .server
        .delete(&format!("/api/{}/2", user.id))
        .authorization_bearer(&token)
        .await;
    assert_error(&again, StatusCode::NOT_FOUND, "Group not found");
}

/// User has groups 1 (["a"]) and 2 ([]). Append "b" to 2, delete 1, then
/// create: the new group reuses id 2.
#[tokio::test]
async fn test_group_id_reuse_after_delete() {
    let app = spawn_app();
    let (user, token) = seeded(&app, vec![group(1, "One", &["a"]), group(2, "Two", &[])]).await;

    let appended = app
        .server
        .patch(&format!("/api/{}/2", user.id))
        .authorization_bearer(&token)
        .json(&json!({ "notes": "b" }))
        .await;
    assert_eq!(appended.json::<Value>()["data"], json!({ "0": ["a"], "1": ["b"] }));

    let deleted = app
        .server
        .delete(&format!("/api/{}/1", user.id))
        .authorization_bearer(&token)
        .await;
    assert_eq!(deleted.status_code(), StatusCode::OK);

    let remaining: Value = app
        .server
        .get(&format!("/api/{}/notes", user.id))
        .authorization_bearer(&token)
        .await
        .json();
    assert_eq!(remaining, json!([["b"]]));

    let created: User = app
        .server
        .post("/api")
        .authorization_bearer(&token)
        .json(&json!({
            "userId": user.id.to_string(),
            "groupName": "Three",
            "groupColor": "red",
            "shortForm": "T"
        }))
        .await
        .json();
    let ids: Vec<i64> = created.groups.iter().map(|g| g.group_id).collect();
    assert_eq!(ids, vec![2, 2]);
}

#[tokio::test]
async fn test_api_requires_token_for_every_route() {
    let app = spawn_app();
    let id = UserId::generate();

    assert_eq!(app.server.get(&format!("/api/{}", id)).await.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        app.server.get(&format!("/api/{}/notes", id)).await.status_code(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(app.server.post("/api").json(&json!({})).await.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        app.server.delete(&format!("/api/{}/1", id)).await.status_code(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(app.store.operations(), 0);
}

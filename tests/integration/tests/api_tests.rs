//! API Integration Tests
//!
//! Each test starts its own server on a loopback port with a fresh data file
//! in a temporary directory.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, listing_body, ErrorBody, FollowRequest, ListingEnvelope,
    ListingList, MessageRequest, TestServer, ADMIN_KEY,
};
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn create_listing(server: &TestServer, body: Value) -> String {
    let response = server.post_admin("/api/admin/listings", &body).await.unwrap();
    let created: ListingEnvelope = assert_json(response, StatusCode::CREATED).await.unwrap();
    created.listing.id
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/health").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/health").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Listing Tests
// ============================================================================

#[tokio::test]
async fn test_message_raises_interest_score() {
    let server = TestServer::start().await.unwrap();
    let id = create_listing(&server, listing_body("Aurora 48")).await;

    let response = server
        .post(
            &format!("/api/public/listings/{id}/messages"),
            &MessageRequest::sample(),
        )
        .await
        .unwrap();
    let accepted: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(accepted["id"].as_str().is_some());
    assert!(accepted["message"].as_str().is_some());

    let response = server.get("/api/public/listings").await.unwrap();
    let list: ListingList = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.count, 1);
    assert_eq!(list.listings[0].stats.messages, 1);
    assert_eq!(list.listings[0].interest_score, 3);

    // the write reached the data file
    let document = server.document().unwrap();
    assert_eq!(document["messages"].as_array().unwrap().len(), 1);
    assert_eq!(document["messages"][0]["ip"], "127.0.0.1");
}

#[tokio::test]
async fn test_create_normalizes_fields() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .post_admin(
            "/api/admin/listings",
            &json!({"title": "  Meltem  ", "segment": "Bakim", "year": "2007", "highlights": ["a", " "]}),
        )
        .await
        .unwrap();
    let created: ListingEnvelope = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(created.listing.title, "Meltem");
    assert_eq!(created.listing.segment, "maintenance");
    assert_eq!(created.listing.year, Some(2007));
    assert_eq!(created.listing.status, "planned");
    assert_eq!(created.listing.highlights, vec!["a"]);
    assert_eq!(created.listing.interest_score, 0);
}

#[tokio::test]
async fn test_create_requires_title() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .post_admin("/api/admin/listings", &json!({"title": ""}))
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error, "title is required");

    let response = server.get_admin("/api/admin/listings").await.unwrap();
    let list: ListingList = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.count, 0);
}

#[tokio::test]
async fn test_update_and_get() {
    let server = TestServer::start().await.unwrap();
    let id = create_listing(&server, listing_body("Poyraz")).await;

    let response = server
        .patch_admin(
            &format!("/api/admin/listings/{id}"),
            &json!({"status": "launched", "location": null}),
        )
        .await
        .unwrap();
    let updated: ListingEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.listing.status, "launched");
    assert_eq!(updated.listing.location, "");
    assert_eq!(updated.listing.title, "Poyraz");

    let response = server
        .get_admin(&format!("/api/admin/listings/{id}"))
        .await
        .unwrap();
    let fetched: ListingEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.listing.status, "launched");
}

#[tokio::test]
async fn test_update_unknown_listing() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .patch_admin("/api/admin/listings/lst_missing", &json!({"title": ""}))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_sort_orders() {
    let server = TestServer::start().await.unwrap();
    let first = create_listing(&server, listing_body("First")).await;
    let second = create_listing(&server, listing_body("Second")).await;

    let response = server
        .post(
            &format!("/api/public/listings/{first}/follow"),
            &FollowRequest::new("fan@example.com"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.get("/api/public/listings").await.unwrap();
    let list: ListingList = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.titles(), vec!["First", "Second"]);

    let response = server.get("/api/public/listings?sort=recent").await.unwrap();
    let list: ListingList = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.titles()[0], "First");

    let response = server
        .patch_admin(
            &format!("/api/admin/listings/{second}"),
            &json!({"description": "Updated"}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/api/public/listings?sort=recent").await.unwrap();
    let list: ListingList = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.titles(), vec!["Second", "First"]);
}

#[tokio::test]
async fn test_segment_and_search_filters() {
    let server = TestServer::start().await.unwrap();
    create_listing(&server, listing_body("Aurora 48")).await;
    create_listing(
        &server,
        json!({"title": "Old Gulet", "segment": "refit", "location": "Fethiye"}),
    )
    .await;

    let response = server.get("/api/public/listings?segment=refit").await.unwrap();
    let list: ListingList = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.titles(), vec!["Old Gulet"]);

    let response = server.get("/api/public/listings?search=BODRUM").await.unwrap();
    let list: ListingList = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.titles(), vec!["Aurora 48"]);

    let response = server.get("/api/public/listings?segment=all").await.unwrap();
    let list: ListingList = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.count, 2);
}

// ============================================================================
// Engagement Tests
// ============================================================================

#[tokio::test]
async fn test_message_validation_and_missing_listing() {
    let server = TestServer::start().await.unwrap();
    let id = create_listing(&server, listing_body("Aurora 48")).await;

    let response = server
        .post(
            &format!("/api/public/listings/{id}/messages"),
            &json!({"name": "Ana", "email": "ana@example.com"}),
        )
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error, "message is required");

    let response = server
        .post("/api/public/listings/lst_missing/messages", &json!({}))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_comments_show_on_detail() {
    let server = TestServer::start().await.unwrap();
    let id = create_listing(&server, listing_body("Aurora 48")).await;

    let response = server
        .post(
            &format!("/api/public/listings/{id}/comments"),
            &json!({"name": "Deniz", "message": "Lovely lines"}),
        )
        .await
        .unwrap();
    let created: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created["comment"]["message"], "Lovely lines");

    let response = server.get(&format!("/api/public/listings/{id}")).await.unwrap();
    let detail: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail["comments"].as_array().unwrap().len(), 1);
    assert_eq!(detail["listing"]["interestScore"], 1);

    let response = server.get_admin("/api/admin/comments").await.unwrap();
    let inbox: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(inbox["count"], 1);
    assert_eq!(inbox["comments"][0]["listingTitle"], "Aurora 48");
}

#[tokio::test]
async fn test_follow_twice_and_unfollow() {
    let server = TestServer::start().await.unwrap();
    let id = create_listing(&server, listing_body("Aurora 48")).await;
    let path = format!("/api/public/listings/{id}/follow");

    let response = server
        .post(&path, &FollowRequest::new("Fan@Example.com"))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(body, json!({"followed": true}));

    let response = server
        .post(&path, &FollowRequest::new("fan@example.com"))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["followed"], false);
    assert!(body["message"].as_str().is_some());

    let response = server
        .delete_json(&path, &FollowRequest::new("fan@example.com"))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, json!({"unfollowed": true}));

    let response = server
        .delete_json(&path, &FollowRequest::new("fan@example.com"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.get(&format!("/api/public/listings/{id}")).await.unwrap();
    let detail: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail["listing"]["stats"]["follows"], 0);
}

#[tokio::test]
async fn test_delete_cascades() {
    let server = TestServer::start().await.unwrap();
    let id = create_listing(&server, listing_body("Aurora 48")).await;
    let other = create_listing(&server, listing_body("Keeper")).await;

    for listing in [&id, &other] {
        let response = server
            .post(
                &format!("/api/public/listings/{listing}/messages"),
                &MessageRequest::sample(),
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }
    let response = server
        .post(
            &format!("/api/public/listings/{id}/follow"),
            &FollowRequest::new("fan@example.com"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_admin(&format!("/api/admin/listings/{id}"))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, json!({"deleted": true}));

    let response = server.get(&format!("/api/public/listings/{id}")).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.get_admin("/api/admin/messages").await.unwrap();
    let inbox: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(inbox["count"], 1);
    assert_eq!(inbox["messages"][0]["listingId"], other.as_str());

    let document = server.document().unwrap();
    assert!(document["follows"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_inbox_filter_by_listing() {
    let server = TestServer::start().await.unwrap();
    let first = create_listing(&server, listing_body("First")).await;
    let second = create_listing(&server, listing_body("Second")).await;

    for listing in [&first, &second, &second] {
        server
            .post(
                &format!("/api/public/listings/{listing}/messages"),
                &MessageRequest::sample(),
            )
            .await
            .unwrap();
    }

    let response = server
        .get_admin(&format!("/api/admin/messages?listingId={second}"))
        .await
        .unwrap();
    let inbox: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(inbox["count"], 2);
    assert_eq!(inbox["messages"][0]["listingTitle"], "Second");
}

// ============================================================================
// Access Tests
// ============================================================================

#[tokio::test]
async fn test_admin_rejects_unknown_key_without_side_effects() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .client
        .post(format!("{}/api/admin/listings", server.base_url()))
        .header("x-api-key", "not-the-key")
        .json(&listing_body("Sneaky"))
        .send()
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error.code, "FORBIDDEN");

    let response = server.get("/api/public/listings").await.unwrap();
    let list: ListingList = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.count, 0);
}

#[tokio::test]
async fn test_bearer_token_is_accepted() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .client
        .get(format!("{}/api/admin/listings", server.base_url()))
        .header("Authorization", format!("Bearer {ADMIN_KEY}"))
        .send()
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_whitelisted_address() {
    let server = TestServer::start_with(&[("WHITELIST_IPS", "127.0.0.1")])
        .await
        .unwrap();
    let response = server
        .client
        .get(format!("{}/api/admin/messages", server.base_url()))
        .send()
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_public_write_gate() {
    let server = TestServer::start_with(&[("PUBLIC_WRITE_REQUIRES_WHITELIST", "true")])
        .await
        .unwrap();
    let id = create_listing(&server, listing_body("Aurora 48")).await;
    let path = format!("/api/public/listings/{id}/comments");
    let comment = json!({"name": "Deniz", "message": "Hi"});

    let response = server.post(&path, &comment).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.post_admin(&path, &comment).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // reads stay open
    let response = server.get("/api/public/listings").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_keygen_requires_allowed_peer() {
    let server = TestServer::start().await.unwrap();
    let response = server.post_admin("/api/admin/keys", &json!({})).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error.code, "KEYGEN_ADDRESS_DENIED");

    let server = TestServer::start_with(&[("KEYGEN_ALLOWED_IPS", "127.0.0.1")])
        .await
        .unwrap();
    let response = server.post_admin("/api/admin/keys", &json!({})).await.unwrap();
    let key: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    let raw = key["apiKey"].as_str().unwrap();
    assert!(raw.starts_with("ykp_"));
    assert_eq!(key["sha256"].as_str().unwrap().len(), 64);
}

#[tokio::test]
async fn test_forwarded_address_does_not_unlock_keygen() {
    let server = TestServer::start_with(&[("KEYGEN_ALLOWED_IPS", "10.9.9.9")])
        .await
        .unwrap();
    let response = server
        .client
        .post(format!("{}/api/admin/keys", server.base_url()))
        .header("x-api-key", ADMIN_KEY)
        .header("x-forwarded-for", "10.9.9.9")
        .send()
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

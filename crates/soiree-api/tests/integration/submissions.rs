//! Form submission endpoints and the filtered events listing.

use crate::common::{TestSite, body_text};
use axum::http::StatusCode;
use axum::http::header::LOCATION;
use serde_json::json;
use tower::ServiceExt;

// -----------------------------------------------------------------------------
// POST /contactone
// -----------------------------------------------------------------------------

#[tokio::test]
async fn test_contact_submission_saves_and_confirms() {
    let site = TestSite::new().await;

    let response = site
        .post_json("/contactone", json!({"name": "Dana", "email": "dana@example.com"}))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "Contact Data Saved Successfully!");

    let stored = site.stored("contacts.json");
    assert_eq!(stored[0]["name"], json!("Dana"));
    assert_eq!(stored[0]["email"], json!("dana@example.com"));
}

#[tokio::test]
async fn test_contact_accepts_arbitrary_fields() {
    let site = TestSite::new().await;

    let response = site
        .post_form("/contactone", "anything=goes&even=this")
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let stored = site.stored("contacts.json");
    assert_eq!(stored[0]["anything"], json!("goes"));
}

#[tokio::test]
async fn test_contact_submissions_preserve_order() {
    let site = TestSite::new().await;

    for n in 1..=3 {
        site.post_json("/contactone", json!({"n": n})).await;
    }

    let stored = site.stored("contacts.json");
    let stored = stored.as_array().unwrap();
    assert_eq!(stored.len(), 3);
    for (i, record) in stored.iter().enumerate() {
        assert_eq!(record["n"], json!(i + 1));
    }
}

// -----------------------------------------------------------------------------
// POST /formdata
// -----------------------------------------------------------------------------

#[tokio::test]
async fn test_event_submission_saves_and_confirms() {
    let site = TestSite::new().await;

    let response = site
        .post_json(
            "/formdata",
            json!({
                "eventPurpose": "Wedding",
                "guests": 50,
                "date": "2025-06-01",
                "budget": 10000,
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "Event Data Saved Successfully!");
}

#[tokio::test]
async fn test_event_submission_missing_fields_is_400() {
    let site = TestSite::new().await;

    let response = site.post_json("/formdata", json!({"guests": 5})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_text(response).await,
        "Missing required fields: eventPurpose, date, budget"
    );

    // Nothing was persisted.
    assert_eq!(site.stored("events.json"), json!([]));
}

#[tokio::test]
async fn test_event_submission_empty_values_count_as_missing() {
    let site = TestSite::new().await;

    let response = site
        .post_form("/formdata", "eventPurpose=&guests=50&date=2025-06-01&budget=")
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_text(response).await,
        "Missing required fields: eventPurpose, budget"
    );
}

#[tokio::test]
async fn test_event_submission_keeps_extra_fields() {
    let site = TestSite::new().await;

    site.post_json(
        "/formdata",
        json!({
            "eventPurpose": "Gala",
            "guests": 120,
            "date": "2026-01-15",
            "budget": 50000,
            "theme": "masquerade",
        }),
    )
    .await;

    let stored = site.stored("events.json");
    assert_eq!(stored[0]["theme"], json!("masquerade"));
}

// -----------------------------------------------------------------------------
// GET /events
// -----------------------------------------------------------------------------

#[tokio::test]
async fn test_events_listing_unfiltered() {
    let site = TestSite::new().await;
    for purpose in ["Wedding", "Gala"] {
        site.post_json(
            "/formdata",
            json!({
                "eventPurpose": purpose,
                "guests": 10,
                "date": "2025-06-01",
                "budget": 1000,
            }),
        )
        .await;
    }

    let response = site.get("/events").await;
    assert_eq!(response.status(), StatusCode::OK);
    let listed: serde_json::Value =
        serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_events_filter_is_case_insensitive_end_to_end() {
    let site = TestSite::new().await;
    site.post_json(
        "/formdata",
        json!({
            "eventPurpose": "Wedding",
            "guests": 50,
            "date": "2025-06-01",
            "budget": 10000,
        }),
    )
    .await;

    let response = site.get("/events?eventPurpose=wedding").await;
    assert_eq!(response.status(), StatusCode::OK);
    let listed: serde_json::Value =
        serde_json::from_str(&body_text(response).await).unwrap();
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["eventPurpose"], json!("Wedding"));
}

#[tokio::test]
async fn test_events_filter_combines_criteria_with_and() {
    let site = TestSite::new().await;
    for (purpose, guests) in [("Wedding", 50), ("Wedding", 80), ("Gala", 50)] {
        site.post_json(
            "/formdata",
            json!({
                "eventPurpose": purpose,
                "guests": guests,
                "date": "2025-06-01",
                "budget": 1000,
            }),
        )
        .await;
    }

    let response = site.get("/events?eventPurpose=wedding&guests=50").await;
    let listed: serde_json::Value =
        serde_json::from_str(&body_text(response).await).unwrap();
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["guests"], json!(50));
}

#[tokio::test]
async fn test_events_filter_ignores_empty_parameter_values() {
    let site = TestSite::new().await;
    site.post_json(
        "/formdata",
        json!({
            "eventPurpose": "Wedding",
            "guests": 50,
            "date": "2025-06-01",
            "budget": 1000,
        }),
    )
    .await;

    let response = site.get("/events?eventPurpose=").await;
    let listed: serde_json::Value =
        serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_events_corrupt_collection_is_500() {
    let site = TestSite::new().await;
    std::fs::write(site.data_dir.join("events.json"), "not json").unwrap();

    let response = site.get("/events").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_text(response).await.contains("events.json"));
}

// -----------------------------------------------------------------------------
// POST /dashboard-submit
// -----------------------------------------------------------------------------

#[tokio::test]
async fn test_dashboard_submission_redirects_to_dashboard() {
    let site = TestSite::new().await;

    let response = site
        .post_form("/dashboard-submit", "client=Dana&status=new")
        .await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers().get(LOCATION).and_then(|v| v.to_str().ok()),
        Some("/dashboard")
    );

    let stored = site.stored("dashboard.json");
    assert_eq!(stored[0]["client"], json!("Dana"));
}

// -----------------------------------------------------------------------------
// Malformed bodies
// -----------------------------------------------------------------------------

#[tokio::test]
async fn test_malformed_json_body_is_400() {
    let site = TestSite::new().await;

    let response = site
        .router
        .clone()
        .oneshot(
            axum::http::Request::builder()
                .method("POST")
                .uri("/contactone")
                .header("content-type", "application/json")
                .body(axum::body::Body::from("{broken"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

//! Medication API behavior tests.
//!
//! Exercises the five medication endpoints end to end over the in-memory
//! backend:
//! - Status codes and bodies for success paths
//! - Pagination defaults and page boundaries
//! - Plain-text error bodies for every failure class
//! - Storage failures surfacing through each endpoint

mod common;

use common::assertions::{assert_fields, assert_json, assert_plain_error, assert_status};
use common::fixtures::{aspirin, catalogue, medication_body};
use common::harness::RestTestHarness;
use medication_persistence::types::Medication;
use medication_rest::handlers::MessageResponse;
use serde_json::json;

// ============================================================================
// Full lifecycle
// ============================================================================

#[tokio::test]
async fn test_medication_lifecycle() {
    let harness = RestTestHarness::new();

    // Create
    let response = harness.post("/medications", aspirin()).await;
    assert_status(&response, 201);
    assert_json(&response);
    let created: Medication = response.json();
    assert!(created.id > 0);
    assert_fields(&created, "Aspirin", "500mg", "tablet");
    assert_eq!(created.created_at, created.updated_at);

    // Read
    let path = format!("/medications/{}", created.id);
    let response = harness.get(&path).await;
    assert_status(&response, 200);
    let fetched: Medication = response.json();
    assert_eq!(fetched, created);

    // Update
    let response = harness
        .put(&path, medication_body("Aspirin", "1000mg", "tablet"))
        .await;
    assert_status(&response, 200);
    assert_eq!(
        response.json::<MessageResponse>(),
        MessageResponse::new("successfully updated")
    );

    let updated: Medication = harness.get(&path).await.json();
    assert_eq!(updated.id, created.id);
    assert_fields(&updated, "Aspirin", "1000mg", "tablet");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);

    // Delete
    let response = harness.delete(&path).await;
    assert_status(&response, 200);
    assert_eq!(
        response.json::<MessageResponse>(),
        MessageResponse::new("successfully deleted")
    );

    let response = harness.get(&path).await;
    assert_plain_error(&response, 404, "Medication not found");
}

#[tokio::test]
async fn test_create_ignores_client_supplied_id_and_timestamps() {
    let harness = RestTestHarness::new();

    let response = harness
        .post(
            "/medications",
            json!({
                "id": 999,
                "name": "Ibuprofen",
                "dosage": "200mg",
                "form": "tablet",
                "created_at": "2000-01-01T00:00:00Z",
                "updated_at": "2000-01-01T00:00:00Z"
            }),
        )
        .await;
    assert_status(&response, 201);

    let created: Medication = response.json();
    assert_eq!(created.id, 1);
    assert!(created.created_at.timestamp() > 946_684_800);
    assert!(harness.stored(999).await.is_none());
}

#[tokio::test]
async fn test_null_fields_decode_as_empty() {
    let harness = RestTestHarness::new();

    let response = harness
        .post(
            "/medications",
            json!({ "name": "Aspirin", "dosage": null, "form": "tablet" }),
        )
        .await;
    assert_status(&response, 201);
    let created: Medication = response.json();
    assert_fields(&created, "Aspirin", "", "tablet");

    let response = harness
        .post("/medications", json!({ "name": null, "dosage": "10mg" }))
        .await;
    assert_plain_error(&response, 500, "medication name cannot be empty");
    assert_eq!(harness.backend.len(), 1);
}

#[tokio::test]
async fn test_collection_answers_with_trailing_slash() {
    let harness = RestTestHarness::new();

    let response = harness.post("/medications/", aspirin()).await;
    assert_status(&response, 201);

    let response = harness.get("/medications/").await;
    assert_status(&response, 200);
    assert_eq!(response.json::<Vec<Medication>>().len(), 1);
}

#[tokio::test]
async fn test_update_leaves_other_records_untouched() {
    let harness = RestTestHarness::new();
    let first = harness.seed("Aspirin", "500mg", "tablet").await;
    let second = harness.seed("Ibuprofen", "200mg", "tablet").await;

    let response = harness
        .put(
            &format!("/medications/{}", first.id),
            medication_body("Aspirin", "81mg", "tablet"),
        )
        .await;
    assert_status(&response, 200);

    assert_eq!(harness.stored(second.id).await, Some(second));
}

// ============================================================================
// Listing
// ============================================================================

#[tokio::test]
async fn test_list_empty_is_json_array() {
    let harness = RestTestHarness::new();

    let response = harness.get("/medications").await;
    assert_status(&response, 200);
    assert_json(&response);
    assert_eq!(response.json::<serde_json::Value>(), json!([]));
}

#[tokio::test]
async fn test_list_defaults_to_first_ten_in_id_order() {
    let harness = RestTestHarness::new();
    for i in 0..12 {
        harness.seed(&format!("Medication {i}"), "1mg", "tablet").await;
    }

    let page: Vec<Medication> = harness.get("/medications").await.json();
    let ids: Vec<i64> = page.iter().map(|m| m.id).collect();
    assert_eq!(ids, (1..=10).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_list_pages_are_disjoint_and_ordered() {
    let harness = RestTestHarness::new();
    for (name, dosage, form) in catalogue() {
        harness.seed(name, dosage, form).await;
    }

    let first: Vec<Medication> = harness.list("2", "0").await.json();
    let second: Vec<Medication> = harness.list("2", "2").await.json();
    let third: Vec<Medication> = harness.list("2", "4").await.json();

    assert_eq!(first.iter().map(|m| m.id).collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(second.iter().map(|m| m.id).collect::<Vec<_>>(), vec![3, 4]);
    assert_eq!(third.iter().map(|m| m.id).collect::<Vec<_>>(), vec![5]);
    assert_eq!(second[0].name, "Amoxicillin");
}

#[tokio::test]
async fn test_list_invalid_pagination_falls_back_to_defaults() {
    let harness = RestTestHarness::new();
    for (name, dosage, form) in catalogue() {
        harness.seed(name, dosage, form).await;
    }

    for (limit, offset) in [("0", "-1"), ("abc", "xyz"), ("-5", "0")] {
        let response = harness.list(limit, offset).await;
        assert_status(&response, 200);
        let page: Vec<Medication> = response.json();
        assert_eq!(page.len(), 5, "limit={limit} offset={offset}");
        assert_eq!(page[0].id, 1, "limit={limit} offset={offset}");
    }
}

#[tokio::test]
async fn test_list_offset_past_end_is_empty() {
    let harness = RestTestHarness::new();
    harness.seed("Aspirin", "500mg", "tablet").await;

    let response = harness.list("10", "50").await;
    assert_status(&response, 200);
    assert_eq!(response.json::<Vec<Medication>>(), Vec::<Medication>::new());
}

// ============================================================================
// Client errors
// ============================================================================

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let harness = RestTestHarness::new();

    assert_plain_error(&harness.get("/medications/abc").await, 400, "Invalid medication ID");
    assert_plain_error(
        &harness.put("/medications/abc", aspirin()).await,
        400,
        "Invalid medication ID",
    );
    assert_plain_error(&harness.delete("/medications/1.5").await, 400, "Invalid medication ID");
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let harness = RestTestHarness::new();

    let response = harness.post_raw("/medications", "{not json").await;
    assert_plain_error(&response, 400, "Invalid request payload");

    let response = harness.post("/medications", json!("Aspirin")).await;
    assert_plain_error(&response, 400, "Invalid request payload");

    assert!(harness.backend.is_empty());
}

#[tokio::test]
async fn test_update_with_malformed_body_is_bad_request() {
    let harness = RestTestHarness::new();
    let created = harness.seed("Aspirin", "500mg", "tablet").await;

    let response = harness
        .server
        .put(&format!("/medications/{}", created.id))
        .text("{")
        .await;
    assert_plain_error(&response, 400, "Invalid request payload");
    assert_eq!(harness.stored(created.id).await, Some(created));
}

#[tokio::test]
async fn test_read_missing_is_not_found() {
    let harness = RestTestHarness::new();

    let response = harness.get("/medications/42").await;
    assert_plain_error(&response, 404, "Medication not found");
}

// ============================================================================
// Write-path failures surface as 500 with the raw message
// ============================================================================

#[tokio::test]
async fn test_create_without_name_is_internal_error() {
    let harness = RestTestHarness::new();

    let response = harness.post("/medications", json!({ "dosage": "10mg" })).await;
    assert_plain_error(&response, 500, "medication name cannot be empty");
    assert!(harness.backend.is_empty());

    let response = harness
        .post("/medications", medication_body("   ", "10mg", "tablet"))
        .await;
    assert_status(&response, 500);
    assert!(harness.backend.is_empty());
}

#[tokio::test]
async fn test_update_to_empty_name_is_rejected() {
    let harness = RestTestHarness::new();
    let created = harness.seed("Aspirin", "500mg", "tablet").await;

    let response = harness
        .put(
            &format!("/medications/{}", created.id),
            medication_body("", "500mg", "tablet"),
        )
        .await;
    assert_plain_error(&response, 500, "medication name cannot be empty");
    assert_eq!(harness.stored(created.id).await, Some(created));
}

#[tokio::test]
async fn test_update_missing_is_internal_error() {
    let harness = RestTestHarness::new();

    let response = harness.put("/medications/7", aspirin()).await;
    assert_plain_error(&response, 500, "medication not found");
    assert!(harness.backend.is_empty());
}

#[tokio::test]
async fn test_delete_missing_is_internal_error() {
    let harness = RestTestHarness::new();

    let response = harness.delete("/medications/7").await;
    assert_plain_error(&response, 500, "medication not found");
}

#[tokio::test]
async fn test_delete_twice_fails_second_time() {
    let harness = RestTestHarness::new();
    let created = harness.seed("Aspirin", "500mg", "tablet").await;
    let path = format!("/medications/{}", created.id);

    assert_status(&harness.delete(&path).await, 200);
    assert_status(&harness.delete(&path).await, 500);
}

// ============================================================================
// Storage unavailable
// ============================================================================

#[tokio::test]
async fn test_storage_failure_on_list_hides_cause() {
    let harness = RestTestHarness::new();
    harness.seed("Aspirin", "500mg", "tablet").await;
    harness.backend.set_unavailable(true);

    let response = harness.get("/medications").await;
    assert_plain_error(&response, 500, "Failed to fetch medications");
}

#[tokio::test]
async fn test_storage_failure_on_read_is_not_found() {
    let harness = RestTestHarness::new();
    let created = harness.seed("Aspirin", "500mg", "tablet").await;
    harness.backend.set_unavailable(true);

    let response = harness.get(&format!("/medications/{}", created.id)).await;
    assert_plain_error(&response, 404, "Medication not found");
}

#[tokio::test]
async fn test_storage_failure_on_create_reports_cause() {
    let harness = RestTestHarness::new();
    harness.backend.set_unavailable(true);

    let response = harness.post("/medications", aspirin()).await;
    assert_plain_error(&response, 500, "memory unavailable: connection lost");
}

#[tokio::test]
async fn test_storage_recovers() {
    let harness = RestTestHarness::new();
    harness.backend.set_unavailable(true);
    assert_status(&harness.get("/medications").await, 500);

    harness.backend.set_unavailable(false);
    assert_status(&harness.get("/medications").await, 200);
}

//! HTTP response assertions.
//!
//! Provides assertion utilities for testing HTTP responses.

use axum_test::TestResponse;
use medication_persistence::types::Medication;

/// Asserts that the response has the expected status code.
pub fn assert_status(response: &TestResponse, expected: u16) {
    let actual = response.status_code().as_u16();
    assert_eq!(
        actual,
        expected,
        "Expected status {}, got {} with body {:?}",
        expected,
        actual,
        response.text()
    );
}

/// Asserts a plain-text error response with the exact body.
pub fn assert_plain_error(response: &TestResponse, expected_status: u16, expected_body: &str) {
    assert_status(response, expected_status);
    assert_eq!(response.text(), expected_body);
    assert_eq!(
        response.header("content-type"),
        "text/plain; charset=utf-8",
        "Expected a plain-text error body"
    );
}

/// Asserts a JSON response body.
pub fn assert_json(response: &TestResponse) {
    assert_eq!(response.header("content-type"), "application/json");
}

/// Asserts that a medication carries the given writable fields.
pub fn assert_fields(medication: &Medication, name: &str, dosage: &str, form: &str) {
    assert_eq!(medication.name, name);
    assert_eq!(medication.dosage, dosage);
    assert_eq!(medication.form, form);
}

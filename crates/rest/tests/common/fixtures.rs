//! Test fixtures for REST API testing.
//!
//! Provides medication request bodies and signed bearer tokens.

use jsonwebtoken::{EncodingKey, Header, encode, get_current_timestamp};
use serde_json::{Value, json};

/// A create/update body for a medication.
pub fn medication_body(name: &str, dosage: &str, form: &str) -> Value {
    json!({
        "name": name,
        "dosage": dosage,
        "form": form
    })
}

/// The reference medication used across scenarios.
pub fn aspirin() -> Value {
    medication_body("Aspirin", "500mg", "tablet")
}

/// A small catalogue for pagination tests.
pub fn catalogue() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        ("Aspirin", "500mg", "tablet"),
        ("Ibuprofen", "200mg", "tablet"),
        ("Amoxicillin", "250mg", "capsule"),
        ("Paracetamol", "1g", "tablet"),
        ("Salbutamol", "100mcg", "inhaler"),
    ]
}

/// Signs an HS256 token for `sub` that expires in an hour.
pub fn signed_token(secret: &str, sub: &str) -> String {
    let claims = json!({
        "sub": sub,
        "exp": get_current_timestamp() + 3600
    });
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("Failed to sign token")
}

/// Signs an HS256 token that expired an hour ago.
pub fn expired_token(secret: &str) -> String {
    let claims = json!({
        "sub": "expired-user",
        "exp": get_current_timestamp() - 3600
    });
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("Failed to sign token")
}

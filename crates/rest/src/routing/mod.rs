//! Route configuration for the medication REST API.
//!
//! This module contains the routing configuration that maps HTTP paths
//! to handlers.

pub mod medication_routes;

pub use medication_routes::create_routes;

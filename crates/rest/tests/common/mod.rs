//! Common test utilities for REST API testing.
//!
//! This module provides test infrastructure including:
//!
//! - [`harness`] - REST API test harness
//! - [`fixtures`] - Test data fixtures
//! - [`assertions`] - HTTP response assertions

// Each test binary uses a different subset of the helpers.
#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;
pub mod harness;

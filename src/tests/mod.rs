//! Test modules for the prefix matcher.
//!
//! This module contains cross-cutting tests that exercise more than one
//! component:
//! - End-to-end matcher tests driving the full load-then-query pipeline
//! - Configuration loading and validation tests
//! - Error display and conversion tests
//!
//! Component-local unit and property tests live beside the code they test.

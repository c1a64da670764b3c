//! Lifecycle message contract tests
//!
//! These tests define the stable wire contract for the command and event
//! families. The payload of every kind is its bare tag; a payload gaining
//! fields is a breaking change that must bump the schema major version.

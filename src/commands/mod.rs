//! Command implementations for the gcp-teardown CLI

pub mod all;
pub mod artifact_registry;
pub mod bucket;
pub mod completions;
pub mod helpers;
pub mod source_repo;
pub mod version;

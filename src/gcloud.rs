//! gcloud CLI wrappers for listing and deleting test resources
//!
//! Listings are requested as `--format=json` and deserialized into records.
//! Targets match by exact resource identifier (full path or trailing
//! segment), never by substring: `foo` does not match a listed `foo-repo`.

use serde::Deserialize;

use crate::error::{Result, TeardownError};
use crate::process;

/// One record from a `gcloud ... list --format=json` listing
///
/// Only the resource name is needed; the remaining fields vary per resource
/// kind and are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceRecord {
    /// Fully qualified resource name, e.g.
    /// `projects/my-project/locations/us-central1/repositories/foo-repo`
    pub name: String,
}

impl ResourceRecord {
    /// Trailing path segment of the fully qualified name
    pub fn short_name(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }
}

/// Parse a JSON listing into resource records
pub fn parse_listing(json: &str) -> Result<Vec<ResourceRecord>> {
    serde_json::from_str(json).map_err(|e| TeardownError::ListingParseFailed {
        reason: e.to_string(),
    })
}

/// True if `name` exactly matches a listed record, by full or short name
pub fn contains_resource(records: &[ResourceRecord], name: &str) -> bool {
    records
        .iter()
        .any(|r| r.name == name || r.short_name() == name)
}

/// List artifact repositories in a project and location
pub fn list_artifact_repositories(project: &str, location: &str) -> Result<Vec<ResourceRecord>> {
    let listing = process::run_capture_stdout(&format!(
        "gcloud artifacts repositories list --project={project} --location={location} --format=json"
    ))?;
    parse_listing(&listing)
}

/// Delete an artifact repository, returning the command's combined output
pub fn delete_artifact_repository(name: &str, project: &str, location: &str) -> Result<String> {
    process::run_capture(&format!(
        "gcloud artifacts repositories delete {name} --project={project} --location={location} --quiet"
    ))
}

/// List source repositories in a project
pub fn list_source_repositories(project: &str) -> Result<Vec<ResourceRecord>> {
    let listing = process::run_capture_stdout(&format!(
        "gcloud source repos list --project={project} --format=json"
    ))?;
    parse_listing(&listing)
}

/// Delete a source repository, returning the command's combined output
pub fn delete_source_repository(name: &str, project: &str) -> Result<String> {
    process::run_capture(&format!(
        "gcloud source repos delete {name} --project={project} --quiet"
    ))
}

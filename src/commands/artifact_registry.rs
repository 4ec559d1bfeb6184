//! Artifact registry teardown command
//!
//! Lists the project's artifact repositories, and deletes the target only
//! when it appears in the listing.

use crate::cli::ArtifactRegistryArgs;
use crate::commands::helpers;
use crate::error::Result;
use crate::gcloud;

pub fn run(args: ArtifactRegistryArgs) -> Result<()> {
    teardown(&args.name, &args.project, &args.location, args.yes)
}

/// Delete the artifact registry `name` if it exists in `location`
pub fn teardown(name: &str, project: &str, location: &str, yes: bool) -> Result<()> {
    let records = gcloud::list_artifact_repositories(project, location)?;

    if !gcloud::contains_resource(&records, name) {
        println!("Artifact registry '{name}' does not exist in {location}.");
        return Ok(());
    }

    if !helpers::confirm_delete(&format!("artifact registry '{name}'"), yes)? {
        println!("Aborted.");
        return Ok(());
    }

    let output = gcloud::delete_artifact_repository(name, project, location)?;
    helpers::echo_command_output(&output);
    helpers::report_deleted(&format!("artifact registry '{name}'"));

    Ok(())
}

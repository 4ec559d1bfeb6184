//! Source repository teardown command

use crate::cli::SourceRepoArgs;
use crate::commands::helpers;
use crate::error::Result;
use crate::gcloud;

pub fn run(args: SourceRepoArgs) -> Result<()> {
    teardown(&args.name, &args.project, args.yes)
}

/// Delete the source repository `name` if it exists in the project
pub fn teardown(name: &str, project: &str, yes: bool) -> Result<()> {
    let records = gcloud::list_source_repositories(project)?;

    if !gcloud::contains_resource(&records, name) {
        println!("Source repository '{name}' does not exist in project {project}.");
        return Ok(());
    }

    if !helpers::confirm_delete(&format!("source repository '{name}'"), yes)? {
        println!("Aborted.");
        return Ok(());
    }

    let output = gcloud::delete_source_repository(name, project)?;
    helpers::echo_command_output(&output);
    helpers::report_deleted(&format!("source repository '{name}'"));

    Ok(())
}

//! Storage bucket teardown command
//!
//! Unlike the gcloud-backed commands this one goes through the GCS SDK
//! client. A 404 on lookup means the bucket does not exist and is reported
//! as such; any other lookup failure propagates.

use crate::cli::BucketArgs;
use crate::commands::helpers;
use crate::error::Result;
use crate::storage::BucketHandle;

pub fn run(args: BucketArgs) -> Result<()> {
    teardown(&args.name, &args.project, args.yes)
}

/// Force-delete the bucket `name` (contents included) if it exists
pub fn teardown(name: &str, project: &str, yes: bool) -> Result<()> {
    let handle = BucketHandle::connect(project, name)?;

    if !handle.exists()? {
        println!("Bucket '{name}' does not exist.");
        return Ok(());
    }

    if !helpers::confirm_delete(&format!("bucket '{name}' and all its contents"), yes)? {
        println!("Aborted.");
        return Ok(());
    }

    handle.force_delete()?;
    println!("Bucket '{name}' deleted successfully.");

    Ok(())
}

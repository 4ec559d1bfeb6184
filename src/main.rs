//! gcp-teardown - integration test resource cleanup
//!
//! A command line tool that removes Google Cloud resources (artifact
//! registry, storage bucket, source repository) created during integration
//! testing, checking for existence before issuing each delete.

use clap::Parser;

mod cli;
mod commands;
mod error;
mod gcloud;
mod process;
mod storage;

use cli::{Cli, Commands};
use error::{Result, TeardownError};

/// Check that the gcloud CLI can be invoked
///
/// Output is discarded; a binary that cannot be spawned or does not report
/// a version is equally unusable for teardown.
fn check_gcloud_available() -> Result<()> {
    process::run("gcloud --version").map_err(|_| TeardownError::GcloudNotFound)
}

fn main() {
    let cli = Cli::parse();

    // Commands that shell out to gcloud need it on PATH up front; the bucket
    // command goes through the SDK client and the rest never leave the process
    let needs_gcloud = matches!(
        cli.command,
        Commands::ArtifactRegistry(_) | Commands::SourceRepo(_) | Commands::All(_)
    );

    if needs_gcloud {
        if let Err(e) = check_gcloud_available() {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    let result = match cli.command {
        Commands::ArtifactRegistry(args) => commands::artifact_registry::run(args),
        Commands::Bucket(args) => commands::bucket::run(args),
        Commands::SourceRepo(args) => commands::source_repo::run(args),
        Commands::All(args) => commands::all::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}


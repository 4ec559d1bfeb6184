//! Error types and handling for gcp-teardown
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for teardown operations
#[derive(Error, Diagnostic, Debug)]
pub enum TeardownError {
    // Process errors
    #[error("Command exited with {status}: {command}\n{output}")]
    #[diagnostic(
        code(teardown::process::command_failed),
        help("Check that the gcloud CLI is installed and authenticated for this project")
    )]
    CommandFailed {
        command: String,
        status: String,
        output: String,
    },

    #[error("Failed to run command '{command}': {reason}")]
    #[diagnostic(code(teardown::process::spawn_failed))]
    CommandSpawnFailed { command: String, reason: String },

    #[error("gcloud CLI not found")]
    #[diagnostic(
        code(teardown::process::gcloud_not_found),
        help(
            "Teardown commands invoke the gcloud CLI. Install the Google Cloud SDK and make sure 'gcloud' is on PATH."
        )
    )]
    GcloudNotFound,

    // Listing errors
    #[error("Failed to parse resource listing: {reason}")]
    #[diagnostic(
        code(teardown::gcloud::listing_parse_failed),
        help("Expected JSON records from 'gcloud ... list --format=json'")
    )]
    ListingParseFailed { reason: String },

    // Storage errors
    #[error("Storage client error for bucket '{bucket}': {reason}")]
    #[diagnostic(
        code(teardown::storage::client_failed),
        help(
            "Only a 404 response means the bucket does not exist. Check credentials (GOOGLE_APPLICATION_CREDENTIALS) and network access."
        )
    )]
    StorageClientFailed { bucket: String, reason: String },

    #[error("Failed to delete bucket '{bucket}': {reason}")]
    #[diagnostic(code(teardown::storage::delete_failed))]
    BucketDeleteFailed { bucket: String, reason: String },

    // Aggregate result of `all`
    #[error("Teardown incomplete: {failed} of {total} targets failed")]
    #[diagnostic(
        code(teardown::incomplete),
        help("See the messages above for each failed target")
    )]
    Incomplete { failed: usize, total: usize },

    #[error("IO error: {message}")]
    #[diagnostic(code(teardown::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for TeardownError {
    fn from(err: std::io::Error) -> Self {
        TeardownError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for TeardownError {
    fn from(err: inquire::InquireError) -> Self {
        TeardownError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, TeardownError>;

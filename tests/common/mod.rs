//! Common test utilities for gcp-teardown integration tests

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

/// A recording `gcloud` stub for integration tests
///
/// Writes a shell script named `gcloud` into a temp directory; tests prepend
/// that directory to `PATH` so the binary under test invokes the stub instead
/// of the real CLI. Every invocation is appended to a log file, listings are
/// served from a canned JSON file, and deletes succeed unless the stub was
/// created with a failure message.
#[cfg(unix)]
pub struct FakeGcloud {
    temp: TempDir,
}

#[cfg(unix)]
impl FakeGcloud {
    /// Stub whose listings return `listing_json` and whose deletes succeed
    pub fn new(listing_json: &str) -> Self {
        Self::build(listing_json, None)
    }

    /// Stub whose deletes fail with `error_text` on stderr and exit 1
    pub fn with_failing_delete(listing_json: &str, error_text: &str) -> Self {
        Self::build(listing_json, Some(error_text))
    }

    fn build(listing_json: &str, delete_error: Option<&str>) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().expect("Failed to create temp directory");
        let bin_dir = temp.path().join("bin");
        std::fs::create_dir_all(&bin_dir).expect("Failed to create bin directory");

        let listing_path = temp.path().join("listing.json");
        std::fs::write(&listing_path, listing_json).expect("Failed to write listing");

        let log_path = temp.path().join("invocations.log");

        let delete_case = match delete_error {
            Some(text) => format!("printf '%s\\n' \"{text}\" 1>&2; exit 1"),
            None => "echo \"Delete request issued.\"; exit 0".to_string(),
        };

        // Listings echo chatter to stderr the way the real gcloud does, so a
        // test fails if the binary captures combined output for JSON parsing.
        let script = format!(
            r#"#!/bin/sh
printf '%s\n' "$*" >> "{log}"
case "$*" in
    --version)
        echo "Google Cloud SDK 480.0.0"
        exit 0
        ;;
    *" list "*)
        echo "Listing items under project ..." 1>&2
        cat "{listing}"
        exit 0
        ;;
    *" delete "*)
        {delete_case}
        ;;
    *)
        exit 0
        ;;
esac
"#,
            log = log_path.display(),
            listing = listing_path.display(),
        );

        let script_path = bin_dir.join("gcloud");
        std::fs::write(&script_path, script).expect("Failed to write gcloud stub");
        std::fs::set_permissions(&script_path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to mark gcloud stub executable");

        Self { temp }
    }

    /// Directory holding the stub, for prepending to PATH
    pub fn bin_dir(&self) -> PathBuf {
        self.temp.path().join("bin")
    }

    /// PATH value with the stub directory first
    pub fn path_env(&self) -> String {
        format!(
            "{}:{}",
            self.bin_dir().display(),
            std::env::var("PATH").unwrap_or_default()
        )
    }

    /// All recorded stub invocations, one argument line per call
    pub fn invocations(&self) -> Vec<String> {
        let log_path = self.temp.path().join("invocations.log");
        if !log_path.exists() {
            return Vec::new();
        }
        std::fs::read_to_string(&log_path)
            .expect("Failed to read invocation log")
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Recorded invocations that issued a delete
    pub fn delete_invocations(&self) -> Vec<String> {
        self.invocations()
            .into_iter()
            .filter(|line| line.contains(" delete "))
            .collect()
    }
}

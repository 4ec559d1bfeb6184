//! External process execution
//!
//! Shell-command wrappers used by the teardown operations. A non-zero exit
//! status always surfaces as [`TeardownError::CommandFailed`] carrying the
//! captured output, so the original error text is never lost.

use std::process::{Command, Stdio};

use crate::error::{Result, TeardownError};

/// Build a `Command` that runs `command` through the platform shell
fn shell_command(command: &str) -> Command {
    #[cfg(windows)]
    {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", command]);
        cmd
    }
    #[cfg(not(windows))]
    {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", command]);
        cmd
    }
}

/// Run a shell command, discarding its output on success
pub fn run(command: &str) -> Result<()> {
    run_capture(command).map(|_| ())
}

/// Run a shell command and return its combined stdout/stderr as text
pub fn run_capture(command: &str) -> Result<String> {
    let output = spawn(command)?;
    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));

    if output.status.success() {
        Ok(text)
    } else {
        Err(command_failed(command, &output.status, text))
    }
}

/// Run a shell command and return its stdout only
///
/// Used for `--format=json` listings: gcloud writes informational messages to
/// stderr, which would corrupt the JSON if captured together.
pub fn run_capture_stdout(command: &str) -> Result<String> {
    let output = spawn(command)?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    } else {
        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        Err(command_failed(command, &output.status, text))
    }
}

fn spawn(command: &str) -> Result<std::process::Output> {
    shell_command(command)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| TeardownError::CommandSpawnFailed {
            command: command.to_string(),
            reason: e.to_string(),
        })
}

fn command_failed(command: &str, status: &std::process::ExitStatus, output: String) -> TeardownError {
    TeardownError::CommandFailed {
        command: command.to_string(),
        status: status.to_string(),
        output,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn test_run_capture_returns_stdout() {
        let output = run_capture("echo hello").unwrap();
        assert!(output.contains("hello"));
    }

    #[test]
    #[cfg(unix)]
    fn test_run_capture_combines_stderr() {
        let output = run_capture("echo out; echo err 1>&2").unwrap();
        assert!(output.contains("out"));
        assert!(output.contains("err"));
    }

    #[test]
    #[cfg(unix)]
    fn test_run_capture_stdout_drops_stderr() {
        let output = run_capture_stdout("echo out; echo err 1>&2").unwrap();
        assert!(output.contains("out"));
        assert!(!output.contains("err"));
    }

    #[test]
    #[cfg(unix)]
    fn test_run_discards_output() {
        assert!(run("echo discarded").is_ok());
    }

    #[test]
    #[cfg(unix)]
    fn test_nonzero_exit_carries_error_text() {
        let err = run_capture("echo 'ERROR: repo is gone' 1>&2; exit 2").unwrap_err();
        match &err {
            TeardownError::CommandFailed { status, output, .. } => {
                assert!(status.contains('2'), "status was: {}", status);
                assert!(output.contains("ERROR: repo is gone"));
            }
            other => panic!("Expected CommandFailed, got: {:?}", other),
        }
        // The displayed message must contain the original error text
        assert!(err.to_string().contains("ERROR: repo is gone"));
    }

    #[test]
    #[cfg(unix)]
    fn test_run_nonzero_exit_is_error() {
        assert!(run("exit 1").is_err());
    }

    #[test]
    fn test_missing_program_exits_nonzero() {
        // The shell itself exists, so a missing program is a CommandFailed
        // (shell exits 127), not a spawn failure.
        let err = run_capture("definitely-not-a-real-binary-xyz").unwrap_err();
        assert!(matches!(err, TeardownError::CommandFailed { .. }));
    }
}

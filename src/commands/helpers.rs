//! Shared helpers for teardown commands

use console::Style;
use inquire::Confirm;

use crate::error::Result;

/// Ask the user to confirm a destructive operation
///
/// Returns true without prompting when `yes` is set.
pub fn confirm_delete(target: &str, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }

    let confirmed = Confirm::new(&format!("Delete {target}?"))
        .with_default(false)
        .with_help_message("This permanently removes the resource and cannot be undone")
        .prompt()?;

    Ok(confirmed)
}

/// Print a green "Deleted" status line for a target
pub fn report_deleted(target: &str) {
    println!("{} {}", Style::new().green().apply_to("Deleted"), target);
}

/// Print the captured output of a delete command, if any
pub fn echo_command_output(output: &str) {
    let trimmed = output.trim_end();
    if !trimmed.is_empty() {
        println!("{trimmed}");
    }
}

//! Combined teardown command
//!
//! Attempts every requested target and reports every failure, instead of
//! stopping at the first one. Exits non-zero when any target failed.

use console::Style;

use crate::cli::AllArgs;
use crate::commands::{artifact_registry, bucket, source_repo};
use crate::error::{Result, TeardownError};

pub fn run(args: AllArgs) -> Result<()> {
    let mut targets: Vec<(String, Result<()>)> = Vec::new();

    targets.push((
        format!("artifact registry '{}'", args.registry),
        artifact_registry::teardown(&args.registry, &args.project, &args.location, args.yes),
    ));

    if let Some(name) = &args.bucket {
        targets.push((
            format!("bucket '{name}'"),
            bucket::teardown(name, &args.project, args.yes),
        ));
    }

    if let Some(name) = &args.repo {
        targets.push((
            format!("source repository '{name}'"),
            source_repo::teardown(name, &args.project, args.yes),
        ));
    }

    let total = targets.len();
    let mut failed = 0;
    for (target, result) in targets {
        if let Err(e) = result {
            failed += 1;
            eprintln!(
                "{} {}: {}",
                Style::new().red().apply_to("Failed"),
                target,
                e
            );
        }
    }

    if failed > 0 {
        return Err(TeardownError::Incomplete { failed, total });
    }

    println!("Teardown complete: {total} target(s) processed.");
    Ok(())
}

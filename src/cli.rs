//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

/// Default artifact registry created by the inferencing integration tests
pub const DEFAULT_ARTIFACT_REGISTRY: &str = "dry-beans-dt-inferencing-artifact-registry";

/// Default location the integration tests provision resources in
pub const DEFAULT_LOCATION: &str = "us-central1";

/// gcp-teardown - integration test resource cleanup
///
/// Remove Google Cloud resources left behind by integration test runs.
#[derive(Parser, Debug)]
#[command(
    name = "gcp-teardown",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Tear down Google Cloud resources created by integration tests",
    long_about = "gcp-teardown removes the artifact registry, storage bucket and source \
                  repository that MLOps pipeline integration tests provision, checking for \
                  existence before issuing each delete.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  gcp-teardown artifact-registry --project my-project\n    \
                  gcp-teardown bucket my-test-bucket --project my-project\n    \
                  gcp-teardown source-repo my-test-repo --project my-project\n    \
                  gcp-teardown all --project my-project --bucket my-test-bucket"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Delete an artifact registry if it exists
    ArtifactRegistry(ArtifactRegistryArgs),

    /// Delete a storage bucket and its contents if it exists
    Bucket(BucketArgs),

    /// Delete a source repository if it exists
    SourceRepo(SourceRepoArgs),

    /// Tear down all requested resources, reporting every failure
    All(AllArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the artifact-registry command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Delete the default test registry:\n    gcp-teardown artifact-registry --project my-project\n\n\
                  Delete a specific registry:\n    gcp-teardown artifact-registry --name my-registry --project my-project\n\n\
                  Skip the confirmation prompt:\n    gcp-teardown artifact-registry --project my-project -y")]
pub struct ArtifactRegistryArgs {
    /// Registry name to delete
    #[arg(long, default_value = DEFAULT_ARTIFACT_REGISTRY)]
    pub name: String,

    /// Google Cloud project id
    #[arg(long, short = 'p', env = "GOOGLE_CLOUD_PROJECT")]
    pub project: String,

    /// Registry location
    #[arg(long, short = 'l', default_value = DEFAULT_LOCATION)]
    pub location: String,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Arguments for the bucket command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Delete a bucket and its contents:\n    gcp-teardown bucket my-test-bucket --project my-project\n\n\
                  Skip the confirmation prompt:\n    gcp-teardown bucket my-test-bucket --project my-project -y")]
pub struct BucketArgs {
    /// Bucket name to delete
    pub name: String,

    /// Google Cloud project id
    #[arg(long, short = 'p', env = "GOOGLE_CLOUD_PROJECT")]
    pub project: String,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Arguments for the source-repo command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Delete a source repository:\n    gcp-teardown source-repo my-test-repo --project my-project\n\n\
                  Skip the confirmation prompt:\n    gcp-teardown source-repo my-test-repo --project my-project -y")]
pub struct SourceRepoArgs {
    /// Repository name to delete
    pub name: String,

    /// Google Cloud project id
    #[arg(long, short = 'p', env = "GOOGLE_CLOUD_PROJECT")]
    pub project: String,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Arguments for the all command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Tear down the default registry only:\n    gcp-teardown all --project my-project -y\n\n\
                  Tear down registry, bucket and source repo:\n    gcp-teardown all --project my-project --bucket my-test-bucket --repo my-test-repo -y")]
pub struct AllArgs {
    /// Google Cloud project id
    #[arg(long, short = 'p', env = "GOOGLE_CLOUD_PROJECT")]
    pub project: String,

    /// Registry location
    #[arg(long, short = 'l', default_value = DEFAULT_LOCATION)]
    pub location: String,

    /// Artifact registry name
    #[arg(long, default_value = DEFAULT_ARTIFACT_REGISTRY)]
    pub registry: String,

    /// Bucket name to delete (skipped when not given)
    #[arg(long)]
    pub bucket: Option<String>,

    /// Source repository name to delete (skipped when not given)
    #[arg(long)]
    pub repo: Option<String>,

    /// Skip confirmation prompts
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    gcp-teardown completions --shell bash > ~/.bash_completion.d/gcp-teardown\n\n\
                  Generate zsh completions:\n    gcp-teardown completions --shell zsh > ~/.zfunc/_gcp-teardown")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}

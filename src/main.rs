use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use clap::builder::NonEmptyStringValueParser;

use display_latest_version::config::{Config, Overrides, RepositoryConfig};
use display_latest_version::logging;
use display_latest_version::report::ArtifactVersionReporter;
use display_latest_version::report::sink::build_sink;
use display_latest_version::version::chain::RepositoryChain;

#[derive(Parser)]
#[command(name = "display-latest-version")]
#[command(version, about = "Display the latest version of an artifact")]
struct Cli {
    /// Artifact as groupId:artifactId, groupId:artifactId:type or groupId:artifactId:type:classifier
    #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
    artifact: String,

    /// Consider snapshot versions
    #[arg(long)]
    allow_snapshots: bool,

    /// Repository to query, as id=url or url (repeatable, replaces configured repositories)
    #[arg(short, long = "repository", value_name = "REPOSITORY")]
    repositories: Vec<String>,

    /// Configuration file (defaults to $XDG_CONFIG_HOME/display-latest-version/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also write the result line to this file
    #[arg(short, long)]
    output_file: Option<PathBuf>,

    /// Append to the output file instead of overwriting it
    #[arg(long)]
    append: bool,

    /// Timeout for each repository request in milliseconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_ms: Option<u64>,

    /// Write JSON logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            repositories: self
                .repositories
                .iter()
                .map(|arg| RepositoryConfig::from_arg(arg))
                .collect(),
            allow_snapshots: self.allow_snapshots,
            fetch_timeout_ms: self.timeout_ms,
            output_file: self.output_file.clone(),
            append: self.append,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _log_guard = logging::init(cli.verbose, cli.log_file.as_deref())?;

    let config = Config::discover(cli.config.as_deref())?.with_overrides(cli.overrides());
    config.validate()?;

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(&cli.artifact, config))
}

async fn run(artifact: &str, config: Config) -> anyhow::Result<()> {
    let resolver = Arc::new(
        RepositoryChain::from_config(&config).context("Failed to set up repository clients")?,
    );

    let sink = build_sink(&config.output).with_context(|| match &config.output.file {
        Some(path) => format!("Failed to open output file {}", path.display()),
        None => "Failed to set up report output".to_string(),
    })?;

    let mut reporter = ArtifactVersionReporter::new(resolver, sink, config.allow_snapshots);
    reporter.run(artifact).await;

    Ok(())
}

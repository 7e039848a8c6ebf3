//! CLI Adapter.

use crate::app::api::{self, EventSource, UpdateRequest, WorkflowOptions};
use crate::app::commands::output::write_workflow_output;
use crate::domain::{AppError, RuleKind};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mergelog")]
#[command(version)]
#[command(
    about = "Append changelog entries from merged pull request descriptions",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read a pull request description on stdin and print its changelog entry
    #[clap(visible_alias = "x")]
    Extract {
        /// Extraction rule (summary, fields); defaults to the configured rule
        #[arg(short, long)]
        rule: Option<RuleKind>,
        /// Config file (default: .mergelog.toml in the current directory)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Append the entry for a merged pull request, commit and push it
    #[clap(visible_alias = "u")]
    Update {
        /// GitHub event payload file
        #[arg(long, env = "GITHUB_EVENT_PATH")]
        event: Option<PathBuf>,
        /// Read the description from a file ('-' for stdin) instead of an event
        #[arg(short, long)]
        description_file: Option<PathBuf>,
        /// Target branch for --description-file (default: current branch)
        #[arg(short, long, requires = "description_file")]
        branch: Option<String>,
        /// Pull request number for --description-file
        #[arg(short, long, requires = "description_file")]
        number: Option<u64>,
        /// Extraction rule (summary, fields); defaults to the configured rule
        #[arg(short, long)]
        rule: Option<RuleKind>,
        /// Config file (default: .mergelog.toml in the repository root)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Repository root
        #[arg(long, default_value = ".")]
        repo: PathBuf,
        /// Commit but do not push
        #[arg(long)]
        no_push: bool,
    },
    /// Render the GitHub Actions workflow that runs `mergelog update`
    #[clap(visible_alias = "wf")]
    Workflow {
        /// Write under this repository root instead of printing
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Runner label for the job
        #[arg(long, default_value = "ubuntu-latest")]
        runs_on: String,
    },
}

/// Entry point for the CLI.
pub fn run() {
    init_tracing();
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Extract { rule, config } => run_extract(rule, config),
        Commands::Update {
            event,
            description_file,
            branch,
            number,
            rule,
            config,
            repo,
            no_push,
        } => run_update(event, description_file, branch, number, rule, config, repo, no_push),
        Commands::Workflow { output, runs_on } => run_workflow(output, runs_on),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run_extract(rule: Option<RuleKind>, config: Option<PathBuf>) -> Result<(), AppError> {
    let description = read_stdin()?;
    let entry = api::extract_entry(&description, Path::new("."), config.as_deref(), rule)?;
    if let Some(entry) = entry {
        println!("{}", entry);
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn run_update(
    event: Option<PathBuf>,
    description_file: Option<PathBuf>,
    branch: Option<String>,
    number: Option<u64>,
    rule: Option<RuleKind>,
    config: Option<PathBuf>,
    repo: PathBuf,
    no_push: bool,
) -> Result<(), AppError> {
    // An explicit description wins over GITHUB_EVENT_PATH inherited from the runner.
    let source = match (description_file, event) {
        (Some(path), _) => {
            let text = if path == Path::new("-") {
                read_stdin()?
            } else {
                std::fs::read_to_string(&path)?
            };
            EventSource::Description { text, branch, number }
        }
        (None, Some(path)) => EventSource::EventFile(path),
        (None, None) => return Err(AppError::EventNotFound),
    };

    let outcome = api::update(UpdateRequest { repo, config, source, push: !no_push, rule })?;
    write_workflow_output(&outcome)
}

fn run_workflow(output: Option<PathBuf>, runs_on: String) -> Result<(), AppError> {
    let outcome = api::generate_workflow(&WorkflowOptions { output_dir: output, runs_on })?;

    if outcome.written.is_empty() {
        for file in &outcome.files {
            print!("{}", file.content);
        }
    } else {
        for path in &outcome.written {
            println!("✅ Wrote {}", path.display());
        }
    }
    Ok(())
}

fn read_stdin() -> Result<String, AppError> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

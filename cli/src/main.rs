//! CLI for the issue importer.
//!
//! Reads an issue structure file and creates the corresponding labels,
//! phase issues, sub-issues, special issues and dependency notes in a GitHub
//! repository.

use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use issue_importer::{
    Pacing, RepositoryId, RunPlan, RunSummary, Runner, RunnerConfig, RunnerError, LABELS,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Issue Importer - Create the GitHub issues described by an issue structure file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// GitHub Personal Access Token.
    #[arg(
        long,
        env = "GITHUB_TOKEN",
        hide_env_values = true,
        value_parser = NonEmptyStringValueParser::new()
    )]
    token: String,

    /// Target repository in 'owner/name' form.
    #[arg(long)]
    repo: String,

    /// Path to the issue structure file (YAML, or TOML with a .toml extension).
    #[arg(long, default_value = issue_importer::DEFAULT_STRUCTURE_FILE)]
    structure_file: PathBuf,

    /// Skip label creation.
    #[arg(long)]
    skip_labels: bool,

    /// Milestone number attached to every created issue.
    #[arg(long)]
    milestone: Option<u64>,

    /// GitHub API base URL (GitHub Enterprise).
    #[arg(long)]
    api_url: Option<String>,

    /// Pause after each label request, in milliseconds.
    #[arg(long, default_value_t = 500)]
    label_delay_ms: u64,

    /// Pause after each issue request, in milliseconds.
    #[arg(long, default_value_t = 1000)]
    issue_delay_ms: u64,

    /// Pause after each dependency update, in milliseconds.
    #[arg(long, default_value_t = 500)]
    dependency_delay_ms: u64,

    /// Print what would be created without calling the API.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Explicitly select aws-lc-rs as the process-wide rustls provider
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    init_tracing();

    let args = Args::parse();
    let dry_run = args.dry_run;

    println!("{}", "=".repeat(60));
    println!("  Issue Importer");
    println!("{}", "=".repeat(60));
    println!("\nRepository: {}", args.repo);
    println!("Structure: {}\n", args.structure_file.display());

    let runner = match build_runner(args) {
        Ok(runner) => runner,
        Err(e) => {
            error!(error = %e, "Critical failure");
            return ExitCode::from(2);
        }
    };

    let result = if dry_run {
        runner.plan().map(|plan| print_plan(&plan))
    } else {
        runner.run().await.map(|summary| print_summary(&summary))
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Compact single-line output without module targets; the level comes from
/// `RUST_LOG` and defaults to `info`.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Validates the arguments and builds the runner.
fn build_runner(args: Args) -> Result<Runner, RunnerError> {
    let repository = RepositoryId::parse(&args.repo)?;
    let pacing = Pacing {
        label_delay: Duration::from_millis(args.label_delay_ms),
        issue_delay: Duration::from_millis(args.issue_delay_ms),
        dependency_delay: Duration::from_millis(args.dependency_delay_ms),
    };

    let mut config = RunnerConfig::new(args.structure_file, args.token, repository, args.skip_labels)
        .with_milestone(args.milestone)
        .with_pacing(pacing);
    if let Some(api_url) = args.api_url {
        config = config.with_api_url(&api_url)?;
    }
    Runner::new(config)
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    let issues = summary.issues();

    println!("\nSummary:");
    match &summary.labels {
        Some(labels) => println!(
            "  Labels: {} created, {} existing, {} failed",
            labels.created, labels.already_existing, labels.failed
        ),
        None => println!("  Labels: skipped"),
    }
    println!("  Issues created: {}", issues.created);
    println!("  Issues failed: {}", issues.failed);
    if issues.skipped > 0 {
        println!("  Sub-issues skipped: {}", issues.skipped);
    }
    println!(
        "  Dependencies: {} annotated, {} failed",
        summary.dependencies.annotated, summary.dependencies.failed
    );

    println!("\nTotal issues created: {}", summary.total_registered());
    for (key, number) in summary.entries() {
        println!("  {number}: {key}");
    }
}

/// Prints the dry-run plan.
fn print_plan(plan: &RunPlan) {
    println!("\n[DRY RUN]");
    if plan.bootstrap_labels {
        println!("  Would ensure {} labels exist", LABELS.len());
    } else {
        println!("  Would skip label creation");
    }
    println!("  Would create {} issues:\n", plan.issue_count());

    for phase in &plan.document.phases {
        println!("  [phase {}] {}", phase.number, phase.title);
        for sub_issue in &phase.sub_issues {
            println!("    - {}", sub_issue.title);
        }
    }
    for special in &plan.document.special_issues {
        println!("  [special] {}", special.title);
    }

    if !plan.dependencies.is_empty() {
        println!("\n  Dependencies:");
        for edge in &plan.dependencies {
            let note = if edge.declared { "" } else { " (undeclared, dropped)" };
            println!(
                "    phase {} blocked by phase {}{note}",
                edge.phase, edge.blocked_by
            );
        }
    }

    if !plan.unknown_labels.is_empty() {
        println!("\n  Labels not in the bootstrap table:");
        for label in &plan.unknown_labels {
            println!("    {label}");
        }
    }
    println!();
}

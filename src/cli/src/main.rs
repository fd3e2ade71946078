//! CLI for the README generator.
//!
//! This tool fetches a GitHub repository's metadata, picks a documentation
//! archetype for it and asks Gemini to write a tailored README.

use clap::Parser;
use readme_generator::runner::DEFAULT_CONFIG_PATH;
use readme_generator::{
    parse_archetype_override, Archetype, InputError, RepositoryRef, RunOutcome, Runner,
    RunnerConfig, RunnerError,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// README Generator - Generate a tailored README.md for a GitHub repository.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// GitHub repository URL (e.g., https://github.com/octocat/Hello-World).
    #[arg(long)]
    url: Option<String>,

    /// Repository owner (used with --repo instead of --url).
    #[arg(long)]
    owner: Option<String>,

    /// Repository name (used with --owner instead of --url).
    #[arg(long)]
    repo: Option<String>,

    /// README template: "auto" or one of the ids shown by --list-templates.
    #[arg(long, default_value = "auto")]
    template: String,

    /// Path to the generator config file.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Gemini API key.
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// GitHub Personal Access Token (optional, raises the API rate limit).
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    github_token: Option<String>,

    /// Write the README to this directory or file instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the prompt instead of calling the generator.
    #[arg(long)]
    dry_run: bool,

    /// List available templates and exit.
    #[arg(long)]
    list_templates: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Both octocrab and reqwest sit on rustls; pick one provider up front.
    let _ = rustls::crypto::ring::default_provider().install_default();

    // Parse arguments
    let args = Args::parse();

    if args.list_templates {
        print_templates();
        return ExitCode::SUCCESS;
    }

    // Run the main logic
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_validation() => {
            error!(error = %e, "Invalid input");
            ExitCode::from(1)
        }
        Err(e) => {
            error!(error = %e, "README generation failed");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Output on stderr, keeping stdout for the generated Markdown
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        // Falls back to "info" level if RUST_LOG is not set or invalid
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<(), RunnerError> {
    // Validate everything before any network call.
    let repository = repository_ref(&args)?;
    let archetype = parse_archetype_override(&args.template)?;

    let config = RunnerConfig::new()
        .with_config_path(args.config)
        .with_api_key(args.api_key)
        .with_github_token(args.github_token)
        .with_archetype(archetype)
        .with_dry_run(args.dry_run);
    let runner = Runner::new(config)?;
    let outcome = runner.run(&repository).await?;

    let written = match args.output {
        Some(path) if !outcome.is_dry_run() => Some(outcome.write_readme(&path)?),
        Some(_) => {
            warn!("--output is ignored in dry-run mode");
            println!("{}", outcome.text());
            None
        }
        None => {
            println!("{}", outcome.text());
            None
        }
    };

    print_summary(&outcome, written.as_deref());
    Ok(())
}

/// Resolves the repository from either `--url` or `--owner`/`--repo`.
fn repository_ref(args: &Args) -> Result<RepositoryRef, InputError> {
    match (&args.url, &args.owner, &args.repo) {
        (Some(url), _, _) => RepositoryRef::from_url(url),
        (None, None, None) => Err(InputError::MissingUrl),
        (None, owner, repo) => RepositoryRef::from_parts(
            owner.as_deref().unwrap_or_default(),
            repo.as_deref().unwrap_or_default(),
        ),
    }
}

/// Prints the available templates.
fn print_templates() {
    println!("Available templates:");
    for archetype in Archetype::ALL {
        let profile = archetype.profile();
        println!(
            "  {} {:<14} {} - {}",
            profile.icon, profile.id, profile.name, profile.description
        );
    }
    println!("  Use \"auto\" to pick a template from the repository's metadata.");
}

/// Prints the final run summary.
fn print_summary(outcome: &RunOutcome, written: Option<&Path>) {
    let profile = outcome.archetype.profile();
    eprintln!("\nSummary:");
    eprintln!("  Repository: {}", outcome.repository);
    eprintln!(
        "  Mode: {}",
        if outcome.is_dry_run() { "Dry Run" } else { "Live" }
    );
    eprintln!(
        "  Template: {} {} ({})",
        profile.icon,
        profile.name,
        if outcome.auto_detected {
            "auto-detected"
        } else {
            "selected"
        }
    );
    if !outcome.auto_detected && outcome.detected != outcome.archetype {
        eprintln!("  Detected template: {}", outcome.detected.profile().name);
    }
    match written {
        Some(path) => eprintln!("  Output: {}", path.display()),
        None => eprintln!("  Output: stdout"),
    }
}

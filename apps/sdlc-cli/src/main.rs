//! sdlc CLI - markdown-driven SDLC workflow tool
//!
//! Command-line interface guiding a feature through the fixed 8-step
//! workflow (idea -> PRD -> architecture -> tasks -> tests), generating
//! AI prompts along the way and archiving finished features.

use anyhow::Context;
use clap::{Parser, Subcommand};
use sdlc_core::workflows::{
    AdvanceOutcome, advance_feature, archive_feature, feature_status, init_project, start_feature,
};
use sdlc_core::{
    LockState, ProjectConfig, Result, SdlcError, StdFsAdapter, find_root,
};
use sdlc_pm::PromptStore;
use tracing::{error, info};

/// sdlc - structured software development lifecycle tool
///
/// Tracks one feature at a time through 8 markdown steps, generating a
/// prompt for your AI tool at each transition.
#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available sdlc commands
#[derive(Subcommand)]
enum Commands {
    /// Initialize an sdlc project in the current directory
    ///
    /// Creates .sdlc/ with the default configuration, the doing/, done/
    /// and prompts/ directories, and the bundled step templates.
    Init,

    /// Start a new feature from an idea title
    ///
    /// Creates doing/<slug>/ with the step-0 idea skeleton and makes it
    /// the active feature.
    New {
        /// The idea title (can be multiple words)
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Advance the active feature to the next step
    ///
    /// Requires the current step's markdown to be filled out; generates
    /// the next step's prompt file for use with your AI tool.
    Next,

    /// Show progress through the workflow steps
    Status,

    /// Archive a completed feature
    ///
    /// Validates all steps are complete, then moves the feature
    /// directory from doing/ to done/.
    Done,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run_command(&cli.command) {
        error!("command failed: {e}");
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}

/// Initialize tracing subscriber for structured logging
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = if verbose {
        EnvFilter::new("sdlc=debug,sdlc_core=debug,sdlc_pm=debug")
    } else {
        EnvFilter::new("sdlc=info,sdlc_core=info,sdlc_pm=info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Execute the specified command
fn run_command(command: &Commands) -> Result<()> {
    match command {
        Commands::Init => run_init(),
        Commands::New { title } => run_new(&title.join(" ")),
        Commands::Next => run_next(),
        Commands::Status => run_status(),
        Commands::Done => run_done(),
    }
}

/// Locate and load the enclosing project's configuration.
fn load_project() -> Result<ProjectConfig> {
    let cwd = std::env::current_dir().context("failed to get current directory")?;
    let root = find_root(&cwd)
        .ok_or_else(|| SdlcError::ConfigNotFound(ProjectConfig::config_path(&cwd)))?;
    ProjectConfig::load(root)
}

fn run_init() -> Result<()> {
    let cwd = std::env::current_dir().context("failed to get current directory")?;
    info!("initializing sdlc project in {}", cwd.display());

    let report = init_project(&cwd, &StdFsAdapter::new())?;

    if report.created.is_empty() {
        println!("Project already initialized; nothing to do.");
    } else {
        println!("✔ Created .sdlc/ configuration");
        println!("✔ Created doing/, done/ and prompts/ directories");
        println!("✔ Installed step instruction templates");
        println!("\nProject initialized!");
    }
    println!("\nNext steps:");
    println!("  sdlc new \"Your first feature idea\"    Start a feature");
    println!("  sdlc status                           Show progress");

    Ok(())
}

fn run_new(title: &str) -> Result<()> {
    let config = load_project()?;

    let outcome = start_feature(&config, title, &StdFsAdapter::new())?;
    outcome.lock.save(&config.root)?;

    println!(
        "Created {}. Fill it out, then run `sdlc next`.",
        outcome.idea_file.display()
    );
    print_compact_status(&config, &outcome.lock);

    Ok(())
}

fn run_next() -> Result<()> {
    let config = load_project()?;
    let lock = LockState::load(&config.root)?;
    let store = PromptStore::new(config.prompts_path())?;

    let outcome = advance_feature(&config, &lock, &store, &StdFsAdapter::new())?;
    match outcome {
        AdvanceOutcome::PromptGenerated {
            next_slug,
            prompt_file,
            next_step_file,
            lock,
        } => {
            lock.save(&config.root)?;
            println!("Generated AI prompt: {}", prompt_file.display());
            println!(
                "Use it with your preferred AI tool, then save the response to:\n  {}",
                next_step_file.display()
            );
            println!("Once saved, run `sdlc next` to continue to the step after '{next_slug}'.");
            print_compact_status(&config, &lock);
        }
        AdvanceOutcome::WorkflowComplete { lock } => {
            lock.save(&config.root)?;
            println!("All steps complete. Run `sdlc done` to archive.");
            print_compact_status(&config, &lock);
        }
    }

    Ok(())
}

fn run_status() -> Result<()> {
    let config = load_project()?;
    let lock = LockState::load(&config.root)?;

    let report = feature_status(&config, &lock, &StdFsAdapter::new())?;

    println!("Active feature\n--------------");
    match &report.active {
        None => println!("none – create one with `sdlc new`"),
        Some(active) => {
            let step = active.current_step.as_deref().unwrap_or("complete");
            let bar = render_step_bar(
                active.steps.iter().map(|s| (s.slug.as_str(), s.completed)),
            );
            println!("{:<20} {:<14} {}", active.slug, step, bar);
            println!("{} step(s) remaining", active.steps_remaining);
        }
    }

    for warning in &report.warnings {
        println!("⚠  {warning}");
    }

    Ok(())
}

fn run_done() -> Result<()> {
    let config = load_project()?;
    let lock = LockState::load(&config.root)?;

    let outcome = archive_feature(&config, &lock, &StdFsAdapter::new())?;
    outcome.lock.save(&config.root)?;

    println!("Archived to {}", outcome.dest.display());

    Ok(())
}

/// Renders the `[done] idea > [ ] prd > ...` progress bar.
fn render_step_bar<'a>(steps: impl Iterator<Item = (&'a str, bool)>) -> String {
    steps
        .map(|(slug, completed)| {
            let mark = if completed { "[done]" } else { "[ ]" };
            format!("{mark} {slug}")
        })
        .collect::<Vec<_>>()
        .join(" > ")
}

/// Prints the compact progress footer shown after mutating commands.
fn print_compact_status(config: &ProjectConfig, lock: &LockState) {
    let Some(slug) = lock.active_slug.as_deref() else {
        return;
    };
    let step = config
        .steps
        .get(lock.current_step_index)
        .map(|s| s.slug.as_str())
        .unwrap_or("complete");
    let bar = render_step_bar(
        config
            .steps
            .iter()
            .map(|s| (s.slug.as_str(), lock.completed_steps.contains(&s.index))),
    );
    println!("\n---\nCurrent: {slug} @ {step}\n   {bar}\n---");
}

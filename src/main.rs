//! Lens Finder - Lens handle availability checking
//!
//! Check whether Lens handles are free to claim, and browse a rotating sample
//! of random handles that are available right now.

use anyhow::{bail, Context};
use indicatif::{ProgressBar, ProgressStyle};
use inquire::{InquireError, Text};
use lens_finder::{
    FinderConfig, HandleChecker, LensFinderError, SampleBoard, SearchState, SubmitOutcome,
};
use std::env;
use std::process;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    init_logging();

    // Initialize the library
    if let Err(e) = lens_finder::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    // Get command line arguments
    let args: Vec<String> = env::args().skip(1).collect();

    // Check for help
    if args.first().is_some_and(|a| a == "--help" || a == "-h") {
        print_help();
        return;
    }

    if let Err(e) = run(&args).await {
        match e.downcast_ref::<LensFinderError>() {
            Some(err) => eprintln!("{}", err.user_message()),
            None => eprintln!("❌ Error: {:#}", e),
        }
        process::exit(1);
    }
}

/// Log to stderr, filtered by RUST_LOG (default: warnings only)
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Dispatch the command line
async fn run(args: &[String]) -> anyhow::Result<()> {
    let mut config = FinderConfig::from_env()?;

    match args.first().map(String::as_str) {
        None => run_interactive(&config).await,
        Some("check") => {
            if args.len() < 2 {
                bail!("check needs at least one handle, e.g. `lens-finder check vitalik`");
            }
            let checker = config.build_checker();
            check_handles(&checker, &args[1..], config.check.strict_charset).await;
            Ok(())
        }
        Some("random") => {
            if let Some(count) = args.get(1) {
                let target: usize = count
                    .parse()
                    .ok()
                    .filter(|n| *n > 0)
                    .with_context(|| format!("Invalid sample size '{}'", count))?;
                config.sample.target = target;
                config.sample.max_attempts = config.sample.max_attempts.max(target);
            }
            let board = config.build_board(config.build_checker())?;
            refresh_and_show(&board).await;
            Ok(())
        }
        Some(other) => bail!("Unknown command '{}'. Use --help for usage information", other),
    }
}

/// Check each handle like a form submission and print the outcome
async fn check_handles(checker: &HandleChecker, handles: &[String], strict_charset: bool) {
    for raw in handles {
        let mut state = SearchState::new(strict_charset);
        state.apply_input(checker, raw);
        show_submission(&mut state, checker).await;
    }

    let metrics = checker.get_metrics_snapshot();
    if metrics.handles_checked + metrics.errors_encountered > 0 {
        println!();
        println!("📈 Summary:");
        println!("   📊 Lookups: {}", metrics.handles_checked + metrics.errors_encountered);
        if metrics.errors_encountered > 0 {
            println!("   ⚠️  Failed lookups: {}", metrics.errors_encountered);
        }
        println!("   ⏱️  Average lookup time: {:.1}ms", metrics.avg_check_time_ms());
    }
}

async fn show_submission(state: &mut SearchState, checker: &HandleChecker) {
    if let Some(message) = &state.input_message {
        println!("⚠️  {}", message);
    }

    let outcome = state.submit(checker).await;
    match outcome {
        SubmitOutcome::Available => {
            if let Some(message) = &state.success_message {
                println!("✅ {}", message);
            }
        }
        SubmitOutcome::Failed => {
            if let Some(message) = &state.failure_message {
                println!("⚠️  {}", message);
            }
        }
        SubmitOutcome::Taken | SubmitOutcome::LengthRejected | SubmitOutcome::CharsetRejected => {
            if let Some(message) = &state.failure_message {
                println!("❌ {}", message);
            }
        }
    }
}

/// Refresh the sample with a spinner that runs until the refresh completes
async fn refresh_and_show(board: &SampleBoard) {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.magenta} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Finding random available handles...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = board.refresh().await;
    spinner.finish_and_clear();

    let suffix = board.sampler().checker().suffix().to_string();
    match outcome {
        Ok(published) => display_handles(&published.sample.handles, &suffix),
        Err(LensFinderError::SampleExhausted { ref found, .. }) => {
            if !found.is_empty() {
                display_handles(found, &suffix);
            }
            if let Some(err) = board.last_error() {
                println!("{}", err.user_message());
            }
        }
        Err(e) => println!("{}", e.user_message()),
    }
}

/// Display handles two per row
fn display_handles(handles: &[String], suffix: &str) {
    println!();
    println!("🎲 Here's some random handles available:");
    println!("────────────────────────────────────────");

    for row in handles.chunks(2) {
        let cells: Vec<String> = row
            .iter()
            .map(|h| format!("🟢 {:<24}", format!("{}.{}", h, suffix)))
            .collect();
        println!("{}", cells.join(" ").trim_end());
    }
    println!();
}

/// Prompt loop: the initial sample, then handles or commands until quit
async fn run_interactive(config: &FinderConfig) -> anyhow::Result<()> {
    println!("🌿 Lens Finder - find your Lens handle");
    println!("═════════════════════════════════════");

    let checker = config.build_checker();
    let board = config.build_board(checker.clone())?;
    refresh_and_show(&board).await;

    let mut state = SearchState::new(config.check.strict_charset);
    let prompt = format!("Find your lens handle (.{}):", config.suffix());

    loop {
        let input = match Text::new(&prompt)
            .with_help_message(":refresh for new random handles, :quit to exit")
            .prompt()
        {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e).context("Failed to read input"),
        };

        match input.trim() {
            ":q" | ":quit" => break,
            ":r" | ":refresh" => refresh_and_show(&board).await,
            raw => {
                state.apply_input(&checker, raw);
                show_submission(&mut state, &checker).await;
                println!();
            }
        }
    }

    println!("👋 Bye!");
    Ok(())
}

/// Print help information
fn print_help() {
    println!("🌿 Lens Finder - find your Lens handle");
    println!("═════════════════════════════════════");
    println!();
    println!("USAGE:");
    println!("    lens-finder                      # Interactive search with random handles");
    println!("    lens-finder check <HANDLE>...    # Check one or more handles");
    println!("    lens-finder random [COUNT]       # Show random available handles");
    println!();
    println!("EXAMPLES:");
    println!("    lens-finder check vitalik");
    println!("    lens-finder random 6");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    LENS_NETWORK             mainnet or testnet (default: mainnet)");
    println!("    LENS_API_URL             GraphQL endpoint override");
    println!("    LENS_TIMEOUT_SECS        Per-lookup timeout (default: 10)");
    println!("    LENS_SAMPLE_SIZE         Random handles to show (default: 10)");
    println!("    LENS_MAX_ATTEMPTS        Draws before giving up (default: 200)");
    println!("    LENS_SAMPLE_CONCURRENCY  Lookups in flight while sampling (default: 1)");
    println!("    LENS_ALLOW_DUPLICATES    Allow repeated handles in a sample (default: false)");
    println!("    LENS_STRICT_CHARSET      Refuse handles with characters outside a-z 0-9 - _");
    println!("    LENS_WORDLIST            JSON word list used for random handles");
    println!("    RUST_LOG                 Log filter (default: warn)");
    println!();
    println!("Handles are 5 to 31 characters of a-z, 0-9, - and _.");
}

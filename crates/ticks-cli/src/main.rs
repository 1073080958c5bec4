#![forbid(unsafe_code)]

mod cmd;
mod document;
mod output;

use clap::{CommandFactory, Parser, Subcommand};
use document::Source;
use output::{CliError, OutputMode, render_error, resolve_output_mode};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use ticks_core::error::ErrorCode;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "tk: a small todo list you can pipe around",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// List document to start from (JSON). Use `-` to read stdin.
    #[arg(short, long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true, hide = true)]
    json: bool,

    /// Suppress non-essential output.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Read",
        about = "Print the list",
        after_help = "EXAMPLES:\n    # Show a saved list\n    tk --file today.json show\n\n    # Emit a list document\n    tk --file today.json show --json"
    )]
    Show,

    #[command(
        next_help_heading = "Edit",
        about = "Append items to the list",
        after_help = "EXAMPLES:\n    # Start a new list and add two items\n    tk add \"Buy milk\" \"Walk dog\" --json > today.json\n\n    # Add to an existing list\n    tk --file today.json add \"Pay rent\""
    )]
    Add(cmd::add::AddArgs),

    #[command(next_help_heading = "Read", about = "Show the item at an index")]
    At(cmd::index::IndexArgs),

    #[command(next_help_heading = "Read", about = "Show the first item")]
    First,

    #[command(next_help_heading = "Read", about = "Show the last item")]
    Last,

    #[command(
        next_help_heading = "Edit",
        about = "Mark the item at an index as done",
        after_help = "EXAMPLES:\n    # Finish the first item\n    tk --file today.json done-at 0"
    )]
    DoneAt(cmd::index::IndexArgs),

    #[command(next_help_heading = "Edit", about = "Mark the item at an index as not done")]
    UndoneAt(cmd::index::IndexArgs),

    #[command(next_help_heading = "Edit", about = "Remove the item at an index")]
    RemoveAt(cmd::index::IndexArgs),

    #[command(next_help_heading = "Edit", about = "Remove the first item")]
    Shift,

    #[command(next_help_heading = "Edit", about = "Remove the last item")]
    Pop,

    #[command(next_help_heading = "Read", about = "Find the first item with a title")]
    Find(cmd::title::TitleArgs),

    #[command(
        next_help_heading = "Edit",
        about = "Mark the first item with a title as done",
        after_help = "EXAMPLES:\n    # Finish an item by name\n    tk --file today.json done \"Buy milk\""
    )]
    Done(cmd::title::TitleArgs),

    #[command(next_help_heading = "Edit", about = "Mark every item as done")]
    DoneAll,

    #[command(next_help_heading = "Edit", about = "Mark every item as not done")]
    UndoneAll,

    #[command(
        next_help_heading = "Read",
        about = "Show only finished or unfinished items",
        after_help = "EXAMPLES:\n    # What is left to do\n    tk --file today.json filter --not-done --title Pending"
    )]
    Filter(cmd::bulk::FilterArgs),

    #[command(
        next_help_heading = "Shell",
        about = "Generate shell completion scripts",
        after_help = "EXAMPLES:\n    # Generate bash completions\n    tk completions bash"
    )]
    Completions(cmd::completions::CompletionsArgs),
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("TICKS_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "ticks=debug,tk=debug,info"
        } else {
            "ticks=info,warn"
        })
    });

    let format = env::var("TICKS_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn run(cli: Cli, output: OutputMode, default_title: &str) -> anyhow::Result<()> {
    let quiet = cli.quiet;

    if let Commands::Completions(args) = &cli.command {
        let mut command = Cli::command();
        return cmd::completions::run_completions(args.shell, &mut command);
    }

    let mut list = document::load_list(Source::from_arg(cli.file.as_deref()), default_title)?;
    debug!(command = ?cli.command, "dispatching");

    match &cli.command {
        Commands::Show => cmd::show::run_show(&list, output),
        Commands::Add(args) => cmd::add::run_add(args, &mut list, output, quiet),
        Commands::At(args) => cmd::index::run_at(args, &list, output),
        Commands::First => cmd::ends::run_first(&list, output),
        Commands::Last => cmd::ends::run_last(&list, output),
        Commands::DoneAt(args) => cmd::index::run_done_at(args, &list, output, quiet),
        Commands::UndoneAt(args) => cmd::index::run_undone_at(args, &list, output, quiet),
        Commands::RemoveAt(args) => cmd::index::run_remove_at(args, &mut list, output, quiet),
        Commands::Shift => cmd::ends::run_shift(&mut list, output, quiet),
        Commands::Pop => cmd::ends::run_pop(&mut list, output, quiet),
        Commands::Find(args) => cmd::title::run_find(args, &list, output),
        Commands::Done(args) => cmd::title::run_done(args, &list, output, quiet),
        Commands::DoneAll => cmd::bulk::run_done_all(&list, output, quiet),
        Commands::UndoneAll => cmd::bulk::run_undone_all(&list, output, quiet),
        Commands::Filter(args) => cmd::bulk::run_filter(args, &list, output),
        Commands::Completions(_) => Ok(()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let flag_output = resolve_output_mode(cli.format, cli.json, None);

    let config = match env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|root| ticks_core::config::resolve_config(&root))
    {
        Ok(config) => config,
        Err(e) => {
            // Errors rendering the error itself have nowhere left to go.
            let err = CliError::with_code(format!("{e:#}"), ErrorCode::ConfigParseError);
            let _ = render_error(flag_output, &err);
            return ExitCode::FAILURE;
        }
    };

    let output = resolve_output_mode(cli.format, cli.json, config.output.as_deref());

    match run(cli, output, &config.default_title) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = render_error(output, &CliError::from(&e));
            ExitCode::FAILURE
        }
    }
}

//! Terminal front-end for the todo list.
//!
//! # Responsibility
//! - Map subcommands and shell lines onto view intents.
//! - Print frames rendered by `todo_core` after each change.

mod shell;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use todo_core::{
    core_version, init_logging, render_text, AppConfig, Intent, IntentOutcome, KeyValueStorage,
    StorageBackend, TodoApp, TodoId,
};

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "Local to-do list with search and progress tracking", long_about = None)]
#[command(version)]
struct Cli {
    /// Storage backend: memory, file or sqlite
    #[arg(long, global = true, default_value_t = StorageBackend::Sqlite)]
    backend: StorageBackend,

    /// Data directory for todos.sqlite3 or todos.json (default: under the system temp dir)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Absolute directory for rotating log files; logging is off without it
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// Log level: trace, debug, info, warn or error
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a todo; words are joined with spaces
    Add {
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Flip a todo between open and completed
    Toggle { id: TodoId },

    /// Delete a todo
    Delete { id: TodoId },

    /// Show todos, optionally filtered by title
    List {
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Print the progress gauge as SVG
    Gauge,

    /// Interactive session reading commands from stdin
    Shell,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;

    if let Some(log_dir) = &config.log_dir {
        let log_dir = log_dir
            .to_str()
            .context("log directory must be valid UTF-8")?;
        init_logging(&config.log_level, log_dir).map_err(anyhow::Error::msg)?;
    }
    log::info!(
        "event=cli_start module=cli status=ok version={} backend={}",
        core_version(),
        config.backend
    );

    let storage = config
        .open_storage()
        .with_context(|| format!("failed to open {} storage", config.backend))?;
    let mut app = TodoApp::start(storage);

    match cli.command.unwrap_or(Commands::List { search: None }) {
        Commands::Add { title } => {
            let outcome = app.dispatch(Intent::Add(title.join(" ")))?;
            report(&outcome);
            print!("{}", render_text(&app.view()));
        }
        Commands::Toggle { id } => {
            let outcome = app.dispatch(Intent::Toggle(id))?;
            report(&outcome);
            print!("{}", render_text(&app.view()));
        }
        Commands::Delete { id } => {
            let outcome = app.dispatch(Intent::Delete(id))?;
            report(&outcome);
            print!("{}", render_text(&app.view()));
        }
        Commands::List { search } => {
            if let Some(term) = search {
                app.dispatch(Intent::Search(term))?;
            }
            print!("{}", render_text(&app.view()));
        }
        Commands::Gauge => println!("{}", app.view().gauge.to_svg()),
        Commands::Shell => run_shell(&mut app)?,
    }

    Ok(())
}

fn build_config(cli: &Cli) -> Result<AppConfig> {
    let defaults = AppConfig::default();
    let config = AppConfig {
        backend: cli.backend,
        data_dir: cli.data.clone().unwrap_or(defaults.data_dir),
        log_level: cli.log_level.clone().unwrap_or(defaults.log_level),
        log_dir: cli.log_dir.clone(),
    };
    config.validate().map_err(anyhow::Error::msg)?;
    Ok(config)
}

fn run_shell<S: KeyValueStorage>(app: &mut TodoApp<S>) -> Result<()> {
    app.subscribe(|view| print!("{}", render_text(view)));
    print!("{}", render_text(&app.view()));
    println!("{}", shell::HELP);

    let stdin = std::io::stdin();
    let mut line = String::new();
    loop {
        line.clear();
        if stdin.read_line(&mut line).context("failed to read stdin")? == 0 {
            break;
        }
        match shell::parse_line(&line) {
            Ok(shell::ShellCommand::Intent(intent)) => {
                let outcome = app.dispatch(intent)?;
                report(&outcome);
            }
            Ok(shell::ShellCommand::Help) => println!("{}", shell::HELP),
            Ok(shell::ShellCommand::Quit) => break,
            Ok(shell::ShellCommand::Empty) => {}
            Err(message) => println!("{message}\n{}", shell::HELP),
        }
    }
    Ok(())
}

fn report(outcome: &IntentOutcome) {
    match outcome {
        IntentOutcome::Added(todo) => println!("added {}", todo.id),
        IntentOutcome::Rejected => println!("title is empty; nothing added"),
        IntentOutcome::Toggled(id) => println!("toggled {id}"),
        IntentOutcome::Deleted(id) => println!("deleted {id}"),
        IntentOutcome::UnknownId(id) => println!("no todo with id {id}"),
        IntentOutcome::Searched => {}
    }
}

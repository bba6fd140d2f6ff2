//! contacts - A small address book for the terminal
//!
//! Usage:
//!   contacts                        Start the interactive shell
//!   contacts run add John 12345     Run a single command and save
//!   contacts path                   Show where the book and config live

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use contacts_core::{Config, Paths};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use contacts::commands::Dispatcher;
use contacts::repl;
use contacts::session::Session;
use contacts::store::BookStore;

/// contacts - A small address book for the terminal
#[derive(Parser)]
#[command(name = "contacts")]
#[command(about = "Address book with phone numbers and birthday reminders")]
#[command(version)]
#[command(after_help = r#"SHELL COMMANDS:
    hello                              Greet the assistant
    add <name> <phone>                 Add a contact (or another phone)
    change <name> <phone>              Replace a contact's phones
    phone <name>                       Show a contact's phones
    all                                List every contact
    add-birthday <name> <DD.MM.YYYY>   Set a birthday
    show-birthday <name>               Show a birthday
    birthdays [days]                   Upcoming birthdays (default: 7 days)
    close | exit                       Save and leave

EXAMPLES:
    contacts                           # Interactive shell
    contacts run add John 5551234      # One-shot command
    contacts run birthdays 30          # Birthdays in the next 30 days
    contacts --file ./team.bin         # Use another address book

CONFIGURATION:
    ~/.config/contacts/config.toml
        book_file = "/path/to/addressbook.bin"
        birthday_window = 7
        leap_day = "feb28"     # or "mar1"
        history = true

Set RUST_LOG=debug for diagnostics on stderr.
"#)]
struct Cli {
    /// Address book file (overrides config)
    #[arg(long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Default look-ahead for `birthdays`, in days (overrides config)
    #[arg(long, global = true, value_name = "DAYS")]
    window: Option<u32>,

    /// Configuration file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive shell (default)
    #[command(alias = "repl")]
    Shell,

    /// Run a single shell command, print the reply, and save
    #[command(alias = "r")]
    Run {
        /// Command and its arguments, e.g. `add John 5551234`
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Show the address book and config file locations
    Path,
}

/// Everything resolved from flags, config file, and defaults
struct Settings {
    paths: Paths,
    config_file: PathBuf,
    config: Config,
    book_file: PathBuf,
    dispatcher: Dispatcher,
}

impl Settings {
    fn resolve(cli: &Cli) -> Result<Self> {
        let paths = Paths::new();
        let (config_file, config) = match &cli.config {
            Some(path) => (path.clone(), Config::load_from(path)?),
            None => (paths.config_file(), Config::load(&paths)?),
        };
        let book_file = cli.file.clone().unwrap_or_else(|| config.book_file(&paths));
        let window = cli.window.unwrap_or(config.birthday_window);
        let dispatcher = Dispatcher::new(window, config.leap_day);

        Ok(Self {
            paths,
            config_file,
            config,
            book_file,
            dispatcher,
        })
    }

    fn open_session(&self) -> Result<Session> {
        Session::open(BookStore::new(&self.book_file), self.dispatcher)
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let settings = Settings::resolve(&cli)?;

    match cli.command {
        Some(Commands::Shell) | None => cmd_shell(&settings),
        Some(Commands::Run { words }) => cmd_run(&settings, &words),
        Some(Commands::Path) => cmd_path(&settings),
    }
}

/// Interactive shell
fn cmd_shell(settings: &Settings) -> Result<()> {
    let mut session = settings.open_session()?;
    let history = settings
        .config
        .history
        .then(|| settings.paths.history_file());

    repl::run(&mut session, history).inspect_err(|e| {
        tracing::error!(error = %e, "address book was not saved");
    })
}

/// One command, then save
fn cmd_run(settings: &Settings, words: &[String]) -> Result<()> {
    let mut session = settings.open_session()?;

    let farewell = repl::drive(
        &mut session,
        std::iter::once(words.join(" ")),
        repl::print_reply,
    )
    .inspect_err(|e| {
        tracing::error!(error = %e, "address book was not saved");
    })?;

    if let Some(reply) = farewell {
        repl::print_reply(&reply);
    }
    Ok(())
}

fn cmd_path(settings: &Settings) -> Result<()> {
    println!("  {}   {}", "Book:".cyan(), settings.book_file.display());
    println!("  {} {}", "Config:".cyan(), settings.config_file.display());
    println!(
        "  {} {} days, leap day {}",
        "Birthdays:".cyan(),
        settings.dispatcher.window_days,
        settings.dispatcher.leap_day.as_str()
    );
    if !settings.config_file.exists() {
        println!();
        println!("No config file yet; defaults are in use.");
    }
    Ok(())
}

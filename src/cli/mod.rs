mod counter;
mod db;
mod graphql;
mod serve;

pub use counter::CounterCommands;
pub use db::DbCommands;
pub use graphql::GraphqlCommands;
pub use serve::ServeCommands;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ══════════════════════════════════════════════════════════════════════════════
// GLOBAL OPTIONS
// ══════════════════════════════════════════════════════════════════════════════

#[derive(Parser)]
#[command(name = "tally-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Relay-style GraphQL counter service")]
#[command(long_about = r#"
tally keeps named counters in a local sled database and exposes them
through a Relay-flavored GraphQL API.

EXAMPLES:
  # Register a counter
  tally-cli counter create visits

  # Bump it
  tally-cli counter increment visits

  # Start the GraphQL server
  tally-cli serve http --port 4000

  # Run a query in-process
  tally-cli graphql query '{ counters { myId value } }'

ENVIRONMENT VARIABLES:
  TALLY_DB     Database path (default: ~/.local/share/tally/db)
  TALLY_LOG    Log level (trace, debug, info, warn, error)
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalOptions {
    /// Path to the counter database
    #[arg(short, long, env = "TALLY_DB", global = true)]
    #[arg(default_value = "~/.local/share/tally/db")]
    pub db_path: String,

    /// Log level
    #[arg(short, long, env = "TALLY_LOG", global = true)]
    #[arg(value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Output format for commands that produce output
    #[arg(short, long, global = true)]
    #[arg(value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Quiet mode - suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

// ══════════════════════════════════════════════════════════════════════════════
// VALUE ENUMS
// ══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Elvish,
    PowerShell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OperationArg {
    Created,
    Incremented,
    Decremented,
    Deleted,
}

// ══════════════════════════════════════════════════════════════════════════════
// COMMANDS
// ══════════════════════════════════════════════════════════════════════════════

#[derive(Subcommand)]
pub enum Commands {
    /// Counter operations (create, get, list, increment, decrement, delete)
    #[command(visible_alias = "c")]
    Counter {
        #[command(subcommand)]
        command: CounterCommands,
    },

    /// Show recent events from the audit log
    #[command(visible_alias = "ev")]
    Events {
        /// Number of events to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,

        /// Filter by operation
        #[arg(long, value_enum)]
        operation: Option<OperationArg>,

        /// Show full event details
        #[arg(long)]
        full: bool,
    },

    /// Start the GraphQL server
    #[command(visible_alias = "srv")]
    Serve {
        #[command(subcommand)]
        command: ServeCommands,
    },

    /// GraphQL operations
    #[command(visible_alias = "gql")]
    Graphql {
        #[command(subcommand)]
        command: GraphqlCommands,
    },

    /// Database operations (stats, path, reset)
    #[command(visible_alias = "database")]
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print version information
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    // Catches argument conflicts (duplicate shorts, bad defaults) that clap
    // otherwise only asserts at startup.
    #[test]
    fn command_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn limit_shorts_do_not_collide_with_log_level() {
        let cli = Cli::try_parse_from(["tally-cli", "events", "-n", "5", "-l", "debug"]).unwrap();
        assert!(matches!(cli.global.log_level, LogLevel::Debug));
        match cli.command {
            Commands::Events { limit, .. } => assert_eq!(limit, 5),
            _ => panic!("expected events command"),
        }

        let cli = Cli::try_parse_from(["tally-cli", "counter", "list", "-n", "5"]).unwrap();
        match cli.command {
            Commands::Counter {
                command: CounterCommands::List { limit },
            } => assert_eq!(limit, 5),
            _ => panic!("expected counter list command"),
        }
    }
}

use clap::Subcommand;

#[derive(Subcommand)]
pub enum DbCommands {
    /// Show database statistics
    Stats {
        /// Show per-counter values
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the database path
    Path,

    /// Delete all data and start over
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

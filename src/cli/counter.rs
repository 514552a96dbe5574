use clap::Subcommand;

#[derive(Subcommand)]
pub enum CounterCommands {
    /// Register a new counter starting at zero
    Create {
        /// Logical id of the counter
        my_id: String,
    },

    /// Get a counter by logical id
    Get {
        /// Logical id of the counter
        my_id: String,
    },

    /// List all counters
    #[command(visible_alias = "ls")]
    List {
        /// Maximum number of counters to show
        #[arg(short = 'n', long, default_value = "100")]
        limit: usize,
    },

    /// Add one to a counter
    #[command(visible_alias = "inc")]
    Increment {
        /// Logical id of the counter
        my_id: String,
    },

    /// Subtract one from a counter
    #[command(visible_alias = "dec")]
    Decrement {
        /// Logical id of the counter
        my_id: String,
    },

    /// Delete a counter
    #[command(visible_alias = "rm")]
    Delete {
        /// Logical id of the counter
        my_id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

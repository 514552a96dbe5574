use clap::Subcommand;

#[derive(Subcommand)]
pub enum GraphqlCommands {
    /// Print the schema SDL
    Schema {
        /// Output file (- for stdout)
        #[arg(default_value = "-")]
        output: String,
    },

    /// Execute a query against the local database
    Query {
        /// Query string, or @file to read from a file
        query: String,

        /// Variables as a JSON object
        #[arg(short, long)]
        variables: Option<String>,

        /// Pretty print the response
        #[arg(short, long)]
        pretty: bool,
    },

    /// Execute a mutation against the local database
    Mutate {
        /// Mutation string, or @file to read from a file
        mutation: String,

        /// Variables as a JSON object
        #[arg(short, long)]
        variables: Option<String>,

        /// Show the request without executing it
        #[arg(long)]
        dry_run: bool,
    },
}

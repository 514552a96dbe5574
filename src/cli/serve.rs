use clap::Subcommand;

#[derive(Subcommand)]
pub enum ServeCommands {
    /// Serve the GraphQL API over HTTP
    Http {
        /// Port to listen on
        #[arg(short, long, env = "TALLY_PORT", default_value = "4000")]
        port: u16,

        /// Host to bind to
        #[arg(long, env = "TALLY_HOST", default_value = "127.0.0.1")]
        host: String,
    },
}

//! tally CLI entrypoint

use anyhow::{anyhow, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell as ClapShell};
use std::io::Write;
use std::sync::Arc;

use tally::{build_schema, Operation, SledStore, Store};

mod cli;
use cli::*;

// ══════════════════════════════════════════════════════════════════════════════
// UTILITIES
// ══════════════════════════════════════════════════════════════════════════════

fn expand_path(path: &str) -> String {
    if path.starts_with("~/") {
        if let Some(home) = dirs::home_dir() {
            return path.replacen("~", &home.to_string_lossy(), 1);
        }
    }
    path.to_string()
}

fn operation_from_arg(arg: OperationArg) -> Operation {
    match arg {
        OperationArg::Created => Operation::Created,
        OperationArg::Incremented => Operation::Incremented,
        OperationArg::Decremented => Operation::Decremented,
        OperationArg::Deleted => Operation::Deleted,
    }
}

fn output_value(value: &serde_json::Value, format: OutputFormat) -> Result<()> {
    let output = match format {
        OutputFormat::Json => serde_json::to_string(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
        OutputFormat::Text => serde_json::to_string_pretty(value)?,
    };
    println!("{}", output);
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    std::io::stdout().flush()?;
    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}

// ══════════════════════════════════════════════════════════════════════════════
// MAIN
// ══════════════════════════════════════════════════════════════════════════════

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.global.log_level {
        LogLevel::Trace => "trace",
        LogLevel::Debug => "debug",
        LogLevel::Info => "info",
        LogLevel::Warn => "warn",
        LogLevel::Error => "error",
    };
    std::env::set_var("RUST_LOG", log_level);
    tracing_subscriber::fmt::init();

    let db_path = expand_path(&cli.global.db_path);
    let output_format = cli.global.output;
    let quiet = cli.global.quiet;

    // Ensure parent directory exists
    if let Some(parent) = std::path::Path::new(&db_path).parent() {
        std::fs::create_dir_all(parent)?;
    }

    let store = Arc::new(SledStore::open(&db_path)?);

    match cli.command {
        Commands::Counter { command } => {
            handle_counter_command(command, &store, output_format, quiet)?;
        }

        Commands::Events { limit, operation, full } => {
            let filter = operation.map(operation_from_arg);
            for event in store.get_events(limit)? {
                if let Some(op) = filter {
                    if event.operation != op {
                        continue;
                    }
                }
                if full {
                    println!("{}", serde_json::to_string_pretty(&event)?);
                } else {
                    println!(
                        "[{}] {} {} value={}",
                        event.timestamp.format("%Y-%m-%d %H:%M:%S"),
                        event.operation,
                        event.my_id,
                        event.value
                    );
                }
            }
        }

        Commands::Serve { command } => {
            handle_serve_command(command, store, quiet).await?;
        }

        Commands::Graphql { command } => {
            handle_graphql_command(command, &store).await?;
        }

        Commands::Db { command } => {
            handle_db_command(command, &db_path, &store, quiet)?;
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let shell = match shell {
                Shell::Bash => ClapShell::Bash,
                Shell::Zsh => ClapShell::Zsh,
                Shell::Fish => ClapShell::Fish,
                Shell::Elvish => ClapShell::Elvish,
                Shell::PowerShell => ClapShell::PowerShell,
            };
            generate(shell, &mut cmd, "tally-cli", &mut std::io::stdout());
        }

        Commands::Version => {
            println!("tally {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

// ══════════════════════════════════════════════════════════════════════════════
// COMMAND HANDLERS
// ══════════════════════════════════════════════════════════════════════════════

fn handle_counter_command(
    command: CounterCommands,
    store: &Arc<SledStore>,
    output_format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    match command {
        CounterCommands::Create { my_id } => {
            let created = store.create_counter(&my_id)?;
            if !quiet {
                println!("Created counter: {}", created.my_id);
            }
            output_value(&serde_json::to_value(&created)?, output_format)?;
        }
        CounterCommands::Get { my_id } => match store.get_counter(&my_id)? {
            Some(counter) => output_value(&serde_json::to_value(&counter)?, output_format)?,
            None => println!("Counter not found"),
        },
        CounterCommands::List { limit } => {
            let counters = store.get_counters()?;
            match output_format {
                OutputFormat::Json | OutputFormat::Yaml => {
                    let shown: Vec<_> = counters.into_iter().take(limit).collect();
                    output_value(&serde_json::to_value(&shown)?, output_format)?;
                }
                OutputFormat::Text => {
                    for counter in counters.into_iter().take(limit) {
                        println!("{} = {}", counter.my_id, counter.value);
                    }
                }
            }
        }
        CounterCommands::Increment { my_id } => {
            let updated = store.increment_counter(&my_id)?;
            match updated.iter().find(|c| c.my_id == my_id) {
                Some(counter) => println!("{} = {}", counter.my_id, counter.value),
                None => println!("Counter not found: {}", my_id),
            }
        }
        CounterCommands::Decrement { my_id } => {
            let updated = store.decrement_counter(&my_id)?;
            match updated.iter().find(|c| c.my_id == my_id) {
                Some(counter) => println!("{} = {}", counter.my_id, counter.value),
                None => println!("Counter not found: {}", my_id),
            }
        }
        CounterCommands::Delete { my_id, force } => {
            if !force && !confirm(&format!("Delete counter {}?", my_id))? {
                println!("Aborted");
                return Ok(());
            }
            store.delete_counter(&my_id)?;
            if !quiet {
                println!("Deleted counter: {}", my_id);
            }
        }
    }
    Ok(())
}

async fn handle_serve_command(
    command: ServeCommands,
    store: Arc<SledStore>,
    quiet: bool,
) -> Result<()> {
    match command {
        ServeCommands::Http { port, host } => {
            use async_graphql::http::GraphiQLSource;
            use axum::{response::Html, routing::get, Json, Router};

            let schema = build_schema(store);

            // GraphQL POST handler
            let schema_post = schema.clone();
            let graphql_handler = move |Json(request): Json<async_graphql::Request>| {
                let schema = schema_post.clone();
                async move {
                    let response = schema.execute(request).await;
                    Json(response)
                }
            };

            // GraphiQL playground
            let graphiql_handler =
                || async { Html(GraphiQLSource::build().endpoint("/graphql").finish()) };

            let health_handler = || async { "OK" };

            let app = Router::new()
                .route(
                    "/graphql",
                    axum::routing::post(graphql_handler).get(graphiql_handler),
                )
                .route("/health", get(health_handler));

            let addr = format!("{}:{}", host, port);
            tracing::info!(%addr, "starting GraphQL server");
            if !quiet {
                println!("GraphQL server running at http://{}/graphql", addr);
                println!("GraphiQL playground at http://{}/graphql", addr);
            }

            let listener = tokio::net::TcpListener::bind(&addr).await?;
            axum::serve(listener, app).await?;
        }
    }
    Ok(())
}

async fn handle_graphql_command(command: GraphqlCommands, store: &Arc<SledStore>) -> Result<()> {
    match command {
        GraphqlCommands::Schema { output } => {
            let schema = build_schema(store.clone());
            let sdl = schema.sdl();
            if output == "-" {
                println!("{}", sdl);
            } else {
                std::fs::write(&output, sdl)?;
                println!("Schema written to {}", output);
            }
        }
        GraphqlCommands::Query { query, variables, pretty } => {
            let schema = build_schema(store.clone());

            let query_str = if let Some(path) = query.strip_prefix('@') {
                std::fs::read_to_string(path)?
            } else {
                query
            };

            let mut request = async_graphql::Request::new(query_str);

            if let Some(vars) = variables {
                let vars: serde_json::Value = serde_json::from_str(&vars)?;
                request = request.variables(async_graphql::Variables::from_json(vars));
            }

            let response = schema.execute(request).await;
            let output = if pretty {
                serde_json::to_string_pretty(&response)?
            } else {
                serde_json::to_string(&response)?
            };
            println!("{}", output);
        }
        GraphqlCommands::Mutate { mutation, variables, dry_run } => {
            let schema = build_schema(store.clone());

            let mutation_str = if let Some(path) = mutation.strip_prefix('@') {
                std::fs::read_to_string(path)?
            } else {
                mutation
            };

            if dry_run {
                println!("Dry run - would execute:");
                println!("{}", mutation_str);
                if let Some(vars) = variables {
                    println!("Variables: {}", vars);
                }
                return Ok(());
            }

            let mut request = async_graphql::Request::new(mutation_str);

            if let Some(vars) = variables {
                let vars: serde_json::Value = serde_json::from_str(&vars)?;
                request = request.variables(async_graphql::Variables::from_json(vars));
            }

            let response = schema.execute(request).await;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }
    Ok(())
}

fn handle_db_command(
    command: DbCommands,
    db_path: &str,
    store: &Arc<SledStore>,
    quiet: bool,
) -> Result<()> {
    match command {
        DbCommands::Stats { verbose } => {
            println!("Database path: {}", db_path);
            if let Ok(meta) = std::fs::metadata(db_path) {
                if meta.is_dir() {
                    let size: u64 = walkdir::WalkDir::new(db_path)
                        .into_iter()
                        .filter_map(|e| e.ok())
                        .filter_map(|e| e.metadata().ok())
                        .map(|m| m.len())
                        .sum();
                    println!("Size: {} bytes ({:.2} MB)", size, size as f64 / 1_000_000.0);
                }
            }
            let counters = store.get_counters()?;
            println!("Counters: {}", counters.len());

            if verbose {
                for counter in counters {
                    println!("  {} = {}", counter.my_id, counter.value);
                }
            }
        }
        DbCommands::Path => {
            println!("{}", db_path);
        }
        DbCommands::Reset { force } => {
            if !force && !confirm("This will DELETE all data. Are you sure?")? {
                println!("Aborted");
                return Ok(());
            }
            store.flush()?;
            drop_and_recreate(db_path).map_err(|e| anyhow!("Reset failed: {}", e))?;
            if !quiet {
                println!("Database reset");
            }
        }
    }
    Ok(())
}

fn drop_and_recreate(db_path: &str) -> std::io::Result<()> {
    std::fs::remove_dir_all(db_path)?;
    std::fs::create_dir_all(db_path)
}

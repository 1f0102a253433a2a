use anyhow::{Context, Result};
use clap::Parser;

use graphql_basics::cli::handlers::{
    CommandContext, handle_mutate, handle_query, handle_schema, handle_serve,
};
use graphql_basics::cli::{Cli, Commands};
use graphql_basics::config::AppConfig;
use graphql_basics::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.clone());

    if let Commands::Schema = cli.command {
        return handle_schema();
    }

    let ctx = load_context(&cli)?;
    match cli.command {
        Commands::Serve { host, port } => handle_serve(ctx, host, port),
        Commands::Query { query, variables } => handle_query(ctx, query, variables),
        Commands::Mutate {
            mutation,
            variables,
        } => handle_mutate(ctx, mutation, variables),
        Commands::Schema => handle_schema(),
    }
}

fn load_context(cli: &Cli) -> Result<CommandContext> {
    let cwd = std::env::current_dir()?;
    let (config, path) = AppConfig::load(cli.config.as_deref(), &cwd)
        .context("Failed to load configuration")?;
    Ok(CommandContext::new(config, path))
}

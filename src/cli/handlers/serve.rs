use anyhow::{Context, Result};
use colored::Colorize;

use super::CommandContext;
use crate::graphql::run_server;

pub fn handle_serve(mut ctx: CommandContext, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(h) = host {
        ctx.config.server.host = h;
    }
    if let Some(p) = port {
        ctx.config.server.port = p;
    }
    let addr = ctx.config.server.socket_addr()?;
    let schema = ctx.schema()?;

    if let Some(ref path) = ctx.config_path {
        println!("{} {}", "Config:".dimmed(), path.display());
    }
    println!(
        "{} http://{}",
        "Starting GraphQL server on".green(),
        addr.to_string().cyan()
    );
    println!("GraphiQL: http://{}", addr);

    tokio::runtime::Runtime::new()?
        .block_on(run_server(schema, addr))
        .context("GraphQL server failed")?;
    Ok(())
}

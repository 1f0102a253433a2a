use std::net::SocketAddr;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    Router,
    response::{Html, IntoResponse},
    routing::get,
};

use super::BlogSchema;
use crate::error::Result;

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/").finish())
}

/// `GET /` serves GraphiQL, `POST /` executes GraphQL requests.
pub fn router(schema: BlogSchema) -> Router {
    Router::new().route("/", get(graphiql).post_service(GraphQL::new(schema)))
}

pub async fn run_server(schema: BlogSchema, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "GraphQL server listening");
    axum::serve(listener, router(schema)).await?;
    Ok(())
}

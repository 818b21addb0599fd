//! HTTP boundary of the GraphQL API.

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::response::Html;
use axum::routing::{get, post_service};
use axum::Router;
use tracing::info;

use crate::config::GraphQlConfig;
use crate::graphql_api::ApiSchema;

pub fn router(api_schema: ApiSchema, config: &GraphQlConfig) -> Router {
    let graphql = GraphQL::new(api_schema);

    let graphql_route = if config.graphiql {
        info!(path = %config.path, "GraphiQL enabled");
        let page = GraphiQLSource::build().endpoint(&config.path).finish();
        get(move || async move { Html(page) }).post_service(graphql)
    } else {
        post_service(graphql)
    };

    Router::new()
        .route("/", get(|| async { "Ready to roll!" }))
        .route(&config.path, graphql_route)
}

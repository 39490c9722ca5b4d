//! GraphQL endpoint and GraphiQL page handlers.

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};

use crate::api::middleware::RequestId;
use crate::state::AppState;

/// Routes served at the configured GraphQL path.
///
/// - `POST {path}` - Execute a GraphQL request
/// - `GET {path}`  - GraphiQL IDE, or 404 when disabled
pub fn graphql_routes(path: &str) -> Router<AppState> {
    Router::new().route(path, get(graphiql).post(graphql_handler))
}

/// POST - executes the request with the request ID attached as data.
async fn graphql_handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let request = request.into_inner().data(request_id);
    state.schema.execute(request).await.into()
}

async fn graphiql(State(state): State<AppState>) -> Response {
    if !state.graphql.graphiql {
        return StatusCode::NOT_FOUND.into_response();
    }

    Html(GraphiQLSource::build().endpoint(&state.graphql.path).finish()).into_response()
}

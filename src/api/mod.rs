//! API module: GraphQL surface, HTTP handlers, middleware, and DTOs.

pub mod dto;
pub mod graphql;
pub mod handlers;
pub mod middleware;
pub mod routes;

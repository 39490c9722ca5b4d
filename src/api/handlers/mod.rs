//! HTTP request handlers.

pub mod graphql;
pub mod health;

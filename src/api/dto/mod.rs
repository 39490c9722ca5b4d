//! Data Transfer Objects for the API.
//!
//! DTOs are organized by domain:
//! - `user` - GraphQL object and input types for users
//! - `health` - Health check response bodies

mod health;
mod user;

pub use health::{ComponentHealth, HealthResponse, HealthStatus};
pub use user::{
    AddressInput, AddressResponse, RoleValue, UserDataInput, UserDataResponse, UserInput,
    UserResponse,
};

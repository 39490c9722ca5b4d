//! Repository layer for data access operations.
//!
//! The only store is the in-process user map; there is no persistence.

mod user_repo;

pub use user_repo::UserRepository;

/// Aggregates all repositories for convenient access.
///
/// Cloning is cheap; every repository shares its store through an `Arc`.
#[derive(Clone, Default)]
pub struct Repositories {
    pub users: UserRepository,
}

impl Repositories {
    /// Creates a new Repositories instance backed by empty stores.
    pub fn new() -> Self {
        Self {
            users: UserRepository::new(),
        }
    }
}

//! User service for business logic operations.
//!
//! Turns missing records into uniform `NotFound` errors and logs every
//! mutation. Uniqueness rules live in the repository.

use crate::error::{AppError, AppResult, Resource};
use crate::models::{Address, NewUser, NewUserData, User, UserData};
use crate::repositories::UserRepository;

/// User service wrapping the `UserRepository`.
#[derive(Clone)]
pub struct UserService {
    repo: UserRepository,
}

impl UserService {
    /// Creates a new UserService with the given repository.
    pub fn new(repo: UserRepository) -> Self {
        Self { repo }
    }

    /// Lists all users.
    pub fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list_all()
    }

    /// Number of stored users.
    pub fn count_users(&self) -> AppResult<usize> {
        self.repo.count()
    }

    /// Gets a user by their ID.
    ///
    /// # Returns
    /// The user if found, or `NotFound` error
    pub fn get_user(&self, id: &str) -> AppResult<User> {
        self.repo
            .find_by_id(id)?
            .ok_or_else(|| AppError::not_found(Resource::User, id))
    }

    /// Gets the user data owned by the given user.
    pub fn get_user_data(&self, user_id: &str) -> AppResult<UserData> {
        self.repo
            .find_user_data_by_user_id(user_id)?
            .ok_or_else(|| AppError::not_found(Resource::UserData, user_id))
    }

    /// Gets the address owned by the given user's data.
    pub fn get_address(&self, user_id: &str) -> AppResult<Address> {
        self.repo
            .find_address_by_user_id(user_id)?
            .ok_or_else(|| AppError::not_found(Resource::Address, user_id))
    }

    /// Creates a user with its data and address.
    ///
    /// # Returns
    /// Every stored user, including the new one
    pub fn add_user(&self, new_user: NewUser, new_user_data: NewUserData) -> AppResult<Vec<User>> {
        let users = self.repo.create(new_user, new_user_data)?;
        tracing::info!(total_users = users.len(), "User created");
        Ok(users)
    }

    /// Deletes a user.
    ///
    /// # Returns
    /// Every remaining user, or `NotFound` if the ID is unknown
    pub fn delete_user(&self, id: &str) -> AppResult<Vec<User>> {
        let users = self.repo.delete(id)?;
        tracing::info!(user_id = %id, total_users = users.len(), "User deleted");
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewAddress;

    fn service() -> UserService {
        UserService::new(UserRepository::new())
    }

    fn add(service: &UserService, name: &str, telephone: &str, with_address: bool) -> String {
        let user = NewUser {
            name: Some(name.to_string()),
            telephone: Some(telephone.to_string()),
            ..Default::default()
        };
        let data = NewUserData {
            email: Some(format!("{name}@x.com")),
            address: with_address.then(NewAddress::default),
            ..Default::default()
        };
        service
            .add_user(user, data)
            .unwrap()
            .into_iter()
            .find(|u| u.name.as_deref() == Some(name))
            .unwrap()
            .id
    }

    #[test]
    fn test_get_user_not_found() {
        let err = service().get_user("missing").unwrap_err();
        assert!(matches!(err, AppError::NotFound { resource: Resource::User, ref id } if id == "missing"));
    }

    #[test]
    fn test_get_user_data_not_found() {
        let err = service().get_user_data("missing").unwrap_err();
        assert_eq!(err.to_string(), "User data for the given user ID does not exist");
    }

    #[test]
    fn test_get_address_not_found_when_user_has_no_address() {
        let service = service();
        let id = add(&service, "ann", "111", false);
        let err = service.get_address(&id).unwrap_err();
        assert!(matches!(err, AppError::NotFound { resource: Resource::Address, .. }));
    }

    #[test]
    fn test_lookups_by_user_id() {
        let service = service();
        let id = add(&service, "ann", "111", true);

        assert_eq!(service.get_user(&id).unwrap().id, id);
        assert_eq!(service.get_user_data(&id).unwrap().user_id, id);
        assert_eq!(service.get_address(&id).unwrap().user_id, id);
    }

    #[test]
    fn test_delete_user() {
        let service = service();
        let ann = add(&service, "ann", "111", false);
        let bob = add(&service, "bob", "222", false);

        let remaining = service.delete_user(&ann).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, bob);

        let err = service.delete_user(&ann).unwrap_err();
        assert_eq!(err.to_string(), "User with the given ID does not exist");
        assert_eq!(service.count_users().unwrap(), 1);
    }
}

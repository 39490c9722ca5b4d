//! User repository over the in-memory user store.
//!
//! Every operation takes the single store lock for its whole duration, so the
//! uniqueness checks and the insert (or the existence check and the removal)
//! happen atomically with respect to concurrent requests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use uuid::Uuid;

use crate::error::{AppError, AppResult, Resource, UniqueKey};
use crate::models::{Address, NewUser, NewUserData, User, UserData};

type UserMap = HashMap<String, User>;

/// User repository holding the shared user map.
///
/// Cloning shares the same underlying store.
#[derive(Clone, Default)]
pub struct UserRepository {
    store: Arc<Mutex<UserMap>>,
}

impl UserRepository {
    /// Creates a repository with an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, UserMap>> {
        self.store
            .lock()
            .map_err(|e| anyhow::anyhow!("user store lock poisoned: {}", e).into())
    }

    /// Lists all stored users. No ordering is guaranteed.
    pub fn list_all(&self) -> AppResult<Vec<User>> {
        let store = self.lock()?;
        Ok(snapshot(&store))
    }

    /// Number of stored users.
    pub fn count(&self) -> AppResult<usize> {
        Ok(self.lock()?.len())
    }

    /// Finds a user by their ID.
    pub fn find_by_id(&self, user_id: &str) -> AppResult<Option<User>> {
        let store = self.lock()?;
        Ok(store.get(user_id).cloned())
    }

    /// Finds the user data whose `user_id` back-reference matches.
    ///
    /// Scans the whole store instead of keying on the user id.
    pub fn find_user_data_by_user_id(&self, user_id: &str) -> AppResult<Option<UserData>> {
        let store = self.lock()?;
        Ok(find_user_data(&store, user_id).cloned())
    }

    /// Finds the address of the user data whose `user_id` matches.
    pub fn find_address_by_user_id(&self, user_id: &str) -> AppResult<Option<Address>> {
        let store = self.lock()?;
        Ok(find_user_data(&store, user_id).and_then(|data| data.address.clone()))
    }

    /// Creates a user together with its user data and optional address.
    ///
    /// Fails with `DuplicateKey` when the Keycloak subject, telephone or email
    /// is already taken, or when a supplied id is already stored. Nothing is
    /// written unless every check passes.
    ///
    /// # Returns
    /// The full list of users after the insert
    pub fn create(&self, new_user: NewUser, new_user_data: NewUserData) -> AppResult<Vec<User>> {
        let mut store = self.lock()?;

        if let Some(key) = find_conflict(&store, &new_user, &new_user_data) {
            tracing::debug!(key = %key, "Rejected user with duplicate key");
            return Err(AppError::duplicate(key));
        }

        let user_id = new_user
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(generate_id);

        let address = new_user_data
            .address
            .map(|address| address.into_address(generate_id(), user_id.clone()));

        let user_data = UserData {
            id: generate_id(),
            email: new_user_data.email,
            email_verified: new_user_data.email_verified,
            role: new_user_data.role,
            avatar_file_id: new_user_data.avatar_file_id,
            address,
            user_id: user_id.clone(),
        };

        let user = User {
            id: user_id.clone(),
            sub_keycloak: new_user.sub_keycloak,
            name: new_user.name,
            telephone: new_user.telephone,
            user_data: Some(user_data),
        };

        store.insert(user_id, user);
        Ok(snapshot(&store))
    }

    /// Deletes a user along with the records it owns.
    ///
    /// # Returns
    /// The full list of remaining users, or `NotFound` if the id is unknown
    pub fn delete(&self, user_id: &str) -> AppResult<Vec<User>> {
        let mut store = self.lock()?;

        if store.remove(user_id).is_none() {
            return Err(AppError::not_found(Resource::User, user_id));
        }

        Ok(snapshot(&store))
    }
}

fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

fn snapshot(store: &UserMap) -> Vec<User> {
    store.values().cloned().collect()
}

fn find_user_data<'a>(store: &'a UserMap, user_id: &str) -> Option<&'a UserData> {
    store
        .values()
        .filter_map(|user| user.user_data.as_ref())
        .find(|data| data.user_id == user_id)
}

/// Absent values never collide, only equal present ones.
fn same(stored: Option<&String>, candidate: Option<&String>) -> bool {
    matches!((stored, candidate), (Some(a), Some(b)) if a == b)
}

fn find_conflict(store: &UserMap, user: &NewUser, data: &NewUserData) -> Option<UniqueKey> {
    let users = || store.values();

    if users().any(|u| same(u.sub_keycloak.as_ref(), user.sub_keycloak.as_ref())) {
        return Some(UniqueKey::SubKeycloak);
    }

    if users().any(|u| same(u.telephone.as_ref(), user.telephone.as_ref())) {
        return Some(UniqueKey::Telephone);
    }

    if users().any(|u| {
        same(
            u.user_data.as_ref().and_then(|d| d.email.as_ref()),
            data.email.as_ref(),
        )
    }) {
        return Some(UniqueKey::Email);
    }

    match user.id.as_deref() {
        Some(id) if store.contains_key(id) => Some(UniqueKey::Id),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewAddress, Role};
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn new_user(name: &str, telephone: Option<&str>) -> NewUser {
        NewUser {
            name: Some(name.to_string()),
            telephone: telephone.map(String::from),
            ..Default::default()
        }
    }

    fn new_data(email: Option<&str>) -> NewUserData {
        NewUserData {
            email: email.map(String::from),
            role: Some(Role::User),
            ..Default::default()
        }
    }

    fn ids(users: &[User]) -> HashSet<String> {
        users.iter().map(|u| u.id.clone()).collect()
    }

    #[test]
    fn test_create_assigns_ids_and_back_references() {
        let repo = UserRepository::new();
        let mut data = new_data(Some("a@x.com"));
        data.address = Some(NewAddress {
            city: Some("Recife".to_string()),
            ..Default::default()
        });

        let users = repo.create(new_user("Ann", Some("111")), data).unwrap();
        assert_eq!(users.len(), 1);

        let user = &users[0];
        assert!(!user.id.is_empty());
        let user_data = user.user_data.as_ref().unwrap();
        assert!(!user_data.id.is_empty());
        assert_eq!(user_data.user_id, user.id);
        let address = user_data.address.as_ref().unwrap();
        assert!(!address.id.is_empty());
        assert_eq!(address.user_id, user.id);
        assert_eq!(address.city.as_deref(), Some("Recife"));

        let distinct: HashSet<&str> = [user.id.as_str(), user_data.id.as_str(), address.id.as_str()]
            .into_iter()
            .collect();
        assert_eq!(distinct.len(), 3);
    }

    #[test]
    fn test_create_keeps_supplied_id() {
        let repo = UserRepository::new();
        let user = NewUser {
            id: Some("fixed-id".to_string()),
            ..new_user("Ann", None)
        };
        repo.create(user, new_data(None)).unwrap();
        assert!(repo.find_by_id("fixed-id").unwrap().is_some());
    }

    #[test]
    fn test_create_generates_id_for_blank_supplied_id() {
        let repo = UserRepository::new();
        let user = NewUser {
            id: Some("  ".to_string()),
            ..new_user("Ann", None)
        };
        let users = repo.create(user, new_data(None)).unwrap();
        assert_ne!(users[0].id.trim(), "");
    }

    #[test]
    fn test_create_without_address() {
        let repo = UserRepository::new();
        let users = repo.create(new_user("Ann", None), new_data(None)).unwrap();
        assert!(users[0].user_data.as_ref().unwrap().address.is_none());
    }

    #[test]
    fn test_duplicate_telephone_rejected() {
        let repo = UserRepository::new();
        repo.create(new_user("Ann", Some("111")), new_data(Some("a@x.com")))
            .unwrap();

        let err = repo
            .create(new_user("Bob", Some("111")), new_data(Some("b@x.com")))
            .unwrap_err();
        assert!(matches!(err, AppError::DuplicateKey { key: UniqueKey::Telephone }));
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_duplicate_sub_keycloak_rejected() {
        let repo = UserRepository::new();
        let first = NewUser {
            sub_keycloak: Some("sub-1".to_string()),
            ..new_user("Ann", None)
        };
        let second = NewUser {
            sub_keycloak: Some("sub-1".to_string()),
            ..new_user("Bob", None)
        };
        repo.create(first, new_data(None)).unwrap();

        let err = repo.create(second, new_data(None)).unwrap_err();
        assert!(matches!(err, AppError::DuplicateKey { key: UniqueKey::SubKeycloak }));
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let repo = UserRepository::new();
        repo.create(new_user("Ann", Some("111")), new_data(Some("a@x.com")))
            .unwrap();

        let err = repo
            .create(new_user("Bob", Some("222")), new_data(Some("a@x.com")))
            .unwrap_err();
        assert!(matches!(err, AppError::DuplicateKey { key: UniqueKey::Email }));
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_duplicate_supplied_id_rejected() {
        let repo = UserRepository::new();
        let first = NewUser {
            id: Some("u1".to_string()),
            ..new_user("Ann", None)
        };
        let second = NewUser {
            id: Some("u1".to_string()),
            ..new_user("Bob", None)
        };
        repo.create(first, new_data(None)).unwrap();

        let err = repo.create(second, new_data(None)).unwrap_err();
        assert!(matches!(err, AppError::DuplicateKey { key: UniqueKey::Id }));
        let stored = repo.find_by_id("u1").unwrap().unwrap();
        assert_eq!(stored.name.as_deref(), Some("Ann"));
    }

    #[test]
    fn test_absent_keys_never_collide() {
        let repo = UserRepository::new();
        repo.create(new_user("Ann", None), new_data(None)).unwrap();
        let users = repo.create(new_user("Bob", None), new_data(None)).unwrap();
        assert_eq!(users.len(), 2);
    }

    #[test]
    fn test_sub_keycloak_checked_before_telephone() {
        let repo = UserRepository::new();
        let first = NewUser {
            sub_keycloak: Some("sub".to_string()),
            ..new_user("Ann", Some("111"))
        };
        let second = NewUser {
            sub_keycloak: Some("sub".to_string()),
            ..new_user("Bob", Some("111"))
        };
        repo.create(first, new_data(None)).unwrap();
        let err = repo.create(second, new_data(None)).unwrap_err();
        assert!(matches!(err, AppError::DuplicateKey { key: UniqueKey::SubKeycloak }));
    }

    #[test]
    fn test_find_by_id_missing() {
        let repo = UserRepository::new();
        assert!(repo.find_by_id("missing").unwrap().is_none());
    }

    #[test]
    fn test_find_user_data_and_address_by_user_id() {
        let repo = UserRepository::new();
        let mut data = new_data(Some("a@x.com"));
        data.address = Some(NewAddress {
            street: Some("Rua A".to_string()),
            ..Default::default()
        });
        let users = repo.create(new_user("Ann", None), data).unwrap();
        let id = users[0].id.clone();

        let user_data = repo.find_user_data_by_user_id(&id).unwrap().unwrap();
        assert_eq!(user_data.email.as_deref(), Some("a@x.com"));

        let address = repo.find_address_by_user_id(&id).unwrap().unwrap();
        assert_eq!(address.street.as_deref(), Some("Rua A"));

        assert!(repo.find_user_data_by_user_id("missing").unwrap().is_none());
        assert!(repo.find_address_by_user_id("missing").unwrap().is_none());
    }

    #[test]
    fn test_find_address_when_user_has_none() {
        let repo = UserRepository::new();
        let users = repo.create(new_user("Ann", None), new_data(None)).unwrap();
        assert!(repo.find_address_by_user_id(&users[0].id).unwrap().is_none());
    }

    #[test]
    fn test_delete_returns_remaining_users() {
        let repo = UserRepository::new();
        let users = repo.create(new_user("Ann", Some("1")), new_data(None)).unwrap();
        let ann = users[0].id.clone();
        let users = repo.create(new_user("Bob", Some("2")), new_data(None)).unwrap();
        let bob = users.iter().find(|u| u.id != ann).unwrap().id.clone();

        let remaining = repo.delete(&ann).unwrap();
        assert_eq!(ids(&remaining), HashSet::from([bob]));
        assert!(repo.find_by_id(&ann).unwrap().is_none());
    }

    #[test]
    fn test_delete_then_list_is_empty() {
        let repo = UserRepository::new();
        let users = repo.create(new_user("Ann", None), new_data(None)).unwrap();
        repo.delete(&users[0].id).unwrap();
        assert!(repo.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_delete_missing_leaves_store_unchanged() {
        let repo = UserRepository::new();
        repo.create(new_user("Ann", None), new_data(None)).unwrap();

        let err = repo.delete("missing").unwrap_err();
        assert!(matches!(err, AppError::NotFound { resource: Resource::User, .. }));
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_deleted_keys_can_be_reused() {
        let repo = UserRepository::new();
        let users = repo
            .create(new_user("Ann", Some("111")), new_data(Some("a@x.com")))
            .unwrap();
        repo.delete(&users[0].id).unwrap();

        let users = repo
            .create(new_user("Ann", Some("111")), new_data(Some("a@x.com")))
            .unwrap();
        assert_eq!(users.len(), 1);
    }

    #[test]
    fn test_list_is_stable_without_mutation() {
        let repo = UserRepository::new();
        repo.create(new_user("Ann", Some("1")), new_data(None)).unwrap();
        repo.create(new_user("Bob", Some("2")), new_data(None)).unwrap();

        let first = repo.list_all().unwrap();
        let second = repo.list_all().unwrap();
        assert_eq!(ids(&first), ids(&second));
    }

    #[test]
    fn test_clones_share_the_store() {
        let repo = UserRepository::new();
        let other = repo.clone();
        repo.create(new_user("Ann", None), new_data(None)).unwrap();
        assert_eq!(other.count().unwrap(), 1);
    }

    #[test]
    fn test_concurrent_creates_keep_telephone_unique() {
        let repo = UserRepository::new();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let repo = repo.clone();
                std::thread::spawn(move || {
                    repo.create(new_user(&format!("user-{i}"), Some("111")), new_data(None))
                        .is_ok()
                })
            })
            .collect();

        let created = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();
        assert_eq!(created, 1);
        assert_eq!(repo.count().unwrap(), 1);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn prop_create_with_unused_keys_adds_exactly_one(
            phones in proptest::collection::hash_set("[0-9]{3,8}", 1..12)
        ) {
            let repo = UserRepository::new();
            let mut previous: HashSet<String> = HashSet::new();

            for (i, phone) in phones.iter().enumerate() {
                let email = format!("user{i}@x.com");
                let users = repo
                    .create(new_user("u", Some(phone)), new_data(Some(&email)))
                    .unwrap();
                let current = ids(&users);

                prop_assert_eq!(current.len(), previous.len() + 1);
                prop_assert!(previous.is_subset(&current));
                previous = current;
            }
        }

        #[test]
        fn prop_duplicate_telephone_leaves_store_unchanged(phone in "[0-9]{3,8}") {
            let repo = UserRepository::new();
            let before = repo.create(new_user("Ann", Some(&phone)), new_data(None)).unwrap();

            let result = repo.create(new_user("Bob", Some(&phone)), new_data(None));
            prop_assert!(matches!(result, Err(AppError::DuplicateKey { key: UniqueKey::Telephone })), "expected DuplicateKey(Telephone), got {:?}", result);
            prop_assert_eq!(ids(&repo.list_all().unwrap()), ids(&before));
        }
    }
}

use serde::{Deserialize, Serialize};

/// Account role attached to a user's metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    User,
}

/// Stored account holder. Owns its `UserData`, which owns its `Address`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub sub_keycloak: Option<String>,
    pub name: Option<String>,
    pub telephone: Option<String>,
    pub user_data: Option<UserData>,
}

/// Account metadata. `user_id` always equals the owning user's id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    pub id: String,
    pub email: Option<String>,
    pub email_verified: bool,
    pub role: Option<Role>,
    pub avatar_file_id: Option<String>,
    pub address: Option<Address>,
    pub user_id: String,
}

/// Postal address. `user_id` always equals the owning user's id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: String,
    pub street: Option<String>,
    pub number: Option<String>,
    pub postal_code: Option<String>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub uf: Option<String>,
    pub complement: Option<String>,
    pub user_id: String,
}

/// NewUser payload for creating a user.
/// `id` is kept when supplied, otherwise generated on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewUser {
    pub id: Option<String>,
    pub sub_keycloak: Option<String>,
    pub name: Option<String>,
    pub telephone: Option<String>,
}

/// NewUserData payload, created together with its user
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewUserData {
    pub email: Option<String>,
    pub email_verified: bool,
    pub role: Option<Role>,
    pub avatar_file_id: Option<String>,
    pub address: Option<NewAddress>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewAddress {
    pub street: Option<String>,
    pub number: Option<String>,
    pub postal_code: Option<String>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub uf: Option<String>,
    pub complement: Option<String>,
}

impl NewAddress {
    /// Attach ids, producing the stored record.
    pub fn into_address(self, id: String, user_id: String) -> Address {
        Address {
            id,
            street: self.street,
            number: self.number,
            postal_code: self.postal_code,
            district: self.district,
            city: self.city,
            uf: self.uf,
            complement: self.complement,
            user_id,
        }
    }
}

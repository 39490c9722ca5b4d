//! User-related GraphQL objects and input types.

use async_graphql::{Enum, InputObject, SimpleObject};

use crate::models::{Address, NewAddress, NewUser, NewUserData, Role, User, UserData};

// ============================================================================
// Enums
// ============================================================================

/// Account role, exposed as the GraphQL enum `Role`
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq)]
#[graphql(name = "Role")]
pub enum RoleValue {
    Admin,
    User,
}

impl From<Role> for RoleValue {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => RoleValue::Admin,
            Role::User => RoleValue::User,
        }
    }
}

impl From<RoleValue> for Role {
    fn from(role: RoleValue) -> Self {
        match role {
            RoleValue::Admin => Role::Admin,
            RoleValue::User => Role::User,
        }
    }
}

// ============================================================================
// Input DTOs
// ============================================================================

/// Input for the user part of `addUser`.
#[derive(InputObject, Debug, Clone, Default)]
pub struct UserInput {
    /// Kept as the user's ID when present; generated otherwise
    pub id: Option<String>,
    pub sub_keycloak: Option<String>,
    pub name: Option<String>,
    pub telephone: Option<String>,
}

impl UserInput {
    pub fn into_new_user(self) -> NewUser {
        NewUser {
            id: self.id,
            sub_keycloak: self.sub_keycloak,
            name: self.name,
            telephone: self.telephone,
        }
    }
}

/// Input for the user data part of `addUser`.
#[derive(InputObject, Debug, Clone, Default)]
pub struct UserDataInput {
    pub email: Option<String>,
    #[graphql(default)]
    pub email_verified: bool,
    pub role: Option<RoleValue>,
    pub avatar_file_id: Option<String>,
    pub address: Option<AddressInput>,
}

impl UserDataInput {
    pub fn into_new_user_data(self) -> NewUserData {
        NewUserData {
            email: self.email,
            email_verified: self.email_verified,
            role: self.role.map(Role::from),
            avatar_file_id: self.avatar_file_id,
            address: self.address.map(AddressInput::into_new_address),
        }
    }
}

#[derive(InputObject, Debug, Clone, Default)]
pub struct AddressInput {
    pub street: Option<String>,
    pub number: Option<String>,
    pub postal_code: Option<String>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub uf: Option<String>,
    pub complement: Option<String>,
}

impl AddressInput {
    pub fn into_new_address(self) -> NewAddress {
        NewAddress {
            street: self.street,
            number: self.number,
            postal_code: self.postal_code,
            district: self.district,
            city: self.city,
            uf: self.uf,
            complement: self.complement,
        }
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// GraphQL type `User`.
#[derive(SimpleObject, Debug, Clone)]
#[graphql(name = "User")]
pub struct UserResponse {
    pub id: String,
    pub sub_keycloak: Option<String>,
    pub name: Option<String>,
    pub telephone: Option<String>,
    pub user_data: Option<UserDataResponse>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            sub_keycloak: user.sub_keycloak,
            name: user.name,
            telephone: user.telephone,
            user_data: user.user_data.map(UserDataResponse::from),
        }
    }
}

/// GraphQL type `UserData`.
#[derive(SimpleObject, Debug, Clone)]
#[graphql(name = "UserData")]
pub struct UserDataResponse {
    pub id: String,
    pub email: Option<String>,
    pub email_verified: bool,
    pub role: Option<RoleValue>,
    pub avatar_file_id: Option<String>,
    pub address: Option<AddressResponse>,
    pub user_id: String,
}

impl From<UserData> for UserDataResponse {
    fn from(data: UserData) -> Self {
        Self {
            id: data.id,
            email: data.email,
            email_verified: data.email_verified,
            role: data.role.map(RoleValue::from),
            avatar_file_id: data.avatar_file_id,
            address: data.address.map(AddressResponse::from),
            user_id: data.user_id,
        }
    }
}

/// GraphQL type `Address`.
#[derive(SimpleObject, Debug, Clone)]
#[graphql(name = "Address")]
pub struct AddressResponse {
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

impl From<Address> for AddressResponse {
    fn from(address: Address) -> Self {
        Self {
            id: address.id,
            street: address.street,
            number: address.number,
            postal_code: address.postal_code,
            district: address.district,
            city: address.city,
            uf: address.uf,
            complement: address.complement,
            user_id: address.user_id,
        }
    }
}

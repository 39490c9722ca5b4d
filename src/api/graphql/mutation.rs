use async_graphql::{Context, Object, Result};

use super::error::ResolverResultExt;
use super::{require_id, user_list};
use crate::api::dto::{UserDataInput, UserInput, UserResponse};
use crate::services::Services;

/// Root fields that change the store. Both return the full user list
/// after the change.
#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Creates a user together with its data and optional address.
    async fn add_user(
        &self,
        ctx: &Context<'_>,
        user_input: UserInput,
        user_data_input: UserDataInput,
    ) -> Result<Option<Vec<Option<UserResponse>>>> {
        let services = ctx.data::<Services>()?;
        let users = services
            .users
            .add_user(user_input.into_new_user(), user_data_input.into_new_user_data())
            .or_reject(ctx, "addUser")?;
        Ok(Some(user_list(users)))
    }

    /// Removes a user with everything it owns.
    async fn delete_user(
        &self,
        ctx: &Context<'_>,
        id: String,
    ) -> Result<Option<Vec<Option<UserResponse>>>> {
        require_id(&id).or_reject(ctx, "deleteUser")?;
        let services = ctx.data::<Services>()?;
        let users = services.users.delete_user(&id).or_reject(ctx, "deleteUser")?;
        Ok(Some(user_list(users)))
    }
}

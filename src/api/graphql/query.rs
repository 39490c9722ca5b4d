use async_graphql::{Context, Object, Result};

use super::error::ResolverResultExt;
use super::{require_id, user_list};
use crate::api::dto::{AddressResponse, UserDataResponse, UserResponse};
use crate::services::Services;

/// Read-only root fields
#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Every stored user, in no particular order.
    async fn get_users(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<UserResponse>>>> {
        let services = ctx.data::<Services>()?;
        let users = services.users.list_users().or_reject(ctx, "getUsers")?;
        Ok(Some(user_list(users)))
    }

    async fn get_user_by_id(&self, ctx: &Context<'_>, id: String) -> Result<Option<UserResponse>> {
        require_id(&id).or_reject(ctx, "getUserById")?;
        let services = ctx.data::<Services>()?;
        let user = services.users.get_user(&id).or_reject(ctx, "getUserById")?;
        Ok(Some(user.into()))
    }

    /// User data whose owner has the given ID.
    async fn get_user_data_by_user_id(
        &self,
        ctx: &Context<'_>,
        id: String,
    ) -> Result<Option<UserDataResponse>> {
        require_id(&id).or_reject(ctx, "getUserDataByUserId")?;
        let services = ctx.data::<Services>()?;
        let data = services
            .users
            .get_user_data(&id)
            .or_reject(ctx, "getUserDataByUserId")?;
        Ok(Some(data.into()))
    }

    /// Address whose owner has the given ID.
    async fn get_address_by_user_id(
        &self,
        ctx: &Context<'_>,
        id: String,
    ) -> Result<Option<AddressResponse>> {
        require_id(&id).or_reject(ctx, "getAddressByUserId")?;
        let services = ctx.data::<Services>()?;
        let address = services
            .users
            .get_address(&id)
            .or_reject(ctx, "getAddressByUserId")?;
        Ok(Some(address.into()))
    }
}

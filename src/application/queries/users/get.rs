use super::UserQueryService;
use crate::application::{
    commands::users::existing_user_id,
    dto::UserDto,
    error::{ApplicationError, ApplicationResult},
};

pub struct GetUserQuery {
    pub user_id: i64,
}

impl UserQueryService {
    pub async fn get_user(&self, query: GetUserQuery) -> ApplicationResult<UserDto> {
        let user_id = existing_user_id(query.user_id)?;
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        Ok(user.into())
    }
}

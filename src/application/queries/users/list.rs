use super::UserQueryService;
use crate::application::{
    dto::UserDto,
    error::{ApplicationError, ApplicationResult},
};

pub const DEFAULT_LIST_LIMIT: u32 = 10;

#[derive(Debug, Clone, Copy)]
pub struct ListUsersQuery {
    pub limit: u32,
    pub start: u32,
}

impl Default for ListUsersQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIST_LIMIT,
            start: 0,
        }
    }
}

impl UserQueryService {
    /// Offset page of users ordered by id.
    ///
    /// An empty page is reported as `NotFound`, so callers cannot tell an
    /// offset past the end from an empty table.
    pub async fn list_users(&self, query: ListUsersQuery) -> ApplicationResult<Vec<UserDto>> {
        let users = self.user_repo.list_page(query.limit, query.start).await?;

        if users.is_empty() {
            return Err(ApplicationError::not_found("no users found"));
        }

        Ok(users.into_iter().map(Into::into).collect())
    }
}

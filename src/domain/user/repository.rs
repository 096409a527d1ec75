use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{NewUser, User, UserPatch},
    value_objects::UserId,
};
use async_trait::async_trait;

/// Storage port for user records.
///
/// Each mutating call is its own unit of work and is committed before it
/// returns. Lookups that miss are reported as `Ok(None)` by `find_by_id` and
/// as `DomainError::NotFound` by `update` and `delete`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    /// Users ordered by id ascending, skipping `offset` rows.
    async fn list_page(&self, limit: u32, offset: u32) -> DomainResult<Vec<User>>;

    async fn update(&self, id: UserId, patch: UserPatch) -> DomainResult<User>;

    async fn delete(&self, id: UserId) -> DomainResult<()>;
}

use std::sync::Arc;

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    factory::UserFactory,
};
use crate::domain::user::{UserId, UserRepository};

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) factory: Arc<UserFactory>,
}

impl UserCommandService {
    pub fn new(user_repo: Arc<dyn UserRepository>, factory: Arc<UserFactory>) -> Self {
        Self { user_repo, factory }
    }
}

/// Ids that can never exist are reported the same way as ids that do not.
pub(crate) fn existing_user_id(raw: i64) -> ApplicationResult<UserId> {
    UserId::new(raw).map_err(|_| ApplicationError::not_found("user not found"))
}

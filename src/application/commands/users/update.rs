use super::{UserCommandService, service::existing_user_id};
use crate::application::{dto::UserDto, error::ApplicationResult};

use super::BirthdateInput;

/// Profile fields of a partial update. `None` leaves a column untouched,
/// `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub birthdate: Option<Option<BirthdateInput>>,
    pub phone: Option<Option<String>>,
    pub address: Option<Option<String>>,
    pub city: Option<Option<String>>,
    pub state: Option<Option<String>>,
    pub country: Option<Option<String>>,
    pub zip_code: Option<Option<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateUserCommand {
    pub user_id: i64,
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub profile: Option<ProfileChanges>,
}

impl UserCommandService {
    pub async fn update_user(&self, command: UpdateUserCommand) -> ApplicationResult<UserDto> {
        let user_id = existing_user_id(command.user_id)?;
        let patch = self.factory.patch(command).await?;
        let user = self.user_repo.update(user_id, patch).await?;

        tracing::info!(user_id = %user.id, "user updated");
        Ok(user.into())
    }
}

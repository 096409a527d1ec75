use super::UserCommandService;
use crate::application::{dto::UserDto, error::ApplicationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdateInput {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Nested profile block as submitted; flattened into columns by the factory.
#[derive(Debug, Clone, Default)]
pub struct ProfileInput {
    pub birthdate: Option<BirthdateInput>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub zip_code: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateUserCommand {
    pub username: String,
    pub email: String,
    pub password: String,
    pub profile: Option<ProfileInput>,
}

impl UserCommandService {
    pub async fn create_user(&self, command: CreateUserCommand) -> ApplicationResult<UserDto> {
        let new_user = self.factory.new_user(command).await?;
        let user = self.user_repo.insert(new_user).await?;

        tracing::info!(user_id = %user.id, username = %user.username, "user created");
        Ok(user.into())
    }
}

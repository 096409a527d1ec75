use super::{UserCommandService, service::existing_user_id};
use crate::application::error::ApplicationResult;

pub struct DeleteUserCommand {
    pub user_id: i64,
}

impl UserCommandService {
    pub async fn delete_user(&self, command: DeleteUserCommand) -> ApplicationResult<()> {
        let user_id = existing_user_id(command.user_id)?;
        self.user_repo.delete(user_id).await?;

        tracing::info!(user_id = %user_id, "user deleted");
        Ok(())
    }
}

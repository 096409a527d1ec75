mod create;
mod delete;
mod service;
mod update;

pub use create::{BirthdateInput, CreateUserCommand, ProfileInput};
pub use delete::DeleteUserCommand;
pub use service::UserCommandService;
pub(crate) use service::existing_user_id;
pub use update::{ProfileChanges, UpdateUserCommand};

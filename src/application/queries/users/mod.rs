mod get;
mod list;
mod service;

pub use get::GetUserQuery;
pub use list::{DEFAULT_LIST_LIMIT, ListUsersQuery};
pub use service::UserQueryService;

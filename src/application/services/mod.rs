// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::users::UserCommandService,
        factory::UserFactory,
        ports::{security::PasswordHasher, time::Clock},
        queries::users::UserQueryService,
    },
    domain::user::UserRepository,
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
}

impl ApplicationServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let factory = Arc::new(UserFactory::new(password_hasher, clock));

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            factory,
        ));
        let user_queries = Arc::new(UserQueryService::new(user_repo));

        Self {
            user_commands,
            user_queries,
        }
    }
}

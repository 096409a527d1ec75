// src/application/factory.rs
use std::sync::Arc;

use chrono::Datelike;

use crate::application::{
    commands::users::{
        BirthdateInput, CreateUserCommand, ProfileChanges, ProfileInput, UpdateUserCommand,
    },
    error::{ApplicationError, ApplicationResult},
    ports::{security::PasswordHasher, time::Clock},
};
use crate::domain::user::{
    Birthdate, Email, NewUser, PasswordHash, Profile, ProfilePatch, UserPatch, Username,
};

/// Turns validated requests into storage values: hashes passwords and
/// flattens the nested profile block into columns.
pub struct UserFactory {
    password_hasher: Arc<dyn PasswordHasher>,
    clock: Arc<dyn Clock>,
}

impl UserFactory {
    pub fn new(password_hasher: Arc<dyn PasswordHasher>, clock: Arc<dyn Clock>) -> Self {
        Self {
            password_hasher,
            clock,
        }
    }

    pub async fn new_user(&self, command: CreateUserCommand) -> ApplicationResult<NewUser> {
        let username = Username::new(command.username)?;
        let email = Email::new(command.email)?;
        let profile = match command.profile {
            Some(input) => self.flatten_profile(input)?,
            None => Profile::default(),
        };
        let password_hash = self.hash_password(&command.password).await?;

        Ok(NewUser::new(
            username,
            email,
            password_hash,
            profile,
            self.clock.now(),
        ))
    }

    /// Builds the set of changes for a partial update. Absent fields stay out
    /// of the patch; a new password gets a fresh salt.
    pub async fn patch(&self, command: UpdateUserCommand) -> ApplicationResult<UserPatch> {
        let mut patch = UserPatch::new(self.clock.now());

        if let Some(username) = command.username {
            patch = patch.with_username(Username::new(username)?);
        }

        if let Some(email) = command.email {
            patch = patch.with_email(Email::new(email)?);
        }

        if let Some(profile) = command.profile {
            patch = patch.with_profile(self.profile_patch(profile)?);
        }

        if let Some(password) = command.password {
            patch = patch.with_password_hash(self.hash_password(&password).await?);
        }

        Ok(patch)
    }

    fn flatten_profile(&self, input: ProfileInput) -> ApplicationResult<Profile> {
        Ok(Profile {
            birthdate: input
                .birthdate
                .map(|date| self.format_birthdate(date))
                .transpose()?,
            phone: input.phone,
            address: input.address,
            city: input.city,
            state: input.state,
            country: input.country,
            zip_code: input.zip_code,
        })
    }

    fn profile_patch(&self, changes: ProfileChanges) -> ApplicationResult<ProfilePatch> {
        let birthdate = changes
            .birthdate
            .map(|value| value.map(|date| self.format_birthdate(date)).transpose())
            .transpose()?;

        Ok(ProfilePatch {
            birthdate,
            phone: changes.phone,
            address: changes.address,
            city: changes.city,
            state: changes.state,
            country: changes.country,
            zip_code: changes.zip_code,
        })
    }

    fn format_birthdate(&self, input: BirthdateInput) -> ApplicationResult<String> {
        let current_year = self.clock.now().year();
        let birthdate = Birthdate::new(input.year, input.month, input.day, current_year)?;
        Ok(birthdate.to_string())
    }

    async fn hash_password(&self, password: &str) -> ApplicationResult<PasswordHash> {
        if password.is_empty() {
            return Err(ApplicationError::validation("password cannot be empty"));
        }
        let hashed = self.password_hasher.hash(password).await?;
        Ok(PasswordHash::new(hashed)?)
    }
}

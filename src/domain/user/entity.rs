// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Email, PasswordHash, UserId, Username};
use chrono::{DateTime, Utc};

/// Optional profile columns stored alongside the account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub birthdate: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub zip_code: Option<String>,
}

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub profile: Profile,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Returns a copy of this user with every field present in `patch` replaced.
    pub fn apply_patch(self, patch: UserPatch) -> Self {
        let UserPatch {
            username,
            email,
            password_hash,
            profile,
            updated_at,
        } = patch;

        Self {
            id: self.id,
            username: username.unwrap_or(self.username),
            email: email.unwrap_or(self.email),
            password_hash: password_hash.unwrap_or(self.password_hash),
            profile: profile.apply_to(self.profile),
            created_at: self.created_at,
            updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub profile: Profile,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        username: Username,
        email: Email,
        password_hash: PasswordHash,
        profile: Profile,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            username,
            email,
            password_hash,
            profile,
            created_at,
        }
    }
}

/// Profile changes. The outer `Option` tells whether the field was supplied,
/// the inner one carries the new value, `None` clearing the column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePatch {
    pub birthdate: Option<Option<String>>,
    pub phone: Option<Option<String>>,
    pub address: Option<Option<String>>,
    pub city: Option<Option<String>>,
    pub state: Option<Option<String>>,
    pub country: Option<Option<String>>,
    pub zip_code: Option<Option<String>>,
}

impl ProfilePatch {
    fn apply_to(self, base: Profile) -> Profile {
        Profile {
            birthdate: self.birthdate.unwrap_or(base.birthdate),
            phone: self.phone.unwrap_or(base.phone),
            address: self.address.unwrap_or(base.address),
            city: self.city.unwrap_or(base.city),
            state: self.state.unwrap_or(base.state),
            country: self.country.unwrap_or(base.country),
            zip_code: self.zip_code.unwrap_or(base.zip_code),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UserPatch {
    pub username: Option<Username>,
    pub email: Option<Email>,
    pub password_hash: Option<PasswordHash>,
    pub profile: ProfilePatch,
    pub updated_at: DateTime<Utc>,
}

impl UserPatch {
    pub fn new(updated_at: DateTime<Utc>) -> Self {
        Self {
            username: None,
            email: None,
            password_hash: None,
            profile: ProfilePatch::default(),
            updated_at,
        }
    }

    pub fn with_username(mut self, username: Username) -> Self {
        self.username = Some(username);
        self
    }

    pub fn with_email(mut self, email: Email) -> Self {
        self.email = Some(email);
        self
    }

    pub fn with_password_hash(mut self, password_hash: PasswordHash) -> Self {
        self.password_hash = Some(password_hash);
        self
    }

    pub fn with_profile(mut self, profile: ProfilePatch) -> Self {
        self.profile = profile;
        self
    }
}

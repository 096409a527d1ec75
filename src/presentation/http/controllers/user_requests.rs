use crate::application::{
    commands::users::{
        BirthdateInput, CreateUserCommand, ProfileChanges, ProfileInput, UpdateUserCommand,
    },
    queries::users::{DEFAULT_LIST_LIMIT, ListUsersQuery},
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

const fn default_limit() -> u32 {
    DEFAULT_LIST_LIMIT
}

/// Distinguishes an absent key (`None`) from an explicit `null` (`Some(None)`).
mod nullable {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct BirthdateRequest {
    #[validate(range(min = 1900, message = "birth year must be 1900 or later"))]
    #[schema(example = 1990)]
    pub year: i32,
    #[validate(range(min = 1, max = 12, message = "birth month must be between 1 and 12"))]
    #[schema(example = 3)]
    pub month: u32,
    #[validate(range(min = 1, max = 31, message = "birth day must be between 1 and 31"))]
    #[schema(example = 7)]
    pub day: u32,
}

impl From<BirthdateRequest> for BirthdateInput {
    fn from(value: BirthdateRequest) -> Self {
        Self {
            year: value.year,
            month: value.month,
            day: value.day,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ProfileRequest {
    #[serde(default)]
    #[validate(nested)]
    pub birthdate: Option<BirthdateRequest>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
}

impl From<ProfileRequest> for ProfileInput {
    fn from(value: ProfileRequest) -> Self {
        Self {
            birthdate: value.birthdate.map(Into::into),
            phone: value.phone,
            address: value.address,
            city: value.city,
            state: value.state,
            country: value.country,
            zip_code: value.zip_code,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "username cannot be empty"))]
    #[schema(example = "ann")]
    pub username: String,
    #[validate(email(message = "invalid email address"))]
    #[schema(example = "ann@x.com")]
    pub email: String,
    #[validate(length(min = 1, message = "password cannot be empty"))]
    pub password: String,
    #[serde(default)]
    #[validate(nested)]
    pub additional_information: Option<ProfileRequest>,
}

impl From<CreateUserRequest> for CreateUserCommand {
    fn from(value: CreateUserRequest) -> Self {
        Self {
            username: value.username,
            email: value.email,
            password: value.password,
            profile: value.additional_information.map(Into::into),
        }
    }
}

/// Profile fields of a partial update; `null` clears a field, an absent key
/// keeps it.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ProfilePatchRequest {
    #[serde(default, deserialize_with = "nullable::deserialize")]
    #[schema(value_type = Option<BirthdateRequest>)]
    pub birthdate: Option<Option<BirthdateRequest>>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    #[schema(value_type = Option<String>)]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    #[schema(value_type = Option<String>)]
    pub address: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    #[schema(value_type = Option<String>)]
    pub city: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    #[schema(value_type = Option<String>)]
    pub state: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    #[schema(value_type = Option<String>)]
    pub country: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    #[schema(value_type = Option<String>)]
    pub zip_code: Option<Option<String>>,
}

impl From<ProfilePatchRequest> for ProfileChanges {
    fn from(value: ProfilePatchRequest) -> Self {
        Self {
            birthdate: value.birthdate.map(|date| date.map(Into::into)),
            phone: value.phone,
            address: value.address,
            city: value.city,
            state: value.state,
            country: value.country,
            zip_code: value.zip_code,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
#[validate(schema(function = "validate_profile_patch"))]
pub struct UpdateUserRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "username cannot be empty"))]
    pub username: Option<String>,
    #[serde(default)]
    #[validate(email(message = "invalid email address"))]
    pub email: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "password cannot be empty"))]
    pub password: Option<String>,
    #[serde(default)]
    pub additional_information: Option<ProfilePatchRequest>,
}

fn validate_profile_patch(request: &UpdateUserRequest) -> Result<(), ValidationError> {
    let birthdate = request
        .additional_information
        .as_ref()
        .and_then(|profile| profile.birthdate.as_ref())
        .and_then(Option::as_ref);

    match birthdate {
        Some(date) => date.validate().map_err(|errors| {
            let mut error = ValidationError::new("birthdate");
            error.message = Some(errors.to_string().into());
            error
        }),
        None => Ok(()),
    }
}

impl UpdateUserRequest {
    pub fn into_command(self, user_id: i64) -> UpdateUserCommand {
        UpdateUserCommand {
            user_id,
            username: self.username,
            email: self.email,
            password: self.password,
            profile: self.additional_information.map(Into::into),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ListUsersParams {
    /// Page size.
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Number of users to skip.
    #[serde(default)]
    pub start: u32,
}

impl From<ListUsersParams> for ListUsersQuery {
    fn from(value: ListUsersParams) -> Self {
        Self {
            limit: value.limit,
            start: value.start,
        }
    }
}

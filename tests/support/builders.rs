// tests/support/builders.rs
use serde_json::{Value, json};
use user_registry::application::commands::users::{
    BirthdateInput, CreateUserCommand, ProfileInput,
};

pub struct UserPayloadBuilder {
    username: String,
    email: String,
    password: String,
    birthdate: Option<(i32, u32, u32)>,
    city: Option<String>,
    phone: Option<String>,
}

impl UserPayloadBuilder {
    pub fn new(username: &str) -> Self {
        Self {
            username: username.into(),
            email: format!("{username}@x.com"),
            password: "pw1".into(),
            birthdate: None,
            city: None,
            phone: None,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn birthdate(mut self, year: i32, month: u32, day: u32) -> Self {
        self.birthdate = Some((year, month, day));
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    fn has_profile(&self) -> bool {
        self.birthdate.is_some() || self.city.is_some() || self.phone.is_some()
    }

    /// Request body for `POST /users/create`.
    pub fn json(&self) -> Value {
        let mut body = json!({
            "username": self.username,
            "email": self.email,
            "password": self.password,
        });
        if self.has_profile() {
            let mut profile = json!({ "city": self.city, "phone": self.phone });
            if let Some((year, month, day)) = self.birthdate {
                profile["birthdate"] = json!({ "year": year, "month": month, "day": day });
            }
            body["additional_information"] = profile;
        }
        body
    }

    pub fn command(&self) -> CreateUserCommand {
        let profile = self.has_profile().then(|| ProfileInput {
            birthdate: self
                .birthdate
                .map(|(year, month, day)| BirthdateInput { year, month, day }),
            city: self.city.clone(),
            phone: self.phone.clone(),
            ..ProfileInput::default()
        });

        CreateUserCommand {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            profile,
        }
    }
}

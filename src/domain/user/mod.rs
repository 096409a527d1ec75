// src/domain/user/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewUser, Profile, ProfilePatch, User, UserPatch};
pub use repository::UserRepository;
pub use value_objects::{Birthdate, Email, PasswordHash, UserId, Username};

// src/presentation/http/controllers/mod.rs
pub mod user_requests;
pub mod users;

// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod security;
pub mod time;
pub mod user_repo;

pub use security::{CountingPasswordHasher, PLAIN_PREFIX};
pub use time::{DummyClock, fixed_now};
pub use user_repo::InMemoryUserRepo;

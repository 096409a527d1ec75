// tests/support/mocks/user_repo.rs
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;
use user_registry::domain::errors::{DomainError, DomainResult};
use user_registry::domain::user::{NewUser, User, UserId, UserPatch, UserRepository};

/// インメモリのユーザーリポジトリ
///
/// Mirrors the table's behavior: ids are assigned in increasing order, and
/// username/email uniqueness is enforced like the database constraints.
#[derive(Default)]
pub struct InMemoryUserRepo {
    inner: Mutex<State>,
}

#[derive(Default)]
struct State {
    last_id: i64,
    users: BTreeMap<i64, User>,
}

impl State {
    fn ensure_unique(&self, user_id: Option<UserId>, username: &str, email: &str) -> DomainResult<()> {
        for other in self.users.values().filter(|u| Some(u.id) != user_id) {
            if other.username.as_str() == username {
                return Err(DomainError::Conflict("username already exists".into()));
            }
            if other.email.as_str() == email {
                return Err(DomainError::Conflict("email already exists".into()));
            }
        }
        Ok(())
    }
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().users.len()
    }

    /// Stored row, including the password hash the HTTP layer never exposes.
    pub fn stored(&self, id: i64) -> Option<User> {
        self.inner.lock().unwrap().users.get(&id).cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut state = self.inner.lock().unwrap();
        state.ensure_unique(None, new_user.username.as_str(), new_user.email.as_str())?;

        state.last_id += 1;
        let user = User {
            id: UserId::new(state.last_id)?,
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            profile: new_user.profile,
            created_at: new_user.created_at,
            updated_at: new_user.created_at,
        };
        let id = state.last_id;
        state.users.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let state = self.inner.lock().unwrap();
        Ok(state.users.get(&i64::from(id)).cloned())
    }

    async fn list_page(&self, limit: u32, offset: u32) -> DomainResult<Vec<User>> {
        let state = self.inner.lock().unwrap();
        Ok(state
            .users
            .values()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn update(&self, id: UserId, patch: UserPatch) -> DomainResult<User> {
        let mut state = self.inner.lock().unwrap();
        let current = state
            .users
            .get(&i64::from(id))
            .cloned()
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        let updated = current.apply_patch(patch);
        state.ensure_unique(Some(id), updated.username.as_str(), updated.email.as_str())?;
        state.users.insert(i64::from(id), updated.clone());
        Ok(updated)
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        let mut state = self.inner.lock().unwrap();
        state
            .users
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("user not found".into()))
    }
}

// src/infrastructure/repositories/users/postgres.rs
use super::super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{
    Email, NewUser, PasswordHash, Profile, User, UserId, UserPatch, UserRepository, Username,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const USER_COLUMNS: &str = "id, username, email, hashed_password, birthdate, phone, address, \
     city, state, country, zip_code, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    hashed_password: String,
    birthdate: Option<String>,
    phone: Option<String>,
    address: Option<String>,
    city: Option<String>,
    state: Option<String>,
    country: Option<String>,
    zip_code: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            username: Username::new(row.username)?,
            email: Email::new(row.email)?,
            password_hash: PasswordHash::new(row.hashed_password)?,
            profile: Profile {
                birthdate: row.birthdate,
                phone: row.phone,
                address: row.address,
                city: row.city,
                state: row.state,
                country: row.country,
                zip_code: row.zip_code,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let NewUser {
            username,
            email,
            password_hash,
            profile,
            created_at,
        } = new_user;

        let sql = format!(
            "INSERT INTO users (username, email, hashed_password, birthdate, phone, address,
                 city, state, country, zip_code, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $11)
             RETURNING {USER_COLUMNS}"
        );

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(username.as_str())
            .bind(email.as_str())
            .bind(password_hash.as_str())
            .bind(profile.birthdate)
            .bind(profile.phone)
            .bind(profile.address)
            .bind(profile.city)
            .bind(profile.state)
            .bind(profile.country)
            .bind(profile.zip_code)
            .bind(created_at)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        tx.commit().await.map_err(map_sqlx)?;

        User::try_from(row)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn list_page(&self, limit: u32, offset: u32) -> DomainResult<Vec<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users ORDER BY id ASC LIMIT $1 OFFSET $2");

        let rows = sqlx::query_as::<_, UserRow>(&sql)
            .bind(i64::from(limit))
            .bind(i64::from(offset))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn update(&self, id: UserId, patch: UserPatch) -> DomainResult<User> {
        // Row lock held until commit; concurrent patches apply one after another.
        let select = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1 FOR UPDATE");
        let update = format!(
            "UPDATE users SET username = $1, email = $2, hashed_password = $3, birthdate = $4,
                 phone = $5, address = $6, city = $7, state = $8, country = $9, zip_code = $10,
                 updated_at = $11
             WHERE id = $12
             RETURNING {USER_COLUMNS}"
        );

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let current = sqlx::query_as::<_, UserRow>(&select)
            .bind(i64::from(id))
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        let User {
            username,
            email,
            password_hash,
            profile,
            updated_at,
            ..
        } = User::try_from(current)?.apply_patch(patch);

        let row = sqlx::query_as::<_, UserRow>(&update)
            .bind(username.as_str())
            .bind(email.as_str())
            .bind(password_hash.as_str())
            .bind(profile.birthdate)
            .bind(profile.phone)
            .bind(profile.address)
            .bind(profile.city)
            .bind(profile.state)
            .bind(profile.country)
            .bind(profile.zip_code)
            .bind(updated_at)
            .bind(i64::from(id))
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        tx.commit().await.map_err(map_sqlx)?;

        User::try_from(row)
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("user not found".into()));
        }

        tx.commit().await.map_err(map_sqlx)?;
        Ok(())
    }
}

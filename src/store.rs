//! Persistence of user records.
//!
//! Handlers only see [`UserStore`]; [`SqliteUserStore`] is the implementation
//! wired up at startup.

use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::error::{AppError, AppResult};
use crate::schema;
use crate::types::{NewUser, Outcome, User, UserId, UserPatch};

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Validates and persists a new record, returning it with its generated id.
    async fn create(&self, new: NewUser) -> AppResult<User>;

    /// All records in store order.
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Removes the record with `id`, if any.
    async fn delete_by_id(&self, id: UserId) -> AppResult<Outcome>;

    /// Applies the fields present in `patch` to the record with `id`, if any.
    async fn update_by_id(&self, id: UserId, patch: UserPatch) -> AppResult<Outcome>;

    /// Round-trips to the backing database.
    async fn ping(&self) -> AppResult<()>;
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    username: String,
    email: String,
    age: Option<f64>,
}

impl TryFrom<UserRow> for User {
    type Error = AppError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let id = row
            .id
            .parse::<UserId>()
            .map_err(|_| AppError::Internal(anyhow::anyhow!("stored user id {:?} is not a valid id", row.id)))?;
        Ok(User { id, username: row.username, email: row.email, age: row.age })
    }
}

#[derive(Clone)]
pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn exists(&self, id: UserId) -> AppResult<bool> {
        let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM users WHERE id = ?1")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;
        Ok(found.is_some())
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn create(&self, new: NewUser) -> AppResult<User> {
        let draft = schema::validate_new(new)?;
        let id = UserId::generate();

        sqlx::query("INSERT INTO users (id, username, email, age) VALUES (?1, ?2, ?3, ?4)")
            .bind(id.to_string())
            .bind(&draft.username)
            .bind(&draft.email)
            .bind(draft.age)
            .execute(&self.pool)
            .await?;

        Ok(User { id, username: draft.username, email: draft.email, age: draft.age })
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let rows: Vec<UserRow> = sqlx::query_as("SELECT id, username, email, age FROM users ORDER BY seq")
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(User::try_from).collect()
    }

    async fn delete_by_id(&self, id: UserId) -> AppResult<Outcome> {
        let res = sqlx::query("DELETE FROM users WHERE id = ?1").bind(id.to_string()).execute(&self.pool).await?;
        Ok(Outcome::from(res.rows_affected()))
    }

    async fn update_by_id(&self, id: UserId, patch: UserPatch) -> AppResult<Outcome> {
        schema::validate_patch(&patch)?;
        if patch.is_empty() {
            let matched = self.exists(id).await?;
            return Ok(if matched { Outcome::Matched } else { Outcome::NotMatched });
        }

        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE users SET ");
        {
            let mut set = qb.separated(", ");
            if let Some(username) = patch.username {
                set.push("username = ").push_bind_unseparated(username);
            }
            if let Some(email) = patch.email {
                set.push("email = ").push_bind_unseparated(email);
            }
            if let Some(age) = patch.age {
                set.push("age = ").push_bind_unseparated(age);
            }
        }
        qb.push(" WHERE id = ").push_bind(id.to_string());

        let res = qb.build().execute(&self.pool).await?;
        Ok(Outcome::from(res.rows_affected()))
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

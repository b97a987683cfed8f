use async_trait::async_trait;
use sqlx::{types::Json, FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use super::{Connection, Profile, User, UserStore};

/// Postgres-backed store. Profile and network live in JSONB columns, so the
/// row layout matches the domain types one-to-one.
pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    password_hash: String,
    profile: Option<Json<Profile>>,
    network: Json<Vec<Connection>>,
    created_at: OffsetDateTime,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            email: row.email,
            password_hash: row.password_hash,
            profile: row.profile.map(|Json(p)| p),
            network: row.network.0,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn create(&self, email: &str, password_hash: &str) -> anyhow::Result<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (email, password_hash)
            VALUES ($1, $2)
            RETURNING id, email, password_hash, profile, network, created_at
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.db)
        .await?;
        Ok(row.into())
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password_hash, profile, network, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await?;
        Ok(row.map(User::from))
    }

    async fn set_profile(&self, email: &str, profile: &Profile) -> anyhow::Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE users SET profile = $2
            WHERE email = $1
            "#,
        )
        .bind(email)
        .bind(Json(profile))
        .execute(&self.db)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn add_connection(&self, email: &str, connection: &Connection) -> anyhow::Result<bool> {
        // jsonb array || object appends in one statement, so concurrent
        // appends stay individually atomic.
        let result = sqlx::query(
            r#"
            UPDATE users SET network = network || $2
            WHERE email = $1
            "#,
        )
        .bind(email)
        .bind(Json(connection))
        .execute(&self.db)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}

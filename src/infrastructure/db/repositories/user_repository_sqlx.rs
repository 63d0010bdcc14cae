use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::application::ports::user_repository::UserRepository;
use crate::domain::users::{Role, User};
use crate::infrastructure::db::PgPool;

pub struct SqlxUserRepository {
    pub pool: PgPool,
}

impl SqlxUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn to_user(r: PgRow) -> User {
    let role: String = r.get("role");
    User {
        id: r.get("id"),
        email: r.get("email"),
        name: r.get("name"),
        image_url: r.get("image_url"),
        role: Role::parse(&role).unwrap_or_default(),
        created_at: r.get("created_at"),
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
    async fn create_user(
        &self,
        email: &str,
        name: &str,
        image_url: Option<&str>,
        role: Role,
    ) -> anyhow::Result<User> {
        // A concurrent sign-in may have inserted the row first; hand that one back.
        let inserted = sqlx::query(
            r#"INSERT INTO users (email, name, image_url, role) VALUES ($1, $2, $3, $4)
               ON CONFLICT (email) DO NOTHING
               RETURNING id, email, name, image_url, role, created_at"#,
        )
        .bind(email)
        .bind(name)
        .bind(image_url)
        .bind(role.as_str())
        .fetch_optional(&self.pool)
        .await?;
        match inserted {
            Some(r) => Ok(to_user(r)),
            None => self
                .find_by_email(email)
                .await?
                .ok_or_else(|| anyhow::anyhow!("user {email} vanished after insert conflict")),
        }
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let row = sqlx::query(
            r#"SELECT id, email, name, image_url, role, created_at FROM users WHERE email = $1"#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(to_user))
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<User>> {
        let row = sqlx::query(
            r#"SELECT id, email, name, image_url, role, created_at FROM users WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(to_user))
    }

    async fn update_role(&self, id: i64, role: Role) -> anyhow::Result<bool> {
        let res = sqlx::query("UPDATE users SET role = $2 WHERE id = $1")
            .bind(id)
            .bind(role.as_str())
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}

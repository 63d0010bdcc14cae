use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::application::pagination::PageRequest;
use crate::application::ports::message_repository::MessageRepository;
use crate::domain::messages::{Comment, Message};
use crate::infrastructure::db::PgPool;

const MESSAGE_COLUMNS: &str = "id, title, content, author_email, created_at, updated_at";
const COMMENT_COLUMNS: &str = "id, message_id, content, author_email, created_at";

pub struct SqlxMessageRepository {
    pub pool: PgPool,
}

impl SqlxMessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn comments_for(&self, message_ids: &[i64]) -> anyhow::Result<HashMap<i64, Vec<Comment>>> {
        let mut out: HashMap<i64, Vec<Comment>> = HashMap::new();
        if message_ids.is_empty() {
            return Ok(out);
        }
        let sql = format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE message_id = ANY($1) ORDER BY created_at, id"
        );
        let rows = sqlx::query(&sql)
            .bind(message_ids)
            .fetch_all(&self.pool)
            .await?;
        for c in rows.into_iter().map(to_comment) {
            out.entry(c.message_id).or_default().push(c);
        }
        Ok(out)
    }

    async fn with_comments(&self, mut message: Message) -> anyhow::Result<Message> {
        let mut by_message = self.comments_for(&[message.id]).await?;
        message.comments = by_message.remove(&message.id).unwrap_or_default();
        Ok(message)
    }
}

fn to_message(r: PgRow) -> Message {
    Message {
        id: r.get("id"),
        title: r.get("title"),
        content: r.get("content"),
        author_email: r.get("author_email"),
        created_at: r.get("created_at"),
        updated_at: r.get("updated_at"),
        comments: Vec::new(),
    }
}

fn to_comment(r: PgRow) -> Comment {
    Comment {
        id: r.get("id"),
        message_id: r.get("message_id"),
        content: r.get("content"),
        author_email: r.get("author_email"),
        created_at: r.get("created_at"),
    }
}

#[async_trait]
impl MessageRepository for SqlxMessageRepository {
    async fn list(&self, page: PageRequest) -> anyhow::Result<(Vec<Message>, i64)> {
        let sql = format!(
            "SELECT {MESSAGE_COLUMNS} FROM messages ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query(&sql)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await?;
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM messages")
            .fetch_one(&self.pool)
            .await?;

        let mut messages: Vec<Message> = rows.into_iter().map(to_message).collect();
        let ids: Vec<i64> = messages.iter().map(|m| m.id).collect();
        let mut comments = self.comments_for(&ids).await?;
        for m in &mut messages {
            m.comments = comments.remove(&m.id).unwrap_or_default();
        }
        Ok((messages, total))
    }

    async fn get(&self, id: i64) -> anyhow::Result<Option<Message>> {
        let sql = format!("SELECT {MESSAGE_COLUMNS} FROM messages WHERE id = $1");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(r) => Ok(Some(self.with_comments(to_message(r)).await?)),
            None => Ok(None),
        }
    }

    async fn create(
        &self,
        title: &str,
        content: &str,
        author_email: &str,
    ) -> anyhow::Result<Message> {
        let sql = format!(
            "INSERT INTO messages (title, content, author_email) VALUES ($1, $2, $3) RETURNING {MESSAGE_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(title)
            .bind(content)
            .bind(author_email)
            .fetch_one(&self.pool)
            .await?;
        Ok(to_message(row))
    }

    async fn update(&self, id: i64, title: &str, content: &str) -> anyhow::Result<Option<Message>> {
        let sql = format!(
            "UPDATE messages SET title = $2, content = $3, updated_at = now()
             WHERE id = $1 RETURNING {MESSAGE_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(id)
            .bind(title)
            .bind(content)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(r) => Ok(Some(self.with_comments(to_message(r)).await?)),
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM messages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn add_comment(
        &self,
        message_id: i64,
        content: &str,
        author_email: &str,
    ) -> anyhow::Result<Comment> {
        let sql = format!(
            "INSERT INTO comments (message_id, content, author_email) VALUES ($1, $2, $3) RETURNING {COMMENT_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(message_id)
            .bind(content)
            .bind(author_email)
            .fetch_one(&self.pool)
            .await?;
        Ok(to_comment(row))
    }

    async fn get_comment(&self, id: i64) -> anyhow::Result<Option<Comment>> {
        let sql = format!("SELECT {COMMENT_COLUMNS} FROM comments WHERE id = $1");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(to_comment))
    }

    async fn delete_comment(&self, id: i64) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}

use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::application::pagination::PageRequest;
use crate::application::ports::todo_repository::{Completion, TodoDraft, TodoRepository};
use crate::domain::todos::{Category, Priority, Todo};
use crate::infrastructure::db::PgPool;

const TODO_COLUMNS: &str = "id, title, description, priority, category, completed, due_date, completed_at, \
     user_email, created_at, updated_at, estimated_minutes, actual_minutes, tags";

pub struct SqlxTodoRepository {
    pub pool: PgPool,
}

impl SqlxTodoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn to_todo(r: PgRow) -> Todo {
    let priority: String = r.get("priority");
    let category: String = r.get("category");
    Todo {
        id: r.get("id"),
        title: r.get("title"),
        description: r.get("description"),
        priority: Priority::parse(&priority).unwrap_or_default(),
        category: Category::parse(&category).unwrap_or_default(),
        completed: r.get("completed"),
        due_date: r.get("due_date"),
        completed_at: r.get("completed_at"),
        user_email: r.get("user_email"),
        created_at: r.get("created_at"),
        updated_at: r.get("updated_at"),
        estimated_minutes: r.get("estimated_minutes"),
        actual_minutes: r.get("actual_minutes"),
        tags: r.get("tags"),
    }
}

#[async_trait]
impl TodoRepository for SqlxTodoRepository {
    async fn create(&self, user_email: &str, draft: &TodoDraft) -> anyhow::Result<Todo> {
        let sql = format!(
            "INSERT INTO todos (user_email, title, description, priority, category, due_date, estimated_minutes, tags)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING {TODO_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(user_email)
            .bind(&draft.title)
            .bind(draft.description.as_deref())
            .bind(draft.priority.as_str())
            .bind(draft.category.as_str())
            .bind(draft.due_date)
            .bind(draft.estimated_minutes)
            .bind(draft.tags.as_deref())
            .fetch_one(&self.pool)
            .await?;
        Ok(to_todo(row))
    }

    async fn get(&self, id: i64) -> anyhow::Result<Option<Todo>> {
        let sql = format!("SELECT {TODO_COLUMNS} FROM todos WHERE id = $1");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(to_todo))
    }

    async fn list_for_user(
        &self,
        user_email: &str,
        completed: Option<bool>,
        page: PageRequest,
    ) -> anyhow::Result<(Vec<Todo>, i64)> {
        let sql = format!(
            "SELECT {TODO_COLUMNS} FROM todos
             WHERE user_email = $1 AND ($2::BOOLEAN IS NULL OR completed = $2)
             ORDER BY created_at DESC, id DESC LIMIT $3 OFFSET $4"
        );
        let rows = sqlx::query(&sql)
            .bind(user_email)
            .bind(completed)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await?;
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM todos WHERE user_email = $1 AND ($2::BOOLEAN IS NULL OR completed = $2)",
        )
        .bind(user_email)
        .bind(completed)
        .fetch_one(&self.pool)
        .await?;
        Ok((rows.into_iter().map(to_todo).collect(), total))
    }

    async fn list_all_for_user(&self, user_email: &str) -> anyhow::Result<Vec<Todo>> {
        let sql = format!("SELECT {TODO_COLUMNS} FROM todos WHERE user_email = $1 ORDER BY id");
        let rows = sqlx::query(&sql)
            .bind(user_email)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(to_todo).collect())
    }

    async fn replace(&self, id: i64, draft: &TodoDraft) -> anyhow::Result<Option<Todo>> {
        let sql = format!(
            "UPDATE todos SET title = $2, description = $3, priority = $4, category = $5,
                due_date = $6, estimated_minutes = $7, tags = $8, updated_at = now()
             WHERE id = $1 RETURNING {TODO_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(id)
            .bind(&draft.title)
            .bind(draft.description.as_deref())
            .bind(draft.priority.as_str())
            .bind(draft.category.as_str())
            .bind(draft.due_date)
            .bind(draft.estimated_minutes)
            .bind(draft.tags.as_deref())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(to_todo))
    }

    async fn set_completion(
        &self,
        id: i64,
        completion: &Completion,
    ) -> anyhow::Result<Option<Todo>> {
        let sql = format!(
            "UPDATE todos SET completed = $2, completed_at = $3, actual_minutes = $4, updated_at = now()
             WHERE id = $1 RETURNING {TODO_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(id)
            .bind(completion.completed)
            .bind(completion.completed_at)
            .bind(completion.actual_minutes)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(to_todo))
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}

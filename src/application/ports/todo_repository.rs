use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::application::pagination::PageRequest;
use crate::domain::todos::{Category, Priority, Todo};

#[derive(Debug, Clone)]
pub struct TodoDraft {
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub category: Category,
    pub due_date: Option<NaiveDate>,
    pub estimated_minutes: Option<i32>,
    pub tags: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub actual_minutes: Option<i32>,
}

#[async_trait]
pub trait TodoRepository: Send + Sync {
    async fn create(&self, user_email: &str, draft: &TodoDraft) -> anyhow::Result<Todo>;
    async fn get(&self, id: i64) -> anyhow::Result<Option<Todo>>;
    /// Newest first; `completed` narrows to one completion state.
    async fn list_for_user(
        &self,
        user_email: &str,
        completed: Option<bool>,
        page: PageRequest,
    ) -> anyhow::Result<(Vec<Todo>, i64)>;
    async fn list_all_for_user(&self, user_email: &str) -> anyhow::Result<Vec<Todo>>;
    async fn replace(&self, id: i64, draft: &TodoDraft) -> anyhow::Result<Option<Todo>>;
    async fn set_completion(
        &self,
        id: i64,
        completion: &Completion,
    ) -> anyhow::Result<Option<Todo>>;
    async fn delete(&self, id: i64) -> anyhow::Result<bool>;
}

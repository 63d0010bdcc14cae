use validator::Validate;

use crate::application::error::{ServiceError, ServiceResult};
use crate::application::ports::todo_repository::{TodoDraft, TodoRepository};
use crate::domain::todos::Todo;

use super::{TODO_NOT_FOUND, TodoInput, load_owned_todo};

pub struct UpdateTodo<'a, R: TodoRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: TodoRepository + ?Sized> UpdateTodo<'a, R> {
    /// Replaces the editable fields; priority and category keep their value when omitted.
    pub async fn execute(&self, user_email: &str, id: i64, input: TodoInput) -> ServiceResult<Todo> {
        let existing = load_owned_todo(self.repo, id, user_email).await?;
        input.validate()?;
        let draft = TodoDraft {
            title: input.title.unwrap_or_default(),
            description: input.description,
            priority: input.priority.unwrap_or(existing.priority),
            category: input.category.unwrap_or(existing.category),
            due_date: input.due_date,
            estimated_minutes: input.estimated_minutes,
            tags: input.tags,
        };
        self.repo
            .replace(id, &draft)
            .await?
            .ok_or_else(|| ServiceError::not_found(TODO_NOT_FOUND))
    }
}

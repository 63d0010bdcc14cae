use validator::Validate;

use crate::application::error::ServiceResult;
use crate::application::ports::todo_repository::{TodoDraft, TodoRepository};
use crate::domain::todos::Todo;

use super::TodoInput;

pub struct CreateTodo<'a, R: TodoRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: TodoRepository + ?Sized> CreateTodo<'a, R> {
    pub async fn execute(&self, user_email: &str, input: TodoInput) -> ServiceResult<Todo> {
        input.validate()?;
        let draft = TodoDraft {
            title: input.title.unwrap_or_default(),
            description: input.description,
            priority: input.priority.unwrap_or_default(),
            category: input.category.unwrap_or_default(),
            due_date: input.due_date,
            estimated_minutes: input.estimated_minutes,
            tags: input.tags,
        };
        let todo = self.repo.create(user_email, &draft).await?;
        tracing::debug!(todo_id = todo.id, "todo_created");
        Ok(todo)
    }
}

use crate::application::error::{ServiceError, ServiceResult};
use crate::application::ports::clock::Clock;
use crate::application::ports::todo_repository::{Completion, TodoRepository};
use crate::domain::todos::Todo;

use super::{TODO_NOT_FOUND, load_owned_todo};

pub struct ToggleTodo<'a, R, C>
where
    R: TodoRepository + ?Sized,
    C: Clock + ?Sized,
{
    pub repo: &'a R,
    pub clock: &'a C,
}

impl<'a, R, C> ToggleTodo<'a, R, C>
where
    R: TodoRepository + ?Sized,
    C: Clock + ?Sized,
{
    pub async fn execute(
        &self,
        user_email: &str,
        id: i64,
        actual_minutes: Option<i32>,
    ) -> ServiceResult<Todo> {
        let todo = load_owned_todo(self.repo, id, user_email).await?;
        let completion = if todo.completed {
            Completion {
                completed: false,
                completed_at: None,
                actual_minutes: None,
            }
        } else {
            Completion {
                completed: true,
                completed_at: Some(self.clock.now()),
                actual_minutes: actual_minutes.or(todo.actual_minutes),
            }
        };
        let updated = self
            .repo
            .set_completion(id, &completion)
            .await?
            .ok_or_else(|| ServiceError::not_found(TODO_NOT_FOUND))?;
        tracing::debug!(todo_id = id, completed = updated.completed, "todo_toggled");
        Ok(updated)
    }
}

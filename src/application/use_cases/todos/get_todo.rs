use crate::application::error::ServiceResult;
use crate::application::ports::todo_repository::TodoRepository;
use crate::domain::todos::Todo;

use super::load_owned_todo;

pub struct GetTodo<'a, R: TodoRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: TodoRepository + ?Sized> GetTodo<'a, R> {
    pub async fn execute(&self, user_email: &str, id: i64) -> ServiceResult<Todo> {
        load_owned_todo(self.repo, id, user_email).await
    }
}

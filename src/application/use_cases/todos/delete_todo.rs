use crate::application::error::ServiceResult;
use crate::application::ports::todo_repository::TodoRepository;

use super::load_owned_todo;

pub struct DeleteTodo<'a, R: TodoRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: TodoRepository + ?Sized> DeleteTodo<'a, R> {
    pub async fn execute(&self, user_email: &str, id: i64) -> ServiceResult<()> {
        load_owned_todo(self.repo, id, user_email).await?;
        self.repo.delete(id).await?;
        Ok(())
    }
}

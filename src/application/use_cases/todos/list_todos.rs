use crate::application::error::ServiceResult;
use crate::application::pagination::{Page, PageRequest};
use crate::application::ports::todo_repository::TodoRepository;
use crate::domain::todos::Todo;

pub struct ListTodos<'a, R: TodoRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: TodoRepository + ?Sized> ListTodos<'a, R> {
    /// `completed = None` lists everything.
    pub async fn execute(
        &self,
        user_email: &str,
        completed: Option<bool>,
        page: PageRequest,
    ) -> ServiceResult<Page<Todo>> {
        let (rows, total) = self.repo.list_for_user(user_email, completed, page).await?;
        Ok(Page::new(rows, total, page))
    }
}

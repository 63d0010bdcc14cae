use crate::application::error::ServiceResult;
use crate::application::ports::clock::Clock;
use crate::application::ports::todo_repository::TodoRepository;
use crate::application::services::todo_stats;
use crate::domain::todos::TodoStats;

pub struct GetTodoStats<'a, R, C>
where
    R: TodoRepository + ?Sized,
    C: Clock + ?Sized,
{
    pub repo: &'a R,
    pub clock: &'a C,
}

impl<'a, R, C> GetTodoStats<'a, R, C>
where
    R: TodoRepository + ?Sized,
    C: Clock + ?Sized,
{
    pub async fn execute(&self, user_email: &str) -> ServiceResult<TodoStats> {
        let todos = self.repo.list_all_for_user(user_email).await?;
        Ok(todo_stats::compute(&todos, self.clock.now()))
    }
}

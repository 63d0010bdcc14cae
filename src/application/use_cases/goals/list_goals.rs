use crate::application::error::ServiceResult;
use crate::application::ports::goal_repository::GoalRepository;
use crate::domain::goals::Goal;

pub struct ListGoals<'a, R: GoalRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: GoalRepository + ?Sized> ListGoals<'a, R> {
    pub async fn execute(&self, user_id: i64) -> ServiceResult<Vec<Goal>> {
        Ok(self.repo.list_for_user(user_id).await?)
    }
}

use crate::application::error::ServiceResult;
use crate::application::ports::goal_repository::GoalRepository;

use super::load_owned_goal;

pub struct DeleteGoal<'a, R: GoalRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: GoalRepository + ?Sized> DeleteGoal<'a, R> {
    pub async fn execute(&self, user_id: i64, goal_id: i64) -> ServiceResult<()> {
        load_owned_goal(self.repo, goal_id, user_id).await?;
        self.repo.delete(goal_id).await?;
        tracing::debug!(user_id, goal_id, "goal_deleted");
        Ok(())
    }
}

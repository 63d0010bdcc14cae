use crate::application::error::ServiceResult;
use crate::application::ports::goal_repository::GoalRepository;
use crate::domain::goals::Goal;

use super::load_owned_goal;

pub struct GetGoal<'a, R: GoalRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: GoalRepository + ?Sized> GetGoal<'a, R> {
    pub async fn execute(&self, user_id: i64, goal_id: i64) -> ServiceResult<Goal> {
        load_owned_goal(self.repo, goal_id, user_id).await
    }
}

use validator::Validate;

use crate::application::error::{ServiceError, ServiceResult};
use crate::application::ports::goal_repository::{GoalChanges, GoalRepository};
use crate::domain::goals::Goal;

use super::create_goal::GoalInput;
use super::{GOAL_NOT_FOUND, load_owned_goal};

pub struct UpdateGoal<'a, R: GoalRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: GoalRepository + ?Sized> UpdateGoal<'a, R> {
    /// Only fields present in `input` change; `start_date` is fixed at creation.
    pub async fn execute(&self, user_id: i64, goal_id: i64, input: GoalInput) -> ServiceResult<Goal> {
        load_owned_goal(self.repo, goal_id, user_id).await?;

        input.validate()?;

        let changes = GoalChanges {
            title: input.title,
            target_date: input.target_date,
            priority: input.priority,
            status: input.status,
            motivation_reason: input.motivation_reason,
        };
        self.repo
            .update(goal_id, &changes)
            .await?
            .ok_or_else(|| ServiceError::not_found(GOAL_NOT_FOUND))
    }
}

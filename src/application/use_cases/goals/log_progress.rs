use crate::application::error::{ServiceError, ServiceResult};
use crate::application::ports::clock::Clock;
use crate::application::ports::goal_repository::{GoalRepository, ProgressEntry};
use crate::domain::goals::GoalProgress;

use super::load_owned_goal;

#[derive(Debug, Clone, Default)]
pub struct ProgressInput {
    pub goal_id: Option<i64>,
    pub today_progress: Option<i32>,
    pub total_progress: Option<i32>,
    pub notes: Option<String>,
}

pub struct LogProgress<'a, R, C>
where
    R: GoalRepository + ?Sized,
    C: Clock + ?Sized,
{
    pub repo: &'a R,
    pub clock: &'a C,
}

impl<'a, R, C> LogProgress<'a, R, C>
where
    R: GoalRepository + ?Sized,
    C: Clock + ?Sized,
{
    /// Records progress for the server's current day, replacing any earlier entry for that day.
    pub async fn execute(&self, user_id: i64, input: ProgressInput) -> ServiceResult<GoalProgress> {
        let goal_id = input
            .goal_id
            .ok_or_else(|| ServiceError::bad_request("goalId is required"))?;
        load_owned_goal(self.repo, goal_id, user_id).await?;

        let today = self.clock.today();
        let entry = ProgressEntry {
            today_progress: input.today_progress.unwrap_or(0),
            total_progress: input.total_progress.unwrap_or(0),
            notes: input.notes,
        };
        let row = self.repo.upsert_progress(goal_id, today, &entry).await?;
        tracing::debug!(user_id, goal_id, date = %today, "goal_progress_logged");
        Ok(row)
    }
}

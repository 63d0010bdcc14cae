use chrono::Duration;

use crate::application::error::ServiceResult;
use crate::application::ports::clock::Clock;
use crate::application::ports::goal_repository::GoalRepository;
use crate::domain::goals::GoalProgress;

use super::load_owned_goal;

pub const DEFAULT_HISTORY_DAYS: i64 = 7;

pub struct ProgressHistory<'a, R, C>
where
    R: GoalRepository + ?Sized,
    C: Clock + ?Sized,
{
    pub repo: &'a R,
    pub clock: &'a C,
}

impl<'a, R, C> ProgressHistory<'a, R, C>
where
    R: GoalRepository + ?Sized,
    C: Clock + ?Sized,
{
    /// Entries dated within `[today - days, today]`, newest first.
    pub async fn execute(
        &self,
        user_id: i64,
        goal_id: i64,
        days: Option<i64>,
    ) -> ServiceResult<Vec<GoalProgress>> {
        load_owned_goal(self.repo, goal_id, user_id).await?;
        let today = self.clock.today();
        let days = days.unwrap_or(DEFAULT_HISTORY_DAYS).clamp(0, 3650);
        let start = today - Duration::days(days);
        Ok(self.repo.progress_between(goal_id, start, today).await?)
    }
}

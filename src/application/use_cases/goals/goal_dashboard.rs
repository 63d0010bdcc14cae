use chrono::NaiveDate;

use crate::application::error::ServiceResult;
use crate::application::ports::clock::Clock;
use crate::application::ports::goal_repository::GoalRepository;
use crate::domain::goals::{GoalDashboard, GoalWithProgress, STATUS_IN_PROGRESS};

pub struct GetGoalDashboard<'a, R, C>
where
    R: GoalRepository + ?Sized,
    C: Clock + ?Sized,
{
    pub repo: &'a R,
    pub clock: &'a C,
}

impl<'a, R, C> GetGoalDashboard<'a, R, C>
where
    R: GoalRepository + ?Sized,
    C: Clock + ?Sized,
{
    pub async fn execute(&self, user_id: i64, date: Option<NaiveDate>) -> ServiceResult<GoalDashboard> {
        let date = date.unwrap_or_else(|| self.clock.today());
        let goals = self
            .repo
            .list_for_user_with_status(user_id, STATUS_IN_PROGRESS)
            .await?;
        let mut out = Vec::with_capacity(goals.len());
        for goal in goals {
            let today_progress = self.repo.progress_on(goal.id, date).await?;
            out.push(GoalWithProgress {
                goal,
                today_progress,
            });
        }
        Ok(GoalDashboard { date, goals: out })
    }
}

use chrono::Duration;

use crate::application::error::ServiceResult;
use crate::application::ports::clock::Clock;
use crate::application::ports::habit_repository::HabitRepository;
use crate::domain::habits::HabitLog;

use super::load_owned_habit;

pub struct HabitHistory<'a, R, C>
where
    R: HabitRepository + ?Sized,
    C: Clock + ?Sized,
{
    pub repo: &'a R,
    pub clock: &'a C,
}

impl<'a, R, C> HabitHistory<'a, R, C>
where
    R: HabitRepository + ?Sized,
    C: Clock + ?Sized,
{
    pub async fn execute(
        &self,
        user_id: i64,
        habit_id: i64,
        days: Option<i64>,
    ) -> ServiceResult<Vec<HabitLog>> {
        load_owned_habit(self.repo, habit_id, user_id).await?;
        let today = self.clock.today();
        let days = days.unwrap_or(7).clamp(0, 3650);
        Ok(self
            .repo
            .logs_between(habit_id, today - Duration::days(days), today)
            .await?)
    }
}

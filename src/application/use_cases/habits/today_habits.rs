use chrono::NaiveDate;

use crate::application::error::ServiceResult;
use crate::application::ports::clock::Clock;
use crate::application::ports::habit_repository::HabitRepository;
use crate::domain::habits::{HabitDay, HabitWithLog};

pub struct TodayHabits<'a, R, C>
where
    R: HabitRepository + ?Sized,
    C: Clock + ?Sized,
{
    pub repo: &'a R,
    pub clock: &'a C,
}

impl<'a, R, C> TodayHabits<'a, R, C>
where
    R: HabitRepository + ?Sized,
    C: Clock + ?Sized,
{
    pub async fn execute(&self, user_id: i64, date: Option<NaiveDate>) -> ServiceResult<HabitDay> {
        let date = date.unwrap_or_else(|| self.clock.today());
        let habits = self.repo.list_for_user(user_id).await?;
        let mut out = Vec::with_capacity(habits.len());
        for habit in habits {
            let today_log = self.repo.log_on(habit.id, date).await?;
            out.push(HabitWithLog { habit, today_log });
        }
        Ok(HabitDay { date, habits: out })
    }
}

use validator::Validate;

use crate::application::error::{ServiceError, ServiceResult};
use crate::application::ports::clock::Clock;
use crate::application::ports::habit_repository::{HabitLogEntry, HabitRepository};
use crate::domain::habits::HabitLog;

use super::load_owned_habit;

#[derive(Debug, Clone, Default, Validate)]
pub struct HabitLogInput {
    pub habit_id: Option<i64>,
    #[validate(length(max = 20, message = "Status must be at most 20 characters"))]
    pub status: Option<String>,
    #[validate(range(min = 0, message = "Streak cannot be negative"))]
    pub current_streak: Option<i32>,
    #[validate(length(max = 50, message = "Mood must be at most 50 characters"))]
    pub mood_after: Option<String>,
    pub notes: Option<String>,
}

pub struct LogHabit<'a, R, C>
where
    R: HabitRepository + ?Sized,
    C: Clock + ?Sized,
{
    pub repo: &'a R,
    pub clock: &'a C,
}

impl<'a, R, C> LogHabit<'a, R, C>
where
    R: HabitRepository + ?Sized,
    C: Clock + ?Sized,
{
    pub async fn execute(&self, user_id: i64, input: HabitLogInput) -> ServiceResult<HabitLog> {
        let habit_id = input
            .habit_id
            .ok_or_else(|| ServiceError::bad_request("habitId is required"))?;
        let habit = load_owned_habit(self.repo, habit_id, user_id).await?;

        input.validate()?;

        let today = self.clock.today();
        let entry = HabitLogEntry {
            status: input.status,
            current_streak: input.current_streak.unwrap_or(0),
            mood_after: input.mood_after,
            notes: input.notes,
        };
        let log = self.repo.upsert_log(habit_id, today, &entry).await?;

        if entry.current_streak > habit.best_streak {
            self.repo
                .raise_best_streak(habit_id, entry.current_streak)
                .await?;
            tracing::info!(user_id, habit_id, best_streak = entry.current_streak, "habit_best_streak");
        }
        Ok(log)
    }
}

use crate::application::error::ServiceResult;
use crate::application::ports::habit_repository::HabitRepository;
use crate::domain::habits::Habit;

use super::load_owned_habit;

pub struct GetHabit<'a, R: HabitRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: HabitRepository + ?Sized> GetHabit<'a, R> {
    pub async fn execute(&self, user_id: i64, habit_id: i64) -> ServiceResult<Habit> {
        load_owned_habit(self.repo, habit_id, user_id).await
    }
}

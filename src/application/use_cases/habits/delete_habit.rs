use crate::application::error::ServiceResult;
use crate::application::ports::habit_repository::HabitRepository;

use super::load_owned_habit;

pub struct DeleteHabit<'a, R: HabitRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: HabitRepository + ?Sized> DeleteHabit<'a, R> {
    pub async fn execute(&self, user_id: i64, habit_id: i64) -> ServiceResult<()> {
        load_owned_habit(self.repo, habit_id, user_id).await?;
        self.repo.delete(habit_id).await?;
        tracing::debug!(user_id, habit_id, "habit_deleted");
        Ok(())
    }
}

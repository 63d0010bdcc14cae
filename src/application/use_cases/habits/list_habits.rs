use crate::application::error::ServiceResult;
use crate::application::ports::habit_repository::HabitRepository;
use crate::domain::habits::Habit;

pub struct ListHabits<'a, R: HabitRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: HabitRepository + ?Sized> ListHabits<'a, R> {
    pub async fn execute(&self, user_id: i64) -> ServiceResult<Vec<Habit>> {
        Ok(self.repo.list_for_user(user_id).await?)
    }
}

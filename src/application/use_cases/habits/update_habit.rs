use validator::Validate;

use crate::application::error::{ServiceError, ServiceResult};
use crate::application::ports::habit_repository::{HabitChanges, HabitRepository};
use crate::domain::habits::Habit;

use super::create_habit::HabitInput;
use super::{habit_not_found, load_owned_habit};

pub struct UpdateHabit<'a, R: HabitRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: HabitRepository + ?Sized> UpdateHabit<'a, R> {
    pub async fn execute(&self, user_id: i64, habit_id: i64, input: HabitInput) -> ServiceResult<Habit> {
        load_owned_habit(self.repo, habit_id, user_id).await?;
        input.validate()?;
        let changes = HabitChanges {
            title: input.title,
            target_value: input.target_value,
        };
        self.repo
            .update(habit_id, &changes)
            .await?
            .ok_or_else(|| ServiceError::not_found(habit_not_found(habit_id)))
    }
}

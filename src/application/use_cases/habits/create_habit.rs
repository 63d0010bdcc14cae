use validator::Validate;

use crate::application::error::ServiceResult;
use crate::application::ports::habit_repository::HabitRepository;
use crate::domain::habits::Habit;

#[derive(Debug, Clone, Default, Validate)]
pub struct HabitInput {
    #[validate(
        custom(function = "crate::application::validation::not_blank", message = "Title is required"),
        length(max = 255, message = "Title must be at most 255 characters")
    )]
    pub title: Option<String>,
    #[validate(length(max = 255, message = "Target value must be at most 255 characters"))]
    pub target_value: Option<String>,
}

pub struct CreateHabit<'a, R: HabitRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: HabitRepository + ?Sized> CreateHabit<'a, R> {
    pub async fn execute(&self, user_id: i64, input: HabitInput) -> ServiceResult<Habit> {
        let input = HabitInput {
            title: Some(input.title.unwrap_or_default()),
            ..input
        };
        input.validate()?;
        let title = input.title.unwrap_or_default();
        let habit = self
            .repo
            .create(user_id, &title, input.target_value.as_deref())
            .await?;
        tracing::debug!(user_id, habit_id = habit.id, "habit_created");
        Ok(habit)
    }
}

pub mod create_habit;
pub mod delete_habit;
pub mod get_habit;
pub mod habit_history;
pub mod list_habits;
pub mod log_habit;
pub mod today_habits;
pub mod update_habit;

use crate::application::error::{ServiceError, ServiceResult};
use crate::application::ports::habit_repository::HabitRepository;
use crate::domain::habits::Habit;

pub(crate) fn habit_not_found(id: i64) -> String {
    format!("Habit not found with id: {id}")
}

pub(crate) async fn load_owned_habit<R: HabitRepository + ?Sized>(
    repo: &R,
    habit_id: i64,
    user_id: i64,
) -> ServiceResult<Habit> {
    let habit = repo
        .get(habit_id)
        .await?
        .ok_or_else(|| ServiceError::not_found(habit_not_found(habit_id)))?;
    if habit.user_id != user_id {
        return Err(ServiceError::forbidden(
            "You don't have permission to access this habit",
        ));
    }
    Ok(habit)
}

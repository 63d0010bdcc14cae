pub mod create_goal;
pub mod delete_goal;
pub mod get_goal;
pub mod goal_dashboard;
pub mod list_goals;
pub mod log_progress;
pub mod progress_history;
pub mod update_goal;

use crate::application::error::{ServiceError, ServiceResult};
use crate::application::ports::goal_repository::GoalRepository;
use crate::domain::goals::Goal;

pub const GOAL_NOT_FOUND: &str = "Goal not found or access denied";

/// Goals owned by someone else are reported exactly like missing ones.
pub(crate) async fn load_owned_goal<R: GoalRepository + ?Sized>(
    repo: &R,
    goal_id: i64,
    user_id: i64,
) -> ServiceResult<Goal> {
    match repo.get(goal_id).await? {
        Some(goal) if goal.user_id == user_id => Ok(goal),
        _ => Err(ServiceError::not_found(GOAL_NOT_FOUND)),
    }
}

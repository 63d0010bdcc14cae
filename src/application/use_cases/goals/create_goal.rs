use chrono::NaiveDate;
use validator::Validate;

use crate::application::error::ServiceResult;
use crate::application::ports::goal_repository::{GoalRepository, NewGoal};
use crate::domain::goals::{Goal, STATUS_IN_PROGRESS};

/// Shared by create and update; a missing title is only an error on create.
#[derive(Debug, Clone, Default, Validate)]
pub struct GoalInput {
    #[validate(
        custom(function = "crate::application::validation::not_blank", message = "Title is required"),
        length(max = 255, message = "Title must be at most 255 characters")
    )]
    pub title: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub target_date: Option<NaiveDate>,
    #[validate(length(max = 20, message = "Priority must be at most 20 characters"))]
    pub priority: Option<String>,
    #[validate(length(max = 20, message = "Status must be at most 20 characters"))]
    pub status: Option<String>,
    pub motivation_reason: Option<String>,
}

pub struct CreateGoal<'a, R: GoalRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: GoalRepository + ?Sized> CreateGoal<'a, R> {
    pub async fn execute(&self, user_id: i64, input: GoalInput) -> ServiceResult<Goal> {
        let input = GoalInput {
            title: Some(input.title.unwrap_or_default()),
            ..input
        };
        input.validate()?;

        let goal = NewGoal {
            title: input.title.unwrap_or_default(),
            start_date: input.start_date,
            target_date: input.target_date,
            priority: input.priority,
            status: input
                .status
                .unwrap_or_else(|| STATUS_IN_PROGRESS.to_string()),
            motivation_reason: input.motivation_reason,
        };
        let created = self.repo.create(user_id, &goal).await?;
        tracing::debug!(user_id, goal_id = created.id, "goal_created");
        Ok(created)
    }
}

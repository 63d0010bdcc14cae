use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::goals::{Goal, GoalProgress};

#[derive(Debug, Clone)]
pub struct NewGoal {
    pub title: String,
    pub start_date: Option<NaiveDate>,
    pub target_date: Option<NaiveDate>,
    pub priority: Option<String>,
    pub status: String,
    pub motivation_reason: Option<String>,
}

/// `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct GoalChanges {
    pub title: Option<String>,
    pub target_date: Option<NaiveDate>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub motivation_reason: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ProgressEntry {
    pub today_progress: i32,
    pub total_progress: i32,
    pub notes: Option<String>,
}

#[async_trait]
pub trait GoalRepository: Send + Sync {
    async fn create(&self, user_id: i64, goal: &NewGoal) -> anyhow::Result<Goal>;
    async fn get(&self, id: i64) -> anyhow::Result<Option<Goal>>;
    async fn list_for_user(&self, user_id: i64) -> anyhow::Result<Vec<Goal>>;
    async fn list_for_user_with_status(
        &self,
        user_id: i64,
        status: &str,
    ) -> anyhow::Result<Vec<Goal>>;
    async fn update(&self, id: i64, changes: &GoalChanges) -> anyhow::Result<Option<Goal>>;
    /// Progress rows go with the goal.
    async fn delete(&self, id: i64) -> anyhow::Result<bool>;

    /// Creates the row for (goal, date) or overwrites it.
    async fn upsert_progress(
        &self,
        goal_id: i64,
        date: NaiveDate,
        entry: &ProgressEntry,
    ) -> anyhow::Result<GoalProgress>;
    async fn progress_on(
        &self,
        goal_id: i64,
        date: NaiveDate,
    ) -> anyhow::Result<Option<GoalProgress>>;
    /// Inclusive on both ends, newest first.
    async fn progress_between(
        &self,
        goal_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> anyhow::Result<Vec<GoalProgress>>;
}

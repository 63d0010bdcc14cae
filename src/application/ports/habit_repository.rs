use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::habits::{Habit, HabitLog};

#[derive(Debug, Clone, Default)]
pub struct HabitChanges {
    pub title: Option<String>,
    pub target_value: Option<String>,
}

#[derive(Debug, Clone)]
pub struct HabitLogEntry {
    pub status: Option<String>,
    pub current_streak: i32,
    pub mood_after: Option<String>,
    pub notes: Option<String>,
}

#[async_trait]
pub trait HabitRepository: Send + Sync {
    async fn create(
        &self,
        user_id: i64,
        title: &str,
        target_value: Option<&str>,
    ) -> anyhow::Result<Habit>;
    async fn get(&self, id: i64) -> anyhow::Result<Option<Habit>>;
    async fn list_for_user(&self, user_id: i64) -> anyhow::Result<Vec<Habit>>;
    async fn update(&self, id: i64, changes: &HabitChanges) -> anyhow::Result<Option<Habit>>;
    async fn delete(&self, id: i64) -> anyhow::Result<bool>;
    /// Raises `best_streak` to `streak` if it is higher; never lowers it.
    async fn raise_best_streak(&self, id: i64, streak: i32) -> anyhow::Result<()>;

    async fn upsert_log(
        &self,
        habit_id: i64,
        date: NaiveDate,
        entry: &HabitLogEntry,
    ) -> anyhow::Result<HabitLog>;
    async fn log_on(&self, habit_id: i64, date: NaiveDate) -> anyhow::Result<Option<HabitLog>>;
    /// Inclusive on both ends, newest first.
    async fn logs_between(
        &self,
        habit_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> anyhow::Result<Vec<HabitLog>>;
}

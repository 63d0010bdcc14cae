use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone)]
pub struct Habit {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub target_value: Option<String>,
    pub best_streak: i32,
    pub created_at: DateTime<Utc>,
}

/// One row per habit and calendar day.
#[derive(Debug, Clone)]
pub struct HabitLog {
    pub id: i64,
    pub habit_id: i64,
    pub date: NaiveDate,
    /// completed, skipped or failed by client convention.
    pub status: Option<String>,
    pub current_streak: i32,
    pub mood_after: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct HabitWithLog {
    pub habit: Habit,
    pub today_log: Option<HabitLog>,
}

#[derive(Debug, Clone)]
pub struct HabitDay {
    pub date: NaiveDate,
    pub habits: Vec<HabitWithLog>,
}

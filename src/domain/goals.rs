use chrono::{DateTime, NaiveDate, Utc};

pub const STATUS_IN_PROGRESS: &str = "in_progress";

#[derive(Debug, Clone)]
pub struct Goal {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub start_date: Option<NaiveDate>,
    pub target_date: Option<NaiveDate>,
    /// Low, Medium or High by client convention.
    pub priority: Option<String>,
    /// not_started, in_progress, paused or completed by client convention.
    pub status: String,
    pub motivation_reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// One row per goal and calendar day.
#[derive(Debug, Clone)]
pub struct GoalProgress {
    pub id: i64,
    pub goal_id: i64,
    pub date: NaiveDate,
    pub today_progress: i32,
    pub total_progress: i32,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct GoalWithProgress {
    pub goal: Goal,
    pub today_progress: Option<GoalProgress>,
}

#[derive(Debug, Clone)]
pub struct GoalDashboard {
    pub date: NaiveDate,
    pub goals: Vec<GoalWithProgress>,
}

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
            Priority::Urgent => "URGENT",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "LOW" => Some(Priority::Low),
            "MEDIUM" => Some(Priority::Medium),
            "HIGH" => Some(Priority::High),
            "URGENT" => Some(Priority::Urgent),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    #[default]
    Personal,
    Work,
    Health,
    Learning,
    Shopping,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Personal => "PERSONAL",
            Category::Work => "WORK",
            Category::Health => "HEALTH",
            Category::Learning => "LEARNING",
            Category::Shopping => "SHOPPING",
            Category::Other => "OTHER",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "PERSONAL" => Some(Category::Personal),
            "WORK" => Some(Category::Work),
            "HEALTH" => Some(Category::Health),
            "LEARNING" => Some(Category::Learning),
            "SHOPPING" => Some(Category::Shopping),
            "OTHER" => Some(Category::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub category: Category,
    pub completed: bool,
    pub due_date: Option<NaiveDate>,
    pub completed_at: Option<DateTime<Utc>>,
    pub user_email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub estimated_minutes: Option<i32>,
    pub actual_minutes: Option<i32>,
    pub tags: Option<String>,
}

impl Todo {
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date.map(|d| d < today).unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryStats {
    pub personal: i64,
    pub work: i64,
    pub health: i64,
    pub learning: i64,
    pub shopping: i64,
    pub other: i64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriorityStats {
    pub low: i64,
    pub medium: i64,
    pub high: i64,
    pub urgent: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyProductivity {
    pub date: NaiveDate,
    pub completed: i64,
    pub created: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductivityStats {
    pub completed_today: i64,
    pub completed_this_week: i64,
    pub completed_this_month: i64,
    /// Whole minutes, truncated.
    pub avg_completion_time: i32,
    /// Oldest day first.
    pub last_7_days: Vec<DailyProductivity>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TodoStats {
    pub total_todos: i64,
    pub completed_todos: i64,
    pub pending_todos: i64,
    pub overdue_todos: i64,
    pub today_todos: i64,
    pub week_todos: i64,
    /// Percentage rounded to one decimal.
    pub completion_rate: f64,
    pub category_stats: CategoryStats,
    pub priority_stats: PriorityStats,
    pub productivity_stats: ProductivityStats,
}

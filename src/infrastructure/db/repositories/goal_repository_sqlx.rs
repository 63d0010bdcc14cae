use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::application::ports::goal_repository::{
    GoalChanges, GoalRepository, NewGoal, ProgressEntry,
};
use crate::domain::goals::{Goal, GoalProgress};
use crate::infrastructure::db::PgPool;

const GOAL_COLUMNS: &str = "id, user_id, title, start_date, target_date, priority, status, motivation_reason, created_at";
const PROGRESS_COLUMNS: &str = "id, goal_id, date, today_progress, total_progress, notes, created_at";

pub struct SqlxGoalRepository {
    pub pool: PgPool,
}

impl SqlxGoalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn to_goal(r: PgRow) -> Goal {
    Goal {
        id: r.get("id"),
        user_id: r.get("user_id"),
        title: r.get("title"),
        start_date: r.get("start_date"),
        target_date: r.get("target_date"),
        priority: r.get("priority"),
        status: r.get("status"),
        motivation_reason: r.get("motivation_reason"),
        created_at: r.get("created_at"),
    }
}

fn to_progress(r: PgRow) -> GoalProgress {
    GoalProgress {
        id: r.get("id"),
        goal_id: r.get("goal_id"),
        date: r.get("date"),
        today_progress: r.get("today_progress"),
        total_progress: r.get("total_progress"),
        notes: r.get("notes"),
        created_at: r.get("created_at"),
    }
}

#[async_trait]
impl GoalRepository for SqlxGoalRepository {
    async fn create(&self, user_id: i64, goal: &NewGoal) -> anyhow::Result<Goal> {
        let sql = format!(
            "INSERT INTO goals (user_id, title, start_date, target_date, priority, status, motivation_reason)
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {GOAL_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(user_id)
            .bind(&goal.title)
            .bind(goal.start_date)
            .bind(goal.target_date)
            .bind(goal.priority.as_deref())
            .bind(&goal.status)
            .bind(goal.motivation_reason.as_deref())
            .fetch_one(&self.pool)
            .await?;
        Ok(to_goal(row))
    }

    async fn get(&self, id: i64) -> anyhow::Result<Option<Goal>> {
        let sql = format!("SELECT {GOAL_COLUMNS} FROM goals WHERE id = $1");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(to_goal))
    }

    async fn list_for_user(&self, user_id: i64) -> anyhow::Result<Vec<Goal>> {
        let sql = format!("SELECT {GOAL_COLUMNS} FROM goals WHERE user_id = $1 ORDER BY id");
        let rows = sqlx::query(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(to_goal).collect())
    }

    async fn list_for_user_with_status(
        &self,
        user_id: i64,
        status: &str,
    ) -> anyhow::Result<Vec<Goal>> {
        let sql = format!(
            "SELECT {GOAL_COLUMNS} FROM goals WHERE user_id = $1 AND status = $2 ORDER BY id"
        );
        let rows = sqlx::query(&sql)
            .bind(user_id)
            .bind(status)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(to_goal).collect())
    }

    async fn update(&self, id: i64, changes: &GoalChanges) -> anyhow::Result<Option<Goal>> {
        let sql = format!(
            "UPDATE goals SET
                title = COALESCE($2, title),
                target_date = COALESCE($3, target_date),
                priority = COALESCE($4, priority),
                status = COALESCE($5, status),
                motivation_reason = COALESCE($6, motivation_reason)
             WHERE id = $1 RETURNING {GOAL_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(id)
            .bind(changes.title.as_deref())
            .bind(changes.target_date)
            .bind(changes.priority.as_deref())
            .bind(changes.status.as_deref())
            .bind(changes.motivation_reason.as_deref())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(to_goal))
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM goals WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn upsert_progress(
        &self,
        goal_id: i64,
        date: NaiveDate,
        entry: &ProgressEntry,
    ) -> anyhow::Result<GoalProgress> {
        let sql = format!(
            "INSERT INTO goal_progress (goal_id, date, today_progress, total_progress, notes)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (goal_id, date) DO UPDATE SET
                today_progress = EXCLUDED.today_progress,
                total_progress = EXCLUDED.total_progress,
                notes = EXCLUDED.notes
             RETURNING {PROGRESS_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(goal_id)
            .bind(date)
            .bind(entry.today_progress)
            .bind(entry.total_progress)
            .bind(entry.notes.as_deref())
            .fetch_one(&self.pool)
            .await?;
        Ok(to_progress(row))
    }

    async fn progress_on(
        &self,
        goal_id: i64,
        date: NaiveDate,
    ) -> anyhow::Result<Option<GoalProgress>> {
        let sql =
            format!("SELECT {PROGRESS_COLUMNS} FROM goal_progress WHERE goal_id = $1 AND date = $2");
        let row = sqlx::query(&sql)
            .bind(goal_id)
            .bind(date)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(to_progress))
    }

    async fn progress_between(
        &self,
        goal_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> anyhow::Result<Vec<GoalProgress>> {
        let sql = format!(
            "SELECT {PROGRESS_COLUMNS} FROM goal_progress
             WHERE goal_id = $1 AND date BETWEEN $2 AND $3
             ORDER BY date DESC"
        );
        let rows = sqlx::query(&sql)
            .bind(goal_id)
            .bind(start)
            .bind(end)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(to_progress).collect())
    }
}

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::application::ports::habit_repository::{HabitChanges, HabitLogEntry, HabitRepository};
use crate::domain::habits::{Habit, HabitLog};
use crate::infrastructure::db::PgPool;

const HABIT_COLUMNS: &str = "id, user_id, title, target_value, best_streak, created_at";
const LOG_COLUMNS: &str =
    "id, habit_id, date, status, current_streak, mood_after, notes, created_at";

pub struct SqlxHabitRepository {
    pub pool: PgPool,
}

impl SqlxHabitRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn to_habit(r: PgRow) -> Habit {
    Habit {
        id: r.get("id"),
        user_id: r.get("user_id"),
        title: r.get("title"),
        target_value: r.get("target_value"),
        best_streak: r.get("best_streak"),
        created_at: r.get("created_at"),
    }
}

fn to_log(r: PgRow) -> HabitLog {
    HabitLog {
        id: r.get("id"),
        habit_id: r.get("habit_id"),
        date: r.get("date"),
        status: r.get("status"),
        current_streak: r.get("current_streak"),
        mood_after: r.get("mood_after"),
        notes: r.get("notes"),
        created_at: r.get("created_at"),
    }
}

#[async_trait]
impl HabitRepository for SqlxHabitRepository {
    async fn create(
        &self,
        user_id: i64,
        title: &str,
        target_value: Option<&str>,
    ) -> anyhow::Result<Habit> {
        let sql = format!(
            "INSERT INTO habits (user_id, title, target_value) VALUES ($1, $2, $3) RETURNING {HABIT_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(user_id)
            .bind(title)
            .bind(target_value)
            .fetch_one(&self.pool)
            .await?;
        Ok(to_habit(row))
    }

    async fn get(&self, id: i64) -> anyhow::Result<Option<Habit>> {
        let sql = format!("SELECT {HABIT_COLUMNS} FROM habits WHERE id = $1");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(to_habit))
    }

    async fn list_for_user(&self, user_id: i64) -> anyhow::Result<Vec<Habit>> {
        let sql = format!("SELECT {HABIT_COLUMNS} FROM habits WHERE user_id = $1 ORDER BY id");
        let rows = sqlx::query(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(to_habit).collect())
    }

    async fn update(&self, id: i64, changes: &HabitChanges) -> anyhow::Result<Option<Habit>> {
        let sql = format!(
            "UPDATE habits SET title = COALESCE($2, title), target_value = COALESCE($3, target_value)
             WHERE id = $1 RETURNING {HABIT_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(id)
            .bind(changes.title.as_deref())
            .bind(changes.target_value.as_deref())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(to_habit))
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM habits WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn raise_best_streak(&self, id: i64, streak: i32) -> anyhow::Result<()> {
        sqlx::query("UPDATE habits SET best_streak = GREATEST(best_streak, $2) WHERE id = $1")
            .bind(id)
            .bind(streak)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn upsert_log(
        &self,
        habit_id: i64,
        date: NaiveDate,
        entry: &HabitLogEntry,
    ) -> anyhow::Result<HabitLog> {
        let sql = format!(
            "INSERT INTO habit_logs (habit_id, date, status, current_streak, mood_after, notes)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (habit_id, date) DO UPDATE SET
                status = EXCLUDED.status,
                current_streak = EXCLUDED.current_streak,
                mood_after = EXCLUDED.mood_after,
                notes = EXCLUDED.notes
             RETURNING {LOG_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(habit_id)
            .bind(date)
            .bind(entry.status.as_deref())
            .bind(entry.current_streak)
            .bind(entry.mood_after.as_deref())
            .bind(entry.notes.as_deref())
            .fetch_one(&self.pool)
            .await?;
        Ok(to_log(row))
    }

    async fn log_on(&self, habit_id: i64, date: NaiveDate) -> anyhow::Result<Option<HabitLog>> {
        let sql = format!("SELECT {LOG_COLUMNS} FROM habit_logs WHERE habit_id = $1 AND date = $2");
        let row = sqlx::query(&sql)
            .bind(habit_id)
            .bind(date)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(to_log))
    }

    async fn logs_between(
        &self,
        habit_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> anyhow::Result<Vec<HabitLog>> {
        let sql = format!(
            "SELECT {LOG_COLUMNS} FROM habit_logs
             WHERE habit_id = $1 AND date BETWEEN $2 AND $3
             ORDER BY date DESC"
        );
        let rows = sqlx::query(&sql)
            .bind(habit_id)
            .bind(start)
            .bind(end)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(to_log).collect())
    }
}

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::application::pagination::PageRequest;
use crate::application::ports::diary_repository::{DiaryFields, DiaryRepository};
use crate::domain::diary::{Diary, Mood, PublicDiary, Visibility};
use crate::infrastructure::db::PgPool;

const DIARY_COLUMNS: &str =
    "id, author_id, title, good_things, bad_things, mood, visibility, entry_date";

pub struct SqlxDiaryRepository {
    pub pool: PgPool,
}

impl SqlxDiaryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn parse_mood(raw: Option<String>) -> Option<Mood> {
    raw.as_deref().and_then(Mood::parse)
}

fn to_diary(r: PgRow) -> Diary {
    let visibility: String = r.get("visibility");
    Diary {
        id: r.get("id"),
        author_id: r.get("author_id"),
        title: r.get("title"),
        good_things: r.get("good_things"),
        bad_things: r.get("bad_things"),
        mood: parse_mood(r.get("mood")),
        visibility: Visibility::parse(&visibility).unwrap_or_default(),
        entry_date: r.get("entry_date"),
    }
}

#[async_trait]
impl DiaryRepository for SqlxDiaryRepository {
    async fn upsert_for_day(
        &self,
        author_id: i64,
        entry_date: NaiveDate,
        fields: &DiaryFields,
    ) -> anyhow::Result<Diary> {
        let sql = format!(
            "INSERT INTO diary (author_id, entry_date, title, good_things, bad_things, mood, visibility)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, $8))
             ON CONFLICT (author_id, entry_date) DO UPDATE SET
                title = COALESCE(EXCLUDED.title, diary.title),
                good_things = COALESCE(EXCLUDED.good_things, diary.good_things),
                bad_things = COALESCE(EXCLUDED.bad_things, diary.bad_things),
                mood = COALESCE(EXCLUDED.mood, diary.mood),
                visibility = COALESCE($7, diary.visibility)
             RETURNING {DIARY_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(author_id)
            .bind(entry_date)
            .bind(fields.title.as_deref())
            .bind(fields.good_things.as_deref())
            .bind(fields.bad_things.as_deref())
            .bind(fields.mood.map(|m| m.as_str()))
            .bind(fields.visibility.map(|v| v.as_str()))
            .bind(Visibility::default().as_str())
            .fetch_one(&self.pool)
            .await?;
        Ok(to_diary(row))
    }

    async fn get(&self, id: i64) -> anyhow::Result<Option<Diary>> {
        let sql = format!("SELECT {DIARY_COLUMNS} FROM diary WHERE id = $1");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(to_diary))
    }

    async fn update(&self, id: i64, fields: &DiaryFields) -> anyhow::Result<Option<Diary>> {
        let sql = format!(
            "UPDATE diary SET
                title = COALESCE($2, title),
                good_things = COALESCE($3, good_things),
                bad_things = COALESCE($4, bad_things),
                mood = COALESCE($5, mood),
                visibility = COALESCE($6, visibility)
             WHERE id = $1 RETURNING {DIARY_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(id)
            .bind(fields.title.as_deref())
            .bind(fields.good_things.as_deref())
            .bind(fields.bad_things.as_deref())
            .bind(fields.mood.map(|m| m.as_str()))
            .bind(fields.visibility.map(|v| v.as_str()))
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(to_diary))
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM diary WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn list_for_author(
        &self,
        author_id: i64,
        page: PageRequest,
    ) -> anyhow::Result<(Vec<Diary>, i64)> {
        let sql = format!(
            "SELECT {DIARY_COLUMNS} FROM diary WHERE author_id = $1
             ORDER BY entry_date DESC, id DESC LIMIT $2 OFFSET $3"
        );
        let rows = sqlx::query(&sql)
            .bind(author_id)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await?;
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM diary WHERE author_id = $1")
            .bind(author_id)
            .fetch_one(&self.pool)
            .await?;
        Ok((rows.into_iter().map(to_diary).collect(), total))
    }

    async fn list_public(&self, page: PageRequest) -> anyhow::Result<(Vec<PublicDiary>, i64)> {
        let rows = sqlx::query(
            r#"SELECT d.id, d.title, d.good_things, d.mood, u.name AS author_name, d.entry_date
               FROM diary d JOIN users u ON u.id = d.author_id
               WHERE d.visibility = 'PUBLIC'
               ORDER BY d.entry_date DESC, d.id DESC
               LIMIT $1 OFFSET $2"#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM diary WHERE visibility = 'PUBLIC'")
                .fetch_one(&self.pool)
                .await?;
        let items = rows
            .into_iter()
            .map(|r| PublicDiary {
                id: r.get("id"),
                title: r.get("title"),
                good_things: r.get("good_things"),
                mood: parse_mood(r.get("mood")),
                author_name: r.get("author_name"),
                entry_date: r.get("entry_date"),
            })
            .collect();
        Ok((items, total))
    }
}

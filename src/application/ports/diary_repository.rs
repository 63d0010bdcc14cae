use async_trait::async_trait;
use chrono::NaiveDate;
use validator::Validate;

use crate::application::pagination::PageRequest;
use crate::domain::diary::{Diary, Mood, PublicDiary, Visibility};

/// Fields a client may set on an entry; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, Validate)]
pub struct DiaryFields {
    #[validate(length(max = 255, message = "Title must be at most 255 characters"))]
    pub title: Option<String>,
    pub good_things: Option<String>,
    pub bad_things: Option<String>,
    pub mood: Option<Mood>,
    pub visibility: Option<Visibility>,
}

#[async_trait]
pub trait DiaryRepository: Send + Sync {
    /// Inserts the author's entry for `entry_date`, or merges `fields` into the
    /// one already there. Must be atomic: concurrent calls end with one row.
    async fn upsert_for_day(
        &self,
        author_id: i64,
        entry_date: NaiveDate,
        fields: &DiaryFields,
    ) -> anyhow::Result<Diary>;
    async fn get(&self, id: i64) -> anyhow::Result<Option<Diary>>;
    async fn update(&self, id: i64, fields: &DiaryFields) -> anyhow::Result<Option<Diary>>;
    async fn delete(&self, id: i64) -> anyhow::Result<bool>;
    /// Newest entry first; returns the page and the total row count.
    async fn list_for_author(
        &self,
        author_id: i64,
        page: PageRequest,
    ) -> anyhow::Result<(Vec<Diary>, i64)>;
    async fn list_public(&self, page: PageRequest) -> anyhow::Result<(Vec<PublicDiary>, i64)>;
}

use validator::Validate;

use crate::application::error::ServiceResult;
use crate::application::ports::clock::Clock;
use crate::application::ports::diary_repository::{DiaryFields, DiaryRepository};
use crate::domain::diary::Diary;

pub struct SaveTodayEntry<'a, R, C>
where
    R: DiaryRepository + ?Sized,
    C: Clock + ?Sized,
{
    pub repo: &'a R,
    pub clock: &'a C,
}

impl<'a, R, C> SaveTodayEntry<'a, R, C>
where
    R: DiaryRepository + ?Sized,
    C: Clock + ?Sized,
{
    /// An author keeps one entry per day: a second save that day merges into the first.
    pub async fn execute(&self, author_id: i64, fields: DiaryFields) -> ServiceResult<Diary> {
        fields.validate()?;
        let today = self.clock.today();
        let saved = self.repo.upsert_for_day(author_id, today, &fields).await?;
        tracing::debug!(author_id, diary_id = saved.id, %today, "diary_saved");
        Ok(saved)
    }
}

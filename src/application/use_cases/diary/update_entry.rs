use validator::Validate;

use crate::application::error::ServiceResult;
use crate::application::ports::diary_repository::{DiaryFields, DiaryRepository};
use crate::domain::diary::Diary;

use super::{diary_not_found, load_authored_entry};

pub struct UpdateEntry<'a, R: DiaryRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: DiaryRepository + ?Sized> UpdateEntry<'a, R> {
    pub async fn execute(&self, author_id: i64, id: i64, fields: DiaryFields) -> ServiceResult<Diary> {
        load_authored_entry(self.repo, id, author_id).await?;
        fields.validate()?;
        self.repo
            .update(id, &fields)
            .await?
            .ok_or_else(diary_not_found)
    }
}

use crate::application::error::ServiceResult;
use crate::application::ports::diary_repository::DiaryRepository;

use super::load_authored_entry;

pub struct DeleteEntry<'a, R: DiaryRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: DiaryRepository + ?Sized> DeleteEntry<'a, R> {
    pub async fn execute(&self, author_id: i64, id: i64) -> ServiceResult<()> {
        load_authored_entry(self.repo, id, author_id).await?;
        self.repo.delete(id).await?;
        Ok(())
    }
}

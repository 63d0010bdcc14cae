use crate::application::error::ServiceResult;
use crate::application::pagination::{Page, PageRequest};
use crate::application::ports::diary_repository::DiaryRepository;
use crate::domain::diary::Diary;

pub struct ListMyEntries<'a, R: DiaryRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: DiaryRepository + ?Sized> ListMyEntries<'a, R> {
    pub async fn execute(&self, author_id: i64, page: PageRequest) -> ServiceResult<Page<Diary>> {
        let (rows, total) = self.repo.list_for_author(author_id, page).await?;
        Ok(Page::new(rows, total, page))
    }
}

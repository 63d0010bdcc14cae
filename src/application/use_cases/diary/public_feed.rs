use crate::application::error::ServiceResult;
use crate::application::pagination::{Page, PageRequest};
use crate::application::ports::diary_repository::DiaryRepository;
use crate::domain::diary::PublicDiary;

pub struct PublicFeed<'a, R: DiaryRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: DiaryRepository + ?Sized> PublicFeed<'a, R> {
    pub async fn execute(&self, page: PageRequest) -> ServiceResult<Page<PublicDiary>> {
        let (rows, total) = self.repo.list_public(page).await?;
        Ok(Page::new(rows, total, page))
    }
}

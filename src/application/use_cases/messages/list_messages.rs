use crate::application::error::ServiceResult;
use crate::application::pagination::{Page, PageRequest};
use crate::application::ports::message_repository::MessageRepository;
use crate::domain::messages::Message;

pub struct ListMessages<'a, R: MessageRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: MessageRepository + ?Sized> ListMessages<'a, R> {
    pub async fn execute(&self, page: PageRequest) -> ServiceResult<Page<Message>> {
        let (rows, total) = self.repo.list(page).await?;
        Ok(Page::new(rows, total, page))
    }
}

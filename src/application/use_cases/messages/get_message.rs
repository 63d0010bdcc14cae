use crate::application::error::ServiceResult;
use crate::application::ports::message_repository::MessageRepository;
use crate::domain::messages::Message;

use super::load_message;

pub struct GetMessage<'a, R: MessageRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: MessageRepository + ?Sized> GetMessage<'a, R> {
    pub async fn execute(&self, id: i64) -> ServiceResult<Message> {
        load_message(self.repo, id).await
    }
}

use crate::application::error::{ServiceError, ServiceResult};
use crate::application::ports::message_repository::MessageRepository;
use crate::domain::messages::Message;

use super::create_message::MessageInput;
use super::{load_message, message_not_found, validate_message};

pub struct UpdateMessage<'a, R: MessageRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: MessageRepository + ?Sized> UpdateMessage<'a, R> {
    pub async fn execute(&self, editor_email: &str, id: i64, input: MessageInput) -> ServiceResult<Message> {
        let existing = load_message(self.repo, id).await?;
        if existing.author_email != editor_email {
            return Err(ServiceError::forbidden("You can only edit your own messages"));
        }
        let (title, content) = validate_message(input)?;
        self.repo
            .update(id, &title, &content)
            .await?
            .ok_or_else(|| message_not_found(id))
    }
}

use crate::application::error::{ServiceError, ServiceResult};
use crate::application::ports::message_repository::MessageRepository;

use super::load_message;

pub struct DeleteMessage<'a, R: MessageRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: MessageRepository + ?Sized> DeleteMessage<'a, R> {
    pub async fn execute(&self, requester_email: &str, id: i64) -> ServiceResult<()> {
        let existing = load_message(self.repo, id).await?;
        if existing.author_email != requester_email {
            return Err(ServiceError::forbidden("You can only delete your own messages"));
        }
        self.repo.delete(id).await?;
        tracing::info!(message_id = id, "message_deleted");
        Ok(())
    }
}

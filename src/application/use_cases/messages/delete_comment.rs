use crate::application::error::{ServiceError, ServiceResult};
use crate::application::ports::message_repository::MessageRepository;

use super::load_message;

pub struct DeleteComment<'a, R: MessageRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: MessageRepository + ?Sized> DeleteComment<'a, R> {
    /// Admins may remove any comment, but only through the message it belongs to.
    pub async fn execute(&self, message_id: i64, comment_id: i64) -> ServiceResult<()> {
        load_message(self.repo, message_id).await?;
        let comment = self
            .repo
            .get_comment(comment_id)
            .await?
            .ok_or_else(|| {
                ServiceError::not_found(format!("Comment not found with id: {comment_id}"))
            })?;
        if comment.message_id != message_id {
            return Err(ServiceError::bad_request(
                "Comment does not belong to this message",
            ));
        }
        self.repo.delete_comment(comment_id).await?;
        Ok(())
    }
}

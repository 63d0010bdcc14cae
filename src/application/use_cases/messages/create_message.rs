use validator::Validate;

use crate::application::error::ServiceResult;
use crate::application::ports::message_repository::MessageRepository;
use crate::domain::messages::Message;

use super::validate_message;

#[derive(Debug, Clone, Default, Validate)]
pub struct MessageInput {
    #[validate(
        required(message = "Title is required"),
        custom(function = "crate::application::validation::not_blank", message = "Title is required")
    )]
    pub title: Option<String>,
    #[validate(
        required(message = "Content cannot be empty"),
        custom(function = "crate::application::validation::not_blank", message = "Content cannot be empty"),
        length(max = 1000, message = "Content must be less than 1000 characters")
    )]
    pub content: Option<String>,
}

pub struct CreateMessage<'a, R: MessageRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: MessageRepository + ?Sized> CreateMessage<'a, R> {
    pub async fn execute(&self, author_email: &str, input: MessageInput) -> ServiceResult<Message> {
        let (title, content) = validate_message(input)?;
        let message = self.repo.create(&title, &content, author_email).await?;
        tracing::info!(message_id = message.id, "message_created");
        Ok(message)
    }
}

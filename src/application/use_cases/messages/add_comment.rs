use validator::Validate;

use crate::application::error::ServiceResult;
use crate::application::ports::message_repository::MessageRepository;
use crate::domain::messages::Comment;

use super::load_message;

#[derive(Debug, Validate)]
struct CommentInput {
    #[validate(
        required(message = "Comment cannot be empty"),
        custom(function = "crate::application::validation::not_blank", message = "Comment cannot be empty"),
        length(max = 500, message = "Comment must be less than 500 characters")
    )]
    content: Option<String>,
}

pub struct AddComment<'a, R: MessageRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: MessageRepository + ?Sized> AddComment<'a, R> {
    pub async fn execute(
        &self,
        author_email: &str,
        message_id: i64,
        content: Option<String>,
    ) -> ServiceResult<Comment> {
        let input = CommentInput { content };
        input.validate()?;
        load_message(self.repo, message_id).await?;
        let content = input.content.unwrap_or_default();
        Ok(self
            .repo
            .add_comment(message_id, &content, author_email)
            .await?)
    }
}

use async_trait::async_trait;

use crate::application::pagination::PageRequest;
use crate::domain::messages::{Comment, Message};

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Newest first, comments attached oldest first.
    async fn list(&self, page: PageRequest) -> anyhow::Result<(Vec<Message>, i64)>;
    async fn get(&self, id: i64) -> anyhow::Result<Option<Message>>;
    async fn create(&self, title: &str, content: &str, author_email: &str)
    -> anyhow::Result<Message>;
    async fn update(&self, id: i64, title: &str, content: &str) -> anyhow::Result<Option<Message>>;
    /// Comments go with the message.
    async fn delete(&self, id: i64) -> anyhow::Result<bool>;

    async fn add_comment(
        &self,
        message_id: i64,
        content: &str,
        author_email: &str,
    ) -> anyhow::Result<Comment>;
    async fn get_comment(&self, id: i64) -> anyhow::Result<Option<Comment>>;
    async fn delete_comment(&self, id: i64) -> anyhow::Result<bool>;
}

use async_trait::async_trait;

use crate::domain::users::{Role, User};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts the user, or returns the existing row when the email is taken.
    async fn create_user(
        &self,
        email: &str,
        name: &str,
        image_url: Option<&str>,
        role: Role,
    ) -> anyhow::Result<User>;
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>>;
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<User>>;
    async fn update_role(&self, id: i64, role: Role) -> anyhow::Result<bool>;
}

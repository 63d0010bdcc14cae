use crate::application::error::{ServiceError, ServiceResult};
use crate::application::ports::id_token_verifier::IdTokenVerifier;
use crate::application::ports::user_repository::UserRepository;
use crate::domain::users::{Role, User};

use super::display_name;

#[derive(Debug, Clone, Default)]
pub struct FirebaseSignInRequest {
    pub id_token: String,
    pub name: Option<String>,
    pub image_url: Option<String>,
}

pub struct FirebaseSignIn<'a, R, V>
where
    R: UserRepository + ?Sized,
    V: IdTokenVerifier + ?Sized,
{
    pub users: &'a R,
    pub verifier: &'a V,
}

impl<'a, R, V> FirebaseSignIn<'a, R, V>
where
    R: UserRepository + ?Sized,
    V: IdTokenVerifier + ?Sized,
{
    /// The account is keyed by the email inside the verified token, never the request body.
    pub async fn execute(&self, req: FirebaseSignInRequest) -> ServiceResult<User> {
        let identity = self
            .verifier
            .verify(&req.id_token)
            .await?
            .ok_or_else(|| ServiceError::Unauthorized("Invalid Firebase token".into()))?;

        if let Some(existing) = self.users.find_by_email(&identity.email).await? {
            return Ok(existing);
        }
        let name = display_name(req.name.as_deref(), identity.name.as_deref(), &identity.email);
        let image = req.image_url.as_deref().or(identity.picture.as_deref());
        let created = self
            .users
            .create_user(&identity.email, &name, image, Role::User)
            .await?;
        tracing::info!(user_id = created.id, "user_registered");
        Ok(created)
    }
}

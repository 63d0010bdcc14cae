use crate::application::error::{ServiceError, ServiceResult};
use crate::application::ports::id_token_verifier::IdTokenVerifier;
use crate::application::ports::user_repository::UserRepository;
use crate::domain::users::{Role, User};

use super::{display_name, is_admin_email};

#[derive(Debug, Clone, Default)]
pub struct GoogleSignInRequest {
    pub id_token: String,
    pub email: String,
    pub name: Option<String>,
    pub image_url: Option<String>,
}

pub struct GoogleSignIn<'a, R, V>
where
    R: UserRepository + ?Sized,
    V: IdTokenVerifier + ?Sized,
{
    pub users: &'a R,
    pub verifier: &'a V,
    pub admin_emails: &'a [String],
}

impl<'a, R, V> GoogleSignIn<'a, R, V>
where
    R: UserRepository + ?Sized,
    V: IdTokenVerifier + ?Sized,
{
    pub async fn execute(&self, req: GoogleSignInRequest) -> ServiceResult<User> {
        let identity = self
            .verifier
            .verify(&req.id_token)
            .await?
            .ok_or_else(|| ServiceError::bad_request("Invalid Google token"))?;
        if identity.email != req.email {
            return Err(ServiceError::bad_request("Email verification failed"));
        }

        let role = if is_admin_email(self.admin_emails, &req.email) {
            Role::Admin
        } else {
            Role::User
        };

        let user = match self.users.find_by_email(&req.email).await? {
            Some(mut existing) => {
                if existing.role != role {
                    self.users.update_role(existing.id, role).await?;
                    tracing::info!(user_id = existing.id, role = role.as_str(), "user_role_changed");
                    existing.role = role;
                }
                existing
            }
            None => {
                let name = display_name(req.name.as_deref(), identity.name.as_deref(), &req.email);
                let image = req.image_url.as_deref().or(identity.picture.as_deref());
                let created = self
                    .users
                    .create_user(&req.email, &name, image, role)
                    .await?;
                tracing::info!(user_id = created.id, "user_registered");
                created
            }
        };
        Ok(user)
    }
}

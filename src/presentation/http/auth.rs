use axum::{
    Json, Router,
    extract::{FromRequestParts, State},
    http::request::Parts,
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::use_cases::auth::firebase_sign_in::{FirebaseSignIn, FirebaseSignInRequest};
use crate::application::use_cases::auth::google_sign_in::{GoogleSignIn, GoogleSignInRequest};
use crate::application::use_cases::auth::me::GetMe;
use crate::bootstrap::app_context::AppContext;
use crate::bootstrap::config::Config;
use crate::domain::users::{Role, User};
use crate::presentation::http::error::{ApiError, ErrorBody};
use crate::presentation::http::extract::AppJson;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GoogleAuthRequest {
    pub id_token: String,
    pub email: String,
    pub name: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FirebaseAuthRequest {
    pub firebase_id_token: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignedInUser {
    pub id: i64,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub role: Role,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub success: bool,
    pub token: String,
    pub user: SignedInUser,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub image_url: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            name: u.name,
            image_url: u.image_url,
            role: u.role,
            created_at: u.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/google", post(google))
        .route("/firebase", post(firebase))
        .route("/me", get(me))
        .with_state(ctx)
}

#[utoipa::path(post, path = "/auth/google", tag = "Auth", request_body = GoogleAuthRequest, security(()), responses(
    (status = 200, body = AuthResponse),
    (status = 400, body = ErrorBody)
))]
pub async fn google(
    State(ctx): State<AppContext>,
    AppJson(req): AppJson<GoogleAuthRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let verifier = ctx
        .google_verifier()
        .ok_or_else(|| ApiError::internal("Google sign-in is not configured"))?;
    let users = ctx.user_repo();
    let uc = GoogleSignIn {
        users: users.as_ref(),
        verifier: verifier.as_ref(),
        admin_emails: &ctx.cfg.admin_emails,
    };
    let user = uc
        .execute(GoogleSignInRequest {
            id_token: req.id_token,
            email: req.email,
            name: req.name,
            image_url: req.image_url,
        })
        .await?;

    let token = issue_token(&ctx.cfg, &user, Utc::now())?;
    Ok(Json(AuthResponse {
        success: true,
        token,
        user: SignedInUser {
            id: user.id,
            email: user.email,
            name: user.name,
            image_url: Some(user.image_url.unwrap_or_default()),
            role: user.role,
        },
    }))
}

#[utoipa::path(post, path = "/auth/firebase", tag = "Auth", request_body = FirebaseAuthRequest, security(()), responses(
    (status = 200, body = AuthResponse),
    (status = 401, body = ErrorBody)
))]
pub async fn firebase(
    State(ctx): State<AppContext>,
    AppJson(req): AppJson<FirebaseAuthRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let verifier = ctx
        .firebase_verifier()
        .ok_or_else(|| ApiError::internal("Firebase sign-in is not configured"))?;
    let users = ctx.user_repo();
    let uc = FirebaseSignIn {
        users: users.as_ref(),
        verifier: verifier.as_ref(),
    };
    let user = uc
        .execute(FirebaseSignInRequest {
            id_token: req.firebase_id_token,
            name: req.name,
            image_url: req.image_url,
        })
        .await?;

    let token = issue_token(&ctx.cfg, &user, Utc::now())?;
    Ok(Json(AuthResponse {
        success: true,
        token,
        user: SignedInUser {
            id: user.id,
            email: user.email,
            name: user.name,
            image_url: None,
            role: user.role,
        },
    }))
}

#[utoipa::path(get, path = "/auth/me", tag = "Auth", responses(
    (status = 200, body = UserProfile),
    (status = 401, body = ErrorBody)
))]
pub async fn me(State(ctx): State<AppContext>, auth: AuthUser) -> Result<Json<UserProfile>, ApiError> {
    let repo = ctx.user_repo();
    let uc = GetMe {
        repo: repo.as_ref(),
    };
    let user = uc.execute(auth.id).await?;
    Ok(Json(user.into()))
}

// --- Bearer extractor & JWT utils ---

pub struct Bearer(pub String);

#[axum::async_trait]
impl<S> FromRequestParts<S> for Bearer
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(|t| Bearer(t.to_string()))
            .ok_or_else(|| ApiError::unauthorized("Missing or malformed bearer token"))
    }
}

/// Caller identity taken from a verified app token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
    pub role: Role,
}

impl AuthUser {
    pub fn require_admin(&self) -> Result<(), ApiError> {
        if self.role == Role::Admin {
            Ok(())
        } else {
            Err(ApiError::forbidden("Admin access required"))
        }
    }
}

#[axum::async_trait]
impl FromRequestParts<AppContext> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        ctx: &AppContext,
    ) -> Result<Self, Self::Rejection> {
        let bearer = Bearer::from_request_parts(parts, ctx).await?;
        let claims = decode_token(&ctx.cfg, &bearer.0)?;
        Ok(AuthUser {
            id: claims.user_id,
            email: claims.email,
            role: Role::parse(&claims.role).unwrap_or_default(),
        })
    }
}

pub fn issue_token(cfg: &Config, user: &User, now: DateTime<Utc>) -> Result<String, ApiError> {
    let iat = now.timestamp();
    let claims = Claims {
        sub: user.email.clone(),
        email: user.email.clone(),
        user_id: user.id,
        role: user.role.as_str().to_string(),
        iat,
        exp: iat + cfg.jwt_expires_secs,
    };
    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(cfg.jwt_secret.as_bytes()),
    )
    .map_err(|e| {
        tracing::error!(error = %e, "token_encode_failed");
        ApiError::internal("Could not issue token")
    })
}

pub fn decode_token(cfg: &Config, token: &str) -> Result<Claims, ApiError> {
    jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(cfg.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| {
        tracing::debug!(error = %e, "token_rejected");
        ApiError::unauthorized("Invalid or expired token")
    })
}

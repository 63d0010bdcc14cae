use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{delete, get, post, put},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::use_cases::messages::add_comment::AddComment;
use crate::application::use_cases::messages::create_message::{CreateMessage, MessageInput};
use crate::application::use_cases::messages::delete_comment::DeleteComment;
use crate::application::use_cases::messages::delete_message::DeleteMessage;
use crate::application::use_cases::messages::get_message::GetMessage;
use crate::application::use_cases::messages::list_messages::ListMessages;
use crate::application::use_cases::messages::update_message::UpdateMessage;
use crate::bootstrap::app_context::AppContext;
use crate::domain::messages::{Comment, Message};
use crate::presentation::http::auth::AuthUser;
use crate::presentation::http::error::{ApiError, ErrorBody};
use crate::presentation::http::extract::{AppJson, AppPath, AppQuery};
use crate::presentation::http::pagination::{MessagePage, PageQuery, PageResponse};

const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: i64,
    pub message_id: i64,
    pub content: String,
    pub author_email: String,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(c: Comment) -> Self {
        Self {
            id: c.id,
            message_id: c.message_id,
            content: c.content,
            author_email: c.author_email,
            created_at: c.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub comments: Vec<CommentResponse>,
    pub comment_count: usize,
}

impl From<Message> for MessageResponse {
    fn from(m: Message) -> Self {
        Self {
            id: m.id,
            title: m.title,
            content: m.content,
            author_email: m.author_email,
            created_at: m.created_at,
            updated_at: m.updated_at,
            comment_count: m.comments.len(),
            comments: m.comments.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct MessageRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl From<MessageRequest> for MessageInput {
    fn from(r: MessageRequest) -> Self {
        Self {
            title: r.title,
            content: r.content,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CommentRequest {
    pub content: Option<String>,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/", get(list_messages))
        .route("/:id", get(get_message))
        .route("/:id/comments", post(add_comment))
        .route("/admin", post(create_message))
        .route("/admin/:id", put(update_message).delete(delete_message))
        .route("/admin/:id/comments/:comment_id", delete(delete_comment))
        .with_state(ctx)
}

#[utoipa::path(get, path = "/api/messages", tag = "Messages", params(PageQuery),
    responses((status = 200, body = MessagePage)))]
pub async fn list_messages(
    State(ctx): State<AppContext>,
    _auth: AuthUser,
    AppQuery(q): AppQuery<PageQuery>,
) -> Result<Json<PageResponse<MessageResponse>>, ApiError> {
    let repo = ctx.message_repo();
    let uc = ListMessages {
        repo: repo.as_ref(),
    };
    let page = uc.execute(q.to_request(DEFAULT_PAGE_SIZE)).await?;
    Ok(Json(PageResponse::from_page(page, MessageResponse::from)))
}

#[utoipa::path(get, path = "/api/messages/{id}", tag = "Messages",
    params(("id" = i64, Path, description = "Message ID")),
    responses((status = 200, body = MessageResponse), (status = 404, body = ErrorBody)))]
pub async fn get_message(
    State(ctx): State<AppContext>,
    _auth: AuthUser,
    AppPath(id): AppPath<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let repo = ctx.message_repo();
    let uc = GetMessage {
        repo: repo.as_ref(),
    };
    Ok(Json(uc.execute(id).await?.into()))
}

#[utoipa::path(post, path = "/api/messages/{id}/comments", tag = "Messages", request_body = CommentRequest,
    params(("id" = i64, Path, description = "Message ID")),
    responses((status = 201, body = CommentResponse), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn add_comment(
    State(ctx): State<AppContext>,
    auth: AuthUser,
    AppPath(id): AppPath<i64>,
    AppJson(req): AppJson<CommentRequest>,
) -> Result<(StatusCode, Json<CommentResponse>), ApiError> {
    let repo = ctx.message_repo();
    let uc = AddComment {
        repo: repo.as_ref(),
    };
    let comment = uc.execute(&auth.email, id, req.content).await?;
    Ok((StatusCode::CREATED, Json(comment.into())))
}

#[utoipa::path(post, path = "/api/messages/admin", tag = "Messages", request_body = MessageRequest,
    responses((status = 201, body = MessageResponse), (status = 400, body = ErrorBody), (status = 403, body = ErrorBody)))]
pub async fn create_message(
    State(ctx): State<AppContext>,
    auth: AuthUser,
    AppJson(req): AppJson<MessageRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    auth.require_admin()?;
    let repo = ctx.message_repo();
    let uc = CreateMessage {
        repo: repo.as_ref(),
    };
    let message = uc.execute(&auth.email, req.into()).await?;
    Ok((StatusCode::CREATED, Json(message.into())))
}

#[utoipa::path(put, path = "/api/messages/admin/{id}", tag = "Messages", request_body = MessageRequest,
    params(("id" = i64, Path, description = "Message ID")),
    responses((status = 200, body = MessageResponse), (status = 403, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn update_message(
    State(ctx): State<AppContext>,
    auth: AuthUser,
    AppPath(id): AppPath<i64>,
    AppJson(req): AppJson<MessageRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    auth.require_admin()?;
    let repo = ctx.message_repo();
    let uc = UpdateMessage {
        repo: repo.as_ref(),
    };
    Ok(Json(uc.execute(&auth.email, id, req.into()).await?.into()))
}

#[utoipa::path(delete, path = "/api/messages/admin/{id}", tag = "Messages",
    params(("id" = i64, Path, description = "Message ID")),
    responses((status = 204), (status = 403, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn delete_message(
    State(ctx): State<AppContext>,
    auth: AuthUser,
    AppPath(id): AppPath<i64>,
) -> Result<StatusCode, ApiError> {
    auth.require_admin()?;
    let repo = ctx.message_repo();
    let uc = DeleteMessage {
        repo: repo.as_ref(),
    };
    uc.execute(&auth.email, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(delete, path = "/api/messages/admin/{id}/comments/{comment_id}", tag = "Messages",
    params(
        ("id" = i64, Path, description = "Message ID"),
        ("comment_id" = i64, Path, description = "Comment ID")
    ),
    responses((status = 204), (status = 400, body = ErrorBody), (status = 403, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn delete_comment(
    State(ctx): State<AppContext>,
    auth: AuthUser,
    AppPath((id, comment_id)): AppPath<(i64, i64)>,
) -> Result<StatusCode, ApiError> {
    auth.require_admin()?;
    let repo = ctx.message_repo();
    let uc = DeleteComment {
        repo: repo.as_ref(),
    };
    uc.execute(id, comment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post, put},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::ports::diary_repository::DiaryFields;
use crate::application::use_cases::diary::delete_entry::DeleteEntry;
use crate::application::use_cases::diary::list_my_entries::ListMyEntries;
use crate::application::use_cases::diary::public_feed::PublicFeed;
use crate::application::use_cases::diary::save_today::SaveTodayEntry;
use crate::application::use_cases::diary::update_entry::UpdateEntry;
use crate::bootstrap::app_context::AppContext;
use crate::domain::diary::{Diary, Mood, PublicDiary, Visibility};
use crate::presentation::http::auth::AuthUser;
use crate::presentation::http::error::{ApiError, ErrorBody};
use crate::presentation::http::extract::{AppJson, AppPath, AppQuery};
use crate::presentation::http::pagination::{DiaryPage, PageQuery, PageResponse, PublicDiaryPage};

const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiaryResponse {
    pub id: i64,
    pub author_id: i64,
    pub title: Option<String>,
    pub good_things: Option<String>,
    pub bad_things: Option<String>,
    pub mood: Option<Mood>,
    pub visibility: Visibility,
    pub entry_date: NaiveDate,
}

impl From<Diary> for DiaryResponse {
    fn from(d: Diary) -> Self {
        Self {
            id: d.id,
            author_id: d.author_id,
            title: d.title,
            good_things: d.good_things,
            bad_things: d.bad_things,
            mood: d.mood,
            visibility: d.visibility,
            entry_date: d.entry_date,
        }
    }
}

/// Public feed item; the author's bad things stay private.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicDiaryResponse {
    pub id: i64,
    pub title: Option<String>,
    pub good_things: Option<String>,
    pub mood: Option<Mood>,
    pub author_name: String,
    pub entry_date: NaiveDate,
}

impl From<PublicDiary> for PublicDiaryResponse {
    fn from(d: PublicDiary) -> Self {
        Self {
            id: d.id,
            title: d.title,
            good_things: d.good_things,
            mood: d.mood,
            author_name: d.author_name,
            entry_date: d.entry_date,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiaryRequest {
    pub title: Option<String>,
    pub good_things: Option<String>,
    pub bad_things: Option<String>,
    pub mood: Option<Mood>,
    pub visibility: Option<Visibility>,
}

impl From<DiaryRequest> for DiaryFields {
    fn from(r: DiaryRequest) -> Self {
        Self {
            title: r.title,
            good_things: r.good_things,
            bad_things: r.bad_things,
            mood: r.mood,
            visibility: r.visibility,
        }
    }
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/", post(save_today))
        .route("/me", get(list_mine))
        .route("/public", get(public_feed))
        .route("/:id", put(update_entry).delete(delete_entry))
        .with_state(ctx)
}

#[utoipa::path(post, path = "/api/diaries", tag = "Diary", request_body = DiaryRequest, responses(
    (status = 201, body = DiaryResponse)
))]
pub async fn save_today(
    State(ctx): State<AppContext>,
    auth: AuthUser,
    AppJson(req): AppJson<DiaryRequest>,
) -> Result<(StatusCode, Json<DiaryResponse>), ApiError> {
    let repo = ctx.diary_repo();
    let clock = ctx.clock();
    let uc = SaveTodayEntry {
        repo: repo.as_ref(),
        clock: clock.as_ref(),
    };
    let entry = uc.execute(auth.id, req.into()).await?;
    Ok((StatusCode::CREATED, Json(entry.into())))
}

#[utoipa::path(get, path = "/api/diaries/me", tag = "Diary", params(PageQuery),
    responses((status = 200, body = DiaryPage)))]
pub async fn list_mine(
    State(ctx): State<AppContext>,
    auth: AuthUser,
    AppQuery(q): AppQuery<PageQuery>,
) -> Result<Json<PageResponse<DiaryResponse>>, ApiError> {
    let repo = ctx.diary_repo();
    let uc = ListMyEntries {
        repo: repo.as_ref(),
    };
    let page = uc.execute(auth.id, q.to_request(DEFAULT_PAGE_SIZE)).await?;
    Ok(Json(PageResponse::from_page(page, DiaryResponse::from)))
}

#[utoipa::path(get, path = "/api/diaries/public", tag = "Diary", params(PageQuery),
    responses((status = 200, body = PublicDiaryPage)))]
pub async fn public_feed(
    State(ctx): State<AppContext>,
    _auth: AuthUser,
    AppQuery(q): AppQuery<PageQuery>,
) -> Result<Json<PageResponse<PublicDiaryResponse>>, ApiError> {
    let repo = ctx.diary_repo();
    let uc = PublicFeed {
        repo: repo.as_ref(),
    };
    let page = uc.execute(q.to_request(DEFAULT_PAGE_SIZE)).await?;
    Ok(Json(PageResponse::from_page(page, PublicDiaryResponse::from)))
}

#[utoipa::path(put, path = "/api/diaries/{id}", tag = "Diary", request_body = DiaryRequest,
    params(("id" = i64, Path, description = "Diary ID")),
    responses((status = 200, body = DiaryResponse), (status = 403, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn update_entry(
    State(ctx): State<AppContext>,
    auth: AuthUser,
    AppPath(id): AppPath<i64>,
    AppJson(req): AppJson<DiaryRequest>,
) -> Result<Json<DiaryResponse>, ApiError> {
    let repo = ctx.diary_repo();
    let uc = UpdateEntry {
        repo: repo.as_ref(),
    };
    Ok(Json(uc.execute(auth.id, id, req.into()).await?.into()))
}

#[utoipa::path(delete, path = "/api/diaries/{id}", tag = "Diary",
    params(("id" = i64, Path, description = "Diary ID")),
    responses((status = 204), (status = 403, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn delete_entry(
    State(ctx): State<AppContext>,
    auth: AuthUser,
    AppPath(id): AppPath<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = ctx.diary_repo();
    let uc = DeleteEntry {
        repo: repo.as_ref(),
    };
    uc.execute(auth.id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::use_cases::habits::create_habit::{CreateHabit, HabitInput};
use crate::application::use_cases::habits::delete_habit::DeleteHabit;
use crate::application::use_cases::habits::get_habit::GetHabit;
use crate::application::use_cases::habits::habit_history::HabitHistory;
use crate::application::use_cases::habits::list_habits::ListHabits;
use crate::application::use_cases::habits::log_habit::{HabitLogInput, LogHabit};
use crate::application::use_cases::habits::today_habits::TodayHabits;
use crate::application::use_cases::habits::update_habit::UpdateHabit;
use crate::bootstrap::app_context::AppContext;
use crate::domain::habits::{Habit, HabitDay, HabitLog};
use crate::presentation::http::StatusMessage;
use crate::presentation::http::auth::AuthUser;
use crate::presentation::http::error::{ApiError, ErrorBody};
use crate::presentation::http::extract::{AppJson, AppPath, AppQuery};
use crate::presentation::http::goals::{DateQuery, DaysQuery};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HabitResponse {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub target_value: Option<String>,
    pub best_streak: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Habit> for HabitResponse {
    fn from(h: Habit) -> Self {
        Self {
            id: h.id,
            user_id: h.user_id,
            title: h.title,
            target_value: h.target_value,
            best_streak: h.best_streak,
            created_at: h.created_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HabitRequest {
    pub title: Option<String>,
    pub target_value: Option<String>,
}

impl From<HabitRequest> for HabitInput {
    fn from(r: HabitRequest) -> Self {
        Self {
            title: r.title,
            target_value: r.target_value,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HabitLogRequest {
    pub habit_id: Option<i64>,
    pub status: Option<String>,
    pub current_streak: Option<i32>,
    pub mood_after: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HabitLogResponse {
    pub id: i64,
    pub habit_id: i64,
    pub date: NaiveDate,
    pub status: Option<String>,
    pub current_streak: i32,
    pub mood_after: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<HabitLog> for HabitLogResponse {
    fn from(l: HabitLog) -> Self {
        Self {
            id: l.id,
            habit_id: l.habit_id,
            date: l.date,
            status: l.status,
            current_streak: l.current_streak,
            mood_after: l.mood_after,
            notes: l.notes,
            created_at: l.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HabitWithLogResponse {
    pub habit: HabitResponse,
    pub today_log: Option<HabitLogResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HabitDayResponse {
    pub date: NaiveDate,
    pub habits: Vec<HabitWithLogResponse>,
}

impl From<HabitDay> for HabitDayResponse {
    fn from(d: HabitDay) -> Self {
        Self {
            date: d.date,
            habits: d
                .habits
                .into_iter()
                .map(|h| HabitWithLogResponse {
                    habit: h.habit.into(),
                    today_log: h.today_log.map(Into::into),
                })
                .collect(),
        }
    }
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/", post(create_habit))
        .route("/me", get(list_my_habits))
        .route("/log", post(log_habit))
        .route("/today", get(today))
        .route(
            "/:id",
            get(get_habit).put(update_habit).delete(delete_habit),
        )
        .route("/:id/logs", get(habit_history))
        .with_state(ctx)
}

#[utoipa::path(post, path = "/api/habits", tag = "Habits", request_body = HabitRequest, responses(
    (status = 200, body = HabitResponse),
    (status = 400, body = ErrorBody)
))]
pub async fn create_habit(
    State(ctx): State<AppContext>,
    auth: AuthUser,
    AppJson(req): AppJson<HabitRequest>,
) -> Result<Json<HabitResponse>, ApiError> {
    let repo = ctx.habit_repo();
    let uc = CreateHabit {
        repo: repo.as_ref(),
    };
    Ok(Json(uc.execute(auth.id, req.into()).await?.into()))
}

#[utoipa::path(get, path = "/api/habits/me", tag = "Habits", responses((status = 200, body = [HabitResponse])))]
pub async fn list_my_habits(
    State(ctx): State<AppContext>,
    auth: AuthUser,
) -> Result<Json<Vec<HabitResponse>>, ApiError> {
    let repo = ctx.habit_repo();
    let uc = ListHabits {
        repo: repo.as_ref(),
    };
    let habits = uc.execute(auth.id).await?;
    Ok(Json(habits.into_iter().map(Into::into).collect()))
}

#[utoipa::path(get, path = "/api/habits/{id}", tag = "Habits",
    params(("id" = i64, Path, description = "Habit ID")),
    responses((status = 200, body = HabitResponse), (status = 403, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn get_habit(
    State(ctx): State<AppContext>,
    auth: AuthUser,
    AppPath(id): AppPath<i64>,
) -> Result<Json<HabitResponse>, ApiError> {
    let repo = ctx.habit_repo();
    let uc = GetHabit {
        repo: repo.as_ref(),
    };
    Ok(Json(uc.execute(auth.id, id).await?.into()))
}

#[utoipa::path(put, path = "/api/habits/{id}", tag = "Habits", request_body = HabitRequest,
    params(("id" = i64, Path, description = "Habit ID")),
    responses((status = 200, body = HabitResponse), (status = 403, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn update_habit(
    State(ctx): State<AppContext>,
    auth: AuthUser,
    AppPath(id): AppPath<i64>,
    AppJson(req): AppJson<HabitRequest>,
) -> Result<Json<HabitResponse>, ApiError> {
    let repo = ctx.habit_repo();
    let uc = UpdateHabit {
        repo: repo.as_ref(),
    };
    Ok(Json(uc.execute(auth.id, id, req.into()).await?.into()))
}

#[utoipa::path(delete, path = "/api/habits/{id}", tag = "Habits",
    params(("id" = i64, Path, description = "Habit ID")),
    responses((status = 200, body = StatusMessage), (status = 403, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn delete_habit(
    State(ctx): State<AppContext>,
    auth: AuthUser,
    AppPath(id): AppPath<i64>,
) -> Result<Json<StatusMessage>, ApiError> {
    let repo = ctx.habit_repo();
    let uc = DeleteHabit {
        repo: repo.as_ref(),
    };
    uc.execute(auth.id, id).await?;
    Ok(Json(StatusMessage::new("Habit deleted successfully")))
}

#[utoipa::path(post, path = "/api/habits/log", tag = "Habits", request_body = HabitLogRequest, responses(
    (status = 200, body = HabitLogResponse),
    (status = 400, body = ErrorBody),
    (status = 403, body = ErrorBody)
))]
pub async fn log_habit(
    State(ctx): State<AppContext>,
    auth: AuthUser,
    AppJson(req): AppJson<HabitLogRequest>,
) -> Result<Json<HabitLogResponse>, ApiError> {
    let repo = ctx.habit_repo();
    let clock = ctx.clock();
    let uc = LogHabit {
        repo: repo.as_ref(),
        clock: clock.as_ref(),
    };
    let log = uc
        .execute(
            auth.id,
            HabitLogInput {
                habit_id: req.habit_id,
                status: req.status,
                current_streak: req.current_streak,
                mood_after: req.mood_after,
                notes: req.notes,
            },
        )
        .await?;
    Ok(Json(log.into()))
}

#[utoipa::path(get, path = "/api/habits/{id}/logs", tag = "Habits",
    params(("id" = i64, Path, description = "Habit ID"), DaysQuery),
    responses((status = 200, body = [HabitLogResponse]), (status = 404, body = ErrorBody)))]
pub async fn habit_history(
    State(ctx): State<AppContext>,
    auth: AuthUser,
    AppPath(id): AppPath<i64>,
    AppQuery(q): AppQuery<DaysQuery>,
) -> Result<Json<Vec<HabitLogResponse>>, ApiError> {
    let repo = ctx.habit_repo();
    let clock = ctx.clock();
    let uc = HabitHistory {
        repo: repo.as_ref(),
        clock: clock.as_ref(),
    };
    let logs = uc.execute(auth.id, id, q.days).await?;
    Ok(Json(logs.into_iter().map(Into::into).collect()))
}

#[utoipa::path(get, path = "/api/habits/today", tag = "Habits",
    params(DateQuery),
    responses((status = 200, body = HabitDayResponse)))]
pub async fn today(
    State(ctx): State<AppContext>,
    auth: AuthUser,
    AppQuery(q): AppQuery<DateQuery>,
) -> Result<Json<HabitDayResponse>, ApiError> {
    let repo = ctx.habit_repo();
    let clock = ctx.clock();
    let uc = TodayHabits {
        repo: repo.as_ref(),
        clock: clock.as_ref(),
    };
    Ok(Json(uc.execute(auth.id, q.date).await?.into()))
}

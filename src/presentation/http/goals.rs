use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::use_cases::goals::create_goal::{CreateGoal, GoalInput};
use crate::application::use_cases::goals::delete_goal::DeleteGoal;
use crate::application::use_cases::goals::get_goal::GetGoal;
use crate::application::use_cases::goals::goal_dashboard::GetGoalDashboard;
use crate::application::use_cases::goals::list_goals::ListGoals;
use crate::application::use_cases::goals::log_progress::{LogProgress, ProgressInput};
use crate::application::use_cases::goals::progress_history::ProgressHistory;
use crate::application::use_cases::goals::update_goal::UpdateGoal;
use crate::bootstrap::app_context::AppContext;
use crate::domain::goals::{Goal, GoalDashboard, GoalProgress};
use crate::presentation::http::StatusMessage;
use crate::presentation::http::auth::AuthUser;
use crate::presentation::http::error::{ApiError, ErrorBody};
use crate::presentation::http::extract::{AppJson, AppPath, AppQuery};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GoalResponse {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub start_date: Option<NaiveDate>,
    pub target_date: Option<NaiveDate>,
    pub priority: Option<String>,
    pub status: String,
    pub motivation_reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Goal> for GoalResponse {
    fn from(g: Goal) -> Self {
        Self {
            id: g.id,
            user_id: g.user_id,
            title: g.title,
            start_date: g.start_date,
            target_date: g.target_date,
            priority: g.priority,
            status: g.status,
            motivation_reason: g.motivation_reason,
            created_at: g.created_at,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GoalRequest {
    pub title: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub target_date: Option<NaiveDate>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub motivation_reason: Option<String>,
}

impl From<GoalRequest> for GoalInput {
    fn from(r: GoalRequest) -> Self {
        Self {
            title: r.title,
            start_date: r.start_date,
            target_date: r.target_date,
            priority: r.priority,
            status: r.status,
            motivation_reason: r.motivation_reason,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRequest {
    pub goal_id: Option<i64>,
    pub today_progress: Option<i32>,
    pub total_progress: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgressResponse {
    pub id: i64,
    pub goal_id: i64,
    pub date: NaiveDate,
    pub today_progress: i32,
    pub total_progress: i32,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<GoalProgress> for GoalProgressResponse {
    fn from(p: GoalProgress) -> Self {
        Self {
            id: p.id,
            goal_id: p.goal_id,
            date: p.date,
            today_progress: p.today_progress,
            total_progress: p.total_progress,
            notes: p.notes,
            created_at: p.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GoalWithProgressResponse {
    pub goal: GoalResponse,
    pub today_progress: Option<GoalProgressResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GoalDashboardResponse {
    pub date: NaiveDate,
    pub goals: Vec<GoalWithProgressResponse>,
}

impl From<GoalDashboard> for GoalDashboardResponse {
    fn from(d: GoalDashboard) -> Self {
        Self {
            date: d.date,
            goals: d
                .goals
                .into_iter()
                .map(|g| GoalWithProgressResponse {
                    goal: g.goal.into(),
                    today_progress: g.today_progress.map(Into::into),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DaysQuery {
    /// Look-back window in days, default 7.
    pub days: Option<i64>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DateQuery {
    /// Calendar day, default today.
    pub date: Option<NaiveDate>,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/", post(create_goal))
        .route("/me", get(list_my_goals))
        .route("/progress", post(log_progress))
        .route("/dashboard", get(dashboard))
        .route(
            "/:id",
            get(get_goal).put(update_goal).delete(delete_goal),
        )
        .route("/:id/progress", get(progress_history))
        .with_state(ctx)
}

#[utoipa::path(post, path = "/api/goals", tag = "Goals", request_body = GoalRequest, responses(
    (status = 200, body = GoalResponse),
    (status = 400, body = ErrorBody)
))]
pub async fn create_goal(
    State(ctx): State<AppContext>,
    auth: AuthUser,
    AppJson(req): AppJson<GoalRequest>,
) -> Result<Json<GoalResponse>, ApiError> {
    let repo = ctx.goal_repo();
    let uc = CreateGoal {
        repo: repo.as_ref(),
    };
    let goal = uc.execute(auth.id, req.into()).await?;
    Ok(Json(goal.into()))
}

#[utoipa::path(get, path = "/api/goals/me", tag = "Goals", responses((status = 200, body = [GoalResponse])))]
pub async fn list_my_goals(
    State(ctx): State<AppContext>,
    auth: AuthUser,
) -> Result<Json<Vec<GoalResponse>>, ApiError> {
    let repo = ctx.goal_repo();
    let uc = ListGoals {
        repo: repo.as_ref(),
    };
    let goals = uc.execute(auth.id).await?;
    Ok(Json(goals.into_iter().map(Into::into).collect()))
}

#[utoipa::path(get, path = "/api/goals/{id}", tag = "Goals",
    params(("id" = i64, Path, description = "Goal ID")),
    responses((status = 200, body = GoalResponse), (status = 404, body = ErrorBody)))]
pub async fn get_goal(
    State(ctx): State<AppContext>,
    auth: AuthUser,
    AppPath(id): AppPath<i64>,
) -> Result<Json<GoalResponse>, ApiError> {
    let repo = ctx.goal_repo();
    let uc = GetGoal {
        repo: repo.as_ref(),
    };
    Ok(Json(uc.execute(auth.id, id).await?.into()))
}

#[utoipa::path(put, path = "/api/goals/{id}", tag = "Goals", request_body = GoalRequest,
    params(("id" = i64, Path, description = "Goal ID")),
    responses((status = 200, body = GoalResponse), (status = 404, body = ErrorBody)))]
pub async fn update_goal(
    State(ctx): State<AppContext>,
    auth: AuthUser,
    AppPath(id): AppPath<i64>,
    AppJson(req): AppJson<GoalRequest>,
) -> Result<Json<GoalResponse>, ApiError> {
    let repo = ctx.goal_repo();
    let uc = UpdateGoal {
        repo: repo.as_ref(),
    };
    Ok(Json(uc.execute(auth.id, id, req.into()).await?.into()))
}

#[utoipa::path(delete, path = "/api/goals/{id}", tag = "Goals",
    params(("id" = i64, Path, description = "Goal ID")),
    responses((status = 200, body = StatusMessage), (status = 404, body = ErrorBody)))]
pub async fn delete_goal(
    State(ctx): State<AppContext>,
    auth: AuthUser,
    AppPath(id): AppPath<i64>,
) -> Result<Json<StatusMessage>, ApiError> {
    let repo = ctx.goal_repo();
    let uc = DeleteGoal {
        repo: repo.as_ref(),
    };
    uc.execute(auth.id, id).await?;
    Ok(Json(StatusMessage::new("Goal deleted successfully")))
}

#[utoipa::path(post, path = "/api/goals/progress", tag = "Goals", request_body = ProgressRequest, responses(
    (status = 200, body = GoalProgressResponse),
    (status = 404, body = ErrorBody)
))]
pub async fn log_progress(
    State(ctx): State<AppContext>,
    auth: AuthUser,
    AppJson(req): AppJson<ProgressRequest>,
) -> Result<Json<GoalProgressResponse>, ApiError> {
    let repo = ctx.goal_repo();
    let clock = ctx.clock();
    let uc = LogProgress {
        repo: repo.as_ref(),
        clock: clock.as_ref(),
    };
    let entry = uc
        .execute(
            auth.id,
            ProgressInput {
                goal_id: req.goal_id,
                today_progress: req.today_progress,
                total_progress: req.total_progress,
                notes: req.notes,
            },
        )
        .await?;
    Ok(Json(entry.into()))
}

#[utoipa::path(get, path = "/api/goals/{id}/progress", tag = "Goals",
    params(("id" = i64, Path, description = "Goal ID"), DaysQuery),
    responses((status = 200, body = [GoalProgressResponse]), (status = 404, body = ErrorBody)))]
pub async fn progress_history(
    State(ctx): State<AppContext>,
    auth: AuthUser,
    AppPath(id): AppPath<i64>,
    AppQuery(q): AppQuery<DaysQuery>,
) -> Result<Json<Vec<GoalProgressResponse>>, ApiError> {
    let repo = ctx.goal_repo();
    let clock = ctx.clock();
    let uc = ProgressHistory {
        repo: repo.as_ref(),
        clock: clock.as_ref(),
    };
    let rows = uc.execute(auth.id, id, q.days).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

#[utoipa::path(get, path = "/api/goals/dashboard", tag = "Goals",
    params(DateQuery),
    responses((status = 200, body = GoalDashboardResponse)))]
pub async fn dashboard(
    State(ctx): State<AppContext>,
    auth: AuthUser,
    AppQuery(q): AppQuery<DateQuery>,
) -> Result<Json<GoalDashboardResponse>, ApiError> {
    let repo = ctx.goal_repo();
    let clock = ctx.clock();
    let uc = GetGoalDashboard {
        repo: repo.as_ref(),
        clock: clock.as_ref(),
    };
    Ok(Json(uc.execute(auth.id, q.date).await?.into()))
}

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, patch},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::use_cases::todos::TodoInput;
use crate::application::use_cases::todos::create_todo::CreateTodo;
use crate::application::use_cases::todos::delete_todo::DeleteTodo;
use crate::application::use_cases::todos::get_todo::GetTodo;
use crate::application::use_cases::todos::list_todos::ListTodos;
use crate::application::use_cases::todos::todo_stats::GetTodoStats;
use crate::application::use_cases::todos::toggle_todo::ToggleTodo;
use crate::application::use_cases::todos::update_todo::UpdateTodo;
use crate::bootstrap::app_context::AppContext;
use crate::domain::todos::{
    Category, CategoryStats, DailyProductivity, Priority, PriorityStats, ProductivityStats, Todo,
    TodoStats,
};
use crate::presentation::http::auth::AuthUser;
use crate::presentation::http::error::{ApiError, ErrorBody};
use crate::presentation::http::extract::{AppJson, AppPath, AppQuery};
use crate::presentation::http::pagination::{PageQuery, PageResponse, TodoPage};

const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub category: Category,
    pub completed: bool,
    pub due_date: Option<NaiveDate>,
    pub completed_at: Option<DateTime<Utc>>,
    pub user_email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub estimated_minutes: Option<i32>,
    pub actual_minutes: Option<i32>,
    pub tags: Option<String>,
    pub is_overdue: bool,
}

impl TodoResponse {
    fn from_todo(t: Todo, today: NaiveDate) -> Self {
        Self {
            is_overdue: t.is_overdue(today),
            id: t.id,
            title: t.title,
            description: t.description,
            priority: t.priority,
            category: t.category,
            completed: t.completed,
            due_date: t.due_date,
            completed_at: t.completed_at,
            user_email: t.user_email,
            created_at: t.created_at,
            updated_at: t.updated_at,
            estimated_minutes: t.estimated_minutes,
            actual_minutes: t.actual_minutes,
            tags: t.tags,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub category: Option<Category>,
    pub due_date: Option<NaiveDate>,
    pub estimated_minutes: Option<i32>,
    pub tags: Option<String>,
}

impl From<TodoRequest> for TodoInput {
    fn from(r: TodoRequest) -> Self {
        Self {
            title: r.title,
            description: r.description,
            priority: r.priority,
            category: r.category,
            due_date: r.due_date,
            estimated_minutes: r.estimated_minutes,
            tags: r.tags,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToggleRequest {
    pub actual_minutes: Option<i32>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FilterQuery {
    pub completed: Option<bool>,
    pub page: Option<i64>,
    pub size: Option<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryStatsResponse {
    pub personal: i64,
    pub work: i64,
    pub health: i64,
    pub learning: i64,
    pub shopping: i64,
    pub other: i64,
}

impl From<CategoryStats> for CategoryStatsResponse {
    fn from(s: CategoryStats) -> Self {
        Self {
            personal: s.personal,
            work: s.work,
            health: s.health,
            learning: s.learning,
            shopping: s.shopping,
            other: s.other,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PriorityStatsResponse {
    pub low: i64,
    pub medium: i64,
    pub high: i64,
    pub urgent: i64,
}

impl From<PriorityStats> for PriorityStatsResponse {
    fn from(s: PriorityStats) -> Self {
        Self {
            low: s.low,
            medium: s.medium,
            high: s.high,
            urgent: s.urgent,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DailyProductivityResponse {
    pub date: NaiveDate,
    pub completed: i64,
    pub created: i64,
}

impl From<DailyProductivity> for DailyProductivityResponse {
    fn from(d: DailyProductivity) -> Self {
        Self {
            date: d.date,
            completed: d.completed,
            created: d.created,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductivityStatsResponse {
    pub completed_today: i64,
    pub completed_this_week: i64,
    pub completed_this_month: i64,
    pub avg_completion_time: i32,
    #[serde(rename = "last7Days")]
    pub last_7_days: Vec<DailyProductivityResponse>,
}

impl From<ProductivityStats> for ProductivityStatsResponse {
    fn from(p: ProductivityStats) -> Self {
        Self {
            completed_today: p.completed_today,
            completed_this_week: p.completed_this_week,
            completed_this_month: p.completed_this_month,
            avg_completion_time: p.avg_completion_time,
            last_7_days: p.last_7_days.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoStatsResponse {
    pub total_todos: i64,
    pub completed_todos: i64,
    pub pending_todos: i64,
    pub overdue_todos: i64,
    pub today_todos: i64,
    pub week_todos: i64,
    pub completion_rate: f64,
    pub category_stats: CategoryStatsResponse,
    pub priority_stats: PriorityStatsResponse,
    pub productivity_stats: ProductivityStatsResponse,
}

impl From<TodoStats> for TodoStatsResponse {
    fn from(s: TodoStats) -> Self {
        Self {
            total_todos: s.total_todos,
            completed_todos: s.completed_todos,
            pending_todos: s.pending_todos,
            overdue_todos: s.overdue_todos,
            today_todos: s.today_todos,
            week_todos: s.week_todos,
            completion_rate: s.completion_rate,
            category_stats: s.category_stats.into(),
            priority_stats: s.priority_stats.into(),
            productivity_stats: s.productivity_stats.into(),
        }
    }
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/", get(list_todos).post(create_todo))
        .route("/filter", get(filter_todos))
        .route("/stats", get(stats))
        .route(
            "/:id",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .route("/:id/toggle", patch(toggle_todo))
        .with_state(ctx)
}

async fn list_page(
    ctx: &AppContext,
    auth: &AuthUser,
    completed: Option<bool>,
    q: PageQuery,
) -> Result<PageResponse<TodoResponse>, ApiError> {
    let repo = ctx.todo_repo();
    let uc = ListTodos {
        repo: repo.as_ref(),
    };
    let page = uc
        .execute(&auth.email, completed, q.to_request(DEFAULT_PAGE_SIZE))
        .await?;
    let today = ctx.clock().today();
    Ok(PageResponse::from_page(page, |t| {
        TodoResponse::from_todo(t, today)
    }))
}

#[utoipa::path(get, path = "/api/todos", tag = "Todos", params(PageQuery),
    responses((status = 200, body = TodoPage)))]
pub async fn list_todos(
    State(ctx): State<AppContext>,
    auth: AuthUser,
    AppQuery(q): AppQuery<PageQuery>,
) -> Result<Json<PageResponse<TodoResponse>>, ApiError> {
    Ok(Json(list_page(&ctx, &auth, None, q).await?))
}

#[utoipa::path(get, path = "/api/todos/filter", tag = "Todos", params(FilterQuery),
    responses((status = 200, body = TodoPage)))]
pub async fn filter_todos(
    State(ctx): State<AppContext>,
    auth: AuthUser,
    AppQuery(q): AppQuery<FilterQuery>,
) -> Result<Json<PageResponse<TodoResponse>>, ApiError> {
    let page = PageQuery {
        page: q.page,
        size: q.size,
    };
    Ok(Json(list_page(&ctx, &auth, q.completed, page).await?))
}

#[utoipa::path(get, path = "/api/todos/stats", tag = "Todos",
    responses((status = 200, body = TodoStatsResponse)))]
pub async fn stats(
    State(ctx): State<AppContext>,
    auth: AuthUser,
) -> Result<Json<TodoStatsResponse>, ApiError> {
    let repo = ctx.todo_repo();
    let clock = ctx.clock();
    let uc = GetTodoStats {
        repo: repo.as_ref(),
        clock: clock.as_ref(),
    };
    Ok(Json(uc.execute(&auth.email).await?.into()))
}

#[utoipa::path(post, path = "/api/todos", tag = "Todos", request_body = TodoRequest,
    responses((status = 201, body = TodoResponse), (status = 400, body = ErrorBody)))]
pub async fn create_todo(
    State(ctx): State<AppContext>,
    auth: AuthUser,
    AppJson(req): AppJson<TodoRequest>,
) -> Result<(StatusCode, Json<TodoResponse>), ApiError> {
    let repo = ctx.todo_repo();
    let uc = CreateTodo {
        repo: repo.as_ref(),
    };
    let todo = uc.execute(&auth.email, req.into()).await?;
    let today = ctx.clock().today();
    Ok((
        StatusCode::CREATED,
        Json(TodoResponse::from_todo(todo, today)),
    ))
}

#[utoipa::path(get, path = "/api/todos/{id}", tag = "Todos",
    params(("id" = i64, Path, description = "Todo ID")),
    responses((status = 200, body = TodoResponse), (status = 403, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn get_todo(
    State(ctx): State<AppContext>,
    auth: AuthUser,
    AppPath(id): AppPath<i64>,
) -> Result<Json<TodoResponse>, ApiError> {
    let repo = ctx.todo_repo();
    let uc = GetTodo {
        repo: repo.as_ref(),
    };
    let todo = uc.execute(&auth.email, id).await?;
    Ok(Json(TodoResponse::from_todo(todo, ctx.clock().today())))
}

#[utoipa::path(put, path = "/api/todos/{id}", tag = "Todos", request_body = TodoRequest,
    params(("id" = i64, Path, description = "Todo ID")),
    responses((status = 200, body = TodoResponse), (status = 400, body = ErrorBody), (status = 403, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn update_todo(
    State(ctx): State<AppContext>,
    auth: AuthUser,
    AppPath(id): AppPath<i64>,
    AppJson(req): AppJson<TodoRequest>,
) -> Result<Json<TodoResponse>, ApiError> {
    let repo = ctx.todo_repo();
    let uc = UpdateTodo {
        repo: repo.as_ref(),
    };
    let todo = uc.execute(&auth.email, id, req.into()).await?;
    Ok(Json(TodoResponse::from_todo(todo, ctx.clock().today())))
}

#[utoipa::path(delete, path = "/api/todos/{id}", tag = "Todos",
    params(("id" = i64, Path, description = "Todo ID")),
    responses((status = 204), (status = 403, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn delete_todo(
    State(ctx): State<AppContext>,
    auth: AuthUser,
    AppPath(id): AppPath<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = ctx.todo_repo();
    let uc = DeleteTodo {
        repo: repo.as_ref(),
    };
    uc.execute(&auth.email, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(patch, path = "/api/todos/{id}/toggle", tag = "Todos", request_body = ToggleRequest,
    params(("id" = i64, Path, description = "Todo ID")),
    responses((status = 200, body = TodoResponse), (status = 403, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn toggle_todo(
    State(ctx): State<AppContext>,
    auth: AuthUser,
    AppPath(id): AppPath<i64>,
    body: Option<Json<ToggleRequest>>,
) -> Result<Json<TodoResponse>, ApiError> {
    let actual_minutes = body.and_then(|Json(b)| b.actual_minutes);
    let repo = ctx.todo_repo();
    let clock = ctx.clock();
    let uc = ToggleTodo {
        repo: repo.as_ref(),
        clock: clock.as_ref(),
    };
    let todo = uc.execute(&auth.email, id, actual_minutes).await?;
    Ok(Json(TodoResponse::from_todo(todo, clock.today())))
}

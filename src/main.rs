use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::MatchedPath;
use dotenvy::dotenv;
use http::HeaderValue;
use tokio::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use selfhelp::application::ports::id_token_verifier::IdTokenVerifier;
use selfhelp::bootstrap::app_context::{AppContext, AppServices};
use selfhelp::bootstrap::config::Config;
use selfhelp::infrastructure::db::repositories::{
    diary_repository_sqlx::SqlxDiaryRepository, goal_repository_sqlx::SqlxGoalRepository,
    habit_repository_sqlx::SqlxHabitRepository, message_repository_sqlx::SqlxMessageRepository,
    todo_repository_sqlx::SqlxTodoRepository, user_repository_sqlx::SqlxUserRepository,
};
use selfhelp::infrastructure::identity::{firebase, google};
use selfhelp::infrastructure::system_clock::SystemClock;
use selfhelp::presentation::http as api;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
        paths(
            api::auth::google,
            api::auth::firebase,
            api::auth::me,
            api::health::health,
            api::goals::create_goal,
            api::goals::list_my_goals,
            api::goals::get_goal,
            api::goals::update_goal,
            api::goals::delete_goal,
            api::goals::log_progress,
            api::goals::progress_history,
            api::goals::dashboard,
            api::habits::create_habit,
            api::habits::list_my_habits,
            api::habits::get_habit,
            api::habits::update_habit,
            api::habits::delete_habit,
            api::habits::log_habit,
            api::habits::habit_history,
            api::habits::today,
            api::diaries::save_today,
            api::diaries::list_mine,
            api::diaries::public_feed,
            api::diaries::update_entry,
            api::diaries::delete_entry,
            api::messages::list_messages,
            api::messages::get_message,
            api::messages::add_comment,
            api::messages::create_message,
            api::messages::update_message,
            api::messages::delete_message,
            api::messages::delete_comment,
            api::todos::list_todos,
            api::todos::filter_todos,
            api::todos::stats,
            api::todos::create_todo,
            api::todos::get_todo,
            api::todos::update_todo,
            api::todos::delete_todo,
            api::todos::toggle_todo,
        ),
        components(schemas(
            api::StatusMessage,
            api::error::ErrorBody,
            api::error::FieldErrorBody,
            api::auth::GoogleAuthRequest,
            api::auth::FirebaseAuthRequest,
            api::auth::SignedInUser,
            api::auth::AuthResponse,
            api::auth::UserProfile,
            api::health::HealthResp,
            api::goals::GoalResponse,
            api::goals::GoalRequest,
            api::goals::ProgressRequest,
            api::goals::GoalProgressResponse,
            api::goals::GoalWithProgressResponse,
            api::goals::GoalDashboardResponse,
            api::habits::HabitResponse,
            api::habits::HabitRequest,
            api::habits::HabitLogRequest,
            api::habits::HabitLogResponse,
            api::habits::HabitWithLogResponse,
            api::habits::HabitDayResponse,
            api::diaries::DiaryResponse,
            api::diaries::PublicDiaryResponse,
            api::diaries::DiaryRequest,
            api::messages::MessageResponse,
            api::messages::CommentResponse,
            api::messages::MessageRequest,
            api::messages::CommentRequest,
            api::todos::TodoResponse,
            api::todos::TodoRequest,
            api::todos::ToggleRequest,
            api::todos::TodoStatsResponse,
            api::todos::CategoryStatsResponse,
            api::todos::PriorityStatsResponse,
            api::todos::ProductivityStatsResponse,
            api::todos::DailyProductivityResponse,
            api::pagination::DiaryPage,
            api::pagination::PublicDiaryPage,
            api::pagination::MessagePage,
            api::pagination::TodoPage,
            selfhelp::domain::users::Role,
            selfhelp::domain::diary::Mood,
            selfhelp::domain::diary::Visibility,
            selfhelp::domain::todos::Priority,
            selfhelp::domain::todos::Category,
        )),
        tags(
            (name = "Auth", description = "Sign-in and identity"),
            (name = "Health", description = "System health checks"),
            (name = "Goals", description = "Goals and daily progress"),
            (name = "Habits", description = "Habits and daily logs"),
            (name = "Diary", description = "Daily journal entries"),
            (name = "Messages", description = "Announcements and comments"),
            (name = "Todos", description = "Todo list and productivity stats")
        )
    )]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "selfhelp=debug,tower_http=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(
        port = cfg.api_port,
        production = cfg.is_production,
        google = cfg.google_client_id.is_some(),
        firebase = cfg.firebase_project_id.is_some(),
        "Starting Self Help backend"
    );

    // Database
    let pool = selfhelp::infrastructure::db::connect_pool(&cfg.database_url).await?;
    selfhelp::infrastructure::db::migrate(&pool).await?;

    let jwks_ttl = Duration::from_secs(cfg.jwks_cache_secs);
    let google_verifier: Option<Arc<dyn IdTokenVerifier>> = match cfg.google_client_id.as_deref() {
        Some(client_id) => {
            Some(Arc::new(google::google_verifier(client_id, jwks_ttl)?) as Arc<dyn IdTokenVerifier>)
        }
        None => None,
    };
    let firebase_verifier: Option<Arc<dyn IdTokenVerifier>> =
        match cfg.firebase_project_id.as_deref() {
            Some(project_id) => {
                let verifier = firebase::firebase_verifier(project_id, jwks_ttl)?;
                Some(Arc::new(verifier) as Arc<dyn IdTokenVerifier>)
            }
            None => None,
        };
    if google_verifier.is_none() {
        tracing::warn!("GOOGLE_CLIENT_ID not set; /auth/google is disabled");
    }
    if firebase_verifier.is_none() {
        tracing::warn!("FIREBASE_PROJECT_ID not set; /auth/firebase is disabled");
    }

    let services = AppServices {
        user_repo: Arc::new(SqlxUserRepository::new(pool.clone())),
        goal_repo: Arc::new(SqlxGoalRepository::new(pool.clone())),
        habit_repo: Arc::new(SqlxHabitRepository::new(pool.clone())),
        diary_repo: Arc::new(SqlxDiaryRepository::new(pool.clone())),
        message_repo: Arc::new(SqlxMessageRepository::new(pool.clone())),
        todo_repo: Arc::new(SqlxTodoRepository::new(pool.clone())),
        clock: Arc::new(SystemClock),
        google_verifier,
        firebase_verifier,
    };
    let ctx = AppContext::new(cfg.clone(), services);

    let app = Router::new()
        .nest(
            "/auth",
            api::auth::routes(ctx.clone()).merge(api::health::routes(pool.clone())),
        )
        .nest("/api/goals", api::goals::routes(ctx.clone()))
        .nest("/api/habits", api::habits::routes(ctx.clone()))
        .nest("/api/diaries", api::diaries::routes(ctx.clone()))
        .nest("/api/messages", api::messages::routes(ctx.clone()))
        .nest("/api/todos", api::todos::routes(ctx.clone()))
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(build_cors(&cfg))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        );

    let api_addr = SocketAddr::from(([0, 0, 0, 0], cfg.api_port));
    info!(%api_addr, "HTTP API listening");
    let listener = tokio::net::TcpListener::bind(api_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("HTTP API stopped");
    Ok(())
}

fn build_cors(cfg: &Config) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([
            http::Method::GET,
            http::Method::POST,
            http::Method::PUT,
            http::Method::DELETE,
            http::Method::PATCH,
            http::Method::OPTIONS,
        ])
        .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION])
        .allow_credentials(true);

    match cfg.frontend_url.as_deref().map(HeaderValue::from_str) {
        Some(Ok(origin)) => base.allow_origin(origin),
        Some(Err(_)) | None if cfg.is_production => {
            // Production config guarantees FRONTEND_URL; an unparsable one allows nothing.
            base.allow_origin(AllowOrigin::exact(HeaderValue::from_static("http://invalid")))
        }
        _ => base.allow_origin(AllowOrigin::mirror_request()),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?e, "shutdown_signal_failed");
    }
}

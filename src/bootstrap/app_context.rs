use std::sync::Arc;

use crate::application::ports::clock::Clock;
use crate::application::ports::diary_repository::DiaryRepository;
use crate::application::ports::goal_repository::GoalRepository;
use crate::application::ports::habit_repository::HabitRepository;
use crate::application::ports::id_token_verifier::IdTokenVerifier;
use crate::application::ports::message_repository::MessageRepository;
use crate::application::ports::todo_repository::TodoRepository;
use crate::application::ports::user_repository::UserRepository;
use crate::bootstrap::config::Config;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

/// Adapters behind every port; sign-in verifiers are absent when their provider is not configured.
#[derive(Clone)]
pub struct AppServices {
    pub user_repo: Arc<dyn UserRepository>,
    pub goal_repo: Arc<dyn GoalRepository>,
    pub habit_repo: Arc<dyn HabitRepository>,
    pub diary_repo: Arc<dyn DiaryRepository>,
    pub message_repo: Arc<dyn MessageRepository>,
    pub todo_repo: Arc<dyn TodoRepository>,
    pub clock: Arc<dyn Clock>,
    pub google_verifier: Option<Arc<dyn IdTokenVerifier>>,
    pub firebase_verifier: Option<Arc<dyn IdTokenVerifier>>,
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn user_repo(&self) -> Arc<dyn UserRepository> {
        self.services.user_repo.clone()
    }

    pub fn goal_repo(&self) -> Arc<dyn GoalRepository> {
        self.services.goal_repo.clone()
    }

    pub fn habit_repo(&self) -> Arc<dyn HabitRepository> {
        self.services.habit_repo.clone()
    }

    pub fn diary_repo(&self) -> Arc<dyn DiaryRepository> {
        self.services.diary_repo.clone()
    }

    pub fn message_repo(&self) -> Arc<dyn MessageRepository> {
        self.services.message_repo.clone()
    }

    pub fn todo_repo(&self) -> Arc<dyn TodoRepository> {
        self.services.todo_repo.clone()
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        self.services.clock.clone()
    }

    pub fn google_verifier(&self) -> Option<Arc<dyn IdTokenVerifier>> {
        self.services.google_verifier.clone()
    }

    pub fn firebase_verifier(&self) -> Option<Arc<dyn IdTokenVerifier>> {
        self.services.firebase_verifier.clone()
    }
}

pub mod clock;
pub mod diary_repository;
pub mod goal_repository;
pub mod habit_repository;
pub mod id_token_verifier;
pub mod message_repository;
pub mod todo_repository;
pub mod user_repository;

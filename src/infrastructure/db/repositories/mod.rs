pub mod diary_repository_sqlx;
pub mod goal_repository_sqlx;
pub mod habit_repository_sqlx;
pub mod message_repository_sqlx;
pub mod todo_repository_sqlx;
pub mod user_repository_sqlx;

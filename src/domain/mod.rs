pub mod diary;
pub mod goals;
pub mod habits;
pub mod messages;
pub mod todos;
pub mod users;

use serde::Serialize;
use utoipa::ToSchema;

pub mod auth;
pub mod diaries;
pub mod error;
pub mod extract;
pub mod goals;
pub mod habits;
pub mod health;
pub mod messages;
pub mod pagination;
pub mod todos;

/// Plain acknowledgement body, e.g. `{"message":"Goal deleted successfully"}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusMessage {
    pub message: String,
}

impl StatusMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

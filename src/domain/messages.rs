use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Message {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: i64,
    pub message_id: i64,
    pub content: String,
    pub author_email: String,
    pub created_at: DateTime<Utc>,
}

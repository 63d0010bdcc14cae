use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mood {
    Happy,
    Grateful,
    Excited,
    Calm,
    Neutral,
    Tired,
    Anxious,
    Sad,
    Angry,
}

impl Mood {
    pub const ALL: [Mood; 9] = [
        Mood::Happy,
        Mood::Grateful,
        Mood::Excited,
        Mood::Calm,
        Mood::Neutral,
        Mood::Tired,
        Mood::Anxious,
        Mood::Sad,
        Mood::Angry,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "HAPPY",
            Mood::Grateful => "GRATEFUL",
            Mood::Excited => "EXCITED",
            Mood::Calm => "CALM",
            Mood::Neutral => "NEUTRAL",
            Mood::Tired => "TIRED",
            Mood::Anxious => "ANXIOUS",
            Mood::Sad => "SAD",
            Mood::Angry => "ANGRY",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Visibility {
    Public,
    #[default]
    Private,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "PUBLIC",
            Visibility::Private => "PRIVATE",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "PUBLIC" => Some(Visibility::Public),
            "PRIVATE" => Some(Visibility::Private),
            _ => None,
        }
    }
}

/// A user's journal entry; at most one per author and day.
#[derive(Debug, Clone)]
pub struct Diary {
    pub id: i64,
    pub author_id: i64,
    pub title: Option<String>,
    pub good_things: Option<String>,
    pub bad_things: Option<String>,
    pub mood: Option<Mood>,
    pub visibility: Visibility,
    pub entry_date: NaiveDate,
}

/// Projection served on the public feed; never exposes `bad_things`.
#[derive(Debug, Clone)]
pub struct PublicDiary {
    pub id: i64,
    pub title: Option<String>,
    pub good_things: Option<String>,
    pub mood: Option<Mood>,
    pub author_name: String,
    pub entry_date: NaiveDate,
}

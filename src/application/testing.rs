//! In-memory port implementations for use case tests.
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::application::pagination::PageRequest;
use crate::application::ports::clock::Clock;
use crate::application::ports::diary_repository::{DiaryFields, DiaryRepository};
use crate::application::ports::goal_repository::{
    GoalChanges, GoalRepository, NewGoal, ProgressEntry,
};
use crate::application::ports::habit_repository::{HabitChanges, HabitLogEntry, HabitRepository};
use crate::application::ports::id_token_verifier::{IdTokenVerifier, VerifiedIdentity};
use crate::application::ports::message_repository::MessageRepository;
use crate::application::ports::todo_repository::{Completion, TodoDraft, TodoRepository};
use crate::application::ports::user_repository::UserRepository;
use crate::domain::diary::{Diary, PublicDiary, Visibility};
use crate::domain::goals::{Goal, GoalProgress};
use crate::domain::habits::{Habit, HabitLog};
use crate::domain::messages::{Comment, Message};
use crate::domain::todos::Todo;
use crate::domain::users::{Role, User};

pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn at(y: i32, m: u32, d: u32) -> Self {
        Self(Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn page_of<T: Clone>(rows: Vec<T>, page: PageRequest) -> (Vec<T>, i64) {
    let total = rows.len() as i64;
    let content = rows
        .into_iter()
        .skip(page.offset() as usize)
        .take(page.limit() as usize)
        .collect();
    (content, total)
}

fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
}

#[derive(Default)]
pub struct MemUsers {
    pub rows: Mutex<Vec<User>>,
}

impl MemUsers {
    pub fn with(users: Vec<User>) -> Self {
        Self {
            rows: Mutex::new(users),
        }
    }
}

pub fn user(id: i64, email: &str, role: Role) -> User {
    User {
        id,
        email: email.to_string(),
        name: format!("user {id}"),
        image_url: None,
        role,
        created_at: epoch(),
    }
}

#[async_trait]
impl UserRepository for MemUsers {
    async fn create_user(
        &self,
        email: &str,
        name: &str,
        image_url: Option<&str>,
        role: Role,
    ) -> anyhow::Result<User> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(existing) = rows.iter().find(|u| u.email == email) {
            return Ok(existing.clone());
        }
        let u = User {
            id: rows.len() as i64 + 1,
            email: email.to_string(),
            name: name.to_string(),
            image_url: image_url.map(str::to_string),
            role,
            created_at: epoch(),
        };
        rows.push(u.clone());
        Ok(u)
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        Ok(self.rows.lock().unwrap().iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<User>> {
        Ok(self.rows.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn update_role(&self, id: i64, role: Role) -> anyhow::Result<bool> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|u| u.id == id) {
            Some(u) => {
                u.role = role;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[derive(Default)]
pub struct MemGoals {
    pub goals: Mutex<Vec<Goal>>,
    pub progress: Mutex<Vec<GoalProgress>>,
}

#[async_trait]
impl GoalRepository for MemGoals {
    async fn create(&self, user_id: i64, goal: &NewGoal) -> anyhow::Result<Goal> {
        let mut goals = self.goals.lock().unwrap();
        let g = Goal {
            id: goals.len() as i64 + 1,
            user_id,
            title: goal.title.clone(),
            start_date: goal.start_date,
            target_date: goal.target_date,
            priority: goal.priority.clone(),
            status: goal.status.clone(),
            motivation_reason: goal.motivation_reason.clone(),
            created_at: epoch(),
        };
        goals.push(g.clone());
        Ok(g)
    }

    async fn get(&self, id: i64) -> anyhow::Result<Option<Goal>> {
        Ok(self.goals.lock().unwrap().iter().find(|g| g.id == id).cloned())
    }

    async fn list_for_user(&self, user_id: i64) -> anyhow::Result<Vec<Goal>> {
        Ok(self
            .goals
            .lock()
            .unwrap()
            .iter()
            .filter(|g| g.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn list_for_user_with_status(
        &self,
        user_id: i64,
        status: &str,
    ) -> anyhow::Result<Vec<Goal>> {
        Ok(self
            .goals
            .lock()
            .unwrap()
            .iter()
            .filter(|g| g.user_id == user_id && g.status == status)
            .cloned()
            .collect())
    }

    async fn update(&self, id: i64, changes: &GoalChanges) -> anyhow::Result<Option<Goal>> {
        let mut goals = self.goals.lock().unwrap();
        let Some(g) = goals.iter_mut().find(|g| g.id == id) else {
            return Ok(None);
        };
        if let Some(v) = &changes.title {
            g.title = v.clone();
        }
        if let Some(v) = changes.target_date {
            g.target_date = Some(v);
        }
        if let Some(v) = &changes.priority {
            g.priority = Some(v.clone());
        }
        if let Some(v) = &changes.status {
            g.status = v.clone();
        }
        if let Some(v) = &changes.motivation_reason {
            g.motivation_reason = Some(v.clone());
        }
        Ok(Some(g.clone()))
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let mut goals = self.goals.lock().unwrap();
        let before = goals.len();
        goals.retain(|g| g.id != id);
        self.progress.lock().unwrap().retain(|p| p.goal_id != id);
        Ok(goals.len() != before)
    }

    async fn upsert_progress(
        &self,
        goal_id: i64,
        date: NaiveDate,
        entry: &ProgressEntry,
    ) -> anyhow::Result<GoalProgress> {
        let mut rows = self.progress.lock().unwrap();
        if let Some(p) = rows
            .iter_mut()
            .find(|p| p.goal_id == goal_id && p.date == date)
        {
            p.today_progress = entry.today_progress;
            p.total_progress = entry.total_progress;
            p.notes = entry.notes.clone();
            return Ok(p.clone());
        }
        let p = GoalProgress {
            id: rows.len() as i64 + 1,
            goal_id,
            date,
            today_progress: entry.today_progress,
            total_progress: entry.total_progress,
            notes: entry.notes.clone(),
            created_at: epoch(),
        };
        rows.push(p.clone());
        Ok(p)
    }

    async fn progress_on(
        &self,
        goal_id: i64,
        date: NaiveDate,
    ) -> anyhow::Result<Option<GoalProgress>> {
        Ok(self
            .progress
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.goal_id == goal_id && p.date == date)
            .cloned())
    }

    async fn progress_between(
        &self,
        goal_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> anyhow::Result<Vec<GoalProgress>> {
        let mut rows: Vec<_> = self
            .progress
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.goal_id == goal_id && p.date >= start && p.date <= end)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(rows)
    }
}

#[derive(Default)]
pub struct MemHabits {
    pub habits: Mutex<Vec<Habit>>,
    pub logs: Mutex<Vec<HabitLog>>,
}

#[async_trait]
impl HabitRepository for MemHabits {
    async fn create(
        &self,
        user_id: i64,
        title: &str,
        target_value: Option<&str>,
    ) -> anyhow::Result<Habit> {
        let mut habits = self.habits.lock().unwrap();
        let h = Habit {
            id: habits.len() as i64 + 1,
            user_id,
            title: title.to_string(),
            target_value: target_value.map(str::to_string),
            best_streak: 0,
            created_at: epoch(),
        };
        habits.push(h.clone());
        Ok(h)
    }

    async fn get(&self, id: i64) -> anyhow::Result<Option<Habit>> {
        Ok(self.habits.lock().unwrap().iter().find(|h| h.id == id).cloned())
    }

    async fn list_for_user(&self, user_id: i64) -> anyhow::Result<Vec<Habit>> {
        Ok(self
            .habits
            .lock()
            .unwrap()
            .iter()
            .filter(|h| h.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn update(&self, id: i64, changes: &HabitChanges) -> anyhow::Result<Option<Habit>> {
        let mut habits = self.habits.lock().unwrap();
        let Some(h) = habits.iter_mut().find(|h| h.id == id) else {
            return Ok(None);
        };
        if let Some(v) = &changes.title {
            h.title = v.clone();
        }
        if let Some(v) = &changes.target_value {
            h.target_value = Some(v.clone());
        }
        Ok(Some(h.clone()))
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let mut habits = self.habits.lock().unwrap();
        let before = habits.len();
        habits.retain(|h| h.id != id);
        self.logs.lock().unwrap().retain(|l| l.habit_id != id);
        Ok(habits.len() != before)
    }

    async fn raise_best_streak(&self, id: i64, streak: i32) -> anyhow::Result<()> {
        if let Some(h) = self.habits.lock().unwrap().iter_mut().find(|h| h.id == id) {
            h.best_streak = h.best_streak.max(streak);
        }
        Ok(())
    }

    async fn upsert_log(
        &self,
        habit_id: i64,
        date: NaiveDate,
        entry: &HabitLogEntry,
    ) -> anyhow::Result<HabitLog> {
        let mut logs = self.logs.lock().unwrap();
        if let Some(l) = logs
            .iter_mut()
            .find(|l| l.habit_id == habit_id && l.date == date)
        {
            l.status = entry.status.clone();
            l.current_streak = entry.current_streak;
            l.mood_after = entry.mood_after.clone();
            l.notes = entry.notes.clone();
            return Ok(l.clone());
        }
        let l = HabitLog {
            id: logs.len() as i64 + 1,
            habit_id,
            date,
            status: entry.status.clone(),
            current_streak: entry.current_streak,
            mood_after: entry.mood_after.clone(),
            notes: entry.notes.clone(),
            created_at: epoch(),
        };
        logs.push(l.clone());
        Ok(l)
    }

    async fn log_on(&self, habit_id: i64, date: NaiveDate) -> anyhow::Result<Option<HabitLog>> {
        Ok(self
            .logs
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.habit_id == habit_id && l.date == date)
            .cloned())
    }

    async fn logs_between(
        &self,
        habit_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> anyhow::Result<Vec<HabitLog>> {
        let mut rows: Vec<_> = self
            .logs
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.habit_id == habit_id && l.date >= start && l.date <= end)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(rows)
    }
}

#[derive(Default)]
pub struct MemDiaries {
    pub rows: Mutex<Vec<Diary>>,
    /// author id -> display name, for the public feed projection.
    pub authors: Mutex<HashMap<i64, String>>,
}

fn apply_diary_fields(d: &mut Diary, f: &DiaryFields) {
    if let Some(v) = &f.title {
        d.title = Some(v.clone());
    }
    if let Some(v) = &f.good_things {
        d.good_things = Some(v.clone());
    }
    if let Some(v) = &f.bad_things {
        d.bad_things = Some(v.clone());
    }
    if let Some(v) = f.mood {
        d.mood = Some(v);
    }
    if let Some(v) = f.visibility {
        d.visibility = v;
    }
}

#[async_trait]
impl DiaryRepository for MemDiaries {
    async fn upsert_for_day(
        &self,
        author_id: i64,
        entry_date: NaiveDate,
        fields: &DiaryFields,
    ) -> anyhow::Result<Diary> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(d) = rows
            .iter_mut()
            .find(|d| d.author_id == author_id && d.entry_date == entry_date)
        {
            apply_diary_fields(d, fields);
            return Ok(d.clone());
        }
        let mut d = Diary {
            id: rows.len() as i64 + 1,
            author_id,
            title: None,
            good_things: None,
            bad_things: None,
            mood: None,
            visibility: Visibility::default(),
            entry_date,
        };
        apply_diary_fields(&mut d, fields);
        rows.push(d.clone());
        Ok(d)
    }

    async fn get(&self, id: i64) -> anyhow::Result<Option<Diary>> {
        Ok(self.rows.lock().unwrap().iter().find(|d| d.id == id).cloned())
    }

    async fn update(&self, id: i64, fields: &DiaryFields) -> anyhow::Result<Option<Diary>> {
        let mut rows = self.rows.lock().unwrap();
        let Some(d) = rows.iter_mut().find(|d| d.id == id) else {
            return Ok(None);
        };
        apply_diary_fields(d, fields);
        Ok(Some(d.clone()))
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|d| d.id != id);
        Ok(rows.len() != before)
    }

    async fn list_for_author(
        &self,
        author_id: i64,
        page: PageRequest,
    ) -> anyhow::Result<(Vec<Diary>, i64)> {
        let mut rows: Vec<_> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.author_id == author_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.entry_date.cmp(&a.entry_date).then(b.id.cmp(&a.id)));
        Ok(page_of(rows, page))
    }

    async fn list_public(&self, page: PageRequest) -> anyhow::Result<(Vec<PublicDiary>, i64)> {
        let authors = self.authors.lock().unwrap();
        let mut rows: Vec<_> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.visibility == Visibility::Public)
            .map(|d| PublicDiary {
                id: d.id,
                title: d.title.clone(),
                good_things: d.good_things.clone(),
                mood: d.mood,
                author_name: authors.get(&d.author_id).cloned().unwrap_or_default(),
                entry_date: d.entry_date,
            })
            .collect();
        rows.sort_by(|a, b| b.entry_date.cmp(&a.entry_date).then(b.id.cmp(&a.id)));
        Ok(page_of(rows, page))
    }
}

#[derive(Default)]
pub struct MemMessages {
    pub messages: Mutex<Vec<Message>>,
    pub comments: Mutex<Vec<Comment>>,
}

impl MemMessages {
    fn attach(&self, mut m: Message) -> Message {
        m.comments = self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.message_id == m.id)
            .cloned()
            .collect();
        m
    }
}

#[async_trait]
impl MessageRepository for MemMessages {
    async fn list(&self, page: PageRequest) -> anyhow::Result<(Vec<Message>, i64)> {
        let mut rows = self.messages.lock().unwrap().clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        let (rows, total) = page_of(rows, page);
        Ok((rows.into_iter().map(|m| self.attach(m)).collect(), total))
    }

    async fn get(&self, id: i64) -> anyhow::Result<Option<Message>> {
        let found = self
            .messages
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.id == id)
            .cloned();
        Ok(found.map(|m| self.attach(m)))
    }

    async fn create(
        &self,
        title: &str,
        content: &str,
        author_email: &str,
    ) -> anyhow::Result<Message> {
        let mut rows = self.messages.lock().unwrap();
        let m = Message {
            id: rows.len() as i64 + 1,
            title: title.to_string(),
            content: content.to_string(),
            author_email: author_email.to_string(),
            created_at: epoch(),
            updated_at: epoch(),
            comments: vec![],
        };
        rows.push(m.clone());
        Ok(m)
    }

    async fn update(&self, id: i64, title: &str, content: &str) -> anyhow::Result<Option<Message>> {
        let updated = {
            let mut rows = self.messages.lock().unwrap();
            rows.iter_mut().find(|m| m.id == id).map(|m| {
                m.title = title.to_string();
                m.content = content.to_string();
                m.clone()
            })
        };
        Ok(updated.map(|m| self.attach(m)))
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let mut rows = self.messages.lock().unwrap();
        let before = rows.len();
        rows.retain(|m| m.id != id);
        self.comments.lock().unwrap().retain(|c| c.message_id != id);
        Ok(rows.len() != before)
    }

    async fn add_comment(
        &self,
        message_id: i64,
        content: &str,
        author_email: &str,
    ) -> anyhow::Result<Comment> {
        let mut rows = self.comments.lock().unwrap();
        let c = Comment {
            id: rows.len() as i64 + 1,
            message_id,
            content: content.to_string(),
            author_email: author_email.to_string(),
            created_at: epoch(),
        };
        rows.push(c.clone());
        Ok(c)
    }

    async fn get_comment(&self, id: i64) -> anyhow::Result<Option<Comment>> {
        Ok(self.comments.lock().unwrap().iter().find(|c| c.id == id).cloned())
    }

    async fn delete_comment(&self, id: i64) -> anyhow::Result<bool> {
        let mut rows = self.comments.lock().unwrap();
        let before = rows.len();
        rows.retain(|c| c.id != id);
        Ok(rows.len() != before)
    }
}

#[derive(Default)]
pub struct MemTodos {
    pub rows: Mutex<Vec<Todo>>,
}

#[async_trait]
impl TodoRepository for MemTodos {
    async fn create(&self, user_email: &str, draft: &TodoDraft) -> anyhow::Result<Todo> {
        let mut rows = self.rows.lock().unwrap();
        let t = Todo {
            id: rows.len() as i64 + 1,
            title: draft.title.clone(),
            description: draft.description.clone(),
            priority: draft.priority,
            category: draft.category,
            completed: false,
            due_date: draft.due_date,
            completed_at: None,
            user_email: user_email.to_string(),
            created_at: epoch(),
            updated_at: epoch(),
            estimated_minutes: draft.estimated_minutes,
            actual_minutes: None,
            tags: draft.tags.clone(),
        };
        rows.push(t.clone());
        Ok(t)
    }

    async fn get(&self, id: i64) -> anyhow::Result<Option<Todo>> {
        Ok(self.rows.lock().unwrap().iter().find(|t| t.id == id).cloned())
    }

    async fn list_for_user(
        &self,
        user_email: &str,
        completed: Option<bool>,
        page: PageRequest,
    ) -> anyhow::Result<(Vec<Todo>, i64)> {
        let mut rows: Vec<_> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.user_email == user_email)
            .filter(|t| completed.map(|c| t.completed == c).unwrap_or(true))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(page_of(rows, page))
    }

    async fn list_all_for_user(&self, user_email: &str) -> anyhow::Result<Vec<Todo>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.user_email == user_email)
            .cloned()
            .collect())
    }

    async fn replace(&self, id: i64, draft: &TodoDraft) -> anyhow::Result<Option<Todo>> {
        let mut rows = self.rows.lock().unwrap();
        let Some(t) = rows.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        t.title = draft.title.clone();
        t.description = draft.description.clone();
        t.priority = draft.priority;
        t.category = draft.category;
        t.due_date = draft.due_date;
        t.estimated_minutes = draft.estimated_minutes;
        t.tags = draft.tags.clone();
        Ok(Some(t.clone()))
    }

    async fn set_completion(
        &self,
        id: i64,
        completion: &Completion,
    ) -> anyhow::Result<Option<Todo>> {
        let mut rows = self.rows.lock().unwrap();
        let Some(t) = rows.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        t.completed = completion.completed;
        t.completed_at = completion.completed_at;
        t.actual_minutes = completion.actual_minutes;
        Ok(Some(t.clone()))
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|t| t.id != id);
        Ok(rows.len() != before)
    }
}

/// Accepts exactly one token and asserts the configured identity for it.
pub struct FakeVerifier {
    pub token: String,
    pub identity: VerifiedIdentity,
}

impl FakeVerifier {
    pub fn new(token: &str, email: &str) -> Self {
        Self {
            token: token.to_string(),
            identity: VerifiedIdentity {
                subject: "sub-1".into(),
                email: email.to_string(),
                name: Some("Token Name".into()),
                picture: None,
            },
        }
    }
}

#[async_trait]
impl IdTokenVerifier for FakeVerifier {
    async fn verify(&self, id_token: &str) -> anyhow::Result<Option<VerifiedIdentity>> {
        if id_token == self.token {
            Ok(Some(self.identity.clone()))
        } else {
            Ok(None)
        }
    }
}

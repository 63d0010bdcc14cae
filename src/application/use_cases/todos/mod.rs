pub mod create_todo;
pub mod delete_todo;
pub mod get_todo;
pub mod list_todos;
pub mod todo_stats;
pub mod toggle_todo;
pub mod update_todo;

use chrono::NaiveDate;
use validator::Validate;

use crate::application::error::{ServiceError, ServiceResult};
use crate::application::ports::todo_repository::TodoRepository;
use crate::domain::todos::{Category, Priority, Todo};

pub const TODO_NOT_FOUND: &str = "Todo not found";

/// Client-editable todo fields, shared by create and update.
#[derive(Debug, Clone, Default, Validate)]
pub struct TodoInput {
    #[validate(
        required(message = "Title is required"),
        custom(function = "crate::application::validation::not_blank", message = "Title is required"),
        length(max = 200, message = "Title must be less than 200 characters")
    )]
    pub title: Option<String>,
    #[validate(length(max = 1000, message = "Description must be less than 1000 characters"))]
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub category: Option<Category>,
    pub due_date: Option<NaiveDate>,
    #[validate(range(min = 0, message = "Estimated minutes cannot be negative"))]
    pub estimated_minutes: Option<i32>,
    #[validate(length(max = 500, message = "Tags must be less than 500 characters"))]
    pub tags: Option<String>,
}

pub(crate) async fn load_owned_todo<R: TodoRepository + ?Sized>(
    repo: &R,
    id: i64,
    user_email: &str,
) -> ServiceResult<Todo> {
    let todo = repo
        .get(id)
        .await?
        .ok_or_else(|| ServiceError::not_found(TODO_NOT_FOUND))?;
    if todo.user_email != user_email {
        return Err(ServiceError::forbidden("Unauthorized access"));
    }
    Ok(todo)
}

#[cfg(test)]
mod tests {
    use super::create_todo::CreateTodo;
    use super::delete_todo::DeleteTodo;
    use super::get_todo::GetTodo;
    use super::list_todos::ListTodos;
    use super::todo_stats::GetTodoStats;
    use super::toggle_todo::ToggleTodo;
    use super::update_todo::UpdateTodo;
    use super::*;
    use crate::application::pagination::PageRequest;
    use crate::application::testing::{FixedClock, MemTodos};

    const ME: &str = "me@x.com";

    fn titled(title: &str) -> TodoInput {
        TodoInput {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_applies_defaults_and_validation() {
        let repo = MemTodos::default();
        let uc = CreateTodo { repo: &repo };
        let todo = uc.execute(ME, titled("Buy milk")).await.unwrap();
        assert_eq!(todo.priority, Priority::Medium);
        assert_eq!(todo.category, Category::Personal);
        assert!(!todo.completed);

        let Err(ServiceError::Validation(errors)) = uc.execute(ME, titled("")).await else {
            panic!("blank title accepted");
        };
        assert_eq!(errors[0].message, "Title is required");

        let Err(ServiceError::Validation(errors)) = uc.execute(ME, titled(&"t".repeat(201))).await
        else {
            panic!("long title accepted");
        };
        assert_eq!(errors[0].message, "Title must be less than 200 characters");

        let mut long_description = titled("ok");
        long_description.description = Some("d".repeat(1001));
        assert!(uc.execute(ME, long_description).await.is_err());

        let mut negative = titled("ok");
        negative.estimated_minutes = Some(-5);
        let Err(ServiceError::Validation(errors)) = uc.execute(ME, negative).await else {
            panic!("negative estimate accepted");
        };
        assert_eq!(errors[0].field, "estimatedMinutes");
        assert_eq!(errors[0].message, "Estimated minutes cannot be negative");
    }

    #[tokio::test]
    async fn ownership_is_enforced() {
        let repo = MemTodos::default();
        let todo = CreateTodo { repo: &repo }
            .execute(ME, titled("Private"))
            .await
            .unwrap();
        let get = GetTodo { repo: &repo };
        match get.execute("other@x.com", todo.id).await {
            Err(ServiceError::Forbidden(msg)) => assert_eq!(msg, "Unauthorized access"),
            other => panic!("unexpected {other:?}"),
        }
        match get.execute(ME, 77).await {
            Err(ServiceError::NotFound(msg)) => assert_eq!(msg, "Todo not found"),
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            DeleteTodo { repo: &repo }.execute("other@x.com", todo.id).await,
            Err(ServiceError::Forbidden(_))
        ));
        DeleteTodo { repo: &repo }.execute(ME, todo.id).await.unwrap();
        assert!(repo.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_keeps_priority_and_category_when_omitted() {
        let repo = MemTodos::default();
        let mut input = titled("Ship");
        input.priority = Some(Priority::Urgent);
        input.category = Some(Category::Work);
        input.tags = Some("release".into());
        let todo = CreateTodo { repo: &repo }.execute(ME, input).await.unwrap();

        let updated = UpdateTodo { repo: &repo }
            .execute(ME, todo.id, titled("Ship it"))
            .await
            .unwrap();
        assert_eq!(updated.title, "Ship it");
        assert_eq!(updated.priority, Priority::Urgent);
        assert_eq!(updated.category, Category::Work);
        // Unset plain fields are replaced, not kept.
        assert_eq!(updated.tags, None);
    }

    #[tokio::test]
    async fn toggle_twice_restores_pending_state() {
        let repo = MemTodos::default();
        let clock = FixedClock::at(2025, 6, 15);
        let todo = CreateTodo { repo: &repo }
            .execute(ME, titled("Run"))
            .await
            .unwrap();
        let uc = ToggleTodo {
            repo: &repo,
            clock: &clock,
        };

        let done = uc.execute(ME, todo.id, Some(25)).await.unwrap();
        assert!(done.completed);
        assert_eq!(done.completed_at, Some(clock.0));
        assert_eq!(done.actual_minutes, Some(25));

        let undone = uc.execute(ME, todo.id, Some(99)).await.unwrap();
        assert!(!undone.completed);
        assert_eq!(undone.completed_at, None);
        assert_eq!(undone.actual_minutes, None);
    }

    #[tokio::test]
    async fn filtered_listing_and_stats() {
        let repo = MemTodos::default();
        let clock = FixedClock::at(2025, 6, 15);
        for title in ["a", "b", "c"] {
            CreateTodo { repo: &repo }
                .execute(ME, titled(title))
                .await
                .unwrap();
        }
        CreateTodo { repo: &repo }
            .execute("other@x.com", titled("theirs"))
            .await
            .unwrap();
        ToggleTodo {
            repo: &repo,
            clock: &clock,
        }
        .execute(ME, 1, None)
        .await
        .unwrap();

        let list = ListTodos { repo: &repo };
        let all = list
            .execute(ME, None, PageRequest::new(None, None, 20))
            .await
            .unwrap();
        assert_eq!(all.total_elements, 3);
        assert_eq!(all.content[0].id, 3);
        let pending = list
            .execute(ME, Some(false), PageRequest::new(None, None, 20))
            .await
            .unwrap();
        assert_eq!(pending.total_elements, 2);

        let stats = GetTodoStats {
            repo: &repo,
            clock: &clock,
        }
        .execute(ME)
        .await
        .unwrap();
        assert_eq!(stats.total_todos, 3);
        assert_eq!(stats.completed_todos, 1);
        assert_eq!(stats.completion_rate, 33.3);
        assert_eq!(stats.productivity_stats.completed_today, 1);
    }
}

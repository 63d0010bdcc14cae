pub mod add_comment;
pub mod create_message;
pub mod delete_comment;
pub mod delete_message;
pub mod get_message;
pub mod list_messages;
pub mod update_message;

use validator::Validate;

use crate::application::error::{ServiceError, ServiceResult};
use crate::application::ports::message_repository::MessageRepository;
use crate::domain::messages::Message;

use create_message::MessageInput;

pub(crate) fn message_not_found(id: i64) -> ServiceError {
    ServiceError::not_found(format!("Message not found with id: {id}"))
}

pub(crate) async fn load_message<R: MessageRepository + ?Sized>(
    repo: &R,
    id: i64,
) -> ServiceResult<Message> {
    repo.get(id).await?.ok_or_else(|| message_not_found(id))
}

fn validate_message(input: MessageInput) -> ServiceResult<(String, String)> {
    input.validate()?;
    Ok((
        input.title.unwrap_or_default(),
        input.content.unwrap_or_default(),
    ))
}

#[cfg(test)]
mod tests {
    use super::add_comment::AddComment;
    use super::create_message::CreateMessage;
    use super::delete_comment::DeleteComment;
    use super::delete_message::DeleteMessage;
    use super::get_message::GetMessage;
    use super::list_messages::ListMessages;
    use super::update_message::UpdateMessage;
    use super::*;
    use crate::application::pagination::PageRequest;
    use crate::application::testing::MemMessages;

    fn input(title: &str, content: &str) -> MessageInput {
        MessageInput {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }

    fn field_messages(err: ServiceError) -> Vec<String> {
        match err {
            ServiceError::Validation(errors) => errors.into_iter().map(|e| e.message).collect(),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_validates_title_and_content() {
        let repo = MemMessages::default();
        let uc = CreateMessage { repo: &repo };

        let err = uc.execute("admin@x.com", input(" ", "")).await.unwrap_err();
        assert_eq!(
            field_messages(err),
            vec!["Content cannot be empty", "Title is required"]
        );

        let err = uc
            .execute("admin@x.com", input("t", &"c".repeat(1001)))
            .await
            .unwrap_err();
        assert_eq!(
            field_messages(err),
            vec!["Content must be less than 1000 characters"]
        );

        let ok = uc
            .execute("admin@x.com", input("t", &"c".repeat(1000)))
            .await
            .unwrap();
        assert_eq!(ok.author_email, "admin@x.com");
    }

    #[tokio::test]
    async fn only_the_author_edits_or_deletes() {
        let repo = MemMessages::default();
        let m = CreateMessage { repo: &repo }
            .execute("a@x.com", input("Hello", "World"))
            .await
            .unwrap();

        let update = UpdateMessage { repo: &repo };
        match update.execute("b@x.com", m.id, input("x", "y")).await {
            Err(ServiceError::Forbidden(msg)) => {
                assert_eq!(msg, "You can only edit your own messages")
            }
            other => panic!("unexpected {other:?}"),
        }
        let updated = update
            .execute("a@x.com", m.id, input("Hello again", "World"))
            .await
            .unwrap();
        assert_eq!(updated.title, "Hello again");

        assert!(matches!(
            DeleteMessage { repo: &repo }.execute("b@x.com", m.id).await,
            Err(ServiceError::Forbidden(_))
        ));
        DeleteMessage { repo: &repo }
            .execute("a@x.com", m.id)
            .await
            .unwrap();
        let get = GetMessage { repo: &repo };
        match get.execute(m.id).await {
            Err(ServiceError::NotFound(msg)) => {
                assert_eq!(msg, format!("Message not found with id: {}", m.id))
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn comments_are_validated_and_scoped_to_their_message() {
        let repo = MemMessages::default();
        let first = CreateMessage { repo: &repo }
            .execute("a@x.com", input("One", "1"))
            .await
            .unwrap();
        let second = CreateMessage { repo: &repo }
            .execute("a@x.com", input("Two", "2"))
            .await
            .unwrap();

        let add = AddComment { repo: &repo };
        let err = add
            .execute("u@x.com", first.id, Some("   ".into()))
            .await
            .unwrap_err();
        assert_eq!(field_messages(err), vec!["Comment cannot be empty"]);
        let err = add
            .execute("u@x.com", first.id, Some("c".repeat(501)))
            .await
            .unwrap_err();
        assert_eq!(
            field_messages(err),
            vec!["Comment must be less than 500 characters"]
        );
        assert!(matches!(
            add.execute("u@x.com", 404, Some("hi".into())).await,
            Err(ServiceError::NotFound(_))
        ));

        let c = add
            .execute("u@x.com", first.id, Some("nice".into()))
            .await
            .unwrap();
        let page = ListMessages { repo: &repo }
            .execute(PageRequest::new(None, None, 10))
            .await
            .unwrap();
        let with_comment = page.content.iter().find(|m| m.id == first.id).unwrap();
        assert_eq!(with_comment.comments.len(), 1);

        let delete = DeleteComment { repo: &repo };
        assert!(matches!(
            delete.execute(second.id, c.id).await,
            Err(ServiceError::BadRequest(_))
        ));
        delete.execute(first.id, c.id).await.unwrap();
        assert!(repo.comments.lock().unwrap().is_empty());
    }
}

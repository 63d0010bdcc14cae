pub mod delete_entry;
pub mod list_my_entries;
pub mod public_feed;
pub mod save_today;
pub mod update_entry;

use crate::application::error::{ServiceError, ServiceResult};
use crate::application::ports::diary_repository::DiaryRepository;
use crate::domain::diary::Diary;

pub(crate) fn diary_not_found() -> ServiceError {
    ServiceError::not_found("Diary not found")
}

pub(crate) async fn load_authored_entry<R: DiaryRepository + ?Sized>(
    repo: &R,
    id: i64,
    author_id: i64,
) -> ServiceResult<Diary> {
    let entry = repo.get(id).await?.ok_or_else(diary_not_found)?;
    if entry.author_id != author_id {
        return Err(ServiceError::forbidden("Not allowed"));
    }
    Ok(entry)
}

#[cfg(test)]
mod tests {
    use super::delete_entry::DeleteEntry;
    use super::list_my_entries::ListMyEntries;
    use super::public_feed::PublicFeed;
    use super::save_today::SaveTodayEntry;
    use super::update_entry::UpdateEntry;
    use super::*;
    use crate::application::pagination::PageRequest;
    use crate::application::ports::diary_repository::DiaryFields;
    use crate::application::testing::{FixedClock, MemDiaries, date};
    use crate::domain::diary::{Mood, Visibility};

    fn fields(title: &str) -> DiaryFields {
        DiaryFields {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn second_save_on_the_same_day_updates_the_entry() {
        let repo = MemDiaries::default();
        let clock = FixedClock::at(2025, 6, 15);
        let uc = SaveTodayEntry {
            repo: &repo,
            clock: &clock,
        };
        let first = uc.execute(1, fields("Morning")).await.unwrap();
        assert_eq!(first.visibility, Visibility::Private);
        assert_eq!(first.entry_date, date(2025, 6, 15));

        let second = uc
            .execute(
                1,
                DiaryFields {
                    mood: Some(Mood::Calm),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(second.id, first.id);
        assert_eq!(second.title.as_deref(), Some("Morning"));
        assert_eq!(second.mood, Some(Mood::Calm));
        assert_eq!(repo.rows.lock().unwrap().len(), 1);

        let other = uc.execute(2, fields("Someone else")).await.unwrap();
        assert_ne!(other.id, first.id);
    }

    #[tokio::test]
    async fn concurrent_first_saves_of_the_day_share_one_row() {
        let repo = MemDiaries::default();
        let clock = FixedClock::at(2025, 6, 15);
        let uc = SaveTodayEntry {
            repo: &repo,
            clock: &clock,
        };
        let (a, b) = tokio::join!(
            uc.execute(1, fields("Morning")),
            uc.execute(
                1,
                DiaryFields {
                    good_things: Some("coffee".into()),
                    ..Default::default()
                }
            )
        );
        let (a, b) = (a.unwrap(), b.unwrap());
        assert_eq!(a.id, b.id);
        let rows = repo.rows.lock().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title.as_deref(), Some("Morning"));
        assert_eq!(rows[0].good_things.as_deref(), Some("coffee"));
    }

    #[tokio::test]
    async fn long_title_is_a_field_error_on_save_and_update() {
        let repo = MemDiaries::default();
        let clock = FixedClock::at(2025, 6, 15);
        let save = SaveTodayEntry {
            repo: &repo,
            clock: &clock,
        };
        match save.execute(1, fields(&"t".repeat(256))).await {
            Err(ServiceError::Validation(e)) => {
                assert_eq!(e[0].field, "title");
                assert_eq!(e[0].message, "Title must be at most 255 characters");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(repo.rows.lock().unwrap().is_empty());

        let entry = save.execute(1, fields(&"t".repeat(255))).await.unwrap();
        assert!(matches!(
            UpdateEntry { repo: &repo }
                .execute(1, entry.id, fields(&"t".repeat(256)))
                .await,
            Err(ServiceError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn only_the_author_may_change_an_entry() {
        let repo = MemDiaries::default();
        let clock = FixedClock::at(2025, 6, 15);
        let entry = SaveTodayEntry {
            repo: &repo,
            clock: &clock,
        }
        .execute(1, fields("Mine"))
        .await
        .unwrap();

        let update = UpdateEntry { repo: &repo };
        assert!(matches!(
            update.execute(2, entry.id, fields("hijack")).await,
            Err(ServiceError::Forbidden(_))
        ));
        assert!(matches!(
            update.execute(1, 99, fields("x")).await,
            Err(ServiceError::NotFound(_))
        ));
        let published = update
            .execute(
                1,
                entry.id,
                DiaryFields {
                    visibility: Some(Visibility::Public),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(published.visibility, Visibility::Public);
        assert_eq!(published.title.as_deref(), Some("Mine"));

        let delete = DeleteEntry { repo: &repo };
        assert!(matches!(
            delete.execute(2, entry.id).await,
            Err(ServiceError::Forbidden(_))
        ));
        delete.execute(1, entry.id).await.unwrap();
        assert!(repo.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn listings_page_newest_first_and_feed_hides_private() {
        let repo = MemDiaries::default();
        repo.authors.lock().unwrap().insert(1, "Ada".into());
        for d in 1..=3 {
            let clock = FixedClock::at(2025, 6, d);
            let mut f = fields(&format!("day {d}"));
            if d != 2 {
                f.visibility = Some(Visibility::Public);
            }
            SaveTodayEntry {
                repo: &repo,
                clock: &clock,
            }
            .execute(1, f)
            .await
            .unwrap();
        }

        let mine = ListMyEntries { repo: &repo }
            .execute(1, PageRequest::new(Some(0), Some(2), 10))
            .await
            .unwrap();
        assert_eq!(mine.total_elements, 3);
        assert_eq!(mine.total_pages(), 2);
        assert_eq!(mine.content[0].entry_date, date(2025, 6, 3));

        let feed = PublicFeed { repo: &repo }
            .execute(PageRequest::new(None, None, 10))
            .await
            .unwrap();
        assert_eq!(feed.total_elements, 2);
        assert_eq!(feed.content[0].author_name, "Ada");
        assert_eq!(feed.content[1].entry_date, date(2025, 6, 1));
    }
}

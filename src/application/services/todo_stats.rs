use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveTime, Utc};

use crate::domain::todos::{
    Category, CategoryStats, DailyProductivity, Priority, PriorityStats, ProductivityStats, Todo,
    TodoStats,
};

/// Summarises a user's todos as of `now`.
pub fn compute(todos: &[Todo], now: DateTime<Utc>) -> TodoStats {
    let today = now.date_naive();
    let week_end = today + Duration::days(7);

    let total = todos.len() as i64;
    let completed = todos.iter().filter(|t| t.completed).count() as i64;
    let overdue = todos.iter().filter(|t| t.is_overdue(today)).count() as i64;
    let due_today = todos.iter().filter(|t| t.due_date == Some(today)).count() as i64;
    let due_this_week = todos
        .iter()
        .filter(|t| t.due_date.map(|d| d >= today && d <= week_end).unwrap_or(false))
        .count() as i64;

    let completion_rate = if total > 0 {
        round_one_decimal(completed as f64 * 100.0 / total as f64)
    } else {
        0.0
    };

    TodoStats {
        total_todos: total,
        completed_todos: completed,
        pending_todos: total - completed,
        overdue_todos: overdue,
        today_todos: due_today,
        week_todos: due_this_week,
        completion_rate,
        category_stats: category_stats(todos),
        priority_stats: priority_stats(todos),
        productivity_stats: productivity_stats(todos, now),
    }
}

fn round_one_decimal(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn category_stats(todos: &[Todo]) -> CategoryStats {
    let mut counts: HashMap<Category, i64> = HashMap::new();
    for t in todos {
        *counts.entry(t.category).or_default() += 1;
    }
    let get = |c: Category| counts.get(&c).copied().unwrap_or(0);
    CategoryStats {
        personal: get(Category::Personal),
        work: get(Category::Work),
        health: get(Category::Health),
        learning: get(Category::Learning),
        shopping: get(Category::Shopping),
        other: get(Category::Other),
    }
}

// Only open work counts towards priority buckets.
fn priority_stats(todos: &[Todo]) -> PriorityStats {
    let mut counts: HashMap<Priority, i64> = HashMap::new();
    for t in todos.iter().filter(|t| !t.completed) {
        *counts.entry(t.priority).or_default() += 1;
    }
    let get = |p: Priority| counts.get(&p).copied().unwrap_or(0);
    PriorityStats {
        low: get(Priority::Low),
        medium: get(Priority::Medium),
        high: get(Priority::High),
        urgent: get(Priority::Urgent),
    }
}

fn productivity_stats(todos: &[Todo], now: DateTime<Utc>) -> ProductivityStats {
    let today = now.date_naive();
    let start_of_today = today.and_time(NaiveTime::MIN).and_utc();

    let completed_since = |since: DateTime<Utc>| {
        todos
            .iter()
            .filter(|t| t.completed && t.completed_at.map(|at| at >= since).unwrap_or(false))
            .count() as i64
    };

    let minutes: Vec<i32> = todos
        .iter()
        .filter(|t| t.completed)
        .filter_map(|t| t.actual_minutes)
        .collect();
    let avg_completion_time = if minutes.is_empty() {
        0
    } else {
        (minutes.iter().map(|m| *m as f64).sum::<f64>() / minutes.len() as f64) as i32
    };

    let last_7_days = (0..7)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            DailyProductivity {
                date,
                completed: todos
                    .iter()
                    .filter(|t| t.completed_at.map(|at| at.date_naive() == date).unwrap_or(false))
                    .count() as i64,
                created: todos
                    .iter()
                    .filter(|t| t.created_at.date_naive() == date)
                    .count() as i64,
            }
        })
        .collect();

    ProductivityStats {
        completed_today: completed_since(start_of_today),
        completed_this_week: completed_since(now - Duration::days(7)),
        completed_this_month: completed_since(now - Duration::days(30)),
        avg_completion_time,
        last_7_days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn todo(id: i64, created_at: DateTime<Utc>) -> Todo {
        Todo {
            id,
            title: format!("todo {id}"),
            description: None,
            priority: Priority::Medium,
            category: Category::Personal,
            completed: false,
            due_date: None,
            completed_at: None,
            user_email: "me@example.com".into(),
            created_at,
            updated_at: created_at,
            estimated_minutes: None,
            actual_minutes: None,
            tags: None,
        }
    }

    fn done(mut t: Todo, at: DateTime<Utc>, minutes: Option<i32>) -> Todo {
        t.completed = true;
        t.completed_at = Some(at);
        t.actual_minutes = minutes;
        t
    }

    #[test]
    fn empty_list_has_zero_rate_and_seven_days() {
        let now = at(2025, 3, 10, 12);
        let stats = compute(&[], now);
        assert_eq!(stats.total_todos, 0);
        assert_eq!(stats.completion_rate, 0.0);
        assert_eq!(stats.productivity_stats.avg_completion_time, 0);
        let days = &stats.productivity_stats.last_7_days;
        assert_eq!(days.len(), 7);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2025, 3, 4).unwrap());
        assert_eq!(days[6].date, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
    }

    #[test]
    fn counts_due_windows_and_overdue() {
        let now = at(2025, 3, 10, 12);
        let today = now.date_naive();
        let mut overdue = todo(1, at(2025, 3, 1, 9));
        overdue.due_date = Some(today - Duration::days(1));
        let mut due_today = todo(2, at(2025, 3, 1, 9));
        due_today.due_date = Some(today);
        let mut due_in_week = todo(3, at(2025, 3, 1, 9));
        due_in_week.due_date = Some(today + Duration::days(7));
        let mut too_far = todo(4, at(2025, 3, 1, 9));
        too_far.due_date = Some(today + Duration::days(8));
        let mut finished_late = done(todo(5, at(2025, 3, 1, 9)), at(2025, 3, 2, 9), None);
        finished_late.due_date = Some(today - Duration::days(3));

        let stats = compute(&[overdue, due_today, due_in_week, too_far, finished_late], now);
        assert_eq!(stats.overdue_todos, 1);
        assert_eq!(stats.today_todos, 1);
        assert_eq!(stats.week_todos, 2);
        assert_eq!(stats.pending_todos, 4);
        assert_eq!(stats.completed_todos, 1);
        assert_eq!(stats.completion_rate, 20.0);
    }

    #[test]
    fn completion_rate_rounds_to_one_decimal() {
        let now = at(2025, 3, 10, 12);
        let todos = vec![
            done(todo(1, now), now, None),
            todo(2, now),
            todo(3, now),
        ];
        assert_eq!(compute(&todos, now).completion_rate, 33.3);
    }

    #[test]
    fn priority_buckets_skip_completed_but_categories_do_not() {
        let now = at(2025, 3, 10, 12);
        let mut urgent = todo(1, now);
        urgent.priority = Priority::Urgent;
        urgent.category = Category::Work;
        let mut urgent_done = done(todo(2, now), now, None);
        urgent_done.priority = Priority::Urgent;
        urgent_done.category = Category::Work;
        let stats = compute(&[urgent, urgent_done], now);
        assert_eq!(stats.priority_stats.urgent, 1);
        assert_eq!(stats.category_stats.work, 2);
        assert_eq!(stats.category_stats.personal, 0);
    }

    #[test]
    fn productivity_windows_and_average() {
        let now = at(2025, 3, 10, 12);
        let todos = vec![
            done(todo(1, at(2025, 3, 10, 8)), at(2025, 3, 10, 9), Some(30)),
            done(todo(2, at(2025, 3, 1, 8)), at(2025, 3, 5, 9), Some(45)),
            done(todo(3, at(2025, 1, 1, 8)), at(2025, 2, 20, 9), None),
            done(todo(4, at(2024, 1, 1, 8)), at(2024, 12, 1, 9), Some(10)),
            todo(5, at(2025, 3, 9, 8)),
        ];
        let p = compute(&todos, now).productivity_stats;
        assert_eq!(p.completed_today, 1);
        assert_eq!(p.completed_this_week, 2);
        assert_eq!(p.completed_this_month, 3);
        // (30 + 45 + 10) / 3 = 28.33 -> 28
        assert_eq!(p.avg_completion_time, 28);

        let last = p.last_7_days.last().unwrap();
        assert_eq!(last.completed, 1);
        assert_eq!(last.created, 1);
        let yesterday = &p.last_7_days[5];
        assert_eq!(yesterday.created, 1);
        assert_eq!(yesterday.completed, 0);
    }
}

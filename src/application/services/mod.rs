pub mod todo_stats;

use std::collections::HashSet;

use crate::dto::{Task, TaskCategory};
use crate::state::LoadState;

/// Well-known category colors. Unknown categories get the fallback color.
const CATEGORY_COLORS: &[(&str, &str)] = &[
    ("web", "42c6dc"),
    ("crypto", "f79307"),
    ("pwn", "fc289d"),
    ("re", "4ee0ae"),
    ("misc", "a46dfe"),
    ("stegano", "c2d90a"),
    ("fore", "f1de40"),
    ("ppc", "ff6270"),
];

const FALLBACK_COLOR: &str = "ff6270";

pub fn category_color(name: &str) -> &'static str {
    CATEGORY_COLORS
        .iter()
        .find(|(category, _)| *category == name)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK_COLOR)
}

/// Rebuilds the category collection from a tasks response, unique and in
/// first-seen order. The category id doubles as its name.
pub fn build_categories(tasks: &[Task]) -> Vec<TaskCategory> {
    let mut categories: Vec<TaskCategory> = Vec::new();
    for task in tasks {
        for name in &task.categories {
            if categories.iter().any(|category| &category.id == name) {
                continue;
            }
            categories.push(TaskCategory {
                id: name.clone(),
                name: name.clone(),
                color: category_color(name).to_string(),
            });
        }
    }
    categories
}

/// Filters the task list for the challenges page. With no category selected
/// and `show_unsolved` off this is the identity. A task matches a non-empty
/// selection when its category set intersects it; `show_unsolved`
/// additionally drops tasks whose id is in `solved_ids`.
pub fn filtered_tasks(
    tasks: &[Task],
    selected_categories: &HashSet<String>,
    show_unsolved: bool,
    solved_ids: &HashSet<u32>,
) -> Vec<Task> {
    if selected_categories.is_empty() && !show_unsolved {
        return tasks.to_vec();
    }

    tasks
        .iter()
        .filter(|task| {
            selected_categories.is_empty()
                || task
                    .categories
                    .iter()
                    .any(|category| selected_categories.contains(category))
        })
        .filter(|task| !(show_unsolved && solved_ids.contains(&task.id)))
        .cloned()
        .collect()
}

/// Unread announcement count for the navbar badge, or -1 while the
/// announcements have not loaded. Mirrors the plain subtraction of the
/// store sizes, so stale seen ids can push it below zero.
pub fn new_announcements_count(state: LoadState, total: usize, seen: usize) -> i64 {
    if !state.is_done() {
        return -1;
    }
    total as i64 - seen as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: u32, categories: &[&str]) -> Task {
        Task {
            id,
            name: format!("task-{id}"),
            categories: categories.iter().map(ToString::to_string).collect(),
            ..Task::default()
        }
    }

    #[test]
    fn no_filter_returns_input_unchanged() {
        let tasks = vec![task(1, &["web"]), task(2, &["pwn"]), task(3, &[])];
        let out = filtered_tasks(&tasks, &HashSet::new(), false, &HashSet::new());
        assert_eq!(out, tasks);
    }

    #[test]
    fn every_selected_task_intersects_the_selection() {
        let tasks = vec![
            task(1, &["web"]),
            task(2, &["pwn", "web"]),
            task(3, &["crypto"]),
        ];
        let selected: HashSet<String> = ["web".to_string()].into_iter().collect();
        let out = filtered_tasks(&tasks, &selected, false, &HashSet::new());
        assert_eq!(out.len(), 2);
        for task in &out {
            assert!(task.categories.iter().any(|c| selected.contains(c)));
        }
    }

    #[test]
    fn show_unsolved_drops_solved_tasks() {
        let tasks = vec![task(1, &["web"]), task(2, &["web"])];
        let solved: HashSet<u32> = [1].into_iter().collect();
        let out = filtered_tasks(&tasks, &HashSet::new(), true, &solved);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, 2);
    }

    #[test]
    fn show_unsolved_combines_with_category_selection() {
        let tasks = vec![task(1, &["web"]), task(2, &["web"]), task(3, &["pwn"])];
        let selected: HashSet<String> = ["web".to_string()].into_iter().collect();
        let solved: HashSet<u32> = [2].into_iter().collect();
        let out = filtered_tasks(&tasks, &selected, true, &solved);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, 1);
    }

    #[test]
    fn one_task_one_category() {
        let tasks = vec![task(1, &["web"])];
        let categories = build_categories(&tasks);
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].id, "web");
        assert_eq!(categories[0].name, "web");
        assert_eq!(categories[0].color, "42c6dc");
        assert_eq!(tasks[0].categories, vec!["web".to_string()]);
    }

    #[test]
    fn categories_are_unique_and_ordered() {
        let tasks = vec![
            task(1, &["web", "misc"]),
            task(2, &["web"]),
            task(3, &["mystery"]),
        ];
        let categories = build_categories(&tasks);
        let ids: Vec<&str> = categories.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["web", "misc", "mystery"]);
        assert_eq!(categories[2].color, "ff6270");
    }

    #[test]
    fn announcement_count_is_sentinel_until_loaded() {
        assert_eq!(new_announcements_count(LoadState::None, 5, 0), -1);
        assert_eq!(new_announcements_count(LoadState::Pending, 5, 0), -1);
        assert_eq!(new_announcements_count(LoadState::Error, 5, 0), -1);
        assert_eq!(new_announcements_count(LoadState::Done, 5, 2), 3);
        assert_eq!(new_announcements_count(LoadState::Done, 1, 3), -2);
    }
}

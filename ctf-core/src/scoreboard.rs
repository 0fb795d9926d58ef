use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::dto::{ScoreboardRow, Task};

/// One header group on the scoreboard table: a category, how many task
/// columns it spans, and the task opening the group (its column gets the
/// highlight class).
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryGroup {
    pub category: String,
    pub count: usize,
    pub first_task_id: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SolveEntry {
    pub team_id: u32,
    pub created_at: DateTime<Utc>,
}

/// Medal shown in a task cell, ranked by solve order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
    Other,
}

impl Medal {
    /// `position` is 1-based.
    pub fn for_position(position: usize) -> Self {
        match position {
            1 => Self::Gold,
            2 => Self::Silver,
            3 => Self::Bronze,
            _ => Self::Other,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Self::Gold => "medal gold",
            Self::Silver => "medal silver",
            Self::Bronze => "medal bronze",
            Self::Other => "medal any",
        }
    }
}

/// Everything the scoreboard page derives from the task and scoreboard
/// collections. Ranking keeps the server-provided row order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComputedScoreboard {
    pub sorted_tasks: Vec<Task>,
    pub groups: Vec<CategoryGroup>,
    solves: HashMap<u32, Vec<SolveEntry>>,
}

impl ComputedScoreboard {
    pub fn compute(tasks: &[Task], rows: &[ScoreboardRow]) -> Self {
        let mut sorted_tasks = tasks.to_vec();
        sorted_tasks.sort_by(|a, b| {
            let ca = a.categories.first().map(String::as_str).unwrap_or("");
            let cb = b.categories.first().map(String::as_str).unwrap_or("");
            ca.cmp(cb).then(a.id.cmp(&b.id))
        });

        let mut groups: Vec<CategoryGroup> = Vec::new();
        for task in &sorted_tasks {
            let category = task.categories.first().cloned().unwrap_or_default();
            match groups.last_mut() {
                Some(group) if group.category == category => group.count += 1,
                _ => groups.push(CategoryGroup {
                    category,
                    count: 1,
                    first_task_id: task.id,
                }),
            }
        }

        let mut solves: HashMap<u32, Vec<SolveEntry>> = HashMap::new();
        for row in rows {
            for audit in &row.team.task_solved {
                solves.entry(audit.id).or_default().push(SolveEntry {
                    team_id: row.team.id,
                    created_at: audit.created_at,
                });
            }
        }
        for entries in solves.values_mut() {
            // Stable sort: equal timestamps keep the incoming row order.
            entries.sort_by_key(|entry| entry.created_at);
        }

        Self {
            sorted_tasks,
            groups,
            solves,
        }
    }

    /// 1-based solve rank of a team on a task, or None when the team has
    /// not solved it.
    pub fn solve_position(&self, task_id: u32, team_id: u32) -> Option<usize> {
        self.solves
            .get(&task_id)?
            .iter()
            .position(|entry| entry.team_id == team_id)
            .map(|index| index + 1)
    }

    pub fn solvers(&self, task_id: u32) -> &[SolveEntry] {
        self.solves
            .get(&task_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether the task opens its category group on the table.
    pub fn first_in_group(&self, task: &Task) -> bool {
        self.groups
            .iter()
            .any(|group| group.first_task_id == task.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::{TaskAudit, Team};
    use chrono::TimeZone;

    fn task(id: u32, category: &str) -> Task {
        Task {
            id,
            name: format!("task-{id}"),
            categories: vec![category.to_string()],
            ..Task::default()
        }
    }

    fn row(team_id: u32, solved: &[(u32, i64)]) -> ScoreboardRow {
        ScoreboardRow {
            team: Team {
                id: team_id,
                name: format!("team-{team_id}"),
                task_solved: solved
                    .iter()
                    .map(|&(task_id, seconds)| TaskAudit {
                        id: task_id,
                        name: format!("task-{task_id}"),
                        created_at: Utc.timestamp_opt(seconds, 0).unwrap(),
                    })
                    .collect(),
                ..Team::default()
            },
            points: 0,
        }
    }

    #[test]
    fn tasks_sort_by_first_category_then_id() {
        let tasks = vec![task(3, "web"), task(1, "crypto"), task(2, "web")];
        let computed = ComputedScoreboard::compute(&tasks, &[]);
        let ids: Vec<u32> = computed.sorted_tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn groups_span_their_tasks_and_mark_the_first_column() {
        let tasks = vec![task(3, "web"), task(1, "crypto"), task(2, "web")];
        let computed = ComputedScoreboard::compute(&tasks, &[]);
        assert_eq!(computed.groups.len(), 2);
        assert_eq!(computed.groups[0].category, "crypto");
        assert_eq!(computed.groups[0].count, 1);
        assert_eq!(computed.groups[0].first_task_id, 1);
        assert_eq!(computed.groups[1].category, "web");
        assert_eq!(computed.groups[1].count, 2);
        assert_eq!(computed.groups[1].first_task_id, 2);

        assert!(computed.first_in_group(&task(1, "crypto")));
        assert!(computed.first_in_group(&task(2, "web")));
        assert!(!computed.first_in_group(&task(3, "web")));
    }

    #[test]
    fn solver_ranking_orders_by_timestamp() {
        let tasks = vec![task(1, "web")];
        let rows = vec![row(30, &[(1, 300)]), row(10, &[(1, 100)]), row(20, &[(1, 200)])];
        let computed = ComputedScoreboard::compute(&tasks, &rows);

        assert_eq!(computed.solve_position(1, 10), Some(1));
        assert_eq!(computed.solve_position(1, 20), Some(2));
        assert_eq!(computed.solve_position(1, 30), Some(3));
        assert_eq!(computed.solve_position(1, 40), None);
        assert_eq!(computed.solve_position(2, 10), None);

        assert_eq!(Medal::for_position(1), Medal::Gold);
        assert_eq!(Medal::for_position(2), Medal::Silver);
        assert_eq!(Medal::for_position(3), Medal::Bronze);
        assert_eq!(Medal::for_position(9), Medal::Other);
    }

    #[test]
    fn equal_timestamps_keep_row_order() {
        let tasks = vec![task(1, "web")];
        let rows = vec![row(5, &[(1, 100)]), row(6, &[(1, 100)])];
        let computed = ComputedScoreboard::compute(&tasks, &rows);
        assert_eq!(computed.solve_position(1, 5), Some(1));
        assert_eq!(computed.solve_position(1, 6), Some(2));
    }
}

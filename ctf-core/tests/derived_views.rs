use std::collections::HashSet;

use chrono::{TimeZone, Utc};
use ctf_core::dto::{ScoreboardRow, Task, TaskAudit, Team};
use ctf_core::error::ErrorCode;
use ctf_core::scoreboard::{ComputedScoreboard, Medal};
use ctf_core::state::LoadState;
use ctf_core::views;

fn tasks_fixture() -> Vec<Task> {
    serde_json::from_str(
        r#"[
            {"id": 1, "name": "baby-xss", "points": 100, "categories": ["web"], "difficult": "easy", "description": "", "solvers": 12},
            {"id": 2, "name": "heap-feng-shui", "points": 400, "categories": ["pwn"], "difficult": "hard", "description": "", "solvers": 2},
            {"id": 3, "name": "rsa-redux", "points": 250, "categories": ["crypto", "misc"], "difficult": "medium", "description": "", "solvers": 5}
        ]"#,
    )
    .expect("tasks fixture")
}

#[test]
fn tasks_response_builds_referencing_categories() {
    let tasks: Vec<Task> =
        serde_json::from_str(r#"[{"id": 1, "categories": ["web"]}]"#).expect("tasks");
    let categories = views::build_categories(&tasks);

    assert_eq!(tasks.len(), 1);
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].id, "web");
    assert!(tasks[0].categories.iter().all(|name| categories
        .iter()
        .any(|category| category.id == *name)));
}

#[test]
fn filtering_is_identity_without_selection() {
    let tasks = tasks_fixture();
    let out = views::filtered_tasks(&tasks, &HashSet::new(), false, &HashSet::new());
    assert_eq!(out, tasks);
}

#[test]
fn filtering_respects_selection_across_multi_category_tasks() {
    let tasks = tasks_fixture();
    let selected: HashSet<String> = ["misc".to_string()].into_iter().collect();
    let out = views::filtered_tasks(&tasks, &selected, false, &HashSet::new());
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id, 3);
}

#[test]
fn unread_count_tracks_load_state() {
    assert_eq!(views::new_announcements_count(LoadState::None, 3, 0), -1);
    assert_eq!(views::new_announcements_count(LoadState::Done, 3, 1), 2);
}

#[test]
fn backend_error_body_maps_to_message_table() {
    // 401 with a plain-text body.
    let code = ErrorCode::parse("not_authorize");
    assert_eq!(code, ErrorCode::NotAuthorize);
    assert_eq!(code.message(), "Not authorize. Please login :)");
}

#[test]
fn scoreboard_medals_follow_solve_timestamps() {
    let tasks = tasks_fixture();
    let audit = |task_id: u32, seconds: i64| TaskAudit {
        id: task_id,
        name: String::new(),
        created_at: Utc.timestamp_opt(seconds, 0).unwrap(),
    };
    let rows = vec![
        ScoreboardRow {
            team: Team {
                id: 100,
                task_solved: vec![audit(1, 30), audit(2, 10)],
                ..Team::default()
            },
            points: 500,
        },
        ScoreboardRow {
            team: Team {
                id: 200,
                task_solved: vec![audit(1, 20)],
                ..Team::default()
            },
            points: 100,
        },
        ScoreboardRow {
            team: Team {
                id: 300,
                task_solved: vec![audit(1, 10)],
                ..Team::default()
            },
            points: 100,
        },
    ];

    let computed = ComputedScoreboard::compute(&tasks, &rows);

    // Task 1 solved at T1<T2<T3 by teams 300, 200, 100.
    assert_eq!(computed.solve_position(1, 300), Some(1));
    assert_eq!(computed.solve_position(1, 200), Some(2));
    assert_eq!(computed.solve_position(1, 100), Some(3));
    assert_eq!(
        Medal::for_position(computed.solve_position(1, 300).unwrap()),
        Medal::Gold
    );
    assert_eq!(computed.solve_position(2, 100), Some(1));
    assert_eq!(computed.solve_position(3, 100), None);

    // Columns group by first category: crypto, pwn, web.
    let groups: Vec<&str> = computed
        .groups
        .iter()
        .map(|group| group.category.as_str())
        .collect();
    assert_eq!(groups, vec!["crypto", "pwn", "web"]);
}

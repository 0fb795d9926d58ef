use std::collections::HashSet;
use std::time::Duration;

use leptos::{
    logging, set_interval_with_handle, set_timeout, RwSignal, SignalGet, SignalGetUntracked,
    SignalSet, SignalUpdate, SignalWith, SignalWithUntracked,
};
use wasm_bindgen_futures::spawn_local;

use ctf_core::dto::{Announcement, Info, ScoreboardRow, Task, TaskCategory, Team};
use ctf_core::error::ApiError;
use ctf_core::state::LoadState;
use ctf_core::views;

use crate::{api, storage};

const ANNOUNCEMENTS_FIRST_FETCH: Duration = Duration::from_secs(1);
const ANNOUNCEMENTS_POLL: Duration = Duration::from_secs(45);

/// Client-side cache of every backend resource, one load state per
/// resource. A `Copy` bundle of signals shared through Leptos context.
///
/// Fetch actions clear the prior collection, flip the state to Pending and
/// hand the api result to a synchronous `apply_*` function; collections are
/// rebuilt wholesale on every successful fetch. The last response to
/// resolve wins; there is no cancellation and no retry.
#[derive(Clone, Copy)]
pub struct CtfStore {
    pub info_state: RwSignal<LoadState>,
    pub info: RwSignal<Info>,

    pub tasks_state: RwSignal<LoadState>,
    pub tasks: RwSignal<Vec<Task>>,
    pub categories: RwSignal<Vec<TaskCategory>>,

    pub scoreboard_state: RwSignal<LoadState>,
    pub scoreboard: RwSignal<Vec<ScoreboardRow>>,
    pub scoreboard_is_freeze: RwSignal<bool>,

    pub announcements_state: RwSignal<LoadState>,
    pub announcements: RwSignal<Vec<Announcement>>,
    pub seen_announcements: RwSignal<Vec<u32>>,

    pub my_team_state: RwSignal<LoadState>,
    pub my_team: RwSignal<Option<Team>>,

    pub teams_state: RwSignal<LoadState>,
    pub teams: RwSignal<Vec<Team>>,

    pub my_team_id: RwSignal<u32>,
    pub is_logged_in: RwSignal<bool>,
}

impl CtfStore {
    pub fn new() -> Self {
        Self {
            info_state: RwSignal::new(LoadState::None),
            info: RwSignal::new(Info::default()),
            tasks_state: RwSignal::new(LoadState::None),
            tasks: RwSignal::new(Vec::new()),
            categories: RwSignal::new(Vec::new()),
            scoreboard_state: RwSignal::new(LoadState::None),
            scoreboard: RwSignal::new(Vec::new()),
            scoreboard_is_freeze: RwSignal::new(false),
            announcements_state: RwSignal::new(LoadState::None),
            announcements: RwSignal::new(Vec::new()),
            seen_announcements: RwSignal::new(Vec::new()),
            my_team_state: RwSignal::new(LoadState::None),
            my_team: RwSignal::new(None),
            teams_state: RwSignal::new(LoadState::None),
            teams: RwSignal::new(Vec::new()),
            my_team_id: RwSignal::new(0),
            is_logged_in: RwSignal::new(false),
        }
    }

    // --- session ---

    /// Restores the session and the seen-announcement markers from
    /// localStorage on startup.
    pub fn load_session(&self) {
        if let Some(team_id) = storage::load_team_id() {
            self.my_team_id.set(team_id);
            self.is_logged_in.set(true);
        }
        let seen = storage::load_seen_announcements();
        if !seen.is_empty() {
            self.seen_announcements.set(seen);
        }
    }

    pub fn set_user_session(&self, team: &Team) {
        storage::store_team_id(team.id);
        self.my_team_id.set(team.id);
        self.is_logged_in.set(true);
    }

    pub fn remove_user_session(&self) {
        storage::clear_team_id();
        self.my_team_id.set(0);
        self.is_logged_in.set(false);
    }

    // --- derived views ---

    pub fn filtered_tasks(
        &self,
        selected_categories: &HashSet<String>,
        show_unsolved: bool,
    ) -> Vec<Task> {
        let solved: HashSet<u32> = self.my_team.with(|team| {
            team.as_ref()
                .map(|team| team.task_solved.iter().map(|audit| audit.id).collect())
                .unwrap_or_default()
        });
        self.tasks
            .with(|tasks| views::filtered_tasks(tasks, selected_categories, show_unsolved, &solved))
    }

    pub fn new_announcements_count(&self) -> i64 {
        views::new_announcements_count(
            self.announcements_state.get(),
            self.announcements.with(Vec::len),
            self.seen_announcements.with(Vec::len),
        )
    }

    pub fn has_task_solved(&self, task_id: u32) -> bool {
        self.my_team.with(|team| {
            team.as_ref()
                .map(|team| team.has_solved(task_id))
                .unwrap_or(false)
        })
    }

    // --- fetch actions ---

    pub async fn fetch_info(self) {
        self.info_state.set(LoadState::Pending);
        let result = api::get_info().await;
        self.apply_info(result);
    }

    pub fn apply_info(&self, result: Result<Info, ApiError>) {
        match result {
            Ok(info) => {
                self.info.set(info);
                self.info_state.set(LoadState::Done);
            }
            Err(e) => {
                logging::error!("Failed to fetch info: {e}");
                self.info_state.set(LoadState::Error);
            }
        }
    }

    pub async fn fetch_tasks(self) {
        self.tasks.update(Vec::clear);
        self.categories.update(Vec::clear);
        self.tasks_state.set(LoadState::Pending);
        let result = api::get_tasks().await;
        self.apply_tasks(result);
    }

    pub fn apply_tasks(&self, result: Result<Vec<Task>, ApiError>) {
        match result {
            Ok(tasks) => {
                self.categories.set(views::build_categories(&tasks));
                self.tasks.set(tasks);
                self.tasks_state.set(LoadState::Done);
            }
            Err(e) => {
                logging::error!("Failed to fetch tasks: {e}");
                self.tasks_state.set(LoadState::Error);
            }
        }
    }

    pub async fn fetch_scoreboard(self) {
        self.scoreboard.update(Vec::clear);
        self.scoreboard_state.set(LoadState::Pending);
        let result = api::get_scoreboard().await;
        self.apply_scoreboard(result);
    }

    pub fn apply_scoreboard(&self, result: Result<(Vec<ScoreboardRow>, bool), ApiError>) {
        match result {
            Ok((rows, is_freeze)) => {
                self.scoreboard.set(rows);
                self.scoreboard_state.set(LoadState::Done);
                self.scoreboard_is_freeze.set(is_freeze);
            }
            Err(e) => {
                logging::error!("Failed to fetch scoreboard: {e}");
                self.scoreboard_state.set(LoadState::Error);
            }
        }
    }

    pub async fn fetch_announcements(self) {
        self.announcements.update(Vec::clear);
        self.announcements_state.set(LoadState::Pending);
        let result = api::get_announcements().await;
        self.apply_announcements(result);
    }

    pub fn apply_announcements(&self, result: Result<Vec<Announcement>, ApiError>) {
        match result {
            Ok(announcements) => {
                self.announcements.set(announcements);
                self.announcements_state.set(LoadState::Done);
            }
            Err(e) => {
                logging::error!("Failed to fetch announcements: {e}");
                self.announcements_state.set(LoadState::Error);
            }
        }
    }

    pub async fn fetch_teams(self) {
        self.teams.update(Vec::clear);
        self.teams_state.set(LoadState::Pending);
        let result = api::get_teams().await;
        self.apply_teams(result);
    }

    pub fn apply_teams(&self, result: Result<Vec<Team>, ApiError>) {
        match result {
            Ok(teams) => {
                self.teams.set(teams);
                self.teams_state.set(LoadState::Done);
            }
            Err(e) => {
                logging::error!("Failed to fetch teams: {e}");
                self.teams_state.set(LoadState::Error);
            }
        }
    }

    pub async fn fetch_my_team(self) {
        if !self.is_logged_in.get_untracked() {
            return;
        }
        self.my_team.set(None);
        self.my_team_state.set(LoadState::Pending);
        let result = api::get_current_team().await;
        self.apply_my_team(result);
    }

    pub fn apply_my_team(&self, result: Result<Team, ApiError>) {
        match result {
            Ok(team) => {
                self.my_team.set(Some(team));
                self.my_team_state.set(LoadState::Done);
            }
            Err(e) => {
                logging::error!("Failed to fetch team: {e}");
                self.my_team_state.set(LoadState::Error);
            }
        }
    }

    // --- announcements bookkeeping ---

    /// Snapshots the current announcement ids as seen, in memory and in
    /// localStorage. A no-op unless the announcements have loaded.
    pub fn mark_announcements_seen(&self) {
        if !self.announcements_state.get_untracked().is_done() {
            return;
        }
        let seen: Vec<u32> = self
            .announcements
            .with_untracked(|list| list.iter().map(|a| a.id).collect());
        storage::store_seen_announcements(&seen);
        self.seen_announcements.set(seen);
    }

    /// First fetch shortly after startup if nothing asked for announcements
    /// yet, then a periodic re-fetch. Overlap is avoided only by skipping
    /// fires while a fetch is still pending.
    pub fn start_announcement_polling(self) {
        set_timeout(
            move || {
                if self.announcements_state.get_untracked() == LoadState::None {
                    spawn_local(async move { self.fetch_announcements().await });
                }
            },
            ANNOUNCEMENTS_FIRST_FETCH,
        );
        let _ = set_interval_with_handle(
            move || {
                if !self.announcements_state.get_untracked().is_pending() {
                    spawn_local(async move { self.fetch_announcements().await });
                }
            },
            ANNOUNCEMENTS_POLL,
        );
    }
}

impl Default for CtfStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ctf_core::error::ErrorCode;
    use leptos::create_runtime;

    fn task(id: u32, category: &str) -> Task {
        Task {
            id,
            name: format!("task-{id}"),
            categories: vec![category.to_string()],
            ..Task::default()
        }
    }

    #[test]
    fn apply_tasks_rebuilds_collection_and_categories() {
        let runtime = create_runtime();
        let store = CtfStore::new();

        store.apply_tasks(Ok(vec![task(1, "web"), task(2, "pwn")]));
        assert_eq!(store.tasks_state.get_untracked(), LoadState::Done);
        assert_eq!(store.tasks.with_untracked(Vec::len), 2);
        let ids: Vec<String> = store
            .categories
            .with_untracked(|c| c.iter().map(|c| c.id.clone()).collect());
        assert_eq!(ids, vec!["web".to_string(), "pwn".to_string()]);

        // The next fetch replaces everything.
        store.apply_tasks(Ok(vec![task(3, "crypto")]));
        assert_eq!(store.tasks.with_untracked(Vec::len), 1);
        assert_eq!(store.categories.with_untracked(Vec::len), 1);

        runtime.dispose();
    }

    #[test]
    fn apply_tasks_error_degrades_only_tasks_state() {
        let runtime = create_runtime();
        let store = CtfStore::new();

        store.apply_tasks(Err(ApiError::Code(ErrorCode::InternalError)));
        assert_eq!(store.tasks_state.get_untracked(), LoadState::Error);
        assert_eq!(store.teams_state.get_untracked(), LoadState::None);
        assert_eq!(store.announcements_state.get_untracked(), LoadState::None);

        runtime.dispose();
    }

    #[test]
    fn apply_scoreboard_records_the_freeze_flag() {
        let runtime = create_runtime();
        let store = CtfStore::new();

        store.apply_scoreboard(Ok((Vec::new(), true)));
        assert_eq!(store.scoreboard_state.get_untracked(), LoadState::Done);
        assert!(store.scoreboard_is_freeze.get_untracked());

        store.apply_scoreboard(Err(ApiError::Network("timeout".into())));
        assert_eq!(store.scoreboard_state.get_untracked(), LoadState::Error);
        // A failed fetch keeps the previous flag.
        assert!(store.scoreboard_is_freeze.get_untracked());

        runtime.dispose();
    }

    #[test]
    fn filtered_tasks_uses_my_team_solves() {
        let runtime = create_runtime();
        let store = CtfStore::new();

        store.apply_tasks(Ok(vec![task(1, "web"), task(2, "web")]));
        store.apply_my_team(Ok(Team {
            id: 9,
            task_solved: vec![ctf_core::dto::TaskAudit {
                id: 1,
                name: "task-1".into(),
                created_at: chrono::DateTime::UNIX_EPOCH,
            }],
            ..Team::default()
        }));

        assert!(store.has_task_solved(1));
        assert!(!store.has_task_solved(2));

        let out = store.filtered_tasks(&HashSet::new(), true);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, 2);

        runtime.dispose();
    }

    #[test]
    fn unread_count_follows_announcement_state() {
        let runtime = create_runtime();
        let store = CtfStore::new();

        assert_eq!(store.new_announcements_count(), -1);
        store.apply_announcements(Ok(vec![
            Announcement {
                id: 1,
                ..Announcement::default()
            },
            Announcement {
                id: 2,
                ..Announcement::default()
            },
        ]));
        assert_eq!(store.new_announcements_count(), 2);

        store.mark_announcements_seen();
        assert_eq!(store.new_announcements_count(), 0);
        assert_eq!(
            store.seen_announcements.get_untracked(),
            vec![1, 2]
        );

        runtime.dispose();
    }

    #[test]
    fn session_setters_toggle_the_logged_in_flag() {
        let runtime = create_runtime();
        let store = CtfStore::new();

        store.set_user_session(&Team {
            id: 42,
            ..Team::default()
        });
        assert_eq!(store.my_team_id.get_untracked(), 42);
        assert!(store.is_logged_in.get_untracked());

        store.remove_user_session();
        assert_eq!(store.my_team_id.get_untracked(), 0);
        assert!(!store.is_logged_in.get_untracked());

        runtime.dispose();
    }
}

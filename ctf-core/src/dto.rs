use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn null_date() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH
}

/// One solved-task record as the backend reports it, both on team profiles
/// and in the per-task solver listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskAudit {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default = "null_date")]
    pub created_at: DateTime<Utc>,
}

/// A team as returned by `/teams`, `/team_info/{id}` and `/team`. The email
/// is only populated for the caller's own team.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Team {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub country: String,
    pub affiliation: String,
    pub website: String,
    pub task_solved: Vec<TaskAudit>,
    #[serde(default = "null_date")]
    pub created_at: DateTime<Utc>,
}

impl Default for Team {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            email: String::new(),
            avatar: String::new(),
            country: String::new(),
            affiliation: String::new(),
            website: String::new(),
            task_solved: Vec::new(),
            created_at: null_date(),
        }
    }
}

impl Team {
    pub fn has_solved(&self, task_id: u32) -> bool {
        self.task_solved.iter().any(|audit| audit.id == task_id)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    pub id: u32,
    pub name: String,
    pub points: u32,
    pub categories: Vec<String>,
    pub difficult: String,
    pub description: String,
    pub solvers: u32,
}

/// Categories are not a backend resource: they are rebuilt from the category
/// names of each tasks response. The id doubles as the name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskCategory {
    pub id: String,
    pub name: String,
    pub color: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreboardRow {
    pub team: Team,
    pub points: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Announcement {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(default = "null_date")]
    pub created_at: DateTime<Utc>,
}

impl Default for Announcement {
    fn default() -> Self {
        Self {
            id: 0,
            title: String::new(),
            description: String::new(),
            created_at: null_date(),
        }
    }
}

/// Competition-wide counters and schedule from `/info`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Info {
    #[serde(default = "null_date")]
    pub start: DateTime<Utc>,
    #[serde(default = "null_date")]
    pub end: DateTime<Utc>,
    pub flags_count: u32,
    pub teams_count: u32,
    pub countries_count: u32,
    pub tasks_unsolved_count: u32,
}

impl Default for Info {
    fn default() -> Self {
        Self {
            start: null_date(),
            end: null_date(),
            flags_count: 0,
            teams_count: 0,
            countries_count: 0,
            tasks_unsolved_count: 0,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub country: String,
    pub avatar: String,
    pub captcha: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub captcha: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SettingsRequest {
    pub current_password: String,
    pub new_password: String,
    pub country: String,
    pub avatar: String,
    pub affiliation: String,
    pub website: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FlagRequest {
    pub flag: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_response_decodes_with_missing_fields() {
        let task: Task =
            serde_json::from_str(r#"{"id":1,"name":"warmup","categories":["web"]}"#).expect("task");
        assert_eq!(task.id, 1);
        assert_eq!(task.categories, vec!["web".to_string()]);
        assert_eq!(task.points, 0);
        assert_eq!(task.solvers, 0);
    }

    #[test]
    fn team_response_decodes_timestamps() {
        let team: Team = serde_json::from_str(
            r#"{
                "id": 7,
                "name": "cats",
                "task_solved": [{"id": 1, "name": "warmup", "created_at": "2019-12-20T21:30:00Z"}],
                "created_at": "2019-12-20T20:00:00Z"
            }"#,
        )
        .expect("team");
        assert_eq!(team.task_solved.len(), 1);
        assert!(team.task_solved[0].created_at > team.created_at);
        assert!(team.has_solved(1));
        assert!(!team.has_solved(2));
    }

    #[test]
    fn missing_date_fields_fall_back_to_epoch() {
        let row: ScoreboardRow =
            serde_json::from_str(r#"{"team":{"id":1,"name":"a"},"points":500}"#).expect("row");
        assert_eq!(row.points, 500);
        assert_eq!(row.team.created_at, DateTime::UNIX_EPOCH);
    }
}

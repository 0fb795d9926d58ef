use ctf_core::dto::{
    Announcement, FlagRequest, Info, LoginRequest, RegisterRequest, ScoreboardRow, SettingsRequest,
    Task, TaskAudit, Team,
};
use ctf_core::error::{ApiError, ErrorCode};

use crate::http::{self, HttpResponse};

/// Maps a non-success response to its backend error code, falling back to
/// `UndefinedError` for unrecognized bodies.
async fn error_from(response: HttpResponse) -> ApiError {
    match response.text().await {
        Ok(body) => ApiError::Code(ErrorCode::parse(body.trim())),
        Err(e) => ApiError::Network(e),
    }
}

async fn get_json<T>(path: &str) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    let response = http::get(path).await.map_err(ApiError::Network)?;
    if response.status() != 200 {
        return Err(error_from(response).await);
    }
    response.json().await.map_err(ApiError::Network)
}

async fn post_expecting<B>(path: &str, body: &B, expected: u16) -> Result<HttpResponse, ApiError>
where
    B: serde::Serialize,
{
    let response = http::post_json(path, body).await.map_err(ApiError::Network)?;
    if response.status() != expected {
        return Err(error_from(response).await);
    }
    Ok(response)
}

pub async fn get_tasks() -> Result<Vec<Task>, ApiError> {
    get_json("/tasks").await
}

/// The scoreboard response also carries the freeze flag in the `X-Freeze`
/// header.
pub async fn get_scoreboard() -> Result<(Vec<ScoreboardRow>, bool), ApiError> {
    let response = http::get("/scoreboard").await.map_err(ApiError::Network)?;
    if response.status() != 200 {
        return Err(error_from(response).await);
    }
    let is_freeze = response.header("X-Freeze").as_deref() == Some("1");
    let rows = response.json().await.map_err(ApiError::Network)?;
    Ok((rows, is_freeze))
}

pub async fn get_announcements() -> Result<Vec<Announcement>, ApiError> {
    get_json("/announcements").await
}

pub async fn get_teams() -> Result<Vec<Team>, ApiError> {
    get_json("/teams").await
}

pub async fn get_info() -> Result<Info, ApiError> {
    get_json("/info").await
}

pub async fn get_current_team() -> Result<Team, ApiError> {
    get_json("/team").await
}

pub async fn get_team(team_id: u32) -> Result<Team, ApiError> {
    get_json(&format!("/team_info/{team_id}")).await
}

pub async fn get_task_solvers(task_id: u32) -> Result<Vec<TaskAudit>, ApiError> {
    get_json(&format!("/task_solvers/{task_id}")).await
}

pub async fn register(input: &RegisterRequest) -> Result<(), ApiError> {
    post_expecting("/team/register", input, 201).await?;
    Ok(())
}

pub async fn update_settings(input: &SettingsRequest) -> Result<(), ApiError> {
    post_expecting("/team/settings", input, 200).await?;
    Ok(())
}

pub async fn login(input: &LoginRequest) -> Result<Team, ApiError> {
    let response = post_expecting("/team/login", input, 200).await?;
    response.json().await.map_err(ApiError::Network)
}

pub async fn logout() -> Result<(), ApiError> {
    post_expecting("/team/logout", &serde_json::json!({}), 200).await?;
    Ok(())
}

pub async fn submit_flag(input: &FlagRequest) -> Result<(), ApiError> {
    post_expecting("/flag/submit", input, 200).await?;
    Ok(())
}

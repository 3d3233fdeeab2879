//! Request handlers

use axum::{
    body::Body,
    extract::{Path, Query, State},
    http::header,
    response::{Html, IntoResponse, Json, Response},
};
use logscope_core::{DiffEntry, LogDate, ServerClass, ServerStatus};
use serde::{Deserialize, Serialize};
use tokio_util::io::ReaderStream;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::AppState;

static INDEX_HTML: &str = include_str!("../templates/index.html");

/// Optional `?date=YYYY-MM-DD`
#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: Option<String>,
}

impl DateQuery {
    fn date_or_today(self) -> LogDate {
        self.date
            .filter(|d| !d.is_empty())
            .map(LogDate::new)
            .unwrap_or_else(LogDate::today)
    }
}

#[derive(Debug, Deserialize)]
pub struct CompareQuery {
    pub server1: Option<String>,
    pub server2: Option<String>,
    pub date: Option<String>,
}

/// Server row in `/servers`
#[derive(Debug, Serialize)]
pub struct ServerView {
    pub name: String,
    pub ip: String,
    #[serde(rename = "type")]
    pub class: ServerClass,
    pub status: ServerStatus,
}

#[derive(Debug, Serialize)]
pub struct LogsResponse {
    pub logs: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DiffView {
    pub position: usize,
    pub server1: String,
    pub server2: String,
}

impl From<DiffEntry> for DiffView {
    fn from(entry: DiffEntry) -> Self {
        Self {
            position: entry.position,
            server1: entry.first,
            server2: entry.second,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub diff: Vec<DiffView>,
}

/// Run filesystem work on the blocking pool
async fn blocking<T, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> logscope_core::Result<T> + Send + 'static,
    T: Send + 'static,
{
    Ok(tokio::task::spawn_blocking(f).await??)
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "policy": state.store.policy().as_str(),
    }))
}

pub async fn list_servers(State(state): State<AppState>) -> Result<Json<Vec<ServerView>>, ApiError> {
    let servers = blocking(move || {
        Ok(state
            .registry
            .list_all()
            .iter()
            .map(|entry| ServerView {
                name: entry.name.clone(),
                ip: entry.ip.clone(),
                class: entry.class,
                status: state.store.status(&entry.name),
            })
            .collect::<Vec<_>>())
    })
    .await?;

    Ok(Json(servers))
}

pub async fn get_logs(
    State(state): State<AppState>,
    Path(server): Path<String>,
    Query(query): Query<DateQuery>,
) -> Result<Json<LogsResponse>, ApiError> {
    state.registry.require(&server)?;
    let date = query.date_or_today();
    debug!("Viewing logs for {} on {}", server, date);

    let logs = blocking(move || {
        if let Err(e) = state.store.ensure_month_dir(&date) {
            warn!("Could not create month directory for {}: {}", date, e);
        }
        state.store.view_lines(&server, &date)
    })
    .await?;

    Ok(Json(LogsResponse { logs }))
}

pub async fn download_log(
    State(state): State<AppState>,
    Path(server): Path<String>,
    Query(query): Query<DateQuery>,
) -> Result<Response, ApiError> {
    state.registry.require(&server)?;
    let date = query.date_or_today();

    let log = blocking(move || state.store.open(&server, &date)).await?;
    debug!("Sending {} ({} bytes)", log.file_name, log.len);

    let stream = ReaderStream::new(tokio::fs::File::from_std(log.file));
    let disposition = format!(
        "attachment; filename=\"{}\"",
        log.file_name.replace(['"', '\\'], "_")
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
            (header::CONTENT_LENGTH, log.len.to_string()),
        ],
        Body::from_stream(stream),
    )
        .into_response())
}

pub async fn compare_logs(
    State(state): State<AppState>,
    Query(query): Query<CompareQuery>,
) -> Result<Json<CompareResponse>, ApiError> {
    let non_empty = |v: Option<String>| v.filter(|s| !s.is_empty());
    let (Some(server1), Some(server2), Some(date)) = (
        non_empty(query.server1),
        non_empty(query.server2),
        non_empty(query.date),
    ) else {
        return Err(ApiError::MissingParameters);
    };

    state.registry.require(&server1)?;
    state.registry.require(&server2)?;
    let date = LogDate::new(date);

    let diff = blocking(move || state.store.compare(&server1, &server2, &date)).await?;

    Ok(Json(CompareResponse {
        diff: diff.into_iter().map(DiffView::from).collect(),
    }))
}

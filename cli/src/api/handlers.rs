//! Route handlers. Each one is a thin adapter onto an application service.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::Utc;
use serde_json::{Value, json};
use shortcut_common::{
    ExecuteRequest, ExecuteResponse, HealthResponse, ShortcutList, SystemInfo,
};

use super::ApiState;
use super::error::ApiError;
use crate::application::services::dispatch::dispatch;
use crate::application::services::{shortcut_crud, system_info as host};
use crate::domain::{ExecutionOutcome, ExecutionResult};

type ApiResult<T> = Result<T, ApiError>;

fn respond(result: &ExecutionResult) -> (StatusCode, Json<ExecuteResponse>) {
    let status = if result.outcome == ExecutionOutcome::Rejected {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::OK
    };
    (status, Json(result.to_response()))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now(),
    })
}

pub async fn system_info() -> ApiResult<Json<SystemInfo>> {
    Ok(Json(host::system_info()?))
}

pub async fn execute(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<ExecuteRequest>,
) -> (StatusCode, Json<ExecuteResponse>) {
    let result = dispatch(&state.launcher, &request, &state.settings).await;
    respond(&result)
}

pub async fn list_shortcuts(State(state): State<Arc<ApiState>>) -> ApiResult<Json<ShortcutList>> {
    let shortcuts = shortcut_crud::list(&state.store, None).await?;
    Ok(Json(ShortcutList {
        success: Some(true),
        shortcuts,
    }))
}

pub async fn save_shortcuts(
    State(state): State<Arc<ApiState>>,
    Json(body): Json<ShortcutList>,
) -> ApiResult<Json<Value>> {
    let _guard = state.store_lock.lock().await;
    shortcut_crud::replace_all(&state.store, &body.shortcuts).await?;
    tracing::info!(count = body.shortcuts.len(), "shortcuts saved");
    Ok(Json(json!({ "success": true })))
}

/// Stamp and dispatch a stored shortcut. The store lock covers the stamp
/// only, never the run.
pub async fn execute_shortcut(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> ApiResult<(StatusCode, Json<ExecuteResponse>)> {
    let record = {
        let _guard = state.store_lock.lock().await;
        shortcut_crud::touch(&state.store, &id).await?
    };
    let result = dispatch(&state.launcher, &record.to_request(), &state.settings).await;
    Ok(respond(&result))
}

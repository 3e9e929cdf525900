use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::kind::ShortcutKind;

/// Body of `POST /api/execute`.
///
/// `executable` and `type` are accepted as aliases so that payloads written
/// by older clients keep working.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteRequest {
    #[serde(default, alias = "executable")]
    pub target: String,
    #[serde(default)]
    pub parameters: String,
    #[serde(default, alias = "type")]
    pub kind: ShortcutKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,
}

/// Result payload returned for every dispatched request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// A stored shortcut.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShortcutRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(alias = "executable")]
    pub target: String,
    #[serde(default)]
    pub parameters: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, alias = "type")]
    pub kind: ShortcutKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used: Option<DateTime<Utc>>,
}

impl ShortcutRecord {
    /// Build the execution request this shortcut stands for.
    #[must_use]
    pub fn to_request(&self) -> ExecuteRequest {
        ExecuteRequest {
            target: self.target.clone(),
            parameters: self.parameters.clone(),
            kind: self.kind,
            working_directory: self.working_directory.clone(),
        }
    }
}

/// Body of `GET /api/shortcuts` and `POST /api/shortcuts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShortcutList {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default)]
    pub shortcuts: Vec<ShortcutRecord>,
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

/// Body of `GET /api/system-info`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SystemInfo {
    pub platform: String,
    pub arch: String,
    pub version: String,
    pub cwd: String,
}

//! Department Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Department record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Annual budget, never negative
    pub budget: f64,
    /// Weak reference to a user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// Create department payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DepartmentCreate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub budget: Option<f64>,
    pub manager_id: Option<i64>,
}

/// Update department payload (omitted fields keep their value)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DepartmentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    /// Omitted keeps the manager, `null` removes it
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub manager_id: Option<Option<i64>>,
}

//! Employee Model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Employment status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    #[default]
    Active,
    Inactive,
    Terminated,
}

/// Employee record
///
/// `department_id` is a weak reference: it is not checked against the
/// department store. `department_name` is a snapshot taken at write time and
/// does not follow later department renames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    /// Business code, e.g. `EMP001` (not unique)
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub department_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_name: Option<String>,
    pub salary: f64,
    pub hire_date: NaiveDate,
    pub status: EmployeeStatus,
    pub address: String,
    pub emergency_contact: String,
    pub emergency_phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create employee payload
///
/// Required fields are optional at the serde level so that a missing field
/// is reported as a field-level validation error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeCreate {
    pub employee_id: Option<String>,
    pub name: Option<String>,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub department_id: Option<i64>,
    pub department_name: Option<String>,
    pub salary: Option<f64>,
    pub hire_date: Option<NaiveDate>,
    pub status: EmployeeStatus,
    pub address: String,
    pub emergency_contact: String,
    pub emergency_phone: String,
}

/// Update employee payload (omitted fields keep their value)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EmployeeStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_phone: Option<String>,
}

/// Employee head-count view, recomputed on every request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeStatistics {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub terminated: usize,
    /// Department name -> head count; employees without a name fall under `"unassigned"`
    pub department_stats: BTreeMap<String, usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_payload_accepts_partial_json() {
        let payload: EmployeeCreate = serde_json::from_str(
            r#"{"employeeId":"EMP100","name":"Ada","departmentId":2,"salary":9000,"hireDate":"2024-02-01"}"#,
        )
        .unwrap();

        assert_eq!(payload.employee_id.as_deref(), Some("EMP100"));
        assert_eq!(payload.department_id, Some(2));
        assert_eq!(payload.status, EmployeeStatus::Active);
        assert_eq!(payload.hire_date, NaiveDate::from_ymd_opt(2024, 2, 1));
        assert!(payload.email.is_empty());
    }

    #[test]
    fn test_statistics_json_shape() {
        let mut stats = EmployeeStatistics {
            total: 1,
            active: 1,
            ..Default::default()
        };
        stats.department_stats.insert("unassigned".to_string(), 1);

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["departmentStats"]["unassigned"], 1);
        assert_eq!(json["terminated"], 0);
    }
}

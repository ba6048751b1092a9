//! Employee Store

use chrono::{DateTime, NaiveDate, Utc};
use shared::models::{Employee, EmployeeCreate, EmployeeStatus, EmployeeUpdate};

use super::{Entity, MemoryStore};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_non_negative,
    validate_optional_email, validate_required_text, validate_text_len,
};
use crate::utils::{AppError, AppResult, ErrorCode};

pub type EmployeeStore = MemoryStore<Employee>;

/// Store-level employee patch
///
/// `department_name` is resolved by the caller: `Some(None)` clears the
/// snapshot, `None` keeps it.
#[derive(Debug, Clone, Default)]
pub struct EmployeePatch {
    pub fields: EmployeeUpdate,
    pub department_name: Option<Option<String>>,
}

impl From<EmployeeUpdate> for EmployeePatch {
    fn from(mut fields: EmployeeUpdate) -> Self {
        let department_name = fields.department_name.take().map(Some);
        Self {
            fields,
            department_name,
        }
    }
}

impl Entity for Employee {
    type Create = EmployeeCreate;
    type Patch = EmployeePatch;

    const RESOURCE: &'static str = "Employee";

    fn id(&self) -> i64 {
        self.id
    }

    fn build(id: i64, data: EmployeeCreate, now: DateTime<Utc>) -> AppResult<Self> {
        let employee_id = data.employee_id.unwrap_or_default();
        let name = data.name.unwrap_or_default();
        validate_required_text(&employee_id, "employeeId", MAX_SHORT_TEXT_LEN)?;
        validate_required_text(&name, "name", MAX_NAME_LEN)?;
        let department_id = data
            .department_id
            .ok_or_else(|| AppError::required("departmentId"))?;

        Ok(Self {
            id,
            employee_id,
            name,
            email: data.email,
            phone: data.phone,
            position: data.position,
            department_id,
            department_name: data.department_name,
            salary: data.salary.unwrap_or(0.0),
            hire_date: data.hire_date.unwrap_or_else(|| now.date_naive()),
            status: data.status,
            address: data.address,
            emergency_contact: data.emergency_contact,
            emergency_phone: data.emergency_phone,
            created_at: now,
            updated_at: now,
        })
    }

    fn apply(&mut self, patch: EmployeePatch, now: DateTime<Utc>) {
        let EmployeeUpdate {
            employee_id,
            name,
            email,
            phone,
            position,
            department_id,
            department_name: _,
            salary,
            hire_date,
            status,
            address,
            emergency_contact,
            emergency_phone,
        } = patch.fields;

        if let Some(v) = employee_id {
            self.employee_id = v;
        }
        if let Some(v) = name {
            self.name = v;
        }
        if let Some(v) = email {
            self.email = v;
        }
        if let Some(v) = phone {
            self.phone = v;
        }
        if let Some(v) = position {
            self.position = v;
        }
        if let Some(v) = department_id {
            self.department_id = v;
        }
        if let Some(v) = patch.department_name {
            self.department_name = v;
        }
        if let Some(v) = salary {
            self.salary = v;
        }
        if let Some(v) = hire_date {
            self.hire_date = v;
        }
        if let Some(v) = status {
            self.status = v;
        }
        if let Some(v) = address {
            self.address = v;
        }
        if let Some(v) = emergency_contact {
            self.emergency_contact = v;
        }
        if let Some(v) = emergency_phone {
            self.emergency_phone = v;
        }
        self.updated_at = now;
    }

    fn validate(&self) -> AppResult<()> {
        validate_required_text(&self.employee_id, "employeeId", MAX_SHORT_TEXT_LEN)?;
        validate_required_text(&self.name, "name", MAX_NAME_LEN)?;
        validate_optional_email(&self.email, "email")?;
        validate_text_len(&self.phone, "phone", MAX_SHORT_TEXT_LEN)?;
        validate_text_len(&self.position, "position", MAX_SHORT_TEXT_LEN)?;
        validate_text_len(&self.address, "address", MAX_NOTE_LEN)?;
        validate_text_len(&self.emergency_contact, "emergencyContact", MAX_NAME_LEN)?;
        validate_text_len(&self.emergency_phone, "emergencyPhone", MAX_SHORT_TEXT_LEN)?;
        validate_non_negative(self.salary, "salary")
    }

    fn not_found(id: i64) -> AppError {
        AppError::with_message(
            ErrorCode::EmployeeNotFound,
            format!("Employee {} not found", id),
        )
    }
}

impl EmployeeStore {
    /// Store holding one active employee per seed department
    pub fn seeded() -> Self {
        let now = Utc::now();
        let seed = |id: i64,
                    code: &str,
                    name: &str,
                    email: &str,
                    position: &str,
                    (department_id, department_name): (i64, &str),
                    salary: f64,
                    hire_date: NaiveDate| Employee {
            id,
            employee_id: code.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            phone: format!("1380000000{id}"),
            position: position.to_string(),
            department_id,
            department_name: Some(department_name.to_string()),
            salary,
            hire_date,
            status: EmployeeStatus::Active,
            address: String::new(),
            emergency_contact: String::new(),
            emergency_phone: String::new(),
            created_at: now,
            updated_at: now,
        };

        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN);

        Self::with_rows(vec![
            seed(
                1,
                "EMP001",
                "Zhang San",
                "zhangsan@hr.local",
                "Senior Engineer",
                (1, "Engineering"),
                15_000.0,
                date(2022, 3, 15),
            ),
            seed(
                2,
                "EMP002",
                "Li Si",
                "lisi@hr.local",
                "Product Manager",
                (2, "Product"),
                18_000.0,
                date(2021, 7, 1),
            ),
            seed(
                3,
                "EMP003",
                "Wang Wu",
                "wangwu@hr.local",
                "Operations Specialist",
                (3, "Operations"),
                12_000.0,
                date(2023, 1, 10),
            ),
        ])
    }

    /// Employees whose `department_id` equals `department_id`
    ///
    /// The department itself is not looked up; an unknown id yields an empty list.
    pub fn find_by_department(&self, department_id: i64) -> Vec<Employee> {
        self.find_where(|e| e.department_id == department_id)
    }
}

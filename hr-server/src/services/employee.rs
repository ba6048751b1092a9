//! Employee Service

use std::sync::Arc;

use shared::models::{Employee, EmployeeCreate, EmployeeStatistics, EmployeeStatus, EmployeeUpdate};

use crate::store::{DepartmentStore, EmployeePatch, EmployeeStore};
use crate::utils::AppResult;

/// Statistics bucket for employees without a department name
pub const UNASSIGNED_DEPARTMENT: &str = "unassigned";

/// Employee writes that need the department store, plus statistics
///
/// The department reference is soft: an unknown `departmentId` is stored as
/// given. When the payload carries no `departmentName` and the department
/// exists, its current name is copied onto the employee; moving to an unknown
/// department leaves the employee without a name. Later renames are not
/// propagated.
#[derive(Clone)]
pub struct EmployeeService {
    employees: Arc<EmployeeStore>,
    departments: Arc<DepartmentStore>,
}

impl EmployeeService {
    pub fn new(employees: Arc<EmployeeStore>, departments: Arc<DepartmentStore>) -> Self {
        Self {
            employees,
            departments,
        }
    }

    pub fn create(&self, mut data: EmployeeCreate) -> AppResult<Employee> {
        if data.department_name.is_none() {
            data.department_name = data
                .department_id
                .and_then(|id| self.departments.name_of(id));
        }
        self.employees.create(data)
    }

    /// Update an employee
    ///
    /// A new `departmentId` without a name takes the department's current
    /// name, or drops the old snapshot when the department is unknown.
    pub fn update(&self, id: i64, update: EmployeeUpdate) -> AppResult<Employee> {
        let department_id = update.department_id;
        let mut patch = EmployeePatch::from(update);
        if patch.department_name.is_none() {
            patch.department_name =
                department_id.map(|dept_id| self.departments.name_of(dept_id));
        }
        self.employees.update(id, patch)
    }

    /// Head counts by status and by department name, from a fresh snapshot
    pub fn statistics(&self) -> EmployeeStatistics {
        compute_statistics(&self.employees.find_all())
    }
}

fn compute_statistics(employees: &[Employee]) -> EmployeeStatistics {
    let mut stats = EmployeeStatistics {
        total: employees.len(),
        ..Default::default()
    };

    for employee in employees {
        match employee.status {
            EmployeeStatus::Active => stats.active += 1,
            EmployeeStatus::Inactive => stats.inactive += 1,
            EmployeeStatus::Terminated => stats.terminated += 1,
        }

        let bucket = employee
            .department_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(UNASSIGNED_DEPARTMENT);
        *stats.department_stats.entry(bucket.to_string()).or_default() += 1;
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::models::DepartmentUpdate;

    fn service() -> (EmployeeService, Arc<EmployeeStore>, Arc<DepartmentStore>) {
        let employees = Arc::new(EmployeeStore::seeded());
        let departments = Arc::new(DepartmentStore::seeded());
        (
            EmployeeService::new(employees.clone(), departments.clone()),
            employees,
            departments,
        )
    }

    fn payload(department_id: i64) -> EmployeeCreate {
        EmployeeCreate {
            employee_id: Some("EMP100".to_string()),
            name: Some("Ada".to_string()),
            department_id: Some(department_id),
            salary: Some(9_000.0),
            hire_date: NaiveDate::from_ymd_opt(2024, 1, 2),
            ..Default::default()
        }
    }

    #[test]
    fn test_seed_statistics() {
        let (svc, _, _) = service();
        let stats = svc.statistics();

        assert_eq!(stats.total, 3);
        assert_eq!(stats.active, 3);
        assert_eq!(stats.inactive, 0);
        assert_eq!(stats.terminated, 0);
        assert_eq!(stats.department_stats.len(), 3);
        assert_eq!(stats.department_stats["Engineering"], 1);
        assert_eq!(stats.department_stats.values().sum::<usize>(), stats.total);
    }

    #[test]
    fn test_create_snapshots_department_name() {
        let (svc, _, departments) = service();
        let created = svc.create(payload(2)).unwrap();
        assert_eq!(created.department_name.as_deref(), Some("Product"));

        // Renames are not propagated
        departments
            .update(
                2,
                DepartmentUpdate {
                    name: Some("Product Strategy".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        let stored = svc.employees.find_by_id(created.id).unwrap();
        assert_eq!(stored.department_name.as_deref(), Some("Product"));
    }

    #[test]
    fn test_unknown_department_is_accepted_and_unassigned() {
        let (svc, employees, _) = service();
        let created = svc.create(payload(404)).unwrap();
        assert_eq!(created.department_id, 404);
        assert_eq!(created.department_name, None);
        assert_eq!(employees.len(), 4);

        let stats = svc.statistics();
        assert_eq!(stats.department_stats[UNASSIGNED_DEPARTMENT], 1);
    }

    #[test]
    fn test_explicit_department_name_wins() {
        let (svc, _, _) = service();
        let created = svc
            .create(EmployeeCreate {
                department_name: Some("Skunkworks".to_string()),
                ..payload(1)
            })
            .unwrap();
        assert_eq!(created.department_name.as_deref(), Some("Skunkworks"));
    }

    #[test]
    fn test_move_to_unknown_department_drops_name() {
        let (svc, _, _) = service();
        let updated = svc
            .update(
                1,
                EmployeeUpdate {
                    department_id: Some(404),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.department_id, 404);
        assert_eq!(updated.department_name, None);

        let stats = svc.statistics();
        assert_eq!(stats.department_stats[UNASSIGNED_DEPARTMENT], 1);
        assert!(!stats.department_stats.contains_key("Engineering"));
        assert_eq!(stats.department_stats.values().sum::<usize>(), 3);
    }

    #[test]
    fn test_update_without_department_keeps_name() {
        let (svc, _, _) = service();
        let updated = svc
            .update(
                2,
                EmployeeUpdate {
                    position: Some("Lead PM".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.department_name.as_deref(), Some("Product"));
    }

    #[test]
    fn test_update_moves_department_and_status() {
        let (svc, _, _) = service();
        let updated = svc
            .update(
                1,
                EmployeeUpdate {
                    department_id: Some(3),
                    status: Some(EmployeeStatus::Terminated),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.department_name.as_deref(), Some("Operations"));

        let stats = svc.statistics();
        assert_eq!(stats.active, 2);
        assert_eq!(stats.terminated, 1);
        assert_eq!(stats.department_stats["Operations"], 2);
        assert!(!stats.department_stats.contains_key("Engineering"));
    }
}

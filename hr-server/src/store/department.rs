//! Department Store

use chrono::{DateTime, Utc};
use shared::models::{Department, DepartmentCreate, DepartmentUpdate};

use super::{Entity, MemoryStore};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_non_negative, validate_required_amount,
    validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

pub type DepartmentStore = MemoryStore<Department>;

impl Entity for Department {
    type Create = DepartmentCreate;
    type Patch = DepartmentUpdate;

    const RESOURCE: &'static str = "Department";

    fn id(&self) -> i64 {
        self.id
    }

    fn build(id: i64, data: DepartmentCreate, now: DateTime<Utc>) -> AppResult<Self> {
        let name = data.name.unwrap_or_default();
        let description = data.description.unwrap_or_default();
        // Field order matters for the reported error: name, description, budget
        validate_required_text(&name, "name", MAX_NAME_LEN)?;
        validate_required_text(&description, "description", MAX_NOTE_LEN)?;
        let budget = validate_required_amount(data.budget, "budget")?;

        Ok(Self {
            id,
            name,
            description,
            budget,
            manager_id: data.manager_id,
            created_at: now,
        })
    }

    fn apply(&mut self, patch: DepartmentUpdate, _now: DateTime<Utc>) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(budget) = patch.budget {
            self.budget = budget;
        }
        if let Some(manager_id) = patch.manager_id {
            self.manager_id = manager_id;
        }
    }

    fn validate(&self) -> AppResult<()> {
        validate_required_text(&self.name, "name", MAX_NAME_LEN)?;
        validate_required_text(&self.description, "description", MAX_NOTE_LEN)?;
        validate_non_negative(self.budget, "budget")
    }

    fn not_found(id: i64) -> AppError {
        AppError::with_message(
            ErrorCode::DepartmentNotFound,
            format!("Department {} not found", id),
        )
    }
}

impl DepartmentStore {
    /// Store holding the three seed departments
    pub fn seeded() -> Self {
        let now = Utc::now();
        let seed = |id: i64, name: &str, description: &str, budget: f64| Department {
            id,
            name: name.to_string(),
            description: description.to_string(),
            budget,
            manager_id: None,
            created_at: now,
        };

        Self::with_rows(vec![
            seed(
                1,
                "Engineering",
                "Product development and technical support",
                500_000.0,
            ),
            seed(
                2,
                "Product",
                "Product planning and requirements management",
                300_000.0,
            ),
            seed(
                3,
                "Operations",
                "Marketing operations and user growth",
                400_000.0,
            ),
        ])
    }

    /// Current name of a department, if it exists
    pub fn name_of(&self, id: i64) -> Option<String> {
        self.find_by_id(id).map(|dept| dept.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_payload(name: &str, description: &str, budget: Option<f64>) -> DepartmentCreate {
        DepartmentCreate {
            name: Some(name.to_string()),
            description: Some(description.to_string()),
            budget,
            manager_id: None,
        }
    }

    #[test]
    fn test_seed_budgets() {
        let store = DepartmentStore::seeded();
        let budgets: Vec<(i64, f64)> = store
            .find_all()
            .into_iter()
            .map(|d| (d.id, d.budget))
            .collect();
        assert_eq!(budgets, vec![(1, 500_000.0), (2, 300_000.0), (3, 400_000.0)]);
        assert_eq!(store.name_of(2).as_deref(), Some("Product"));
        assert_eq!(store.name_of(99), None);
    }

    #[test]
    fn test_create_then_find_roundtrip() {
        let store = DepartmentStore::seeded();
        let created = store
            .create(DepartmentCreate {
                manager_id: Some(1),
                ..create_payload("Finance", "Bookkeeping", Some(120_000.0))
            })
            .unwrap();

        assert_eq!(created.id, 4);
        let found = store.find_by_id(created.id).unwrap();
        assert_eq!(found, created);
        assert_eq!(found.name, "Finance");
        assert_eq!(found.description, "Bookkeeping");
        assert_eq!(found.budget, 120_000.0);
        assert_eq!(found.manager_id, Some(1));
    }

    #[test]
    fn test_zero_budget_is_allowed() {
        let store = DepartmentStore::new();
        let created = store.create(create_payload("Legal", "Contracts", Some(0.0)));
        assert!(created.is_ok());
    }

    #[test]
    fn test_invalid_create_leaves_collection_unchanged() {
        let store = DepartmentStore::seeded();

        let cases = [
            (
                create_payload("Finance", "Books", Some(-1.0)),
                ErrorCode::ValueOutOfRange,
                "budget must be a non-negative number",
            ),
            (
                create_payload("   ", "Books", Some(1.0)),
                ErrorCode::RequiredField,
                "name is required",
            ),
            (
                create_payload("Finance", "", Some(1.0)),
                ErrorCode::RequiredField,
                "description is required",
            ),
            (
                create_payload("Finance", "Books", None),
                ErrorCode::RequiredField,
                "budget is required",
            ),
        ];

        for (payload, code, message) in cases {
            let err = store.create(payload).unwrap_err();
            assert_eq!(err.code, code);
            assert_eq!(err.message, message);
            assert_eq!(store.len(), 3);
        }
    }

    #[test]
    fn test_missing_fields_report_name_first() {
        let store = DepartmentStore::new();
        let err = store.create(DepartmentCreate::default()).unwrap_err();
        assert_eq!(err.message, "name is required");
    }

    #[test]
    fn test_update_validates_merged_record() {
        let store = DepartmentStore::seeded();
        let before = store.find_by_id(1).unwrap();

        let err = store
            .update(
                1,
                DepartmentUpdate {
                    name: Some("Platform".to_string()),
                    budget: Some(-10.0),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        // Nothing from the rejected patch is committed, not even the name
        assert_eq!(store.find_by_id(1).unwrap(), before);

        let err = store
            .update(
                1,
                DepartmentUpdate {
                    description: Some("  ".to_string()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert_eq!(err.message, "description is required");

        let updated = store
            .update(
                1,
                DepartmentUpdate {
                    budget: Some(650_000.0),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.budget, 650_000.0);
        assert_eq!(updated.name, before.name);
    }

    #[test]
    fn test_manager_can_be_set_and_removed() {
        let store = DepartmentStore::seeded();
        let set = DepartmentUpdate {
            manager_id: Some(Some(1)),
            ..Default::default()
        };
        assert_eq!(store.update(1, set).unwrap().manager_id, Some(1));

        // A patch without managerId keeps it
        let renamed = DepartmentUpdate {
            name: Some("Platform".to_string()),
            ..Default::default()
        };
        assert_eq!(store.update(1, renamed).unwrap().manager_id, Some(1));

        let cleared = DepartmentUpdate {
            manager_id: Some(None),
            ..Default::default()
        };
        assert_eq!(store.update(1, cleared).unwrap().manager_id, None);
    }

    #[test]
    fn test_empty_patch_returns_record_unchanged() {
        let store = DepartmentStore::seeded();
        let before = store.find_by_id(2).unwrap();
        let after = store.update(2, DepartmentUpdate::default()).unwrap();
        assert_eq!(after, before);
    }

    #[test]
    fn test_missing_department_errors() {
        let store = DepartmentStore::seeded();
        let err = store.update(404, DepartmentUpdate::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::DepartmentNotFound);

        store.remove(3).unwrap();
        let err = store.remove(3).unwrap_err();
        assert_eq!(err.code, ErrorCode::DepartmentNotFound);
        assert_eq!(store.len(), 2);
    }
}

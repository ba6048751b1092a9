//! In-memory Entity Stores
//!
//! Every entity type lives in its own [`MemoryStore`]: an insertion-ordered
//! collection behind one `RwLock`, seeded with fixture rows at startup.
//! Nothing is persisted; a restart drops every mutation past the seeds.
//!
//! Compound operations (validate, check the unique key, then mutate) run
//! under a single write guard, so a failed operation leaves the collection
//! exactly as it was. Stores never lock one another.

pub mod department;
pub mod employee;
pub mod user;

pub use department::DepartmentStore;
pub use employee::{EmployeePatch, EmployeeStore};
pub use user::{NewUser, UserPatch, UserStore};

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::utils::{AppError, AppResult};

/// An entity type that a [`MemoryStore`] can hold
pub trait Entity: Clone + Send + Sync + 'static {
    /// Payload accepted by [`MemoryStore::create`]
    type Create: Send;
    /// Partial payload accepted by [`MemoryStore::update`]
    type Patch: Send;

    /// Resource name used in messages and logs
    const RESOURCE: &'static str;

    fn id(&self) -> i64;

    /// Build a new entity from its create payload.
    ///
    /// Fails with a validation error for missing required fields; the store
    /// runs [`Entity::validate`] on the result afterwards.
    fn build(id: i64, data: Self::Create, now: DateTime<Utc>) -> AppResult<Self>;

    /// Shallow-merge a patch; omitted fields keep their value.
    fn apply(&mut self, patch: Self::Patch, now: DateTime<Utc>);

    /// Field constraints checked before every commit
    fn validate(&self) -> AppResult<()>;

    /// Key that must be unique across the store, if any
    fn unique_key(&self) -> Option<&str> {
        None
    }

    fn not_found(id: i64) -> AppError {
        AppError::not_found(format!("{} {}", Self::RESOURCE, id))
    }

    fn conflict(key: &str) -> AppError {
        AppError::already_exists(format!("{} '{}'", Self::RESOURCE, key))
    }
}

struct Table<T> {
    rows: Vec<T>,
    next_id: i64,
}

impl<T: Entity> Table<T> {
    fn position(&self, id: i64) -> Option<usize> {
        self.rows.iter().position(|row| row.id() == id)
    }

    /// Fails if another row (not `except`) already holds `entity`'s unique key
    fn check_unique(&self, entity: &T, except: Option<i64>) -> AppResult<()> {
        let Some(key) = entity.unique_key() else {
            return Ok(());
        };
        let clash = self
            .rows
            .iter()
            .any(|row| Some(row.id()) != except && row.unique_key() == Some(key));
        if clash {
            return Err(T::conflict(key));
        }
        Ok(())
    }
}

/// Insertion-ordered in-memory collection for one entity type
///
/// Identifiers come from a per-store counter that starts after the largest
/// seeded id, so two creates never share an id.
pub struct MemoryStore<T: Entity> {
    inner: RwLock<Table<T>>,
}

impl<T: Entity> MemoryStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_rows(Vec::new())
    }

    /// Create a store holding `rows` in the given order
    pub fn with_rows(rows: Vec<T>) -> Self {
        let next_id = rows.iter().map(T::id).max().unwrap_or(0) + 1;
        Self {
            inner: RwLock::new(Table { rows, next_id }),
        }
    }

    /// All rows in insertion order
    pub fn find_all(&self) -> Vec<T> {
        self.inner.read().rows.clone()
    }

    pub fn find_by_id(&self, id: i64) -> Option<T> {
        self.inner.read().rows.iter().find(|row| row.id() == id).cloned()
    }

    /// Rows matching `predicate`, in insertion order
    pub fn find_where<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.inner
            .read()
            .rows
            .iter()
            .filter(|row| predicate(*row))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.read().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validate and append a new entity
    pub fn create(&self, data: T::Create) -> AppResult<T> {
        let mut table = self.inner.write();
        let entity = T::build(table.next_id, data, Utc::now())?;
        entity.validate()?;
        table.check_unique(&entity, None)?;

        table.next_id += 1;
        table.rows.push(entity.clone());
        tracing::debug!(resource = T::RESOURCE, id = entity.id(), "Entity created");
        Ok(entity)
    }

    /// Merge `patch` into the stored entity
    ///
    /// The merged record is validated before it replaces the stored one.
    pub fn update(&self, id: i64, patch: T::Patch) -> AppResult<T> {
        let mut table = self.inner.write();
        let index = table.position(id).ok_or_else(|| T::not_found(id))?;

        let mut merged = table.rows[index].clone();
        merged.apply(patch, Utc::now());
        merged.validate()?;
        table.check_unique(&merged, Some(id))?;

        table.rows[index] = merged.clone();
        tracing::debug!(resource = T::RESOURCE, id, "Entity updated");
        Ok(merged)
    }

    /// Remove an entity, keeping the order of the rest
    pub fn remove(&self, id: i64) -> AppResult<()> {
        let mut table = self.inner.write();
        let index = table.position(id).ok_or_else(|| T::not_found(id))?;
        table.rows.remove(index);
        tracing::debug!(resource = T::RESOURCE, id, "Entity removed");
        Ok(())
    }
}

impl<T: Entity> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

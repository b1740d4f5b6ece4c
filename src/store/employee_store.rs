//! Employee Store Module
//!
//! Owns the employee records and the id counter behind a single reader/writer lock.

use std::collections::BTreeMap;

use tokio::sync::RwLock;
use tracing::debug;

use crate::store::{Employee, EmployeeId, PageRequest};

// == Store State ==
/// Records and counter guarded together by the store lock.
#[derive(Debug, Default)]
struct StoreState {
    /// Records keyed by their own id, iterated in ascending id order
    employees: BTreeMap<EmployeeId, Employee>,
    /// Highest id ever assigned; never decreases, so ids are not reused
    last_id: EmployeeId,
}

// == Employee Store ==
/// Thread-safe in-memory employee collection.
///
/// Reads (`get`, `list`) take shared access and run alongside each other.
/// Writes (`create`, `update`, `delete`) take exclusive access for the whole
/// operation, so no partially applied change is ever visible.
#[derive(Debug, Default)]
pub struct EmployeeStore {
    state: RwLock<StoreState>,
}

impl EmployeeStore {
    // == Constructor ==
    /// Creates an empty store whose first assigned id will be 1.
    pub fn new() -> Self {
        Self::default()
    }

    // == Create ==
    /// Inserts a record under a freshly assigned id and returns that id.
    ///
    /// Any id carried by `employee` is overwritten.
    pub async fn create(&self, employee: Employee) -> EmployeeId {
        let mut state = self.state.write().await;
        state.last_id += 1;
        let id = state.last_id;
        state.employees.insert(id, employee.with_id(id));
        debug!("Created employee {}", id);
        id
    }

    // == Get ==
    /// Returns a copy of the record with the given id, if present.
    pub async fn get(&self, id: EmployeeId) -> Option<Employee> {
        let state = self.state.read().await;
        state.employees.get(&id).cloned()
    }

    // == List ==
    /// Returns the records falling in the requested page, ordered by id.
    ///
    /// A page beyond the end of the collection, or one that selects nothing
    /// (see [`PageRequest::bounds`]), yields an empty vector.
    pub async fn list(&self, page: PageRequest) -> Vec<Employee> {
        let Some((start, end)) = page.bounds() else {
            return Vec::new();
        };

        let state = self.state.read().await;
        state
            .employees
            .values()
            .skip(start)
            .take(end - start)
            .cloned()
            .collect()
    }

    // == Update ==
    /// Replaces the record with the given id wholesale.
    ///
    /// The stored record keeps `id` regardless of the id carried by
    /// `employee`. Returns `false` without mutating anything if no such
    /// record exists.
    pub async fn update(&self, id: EmployeeId, employee: Employee) -> bool {
        let mut state = self.state.write().await;
        match state.employees.get_mut(&id) {
            Some(existing) => {
                *existing = employee.with_id(id);
                debug!("Updated employee {}", id);
                true
            }
            None => false,
        }
    }

    // == Delete ==
    /// Removes the record with the given id. Returns `false` if absent.
    pub async fn delete(&self, id: EmployeeId) -> bool {
        let mut state = self.state.write().await;
        let removed = state.employees.remove(&id).is_some();
        if removed {
            debug!("Deleted employee {}", id);
        }
        removed
    }

    // == Length ==
    /// Returns the current number of records.
    pub async fn len(&self) -> usize {
        self.state.read().await.employees.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.employees.is_empty()
    }

    // == Last Id ==
    /// Returns the highest id assigned so far, or 0 if none.
    pub async fn last_id(&self) -> EmployeeId {
        self.state.read().await.last_id
    }
}

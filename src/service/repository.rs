//! Employee repository abstraction and in-memory implementation.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::EngineResult;
use crate::models::Employee;

/// Storage abstraction for employee aggregates.
///
/// The engine never talks to storage directly; the service layer goes through
/// this trait so the backing store can be swapped without touching the
/// calculation or validation code. Implementations own concurrency control
/// for their records (the in-memory store uses last-write-wins under a
/// read-write lock).
pub trait EmployeeRepository: Send + Sync {
    /// Returns all stored employees.
    fn all(&self) -> EngineResult<Vec<Employee>>;

    /// Returns the employee with the given id, if present.
    fn get(&self, id: u32) -> EngineResult<Option<Employee>>;

    /// Stores a new employee record.
    fn insert(&self, employee: Employee) -> EngineResult<Employee>;

    /// Replaces the employee with the given id. Returns the stored record,
    /// or `None` if no employee has that id.
    fn update(&self, id: u32, employee: Employee) -> EngineResult<Option<Employee>>;

    /// Deletes the employee with the given id. Returns whether a record was
    /// removed.
    fn delete(&self, id: u32) -> EngineResult<bool>;
}

/// An in-memory employee repository backed by a `HashMap`.
///
/// Suitable for tests and in-process embedding; a real deployment would put
/// a document store behind [`EmployeeRepository`] instead.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    records: RwLock<HashMap<u32, Employee>>,
}

impl InMemoryEmployeeRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<u32, Employee>> {
        // Lock poisoning only occurs if a writer panicked; recover the map
        self.records.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<u32, Employee>> {
        self.records.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl EmployeeRepository for InMemoryEmployeeRepository {
    fn all(&self) -> EngineResult<Vec<Employee>> {
        let mut employees: Vec<Employee> = self.read().values().cloned().collect();
        employees.sort_by_key(|e| e.id);
        Ok(employees)
    }

    fn get(&self, id: u32) -> EngineResult<Option<Employee>> {
        Ok(self.read().get(&id).cloned())
    }

    fn insert(&self, employee: Employee) -> EngineResult<Employee> {
        self.write().insert(employee.id, employee.clone());
        Ok(employee)
    }

    fn update(&self, id: u32, employee: Employee) -> EngineResult<Option<Employee>> {
        let mut records = self.write();
        if !records.contains_key(&id) {
            return Ok(None);
        }
        records.insert(id, employee.clone());
        Ok(Some(employee))
    }

    fn delete(&self, id: u32) -> EngineResult<bool> {
        Ok(self.write().remove(&id).is_some())
    }
}

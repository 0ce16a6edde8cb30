//! HR vertical slice.
//!
//! [`EmployeeService`] is the seam between the HTTP surface and the data
//! access layer. It forwards every call unchanged.

mod catalog;

use entity::employees::Model as Employee;
use platform_db::{DbPool, DbResult, EmployeeDao, EmployeeInput};

pub use catalog::sample_employees;

#[derive(Clone, Debug)]
pub struct EmployeeService {
    dao: EmployeeDao,
}

impl EmployeeService {
    pub fn new(dao: EmployeeDao) -> Self {
        Self { dao }
    }

    pub fn from_pool(pool: DbPool) -> Self {
        Self::new(EmployeeDao::new(pool))
    }

    pub async fn create_employee(&self, input: EmployeeInput) -> DbResult<Employee> {
        self.dao.create(input).await
    }

    pub async fn create_employees(&self, inputs: Vec<EmployeeInput>) -> DbResult<()> {
        self.dao.create_many(inputs).await
    }

    pub async fn get_employee(&self, id: i64) -> DbResult<Employee> {
        self.dao.get(id).await
    }

    pub async fn get_employees(&self, page: i64, limit: i64) -> DbResult<Vec<Employee>> {
        self.dao.list(page, limit).await
    }

    pub async fn update_employee(&self, id: i64, input: EmployeeInput) -> DbResult<Employee> {
        self.dao.update(id, input).await
    }

    pub async fn delete_employee(&self, id: i64) -> DbResult<()> {
        self.dao.delete(id).await
    }
}

use chrono::Utc;
use entity::employees::{self, Column, Entity as Employees, Model as Employee};
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Select,
    prelude::DateTimeWithTimeZone,
    sea_query::Expr,
};
use serde::Deserialize;
use tracing::debug;

use crate::{DbError, DbPool, DbResult};

/// Writable employee fields as they arrive from callers.
///
/// `id` is only consulted by [`EmployeeDao::update`]; inserts always let the
/// store assign the identifier.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EmployeeInput {
    pub id: i64,
    pub name: Option<String>,
    pub position: Option<String>,
    pub salary: Option<f64>,
}

impl EmployeeInput {
    pub fn new(name: impl Into<String>, position: impl Into<String>, salary: f64) -> Self {
        Self {
            id: 0,
            name: Some(name.into()),
            position: Some(position.into()),
            salary: Some(salary),
        }
    }

    fn into_active_model(self, now: DateTimeWithTimeZone) -> employees::ActiveModel {
        employees::ActiveModel {
            id: NotSet,
            name: Set(self.name),
            position: Set(self.position),
            salary: Set(self.salary),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
        }
    }
}

/// Data access for the `employees` table.
///
/// Every read and update is restricted to rows whose `deleted_at` is null.
#[derive(Clone, Debug)]
pub struct EmployeeDao {
    db: DbPool,
}

impl EmployeeDao {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    fn active() -> Select<Employees> {
        Employees::find().filter(Column::DeletedAt.is_null())
    }

    pub async fn create(&self, input: EmployeeInput) -> DbResult<Employee> {
        let employee = input
            .into_active_model(now())
            .insert(&self.db)
            .await
            .inspect_err(|err| debug!(error = %err, "failed to create employee"))?;
        debug!(id = employee.id, "employee created");
        Ok(employee)
    }

    /// Inserts every input with a single multi-row statement.
    pub async fn create_many(&self, inputs: Vec<EmployeeInput>) -> DbResult<()> {
        if inputs.is_empty() {
            return Ok(());
        }
        let count = inputs.len();
        let stamp = now();
        let rows = inputs
            .into_iter()
            .map(|input| input.into_active_model(stamp));
        Employees::insert_many(rows)
            .exec_without_returning(&self.db)
            .await
            .inspect_err(|err| debug!(error = %err, "failed to create employees"))?;
        debug!(count, "employees created");
        Ok(())
    }

    pub async fn get(&self, id: i64) -> DbResult<Employee> {
        let employee = Self::active()
            .filter(Column::Id.eq(id))
            .one(&self.db)
            .await
            .inspect_err(|err| debug!(id, error = %err, "failed to get employee"))?
            .ok_or(DbError::NotFound)?;
        debug!(id, "employee retrieved");
        Ok(employee)
    }

    /// Returns one page of active employees ordered by id.
    ///
    /// `limit` is not capped: callers may ask for arbitrarily large pages.
    /// A page whose offset does not fit in an `i64` is empty.
    pub async fn list(&self, page: i64, limit: i64) -> DbResult<Vec<Employee>> {
        let limit = limit.max(0);
        let Some(offset) = page.saturating_sub(1).max(0).checked_mul(limit) else {
            debug!(page, limit, "page offset out of range");
            return Ok(Vec::new());
        };
        // Both values are non-negative and bounded by i64::MAX, which keeps
        // the bound parameters representable by every backend.
        let employees = Self::active()
            .order_by_asc(Column::Id)
            .offset(offset as u64)
            .limit(limit as u64)
            .all(&self.db)
            .await
            .inspect_err(|err| debug!(error = %err, "failed to list employees"))?;
        debug!(page, limit, count = employees.len(), "employees retrieved");
        Ok(employees)
    }

    /// Replaces name, position and salary of an active employee.
    pub async fn update(&self, id: i64, input: EmployeeInput) -> DbResult<Employee> {
        if id == 0 {
            return Err(DbError::validation("invalid employee ID"));
        }
        if id != input.id {
            return Err(DbError::validation("id and payload don't match"));
        }

        let existing = self.get(id).await?;
        let mut active: employees::ActiveModel = existing.into();
        active.name = Set(input.name);
        active.position = Set(input.position);
        active.salary = Set(input.salary);
        active.updated_at = Set(now());

        let updated = active.update(&self.db).await.map_err(|err| {
            debug!(id, error = %err, "failed to update employee");
            match err {
                DbErr::RecordNotUpdated => DbError::NotFound,
                other => other.into(),
            }
        })?;
        debug!(id, "employee updated");
        Ok(updated)
    }

    /// Soft-deletes the employee. Unknown or already deleted ids are a no-op.
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        let result = Employees::update_many()
            .col_expr(Column::DeletedAt, Expr::value(now()))
            .filter(Column::Id.eq(id))
            .filter(Column::DeletedAt.is_null())
            .exec(&self.db)
            .await
            .inspect_err(|err| debug!(id, error = %err, "failed to delete employee"))?;
        debug!(id, rows = result.rows_affected, "employee deleted");
        Ok(())
    }
}

fn now() -> DateTimeWithTimeZone {
    Utc::now().into()
}

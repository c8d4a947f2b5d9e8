//! The four console operations run by the `employee_demo` binary.

use anyhow::Result;
use mongodb::bson::oid::ObjectId;
use std::fmt;
use tracing::info;

use crate::db::Database;
use crate::models::{Employee, UpdateOutcome};
use crate::seed;

pub const DEFAULT_READ_USERNAME: &str = "PP";
pub const DEFAULT_UPDATE_USERNAME: &str = "Kong";
pub const DEFAULT_UPDATE_PASSWORD: i64 = 2222;
pub const DEFAULT_DELETE_USERNAME: &str = "PP";

/// State of a record around a single password update.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateReport {
    pub username: String,
    pub before: Option<Employee>,
    pub outcome: UpdateOutcome,
    pub after: Option<Employee>,
}

pub fn describe(employee: &Option<Employee>) -> String {
    match employee {
        Some(employee) => employee.to_string(),
        None => "None".to_string(),
    }
}

impl fmt::Display for UpdateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Before update of {}:", self.username)?;
        writeln!(f, "{}", describe(&self.before))?;
        writeln!(f, "Matched documents: {}", self.outcome.matched_count)?;
        writeln!(f, "Modified documents: {}", self.outcome.modified_count)?;
        writeln!(f, "After update:")?;
        write!(f, "{}", describe(&self.after))
    }
}

pub async fn create(db: &Database) -> Result<Vec<ObjectId>> {
    seed::seed_sample_employees(db).await
}

pub async fn read(db: &Database, username: &str) -> Result<Option<Employee>> {
    let employee = db.find_employee_by_username(username).await?;
    info!("Lookup of '{}' found {}", username, if employee.is_some() { "a record" } else { "nothing" });
    Ok(employee)
}

pub async fn update(db: &Database, username: &str, password: i64) -> Result<UpdateReport> {
    let before = db.find_employee_by_username(username).await?;
    let outcome = db.update_password_by_username(username, password).await?;
    let after = db.find_employee_by_username(username).await?;

    Ok(UpdateReport {
        username: username.to_string(),
        before,
        outcome,
        after,
    })
}

pub async fn delete(db: &Database, username: &str) -> Result<u64> {
    let deleted = db.delete_employee_by_username(username).await?;
    info!("Deleted {} record(s) named '{}'", deleted, username);
    Ok(deleted)
}

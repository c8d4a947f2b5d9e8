use anyhow::Result;
use mongodb::bson::oid::ObjectId;
use tracing::info;

use crate::db::Database;
use crate::models::Employee;

/// The fixed records inserted by the `create` demo step.
pub fn sample_employees() -> Vec<Employee> {
    vec![
        Employee::new("PP", 1122, &["Python", "FastAPI"]),
        Employee::new("Kong", 3322, &["JavaScript", "React"]),
    ]
}

pub async fn seed_sample_employees(db: &Database) -> Result<Vec<ObjectId>> {
    let employees = sample_employees();
    let ids = db.insert_employees(&employees).await?;
    info!("Inserted {} sample employees", ids.len());
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_employees() {
        let employees = sample_employees();
        assert_eq!(employees.len(), 2);

        assert_eq!(employees[0].username, "PP");
        assert_eq!(employees[0].password, 1122);
        assert_eq!(employees[0].skills, vec!["Python", "FastAPI"]);

        assert_eq!(employees[1].username, "Kong");
        assert_eq!(employees[1].password, 3322);
        assert_eq!(employees[1].skills, vec!["JavaScript", "React"]);

        assert!(employees.iter().all(|e| e.id.is_none()));
    }
}

use anyhow::{Context, Result};
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};

use crate::models::{Employee, UpdateEmployee, UpdateOutcome};
use super::Database;

pub fn username_filter(username: &str) -> Document {
    doc! { "username": username }
}

pub fn id_filter(id: ObjectId) -> Document {
    doc! { "_id": id }
}

/// `$set` for every mutable field, used by the REST update.
pub fn replace_fields_update(update: &UpdateEmployee) -> Document {
    doc! {
        "$set": {
            "username": update.username.as_str(),
            "password": update.password,
            "skills": update.skills.clone(),
        }
    }
}

pub fn password_update(password: i64) -> Document {
    doc! { "$set": { "password": password } }
}

impl Database {
    /// Inserts all records in one batch; returns the ids in input order.
    pub async fn insert_employees(&self, employees: &[Employee]) -> Result<Vec<ObjectId>> {
        let result = self
            .employees()
            .insert_many(employees)
            .await
            .context("Failed to insert employees")?;

        let mut indexed: Vec<(usize, Bson)> = result.inserted_ids.into_iter().collect();
        indexed.sort_by_key(|(index, _)| *index);

        Ok(indexed
            .into_iter()
            .filter_map(|(_, id)| id.as_object_id())
            .collect())
    }

    /// Inserts one employee, generating an ObjectId when none is set.
    pub async fn create_employee(&self, mut employee: Employee) -> Result<ObjectId> {
        let id = *employee.id.get_or_insert_with(ObjectId::new);
        self.employees()
            .insert_one(&employee)
            .await
            .context("Failed to insert employee")?;
        Ok(id)
    }

    pub async fn get_all_employees(&self) -> Result<Vec<Employee>> {
        let cursor = self
            .employees()
            .find(doc! {})
            .await
            .context("Failed to query employees")?;
        let employees: Vec<Employee> = cursor
            .try_collect()
            .await
            .context("Failed to decode employees")?;
        Ok(employees)
    }

    pub async fn get_employee_by_id(&self, id: ObjectId) -> Result<Option<Employee>> {
        let employee = self.employees().find_one(id_filter(id)).await?;
        Ok(employee)
    }

    /// First document whose `username` matches; usernames are not unique.
    pub async fn find_employee_by_username(&self, username: &str) -> Result<Option<Employee>> {
        let employee = self.employees().find_one(username_filter(username)).await?;
        Ok(employee)
    }

    pub async fn update_employee(&self, id: ObjectId, update: &UpdateEmployee) -> Result<UpdateOutcome> {
        let result = self
            .employees()
            .update_one(id_filter(id), replace_fields_update(update))
            .await
            .with_context(|| format!("Failed to update employee {}", id))?;

        Ok(UpdateOutcome {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    pub async fn update_password_by_username(&self, username: &str, password: i64) -> Result<UpdateOutcome> {
        let result = self
            .employees()
            .update_one(username_filter(username), password_update(password))
            .await
            .with_context(|| format!("Failed to update password for '{}'", username))?;

        Ok(UpdateOutcome {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    /// Returns the number of deleted documents (0 or 1).
    pub async fn delete_employee(&self, id: ObjectId) -> Result<u64> {
        let result = self
            .employees()
            .delete_one(id_filter(id))
            .await
            .with_context(|| format!("Failed to delete employee {}", id))?;
        Ok(result.deleted_count)
    }

    pub async fn delete_employee_by_username(&self, username: &str) -> Result<u64> {
        let result = self
            .employees()
            .delete_one(username_filter(username))
            .await
            .with_context(|| format!("Failed to delete employee '{}'", username))?;
        Ok(result.deleted_count)
    }
}

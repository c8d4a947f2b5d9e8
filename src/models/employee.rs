use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Employee document as stored in the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub username: String,
    pub password: i64,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl Employee {
    pub fn new<S: Into<String>>(username: S, password: i64, skills: &[&str]) -> Self {
        Self {
            id: None,
            username: username.into(),
            password,
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl std::fmt::Display for Employee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let id = self
            .id
            .map(|oid| oid.to_hex())
            .unwrap_or_else(|| "-".to_string());
        write!(
            f,
            "{{_id: {}, username: {:?}, password: {}, skills: {:?}}}",
            id, self.username, self.password, self.skills
        )
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateEmployee {
    /// Optional 24-character hex ObjectId; generated when omitted
    #[serde(default)]
    pub id: Option<String>,
    pub username: String,
    pub password: i64,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Replacement values for every mutable field of an employee.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateEmployee {
    pub username: String,
    pub password: i64,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmployeeResponse {
    /// Hex-encoded ObjectId
    pub id: String,
    pub username: String,
    pub password: i64,
    pub skills: Vec<String>,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            username: employee.username,
            password: employee.password,
            skills: employee.skills,
        }
    }
}

/// Outcome of a single-document update, mirroring the driver's counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateOutcome {
    pub matched_count: u64,
    pub modified_count: u64,
}

//! Employee entity.

use crate::EmployeeId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The mutable fields of an employee.
///
/// Create requests supply all of them; update requests replace all of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeFields {
    /// Display name. Not unique.
    pub name: String,
    /// Age as supplied by the caller. Not range-checked.
    pub age: i32,
    /// Whether the employee is active.
    pub is_active: bool,
}

impl EmployeeFields {
    /// Creates a new set of employee fields.
    #[must_use]
    pub fn new(name: impl Into<String>, age: i32, is_active: bool) -> Self {
        Self {
            name: name.into(),
            age,
            is_active,
        }
    }
}

/// A stored employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Server-assigned identifier.
    pub id: EmployeeId,
    pub name: String,
    pub age: i32,
    pub is_active: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Materializes a record from freshly assigned identity and its fields.
    #[must_use]
    pub fn from_fields(id: EmployeeId, fields: EmployeeFields, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: fields.name,
            age: fields.age,
            is_active: fields.is_active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the mutable fields of this record.
    #[must_use]
    pub fn fields(&self) -> EmployeeFields {
        EmployeeFields {
            name: self.name.clone(),
            age: self.age,
            is_active: self.is_active,
        }
    }

    /// Replaces every mutable field. The id and creation time never change.
    pub fn replace(&mut self, fields: EmployeeFields) {
        self.name = fields.name;
        self.age = fields.age;
        self.is_active = fields.is_active;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Employee {
        Employee::from_fields(
            EmployeeId::new(1),
            EmployeeFields::new("Kanishka", 24, true),
            Utc::now(),
        )
    }

    #[test]
    fn test_from_fields() {
        let employee = sample();
        assert_eq!(employee.id, EmployeeId::new(1));
        assert_eq!(employee.name, "Kanishka");
        assert_eq!(employee.age, 24);
        assert!(employee.is_active);
        assert_eq!(employee.created_at, employee.updated_at);
        assert_eq!(employee.fields(), EmployeeFields::new("Kanishka", 24, true));
    }

    #[test]
    fn test_replace_keeps_identity() {
        let mut employee = sample();
        let created_at = employee.created_at;

        employee.replace(EmployeeFields::new("Lahiru", 25, false));

        assert_eq!(employee.id, EmployeeId::new(1));
        assert_eq!(employee.created_at, created_at);
        assert_eq!(employee.name, "Lahiru");
        assert_eq!(employee.age, 25);
        assert!(!employee.is_active);
        assert!(employee.updated_at >= created_at);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["isActive"], true);
        assert!(json.get("createdAt").is_some());
        assert!(json.get("is_active").is_none());
    }
}

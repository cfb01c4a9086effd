//! Employee DTOs.

use chrono::{DateTime, Utc};
use roster_core::coerce::{active_flag, lenient_i32, optional_employee_id};
use roster_core::{Employee, EmployeeFields, EmployeeId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request to create a new employee.
///
/// An `id` in the body is ignored; the store assigns one.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    pub name: String,

    /// Integer, or a string holding one.
    #[serde(deserialize_with = "lenient_i32")]
    #[schema(value_type = i32)]
    pub age: i32,

    /// Boolean, `0`/`1`, or one of `"true"`, `"false"`, `"yes"`, `"no"`,
    /// `"active"`, `"inactive"`.
    #[serde(deserialize_with = "active_flag")]
    #[schema(value_type = bool)]
    pub is_active: bool,
}

impl CreateEmployeeRequest {
    /// Converts the request into storable fields.
    #[must_use]
    pub fn into_fields(self) -> EmployeeFields {
        EmployeeFields::new(self.name, self.age, self.is_active)
    }
}

/// Request to replace an employee's fields.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    /// Optional echo of the addressed id, as a number or a numeric string.
    /// Must match it when present.
    #[serde(default, deserialize_with = "optional_employee_id")]
    #[schema(value_type = Option<i64>)]
    pub id: Option<EmployeeId>,

    pub name: String,

    #[serde(deserialize_with = "lenient_i32")]
    #[schema(value_type = i32)]
    pub age: i32,

    #[serde(deserialize_with = "active_flag")]
    #[schema(value_type = bool)]
    pub is_active: bool,
}

impl UpdateEmployeeRequest {
    /// Converts the request into storable fields, dropping the id echo.
    #[must_use]
    pub fn into_fields(self) -> EmployeeFields {
        EmployeeFields::new(self.name, self.age, self.is_active)
    }
}

/// Employee response DTO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: EmployeeId,
    pub name: String,
    pub age: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            age: employee.age,
            is_active: employee.is_active,
            created_at: employee.created_at,
            updated_at: employee.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_accepts_canonical_body() {
        let request: CreateEmployeeRequest =
            serde_json::from_value(json!({"name": "Kanishka", "age": 24, "isActive": true})).unwrap();

        assert_eq!(request.into_fields(), EmployeeFields::new("Kanishka", 24, true));
    }

    #[test]
    fn test_create_request_accepts_form_encodings() {
        let request: CreateEmployeeRequest =
            serde_json::from_value(json!({"name": "Lahiru", "age": "23", "isActive": "inactive"}))
                .unwrap();
        assert_eq!(request.age, 23);
        assert!(!request.is_active);

        let request: CreateEmployeeRequest =
            serde_json::from_value(json!({"name": "Nuwan", "age": 30, "isActive": 1})).unwrap();
        assert!(request.is_active);
    }

    #[test]
    fn test_create_request_ignores_client_id() {
        let request: CreateEmployeeRequest =
            serde_json::from_value(json!({"id": 99, "name": "a", "age": 1, "isActive": "1"})).unwrap();
        assert!(request.is_active);
    }

    #[test]
    fn test_create_request_rejects_bad_flag() {
        for flag in [json!(2), json!("maybe"), json!(null)] {
            let result = serde_json::from_value::<CreateEmployeeRequest>(
                json!({"name": "a", "age": 1, "isActive": flag}),
            );
            assert!(result.is_err());
        }
    }

    #[test]
    fn test_create_request_rejects_missing_field() {
        let result = serde_json::from_value::<CreateEmployeeRequest>(json!({"name": "a", "age": 1}));
        assert!(result.is_err());
    }

    #[test]
    fn test_update_request_id_optional() {
        let request: UpdateEmployeeRequest =
            serde_json::from_value(json!({"name": "a", "age": 25, "isActive": false})).unwrap();
        assert!(request.id.is_none());

        let request: UpdateEmployeeRequest =
            serde_json::from_value(json!({"id": 1, "name": "a", "age": 25, "isActive": false}))
                .unwrap();
        assert_eq!(request.id, Some(EmployeeId::new(1)));
    }

    #[test]
    fn test_update_request_accepts_string_id() {
        let request: UpdateEmployeeRequest = serde_json::from_value(
            json!({"id": "1", "name": "a", "age": "25", "isActive": 0}),
        )
        .unwrap();
        assert_eq!(request.id, Some(EmployeeId::new(1)));
        assert_eq!(request.age, 25);

        let result = serde_json::from_value::<UpdateEmployeeRequest>(
            json!({"id": "abc", "name": "a", "age": 25, "isActive": 0}),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let now = Utc::now();
        let response = EmployeeResponse::from(Employee::from_fields(
            EmployeeId::new(3),
            EmployeeFields::new("Ravidu", 25, true),
            now,
        ));

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["isActive"], true);
        assert!(value.get("createdAt").is_some());
        assert!(value.get("is_active").is_none());
    }
}

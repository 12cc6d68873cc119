use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Employee row joined with its lifetime count of `Present` attendance
/// records. `present_days` is computed per query, never stored.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "employee_code": "EMP001",
        "full_name": "Aarav Sharma",
        "email": "aarav.sharma@hrms.in",
        "department": "Engineering",
        "created_at": "2026-01-15T09:00:00",
        "present_days": 22
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "EMP001")]
    pub employee_code: String,

    #[schema(example = "Aarav Sharma")]
    pub full_name: String,

    #[schema(example = "aarav.sharma@hrms.in", format = "email")]
    pub email: String,

    #[schema(example = "Engineering")]
    pub department: String,

    #[schema(value_type = String, format = "date-time")]
    pub created_at: NaiveDateTime,

    #[schema(example = 22)]
    pub present_days: i64,
}

/// Validated input for employee creation. Produced by
/// [`crate::utils::validate`] helpers from the raw request payload;
/// string fields are already trimmed.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub employee_code: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Closed attendance status set. Stored as TEXT (`Present` / `Absent`);
/// serde rejects anything else at the boundary, so no other value can
/// reach the store.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    sqlx::Type,
    strum::Display,
    ToSchema,
)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

/// Attendance record as returned to callers: the stored row plus the
/// owning employee's code and full name, denormalized for convenience.
/// Storage itself stays normalized behind the `employee_id` foreign key.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 7,
        "employee_id": 1,
        "employee_code": "EMP001",
        "full_name": "Aarav Sharma",
        "date": "2026-02-03",
        "status": "Present",
        "marked_at": "2026-02-03T09:12:00"
    })
)]
pub struct AttendanceRecord {
    #[schema(example = 7)]
    pub id: i64,

    #[schema(example = 1)]
    pub employee_id: i64,

    #[schema(example = "EMP001")]
    pub employee_code: String,

    #[schema(example = "Aarav Sharma")]
    pub full_name: String,

    #[schema(value_type = String, format = "date")]
    pub date: NaiveDate,

    pub status: AttendanceStatus,

    #[schema(value_type = String, format = "date-time")]
    pub marked_at: NaiveDateTime,
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Same-moment aggregate over the whole store, computed fresh on each
/// call. `unmarked_today` is derived by subtraction; the one-row-per-
/// employee-per-day uniqueness constraint keeps it non-negative under
/// normal operation.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "total_employees": 20,
        "present_today": 14,
        "absent_today": 3,
        "unmarked_today": 3,
        "total_attendance_records": 440
    })
)]
pub struct DashboardSummary {
    pub total_employees: i64,
    pub present_today: i64,
    pub absent_today: i64,
    pub unmarked_today: i64,
    pub total_attendance_records: i64,
}

/// One day of the weekly histogram. Days with no rows report zero for
/// both counts rather than being omitted.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({ "date": "2026-02-03", "present": 14, "absent": 3 }))]
pub struct DailyAttendance {
    #[schema(value_type = String, format = "date")]
    pub date: NaiveDate,
    pub present: i64,
    pub absent: i64,
}

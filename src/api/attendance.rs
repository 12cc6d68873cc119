use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;
use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use crate::store::attendance;

#[derive(Deserialize, Serialize, ToSchema)]
pub struct MarkAttendance {
    #[schema(example = "EMP001")]
    pub employee_code: String,
    #[schema(example = "2026-02-03", format = "date", value_type = String)]
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct AttendanceQuery {
    /// Narrow the history to one exact date.
    pub date: Option<NaiveDate>,
}

/// Mark Attendance
#[utoipa::path(
    post,
    path = "/attendance",
    request_body = MarkAttendance,
    responses(
        (status = 201, description = "Attendance recorded", body = AttendanceRecord),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "error": "not_found",
            "message": "Employee 'EMP999' not found."
        })),
        (status = 409, description = "Already marked for that date", body = Object, example = json!({
            "error": "conflict",
            "message": "Attendance for 'EMP001' on 2026-02-03 already marked."
        }))
    ),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    pool: web::Data<SqlitePool>,
    payload: web::Json<MarkAttendance>,
) -> Result<HttpResponse, ApiError> {
    let MarkAttendance { employee_code, date, status } = payload.into_inner();
    let record = attendance::mark(pool.get_ref(), &employee_code, date, status).await?;
    Ok(HttpResponse::Created().json(record))
}

/// Get Attendance by Employee
#[utoipa::path(
    get,
    path = "/attendance/{employee_code}",
    params(
        ("employee_code", Path, description = "Human-facing employee code"),
        AttendanceQuery
    ),
    responses(
        (status = 200, description = "Attendance records, newest date first", body = [AttendanceRecord]),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "error": "not_found",
            "message": "Employee 'EMP999' not found."
        }))
    ),
    tag = "Attendance"
)]
pub async fn get_attendance(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
    query: web::Query<AttendanceQuery>,
) -> Result<HttpResponse, ApiError> {
    let employee_code = path.into_inner();
    let records =
        attendance::list_for_employee(pool.get_ref(), &employee_code, query.date).await?;
    Ok(HttpResponse::Ok().json(records))
}

use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{ApiError, is_unique_violation};
use crate::model::attendance::{AttendanceRecord, AttendanceStatus};

#[derive(sqlx::FromRow)]
struct EmployeeRef {
    id: i64,
    employee_code: String,
    full_name: String,
}

async fn find_employee(
    tx: &mut sqlx::SqliteConnection,
    employee_code: &str,
) -> Result<EmployeeRef, ApiError> {
    sqlx::query_as::<_, EmployeeRef>(
        "SELECT id, employee_code, full_name FROM employees WHERE employee_code = ?",
    )
    .bind(employee_code)
    .fetch_optional(tx)
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("Employee '{}' not found.", employee_code)))
}

fn duplicate_day(employee_code: &str, date: NaiveDate) -> ApiError {
    ApiError::Conflict(format!(
        "Attendance for '{}' on {} already marked.",
        employee_code, date
    ))
}

/// Records one attendance fact for (employee, date). The duplicate-day
/// pre-check gives the friendly message; the composite unique index is
/// what actually holds under concurrent marks, and a violation there is
/// rolled back and surfaced as the same Conflict.
pub async fn mark(
    pool: &SqlitePool,
    employee_code: &str,
    date: NaiveDate,
    status: AttendanceStatus,
) -> Result<AttendanceRecord, ApiError> {
    let mut tx = pool.begin().await?;

    let employee = find_employee(&mut *tx, employee_code).await?;

    let existing = sqlx::query_scalar::<_, i64>(
        "SELECT id FROM attendance WHERE employee_id = ? AND date = ?",
    )
    .bind(employee.id)
    .bind(date)
    .fetch_optional(&mut *tx)
    .await?;
    if existing.is_some() {
        return Err(duplicate_day(employee_code, date));
    }

    let marked_at = Utc::now().naive_utc();
    let result = sqlx::query(
        "INSERT INTO attendance (employee_id, date, status, marked_at) VALUES (?, ?, ?, ?)",
    )
    .bind(employee.id)
    .bind(date)
    .bind(status)
    .bind(marked_at)
    .execute(&mut *tx)
    .await;

    let result = match result {
        Ok(res) => res,
        Err(e) if is_unique_violation(&e) => {
            tx.rollback().await?;
            return Err(duplicate_day(employee_code, date));
        }
        Err(e) => return Err(e.into()),
    };

    let id = result.last_insert_rowid();
    tx.commit().await?;

    debug!(employee_code, %date, %status, "Attendance marked");

    Ok(AttendanceRecord {
        id,
        employee_id: employee.id,
        employee_code: employee.employee_code,
        full_name: employee.full_name,
        date,
        status,
        marked_at,
    })
}

/// One employee's attendance history, newest date first, optionally
/// narrowed to a single exact date. `NotFound` for an unknown code even
/// when the result would just be empty. The existence check and the
/// history fetch share one transaction so a concurrent delete cannot
/// slip between them.
pub async fn list_for_employee(
    pool: &SqlitePool,
    employee_code: &str,
    date: Option<NaiveDate>,
) -> Result<Vec<AttendanceRecord>, ApiError> {
    let mut tx = pool.begin().await?;
    let employee = find_employee(&mut *tx, employee_code).await?;

    let mut sql = String::from(
        "SELECT a.id, a.employee_id, e.employee_code, e.full_name, a.date, a.status, a.marked_at
         FROM attendance a
         JOIN employees e ON e.id = a.employee_id
         WHERE a.employee_id = ?",
    );
    if date.is_some() {
        sql.push_str(" AND a.date = ?");
    }
    sql.push_str(" ORDER BY a.date DESC");

    let mut query = sqlx::query_as::<_, AttendanceRecord>(&sql).bind(employee.id);
    if let Some(d) = date {
        query = query.bind(d);
    }

    let records = query.fetch_all(&mut *tx).await?;
    tx.commit().await?;
    Ok(records)
}

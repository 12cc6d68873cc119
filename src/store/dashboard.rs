use std::collections::BTreeMap;

use chrono::{Duration, Local, NaiveDate};
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::model::attendance::AttendanceStatus;
use crate::model::dashboard::{DailyAttendance, DashboardSummary};

async fn count_by_status(
    conn: &mut sqlx::SqliteConnection,
    date: NaiveDate,
    status: AttendanceStatus,
) -> Result<i64, ApiError> {
    let count = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM attendance WHERE date = ? AND status = ?",
    )
    .bind(date)
    .bind(status)
    .fetch_one(conn)
    .await?;
    Ok(count)
}

/// Today's snapshot, computed fresh on every call. All counts run in
/// one transaction so a concurrent write cannot skew them against each
/// other. `unmarked_today` falls out by subtraction: the (employee,
/// date) uniqueness constraint caps attendance at one row per employee
/// per day, so the difference is exactly the employees with no row
/// today.
pub async fn summary(pool: &SqlitePool) -> Result<DashboardSummary, ApiError> {
    let today = Local::now().date_naive();

    let mut tx = pool.begin().await?;

    let total_employees = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employees")
        .fetch_one(&mut *tx)
        .await?;
    let present_today = count_by_status(&mut *tx, today, AttendanceStatus::Present).await?;
    let absent_today = count_by_status(&mut *tx, today, AttendanceStatus::Absent).await?;
    let total_attendance_records =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM attendance")
            .fetch_one(&mut *tx)
            .await?;

    tx.commit().await?;

    Ok(DashboardSummary {
        total_employees,
        present_today,
        absent_today,
        unmarked_today: total_employees - present_today - absent_today,
        total_attendance_records,
    })
}

/// Present/absent counts per day for the 7-day window ending today,
/// ascending. One grouped query overlaid on a zero-filled map, so every
/// day of the window appears exactly once no matter how sparse the data.
pub async fn weekly(pool: &SqlitePool) -> Result<Vec<DailyAttendance>, ApiError> {
    let today = Local::now().date_naive();
    let start = today - Duration::days(6);

    let mut days: BTreeMap<NaiveDate, (i64, i64)> = (0..7)
        .map(|offset| (start + Duration::days(offset), (0, 0)))
        .collect();

    let mut tx = pool.begin().await?;
    let rows = sqlx::query_as::<_, (NaiveDate, AttendanceStatus, i64)>(
        "SELECT date, status, COUNT(*) FROM attendance
         WHERE date BETWEEN ? AND ?
         GROUP BY date, status",
    )
    .bind(start)
    .bind(today)
    .fetch_all(&mut *tx)
    .await?;
    tx.commit().await?;

    for (date, status, count) in rows {
        if let Some(entry) = days.get_mut(&date) {
            match status {
                AttendanceStatus::Present => entry.0 = count,
                AttendanceStatus::Absent => entry.1 = count,
            }
        }
    }

    Ok(days
        .into_iter()
        .map(|(date, (present, absent))| DailyAttendance { date, present, absent })
        .collect())
}

use actix_web::{HttpResponse, web};
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::model::dashboard::{DailyAttendance, DashboardSummary};
use crate::store::dashboard;

/// Dashboard Summary
#[utoipa::path(
    get,
    path = "/dashboard",
    responses(
        (status = 200, description = "Today's snapshot counts", body = DashboardSummary)
    ),
    tag = "Dashboard"
)]
pub async fn get_summary(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let summary = dashboard::summary(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(summary))
}

/// Weekly Attendance Histogram
#[utoipa::path(
    get,
    path = "/dashboard/weekly",
    responses(
        (status = 200, description = "Seven days ending today, ascending, zero-filled", body = [DailyAttendance])
    ),
    tag = "Dashboard"
)]
pub async fn get_weekly(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let days = dashboard::weekly(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(days))
}

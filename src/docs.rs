use utoipa::OpenApi;

use crate::api::attendance::MarkAttendance;
use crate::api::employee::CreateEmployee;
use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use crate::model::dashboard::{DailyAttendance, DashboardSummary};
use crate::model::employee::Employee;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRMS Lite API",
        description = "A lightweight Human Resource Management System API",
        version = "1.0.0"
    ),
    paths(
        crate::api::employee::list_employees,
        crate::api::employee::create_employee,
        crate::api::employee::delete_employee,
        crate::api::attendance::mark_attendance,
        crate::api::attendance::get_attendance,
        crate::api::dashboard::get_summary,
        crate::api::dashboard::get_weekly,
    ),
    components(schemas(
        Employee,
        CreateEmployee,
        AttendanceRecord,
        AttendanceStatus,
        MarkAttendance,
        DashboardSummary,
        DailyAttendance,
    )),
    tags(
        (name = "Employees", description = "Employee management"),
        (name = "Attendance", description = "Daily attendance tracking"),
        (name = "Dashboard", description = "Aggregated attendance metrics")
    )
)]
pub struct ApiDoc;

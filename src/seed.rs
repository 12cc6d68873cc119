use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use sqlx::SqlitePool;
use tracing::info;

use crate::model::attendance::AttendanceStatus;

const EMPLOYEES: [(&str, &str, &str, &str); 20] = [
    ("EMP001", "Aarav Sharma", "aarav.sharma@hrms.in", "Engineering"),
    ("EMP002", "Priya Patel", "priya.patel@hrms.in", "Engineering"),
    ("EMP003", "Rohan Mehta", "rohan.mehta@hrms.in", "Engineering"),
    ("EMP004", "Ananya Gupta", "ananya.gupta@hrms.in", "Engineering"),
    ("EMP005", "Vikram Singh", "vikram.singh@hrms.in", "Design"),
    ("EMP006", "Neha Reddy", "neha.reddy@hrms.in", "Design"),
    ("EMP007", "Arjun Nair", "arjun.nair@hrms.in", "Design"),
    ("EMP008", "Kavya Iyer", "kavya.iyer@hrms.in", "Marketing"),
    ("EMP009", "Aditya Joshi", "aditya.joshi@hrms.in", "Marketing"),
    ("EMP010", "Sneha Kulkarni", "sneha.kulkarni@hrms.in", "Marketing"),
    ("EMP011", "Rahul Verma", "rahul.verma@hrms.in", "Finance"),
    ("EMP012", "Ishita Bose", "ishita.bose@hrms.in", "Finance"),
    ("EMP013", "Manish Tiwari", "manish.tiwari@hrms.in", "Finance"),
    ("EMP014", "Deepika Rao", "deepika.rao@hrms.in", "HR"),
    ("EMP015", "Karthik Menon", "karthik.menon@hrms.in", "HR"),
    ("EMP016", "Pooja Deshmukh", "pooja.deshmukh@hrms.in", "Operations"),
    ("EMP017", "Siddharth Chopra", "siddharth.chopra@hrms.in", "Operations"),
    ("EMP018", "Meera Krishnan", "meera.krishnan@hrms.in", "Operations"),
    ("EMP019", "Amit Saxena", "amit.saxena@hrms.in", "Engineering"),
    ("EMP020", "Divya Thakur", "divya.thakur@hrms.in", "Design"),
];

const ATTENDANCE_DAYS: i64 = 30;

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Deterministic presence pattern, roughly 85% present.
fn is_present(employee_index: usize, day_offset: i64) -> bool {
    (employee_index as i64 * 7 + day_offset * 3) % 20 < 17
}

/// Populates demo data: 20 employees with the last 30 days of weekday
/// attendance. No-op when employees already exist, so it is safe to run
/// on every startup.
pub async fn seed_db(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let existing = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employees")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        info!(existing, "Database already seeded, skipping");
        return Ok(());
    }

    let today = Local::now().date_naive();
    let created_at = NaiveDate::from_ymd_opt(2026, 1, 15)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();

    let mut tx = pool.begin().await?;
    let mut attendance_rows = 0u32;

    for (i, (code, name, email, department)) in EMPLOYEES.iter().enumerate() {
        let result = sqlx::query(
            "INSERT INTO employees (employee_code, full_name, email, department, created_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(code)
        .bind(name)
        .bind(email)
        .bind(department)
        .bind(created_at)
        .execute(&mut *tx)
        .await?;
        let employee_id = result.last_insert_rowid();

        for day_offset in 0..ATTENDANCE_DAYS {
            let date = today - Duration::days(day_offset);
            if is_weekend(date) {
                continue;
            }
            let status = if is_present(i, day_offset) {
                AttendanceStatus::Present
            } else {
                AttendanceStatus::Absent
            };
            let marked_at = date
                .and_hms_opt(9, ((i as i64 + day_offset) % 31) as u32, 0)
                .unwrap();

            sqlx::query(
                "INSERT INTO attendance (employee_id, date, status, marked_at)
                 VALUES (?, ?, ?, ?)",
            )
            .bind(employee_id)
            .bind(date)
            .bind(status)
            .bind(marked_at)
            .execute(&mut *tx)
            .await?;
            attendance_rows += 1;
        }
    }

    tx.commit().await?;
    info!(
        employees = EMPLOYEES.len(),
        attendance_rows, "Seeded demo data"
    );
    Ok(())
}

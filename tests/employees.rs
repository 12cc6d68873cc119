use chrono::Local;
use hrms_lite::db::init_db;
use hrms_lite::error::ApiError;
use hrms_lite::model::attendance::AttendanceStatus;
use hrms_lite::model::employee::NewEmployee;
use hrms_lite::store::{attendance, employees};
use sqlx::SqlitePool;

async fn test_pool() -> SqlitePool {
    init_db("sqlite::memory:").await.unwrap()
}

fn new_employee(code: &str, name: &str, email: &str, department: &str) -> NewEmployee {
    NewEmployee {
        employee_code: code.to_string(),
        full_name: name.to_string(),
        email: email.to_string(),
        department: department.to_string(),
    }
}

#[actix_web::test]
async fn create_returns_zero_present_days() {
    let pool = test_pool().await;

    let created = employees::create(
        &pool,
        new_employee("EMP100", "Test User", "t@x.com", "QA"),
    )
    .await
    .unwrap();

    assert_eq!(created.employee_code, "EMP100");
    assert_eq!(created.full_name, "Test User");
    assert_eq!(created.present_days, 0);
}

#[actix_web::test]
async fn duplicate_code_is_a_conflict() {
    let pool = test_pool().await;

    employees::create(&pool, new_employee("EMP001", "First", "a@x.com", "QA"))
        .await
        .unwrap();
    let err = employees::create(&pool, new_employee("EMP001", "Second", "b@x.com", "QA"))
        .await
        .unwrap_err();

    match err {
        ApiError::Conflict(msg) => assert!(msg.contains("EMP001"), "{msg}"),
        other => panic!("expected Conflict, got {other:?}"),
    }
}

#[actix_web::test]
async fn duplicate_email_is_a_conflict_naming_the_email() {
    let pool = test_pool().await;

    employees::create(&pool, new_employee("EMP001", "First", "same@x.com", "QA"))
        .await
        .unwrap();
    let err = employees::create(&pool, new_employee("EMP002", "Second", "same@x.com", "QA"))
        .await
        .unwrap_err();

    match err {
        ApiError::Conflict(msg) => assert!(msg.contains("same@x.com"), "{msg}"),
        other => panic!("expected Conflict, got {other:?}"),
    }
}

#[actix_web::test]
async fn list_is_newest_first_and_counts_present_days() {
    let pool = test_pool().await;
    let today = Local::now().date_naive();

    employees::create(&pool, new_employee("EMP001", "Older", "a@x.com", "QA"))
        .await
        .unwrap();
    employees::create(&pool, new_employee("EMP002", "Newer", "b@x.com", "QA"))
        .await
        .unwrap();

    // Two present days and one absent day for EMP001.
    attendance::mark(&pool, "EMP001", today, AttendanceStatus::Present)
        .await
        .unwrap();
    attendance::mark(
        &pool,
        "EMP001",
        today.pred_opt().unwrap(),
        AttendanceStatus::Present,
    )
    .await
    .unwrap();
    attendance::mark(
        &pool,
        "EMP001",
        today.pred_opt().unwrap().pred_opt().unwrap(),
        AttendanceStatus::Absent,
    )
    .await
    .unwrap();

    let listed = employees::list(&pool).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].employee_code, "EMP002");
    assert_eq!(listed[0].present_days, 0);
    assert_eq!(listed[1].employee_code, "EMP001");
    assert_eq!(listed[1].present_days, 2);
}

#[actix_web::test]
async fn created_employee_is_readable_back() {
    let pool = test_pool().await;

    let created = employees::create(
        &pool,
        new_employee("EMP001", "Test User", "t@x.com", "QA"),
    )
    .await
    .unwrap();
    assert_eq!(created.department, "QA");

    let listed = employees::list(&pool).await.unwrap();
    assert_eq!(listed[0].full_name, "Test User");
    assert_eq!(listed[0].email, "t@x.com");
    assert_eq!(listed[0].id, created.id);
}

#[actix_web::test]
async fn storage_constraints_catch_racing_duplicates() {
    let pool = test_pool().await;

    employees::create(&pool, new_employee("EMP001", "First", "a@x.com", "QA"))
        .await
        .unwrap();

    // Writers that slipped past the application pre-checks: both unique
    // indexes must reject the rows at the storage layer.
    let insert = "INSERT INTO employees (employee_code, full_name, email, department, created_at)
                  VALUES (?, 'Second', ?, 'QA', datetime('now'))";

    let err = sqlx::query(insert)
        .bind("EMP001")
        .bind("b@x.com")
        .execute(&pool)
        .await
        .unwrap_err();
    assert!(hrms_lite::error::is_unique_violation(&err));

    let err = sqlx::query(insert)
        .bind("EMP002")
        .bind("a@x.com")
        .execute(&pool)
        .await
        .unwrap_err();
    assert!(hrms_lite::error::is_unique_violation(&err));

    let rows = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employees")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 1);
}

#[actix_web::test]
async fn delete_unknown_code_is_not_found() {
    let pool = test_pool().await;

    let err = employees::delete(&pool, "EMP999").await.unwrap_err();
    match err {
        ApiError::NotFound(msg) => assert!(msg.contains("EMP999"), "{msg}"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[actix_web::test]
async fn delete_cascades_to_attendance() {
    let pool = test_pool().await;
    let today = Local::now().date_naive();

    employees::create(&pool, new_employee("EMP100", "Test User", "t@x.com", "QA"))
        .await
        .unwrap();
    attendance::mark(&pool, "EMP100", today, AttendanceStatus::Present)
        .await
        .unwrap();

    employees::delete(&pool, "EMP100").await.unwrap();

    // No orphaned attendance rows survive the owner.
    let rows = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM attendance")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 0);

    // Querying attendance for the deleted code is NotFound, not empty.
    let err = attendance::list_for_employee(&pool, "EMP100", None)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

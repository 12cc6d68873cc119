use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{ApiError, is_unique_violation};
use crate::model::employee::{Employee, NewEmployee};

/// Lifetime `present_days` is computed with an explicit join instead of
/// per-employee follow-up queries, so the fetch cost stays visible here.
const LIST_SQL: &str = "
SELECT e.id, e.employee_code, e.full_name, e.email, e.department, e.created_at,
       COUNT(a.id) AS present_days
FROM employees e
LEFT JOIN attendance a ON a.employee_id = e.id AND a.status = 'Present'
GROUP BY e.id
ORDER BY e.created_at DESC, e.id DESC
";

/// All employees, most recently created first.
pub async fn list(pool: &SqlitePool) -> Result<Vec<Employee>, ApiError> {
    let employees = sqlx::query_as::<_, Employee>(LIST_SQL).fetch_all(pool).await?;
    Ok(employees)
}

/// Maps a commit-time unique violation to the same Conflict the
/// pre-checks produce, picking the field from the violated index.
/// SQLite names the column, e.g. "UNIQUE constraint failed:
/// employees.email".
fn unique_conflict(e: &sqlx::Error, new: &NewEmployee) -> ApiError {
    let message = e.to_string();
    ApiError::Conflict(if message.contains("email") {
        format!("Employee with email '{}' already exists.", new.email)
    } else {
        format!("Employee with ID '{}' already exists.", new.employee_code)
    })
}

/// Inserts a new employee. Duplicate code and duplicate email are
/// pre-checked in that order for precise messages; the unique indexes
/// remain the real guarantee if a concurrent insert races past them.
pub async fn create(pool: &SqlitePool, new: NewEmployee) -> Result<Employee, ApiError> {
    let mut tx = pool.begin().await?;

    let code_taken = sqlx::query_scalar::<_, i64>("SELECT id FROM employees WHERE employee_code = ?")
        .bind(&new.employee_code)
        .fetch_optional(&mut *tx)
        .await?;
    if code_taken.is_some() {
        return Err(ApiError::Conflict(format!(
            "Employee with ID '{}' already exists.",
            new.employee_code
        )));
    }

    let email_taken = sqlx::query_scalar::<_, i64>("SELECT id FROM employees WHERE email = ?")
        .bind(&new.email)
        .fetch_optional(&mut *tx)
        .await?;
    if email_taken.is_some() {
        return Err(ApiError::Conflict(format!(
            "Employee with email '{}' already exists.",
            new.email
        )));
    }

    let created_at = Utc::now().naive_utc();
    let result = sqlx::query(
        "INSERT INTO employees (employee_code, full_name, email, department, created_at)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&new.employee_code)
    .bind(&new.full_name)
    .bind(&new.email)
    .bind(&new.department)
    .bind(created_at)
    .execute(&mut *tx)
    .await;

    let result = match result {
        Ok(res) => res,
        Err(e) if is_unique_violation(&e) => {
            // A concurrent writer won the race between pre-check and
            // insert; surface the same Conflict kind.
            tx.rollback().await?;
            return Err(unique_conflict(&e, &new));
        }
        Err(e) => return Err(e.into()),
    };

    let id = result.last_insert_rowid();
    tx.commit().await?;

    debug!(employee_code = %new.employee_code, id, "Employee created");

    Ok(Employee {
        id,
        employee_code: new.employee_code,
        full_name: new.full_name,
        email: new.email,
        department: new.department,
        created_at,
        present_days: 0,
    })
}

/// Deletes an employee by code together with all attendance it owns
/// (the foreign key cascades). `NotFound` if the code is unknown.
pub async fn delete(pool: &SqlitePool, employee_code: &str) -> Result<(), ApiError> {
    let mut tx = pool.begin().await?;

    let id = sqlx::query_scalar::<_, i64>("SELECT id FROM employees WHERE employee_code = ?")
        .bind(employee_code)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Employee '{}' not found.", employee_code)))?;

    sqlx::query("DELETE FROM employees WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    debug!(employee_code, id, "Employee deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_db;
    use sqlx::SqlitePool;

    fn sample(code: &str, email: &str) -> NewEmployee {
        NewEmployee {
            employee_code: code.to_string(),
            full_name: "Test User".to_string(),
            email: email.to_string(),
            department: "QA".to_string(),
        }
    }

    async fn raw_insert(pool: &SqlitePool, code: &str, email: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO employees (employee_code, full_name, email, department, created_at)
             VALUES (?, 'Other User', ?, 'QA', ?)",
        )
        .bind(code)
        .bind(email)
        .bind(Utc::now().naive_utc())
        .execute(pool)
        .await
        .map(|_| ())
    }

    #[actix_web::test]
    async fn commit_time_code_violation_maps_to_code_conflict() {
        let pool = init_db("sqlite::memory:").await.unwrap();
        create(&pool, sample("EMP001", "a@x.com")).await.unwrap();

        // A writer that skipped the pre-check: the unique index on
        // employee_code rejects it at the storage layer.
        let err = raw_insert(&pool, "EMP001", "b@x.com").await.unwrap_err();
        assert!(is_unique_violation(&err));

        let conflict = unique_conflict(&err, &sample("EMP001", "b@x.com"));
        match conflict {
            ApiError::Conflict(msg) => assert!(msg.contains("ID 'EMP001'"), "{msg}"),
            other => panic!("expected Conflict, got {other:?}"),
        }
    }

    #[actix_web::test]
    async fn commit_time_email_violation_maps_to_email_conflict() {
        let pool = init_db("sqlite::memory:").await.unwrap();
        create(&pool, sample("EMP001", "same@x.com")).await.unwrap();

        let err = raw_insert(&pool, "EMP002", "same@x.com").await.unwrap_err();
        assert!(is_unique_violation(&err));

        let conflict = unique_conflict(&err, &sample("EMP002", "same@x.com"));
        match conflict {
            ApiError::Conflict(msg) => assert!(msg.contains("email 'same@x.com'"), "{msg}"),
            other => panic!("expected Conflict, got {other:?}"),
        }

        // Only the first row survived either attempt.
        let rows = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employees")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(rows, 1);
    }
}

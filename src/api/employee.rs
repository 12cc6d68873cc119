use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::model::employee::{Employee, NewEmployee};
use crate::store::employees;
use crate::utils::validate;

#[derive(Deserialize, Serialize, ToSchema)]
pub struct CreateEmployee {
    #[schema(example = "EMP001")]
    pub employee_code: String,
    #[schema(example = "Aarav Sharma")]
    pub full_name: String,
    #[schema(example = "aarav.sharma@hrms.in", format = "email")]
    pub email: String,
    #[schema(example = "Engineering")]
    pub department: String,
}

impl CreateEmployee {
    /// Trims the string fields and checks email syntax before anything
    /// touches the store.
    fn validated(self) -> Result<NewEmployee, ApiError> {
        Ok(NewEmployee {
            employee_code: validate::non_empty("employee_code", &self.employee_code)?,
            full_name: validate::non_empty("full_name", &self.full_name)?,
            email: validate::email(&self.email)?,
            department: validate::non_empty("department", &self.department)?,
        })
    }
}

/// List Employees
#[utoipa::path(
    get,
    path = "/employees",
    responses(
        (status = 200, description = "All employees, newest first, with lifetime present-day counts", body = [Employee])
    ),
    tag = "Employees"
)]
pub async fn list_employees(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let employees = employees::list(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(employees))
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Empty field or malformed email", body = Object, example = json!({
            "error": "validation_error",
            "message": "Field 'full_name' cannot be empty"
        })),
        (status = 409, description = "Duplicate employee code or email", body = Object, example = json!({
            "error": "conflict",
            "message": "Employee with ID 'EMP001' already exists."
        }))
    ),
    tag = "Employees"
)]
pub async fn create_employee(
    pool: web::Data<SqlitePool>,
    payload: web::Json<CreateEmployee>,
) -> Result<HttpResponse, ApiError> {
    let new = payload.into_inner().validated()?;
    let employee = employees::create(pool.get_ref(), new).await?;
    Ok(HttpResponse::Created().json(employee))
}

/// Delete Employee
#[utoipa::path(
    delete,
    path = "/employees/{employee_code}",
    params(
        ("employee_code", Path, description = "Human-facing employee code")
    ),
    responses(
        (status = 204, description = "Employee and its attendance history deleted"),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "error": "not_found",
            "message": "Employee 'EMP999' not found."
        }))
    ),
    tag = "Employees"
)]
pub async fn delete_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let employee_code = path.into_inner();
    employees::delete(pool.get_ref(), &employee_code).await?;
    Ok(HttpResponse::NoContent().finish())
}

use actix_web::web;

use crate::api::{attendance, dashboard, employee};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/employees")
            // /employees
            .service(
                web::resource("")
                    .route(web::get().to(employee::list_employees))
                    .route(web::post().to(employee::create_employee)),
            )
            // /employees/{employee_code}
            .service(
                web::resource("/{employee_code}")
                    .route(web::delete().to(employee::delete_employee)),
            ),
    )
    .service(
        web::scope("/attendance")
            // /attendance
            .service(web::resource("").route(web::post().to(attendance::mark_attendance)))
            // /attendance/{employee_code}
            .service(
                web::resource("/{employee_code}")
                    .route(web::get().to(attendance::get_attendance)),
            ),
    )
    .service(
        web::scope("/dashboard")
            // /dashboard
            .service(web::resource("").route(web::get().to(dashboard::get_summary)))
            // /dashboard/weekly
            .service(web::resource("/weekly").route(web::get().to(dashboard::get_weekly))),
    );
}

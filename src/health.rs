use actix_web::{get, web, HttpResponse, Responder};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    database: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
/// - No DB
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Pings the database when one is configured
/// - The in-memory backend is always ready
#[get("/ready")]
pub async fn readiness(db: Option<web::Data<Arc<DatabaseConnection>>>) -> impl Responder {
    let db_status = match db {
        None => "not_configured",
        Some(db) => match db
            .execute(Statement::from_string(
                db.get_database_backend(),
                "SELECT 1",
            ))
            .await
        {
            Ok(_) => "ok",
            Err(e) => {
                warn!(error = %e, "Readiness check failed");
                "unhealthy"
            }
        },
    };

    if db_status == "unhealthy" {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            database: db_status,
        })
    } else {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            database: db_status,
        })
    }
}

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
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Round-trips the document store
#[get("/ready")]
pub async fn readiness(db: web::Data<Arc<DatabaseConnection>>) -> impl Responder {
    match db
        .execute(Statement::from_string(
            db.get_database_backend(),
            "SELECT 1",
        ))
        .await
    {
        Ok(_) => HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            database: "ok",
        }),
        Err(e) => {
            warn!("Readiness probe failed: {}", e);
            HttpResponse::ServiceUnavailable().json(ReadinessResponse {
                status: "unhealthy",
                database: "unhealthy",
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_health_is_always_ok() {
        let app = test::init_service(App::new().service(health)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request())
            .await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_ready_when_store_answers() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Arc::new(db)))
                .service(readiness),
        )
        .await;

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/ready").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["database"], "ok");
    }

    #[actix_web::test]
    async fn test_not_ready_when_store_fails() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors(vec![DbErr::Custom("connection refused".to_string())])
            .into_connection();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Arc::new(db)))
                .service(readiness),
        )
        .await;

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/ready").to_request()).await;

        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}

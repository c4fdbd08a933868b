use actix_web::HttpResponse;
use crate::server::model::health::HealthStatus;

/// liveness probe
pub(crate) async fn health_check() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/json")
        .json(HealthStatus::healthy())
}

//! explicit route table

pub(crate) mod health;
pub(crate) mod orders;

use actix_web::{web, HttpResponse};
use crate::server::error::ApiError;

/// Register every route on the given config.
pub(crate) fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        // load balancers check with any method, HEAD included
        web::resource("/health").to(health::health_check),
    )
    .service(
        web::resource("/api/orders")
            .route(web::get().to(orders::get_orders))
            .route(web::post().to(orders::post_orders))
            .default_service(web::to(|| async {
                Err::<HttpResponse, _>(ApiError::MethodNotAllowed { allow: "GET, POST" })
            })),
    );
}

/// Fallback for paths no resource matched.
pub(crate) async fn not_found() -> Result<HttpResponse, ApiError> {
    Err(ApiError::NotFound)
}

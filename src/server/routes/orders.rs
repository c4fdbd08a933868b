use actix_web::HttpResponse;
use crate::server::model::order::{Order, OrderCreatedResponse, OrderListResponse};

/// list orders, query params are accepted but ignored
pub(crate) async fn get_orders() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/json")
        .json(OrderListResponse::default())
}

/// create an order, the request body is never read
pub(crate) async fn post_orders() -> HttpResponse {
    HttpResponse::Created()
        .content_type("application/json")
        .json(OrderCreatedResponse::new(Order::default()))
}

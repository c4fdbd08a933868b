use serde::Serialize;

/// An order. No fields are tracked yet, so it always serializes as `{}`.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub(crate) struct Order {}

#[derive(Debug, Default, Serialize)]
pub(crate) struct OrderListResponse {
    pub orders: Vec<Order>,
    pub total: u64,
}

#[derive(Debug, Serialize)]
pub(crate) struct OrderCreatedResponse {
    pub message: &'static str,
    pub order: Order,
}

impl OrderCreatedResponse {
    pub const MESSAGE: &'static str = "Order created successfully";

    pub fn new(order: Order) -> Self {
        Self {
            message: Self::MESSAGE,
            order,
        }
    }
}

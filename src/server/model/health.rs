use serde::Serialize;

pub(crate) const SERVICE_NAME: &str = "order-service";
pub(crate) const SERVICE_VERSION: &str = "1.0.0";

#[derive(Debug, Serialize)]
pub(crate) struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: "healthy",
            service: SERVICE_NAME,
            version: SERVICE_VERSION,
        }
    }
}

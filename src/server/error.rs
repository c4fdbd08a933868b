use actix_web::http::header::{self, ContentType};
use actix_web::http::StatusCode;
use actix_web::{error, HttpResponse};
use derive_more::{Display, Error};
use crate::server::model::ErrorResponse;

/// Request-level failures, rendered as JSON bodies.
#[derive(Debug, Display, Error)]
pub(crate) enum ApiError {
    #[display("not found")]
    NotFound,
    #[display("method not allowed")]
    MethodNotAllowed { allow: &'static str },
}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match *self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        builder.insert_header(ContentType::json());
        if let ApiError::MethodNotAllowed { allow } = *self {
            builder.insert_header((header::ALLOW, allow));
        }
        builder.json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

/// Fatal failures of the listener.
#[derive(Debug, Display, Error)]
pub(crate) enum ServerError {
    #[display("failed to bind port {port}: {source}")]
    Bind {
        port: u16,
        source: std::io::Error,
    },
    #[display("server terminated: {_0}")]
    Io(std::io::Error),
}

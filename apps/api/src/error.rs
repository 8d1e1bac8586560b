use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sedapal_core::AppError;

mod types;

pub use types::ErrorResponse;

/// HTTP API error: a status code plus the message sent as `{ "error": ... }`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Reports any failure as 400 with the error message.
    ///
    /// Creation endpoints use this for every component failure.
    pub fn bad_request(error: AppError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: error.message().to_owned(),
        }
    }

    /// Replaces the failure with a fixed message under the given status.
    pub fn masked(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            message: message.to_owned(),
        }
    }

    #[cfg(test)]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[cfg(test)]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl From<AppError> for ApiError {
    fn from(value: AppError) -> Self {
        let status = match value {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Delivery(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        Self {
            status,
            message: value.message().to_owned(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let payload = Json(ErrorResponse::new(self.message));

        (self.status, payload).into_response()
    }
}

/// Standard API result type.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use sedapal_core::AppError;

    use super::ApiError;

    #[test]
    fn categories_map_to_statuses() {
        let cases = [
            (AppError::Validation("v".to_owned()), StatusCode::BAD_REQUEST),
            (AppError::NotFound("n".to_owned()), StatusCode::NOT_FOUND),
            (AppError::Conflict("c".to_owned()), StatusCode::CONFLICT),
            (AppError::Unauthorized("u".to_owned()), StatusCode::UNAUTHORIZED),
            (
                AppError::Delivery("d".to_owned()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::Internal("i".to_owned()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            let message = error.message().to_owned();
            let api_error = ApiError::from(error);
            assert_eq!(api_error.status(), expected);
            assert_eq!(api_error.message(), message);
        }
    }
}

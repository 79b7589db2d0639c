use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Missing 'expires' or 'signature' query parameters.")]
    MissingParameters,

    #[error("URL has expired.")]
    Expired,

    #[error("Invalid signature.")]
    InvalidSignature,

    #[error("Access denied.")]
    AccessDenied,

    #[error("Unsupported file type.")]
    UnsupportedType,

    #[error("File not found.")]
    NotFound,

    #[error("Unauthorized: Invalid API Key")]
    Unauthorized,

    #[error("File parameter is required.")]
    MissingFileParameter,

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    code: String,
}

impl Error {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingParameters => "MISSING_PARAMETERS",
            Self::Expired => "EXPIRED",
            Self::InvalidSignature => "INVALID_SIGNATURE",
            Self::AccessDenied => "ACCESS_DENIED",
            Self::UnsupportedType => "UNSUPPORTED_TYPE",
            Self::NotFound => "NOT_FOUND",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::MissingFileParameter => "MISSING_FILE_PARAMETER",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingParameters | Self::MissingFileParameter | Self::UnsupportedType => {
                StatusCode::BAD_REQUEST
            }
            Self::Expired | Self::InvalidSignature | Self::AccessDenied => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.to_string(),
            code: self.error_code().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        if e.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound
        } else {
            Self::Internal(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            Error::MissingParameters.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(Error::Expired.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(Error::InvalidSignature.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(Error::AccessDenied.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(Error::UnsupportedType.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(Error::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(Error::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_io_error_conversion() {
        let missing = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(matches!(Error::from(missing), Error::NotFound));

        let denied = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        assert!(matches!(Error::from(denied), Error::Internal(_)));
    }
}

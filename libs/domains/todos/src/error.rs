use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::DatabaseError;
use thiserror::Error;
use tonic::{Code, Status};

/// Outcome kinds of a ToDo operation.
///
/// Callers branch on the variant; the string is diagnostic only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToDoError {
    #[error("{0}")]
    Unimplemented(String),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

pub type TodoResult<T> = Result<T, ToDoError>;

impl ToDoError {
    pub fn code(&self) -> Code {
        match self {
            ToDoError::Unimplemented(_) => Code::Unimplemented,
            ToDoError::InvalidArgument(_) => Code::InvalidArgument,
            ToDoError::NotFound(_) => Code::NotFound,
            ToDoError::Internal(_) => Code::Internal,
        }
    }
}

impl From<ToDoError> for Status {
    fn from(err: ToDoError) -> Self {
        match &err {
            ToDoError::Internal(msg) => tracing::error!("{}", msg),
            other => tracing::debug!(code = ?other.code(), "{}", other),
        }
        Status::new(err.code(), err.to_string())
    }
}

/// Status received by the gateway from the gRPC server
impl From<Status> for ToDoError {
    fn from(status: Status) -> Self {
        let message = status.message().to_string();
        match status.code() {
            Code::Unimplemented => ToDoError::Unimplemented(message),
            Code::InvalidArgument => ToDoError::InvalidArgument(message),
            Code::NotFound => ToDoError::NotFound(message),
            Code::Internal | Code::Unknown => ToDoError::Internal(message),
            code => ToDoError::Internal(format!("{:?}: {}", code, message)),
        }
    }
}

impl From<ToDoError> for AppError {
    fn from(err: ToDoError) -> Self {
        match err {
            ToDoError::Unimplemented(msg) => AppError::NotImplemented(msg),
            ToDoError::InvalidArgument(msg) => AppError::BadRequest(msg),
            ToDoError::NotFound(msg) => AppError::NotFound(msg),
            ToDoError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ToDoError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

impl From<DatabaseError> for ToDoError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::Acquire(msg) => {
                ToDoError::Internal(format!("failed to connect to database: {}", msg))
            }
            other => ToDoError::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_codes() {
        let cases = [
            (ToDoError::Unimplemented("v2".into()), Code::Unimplemented),
            (ToDoError::InvalidArgument("title".into()), Code::InvalidArgument),
            (ToDoError::NotFound("42".into()), Code::NotFound),
            (ToDoError::Internal("boom".into()), Code::Internal),
        ];

        for (err, code) in cases {
            let status = Status::from(err.clone());
            assert_eq!(status.code(), code);
            assert_eq!(status.message(), err.to_string());
        }
    }

    #[test]
    fn test_status_round_trip_keeps_kind() {
        let err = ToDoError::NotFound("ToDo with ID='7' is not found".into());
        assert_eq!(ToDoError::from(Status::from(err.clone())), err);
    }

    #[test]
    fn test_other_status_codes_are_internal() {
        for code in [Code::Unavailable, Code::DeadlineExceeded, Code::Unknown] {
            let err = ToDoError::from(Status::new(code, "down"));
            assert!(matches!(err, ToDoError::Internal(_)), "{:?}", code);
        }
    }

    #[test]
    fn test_internal_status_message_passes_through() {
        let err = ToDoError::from(Status::internal("failed to select ToDo: relation missing"));
        assert_eq!(
            err,
            ToDoError::Internal("failed to select ToDo: relation missing".into())
        );

        let err = ToDoError::from(Status::unavailable("tcp connect error"));
        assert_eq!(err, ToDoError::Internal("Unavailable: tcp connect error".into()));
    }

    #[test]
    fn test_http_status_mapping() {
        let cases = [
            (ToDoError::Unimplemented(String::new()), StatusCode::NOT_IMPLEMENTED),
            (ToDoError::InvalidArgument(String::new()), StatusCode::BAD_REQUEST),
            (ToDoError::NotFound(String::new()), StatusCode::NOT_FOUND),
            (ToDoError::Internal(String::new()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_acquire_failure_is_internal() {
        let err = ToDoError::from(DatabaseError::Acquire("pool timed out".into()));
        assert_eq!(
            err,
            ToDoError::Internal("failed to connect to database: pool timed out".into())
        );
    }
}

use actix_web::{error, http::StatusCode, HttpResponse, HttpResponseBuilder};
use derive_more::{Display, Error};

/// Errors produced at the HTTP boundary.
///
/// `Forbidden` is the usual outcome of a denied guarded handler:
///
/// ```ignore
/// use actix_authorizer_core::authorization::{reject, Authorizer};
/// use actix_authorizer_core::http::error::AuthError;
///
/// let authorizer = Authorizer::new(load_user, reject(|| {
///     AuthError::forbidden_with("Forbidden: you do not have access to this resource")
/// }));
/// ```
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[display("{message}")]
    Forbidden { message: String },
    #[display("unauthorized")]
    Unauthorized,
}

impl AuthError {
    /// `403 Forbidden` with the default message.
    pub fn forbidden() -> Self {
        Self::forbidden_with("forbidden")
    }

    /// `403 Forbidden` with a custom message, rendered as the response body.
    pub fn forbidden_with(message: impl Into<String>) -> Self {
        AuthError::Forbidden {
            message: message.into(),
        }
    }
}

impl error::ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        match *self {
            AuthError::Forbidden { .. } => StatusCode::FORBIDDEN,
            AuthError::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponseBuilder::new(self.status_code()).body(self.to_string())
    }
}

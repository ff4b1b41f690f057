//! Error taxonomy for backend calls.

use thiserror::Error;

/// Failure of a single REST call.
///
/// `Unauthorized` is distinguished so the auth layer can tell a rejected
/// credential apart from an unreachable service; `Validation` carries the
/// backend's field-error message for inline display next to the form.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The backend answered 401.
    #[error("credencial rechazada por el servidor")]
    Unauthorized,
    /// The backend rejected the payload (400/422) with a field message.
    #[error("{0}")]
    Validation(String),
    /// Transport failure or unexpected backend status.
    #[error("servicio no disponible: {0}")]
    Service(String),
}

/// Failure of a session-level operation (`login`).
///
/// Verification failures never cross the session boundary as errors; they
/// resolve into the `Unauthenticated` state instead.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The authentication backend rejected the submitted credentials.
    #[error("credenciales incorrectas")]
    InvalidCredentials,
    /// The freshly issued credential failed the follow-up verification.
    #[error("la sesión no pudo ser verificada")]
    VerificationFailed,
    /// The authentication backend could not be reached.
    #[error("servicio de autenticación no disponible")]
    ServiceUnavailable,
}

impl AuthError {
    /// Map a login-call failure onto the session taxonomy.
    pub fn from_login_failure(err: &ApiError) -> Self {
        match err {
            ApiError::Unauthorized => Self::InvalidCredentials,
            ApiError::Validation(_) | ApiError::Service(_) => Self::ServiceUnavailable,
        }
    }
}

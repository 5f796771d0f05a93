use thiserror::Error;

/// Errors surfaced by the session store's operations.
///
/// Both variants are terminal for the calling operation; nothing inside the
/// store retries them. `logout` never raises either - it always completes
/// local cleanup.
#[derive(Error, Debug)]
pub enum AuthError {
    /// The credential exchange was rejected by the backend.
    #[error("login failure")]
    LoginFailure,

    /// No valid session could be restored; the user must log in again.
    #[error("need to login")]
    NeedsLogin,
}

//! Pre-navigation route guard.
//!
//! The host router runs `require_session` before resolving a protected
//! route. An already-authenticated session passes straight through; an
//! unauthenticated one gets a single restore attempt, and any failure there
//! turns into a redirect to the login route.

use tracing::debug;

use crate::api::AuthBackend;
use crate::session::SessionStore;

/// Navigation interface supplied by the host router.
pub trait Navigator {
    /// Redirect to the given route, aborting the current navigation when
    /// called from within the guard.
    fn navigate_to(&self, path: &str);
}

/// What the host router should do with the pending navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Let the navigation proceed unmodified.
    Proceed,
    /// Abort the navigation in favor of the contained login route. The
    /// redirect itself was already requested through the `Navigator` during
    /// session cleanup; this directive only cancels the original target.
    Redirect(String),
}

/// Guard a protected route.
///
/// A restore is attempted only when the store is not already authenticated,
/// and all restore failures are treated alike.
pub async fn require_session<B: AuthBackend, N: Navigator>(
    store: &mut SessionStore<B, N>,
) -> GuardDecision {
    if store.authenticated() {
        return GuardDecision::Proceed;
    }

    match store.restore_login_state().await {
        Ok(()) => GuardDecision::Proceed,
        Err(err) => {
            debug!(error = %err, "Session restore failed, redirecting to login");
            GuardDecision::Redirect(store.login_route().to_string())
        }
    }
}

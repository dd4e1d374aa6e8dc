//! Authentication hook for verifying credentials.
//!
//! Arenagate doesn't verify credentials itself. That belongs to whatever
//! backend the portal talks to. Instead it defines the [`Authenticator`]
//! trait: a single async method that takes [`Credentials`] and returns an
//! [`Identity`] or an [`AuthError`]. The [`SessionStore`](crate::SessionStore)
//! calls it during `login`, so swapping the stub for a real backend
//! doesn't change the store's contract.

use std::time::Duration;

use crate::{AuthError, Credentials, Identity};

/// Verifies credentials and returns the actor's identity.
///
/// `Send + Sync + 'static` so one authenticator can live inside the
/// session store for the whole process and be used from any task.
///
/// # Example
///
/// ```rust
/// use arenagate_session::{AuthError, Authenticator, Credentials, Identity};
///
/// /// Accepts exactly one hard-coded account.
/// struct SingleUser;
///
/// impl Authenticator for SingleUser {
///     async fn authenticate(
///         &self,
///         credentials: &Credentials,
///     ) -> Result<Identity, AuthError> {
///         if credentials.handle == "admin" && credentials.secret() == "admin" {
///             Ok(Identity::new("admin"))
///         } else {
///             Err(AuthError::InvalidCredential("unknown account".into()))
///         }
///     }
/// }
/// ```
pub trait Authenticator: Send + Sync + 'static {
    /// Verifies `credentials`.
    ///
    /// # Returns
    /// - `Ok(Identity)` — the actor to sign in
    /// - `Err(AuthError)` — rejected or unreachable; the session is
    ///   left as it was
    fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> impl std::future::Future<Output = Result<Identity, AuthError>> + Send;
}

/// Stand-in authenticator that simulates a network round trip.
///
/// Waits for `delay`, then accepts any credential and signs the handle in
/// exactly as given. Useful for demos and tests until a real backend
/// exists.
#[derive(Debug, Clone)]
pub struct SimulatedAuthenticator {
    delay: Duration,
}

impl SimulatedAuthenticator {
    /// Default simulated round trip.
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedAuthenticator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

impl Authenticator for SimulatedAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> Result<Identity, AuthError> {
        tokio::time::sleep(self.delay).await;
        Ok(Identity::new(credentials.handle.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_simulated_accepts_any_secret() {
        let auth = SimulatedAuthenticator::default();

        let identity = auth
            .authenticate(&Credentials::new("nightowl", "anything"))
            .await
            .expect("stub accepts every credential");

        assert_eq!(identity, Identity::new("nightowl"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_accepts_blank_and_padded_handles_unchanged() {
        let auth = SimulatedAuthenticator::default();

        for handle in ["", "   ", "  bob "] {
            let identity = auth
                .authenticate(&Credentials::new(handle, "pw"))
                .await
                .expect("stub never rejects");

            assert_eq!(identity.handle, handle);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_waits_for_delay() {
        let auth = SimulatedAuthenticator::new(Duration::from_millis(750));
        let start = tokio::time::Instant::now();

        auth.authenticate(&Credentials::new("a", "b")).await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(750));
    }
}

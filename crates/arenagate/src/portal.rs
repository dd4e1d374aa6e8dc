//! `Portal` builder and the navigation entry point.
//!
//! This is what the navigation and UI layers talk to. It ties the layers
//! together: loading → session → route.

use arenagate_loading::LoadingCoordinator;
use arenagate_route::{GuardChain, GuardDecision, NavigationGuard, NavigationRequest, RouteGuard};
use arenagate_session::{Authenticator, Identity, SessionStore, SimulatedAuthenticator};

use crate::{ArenagateError, PortalConfig};

/// Builder for configuring a [`Portal`].
///
/// # Example
///
/// ```rust,ignore
/// use arenagate::prelude::*;
///
/// let portal = Portal::builder()
///     .config(PortalConfig::from_file("portal.json")?)
///     .guard(MaintenanceGuard)
///     .build(my_authenticator)?;
/// ```
pub struct PortalBuilder {
    config: PortalConfig,
    extra_guards: GuardChain,
}

impl PortalBuilder {
    /// Creates a builder with default settings.
    pub fn new() -> Self {
        Self {
            config: PortalConfig::default(),
            extra_guards: GuardChain::new(),
        }
    }

    /// Replaces the whole configuration.
    pub fn config(mut self, config: PortalConfig) -> Self {
        self.config = config;
        self
    }

    /// Adds a guard that runs after the built-in canonical and auth guards.
    pub fn guard(mut self, guard: impl NavigationGuard + 'static) -> Self {
        self.extra_guards = self.extra_guards.with(guard);
        self
    }

    /// Validates the configuration and builds the portal around
    /// `authenticator`.
    ///
    /// # Errors
    /// [`ArenagateError::Route`] if the route table is invalid.
    pub fn build<A: Authenticator>(self, authenticator: A) -> Result<Portal<A>, ArenagateError> {
        let config = self.config.validated()?;

        let loading = LoadingCoordinator::new();
        let session = SessionStore::new(authenticator, loading.clone());

        let mut guards = GuardChain::standard(&config.routes);
        if !self.extra_guards.is_empty() {
            guards = guards.with(self.extra_guards);
        }

        tracing::debug!(?guards, login = %config.routes.login, "portal built");

        Ok(Portal {
            routes: RouteGuard::new(config.routes),
            loading,
            session,
            guards,
        })
    }

    /// Builds with a [`SimulatedAuthenticator`] using the configured delay.
    pub fn build_simulated(self) -> Result<Portal<SimulatedAuthenticator>, ArenagateError> {
        let authenticator = SimulatedAuthenticator::new(self.config.login_delay());
        self.build(authenticator)
    }
}

impl Default for PortalBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// One portal instance: a session, a loading coordinator, and the guards
/// that read them.
///
/// Each portal owns its own state, so tests build a fresh one per case.
/// Share it across tasks behind an `Arc`.
pub struct Portal<A: Authenticator> {
    loading: LoadingCoordinator,
    session: SessionStore<A>,
    guards: GuardChain,
    routes: RouteGuard,
}

impl Portal<SimulatedAuthenticator> {
    /// Creates a new builder. The builder accepts any authenticator, see
    /// [`PortalBuilder::build`].
    pub fn builder() -> PortalBuilder {
        PortalBuilder::new()
    }
}

impl<A: Authenticator> Portal<A> {
    /// Decides what happens to a navigation attempt.
    ///
    /// The session state is read once, up front. A login that is still in
    /// flight does not count until it has completed.
    pub fn navigate(&self, request: &NavigationRequest) -> GuardDecision {
        let state = self.session.auth_state();
        self.guards.evaluate(request, state)
    }

    /// Where the navigation layer should continue after a successful
    /// login reached through `login_request`.
    pub fn resume_target(&self, login_request: &NavigationRequest) -> String {
        self.routes.resume_target(login_request)
    }

    /// Signs in. See [`SessionStore::login`].
    pub async fn login(
        &self,
        handle: impl Into<String>,
        secret: impl Into<String>,
    ) -> Result<(), ArenagateError> {
        self.session.login(handle, secret).await?;
        Ok(())
    }

    /// Signs out. Idempotent.
    pub fn logout(&self) {
        self.session.logout();
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.session.identity()
    }

    /// `true` while any tracked operation (including a login) is running.
    pub fn is_busy(&self) -> bool {
        self.loading.is_busy()
    }

    pub fn session(&self) -> &SessionStore<A> {
        &self.session
    }

    /// The coordinator shared by the session and any data loaders.
    pub fn loading(&self) -> &LoadingCoordinator {
        &self.loading
    }

    pub fn guards(&self) -> &GuardChain {
        &self.guards
    }
}

//! The `NavigationGuard` trait and the chain that runs guards in order.

use crate::{AuthState, CanonicalGuard, GuardDecision, NavigationRequest, RouteConfig, RouteGuard};

/// A synchronous check run before a navigation completes.
///
/// Guards get the request and a snapshot of the session state taken when
/// the attempt began. They must not block or suspend, and they have no
/// failure mode: anything a guard cannot make sense of is a `Proceed`.
///
/// # Example
///
/// ```rust
/// use arenagate_route::{AuthState, GuardDecision, NavigationGuard, NavigationRequest};
///
/// /// Sends everyone away from a page that is being retired.
/// struct Retired;
///
/// impl NavigationGuard for Retired {
///     fn name(&self) -> &'static str {
///         "retired"
///     }
///
///     fn check(&self, request: &NavigationRequest, _state: AuthState) -> GuardDecision {
///         if request.path() == "/news" {
///             GuardDecision::RedirectTo("/community".into())
///         } else {
///             GuardDecision::Proceed
///         }
///     }
/// }
/// ```
pub trait NavigationGuard: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Decides what happens to `request`.
    fn check(&self, request: &NavigationRequest, state: AuthState) -> GuardDecision;
}

/// Runs guards in registration order. The first redirect wins; if every
/// guard proceeds, so does the navigation.
#[derive(Default)]
pub struct GuardChain {
    guards: Vec<Box<dyn NavigationGuard>>,
}

impl GuardChain {
    /// An empty chain, which lets everything through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonicalization first, then the auth rules.
    ///
    /// The two never both match the same path in practice, so the order
    /// only decides which guard's log line appears.
    pub fn standard(config: &RouteConfig) -> Self {
        Self::new()
            .with(CanonicalGuard::new(config.aliases.clone()))
            .with(RouteGuard::new(config.clone()))
    }

    /// Appends a guard.
    pub fn with(mut self, guard: impl NavigationGuard + 'static) -> Self {
        self.guards.push(Box::new(guard));
        self
    }

    /// Evaluates every guard until one redirects.
    pub fn evaluate(&self, request: &NavigationRequest, state: AuthState) -> GuardDecision {
        for guard in &self.guards {
            let decision = guard.check(request, state);
            if !decision.is_proceed() {
                tracing::debug!(
                    guard = guard.name(),
                    to = %request.target_path,
                    from = %request.origin_path,
                    %decision,
                    "navigation redirected"
                );
                return decision;
            }
        }

        tracing::trace!(to = %request.target_path, %state, "navigation allowed");
        GuardDecision::Proceed
    }

    pub fn len(&self) -> usize {
        self.guards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guards.is_empty()
    }
}

/// A chain is itself a guard, so chains nest.
impl NavigationGuard for GuardChain {
    fn name(&self) -> &'static str {
        "chain"
    }

    fn check(&self, request: &NavigationRequest, state: AuthState) -> GuardDecision {
        self.evaluate(request, state)
    }
}

impl std::fmt::Debug for GuardChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.guards.iter().map(|guard| guard.name()))
            .finish()
    }
}

//! Route access decision.
//!
//! [`decide`] is a total function of two booleans: whether the path is under
//! the protected prefix and whether the caller holds a session. It never
//! fails and has no side effects. Bypass patterns (static assets, API routes)
//! are applied by the routing layer before the gate is consulted.

use ledger_config::AuthConfig;

use crate::claims::RequestContext;

/// Outcome of the gate for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    RedirectTo(String),
}

/// Redirect targets used by the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateRoutes {
    /// Where anonymous callers of protected paths are sent.
    pub login: String,
    /// Where signed-in callers of unprotected paths are sent.
    pub home: String,
}

/// | protected | authenticated | decision            |
/// |-----------|---------------|---------------------|
/// | yes       | no            | redirect to login   |
/// | yes       | yes           | allow               |
/// | no        | yes           | redirect to home    |
/// | no        | no            | allow               |
#[must_use]
pub fn decide(path_is_protected: bool, is_authenticated: bool, routes: &GateRoutes) -> GateDecision {
    match (path_is_protected, is_authenticated) {
        (true, false) => GateDecision::RedirectTo(routes.login.clone()),
        (false, true) => GateDecision::RedirectTo(routes.home.clone()),
        (true, true) | (false, false) => GateDecision::Allow,
    }
}

/// The gate bound to a protected prefix and its redirect targets.
#[derive(Debug, Clone)]
pub struct AccessGate {
    protected_prefix: String,
    routes: GateRoutes,
}

impl AccessGate {
    #[must_use]
    pub fn new(protected_prefix: impl Into<String>, routes: GateRoutes) -> Self {
        Self {
            protected_prefix: protected_prefix.into(),
            routes,
        }
    }

    #[must_use]
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(
            config.protected_prefix.clone(),
            GateRoutes {
                login: config.login_path.clone(),
                home: config.home_path.clone(),
            },
        )
    }

    /// Plain prefix match, so `/dashboardx` counts as protected too.
    #[must_use]
    pub fn is_protected(&self, path: &str) -> bool {
        path.starts_with(&self.protected_prefix)
    }

    #[must_use]
    pub const fn routes(&self) -> &GateRoutes {
        &self.routes
    }

    #[must_use]
    pub fn evaluate(&self, ctx: &RequestContext) -> GateDecision {
        let decision = decide(
            self.is_protected(&ctx.path),
            ctx.claim.is_authenticated(),
            &self.routes,
        );
        tracing::trace!(path = %ctx.path, ?decision, "access gate");
        decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claims::SessionClaim;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn routes() -> GateRoutes {
        GateRoutes {
            login: "/login".into(),
            home: "/dashboard".into(),
        }
    }

    fn gate() -> AccessGate {
        AccessGate::from_config(&AuthConfig::default())
    }

    fn signed_in(path: &str) -> RequestContext {
        RequestContext::new(
            path,
            SessionClaim::Authenticated {
                user_id: "usr-1".into(),
            },
        )
    }

    #[rstest]
    #[case::protected_anonymous(true, false, GateDecision::RedirectTo("/login".into()))]
    #[case::protected_signed_in(true, true, GateDecision::Allow)]
    #[case::public_signed_in(false, true, GateDecision::RedirectTo("/dashboard".into()))]
    #[case::public_anonymous(false, false, GateDecision::Allow)]
    fn decision_table(
        #[case] protected: bool,
        #[case] authenticated: bool,
        #[case] expected: GateDecision,
    ) {
        assert_eq!(decide(protected, authenticated, &routes()), expected);
    }

    #[rstest]
    #[case("/dashboard", true)]
    #[case("/dashboard/invoices/inv-1/edit", true)]
    #[case("/dashboardx", true)]
    #[case("/login", false)]
    #[case("/", false)]
    #[case("/Dashboard", false)]
    fn protected_prefix_matching(#[case] path: &str, #[case] expected: bool) {
        assert_eq!(gate().is_protected(path), expected);
    }

    #[test]
    fn anonymous_dashboard_goes_to_login() {
        let ctx = RequestContext::anonymous("/dashboard/invoices");
        assert_eq!(gate().evaluate(&ctx), GateDecision::RedirectTo("/login".into()));
    }

    #[test]
    fn signed_in_login_goes_home() {
        assert_eq!(
            gate().evaluate(&signed_in("/login")),
            GateDecision::RedirectTo("/dashboard".into())
        );
    }

    #[test]
    fn signed_in_dashboard_is_allowed() {
        assert_eq!(gate().evaluate(&signed_in("/dashboard")), GateDecision::Allow);
    }

    #[test]
    fn custom_routes_are_used() {
        let gate = AccessGate::new(
            "/app",
            GateRoutes {
                login: "/signin".into(),
                home: "/app/home".into(),
            },
        );
        assert_eq!(
            gate.evaluate(&RequestContext::anonymous("/app/settings")),
            GateDecision::RedirectTo("/signin".into())
        );
        assert_eq!(gate.evaluate(&RequestContext::anonymous("/dashboard")), GateDecision::Allow);
    }
}

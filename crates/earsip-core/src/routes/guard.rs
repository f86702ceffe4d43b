//! Per-navigation access decision.

use earsip_api::Role;

use super::Route;
use crate::session::SessionState;

/// Outcome of a guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still loading: show the placeholder, decide later.
    Loading,
    /// Nobody is signed in.
    RedirectLogin,
    /// Signed in, but the role is not on the allow-list.
    RedirectUnauthorized,
    /// Already signed in while visiting the login page.
    RedirectDashboard,
    /// Show the requested page.
    Render,
}

impl GuardDecision {
    /// Page to show for `requested`, or `None` while loading.
    #[must_use]
    pub const fn target(self, requested: Route) -> Option<Route> {
        match self {
            Self::Loading => None,
            Self::RedirectLogin => Some(Route::Login),
            Self::RedirectUnauthorized => Some(Route::Unauthorized),
            Self::RedirectDashboard => Some(Route::Dashboard),
            Self::Render => Some(requested),
        }
    }
}

/// Checks a protected page against the session and an optional allow-list.
///
/// An empty `allowed` list admits every signed-in user. The decision is
/// recomputed on every call.
#[must_use]
pub fn guard(state: &SessionState, allowed: &[Role]) -> GuardDecision {
    match state {
        SessionState::Loading => GuardDecision::Loading,
        SessionState::Unauthenticated => GuardDecision::RedirectLogin,
        SessionState::Authenticated(user) => {
            if allowed.is_empty() || allowed.contains(&user.role) {
                GuardDecision::Render
            } else {
                GuardDecision::RedirectUnauthorized
            }
        }
    }
}

/// Guard decision for a route, including the public login page.
#[must_use]
pub fn resolve(state: &SessionState, route: Route) -> GuardDecision {
    if route.is_public() {
        return match state {
            SessionState::Loading => GuardDecision::Loading,
            SessionState::Unauthenticated => GuardDecision::Render,
            SessionState::Authenticated(_) => GuardDecision::RedirectDashboard,
        };
    }
    guard(state, route.allowed_roles())
}

#[cfg(test)]
mod tests {
    use earsip_api::User;
    use proptest::prelude::*;

    use super::*;
    use crate::routes::{AksiView, LogbookView, UsersView};

    fn signed_in(role: Role) -> SessionState {
        SessionState::Authenticated(User {
            username: "tester".to_string(),
            role,
            ..User::default()
        })
    }

    fn any_role() -> impl Strategy<Value = Role> {
        prop::sample::select(Role::ALL.to_vec())
    }

    fn any_route() -> impl Strategy<Value = Route> {
        let mut routes = Route::NAVIGABLE.to_vec();
        routes.push(Route::Login);
        routes.push(Route::Unauthorized);
        prop::sample::select(routes)
    }

    fn any_allow_list() -> impl Strategy<Value = Vec<Role>> {
        prop::sample::subsequence(Role::ALL.to_vec(), 0..=Role::ALL.len())
    }

    proptest! {
        #[test]
        fn prop_role_outside_allow_list_never_renders(role in any_role(), allowed in any_allow_list()) {
            let decision = guard(&signed_in(role), &allowed);
            if !allowed.is_empty() && !allowed.contains(&role) {
                prop_assert_eq!(decision, GuardDecision::RedirectUnauthorized);
            } else {
                prop_assert_eq!(decision, GuardDecision::Render);
            }
        }

        #[test]
        fn prop_loading_never_redirects(route in any_route()) {
            let decision = resolve(&SessionState::Loading, route);
            prop_assert_eq!(decision, GuardDecision::Loading);
            prop_assert_eq!(decision.target(route), None);
        }

        #[test]
        fn prop_signed_out_only_sees_login(route in any_route()) {
            let decision = resolve(&SessionState::Unauthenticated, route);
            prop_assert_eq!(decision.target(route), Some(Route::Login));
        }
    }

    #[test]
    fn test_superadmin_pages() {
        for role in [Role::User, Role::Admin] {
            assert_eq!(
                resolve(&signed_in(role), Route::Users(UsersView::List)),
                GuardDecision::RedirectUnauthorized
            );
            assert_eq!(
                resolve(&signed_in(role), Route::Category),
                GuardDecision::RedirectUnauthorized
            );
        }
        assert_eq!(
            resolve(&signed_in(Role::Superadmin), Route::Organization),
            GuardDecision::Render
        );
    }

    #[test]
    fn test_disposition_queue_for_admins() {
        let route = Route::Aksi(AksiView::Disposisi);
        assert_eq!(
            resolve(&signed_in(Role::User), route),
            GuardDecision::RedirectUnauthorized
        );
        assert_eq!(resolve(&signed_in(Role::Admin), route), GuardDecision::Render);
    }

    #[test]
    fn test_login_page_when_signed_in() {
        let decision = resolve(&signed_in(Role::User), Route::Login);
        assert_eq!(decision.target(Route::Login), Some(Route::Dashboard));
    }

    #[test]
    fn test_open_pages_for_every_role() {
        for role in Role::ALL {
            assert_eq!(
                resolve(&signed_in(role), Route::Logbook(LogbookView::Outbox)),
                GuardDecision::Render
            );
        }
    }
}

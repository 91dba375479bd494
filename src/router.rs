// src/router.rs
use crate::components::auth_guard::AuthGuard;
use crate::pages::accounts::Accounts;
use crate::pages::analytics::Analytics;
use crate::pages::customers::Customers;
use crate::pages::dashboard::Dashboard;
use crate::pages::login::Login;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Routable, PartialEq, Clone, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[at("/customers")]
    Customers,
    #[at("/accounts")]
    Accounts,
    #[at("/analytics")]
    Analytics,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Routes that are only reachable with a stored session token.
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Route::Dashboard | Route::Customers | Route::Accounts | Route::Analytics
        )
    }

    /// Static redirect entries of the route table, applied before the
    /// auth guard sees the navigation.
    pub fn redirect_target(&self) -> Option<Route> {
        match self {
            Route::Home => Some(Route::Dashboard),
            _ => None,
        }
    }
}

/// Pre-navigation check: `Some(Login)` when the target route is gated and
/// the session store holds no token, `None` to let the navigation through.
/// An empty token counts as absent.
pub fn guard_redirect(target: &Route, token: &str) -> Option<Route> {
    if target.requires_auth() && token.is_empty() {
        Some(Route::Login)
    } else {
        None
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <Switch<Route> render={switch} />
    }
}

fn switch(route: Route) -> Html {
    if let Some(target) = route.redirect_target() {
        return html! { <Redirect<Route> to={target} /> };
    }
    match route {
        // Home is a pure redirect entry, handled above.
        Route::Home => html! {},
        Route::Login => html! { <Login /> },
        Route::Dashboard => html! {
            <AuthGuard>
                <Dashboard />
            </AuthGuard>
        },
        Route::Customers => html! {
            <AuthGuard>
                <Customers />
            </AuthGuard>
        },
        Route::Accounts => html! {
            <AuthGuard>
                <Accounts />
            </AuthGuard>
        },
        Route::Analytics => html! {
            <AuthGuard>
                <Analytics />
            </AuthGuard>
        },
        Route::NotFound => html! { <h1>{ "404 - Page not found" }</h1> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn protected_routes() -> [Route; 4] {
        [
            Route::Dashboard,
            Route::Customers,
            Route::Accounts,
            Route::Analytics,
        ]
    }

    #[test]
    fn paths_map_to_their_routes() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/login"), Some(Route::Login));
        assert_eq!(Route::recognize("/dashboard"), Some(Route::Dashboard));
        assert_eq!(Route::recognize("/customers"), Some(Route::Customers));
        assert_eq!(Route::recognize("/accounts"), Some(Route::Accounts));
        assert_eq!(Route::recognize("/analytics"), Some(Route::Analytics));
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::recognize("/no-such-page"), Some(Route::NotFound));
    }

    #[test]
    fn only_the_dashboard_views_are_gated() {
        for route in protected_routes() {
            assert!(route.requires_auth(), "{route:?} should be gated");
        }
        assert!(!Route::Home.requires_auth());
        assert!(!Route::Login.requires_auth());
        assert!(!Route::NotFound.requires_auth());
    }

    #[test]
    fn gated_routes_redirect_to_login_without_a_token() {
        for route in protected_routes() {
            assert_eq!(guard_redirect(&route, ""), Some(Route::Login));
        }
    }

    #[test]
    fn gated_routes_pass_with_a_token() {
        for route in protected_routes() {
            assert_eq!(guard_redirect(&route, "abc123"), None);
        }
    }

    #[test]
    fn login_never_redirects_to_itself() {
        assert_eq!(guard_redirect(&Route::Login, ""), None);
        assert_eq!(guard_redirect(&Route::Login, "abc123"), None);
    }

    #[test]
    fn home_is_the_only_redirect_entry() {
        assert_eq!(Route::Home.redirect_target(), Some(Route::Dashboard));
        for route in [Route::Login, Route::NotFound] {
            assert_eq!(route.redirect_target(), None);
        }
        for route in protected_routes() {
            assert_eq!(route.redirect_target(), None);
        }
    }

    #[test]
    fn root_redirects_before_the_guard_runs() {
        let hop = Route::Home.redirect_target().unwrap();
        assert_eq!(hop, Route::Dashboard);
        // Without a token the guard then sends the hop to the login page.
        assert_eq!(guard_redirect(&hop, ""), Some(Route::Login));
        assert_eq!(guard_redirect(&hop, "abc123"), None);
    }
}

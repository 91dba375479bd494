// src/components/auth_guard.rs
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::auth;
use crate::router::{self, Route};

#[derive(Properties, PartialEq)]
pub struct AuthGuardProps {
    pub children: Children,
}

/// Gate for routes flagged `requires_auth` in the route table. An
/// unauthenticated visit is sent to the login page instead of the
/// requested view; everything else renders unchanged.
#[function_component(AuthGuard)]
pub fn auth_guard(props: &AuthGuardProps) -> Html {
    let route = use_route::<Route>().unwrap_or(Route::NotFound);

    match router::guard_redirect(&route, &auth::get_token()) {
        Some(target) => html! { <Redirect<Route> to={target} /> },
        None => html! { <>{ for props.children.iter() }</> },
    }
}

// src/components/nav_bar.rs
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::auth;
use crate::router::Route;

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let route = use_route::<Route>().unwrap_or(Route::NotFound);

    // Nothing to navigate to before login
    if !auth::is_authenticated() {
        return html! {};
    }

    let nav_item = |target: Route, label: &str| -> Html {
        let classes = if route == target {
            "nav-link active"
        } else {
            "nav-link"
        };
        html! {
            <li class="nav-item">
                <Link<Route> to={target} classes={classes}>{ label }</Link<Route>>
            </li>
        }
    };

    let onclick_logout = Callback::from(|_: MouseEvent| auth::logout());

    html! {
        <nav class="navbar navbar-expand navbar-dark bg-dark">
            <div class="container">
                <Link<Route> to={Route::Dashboard} classes="navbar-brand">
                    { "SaaS Portal" }
                </Link<Route>>
                <ul class="navbar-nav me-auto">
                    { nav_item(Route::Dashboard, "Dashboard") }
                    { nav_item(Route::Customers, "Customers") }
                    { nav_item(Route::Accounts, "Accounts") }
                    { nav_item(Route::Analytics, "Analytics") }
                </ul>
                <button class="btn btn-outline-light btn-sm" onclick={onclick_logout}>
                    { "Logout" }
                </button>
            </div>
        </nav>
    }
}

mod api;
mod components;
mod config_file;
mod pages;
mod router;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::router::AppRouter;

#[function_component(App)]
fn app() -> Html {
    let ready = use_state(|| false);

    // Fetch the frontend config before the first navigation so API calls
    // issued by the landing page already know the backend base URL.
    {
        let ready = ready.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                config_file::load_config().await;
                ready.set(true);
            });
            || ()
        });
    }

    if !*ready {
        return html! { "Loading..." };
    }

    html! {
        <BrowserRouter>
            <NavBar />
            <main class="container py-4">
                <AppRouter />
            </main>
        </BrowserRouter>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::analytics::{self, AnalyticsSummary};

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let summary = use_state(|| None::<AnalyticsSummary>);
    let error_message = use_state(|| None::<String>);

    {
        let summary = summary.clone();
        let error_message = error_message.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match analytics::get_analytics().await {
                    Ok(data) => summary.set(Some(data)),
                    Err(err) => error_message.set(Some(err)),
                }
            });
            || ()
        });
    }

    let card = |label: &str, value: String| -> Html {
        html! {
            <div class="col-md-4 mb-3">
                <div class="card">
                    <div class="card-body">
                        <h6 class="card-subtitle text-muted mb-2">{ label }</h6>
                        <p class="card-text fs-3">{ value }</p>
                    </div>
                </div>
            </div>
        }
    };

    html! {
        <section>
            <h1 class="mb-4">{ "Dashboard" }</h1>

            { if let Some(error) = (*error_message).as_ref() {
                html! { <div class="alert alert-danger">{ error }</div> }
            } else {
                html! {}
            }}

            { match (*summary).as_ref() {
                Some(data) => html! {
                    <div class="row">
                        { card("Customers", data.total_customers.to_string()) }
                        { card("Accounts", data.total_accounts.to_string()) }
                        { card("Active accounts", data.active_accounts.to_string()) }
                    </div>
                },
                None if error_message.is_none() => html! { <p>{ "Loading..." }</p> },
                None => html! {},
            }}
        </section>
    }
}

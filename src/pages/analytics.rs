use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::analytics::{self, AnalyticsSummary};

#[function_component(Analytics)]
pub fn analytics_page() -> Html {
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

    let row = |label: &str, value: String| -> Html {
        html! {
            <tr>
                <th scope="row">{ label }</th>
                <td>{ value }</td>
            </tr>
        }
    };

    html! {
        <section>
            <h1 class="mb-4">{ "Analytics" }</h1>

            { if let Some(error) = (*error_message).as_ref() {
                html! { <div class="alert alert-danger">{ error }</div> }
            } else {
                html! {}
            }}

            { match (*summary).as_ref() {
                Some(data) => html! {
                    <table class="table w-auto">
                        <tbody>
                            { row("Total customers", data.total_customers.to_string()) }
                            { row("Total accounts", data.total_accounts.to_string()) }
                            { row("Active accounts", data.active_accounts.to_string()) }
                            { row("Inactive accounts", data.inactive_accounts.to_string()) }
                            { row(
                                "Avg accounts per customer",
                                format!("{:.2}", data.avg_accounts_per_customer),
                            ) }
                        </tbody>
                    </table>
                },
                None if error_message.is_none() => html! { <p>{ "Loading..." }</p> },
                None => html! {},
            }}
        </section>
    }
}

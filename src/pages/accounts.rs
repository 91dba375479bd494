// src/pages/accounts.rs
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api::accounts::{self, Account};

#[function_component(Accounts)]
pub fn accounts_page() -> Html {
    let entries = use_state(Vec::<Account>::new);
    let error_message = use_state(|| None::<String>);
    let input_customer_id = use_state(String::new);
    let input_name = use_state(String::new);
    let input_status = use_state(|| "active".to_string());
    let refresh = use_state(|| 0u32);

    {
        let entries = entries.clone();
        let error_message = error_message.clone();
        use_effect_with(refresh.clone(), move |_| {
            spawn_local(async move {
                match accounts::get_accounts().await {
                    Ok(list) => entries.set(list),
                    Err(err) => error_message.set(Some(err)),
                }
            });
            || ()
        });
    }

    let on_customer_id_input = {
        let customer_id = input_customer_id.clone();
        Callback::from(move |e: InputEvent| {
            customer_id.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_name_input = {
        let name = input_name.clone();
        Callback::from(move |e: InputEvent| {
            name.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_status_change = {
        let status = input_status.clone();
        Callback::from(move |e: Event| {
            status.set(e.target_unchecked_into::<HtmlSelectElement>().value());
        })
    };

    let on_create = {
        let customer_id = (*input_customer_id).clone();
        let name = (*input_name).clone();
        let status = (*input_status).clone();
        let input_customer_id = input_customer_id.clone();
        let input_name = input_name.clone();
        let error_message = error_message.clone();
        let refresh = refresh.clone();

        Callback::from(move |_| {
            let customer_id = match customer_id.parse::<i64>() {
                Ok(id) => id,
                Err(_) => {
                    error_message.set(Some("Customer ID must be a number".to_string()));
                    return;
                }
            };
            let name = name.clone();
            let status = status.clone();
            let input_customer_id = input_customer_id.clone();
            let input_name = input_name.clone();
            let error_message = error_message.clone();
            let refresh = refresh.clone();

            spawn_local(async move {
                match accounts::create_account(customer_id, &name, &status).await {
                    Ok(_created) => {
                        input_customer_id.set(String::new());
                        input_name.set(String::new());
                        error_message.set(None);
                        refresh.set(*refresh + 1);
                    }
                    Err(err) => error_message.set(Some(err)),
                }
            });
        })
    };

    let rows = entries.iter().map(|account| {
        let badge = if account.status == "active" {
            "badge bg-success"
        } else {
            "badge bg-secondary"
        };
        html! {
            <tr key={account.id}>
                <td>{ account.id }</td>
                <td>{ account.customer_id }</td>
                <td>{ &account.name }</td>
                <td><span class={badge}>{ &account.status }</span></td>
                <td>{ &account.created_at }</td>
            </tr>
        }
    });

    html! {
        <section>
            <h1 class="mb-4">{ "Accounts" }</h1>

            { if let Some(error) = (*error_message).as_ref() {
                html! { <div class="alert alert-danger">{ error }</div> }
            } else {
                html! {}
            }}

            <div class="row g-2 mb-4">
                <div class="col-md-2">
                    <input
                        class="form-control"
                        type="number"
                        placeholder="Customer ID"
                        value={(*input_customer_id).clone()}
                        oninput={on_customer_id_input}
                    />
                </div>
                <div class="col-md-4">
                    <input
                        class="form-control"
                        type="text"
                        placeholder="Account name"
                        value={(*input_name).clone()}
                        oninput={on_name_input}
                    />
                </div>
                <div class="col-md-2">
                    <select class="form-select" onchange={on_status_change}>
                        <option value="active" selected={*input_status == "active"}>
                            { "active" }
                        </option>
                        <option value="inactive" selected={*input_status == "inactive"}>
                            { "inactive" }
                        </option>
                    </select>
                </div>
                <div class="col-md-2">
                    <button
                        class="btn btn-primary"
                        onclick={on_create}
                        disabled={input_customer_id.is_empty() || input_name.is_empty()}
                    >
                        { "Add account" }
                    </button>
                </div>
            </div>

            <table class="table table-striped">
                <thead>
                    <tr>
                        <th>{ "ID" }</th>
                        <th>{ "Customer" }</th>
                        <th>{ "Name" }</th>
                        <th>{ "Status" }</th>
                        <th>{ "Created" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for rows }
                </tbody>
            </table>
        </section>
    }
}

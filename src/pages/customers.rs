// src/pages/customers.rs
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::customers::{self, Customer};

fn confirm(msg: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(msg).unwrap_or(false))
        .unwrap_or(false)
}

#[function_component(Customers)]
pub fn customers_page() -> Html {
    let entries = use_state(Vec::<Customer>::new);
    let error_message = use_state(|| None::<String>);
    let input_name = use_state(String::new);
    let input_email = use_state(String::new);
    // Bumped after every successful mutation to refetch the list
    let refresh = use_state(|| 0u32);

    {
        let entries = entries.clone();
        let error_message = error_message.clone();
        use_effect_with(refresh.clone(), move |_| {
            spawn_local(async move {
                match customers::get_customers().await {
                    Ok(list) => entries.set(list),
                    Err(err) => error_message.set(Some(err)),
                }
            });
            || ()
        });
    }

    let on_name_input = {
        let name = input_name.clone();
        Callback::from(move |e: InputEvent| {
            name.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_email_input = {
        let email = input_email.clone();
        Callback::from(move |e: InputEvent| {
            email.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_create = {
        let name = (*input_name).clone();
        let email = (*input_email).clone();
        let input_name = input_name.clone();
        let input_email = input_email.clone();
        let error_message = error_message.clone();
        let refresh = refresh.clone();

        Callback::from(move |_| {
            let name = name.clone();
            let email = email.clone();
            let input_name = input_name.clone();
            let input_email = input_email.clone();
            let error_message = error_message.clone();
            let refresh = refresh.clone();

            spawn_local(async move {
                match customers::create_customer(&name, &email).await {
                    Ok(_created) => {
                        input_name.set(String::new());
                        input_email.set(String::new());
                        error_message.set(None);
                        refresh.set(*refresh + 1);
                    }
                    Err(err) => error_message.set(Some(err)),
                }
            });
        })
    };

    let on_delete = {
        let error_message = error_message.clone();
        let refresh = refresh.clone();

        Callback::from(move |customer: Customer| {
            if !confirm(&format!("Delete customer \"{}\"?", customer.name)) {
                return;
            }
            let error_message = error_message.clone();
            let refresh = refresh.clone();

            spawn_local(async move {
                match customers::delete_customer(customer.id).await {
                    Ok(()) => {
                        error_message.set(None);
                        refresh.set(*refresh + 1);
                    }
                    Err(err) => error_message.set(Some(err)),
                }
            });
        })
    };

    let rows = entries.iter().map(|customer| {
        let on_delete = on_delete.clone();
        let entry = customer.clone();
        html! {
            <tr key={customer.id}>
                <td>{ customer.id }</td>
                <td>{ &customer.name }</td>
                <td>{ &customer.email }</td>
                <td>{ &customer.created_at }</td>
                <td>
                    <button
                        class="btn btn-outline-danger btn-sm"
                        onclick={Callback::from(move |_| on_delete.emit(entry.clone()))}
                    >
                        { "Delete" }
                    </button>
                </td>
            </tr>
        }
    });

    html! {
        <section>
            <h1 class="mb-4">{ "Customers" }</h1>

            { if let Some(error) = (*error_message).as_ref() {
                html! { <div class="alert alert-danger">{ error }</div> }
            } else {
                html! {}
            }}

            <div class="row g-2 mb-4">
                <div class="col-md-4">
                    <input
                        class="form-control"
                        type="text"
                        placeholder="Name"
                        value={(*input_name).clone()}
                        oninput={on_name_input}
                    />
                </div>
                <div class="col-md-4">
                    <input
                        class="form-control"
                        type="email"
                        placeholder="Email"
                        value={(*input_email).clone()}
                        oninput={on_email_input}
                    />
                </div>
                <div class="col-md-2">
                    <button
                        class="btn btn-primary"
                        onclick={on_create}
                        disabled={input_name.is_empty() || input_email.is_empty()}
                    >
                        { "Add customer" }
                    </button>
                </div>
            </div>

            <table class="table table-striped">
                <thead>
                    <tr>
                        <th>{ "ID" }</th>
                        <th>{ "Name" }</th>
                        <th>{ "Email" }</th>
                        <th>{ "Created" }</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { for rows }
                </tbody>
            </table>
        </section>
    }
}

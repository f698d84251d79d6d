use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_order::checkout::{Cart, CheckoutRequest, CHECKOUT_SCHEMA};
use contracts::shared::money::format_money;
use contracts::shared::validation::{FormFields, ValidationErrors};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use super::cart::{line_for, load_cart, save_cart};
use crate::shared::components::form_modal::SchemaFields;
use crate::shared::components::toast::use_toaster;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::system::auth::context::use_auth;

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let toaster = use_toaster();
    let (auth_state, _) = use_auth();

    let cart = RwSignal::new(load_cart());
    let products = RwSignal::new(Vec::<Product>::new());
    let (placed, set_placed) = signal(Option::<String>::None);

    // prefill contact details from the signed-in user
    let initial = auth_state.with_untracked(|s| {
        let mut fields = FormFields::new().with("payment_method", "card");
        if let Some(user) = &s.user_info {
            fields.set("customer_email", user.email.clone());
            if let Some(name) = &user.full_name {
                fields.set("customer_name", name.clone());
            }
        }
        fields
    });
    let fields = RwSignal::new(initial);
    let errors = RwSignal::new(ValidationErrors::default());
    let (submitting, set_submitting) = signal(false);

    let update_cart = move |f: &dyn Fn(&mut Cart)| {
        cart.update(|c| f(c));
        cart.with_untracked(save_cart);
    };

    spawn_local(async move {
        match api::fetch_available_products().await {
            Ok(list) => products.set(list),
            Err(e) => toaster.error(e),
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match cart.with_untracked(|c| CheckoutRequest::new(&fields.get_untracked(), c)) {
            Ok(request) => request,
            Err(e) => {
                if let Some(message) = e.for_field("cart") {
                    toaster.error(message);
                }
                errors.set(e);
                return;
            }
        };
        errors.set(ValidationErrors::default());
        set_submitting.set(true);

        spawn_local(async move {
            match api::submit_checkout(&request).await {
                Ok(response) => {
                    toaster.success(format!(
                        "Order {} placed, total {}",
                        response.order_number,
                        format_money(response.total)
                    ));
                    set_placed.set(Some(response.order_number));
                    update_cart(&|c| *c = Cart::default());
                }
                Err(e) => toaster.error(e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <PageFrame page_id="u001_checkout--form">
            <PageHeader title="Checkout" />

            {move || placed.get().map(|number| view! {
                <div class="alert alert--success">
                    {format!("Thank you! Your order number is {number}.")}
                </div>
            })}

            <div class="checkout">
                <section class="checkout__products">
                    <h2>"Products"</h2>
                    <For
                        each=move || products.get()
                        key=|p| p.id.clone()
                        children=move |product| {
                            let label = format!("{} - {}", product.name, format_money(product.price));
                            view! {
                                <div class="checkout__product">
                                    <span>{label}</span>
                                    <button
                                        class="button button--secondary"
                                        on:click=move |_| update_cart(&|c| c.add(line_for(&product, 1)))
                                    >
                                        {icon("plus")}
                                        " Add"
                                    </button>
                                </div>
                            }
                        }
                    />
                </section>

                <section class="checkout__cart">
                    <h2>"Your cart"</h2>
                    <Show
                        when=move || cart.with(|c| !c.is_empty())
                        fallback=|| view! { <p class="checkout__empty">"Your cart is empty."</p> }
                    >
                        <table class="checkout__lines">
                            <tbody>
                                <For
                                    each=move || cart.get().lines
                                    key=|l| (l.product_id.clone(), l.quantity)
                                    children=move |line| {
                                        let id = StoredValue::new(line.product_id.clone());
                                        let quantity = line.quantity;
                                        view! {
                                            <tr>
                                                <td>{line.product_name.clone()}</td>
                                                <td>
                                                    <input
                                                        type="number"
                                                        min="0"
                                                        class="form__input form__input--narrow"
                                                        prop:value=quantity.to_string()
                                                        on:change=move |ev| {
                                                            let qty = event_target_value(&ev).trim().parse::<u32>().unwrap_or(0);
                                                            let id = id.get_value();
                                                            update_cart(&|c| c.set_quantity(&id, qty));
                                                        }
                                                    />
                                                </td>
                                                <td class="table__cell--money">{format_money(line.line_total())}</td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                        <div class="checkout__total">
                            "Total: " {move || cart.with(|c| format_money(c.total()))}
                            " (" {move || cart.with(|c| c.item_count())} " items)"
                        </div>
                    </Show>
                </section>

                <section class="checkout__details">
                    <h2>"Delivery and payment"</h2>
                    <form on:submit=on_submit novalidate>
                        <SchemaFields schema=&CHECKOUT_SCHEMA fields=fields errors=errors disabled=submitting />
                        <button type="submit" class="btn-primary" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Placing order..." } else { "Place order" }}
                        </button>
                    </form>
                </section>
            </div>
        </PageFrame>
    }
}

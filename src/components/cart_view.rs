use web_sys::window;
use yew::prelude::*;

use crate::hooks::UseSessionHandle;
use crate::models::Cart;
use crate::services::{checkout, delete_cart_item, fetch_cart, is_unauthorized, update_cart_item};

#[derive(Properties, PartialEq)]
pub struct CartViewProps {
    pub on_checkout_complete: Callback<()>,
}

#[function_component(CartView)]
pub fn cart_view(props: &CartViewProps) -> Html {
    let session = use_context::<UseSessionHandle>().expect("SessionContextProvider ausente");
    let cart = use_state(|| None::<Cart>);
    let loading = use_state(|| false);
    let checking_out = use_state(|| false);

    // Cargar carrito al montar
    {
        let session = session.clone();
        let cart = cart.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            if let Some(token) = session.token() {
                let logout = session.logout.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    loading.set(true);
                    match fetch_cart(&token).await {
                        Ok(fetched) => {
                            log::info!("🛒 Carrito cargado: {} artículos", fetched.item_count());
                            cart.set(Some(fetched));
                        }
                        Err(e) => {
                            log::error!("❌ Error cargando el carrito: {}", e);
                            if is_unauthorized(&e) {
                                logout.emit(());
                            }
                        }
                    }
                    loading.set(false);
                });
            }
            || ()
        });
    }

    // Cambiar cantidad de una línea; llegar a cero la elimina
    let on_change_quantity = {
        let session = session.clone();
        let cart = cart.clone();

        Callback::from(move |(product_id, new_quantity): (String, i64)| {
            let Some(token) = session.token() else { return };
            let logout = session.logout.clone();
            let cart = cart.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result = if new_quantity < 1 {
                    delete_cart_item(&token, &product_id).await
                } else {
                    update_cart_item(&token, &product_id, new_quantity).await
                };

                match result {
                    Ok(updated) => cart.set(Some(updated)),
                    Err(e) => {
                        log::error!("❌ Error actualizando el carrito: {}", e);
                        if is_unauthorized(&e) {
                            logout.emit(());
                        }
                    }
                }
            });
        })
    };

    let on_remove = {
        let on_change_quantity = on_change_quantity.clone();
        Callback::from(move |product_id: String| {
            on_change_quantity.emit((product_id, 0));
        })
    };

    let on_checkout = {
        let session = session.clone();
        let cart = cart.clone();
        let checking_out = checking_out.clone();
        let on_checkout_complete = props.on_checkout_complete.clone();

        Callback::from(move |_: MouseEvent| {
            let Some(token) = session.token() else { return };
            let logout = session.logout.clone();
            let cart = cart.clone();
            let checking_out = checking_out.clone();
            let on_checkout_complete = on_checkout_complete.clone();

            wasm_bindgen_futures::spawn_local(async move {
                checking_out.set(true);
                match checkout(&token).await {
                    Ok(order) => {
                        log::info!("✅ Pedido creado: {}", order.id);
                        if let Some(win) = window() {
                            let _ = win.alert_with_message(&format!(
                                "✅ Pedido realizado!\n\nTotal: {:.2} {}",
                                order.total_amount, order.currency
                            ));
                        }
                        cart.set(None);
                        on_checkout_complete.emit(());
                    }
                    Err(e) => {
                        log::error!("❌ Error en el checkout: {}", e);
                        if is_unauthorized(&e) {
                            logout.emit(());
                        } else if let Some(win) = window() {
                            let _ = win.alert_with_message(&format!("Error en el checkout: {}", e));
                        }
                    }
                }
                checking_out.set(false);
            });
        })
    };

    if *loading {
        return html! { <div class="loading">{"Cargando carrito..."}</div> };
    }

    let Some(current_cart) = (*cart).clone() else {
        return html! { <div class="empty-state">{"Tu carrito está vacío"}</div> };
    };

    if current_cart.is_empty() {
        return html! { <div class="empty-state">{"Tu carrito está vacío"}</div> };
    }

    html! {
        <div class="cart-view">
            <h2>{"Carrito"}</h2>

            <ul class="cart-items">
                { for current_cart.items.iter().map(|item| {
                    let product_id = item.product_id.clone();
                    let quantity = item.quantity;

                    let on_minus = {
                        let on_change_quantity = on_change_quantity.clone();
                        let product_id = product_id.clone();
                        Callback::from(move |_: MouseEvent| {
                            on_change_quantity.emit((product_id.clone(), quantity - 1));
                        })
                    };
                    let on_plus = {
                        let on_change_quantity = on_change_quantity.clone();
                        let product_id = product_id.clone();
                        Callback::from(move |_: MouseEvent| {
                            on_change_quantity.emit((product_id.clone(), quantity + 1));
                        })
                    };
                    let on_delete = {
                        let on_remove = on_remove.clone();
                        let product_id = product_id.clone();
                        Callback::from(move |_: MouseEvent| {
                            on_remove.emit(product_id.clone());
                        })
                    };

                    html! {
                        <li key={item.product_id.clone()} class="cart-item">
                            <span class="cart-item-name">
                                { item.product_name.clone().unwrap_or_else(|| item.product_id.clone()) }
                            </span>
                            <div class="cart-item-quantity">
                                <button onclick={on_minus}>{"−"}</button>
                                <span>{item.quantity}</span>
                                <button onclick={on_plus}>{"+"}</button>
                            </div>
                            <span class="cart-item-subtotal">{format!("{:.2} €", item.subtotal())}</span>
                            <button class="btn-remove" onclick={on_delete}>{"🗑️"}</button>
                        </li>
                    }
                })}
            </ul>

            <div class="cart-footer">
                <span class="cart-total">{format!("Total: {:.2} €", current_cart.computed_total())}</span>
                <button class="btn-checkout" onclick={on_checkout} disabled={*checking_out}>
                    { if *checking_out { "Procesando..." } else { "Finalizar compra" } }
                </button>
            </div>
        </div>
    }
}

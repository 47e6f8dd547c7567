use yew::prelude::*;

use crate::hooks::UseSessionHandle;
use crate::models::Order;
use crate::services::{fetch_orders, is_unauthorized};

#[function_component(OrdersView)]
pub fn orders_view() -> Html {
    let session = use_context::<UseSessionHandle>().expect("SessionContextProvider ausente");
    let orders = use_state(Vec::<Order>::new);
    let loading = use_state(|| false);
    let page = use_state(|| 1u32);

    {
        let session = session.clone();
        let orders = orders.clone();
        let loading = loading.clone();
        use_effect_with(*page, move |page| {
            let page = *page;
            if let Some(token) = session.token() {
                let logout = session.logout.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    loading.set(true);
                    match fetch_orders(&token, page).await {
                        Ok(fetched) => {
                            log::info!("📄 Pedidos cargados: {}", fetched.len());
                            orders.set(fetched);
                        }
                        Err(e) => {
                            log::error!("❌ Error cargando pedidos: {}", e);
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

    let on_prev = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| {
            if *page > 1 {
                page.set(*page - 1);
            }
        })
    };
    let on_next = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| {
            page.set(*page + 1);
        })
    };

    if *loading {
        return html! { <div class="loading">{"Cargando pedidos..."}</div> };
    }

    html! {
        <div class="orders-view">
            <h2>{"Mis pedidos"}</h2>

            {
                if orders.is_empty() {
                    html! { <div class="empty-state">{"Todavía no tienes pedidos"}</div> }
                } else {
                    html! {
                        <ul class="order-list">
                            { for orders.iter().map(|order| html! {
                                <li key={order.id.clone()} class="order-card">
                                    <div class="order-header">
                                        <span class="order-id">{format!("Pedido {}", &order.id[..8.min(order.id.len())])}</span>
                                        <span class="order-date">{order.created_at_label()}</span>
                                        <span class={classes!("order-status", order.status.clone())}>{&order.status}</span>
                                    </div>
                                    <ul class="order-items">
                                        { for order.items.iter().map(|item| html! {
                                            <li class="order-item">
                                                <span>{format!("{} × {}", item.quantity, item.product_name)}</span>
                                                <span class="order-item-status">{&item.status}</span>
                                                <span>{format!("{:.2} €", item.price_at_purchase * item.quantity as f64)}</span>
                                            </li>
                                        })}
                                    </ul>
                                    <div class="order-total">
                                        {format!("Total: {:.2} {}", order.total_amount, order.currency)}
                                    </div>
                                </li>
                            })}
                        </ul>
                    }
                }
            }

            <div class="pagination">
                <button onclick={on_prev} disabled={*page == 1}>{"← Anterior"}</button>
                <span class="page-number">{format!("Página {}", *page)}</span>
                <button onclick={on_next} disabled={orders.is_empty()}>{"Siguiente →"}</button>
            </div>
        </div>
    }
}

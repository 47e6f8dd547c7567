use web_sys::{window, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::UseSessionHandle;
use crate::models::{Order, Product, ProductInput};
use crate::services::{
    create_product, delete_product, fetch_merchant_orders, fetch_products, is_unauthorized,
    update_order_item_status, update_product, upload_file,
};

/// Estados de línea de pedido que un vendedor puede fijar
const ITEM_STATUSES: [&str; 5] = ["pending", "accepted", "packing", "out_for_delivery", "delivered"];

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let session = use_context::<UseSessionHandle>().expect("SessionContextProvider ausente");
    let my_products = use_state(Vec::<Product>::new);
    let merchant_orders = use_state(Vec::<Order>::new);
    let loading = use_state(|| false);
    let reload_counter = use_state(|| 0u32);

    // Formulario de producto (controlado, para poder precargar al editar)
    let editing = use_state(|| None::<String>);
    let name = use_state(String::new);
    let description = use_state(String::new);
    let price = use_state(String::new);
    let stock = use_state(String::new);
    let category = use_state(String::new);
    let images = use_state(Vec::<String>::new);
    let uploading = use_state(|| false);

    // Cargar productos propios + pedidos con mis artículos
    {
        let session = session.clone();
        let my_products = my_products.clone();
        let merchant_orders = merchant_orders.clone();
        let loading = loading.clone();

        use_effect_with(*reload_counter, move |_| {
            let Some(seller_id) = session.user().map(|u| u.id) else {
                return;
            };
            let Some(token) = session.token() else {
                return;
            };
            let logout = session.logout.clone();

            wasm_bindgen_futures::spawn_local(async move {
                loading.set(true);

                match fetch_products(1).await {
                    Ok(all) => {
                        let mine: Vec<Product> =
                            all.into_iter().filter(|p| p.seller_id == seller_id).collect();
                        log::info!("🏪 Productos propios: {}", mine.len());
                        my_products.set(mine);
                    }
                    Err(e) => log::error!("❌ Error cargando productos: {}", e),
                }

                match fetch_merchant_orders(&token).await {
                    Ok(orders) => {
                        log::info!("📄 Pedidos de la tienda: {}", orders.len());
                        merchant_orders.set(orders);
                    }
                    Err(e) => {
                        log::error!("❌ Error cargando pedidos de la tienda: {}", e);
                        if is_unauthorized(&e) {
                            logout.emit(());
                        }
                    }
                }

                loading.set(false);
            });
        });
    }

    let reload = {
        let reload_counter = reload_counter.clone();
        Callback::from(move |_: ()| {
            reload_counter.set(*reload_counter + 1);
        })
    };

    let reset_form = {
        let editing = editing.clone();
        let name = name.clone();
        let description = description.clone();
        let price = price.clone();
        let stock = stock.clone();
        let category = category.clone();
        let images = images.clone();
        Callback::from(move |_: ()| {
            editing.set(None);
            name.set(String::new());
            description.set(String::new());
            price.set(String::new());
            stock.set(String::new());
            category.set(String::new());
            images.set(Vec::new());
        })
    };

    let text_input = |state: &UseStateHandle<String>| -> Callback<InputEvent> {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                state.set(input.value());
            }
        })
    };

    // Subir imagen del producto
    let on_file_change = {
        let session = session.clone();
        let images = images.clone();
        let uploading = uploading.clone();

        Callback::from(move |e: Event| {
            let Some(input) = e.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.item(0)) else {
                return;
            };
            let Some(token) = session.token() else {
                return;
            };

            let images = images.clone();
            let uploading = uploading.clone();
            wasm_bindgen_futures::spawn_local(async move {
                uploading.set(true);
                match upload_file(&token, &file).await {
                    Ok(response) => {
                        log::info!("💾 Imagen subida: {}", response.url);
                        let mut current = (*images).clone();
                        current.push(response.url);
                        images.set(current);
                    }
                    Err(e) => {
                        log::error!("❌ Error subiendo imagen: {}", e);
                        if let Some(win) = window() {
                            let _ = win.alert_with_message(&format!("Error subiendo imagen: {}", e));
                        }
                    }
                }
                uploading.set(false);
            });
        })
    };

    // Crear o actualizar producto
    let on_submit = {
        let session = session.clone();
        let editing = editing.clone();
        let name = name.clone();
        let description = description.clone();
        let price = price.clone();
        let stock = stock.clone();
        let category = category.clone();
        let images = images.clone();
        let reload = reload.clone();
        let reset_form = reset_form.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(token) = session.token() else {
                return;
            };

            let (Ok(parsed_price), Ok(parsed_stock)) =
                (price.parse::<f64>(), stock.parse::<i64>())
            else {
                if let Some(win) = window() {
                    let _ = win.alert_with_message("Precio o stock no válidos");
                }
                return;
            };

            let input = ProductInput {
                name: (*name).clone(),
                description: (*description).clone(),
                price: parsed_price,
                stock: parsed_stock,
                category: (*category).clone(),
                images: (!images.is_empty()).then(|| (*images).clone()),
            };

            let editing_id = (*editing).clone();
            let logout = session.logout.clone();
            let reload = reload.clone();
            let reset_form = reset_form.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result = match &editing_id {
                    Some(product_id) => update_product(&token, product_id, &input).await,
                    None => create_product(&token, &input).await,
                };

                match result {
                    Ok(product) => {
                        log::info!("✅ Producto guardado: {}", product.name);
                        reset_form.emit(());
                        reload.emit(());
                    }
                    Err(e) => {
                        log::error!("❌ Error guardando producto: {}", e);
                        if is_unauthorized(&e) {
                            logout.emit(());
                        } else if let Some(win) = window() {
                            let _ = win.alert_with_message(&format!("Error guardando producto: {}", e));
                        }
                    }
                }
            });
        })
    };

    let on_edit = {
        let editing = editing.clone();
        let name = name.clone();
        let description = description.clone();
        let price = price.clone();
        let stock = stock.clone();
        let category = category.clone();
        let images = images.clone();

        Callback::from(move |product: Product| {
            editing.set(Some(product.id.clone()));
            name.set(product.name.clone());
            description.set(product.description.clone());
            price.set(format!("{}", product.price));
            stock.set(format!("{}", product.stock));
            category.set(product.category.clone());
            images.set(product.images.clone().unwrap_or_default());
        })
    };

    let on_delete = {
        let session = session.clone();
        let reload = reload.clone();

        Callback::from(move |product_id: String| {
            let confirmed = window()
                .and_then(|w| w.confirm_with_message("¿Eliminar este producto?").ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }

            let Some(token) = session.token() else {
                return;
            };
            let logout = session.logout.clone();
            let reload = reload.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match delete_product(&token, &product_id).await {
                    Ok(()) => {
                        log::info!("🗑️ Producto eliminado");
                        reload.emit(());
                    }
                    Err(e) => {
                        log::error!("❌ Error eliminando producto: {}", e);
                        if is_unauthorized(&e) {
                            logout.emit(());
                        }
                    }
                }
            });
        })
    };

    // Cambiar el estado de una línea de pedido
    let on_item_status_change = {
        let session = session.clone();
        let reload = reload.clone();

        Callback::from(move |(order_id, product_id, status): (String, String, String)| {
            let Some(token) = session.token() else {
                return;
            };
            let logout = session.logout.clone();
            let reload = reload.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match update_order_item_status(&token, &order_id, &product_id, &status).await {
                    Ok(_) => {
                        log::info!("✅ Estado actualizado: {} → {}", product_id, status);
                        reload.emit(());
                    }
                    Err(e) => {
                        log::error!("❌ Error actualizando estado: {}", e);
                        if is_unauthorized(&e) {
                            logout.emit(());
                        }
                    }
                }
            });
        })
    };

    html! {
        <div class="dashboard">
            <h2>{"Dashboard de vendedor"}</h2>

            <section class="product-form-section">
                <h3>{ if editing.is_some() { "Editar producto" } else { "Nuevo producto" } }</h3>
                <form class="product-form" onsubmit={on_submit}>
                    <input type="text" placeholder="Nombre" value={(*name).clone()}
                        oninput={text_input(&name)} required=true />
                    <input type="text" placeholder="Descripción" value={(*description).clone()}
                        oninput={text_input(&description)} />
                    <input type="text" placeholder="Precio" value={(*price).clone()}
                        oninput={text_input(&price)} required=true />
                    <input type="text" placeholder="Stock" value={(*stock).clone()}
                        oninput={text_input(&stock)} required=true />
                    <input type="text" placeholder="Categoría" value={(*category).clone()}
                        oninput={text_input(&category)} required=true />

                    <div class="image-upload">
                        <input type="file" accept="image/*" onchange={on_file_change} disabled={*uploading} />
                        { if *uploading { html! { <span>{"Subiendo..."}</span> } } else { html! {} } }
                        <span class="image-count">{format!("{} imágenes", images.len())}</span>
                    </div>

                    <div class="form-actions">
                        <button type="submit" class="btn-save">
                            { if editing.is_some() { "Guardar cambios" } else { "Crear producto" } }
                        </button>
                        {
                            if editing.is_some() {
                                let reset_form = reset_form.clone();
                                html! {
                                    <button type="button" class="btn-cancel"
                                        onclick={Callback::from(move |_: MouseEvent| reset_form.emit(()))}>
                                        {"Cancelar"}
                                    </button>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                </form>
            </section>

            <section class="my-products-section">
                <h3>{"Mis productos"}</h3>
                {
                    if *loading {
                        html! { <div class="loading">{"Cargando..."}</div> }
                    } else if my_products.is_empty() {
                        html! { <div class="empty-state">{"Todavía no has publicado productos"}</div> }
                    } else {
                        html! {
                            <ul class="seller-product-list">
                                { for my_products.iter().map(|product| {
                                    let edit = {
                                        let on_edit = on_edit.clone();
                                        let product = product.clone();
                                        Callback::from(move |_: MouseEvent| on_edit.emit(product.clone()))
                                    };
                                    let delete = {
                                        let on_delete = on_delete.clone();
                                        let product_id = product.id.clone();
                                        Callback::from(move |_: MouseEvent| on_delete.emit(product_id.clone()))
                                    };
                                    html! {
                                        <li key={product.id.clone()} class="seller-product">
                                            <span class="seller-product-name">{&product.name}</span>
                                            <span>{format!("{:.2} €", product.price)}</span>
                                            <span>{format!("stock {}", product.stock)}</span>
                                            <button onclick={edit}>{"Editar"}</button>
                                            <button class="btn-remove" onclick={delete}>{"Eliminar"}</button>
                                        </li>
                                    }
                                })}
                            </ul>
                        }
                    }
                }
            </section>

            <section class="merchant-orders-section">
                <h3>{"Pedidos de la tienda"}</h3>
                {
                    if merchant_orders.is_empty() {
                        html! { <div class="empty-state">{"No hay pedidos con tus productos"}</div> }
                    } else {
                        html! {
                            <ul class="order-list">
                                { for merchant_orders.iter().map(|order| html! {
                                    <li key={order.id.clone()} class="order-card">
                                        <div class="order-header">
                                            <span class="order-id">{format!("Pedido {}", &order.id[..8.min(order.id.len())])}</span>
                                            <span class="order-date">{order.created_at_label()}</span>
                                        </div>
                                        <ul class="order-items">
                                            { for order.items.iter().map(|item| {
                                                let onchange = {
                                                    let on_item_status_change = on_item_status_change.clone();
                                                    let order_id = order.id.clone();
                                                    let product_id = item.product_id.clone();
                                                    Callback::from(move |e: Event| {
                                                        if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                                                            on_item_status_change.emit((
                                                                order_id.clone(),
                                                                product_id.clone(),
                                                                select.value(),
                                                            ));
                                                        }
                                                    })
                                                };
                                                html! {
                                                    <li class="order-item">
                                                        <span>{format!("{} × {}", item.quantity, item.product_name)}</span>
                                                        <select {onchange}>
                                                            { for ITEM_STATUSES.iter().map(|status| html! {
                                                                <option value={*status} selected={item.status == *status}>
                                                                    {*status}
                                                                </option>
                                                            })}
                                                        </select>
                                                    </li>
                                                }
                                            })}
                                        </ul>
                                    </li>
                                })}
                            </ul>
                        }
                    }
                }
            </section>
        </div>
    }
}

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::UseSessionHandle;
use crate::models::Product;
use crate::services::{add_to_cart, fetch_products, is_unauthorized};
use super::ProductCard;

#[function_component(Catalog)]
pub fn catalog() -> Html {
    let session = use_context::<UseSessionHandle>().expect("SessionContextProvider ausente");
    let products = use_state(Vec::<Product>::new);
    let loading = use_state(|| false);
    let page = use_state(|| 1u32);
    let feedback = use_state(|| None::<String>);

    // Cargar catálogo al montar y al cambiar de página
    {
        let products = products.clone();
        let loading = loading.clone();
        use_effect_with(*page, move |page| {
            let page = *page;
            wasm_bindgen_futures::spawn_local(async move {
                loading.set(true);
                match fetch_products(page).await {
                    Ok(fetched) => {
                        log::info!("📦 Productos cargados: {}", fetched.len());
                        products.set(fetched);
                    }
                    Err(e) => {
                        log::error!("❌ Error cargando el catálogo: {}", e);
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_add_to_cart = {
        let session = session.clone();
        let feedback = feedback.clone();

        Callback::from(move |product: Product| {
            let Some(token) = session.token() else {
                log::warn!("⚠️ Añadir al carrito sin sesión");
                return;
            };

            let logout = session.logout.clone();
            let feedback = feedback.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match add_to_cart(&token, &product, 1).await {
                    Ok(cart) => {
                        log::info!("🛒 {} añadido, {} artículos en el carrito", product.name, cart.item_count());
                        feedback.set(Some(format!("✅ {} añadido al carrito", product.name)));

                        // El aviso desaparece solo
                        let feedback = feedback.clone();
                        Timeout::new(2500, move || {
                            feedback.set(None);
                        })
                        .forget();
                    }
                    Err(e) => {
                        log::error!("❌ Error añadiendo al carrito: {}", e);
                        if is_unauthorized(&e) {
                            // Token caducado: la sesión restaurada ya no vale
                            logout.emit(());
                        }
                    }
                }
            });
        })
    };

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

    let page_full = products.len() as u32 >= CONFIG.catalog_config.page_size;

    html! {
        <div class="catalog">
            <div class="catalog-header">
                <h2>{"Catálogo"}</h2>
                {
                    if let Some(msg) = &*feedback {
                        html! { <div class="catalog-feedback">{msg}</div> }
                    } else {
                        html! {}
                    }
                }
            </div>

            {
                if *loading {
                    html! { <div class="loading">{"Cargando productos..."}</div> }
                } else if products.is_empty() {
                    html! { <div class="empty-state">{"No hay productos en esta página"}</div> }
                } else {
                    html! {
                        <div class="product-grid">
                            { for products.iter().map(|product| html! {
                                <ProductCard
                                    key={product.id.clone()}
                                    product={product.clone()}
                                    on_add_to_cart={on_add_to_cart.clone()}
                                />
                            })}
                        </div>
                    }
                }
            }

            <div class="pagination">
                <button onclick={on_prev} disabled={*page == 1}>{"← Anterior"}</button>
                <span class="page-number">{format!("Página {}", *page)}</span>
                <button onclick={on_next} disabled={!page_full}>{"Siguiente →"}</button>
            </div>
        </div>
    }
}

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::UseSessionHandle;
use crate::models::{Product, Review, ReviewInput};
use crate::services::{create_review, fetch_reviews};

#[derive(Properties, PartialEq, Clone)]
pub struct ProductCardProps {
    pub product: Product,
    pub on_add_to_cart: Callback<Product>,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let session = use_context::<UseSessionHandle>().expect("SessionContextProvider ausente");
    let p = &props.product;

    let show_reviews = use_state(|| false);
    let reviews = use_state(Vec::<Review>::new);
    let rating_ref = use_node_ref();
    let comment_ref = use_node_ref();

    let load_reviews = {
        let reviews = reviews.clone();
        let product_id = p.id.clone();
        move || {
            let reviews = reviews.clone();
            let product_id = product_id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_reviews(&product_id).await {
                    Ok(fetched) => reviews.set(fetched),
                    Err(e) => log::error!("❌ Error cargando reseñas: {}", e),
                }
            });
        }
    };

    let on_toggle_reviews = {
        let show_reviews = show_reviews.clone();
        let load_reviews = load_reviews.clone();
        Callback::from(move |_: MouseEvent| {
            if !*show_reviews {
                load_reviews();
            }
            show_reviews.set(!*show_reviews);
        })
    };

    let on_add = {
        let product = p.clone();
        let cb = props.on_add_to_cart.clone();
        Callback::from(move |_: MouseEvent| {
            cb.emit(product.clone());
        })
    };

    let on_submit_review = {
        let session = session.clone();
        let rating_ref = rating_ref.clone();
        let comment_ref = comment_ref.clone();
        let product_id = p.id.clone();
        let load_reviews = load_reviews.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(token) = session.token() else {
                return;
            };
            let (Some(rating_select), Some(comment_input)) = (
                rating_ref.cast::<HtmlSelectElement>(),
                comment_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let review = ReviewInput {
                product_id: product_id.clone(),
                rating: rating_select.value().parse().unwrap_or(5),
                comment: comment_input.value(),
            };
            comment_input.set_value("");

            let load_reviews = load_reviews.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match create_review(&token, &review).await {
                    Ok(_) => {
                        log::info!("⭐ Reseña publicada");
                        load_reviews();
                    }
                    Err(e) => log::error!("❌ Error publicando reseña: {}", e),
                }
            });
        })
    };

    let stock_class = if p.in_stock() { "stock-badge" } else { "stock-badge out" };

    html! {
        <div class="product-card">
            {
                if let Some(image) = p.cover_image() {
                    html! { <img class="product-image" src={image.to_string()} alt={p.name.clone()} /> }
                } else {
                    html! { <div class="product-image placeholder">{"📦"}</div> }
                }
            }

            <div class="product-info">
                <div class="product-name-row">
                    <h3 class="product-name">{&p.name}</h3>
                    <span class="product-category">{&p.category}</span>
                </div>
                <p class="product-description">{&p.description}</p>
                <div class="product-footer">
                    <span class="product-price">{format!("{:.2} €", p.price)}</span>
                    <span class={stock_class}>
                        { if p.in_stock() { format!("{} en stock", p.stock) } else { "Agotado".to_string() } }
                    </span>
                </div>
            </div>

            <div class="product-actions">
                <button
                    class="btn-add-cart"
                    onclick={on_add}
                    disabled={!p.in_stock() || !session.is_logged_in()}
                >
                    {"Añadir al carrito"}
                </button>
                <button class="btn-reviews" onclick={on_toggle_reviews}>
                    { if *show_reviews { "Ocultar reseñas" } else { "Ver reseñas" } }
                </button>
            </div>

            if *show_reviews {
                <div class="reviews-panel">
                    {
                        if reviews.is_empty() {
                            html! { <p class="no-reviews">{"Sin reseñas todavía"}</p> }
                        } else {
                            html! {
                                <ul class="review-list">
                                    { for reviews.iter().map(|r| html! {
                                        <li key={r.id.clone()} class="review-item">
                                            <span class="review-stars">{ ("⭐".repeat(r.rating.clamp(1, 5) as usize)) }</span>
                                            <span class="review-author">{&r.user_name}</span>
                                            <p class="review-comment">{&r.comment}</p>
                                        </li>
                                    })}
                                </ul>
                            }
                        }
                    }

                    if session.is_logged_in() {
                        <form class="review-form" onsubmit={on_submit_review}>
                            <select ref={rating_ref}>
                                <option value="5" selected=true>{"⭐⭐⭐⭐⭐"}</option>
                                <option value="4">{"⭐⭐⭐⭐"}</option>
                                <option value="3">{"⭐⭐⭐"}</option>
                                <option value="2">{"⭐⭐"}</option>
                                <option value="1">{"⭐"}</option>
                            </select>
                            <input
                                type="text"
                                placeholder="Escribe tu reseña"
                                ref={comment_ref}
                                required=true
                            />
                            <button type="submit">{"Publicar"}</button>
                        </form>
                    }
                </div>
            }
        </div>
    }
}

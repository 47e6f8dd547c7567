use yew::prelude::*;

use crate::hooks::UseSessionHandle;
use super::app::View;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub current_view: View,
    pub on_navigate: Callback<View>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let session = use_context::<UseSessionHandle>().expect("SessionContextProvider ausente");
    let user = session.user();

    let nav_button = |view: View, label: &str| -> Html {
        let on_navigate = props.on_navigate.clone();
        let active = (props.current_view == view).then_some("active");
        html! {
            <button
                class={classes!("nav-link", active)}
                onclick={Callback::from(move |_| on_navigate.emit(view))}
            >
                {label}
            </button>
        }
    };

    let on_logout = {
        let logout = session.logout.clone();
        Callback::from(move |_: MouseEvent| {
            logout.emit(());
        })
    };

    let can_manage_store = user
        .as_ref()
        .map(|u| u.role.can_manage_store())
        .unwrap_or(false);

    html! {
        <header class="navbar">
            <div class="navbar-brand">
                <span class="brand-icon">{"🛍️"}</span>
                <h1>{"Marketplace"}</h1>
            </div>

            <nav class="navbar-links">
                { nav_button(View::Catalog, "Catálogo") }
                { nav_button(View::Cart, "Carrito") }
                { nav_button(View::Orders, "Pedidos") }
                {
                    if can_manage_store {
                        nav_button(View::Dashboard, "Dashboard")
                    } else {
                        html! {}
                    }
                }
                { nav_button(View::Profile, "Perfil") }
            </nav>

            <div class="navbar-user">
                {
                    if let Some(user) = &user {
                        html! {
                            <>
                                <span class="user-name">{&user.full_name}</span>
                                <span class="user-role">{user.role.as_str()}</span>
                            </>
                        }
                    } else {
                        html! {}
                    }
                }
                <button class="btn-logout" onclick={on_logout}>{"Salir"}</button>
            </div>
        </header>
    }
}

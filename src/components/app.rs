use yew::prelude::*;

use crate::hooks::{SessionContextProvider, UseSessionHandle};
use crate::models::UserProfile;
use super::{CartView, Catalog, Dashboard, LoginScreen, Navbar, OrdersView, ProfileView, SignupScreen};

/// Vista activa de la app (sin router: navegación por estado, igual que
/// el resto de la UI)
#[derive(Clone, Copy, PartialEq)]
pub enum View {
    Catalog,
    Cart,
    Orders,
    Dashboard,
    Profile,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionContextProvider>
            <Shell />
        </SessionContextProvider>
    }
}

#[function_component(Shell)]
fn shell() -> Html {
    let session = use_context::<UseSessionHandle>().expect("SessionContextProvider ausente");
    let view = use_state(|| View::Catalog);
    let show_signup = use_state(|| false);

    // Mientras se restaura la sesión desde localStorage no se decide nada
    if session.is_initializing() {
        return html! {
            <div class="splash-screen">
                <div class="splash-logo">{"🛍️"}</div>
                <p>{"Cargando..."}</p>
            </div>
        };
    }

    // Sin sesión se muestra login/registro. Logout nos trae aquí:
    // esta rama ES la redirección a la pantalla de login.
    if !session.is_logged_in() {
        if *show_signup {
            let on_back_to_login = {
                let show_signup = show_signup.clone();
                Callback::from(move |_| show_signup.set(false))
            };
            return html! { <SignupScreen {on_back_to_login} /> };
        }

        let on_logged_in = {
            let view = view.clone();
            Callback::from(move |profile: UserProfile| {
                // Vendedores y admins aterrizan en el dashboard
                if profile.role.can_manage_store() {
                    view.set(View::Dashboard);
                } else {
                    view.set(View::Catalog);
                }
            })
        };
        let on_show_signup = {
            let show_signup = show_signup.clone();
            Callback::from(move |_| show_signup.set(true))
        };
        return html! { <LoginScreen {on_logged_in} {on_show_signup} /> };
    }

    let on_navigate = {
        let view = view.clone();
        Callback::from(move |v: View| view.set(v))
    };

    let on_checkout_complete = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::Orders))
    };

    html! {
        <>
            <Navbar current_view={*view} on_navigate={on_navigate} />
            <main class="main-content">
                {
                    match *view {
                        View::Catalog => html! { <Catalog /> },
                        View::Cart => html! { <CartView {on_checkout_complete} /> },
                        View::Orders => html! { <OrdersView /> },
                        View::Dashboard => html! { <Dashboard /> },
                        View::Profile => html! { <ProfileView /> },
                    }
                }
            </main>
        </>
    }
}

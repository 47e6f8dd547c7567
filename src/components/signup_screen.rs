use web_sys::{window, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::models::{SignupRequest, UserRole};
use crate::services::signup;

#[derive(Properties, PartialEq)]
pub struct SignupScreenProps {
    pub on_back_to_login: Callback<()>,
}

#[function_component(SignupScreen)]
pub fn signup_screen(props: &SignupScreenProps) -> Html {
    let full_name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let role_ref = use_node_ref();
    let loading = use_state(|| false);

    let on_submit = {
        let full_name_ref = full_name_ref.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let role_ref = role_ref.clone();
        let loading = loading.clone();
        let on_back_to_login = props.on_back_to_login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(name_input), Some(email_input), Some(password_input), Some(role_select)) = (
                full_name_ref.cast::<HtmlInputElement>(),
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
                role_ref.cast::<HtmlSelectElement>(),
            ) {
                let request = SignupRequest {
                    full_name: name_input.value(),
                    email: email_input.value(),
                    password: password_input.value(),
                };

                if request.full_name.is_empty() || request.email.is_empty() || request.password.is_empty() {
                    window()
                        .unwrap()
                        .alert_with_message("Por favor, completa todos los campos")
                        .ok();
                    return;
                }

                let role = if role_select.value() == "seller" {
                    UserRole::Seller
                } else {
                    UserRole::Consumer
                };

                let loading = loading.clone();
                let on_back_to_login = on_back_to_login.clone();

                loading.set(true);
                wasm_bindgen_futures::spawn_local(async move {
                    match signup(request, role).await {
                        Ok(profile) => {
                            log::info!("✅ Cuenta creada: {}", profile.email);
                            if let Some(win) = window() {
                                let _ = win.alert_with_message(
                                    "✅ Cuenta creada!\n\nYa puedes iniciar sesión con tu email y contraseña.",
                                );
                            }
                            on_back_to_login.emit(());
                        }
                        Err(e) => {
                            log::error!("❌ Error en registro: {}", e);
                            if let Some(win) = window() {
                                let _ = win.alert_with_message(&format!("❌ Error en el registro:\n{}", e));
                            }
                        }
                    }
                    loading.set(false);
                });
            }
        })
    };

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="login-logo">
                        <div class="logo-icon">{"🛍️"}</div>
                    </div>
                    <h1>{"Crear cuenta"}</h1>
                    <p>{"Compra o vende en Marketplace"}</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="full_name">{"Nombre completo"}</label>
                        <input
                            type="text"
                            id="full_name"
                            name="full_name"
                            placeholder="Nombre y apellidos"
                            ref={full_name_ref}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            placeholder="usuario@ejemplo.com"
                            ref={email_ref}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Contraseña"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            ref={password_ref}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="role">{"Tipo de cuenta"}</label>
                        <select id="role" name="role" ref={role_ref}>
                            <option value="consumer" selected=true>{"Comprador"}</option>
                            <option value="seller">{"Vendedor"}</option>
                        </select>
                    </div>

                    <button type="submit" class="btn-login" disabled={*loading}>
                        <span class="btn-text">
                            { if *loading { "Creando cuenta..." } else { "Registrarme" } }
                        </span>
                    </button>

                    <div class="login-footer">
                        <button
                            type="button"
                            class="btn-register-link"
                            onclick={props.on_back_to_login.reform(|_| ())}
                        >
                            {"Volver al login"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

use web_sys::{window, HtmlInputElement};
use yew::prelude::*;

use crate::hooks::UseSessionHandle;
use crate::models::UserProfile;
use crate::services::{fetch_me, perform_login};

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    pub on_logged_in: Callback<UserProfile>,
    pub on_show_signup: Callback<()>,
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let session = use_context::<UseSessionHandle>().expect("SessionContextProvider ausente");
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let loading = loading.clone();
        let error = error.clone();
        let login = session.login.clone();
        let on_logged_in = props.on_logged_in.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                let email = email_input.value();
                let password = password_input.value();

                if email.is_empty() || password.is_empty() {
                    window()
                        .unwrap()
                        .alert_with_message("Por favor, completa todos los campos")
                        .ok();
                    return;
                }

                let loading = loading.clone();
                let error = error.clone();
                let login = login.clone();
                let on_logged_in = on_logged_in.clone();

                loading.set(true);
                error.set(None);

                wasm_bindgen_futures::spawn_local(async move {
                    // El backend valida las credenciales; aquí solo se
                    // encadenan token y perfil para crear la sesión
                    match perform_login(&email, &password).await {
                        Ok(token_response) => {
                            let token = token_response.access_token;
                            match fetch_me(&token).await {
                                Ok(profile) => {
                                    log::info!("✅ Login exitoso: {}", profile.email);
                                    login.emit((token, profile.clone()));
                                    on_logged_in.emit(profile);
                                }
                                Err(e) => {
                                    log::error!("❌ Error obteniendo el perfil: {}", e);
                                    error.set(Some("No se pudo cargar tu perfil".to_string()));
                                }
                            }
                        }
                        Err(e) => {
                            log::error!("❌ Error en login: {}", e);
                            error.set(Some("Email o contraseña incorrectos".to_string()));
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
                    <h1>{"Marketplace"}</h1>
                    <p>{"Inicia sesión para acceder a tu tienda"}</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
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
                            placeholder="Ingresa tu contraseña"
                            ref={password_ref}
                            required=true
                        />
                    </div>

                    {
                        if let Some(msg) = &*error {
                            html! { <p class="login-error">{msg}</p> }
                        } else {
                            html! {}
                        }
                    }

                    <button type="submit" class="btn-login" disabled={*loading}>
                        <span class="btn-text">
                            { if *loading { "Entrando..." } else { "Iniciar Sesión" } }
                        </span>
                    </button>

                    <div class="login-footer">
                        <p class="register-text">{"¿Todavía no tienes cuenta?"}</p>
                        <button
                            type="button"
                            class="btn-register-link"
                            onclick={props.on_show_signup.reform(|_| ())}
                        >
                            {"Crear una cuenta"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

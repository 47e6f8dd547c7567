use web_sys::{window, HtmlInputElement};
use yew::prelude::*;

use crate::hooks::UseSessionHandle;
use crate::models::ProfileUpdate;
use crate::services::{delete_account, is_unauthorized, update_profile};

#[function_component(ProfileView)]
pub fn profile_view() -> Html {
    let session = use_context::<UseSessionHandle>().expect("SessionContextProvider ausente");
    let saving = use_state(|| false);
    let message = use_state(|| None::<String>);
    let full_name_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let address_ref = use_node_ref();

    let Some(user) = session.user() else {
        return html! { <div class="empty-state">{"Sin sesión"}</div> };
    };

    let on_submit = {
        let session = session.clone();
        let saving = saving.clone();
        let message = message.clone();
        let full_name_ref = full_name_ref.clone();
        let phone_ref = phone_ref.clone();
        let address_ref = address_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(token) = session.token() else {
                return;
            };
            let (Some(name_input), Some(phone_input), Some(address_input)) = (
                full_name_ref.cast::<HtmlInputElement>(),
                phone_ref.cast::<HtmlInputElement>(),
                address_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let non_empty = |value: String| (!value.is_empty()).then_some(value);
            let updates = ProfileUpdate {
                full_name: non_empty(name_input.value()),
                phone_number: non_empty(phone_input.value()),
                address: non_empty(address_input.value()),
            };

            let login = session.login.clone();
            let logout = session.logout.clone();
            let saving = saving.clone();
            let message = message.clone();

            wasm_bindgen_futures::spawn_local(async move {
                saving.set(true);
                match update_profile(&token, &updates).await {
                    Ok(updated) => {
                        log::info!("✅ Perfil actualizado: {}", updated.email);
                        // Refrescar la identidad de la sesión con el mismo
                        // token (reemplazo completo, nunca parcial)
                        login.emit((token.clone(), updated));
                        message.set(Some("✅ Perfil guardado".to_string()));
                    }
                    Err(e) => {
                        log::error!("❌ Error actualizando perfil: {}", e);
                        if is_unauthorized(&e) {
                            logout.emit(());
                        } else {
                            message.set(Some(format!("❌ {}", e)));
                        }
                    }
                }
                saving.set(false);
            });
        })
    };

    let on_delete_account = {
        let session = session.clone();

        Callback::from(move |_: MouseEvent| {
            let confirmed = window()
                .and_then(|w| {
                    w.confirm_with_message("¿Eliminar tu cuenta? Esta acción no se puede deshacer.")
                        .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }

            let Some(token) = session.token() else {
                return;
            };
            let logout = session.logout.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match delete_account(&token).await {
                    Ok(()) => {
                        log::info!("🗑️ Cuenta eliminada");
                        logout.emit(());
                    }
                    Err(e) => {
                        log::error!("❌ Error eliminando la cuenta: {}", e);
                        if is_unauthorized(&e) {
                            logout.emit(());
                        } else if let Some(win) = window() {
                            let _ = win.alert_with_message(&format!("Error eliminando la cuenta: {}", e));
                        }
                    }
                }
            });
        })
    };

    html! {
        <div class="profile-view">
            <h2>{"Mi perfil"}</h2>

            <div class="profile-identity">
                <span class="profile-email">{&user.email}</span>
                <span class="profile-role">{user.role.as_str()}</span>
            </div>

            <form class="profile-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="full_name">{"Nombre completo"}</label>
                    <input
                        type="text"
                        id="full_name"
                        ref={full_name_ref}
                        value={user.full_name.clone()}
                    />
                </div>

                <div class="form-group">
                    <label for="phone_number">{"Teléfono"}</label>
                    <input
                        type="text"
                        id="phone_number"
                        ref={phone_ref}
                        value={user.phone_number.clone().unwrap_or_default()}
                    />
                </div>

                <div class="form-group">
                    <label for="address">{"Dirección"}</label>
                    <input
                        type="text"
                        id="address"
                        ref={address_ref}
                        value={user.address.clone().unwrap_or_default()}
                    />
                </div>

                {
                    if let Some(msg) = &*message {
                        html! { <p class="profile-message">{msg}</p> }
                    } else {
                        html! {}
                    }
                }

                <button type="submit" class="btn-save" disabled={*saving}>
                    { if *saving { "Guardando..." } else { "Guardar cambios" } }
                </button>
            </form>

            <div class="danger-zone">
                <button class="btn-delete-account" onclick={on_delete_account}>
                    {"Eliminar cuenta"}
                </button>
            </div>
        </div>
    }
}

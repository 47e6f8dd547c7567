// ============================================================================
// USE SESSION HOOK - Estado de sesión para las vistas
// ============================================================================
// Envuelve el SessionManager en un hook de Yew: restaura la sesión al
// montar y expone callbacks de login/logout que re-renderizan el árbol.
// ============================================================================

use yew::prelude::*;

use crate::models::UserProfile;
use crate::session::{LocalSessionStorage, Session, SessionManager};

/// Instantánea del estado de sesión que ven los componentes
#[derive(Clone, PartialEq)]
pub struct SessionState {
    pub session: Option<Session>,
    pub is_initializing: bool,
}

#[derive(Clone)]
pub struct UseSessionHandle {
    pub state: UseStateHandle<SessionState>,
    pub login: Callback<(String, UserProfile)>,
    pub logout: Callback<()>,
}

impl PartialEq for UseSessionHandle {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl UseSessionHandle {
    pub fn session(&self) -> Option<Session> {
        self.state.session.clone()
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.state.session.as_ref().map(|s| s.user.clone())
    }

    pub fn token(&self) -> Option<String> {
        self.state.session.as_ref().map(|s| s.token.clone())
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.session.is_some()
    }

    /// Las vistas que dependen de la sesión esperan a que esto sea false
    pub fn is_initializing(&self) -> bool {
        self.state.is_initializing
    }
}

#[hook]
pub fn use_session() -> UseSessionHandle {
    // Un único manager por pestaña, creado en el provider y nunca recreado
    let manager = use_memo((), |_| SessionManager::new(LocalSessionStorage));
    let state = use_state(|| SessionState {
        session: None,
        is_initializing: true,
    });

    // Restaurar sesión persistida al montar
    {
        let manager = manager.clone();
        let state = state.clone();
        use_effect_with((), move |_| {
            manager.initialize();
            state.set(SessionState {
                session: manager.current(),
                is_initializing: false,
            });
            || ()
        });
    }

    // Login callback
    let login = {
        let manager = manager.clone();
        let state = state.clone();
        Callback::from(move |(token, user): (String, UserProfile)| {
            manager.login(token, user);
            state.set(SessionState {
                session: manager.current(),
                is_initializing: manager.is_initializing(),
            });
        })
    };

    // Logout callback
    let logout = {
        let manager = manager.clone();
        let state = state.clone();
        Callback::from(move |_| {
            manager.logout();
            state.set(SessionState {
                session: None,
                is_initializing: manager.is_initializing(),
            });
        })
    };

    UseSessionHandle {
        state,
        login,
        logout,
    }
}

// ============================================================================
// SESSION MANAGER - Token + perfil del usuario autenticado
// ============================================================================
// Invariante: token y perfil se guardan y se limpian JUNTOS. Un estado
// persistido parcial (token sin perfil, o al revés) se trata como corrupto
// y se limpia por completo en lugar de adivinar.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::UserProfile;
use crate::session::storage::SessionStorage;
use crate::utils::{STORAGE_KEY_ACCESS_TOKEN, STORAGE_KEY_USER_DATA};

/// Sesión activa: credencial + identidad, siempre en pareja
#[derive(Clone, PartialEq, Debug)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

/// Gestor de sesión compartido por toda la app.
///
/// Clonarlo es barato: los clones comparten el mismo estado interior
/// (una sola sesión por pestaña).
#[derive(Clone)]
pub struct SessionManager<S: SessionStorage> {
    storage: S,
    session: Rc<RefCell<Option<Session>>>,
    initializing: Rc<RefCell<bool>>,
}

impl<S: SessionStorage> SessionManager<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            session: Rc::new(RefCell::new(None)),
            initializing: Rc::new(RefCell::new(true)),
        }
    }

    /// Restaura la sesión persistida. Se invoca UNA vez al arrancar.
    ///
    /// Solo lee localStorage, nunca la red: un token caducado se detecta
    /// más tarde, cuando el API devuelve 401 y la vista hace logout.
    pub fn initialize(&self) {
        let token = self.storage.get(STORAGE_KEY_ACCESS_TOKEN);
        let user_json = self.storage.get(STORAGE_KEY_USER_DATA);

        match (token, user_json) {
            (Some(token), Some(user_json)) => {
                // Validación de forma completa: campos requeridos + rol
                // dentro del conjunto cerrado
                match serde_json::from_str::<UserProfile>(&user_json) {
                    Ok(user) => {
                        log::info!("✅ Sesión restaurada: {}", user.email);
                        *self.session.borrow_mut() = Some(Session { token, user });
                    }
                    Err(e) => {
                        log::warn!("⚠️ Perfil persistido corrupto, limpiando sesión: {}", e);
                        self.logout();
                    }
                }
            }
            (None, None) => {
                log::info!("ℹ️ No hay sesión guardada");
            }
            _ => {
                // Una clave sin la otra: estado parcial, se limpia entero
                log::warn!("⚠️ Sesión persistida parcial, limpiando");
                self.logout();
            }
        }

        *self.initializing.borrow_mut() = false;
    }

    /// Inicia sesión con un token y un perfil ya validados contra el
    /// backend por el caller. Persiste primero, luego actualiza memoria:
    /// ambos valores se vuelven visibles juntos.
    pub fn login(&self, token: String, user: UserProfile) {
        if let Err(e) = self.storage.set(STORAGE_KEY_ACCESS_TOKEN, &token) {
            log::error!("❌ Error guardando token: {}", e);
        }
        match serde_json::to_string(&user) {
            Ok(json) => {
                if let Err(e) = self.storage.set(STORAGE_KEY_USER_DATA, &json) {
                    log::error!("❌ Error guardando perfil: {}", e);
                }
            }
            Err(e) => log::error!("❌ Error serializando perfil: {}", e),
        }

        log::info!("✅ Login: {}", user.email);
        *self.session.borrow_mut() = Some(Session { token, user });
    }

    /// Cierra la sesión: borra ambas claves persistidas y limpia memoria.
    /// Seguro de llamar sin sesión activa. Es también la ruta de limpieza
    /// cuando initialize() detecta estado corrupto.
    pub fn logout(&self) {
        self.storage.remove(STORAGE_KEY_ACCESS_TOKEN);
        self.storage.remove(STORAGE_KEY_USER_DATA);

        if self.session.borrow().is_some() {
            log::info!("👋 Logout");
        }
        *self.session.borrow_mut() = None;
    }

    /// Lectura pura del estado en memoria
    pub fn current(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.session.borrow().as_ref().map(|s| s.token.clone())
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.session.borrow().as_ref().map(|s| s.user.clone())
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.borrow().is_some()
    }

    /// True solo durante la restauración inicial, luego false para siempre
    pub fn is_initializing(&self) -> bool {
        *self.initializing.borrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;
    use crate::session::storage::MemorySessionStorage;

    fn profile() -> UserProfile {
        UserProfile {
            id: "u1".to_string(),
            email: "a@b.com".to_string(),
            full_name: "A B".to_string(),
            role: UserRole::Consumer,
            phone_number: None,
            address: None,
            business_name: None,
        }
    }

    fn manager() -> (SessionManager<MemorySessionStorage>, MemorySessionStorage) {
        let storage = MemorySessionStorage::new();
        (SessionManager::new(storage.clone()), storage)
    }

    #[test]
    fn login_deja_sesion_y_storage_consistentes() {
        let (manager, storage) = manager();

        manager.login("tok-123".to_string(), profile());

        let session = manager.current().unwrap();
        assert_eq!(session.token, "tok-123");
        assert_eq!(session.user, profile());
        assert!(manager.is_logged_in());
        assert_eq!(manager.token().as_deref(), Some("tok-123"));
        assert_eq!(manager.user(), Some(profile()));

        // Ambas claves persistidas: token crudo, perfil como JSON
        assert_eq!(
            storage.get(STORAGE_KEY_ACCESS_TOKEN).as_deref(),
            Some("tok-123")
        );
        let stored: UserProfile =
            serde_json::from_str(&storage.get(STORAGE_KEY_USER_DATA).unwrap()).unwrap();
        assert_eq!(stored, profile());
    }

    #[test]
    fn login_repetido_reemplaza_la_sesion_entera() {
        let (manager, storage) = manager();

        manager.login("tok-1".to_string(), profile());

        let mut other = profile();
        other.id = "u2".to_string();
        other.email = "c@d.com".to_string();
        other.role = UserRole::Seller;
        manager.login("tok-2".to_string(), other.clone());

        let session = manager.current().unwrap();
        assert_eq!(session.token, "tok-2");
        assert_eq!(session.user, other);
        assert_eq!(
            storage.get(STORAGE_KEY_ACCESS_TOKEN).as_deref(),
            Some("tok-2")
        );
    }

    #[test]
    fn logout_limpia_memoria_y_storage() {
        let (manager, storage) = manager();
        manager.login("tok-123".to_string(), profile());

        manager.logout();

        assert!(manager.current().is_none());
        assert!(!manager.is_logged_in());
        assert!(manager.token().is_none());
        assert!(manager.user().is_none());
        assert!(storage.get(STORAGE_KEY_ACCESS_TOKEN).is_none());
        assert!(storage.get(STORAGE_KEY_USER_DATA).is_none());
    }

    #[test]
    fn logout_doble_es_idempotente() {
        let (manager, storage) = manager();
        manager.login("tok-123".to_string(), profile());

        manager.logout();
        manager.logout();

        assert!(manager.current().is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn logout_sin_sesion_no_falla() {
        let (manager, storage) = manager();
        manager.logout();
        assert!(manager.current().is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn initialize_restaura_la_sesion_guardada() {
        let (manager, storage) = manager();
        manager.login("tok-123".to_string(), profile());

        // Nueva pestaña: otro manager sobre el mismo storage
        let restored = SessionManager::new(storage.clone());
        assert!(restored.is_initializing());
        restored.initialize();
        assert!(!restored.is_initializing());

        let session = restored.current().unwrap();
        assert_eq!(session.token, "tok-123");
        assert_eq!(session.user, profile());
    }

    #[test]
    fn initialize_sin_claves_deja_sesion_vacia_y_no_escribe() {
        let (manager, storage) = manager();

        manager.initialize();

        assert!(manager.current().is_none());
        assert!(!manager.is_initializing());
        assert!(storage.is_empty());
    }

    #[test]
    fn initialize_con_solo_token_limpia_todo() {
        let (manager, storage) = manager();
        storage
            .set(STORAGE_KEY_ACCESS_TOKEN, "tok-huerfano")
            .unwrap();

        manager.initialize();

        assert!(manager.current().is_none());
        assert!(storage.get(STORAGE_KEY_ACCESS_TOKEN).is_none());
        assert!(storage.get(STORAGE_KEY_USER_DATA).is_none());
    }

    #[test]
    fn initialize_con_solo_perfil_limpia_todo() {
        let (manager, storage) = manager();
        storage
            .set(
                STORAGE_KEY_USER_DATA,
                &serde_json::to_string(&profile()).unwrap(),
            )
            .unwrap();

        manager.initialize();

        assert!(manager.current().is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn initialize_con_perfil_corrupto_limpia_todo() {
        let (manager, storage) = manager();
        storage.set(STORAGE_KEY_ACCESS_TOKEN, "tok-123").unwrap();
        storage.set(STORAGE_KEY_USER_DATA, "{no es json").unwrap();

        manager.initialize();

        assert!(manager.current().is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn initialize_con_rol_desconocido_limpia_todo() {
        let (manager, storage) = manager();
        storage.set(STORAGE_KEY_ACCESS_TOKEN, "tok-123").unwrap();
        storage
            .set(
                STORAGE_KEY_USER_DATA,
                r#"{"id":"u1","email":"a@b.com","full_name":"A B","role":"superuser"}"#,
            )
            .unwrap();

        manager.initialize();

        assert!(manager.current().is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn flag_de_inicializacion_solo_al_principio() {
        let (manager, _storage) = manager();
        assert!(manager.is_initializing());

        manager.initialize();
        assert!(!manager.is_initializing());

        // Ni login ni logout lo vuelven a activar
        manager.login("tok-123".to_string(), profile());
        assert!(!manager.is_initializing());
        manager.logout();
        assert!(!manager.is_initializing());
    }

    #[test]
    fn clones_comparten_la_misma_sesion() {
        let (manager, _storage) = manager();
        let clone = manager.clone();

        manager.login("tok-123".to_string(), profile());
        assert_eq!(clone.token().as_deref(), Some("tok-123"));

        clone.logout();
        assert!(manager.current().is_none());
    }

    #[test]
    fn escenario_completo_login_logout() {
        let (manager, storage) = manager();

        manager.login("tok-123".to_string(), profile());
        let session = manager.current().unwrap();
        assert_eq!(session.token, "tok-123");
        assert_eq!(session.user.id, "u1");
        assert_eq!(session.user.email, "a@b.com");
        assert_eq!(session.user.full_name, "A B");
        assert_eq!(session.user.role, UserRole::Consumer);

        manager.logout();
        assert!(manager.current().is_none());
        assert!(storage.get(STORAGE_KEY_ACCESS_TOKEN).is_none());
        assert!(storage.get(STORAGE_KEY_USER_DATA).is_none());
    }
}

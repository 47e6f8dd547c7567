use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::utils::{load_raw_from_storage, remove_from_storage, save_raw_to_storage};

/// Backend de almacenamiento clave/valor para la sesión.
///
/// El manager no sabe nada del navegador: en la app el backend es
/// localStorage, en los tests un mapa en memoria.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str);
}

/// Backend real: localStorage del navegador
#[derive(Clone, Default)]
pub struct LocalSessionStorage;

impl SessionStorage for LocalSessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        load_raw_from_storage(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        save_raw_to_storage(key, value)
    }

    fn remove(&self, key: &str) {
        let _ = remove_from_storage(key);
    }
}

/// Backend en memoria para tests
#[derive(Clone, Default)]
pub struct MemorySessionStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Número de entradas guardadas
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStorage for MemorySessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

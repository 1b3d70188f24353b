use std::cell::RefCell;
use std::collections::HashMap;
use web_sys::{window, Storage};

/// Almacenamiento clave/valor con la semántica de Web Storage (valores en crudo)
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove_item(&self, key: &str) -> Result<(), String>;
}

/// `window.sessionStorage`: vive lo que vive la pestaña
pub struct BrowserSessionStorage;

impl BrowserSessionStorage {
    fn storage() -> Result<Storage, String> {
        window()
            .and_then(|w| w.session_storage().ok())
            .flatten()
            .ok_or_else(|| "No se pudo acceder a sessionStorage".to_string())
    }
}

impl KeyValueStorage for BrowserSessionStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| format!("Error guardando '{}' en sessionStorage", key))
    }

    fn remove_item(&self, key: &str) -> Result<(), String> {
        Self::storage()?
            .remove_item(key)
            .map_err(|_| format!("Error eliminando '{}' de sessionStorage", key))
    }
}

/// Backend en memoria (tests y entornos sin `window`)
#[derive(Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: &[(&str, &str)]) -> Self {
        let storage = Self::new();
        for (key, value) in items {
            storage
                .items
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }
        storage
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), String> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

// ============================================================================
// AUTH STATE - Store global de sesión (token + roles) persistido en sessionStorage
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::Session;
use crate::utils::{KeyValueStorage, BrowserSessionStorage, STORAGE_KEY_ROLES, STORAGE_KEY_TOKEN};

/// Store de autenticación.
///
/// Cada campo se muta solo por su par set/clear, que además refleja el cambio
/// en el storage. Los clones comparten estado, storage y subscribers.
#[derive(Clone)]
pub struct AuthState {
    session: Rc<RefCell<Session>>,
    storage: Rc<dyn KeyValueStorage>,
    subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AuthState {
    /// Crear store hidratado desde el storage dado
    pub fn new(storage: Rc<dyn KeyValueStorage>) -> Self {
        let session = Session {
            token: storage.get_item(STORAGE_KEY_TOKEN).unwrap_or_default(),
            roles: storage.get_item(STORAGE_KEY_ROLES).unwrap_or_default(),
        };

        if session.is_authenticated() {
            log::info!("💾 [AUTH] Sesión restaurada desde sessionStorage (roles: {})", session.roles);
        }

        Self {
            session: Rc::new(RefCell::new(session)),
            storage,
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Store respaldado por `window.sessionStorage`
    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserSessionStorage))
    }

    // --- mutations ----------------------------------------------------------

    pub fn set_token(&self, token: &str) {
        self.session.borrow_mut().token = token.to_string();
        self.persist(STORAGE_KEY_TOKEN, Some(token));
        self.notify();
    }

    pub fn clear_token(&self) {
        self.session.borrow_mut().token.clear();
        self.persist(STORAGE_KEY_TOKEN, None);
        self.notify();
    }

    pub fn set_roles(&self, roles: &str) {
        self.session.borrow_mut().roles = roles.to_string();
        self.persist(STORAGE_KEY_ROLES, Some(roles));
        self.notify();
    }

    pub fn clear_roles(&self) {
        self.session.borrow_mut().roles.clear();
        self.persist(STORAGE_KEY_ROLES, None);
        self.notify();
    }

    // --- actions ------------------------------------------------------------

    pub fn login(&self, token: &str, roles: &str) {
        log::info!("🔐 [AUTH] Login (roles: {})", roles);
        self.set_token(token);
        self.set_roles(roles);
    }

    pub fn logout(&self) {
        log::info!("👋 [AUTH] Logout");
        self.clear_token();
        self.clear_roles();
    }

    // --- getters ------------------------------------------------------------

    pub fn is_authenticated(&self) -> bool {
        self.session.borrow().is_authenticated()
    }

    pub fn token(&self) -> String {
        self.session.borrow().token.clone()
    }

    pub fn roles(&self) -> String {
        self.session.borrow().roles.clone()
    }

    pub fn snapshot(&self) -> Session {
        self.session.borrow().clone()
    }

    /// Suscribirse a cambios del store
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    fn notify(&self) {
        // Copia para que un subscriber pueda suscribir otros sin re-borrow
        let subscribers: Vec<_> = self.subscribers.borrow().iter().cloned().collect();
        for callback in subscribers {
            callback();
        }
    }

    fn persist(&self, key: &str, value: Option<&str>) {
        let result = match value {
            Some(v) => self.storage.set_item(key, v),
            None => self.storage.remove_item(key),
        };
        if let Err(e) = result {
            log::error!("❌ [AUTH] {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::MemoryStorage;
    use std::cell::Cell;

    fn store_with(storage: Rc<MemoryStorage>) -> AuthState {
        AuthState::new(storage)
    }

    #[test]
    fn starts_empty_without_stored_session() {
        let auth = store_with(Rc::new(MemoryStorage::new()));
        assert!(!auth.is_authenticated());
        assert_eq!(auth.token(), "");
        assert_eq!(auth.roles(), "");
    }

    #[test]
    fn hydrates_from_storage() {
        let storage = Rc::new(MemoryStorage::with_items(&[("token", "abc"), ("roles", "Admin")]));
        let auth = store_with(storage);
        assert!(auth.is_authenticated());
        assert_eq!(auth.token(), "abc");
        assert_eq!(auth.snapshot(), Session::new("abc", "Admin"));
    }

    #[test]
    fn login_persists_token_and_roles() {
        let storage = Rc::new(MemoryStorage::new());
        let auth = store_with(storage.clone());

        auth.login("jwt-123", "Admin");

        assert!(auth.is_authenticated());
        assert_eq!(storage.get_item("token").as_deref(), Some("jwt-123"));
        assert_eq!(storage.get_item("roles").as_deref(), Some("Admin"));
    }

    #[test]
    fn logout_removes_both_keys() {
        let storage = Rc::new(MemoryStorage::with_items(&[("token", "abc"), ("roles", "Admin")]));
        let auth = store_with(storage.clone());

        auth.logout();

        assert!(!auth.is_authenticated());
        assert_eq!(auth.roles(), "");
        assert!(storage.is_empty());
    }

    #[test]
    fn clones_share_state() {
        let auth = store_with(Rc::new(MemoryStorage::new()));
        let other = auth.clone();
        other.set_token("t");
        assert!(auth.is_authenticated());
    }

    #[test]
    fn every_mutation_notifies_subscribers() {
        let auth = store_with(Rc::new(MemoryStorage::new()));
        let calls = Rc::new(Cell::new(0));
        {
            let calls = calls.clone();
            auth.subscribe(move || calls.set(calls.get() + 1));
        }

        auth.login("t", "Admin");
        auth.logout();

        assert_eq!(calls.get(), 4);
    }
}

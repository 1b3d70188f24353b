// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::router::Route;
use crate::state::AuthState;

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,
    /// Ruta actualmente renderizada (ya pasó por el guard)
    pub route: Rc<RefCell<Route>>,
    pub sidebar_collapsed: Rc<RefCell<bool>>,
}

impl AppState {
    pub fn new(auth: AuthState) -> Self {
        Self {
            auth,
            route: Rc::new(RefCell::new(Route::Login)),
            sidebar_collapsed: Rc::new(RefCell::new(false)),
        }
    }

    pub fn current_route(&self) -> Route {
        *self.route.borrow()
    }

    pub fn set_route(&self, route: Route) {
        *self.route.borrow_mut() = route;
    }

    pub fn toggle_sidebar(&self) {
        let mut collapsed = self.sidebar_collapsed.borrow_mut();
        *collapsed = !*collapsed;
    }
}

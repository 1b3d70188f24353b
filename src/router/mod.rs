// ============================================================================
// ROUTER - Tabla de rutas, guard de navegación y binding con el historial
// ============================================================================

pub mod routes;
pub mod guard;
pub mod history;

pub use routes::{Route, RouteMeta};
pub use guard::{before_each, resolve, NavigationDecision};
pub use history::{current_route, navigate, replace, start};

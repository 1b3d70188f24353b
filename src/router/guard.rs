use crate::models::Session;
use crate::router::Route;

/// Límite de redirecciones encadenadas al resolver una navegación
const MAX_REDIRECTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    Proceed,
    Redirect(Route),
}

/// Guard global ejecutado antes de cada navegación
pub fn before_each(to: Route, session: &Session) -> NavigationDecision {
    let matched = to.matched();

    if !matched.iter().any(|r| r.meta().requires_auth) {
        return NavigationDecision::Proceed;
    }

    if !session.is_authenticated() {
        return NavigationDecision::Redirect(Route::Login);
    }

    let required: Vec<&str> = matched
        .iter()
        .flat_map(|r| r.meta().roles.iter().copied())
        .collect();

    if required.is_empty() || session.has_any_role(&required) {
        NavigationDecision::Proceed
    } else {
        NavigationDecision::Redirect(Route::Home)
    }
}

/// Seguir las redirecciones del guard hasta una ruta aceptada
pub fn resolve(to: Route, session: &Session) -> Route {
    resolve_with(to, |route| before_each(route, session))
}

fn resolve_with<G>(to: Route, guard: G) -> Route
where
    G: Fn(Route) -> NavigationDecision,
{
    let mut target = to;
    for _ in 0..MAX_REDIRECTS {
        match guard(target) {
            NavigationDecision::Proceed => return target,
            NavigationDecision::Redirect(next) if next == target => break,
            NavigationDecision::Redirect(next) => {
                log::info!("🚧 [ROUTER] {} → {}", target.path(), next.path());
                target = next;
            }
        }
    }
    log::warn!("⚠️ [ROUTER] Redirección circular hacia {}, volviendo a login", target.path());
    Route::Login
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anonymous() -> Session {
        Session::default()
    }

    fn admin() -> Session {
        Session::new("jwt", "Admin")
    }

    fn guest() -> Session {
        Session::new("jwt", "Guest")
    }

    #[test]
    fn public_routes_always_proceed() {
        for route in [Route::Login, Route::Register, Route::NotFound] {
            assert_eq!(before_each(route, &anonymous()), NavigationDecision::Proceed);
        }
    }

    #[test]
    fn unauthenticated_home_redirects_to_login() {
        assert_eq!(
            before_each(Route::Home, &anonymous()),
            NavigationDecision::Redirect(Route::Login)
        );
        assert_eq!(
            before_each(Route::User, &anonymous()),
            NavigationDecision::Redirect(Route::Login)
        );
        assert_eq!(resolve(Route::Home, &anonymous()), Route::Login);
    }

    #[test]
    fn missing_admin_role_redirects_gated_child_to_home() {
        for child in Route::children_of(Route::Home) {
            assert_eq!(
                before_each(child, &guest()),
                NavigationDecision::Redirect(Route::Home)
            );
            assert_eq!(resolve(child, &guest()), Route::Home);
        }
    }

    #[test]
    fn admin_reaches_every_child() {
        for child in Route::children_of(Route::Home) {
            assert_eq!(resolve(child, &admin()), child);
        }
    }

    #[test]
    fn roles_match_by_substring() {
        let session = Session::new("jwt", "SuperAdmin");
        assert_eq!(before_each(Route::User, &session), NavigationDecision::Proceed);
    }

    #[test]
    fn authenticated_user_without_roles_can_open_home() {
        assert_eq!(resolve(Route::Home, &Session::new("jwt", "")), Route::Home);
    }

    #[test]
    fn self_redirect_falls_back_to_login() {
        let guard = |route: Route| match route {
            Route::Home => NavigationDecision::Redirect(Route::Home),
            _ => NavigationDecision::Proceed,
        };
        assert_eq!(resolve_with(Route::Home, guard), Route::Login);
    }

    #[test]
    fn redirect_cycle_stops_after_hop_limit() {
        let hops = std::cell::Cell::new(0);
        let guard = |route: Route| {
            hops.set(hops.get() + 1);
            match route {
                Route::User => NavigationDecision::Redirect(Route::Welcome),
                _ => NavigationDecision::Redirect(Route::User),
            }
        };
        assert_eq!(resolve_with(Route::User, guard), Route::Login);
        assert_eq!(hops.get(), MAX_REDIRECTS);
    }

    #[test]
    fn redirect_chain_within_limit_is_followed() {
        let guard = |route: Route| match route {
            Route::User => NavigationDecision::Redirect(Route::Home),
            _ => NavigationDecision::Proceed,
        };
        assert_eq!(resolve_with(Route::User, guard), Route::Home);
    }
}

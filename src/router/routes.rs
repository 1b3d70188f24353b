use crate::utils::ROLE_ADMIN;

/// Metadatos de un registro de ruta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub roles: &'static [&'static str],
}

impl RouteMeta {
    const PUBLIC: RouteMeta = RouteMeta { requires_auth: false, roles: &[] };
    const AUTHENTICATED: RouteMeta = RouteMeta { requires_auth: true, roles: &[] };
    const ADMIN: RouteMeta = RouteMeta { requires_auth: false, roles: &[ROLE_ADMIN] };
}

/// Tabla de rutas del cliente
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    Home,
    User,
    LoginStatistics,
    Welcome,
    FileUpload,
    NotFound,
}

impl Route {
    pub const ALL: [Route; 7] = [
        Route::Login,
        Route::Register,
        Route::Home,
        Route::User,
        Route::LoginStatistics,
        Route::Welcome,
        Route::FileUpload,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Register => "/register",
            Route::Home => "/home",
            Route::User => "/home/user",
            Route::LoginStatistics => "/home/loginStatistics",
            Route::Welcome => "/home/welcome",
            Route::FileUpload => "/home/fileUpload",
            Route::NotFound => "/404",
        }
    }

    /// Nombre del registro (solo las rutas de primer nivel tienen nombre)
    pub fn name(&self) -> Option<&'static str> {
        match self {
            Route::Login => Some("Login"),
            Route::Register => Some("Register"),
            Route::Home => Some("Home"),
            _ => None,
        }
    }

    /// Nombre del registro raíz que casa con la ruta
    pub fn root_name(&self) -> Option<&'static str> {
        self.matched().first().and_then(|root| root.name())
    }

    /// Título que muestra el menú lateral
    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "Iniciar sesión",
            Route::Register => "Registro",
            Route::Home => "Inicio",
            Route::User => "Gestión de usuarios",
            Route::LoginStatistics => "Estadísticas de acceso",
            Route::Welcome => "Bienvenida",
            Route::FileUpload => "Subida de archivos",
            Route::NotFound => "No encontrado",
        }
    }

    pub fn parent(&self) -> Option<Route> {
        match self {
            Route::User | Route::LoginStatistics | Route::Welcome | Route::FileUpload => {
                Some(Route::Home)
            }
            _ => None,
        }
    }

    pub fn meta(&self) -> RouteMeta {
        match self {
            Route::Home => RouteMeta::AUTHENTICATED,
            Route::User | Route::LoginStatistics | Route::Welcome | Route::FileUpload => {
                RouteMeta::ADMIN
            }
            Route::Login | Route::Register | Route::NotFound => RouteMeta::PUBLIC,
        }
    }

    /// Registros que casan con la ruta, de la raíz a la hoja
    pub fn matched(&self) -> Vec<Route> {
        let mut chain = vec![*self];
        let mut current = *self;
        while let Some(parent) = current.parent() {
            chain.push(parent);
            current = parent;
        }
        chain.reverse();
        chain
    }

    pub fn children_of(parent: Route) -> Vec<Route> {
        Route::ALL
            .iter()
            .copied()
            .filter(|r| r.parent() == Some(parent))
            .collect()
    }

    /// Resolver un pathname del navegador (con o sin base path)
    pub fn from_path(path: &str, base_path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let base = base_path.trim_end_matches('/');
        // Solo se quita la base si termina en un límite de segmento
        let relative = match path.strip_prefix(base) {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
            _ => path,
        };

        let normalized = relative.trim_end_matches('/');
        let normalized = if normalized.is_empty() { "/" } else { normalized };
        let normalized = if normalized.starts_with('/') {
            normalized.to_string()
        } else {
            format!("/{}", normalized)
        };

        Route::ALL
            .iter()
            .copied()
            .find(|r| r.path() == normalized)
            .unwrap_or(Route::NotFound)
    }

    /// Pathname completo para history.pushState
    pub fn href(&self, base_path: &str) -> String {
        let base = base_path.trim_end_matches('/');
        format!("{}{}", base, self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_known_path() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path(), "/"), route);
        }
    }

    #[test]
    fn tolerates_trailing_slash_query_and_base_path() {
        assert_eq!(Route::from_path("/home/", "/"), Route::Home);
        assert_eq!(Route::from_path("/home/user?page=2", "/"), Route::User);
        assert_eq!(Route::from_path("/admin/home/welcome", "/admin/"), Route::Welcome);
        assert_eq!(Route::from_path("/admin", "/admin/"), Route::Login);
        assert_eq!(Route::from_path("", "/"), Route::Login);
        assert_eq!(Route::from_path("/nope", "/"), Route::NotFound);
    }

    #[test]
    fn base_path_only_matches_whole_segments() {
        assert_eq!(Route::from_path("/adminhome", "/admin/"), Route::NotFound);
        assert_eq!(Route::from_path("/administration/home", "/admin/"), Route::NotFound);
        assert_eq!(Route::from_path("/admin/home", "/admin/"), Route::Home);
    }

    #[test]
    fn href_prefixes_base_path() {
        assert_eq!(Route::Welcome.href("/"), "/home/welcome");
        assert_eq!(Route::Welcome.href("/admin/"), "/admin/home/welcome");
        assert_eq!(Route::Login.href("/admin/"), "/admin/");
    }

    #[test]
    fn matched_lists_parent_first() {
        assert_eq!(Route::FileUpload.matched(), vec![Route::Home, Route::FileUpload]);
        assert_eq!(Route::Register.matched(), vec![Route::Register]);
    }

    #[test]
    fn children_report_the_name_of_their_root_record() {
        assert_eq!(Route::Login.name(), Some("Login"));
        assert_eq!(Route::Welcome.name(), None);
        assert_eq!(Route::Welcome.root_name(), Some("Home"));
        assert_eq!(Route::Register.root_name(), Some("Register"));
        assert_eq!(Route::NotFound.root_name(), None);
    }

    #[test]
    fn home_has_four_children() {
        assert_eq!(
            Route::children_of(Route::Home),
            vec![Route::User, Route::LoginStatistics, Route::Welcome, Route::FileUpload]
        );
    }
}

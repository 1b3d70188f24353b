/// Claves de sessionStorage
pub const STORAGE_KEY_TOKEN: &str = "token";
pub const STORAGE_KEY_ROLES: &str = "roles";

/// Cabeceras que añade el interceptor de peticiones
pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_ROLES: &str = "Roles";

/// Rol exigido por las rutas hijas de /home
pub const ROLE_ADMIN: &str = "Admin";

/// Id del contenedor raíz en index.html
pub const ROOT_ELEMENT_ID: &str = "app";

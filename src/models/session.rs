use serde::{Deserialize, Serialize};

/// Sesión del cliente: token bearer + cadena de roles
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub roles: String,
}

impl Session {
    pub fn new(token: impl Into<String>, roles: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            roles: roles.into(),
        }
    }

    /// Autenticado ⇔ token no vacío
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    /// La cadena de roles no lleva separadores: la pertenencia es por subcadena
    pub fn has_role(&self, role: &str) -> bool {
        !role.is_empty() && self.roles.contains(role)
    }

    pub fn has_any_role(&self, required: &[&str]) -> bool {
        required.iter().any(|role| self.has_role(role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_is_not_authenticated() {
        assert!(!Session::default().is_authenticated());
        assert!(!Session::new("", "Admin").is_authenticated());
        assert!(Session::new("abc", "").is_authenticated());
    }

    #[test]
    fn role_membership_is_substring_based() {
        let session = Session::new("t", "SuperAdmin");
        assert!(session.has_role("Admin"));
        assert!(session.has_any_role(&["Guest", "Admin"]));
        assert!(!session.has_role("Guest"));
        assert!(!session.has_role(""));
        assert!(!session.has_any_role(&[]));
    }
}

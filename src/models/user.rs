use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub roles: String,
    #[serde(default)]
    pub create_time: Option<String>,
}

/// Página de usuarios (`data` + `total`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPage {
    pub data: Vec<User>,
    pub total: u64,
}

/// Filtros de la lista de usuarios
#[derive(Debug, Clone, PartialEq)]
pub struct UserQuery {
    pub page: u32,
    pub size: u32,
    pub keyword: String,
}

impl Default for UserQuery {
    fn default() -> Self {
        Self {
            page: 1,
            size: 10,
            keyword: String::new(),
        }
    }
}

/// Alta/edición de usuario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub roles: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_page_reads_camel_case_rows() {
        let body = r#"{"data":[{"id":1,"username":"root","roles":"Admin","createTime":"2024-05-01"}],"total":31}"#;
        let page: UserPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.total, 31);
        assert_eq!(page.data[0].create_time.as_deref(), Some("2024-05-01"));
        assert_eq!(page.data[0].email, None);
    }
}

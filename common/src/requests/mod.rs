use serde::{Deserialize, Serialize};

/// Credentials posted to the login endpoint, used by the administrator
/// confirmation challenge.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub nombre_usuario: String,
    pub contrasena: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

/// Query string of the list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListQuery {
    pub page: u32,
    pub per_page: u32,
}

impl ListQuery {
    pub fn to_query_string(&self) -> String {
        format!("page={}&per_page={}", self.page, self.per_page)
    }
}

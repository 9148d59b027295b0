//! Error types surfaced by the engine and its collaborators.
//!
//! `Display` of every variant is the text shown to the user, so backend
//! messages pass through verbatim.

use thiserror::Error;

/// Failure of a call to the resource-access backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Error de conexión: {0}")]
    Transport(String),
    /// The backend answered with a non-success status.
    #[error("{message}")]
    Application { status: u16, message: String },
    /// The response body could not be decoded.
    #[error("Respuesta inválida del servidor: {0}")]
    Decode(String),
}

impl ApiError {
    /// Builds an application error from a response body, preferring the
    /// backend's `{"error": "..."}` (or `msg`) member over the raw text.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                ["error", "msg", "message"]
                    .iter()
                    .find_map(|key| value.get(key)?.as_str().map(str::to_string))
            })
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    format!("Error {status}")
                } else {
                    body.trim().to_string()
                }
            });
        Self::Application { status, message }
    }
}

/// Validation error raised by a resource hook; aborts the save.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct HookError(pub String);

impl HookError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Inconsistent resource configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    #[error("campo duplicado `{field}` en `{resource}`")]
    DuplicateField { resource: String, field: String },
    #[error("el campo `{field}` de `{resource}` es un select sin grupo de enumeración")]
    MissingEnumKey { resource: String, field: String },
    #[error("tamaño de página inválido para `{0}`")]
    InvalidPageSize(String),
    #[error("no hay configuración para {0}")]
    UnknownResource(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_error_member_is_used_verbatim() {
        let err = ApiError::from_response(400, r#"{"error": "placa duplicada"}"#);
        assert_eq!(err.to_string(), "placa duplicada");
    }

    #[test]
    fn plain_bodies_and_empty_bodies_still_produce_a_message() {
        assert_eq!(
            ApiError::from_response(500, "boom").to_string(),
            "boom"
        );
        assert_eq!(ApiError::from_response(404, "").to_string(), "Error 404");
    }
}

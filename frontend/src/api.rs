//! HTTP client for the resource-access backend.
//!
//! Every request carries the session's bearer token when there is one.
//! Non-success responses become [`ApiError::Application`] with the
//! backend's message; network failures become [`ApiError::Transport`].

use std::fmt::Display;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use common::config::RuntimeConfig;
use common::error::ApiError;
use common::model::enums::EnumGroups;
use common::model::item::{Item, ItemId, ListPage, Payload};
use common::requests::{ListQuery, LoginRequest, LoginResponse};
use common::session::CurrentUser;

const ENUMS_PATH: &str = "metadata/enums";
const LOGIN_PATH: &str = "auth/login";
const CURRENT_USER_ID: &str = "me";
const USERS_RESOURCE: &str = "usuarios";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    config: RuntimeConfig,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: RuntimeConfig, token: Option<String>) -> Self {
        Self { config, token }
    }

    /// Same backend, different credentials.
    pub fn with_token(&self, token: &str) -> Self {
        Self {
            config: self.config.clone(),
            token: Some(token.to_string()),
        }
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    pub async fn list(&self, resource: &str, page: u32, page_size: u32) -> Result<ListPage, ApiError> {
        let query = ListQuery {
            page,
            per_page: page_size,
        };
        let url = format!("{}?{}", self.config.endpoint(resource), query.to_query_string());
        let response = success(self.authorize(Request::get(&url)).send().await).await?;
        decode(response).await
    }

    pub async fn get<T: DeserializeOwned>(&self, resource: &str, id: impl Display) -> Result<T, ApiError> {
        let url = self.config.endpoint(&format!("{resource}/{id}"));
        let response = success(self.authorize(Request::get(&url)).send().await).await?;
        decode(response).await
    }

    pub async fn create(&self, resource: &str, payload: &Payload) -> Result<Item, ApiError> {
        let url = self.config.endpoint(resource);
        let response = self.send_json(Request::post(&url), payload).await?;
        decode(response).await
    }

    /// The updated record is not needed; the screen reloads its list.
    pub async fn update(&self, resource: &str, id: ItemId, payload: &Payload) -> Result<(), ApiError> {
        let url = self.config.endpoint(&format!("{resource}/{id}"));
        self.send_json(Request::put(&url), payload).await?;
        Ok(())
    }

    pub async fn delete(&self, resource: &str, id: ItemId) -> Result<(), ApiError> {
        let url = self.config.endpoint(&format!("{resource}/{id}"));
        success(self.authorize(Request::delete(&url)).send().await).await?;
        Ok(())
    }

    pub async fn enums(&self) -> Result<EnumGroups, ApiError> {
        let url = self.config.endpoint(ENUMS_PATH);
        let response = success(self.authorize(Request::get(&url)).send().await).await?;
        decode(response).await
    }

    pub async fn current_user(&self) -> Result<CurrentUser, ApiError> {
        self.get(USERS_RESOURCE, CURRENT_USER_ID).await
    }

    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.config.endpoint(LOGIN_PATH);
        let response = success(Request::post(&url).json(credentials).map_err(encode_error)?.send().await).await?;
        decode(response).await
    }

    /// Logs in with `credentials` and reports whether they belong to an
    /// administrator. The caller's own session is left untouched.
    pub async fn verify_admin(&self, credentials: &LoginRequest) -> Result<bool, ApiError> {
        let LoginResponse { access_token } = self.login(credentials).await?;
        let user = self.with_token(&access_token).current_user().await?;
        Ok(user.role().is_some_and(|role| role.is_admin()))
    }

    async fn send_json<T: Serialize>(&self, builder: RequestBuilder, body: &T) -> Result<Response, ApiError> {
        let request = self.authorize(builder).json(body).map_err(encode_error)?;
        success(request.send().await).await
    }
}

async fn success(result: Result<Response, gloo_net::Error>) -> Result<Response, ApiError> {
    let response = result.map_err(|err| ApiError::Transport(err.to_string()))?;
    if response.ok() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_response(response.status(), &body))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

fn encode_error(err: gloo_net::Error) -> ApiError {
    ApiError::Decode(err.to_string())
}

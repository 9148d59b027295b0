//! Navigation shell: loads the runtime configuration and the acting user,
//! then shows one resource screen at a time, picked from a side menu.

use std::rc::Rc;

use gloo_net::http::Request;
use log::{info, warn};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::config::RuntimeConfig;
use common::error::ApiError;
use common::registry::ResourceRegistry;
use common::session::{CurrentUser, Role, Session};

use crate::api::ApiClient;
use crate::components::crud::CrudComponent;
use crate::helpers::stored_token;

const CONFIG_URL: &str = "/config.json";

/// Menu order; entries missing from the registry are skipped.
const MENU: [&str; 16] = [
    "tickets_pesaje",
    "asignaciones",
    "vehiculos",
    "choferes",
    "empresas_transporte",
    "granjas",
    "galpones",
    "lotes",
    "productos",
    "ubicaciones",
    "personas",
    "direcciones",
    "telefonos",
    "rif",
    "usuarios",
    "roles",
];

pub enum Msg {
    Configured(RuntimeConfig),
    UserLoaded(Result<CurrentUser, ApiError>),
    Select(String),
}

pub struct App {
    registry: Rc<ResourceRegistry>,
    api: Option<ApiClient>,
    session: Option<Session>,
    error: Option<String>,
    selected: String,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let registry = ResourceRegistry::aviges();
        if let Err(err) = registry.validate() {
            log::error!("configuración de recursos inconsistente: {err}");
        }

        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::Configured(load_config().await));
        });

        Self {
            registry: Rc::new(registry),
            api: None,
            session: None,
            error: None,
            selected: MENU[0].to_string(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Configured(config) => {
                info!("API en {}", config.api_url);
                let api = ApiClient::new(config, stored_token());
                let link = ctx.link().clone();
                let client = api.clone();
                spawn_local(async move {
                    link.send_message(Msg::UserLoaded(client.current_user().await));
                });
                self.api = Some(api);
                false
            }
            Msg::UserLoaded(Ok(user)) => {
                let role = user.role().unwrap_or_else(|| {
                    warn!("el usuario actual no tiene rol; se aplican permisos de operador");
                    Role::Operator(0)
                });
                self.session = Some(Session::new(stored_token(), role));
                true
            }
            Msg::UserLoaded(Err(err)) => {
                self.error = Some(format!("No se pudo validar la sesión: {err}"));
                true
            }
            Msg::Select(resource) => {
                if self.selected == resource {
                    return false;
                }
                self.selected = resource;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let menu = MENU.iter().filter_map(|resource| {
            let descriptor = self.registry.get(resource)?;
            let active = self.selected == *resource;
            let resource = resource.to_string();
            Some(html! {
                <li>
                    <button class={classes!("nav-btn", active.then_some("active"))}
                        onclick={link.callback(move |_| Msg::Select(resource.clone()))}>
                        { descriptor.title.clone() }
                    </button>
                </li>
            })
        });

        let content = match (&self.api, &self.session, &self.error) {
            (_, _, Some(error)) => html! { <div class="crud-error">{ error.clone() }</div> },
            (Some(api), Some(session), None) => html! {
                <CrudComponent
                    key={self.selected.clone()}
                    resource={self.selected.clone()}
                    api={api.clone()}
                    registry={self.registry.clone()}
                    permissions={session.permissions_for(&self.selected)}
                />
            },
            _ => html! { <div class="loading">{ "Cargando..." }</div> },
        };

        html! {
            <div class="app-shell">
                <nav class="side-menu">
                    <h1>{ "Aviges" }</h1>
                    <ul>{ for menu }</ul>
                </nav>
                <main id="content-container">{ content }</main>
            </div>
        }
    }
}

/// `/config.json` from the host, or the built-in default when it is not
/// served (e.g. during `trunk serve`).
async fn load_config() -> RuntimeConfig {
    let response = match Request::get(CONFIG_URL).send().await {
        Ok(response) if response.ok() => response,
        Ok(response) => {
            warn!("{CONFIG_URL} respondió {}; se usa la configuración por defecto", response.status());
            return RuntimeConfig::default();
        }
        Err(err) => {
            warn!("{CONFIG_URL} no disponible ({err}); se usa la configuración por defecto");
            return RuntimeConfig::default();
        }
    };
    match response.json::<RuntimeConfig>().await {
        Ok(config) => RuntimeConfig::new(&config.api_url),
        Err(err) => {
            warn!("{CONFIG_URL} inválido ({err}); se usa la configuración por defecto");
            RuntimeConfig::default()
        }
    }
}

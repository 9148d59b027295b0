//! Administrator confirmation dialog.
//!
//! Asks for an administrator's user name and password, logs in with them
//! through the backend, and resolves `true` only when the account has the
//! administrator role. Cancelling resolves `false`. The acting user's own
//! session is never replaced.

use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::error::ApiError;
use common::requests::LoginRequest;

use crate::api::ApiClient;

#[derive(Properties, PartialEq, Clone)]
pub struct AdminChallengeProps {
    pub api: ApiClient,
    pub on_resolved: Callback<bool>,
}

pub enum Msg {
    SetUser(String),
    SetPassword(String),
    Submit,
    Verified(Result<bool, ApiError>),
    Cancel,
}

pub struct AdminChallenge {
    user: String,
    password: String,
    verifying: bool,
    error: Option<String>,
}

/// Above the create/edit modal and the nested modals opened from it.
const CHALLENGE_Z_INDEX: u32 = 15_000;

impl Component for AdminChallenge {
    type Message = Msg;
    type Properties = AdminChallengeProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            user: String::new(),
            password: String::new(),
            verifying: false,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetUser(user) => self.user = user,
            Msg::SetPassword(password) => self.password = password,
            Msg::Submit => {
                if self.verifying || self.user.is_empty() || self.password.is_empty() {
                    return false;
                }
                self.verifying = true;
                self.error = None;
                let api = ctx.props().api.clone();
                let credentials = LoginRequest {
                    nombre_usuario: self.user.clone(),
                    contrasena: self.password.clone(),
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api.verify_admin(&credentials).await;
                    link.send_message(Msg::Verified(result));
                });
            }
            Msg::Verified(result) => {
                self.verifying = false;
                match result {
                    Ok(true) => ctx.props().on_resolved.emit(true),
                    Ok(false) => {
                        self.error = Some("El usuario no tiene rol de administrador".to_string())
                    }
                    Err(err) => {
                        log::warn!("verificación de administrador fallida: {err}");
                        self.error = Some("Credenciales de administrador inválidas".to_string());
                    }
                }
            }
            Msg::Cancel => ctx.props().on_resolved.emit(false),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|event: SubmitEvent| {
            event.prevent_default();
            Msg::Submit
        });

        html! {
            <div class="modal-overlay active" style={format!("z-index:{CHALLENGE_Z_INDEX};")}>
                <div class="modal-container modal-sm">
                    <div class="modal-header">
                        <h3>{ "Autorización de administrador" }</h3>
                    </div>
                    <form class="modal-body" {onsubmit}>
                        <p>{ "Esta modificación requiere la confirmación de un administrador." }</p>
                        <div class="form-group">
                            <label for="admin-user">{ "Usuario" }</label>
                            <input id="admin-user" type="text" value={self.user.clone()} autocomplete="off"
                                oninput={link.callback(|e: InputEvent| Msg::SetUser(e.target_unchecked_into::<HtmlInputElement>().value()))} />
                        </div>
                        <div class="form-group">
                            <label for="admin-password">{ "Contraseña" }</label>
                            <input id="admin-password" type="password" value={self.password.clone()}
                                oninput={link.callback(|e: InputEvent| Msg::SetPassword(e.target_unchecked_into::<HtmlInputElement>().value()))} />
                        </div>
                        <div class="form-error">{ self.error.clone().unwrap_or_default() }</div>
                        <div class="form-actions">
                            <button type="button" class="btn" onclick={link.callback(|_| Msg::Cancel)}>
                                { "Cancelar" }
                            </button>
                            <button type="submit" class="btn btn-primary" disabled={self.verifying}>
                                { if self.verifying { "Verificando..." } else { "Autorizar" } }
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        }
    }
}

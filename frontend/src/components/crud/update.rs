//! Message handling for the screen component.
//!
//! The controller decides; this module only carries its effects out. Each
//! HTTP effect is spawned on the browser's event loop and its outcome comes
//! back as the matching controller message.

use futures_util::future::FutureExt;
use log::debug;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::screen::{Effect, ModalTarget, Msg};

use crate::helpers::{alert, confirm, show_toast};

use super::state::CrudComponent;

const DELETE_QUESTION: &str = "¿Está seguro de eliminar este registro?";

pub fn update(component: &mut CrudComponent, ctx: &Context<CrudComponent>, msg: Msg) -> bool {
    let Ok(screen) = &mut component.screen else {
        return false;
    };
    if matches!(msg, Msg::AdminChallengeResolved(_)) {
        component.challenge_open = false;
    }
    let effects = screen.update(msg);
    run_effects(component, ctx, effects);
    true
}

pub fn run_effects(component: &mut CrudComponent, ctx: &Context<CrudComponent>, effects: Vec<Effect>) {
    for effect in effects {
        debug!("efecto {effect:?}");
        let link = ctx.link().clone();
        let api = component.api.clone();

        match effect {
            Effect::FetchList {
                resource,
                page,
                page_size,
                generation,
            } => {
                let load = component
                    .seams
                    .load_table(&api, &resource, page, page_size)
                    .unwrap_or_else(|| {
                        async move { api.list(&resource, page, page_size).await }.boxed_local()
                    });
                spawn_local(async move {
                    let result = load.await;
                    link.send_message(Msg::ListLoaded {
                        generation,
                        page,
                        result,
                    });
                });
            }
            Effect::FetchRelated {
                target,
                field,
                resource,
                page_size,
            } => spawn_local(async move {
                let result = api.list(&resource, 1, page_size).await;
                link.send_message(Msg::RelatedLoaded {
                    target,
                    field,
                    resource,
                    result,
                });
            }),
            Effect::FetchEnums { target } => spawn_local(async move {
                let result = api.enums().await;
                link.send_message(Msg::EnumsLoaded { target, result });
            }),
            Effect::Create {
                target,
                resource,
                payload,
            } => spawn_local(async move {
                let result = api.create(&resource, &payload).await;
                if result.is_ok() && target == ModalTarget::ROOT {
                    show_toast("Registro guardado correctamente.");
                }
                link.send_message(Msg::Created {
                    target,
                    resource,
                    result,
                });
            }),
            Effect::Update {
                resource,
                id,
                payload,
            } => spawn_local(async move {
                let result = api.update(&resource, id, &payload).await;
                if result.is_ok() {
                    show_toast("Registro actualizado correctamente.");
                }
                link.send_message(Msg::Updated { id, result });
            }),
            Effect::Delete { resource, id } => spawn_local(async move {
                let result = api.delete(&resource, id).await;
                if result.is_ok() {
                    show_toast("Registro eliminado.");
                }
                link.send_message(Msg::Deleted { id, result });
            }),
            Effect::ConfirmDelete { id } => {
                if confirm(DELETE_QUESTION) {
                    link.send_message(Msg::DeleteConfirmed(id));
                }
            }
            Effect::ChallengeAdmin => component.challenge_open = true,
            Effect::Alert(message) => alert(&message),
        }
    }
}

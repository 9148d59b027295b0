//! View rendering for the screen component: header with the "new" trigger,
//! error slot, data table, pagination bar, the modal stack and the
//! administrator challenge.

use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::html::Scope;
use yew::prelude::*;

use common::label::cell_text;
use common::model::item::Item;
use common::screen::{CrudScreen, ModalLevel, Msg};

use crate::components::admin_challenge::AdminChallenge;

use super::form::{modal_view, ModalView};
use super::state::CrudComponent;

pub fn view(component: &CrudComponent, ctx: &Context<CrudComponent>) -> Html {
    let screen = match &component.screen {
        Ok(screen) => screen,
        Err(err) => return html! { <div class="crud-error">{ err.to_string() }</div> },
    };
    if screen.is_denied() {
        return html! {
            <div class="crud-denied">{ screen.error().unwrap_or_default().to_string() }</div>
        };
    }

    let link = ctx.link();
    let ids = &screen.template().ids;

    html! {
        <section class="crud-screen">
            <header class="crud-header">
                <h2>{ screen.template().title.clone() }</h2>
                if screen.can_create() {
                    <button id={ids.new_button.clone()} class="btn btn-primary"
                        disabled={screen.main_modal().is_busy()}
                        onclick={link.callback(|_| Msg::OpenCreate)}>
                        { "Nuevo" }
                    </button>
                }
            </header>
            <div id={ids.error.clone()} class="crud-error">
                { screen.error().unwrap_or_default().to_string() }
            </div>
            { build_table(component, screen, link) }
            { build_pagination(screen, link) }
            { build_modals(component, screen, link) }
            if component.challenge_open {
                <AdminChallenge
                    api={component.api.clone()}
                    on_resolved={link.callback(Msg::AdminChallengeResolved)}
                />
            }
        </section>
    }
}

fn build_table(component: &CrudComponent, screen: &CrudScreen, link: &Scope<CrudComponent>) -> Html {
    let template = screen.template();
    let table = screen.table();
    let column_count = template.columns.len() + 2;

    let body = if !table.loaded {
        html! { <tr><td colspan={column_count.to_string()}>{ "Cargando..." }</td></tr> }
    } else if table.items.is_empty() {
        html! { <tr><td colspan={column_count.to_string()}>{ "Sin registros" }</td></tr> }
    } else {
        table
            .items
            .iter()
            .map(|item| {
                let actions = row_actions(screen, item, link);
                component
                    .seams
                    .render_row(item, screen, actions.clone())
                    .unwrap_or_else(|| default_row(screen, item, actions))
            })
            .collect::<Html>()
    };

    html! {
        <table id={template.ids.table.clone()} class="crud-table">
            <thead>
                <tr>
                    <th>{ "ID" }</th>
                    { for template.columns.iter().map(|c| html! { <th>{ c.label.clone() }</th> }) }
                    <th>{ "Acciones" }</th>
                </tr>
            </thead>
            <tbody>{ body }</tbody>
        </table>
    }
}

fn default_row(screen: &CrudScreen, item: &Item, actions: Html) -> Html {
    let descriptor = screen.descriptor();
    html! {
        <tr>
            <td>{ item.id().map(|id| id.to_string()).unwrap_or_default() }</td>
            {
                for screen.template().columns.iter().map(|column| {
                    let text = descriptor
                        .field(&column.name)
                        .map(|field| cell_text(item, field))
                        .unwrap_or_default();
                    html! { <td>{ text }</td> }
                })
            }
            <td>{ actions }</td>
        </tr>
    }
}

fn row_actions(screen: &CrudScreen, item: &Item, link: &Scope<CrudComponent>) -> Html {
    let Some(id) = item.id() else {
        return html! {};
    };
    let allowed = screen.row_permissions(item);
    html! {
        <>
            if allowed.can_edit {
                <button class="btn btn-sm" title="Editar" onclick={link.callback(move |_| Msg::Edit(id))}>
                    <i class="material-icons">{ "edit" }</i>
                </button>
            }
            if allowed.can_delete {
                <button class="btn btn-sm btn-danger" title="Eliminar" onclick={link.callback(move |_| Msg::Delete(id))}>
                    <i class="material-icons">{ "delete" }</i>
                </button>
            }
        </>
    }
}

/// One click listener on the container; the page comes from the clicked
/// button's `data-page`.
fn build_pagination(screen: &CrudScreen, link: &Scope<CrudComponent>) -> Html {
    let controls = screen.pagination();
    if controls.is_empty() {
        return html! {};
    }
    let onclick = link.batch_callback(|event: MouseEvent| page_from_event(&event).map(Msg::GoToPage));

    html! {
        <div id={screen.template().ids.pagination.clone()} class="pagination" {onclick}>
            {
                for controls.iter().map(|control| html! {
                    <button class="page-btn" data-page={control.page.to_string()} disabled={control.disabled}>
                        { control.page.to_string() }
                    </button>
                })
            }
        </div>
    }
}

fn page_from_event(event: &MouseEvent) -> Option<u32> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let button = target.closest("[data-page]").ok()??;
    if button.has_attribute("disabled") {
        return None;
    }
    button.get_attribute("data-page")?.parse().ok()
}

fn build_modals(component: &CrudComponent, screen: &CrudScreen, link: &Scope<CrudComponent>) -> Html {
    let main = screen.main_modal();
    let resource = &screen.template().resource;

    let root = main.open.then(|| {
        let title = match main.editing {
            Some(_) => format!("Editar - {}", screen.template().title),
            None => format!("Nuevo - {}", screen.template().title),
        };
        modal_view(
            component,
            link,
            ModalView {
                level: ModalLevel::ROOT,
                scope: resource.clone(),
                modal_id: screen.template().ids.modal.clone(),
                form_id: screen.template().ids.form.clone(),
                cancel_id: screen.template().ids.cancel.clone(),
                title,
                form: &main.form,
                error: main.error.as_deref(),
                submitting: main.is_busy(),
            },
        )
    });

    let nested = screen.modal_stack().iter().map(|(level, modal)| {
        let scope = format!("{}-modal-{}", resource, level.0);
        modal_view(
            component,
            link,
            ModalView {
                level,
                modal_id: scope.clone(),
                form_id: format!("{scope}-form"),
                cancel_id: format!("{scope}-cancel"),
                scope,
                title: format!("Nuevo - {}", modal.title()),
                form: &modal.form,
                error: modal.error.as_deref(),
                submitting: modal.is_submitting(),
            },
        )
    });

    html! {
        <>
            { for root }
            { for nested }
        </>
    }
}

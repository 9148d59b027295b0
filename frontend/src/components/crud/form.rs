//! Modal form shared by the level-0 create/edit modal and every nested
//! "create related" modal. Higher levels get a higher `z-index`, so a
//! nested modal is never hidden by the one it was opened from.

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use common::form::{FieldState, ForeignKeyInput, FormField, FormState};
use common::screen::{ModalLevel, Msg};
use common::template::ForeignKeyIds;

use super::state::CrudComponent;

pub struct ModalView<'a> {
    pub level: ModalLevel,
    /// Prefix of the element ids inside this modal.
    pub scope: String,
    pub modal_id: String,
    pub form_id: String,
    pub cancel_id: String,
    pub title: String,
    pub form: &'a FormState,
    pub error: Option<&'a str>,
    pub submitting: bool,
}

pub fn modal_view(component: &CrudComponent, link: &Scope<CrudComponent>, modal: ModalView<'_>) -> Html {
    let level = modal.level;
    let overlay_style = format!("z-index:{};", level.z_index());
    let onsubmit = link.callback(move |event: SubmitEvent| {
        event.prevent_default();
        Msg::Submit(level)
    });

    html! {
        <div id={modal.modal_id.clone()} class="modal-overlay active" style={overlay_style} data-level={level.0.to_string()}>
            <div class="modal-container">
                <div class="modal-header">
                    <h3>{ modal.title.clone() }</h3>
                    <button type="button" class="close-modal-btn" onclick={link.callback(move |_| Msg::Cancel(level))}>
                        { "×" }
                    </button>
                </div>
                <form id={modal.form_id.clone()} class="modal-body" {onsubmit}>
                    {
                        for modal.form.fields().iter().map(|field| {
                            component
                                .seams
                                .render_field(field, level)
                                .unwrap_or_else(|| field_view(field, level, &modal.scope, link))
                        })
                    }
                    <div class="form-error">{ modal.error.unwrap_or_default().to_string() }</div>
                    <div class="form-actions">
                        <button type="button" id={modal.cancel_id.clone()} class="btn"
                            onclick={link.callback(move |_| Msg::Cancel(level))}>
                            { "Cancelar" }
                        </button>
                        <button type="submit" class="btn btn-primary" disabled={modal.submitting}>
                            { if modal.submitting { "Guardando..." } else { "Guardar" } }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

fn field_view(field: &FormField, level: ModalLevel, scope: &str, link: &Scope<CrudComponent>) -> Html {
    let descriptor = &field.descriptor;
    let name = descriptor.name.clone();
    let label_for = match &field.state {
        FieldState::ForeignKey(_) => ForeignKeyIds::new(scope, &name).search,
        _ => format!("{scope}-{name}"),
    };
    let label = html! {
        <label for={label_for}>
            { descriptor.label.clone() }
            if descriptor.required { <span class="required">{ " *" }</span> }
        </label>
    };

    let widget = match &field.state {
        FieldState::ForeignKey(fk) => {
            foreign_key_view(fk, &name, descriptor.required, level, scope, link)
        }
        FieldState::Select { value, options } => {
            let onchange = link.callback(move |event: Event| Msg::Input {
                level,
                field: name.clone(),
                value: event.target_unchecked_into::<HtmlSelectElement>().value(),
            });
            html! {
                <select id={format!("{scope}-{}", descriptor.name)} required={descriptor.required}
                    disabled={descriptor.read_only} {onchange}>
                    {
                        match options {
                            None => html! { <option value="" selected={true}>{ "Cargando..." }</option> },
                            Some(options) => html! {
                                <>
                                    <option value="" selected={value.is_empty()}>{ "Seleccione..." }</option>
                                    {
                                        for options.iter().map(|option| html! {
                                            <option value={option.clone()} selected={option == value}>{ option.clone() }</option>
                                        })
                                    }
                                </>
                            },
                        }
                    }
                </select>
            }
        }
        FieldState::Checkbox(checked) => {
            let onchange = link.callback(move |event: Event| Msg::Toggle {
                level,
                field: name.clone(),
                checked: event.target_unchecked_into::<HtmlInputElement>().checked(),
            });
            return html! {
                <div class="form-group form-check">
                    <input type="checkbox" id={format!("{scope}-{}", descriptor.name)}
                        checked={*checked} disabled={descriptor.read_only} {onchange} />
                    { label }
                </div>
            };
        }
        FieldState::Input(value) => {
            let oninput = link.callback(move |event: InputEvent| Msg::Input {
                level,
                field: name.clone(),
                value: event.target_unchecked_into::<HtmlInputElement>().value(),
            });
            html! {
                <input type={descriptor.field_type.input_type()} id={format!("{scope}-{}", descriptor.name)}
                    value={value.clone()} required={descriptor.required}
                    readonly={descriptor.read_only} {oninput} />
            }
        }
    };

    html! {
        <div class="form-group">
            { label }
            { widget }
        </div>
    }
}

/// Filter box bound to a suggestion list, the hidden id holder, and the
/// "create related" trigger.
fn foreign_key_view(
    fk: &ForeignKeyInput,
    name: &str,
    required: bool,
    level: ModalLevel,
    scope: &str,
    link: &Scope<CrudComponent>,
) -> Html {
    let ids = ForeignKeyIds::new(scope, name);
    let oninput = {
        let name = name.to_string();
        link.callback(move |event: InputEvent| Msg::ForeignKeyInput {
            level,
            field: name.clone(),
            text: event.target_unchecked_into::<HtmlInputElement>().value(),
        })
    };
    let open_related = {
        let name = name.to_string();
        link.callback(move |_| Msg::OpenRelated {
            origin: level,
            field: name.clone(),
        })
    };

    html! {
        <div class="fk-input">
            <input type="text" id={ids.search.clone()} list={ids.list.clone()}
                placeholder="Buscar..." value={fk.text.clone()} autocomplete="off"
                {required} {oninput} />
            <datalist id={ids.list.clone()}>
                { for fk.suggestions.iter().map(|s| html! { <option value={s.label.clone()} /> }) }
            </datalist>
            <input type="hidden" id={format!("{scope}-{name}")} name={name.to_string()}
                value={fk.id.map(|id| id.to_string()).unwrap_or_default()} />
            <button type="button" class="btn btn-sm" title="Crear nuevo" onclick={open_related}>
                { "+" }
            </button>
        </div>
    }
}

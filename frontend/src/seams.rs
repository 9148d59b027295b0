//! Per-resource overrides of the generic screen.
//!
//! A resource may take over how a form field is drawn, how a table row is
//! drawn, or how a page of the table is loaded. Returning `Some` hands that
//! concern entirely to the override; `None` keeps the generic behavior.

use std::rc::Rc;

use futures_util::future::{FutureExt, LocalBoxFuture};
use yew::prelude::*;

use common::error::ApiError;
use common::form::{FieldState, FormField};
use common::label::{cell_text, ABSENT};
use common::model::item::{Item, ListPage};
use common::screen::{CrudScreen, ModalLevel};

use crate::api::ApiClient;
use crate::helpers::format_kg;

pub type TableFuture = LocalBoxFuture<'static, Result<ListPage, ApiError>>;

pub trait ScreenSeams {
    fn render_field(&self, _field: &FormField, _level: ModalLevel) -> Option<Html> {
        None
    }

    /// `actions` holds the row's edit/delete controls, already filtered by
    /// the row permissions.
    fn render_row(&self, _item: &Item, _screen: &CrudScreen, _actions: Html) -> Option<Html> {
        None
    }

    fn load_table(
        &self,
        _api: &ApiClient,
        _resource: &str,
        _page: u32,
        _page_size: u32,
    ) -> Option<TableFuture> {
        None
    }
}

struct GenericSeams;

impl ScreenSeams for GenericSeams {}

const WEIGHT_COLUMNS: [&str; 3] = ["peso_bruto", "peso_tara", "peso_neto"];

/// Weighing tickets: newest first, weights with thousands separators, and
/// the state shown as a badge instead of a disabled select.
struct TicketSeams;

impl ScreenSeams for TicketSeams {
    fn render_field(&self, field: &FormField, _level: ModalLevel) -> Option<Html> {
        if field.descriptor.name != "estado" {
            return None;
        }
        let value = match &field.state {
            FieldState::Select { value, .. } if !value.is_empty() => value.clone(),
            _ => ABSENT.to_string(),
        };
        Some(html! {
            <div class="form-group">
                <label>{ field.descriptor.label.clone() }</label>
                <span class={classes!("badge", format!("badge-{}", value.to_lowercase()))}>{ value }</span>
            </div>
        })
    }

    fn render_row(&self, item: &Item, screen: &CrudScreen, actions: Html) -> Option<Html> {
        let descriptor = screen.descriptor();
        let cells = screen.template().columns.iter().map(|column| {
            let text = descriptor
                .field(&column.name)
                .map(|field| cell_text(item, field))
                .unwrap_or_else(|| ABSENT.to_string());
            if WEIGHT_COLUMNS.contains(&column.name.as_str()) {
                html! { <td class="numeric">{ format_kg(&text) }</td> }
            } else {
                html! { <td>{ text }</td> }
            }
        });
        Some(html! {
            <tr>
                <td>{ item.id().map(|id| id.to_string()).unwrap_or_default() }</td>
                { for cells }
                <td>{ actions }</td>
            </tr>
        })
    }

    fn load_table(
        &self,
        api: &ApiClient,
        resource: &str,
        page: u32,
        page_size: u32,
    ) -> Option<TableFuture> {
        let api = api.clone();
        let resource = resource.to_string();
        Some(
            async move {
                let mut list = api.list(&resource, page, page_size).await?;
                sort_newest_first(&mut list.items);
                Ok(list)
            }
            .boxed_local(),
        )
    }
}

/// ISO timestamps sort lexically; records without one go last.
fn sort_newest_first(items: &mut [Item]) {
    items.sort_by(|a, b| b.text("created_at").cmp(&a.text("created_at")));
}

pub fn seams_for(resource: &str) -> Rc<dyn ScreenSeams> {
    match resource {
        "tickets_pesaje" => Rc::new(TicketSeams),
        _ => Rc::new(GenericSeams),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tickets_sort_newest_first() {
        let mut items: Vec<Item> = [
            json!({"id": 1, "created_at": "2024-03-01T08:00:00"}),
            json!({"id": 2}),
            json!({"id": 3, "created_at": "2024-03-02T08:00:00"}),
        ]
        .into_iter()
        .map(|value| Item::try_from(value).expect("object"))
        .collect();

        sort_newest_first(&mut items);
        let ids: Vec<_> = items.iter().filter_map(Item::id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}

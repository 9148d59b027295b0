//! Generic resource screen: hosts one [`CrudScreen`] controller, renders
//! its state and performs the effects it asks for.
//!
//! - `create` mounts the controller with the permissions handed down by the
//!   shell and runs the initial fetches.
//! - `update` forwards every message to the controller and executes the
//!   returned effects (HTTP calls, confirmation dialogs, the admin challenge).
//! - `view` draws the table, the pagination bar and the modal stack.

use yew::prelude::*;

mod form;
mod props;
mod state;
mod update;
mod view;

pub use props::CrudProps;
pub use state::CrudComponent;

use common::error::DescriptorError;
use common::screen::{CrudPage, Msg};

use crate::seams::seams_for;

impl Component for CrudComponent {
    type Message = Msg;
    type Properties = CrudProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let resource = props.resource.as_str();

        let mut component = CrudComponent {
            screen: Err(DescriptorError::UnknownResource(resource.to_string())),
            api: props.api.clone(),
            seams: seams_for(resource),
            challenge_open: false,
        };

        match props.registry.get(resource) {
            Some(descriptor) => {
                let (screen, effects) =
                    CrudPage::new(descriptor).setup(props.permissions, props.registry.clone());
                component.screen = Ok(screen);
                update::run_effects(&mut component, ctx, effects);
            }
            None => log::error!("no hay configuración para {resource}"),
        }
        component
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
